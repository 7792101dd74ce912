//! Domain models for the microbia system.

mod resolution;
mod taxonomy;

pub use resolution::*;
pub use taxonomy::*;
