//! Microbia Core Library
//!
//! Microorganism name resolution for clinical microbiology: free-text or
//! coded species descriptions become canonical taxonomy identifiers that
//! downstream antibiogram tooling can rely on.
//!
//! # Architecture
//!
//! ```text
//! Free text / codes → Dedup → Passthrough → Overrides → Matcher Cascade
//!                                                             │
//!                                                   [identifier or miss]
//!                                                             │
//!                                                  Grouping Classifier
//!                                                  (CoNS/CoPS, Lancefield)
//!                                                             │
//!                                        Broadcast back onto input order
//!                                                             │
//!                              ┌──────────────────────────────┼─────────────┐
//!                              │                              │             │
//!                              ▼                              ▼             ▼
//!                        Rule engines               Resistance rates    Reports
//! ```
//!
//! # Core Principle
//!
//! **Resolution is best-effort.** Analysts feed the pipeline dirty laboratory
//! free text; anything unmatched becomes a missing value plus one aggregated
//! warning, never an error. Only structural misuse fails hard.
//!
//! # Modules
//!
//! - [`db`]: SQLite reference store (taxonomy, site codes, dataset metadata)
//! - [`data`]: builtin clinical reference panel
//! - [`taxonomy`]: immutable in-memory reference tables
//! - [`models`]: domain types (TaxonomicRecord, Resolution, GroupingOptions)
//! - [`resolver`]: the resolution pipeline
//! - [`codes`]: well-known group pseudo-identifiers
//!
//! # Example
//!
//! ```
//! use microbia_core::{Database, GroupingOptions, Resolver, Taxonomy};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::open_in_memory()?;
//! microbia_core::data::seed(&db)?;
//!
//! let taxonomy = Taxonomy::load(&db)?;
//! let resolver = Resolver::new(&taxonomy);
//!
//! let code = resolver.resolve("MRSA", &GroupingOptions::none())?;
//! assert_eq!(code.as_deref(), Some("STAAUR"));
//! # Ok(())
//! # }
//! ```

pub mod codes;
pub mod data;
pub mod db;
pub mod models;
pub mod resolver;
pub mod taxonomy;

// Re-export commonly used types
pub use db::{Database, DbError};
pub use models::{
    CoagulaseGrouping, GroupingOptions, Resolution, TaxonomicRecord, TaxonomySnapshot,
    UnresolvedInput,
};
pub use resolver::{Resolver, ResolverError, SearchForms};
pub use taxonomy::{ImportError, SiteCodeTable, Taxonomy};
