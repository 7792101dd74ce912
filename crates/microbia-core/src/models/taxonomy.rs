//! Reference taxonomy models.

use serde::{Deserialize, Serialize};

/// Prefix of synthetic family-placeholder identifiers.
///
/// Placeholder rows stand for "unidentified member of this family". They are
/// excluded from fullname search but remain valid resolution targets through
/// overrides and site-specific codes.
pub const FAMILY_PLACEHOLDER_PREFIX: &str = "F_";

/// A single row of the reference taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxonomicRecord {
    /// Short fixed-format code - unique identifier
    pub identifier: String,
    /// Genus + species, unique across the table
    pub fullname: String,
    /// Taxonomic kingdom
    pub kingdom: String,
    /// Taxonomic phylum
    pub phylum: String,
    /// Taxonomic class
    pub class: String,
    /// Taxonomic order
    pub order: String,
    /// Taxonomic family
    pub family: String,
    /// Genus name
    pub genus: String,
    /// Species epithet; absent on genus-level and placeholder rows
    pub species: Option<String>,
    /// Subspecies epithet, if any
    pub subspecies: Option<String>,
    /// Naming authority
    pub authors: Option<String>,
    /// Year of first valid description
    pub year: Option<i32>,
}

impl TaxonomicRecord {
    /// Create a record with required fields; ranks default to empty.
    pub fn new(identifier: String, fullname: String) -> Self {
        Self {
            identifier,
            fullname,
            kingdom: String::new(),
            phylum: String::new(),
            class: String::new(),
            order: String::new(),
            family: String::new(),
            genus: String::new(),
            species: None,
            subspecies: None,
            authors: None,
            year: None,
        }
    }

    /// Whether this is a synthetic family-placeholder row.
    pub fn is_family_placeholder(&self) -> bool {
        self.identifier.starts_with(FAMILY_PLACEHOLDER_PREFIX)
    }

    /// Whether this is a genus-level "species" row (no species epithet).
    pub fn is_genus_level(&self) -> bool {
        self.species.is_none() && !self.is_family_placeholder()
    }
}

/// Provenance of a loaded taxonomy dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxonomySnapshot {
    /// Name of the originating dataset
    pub source: String,
    /// Dataset version string
    pub version: String,
    /// RFC 3339 timestamp of when the dataset was loaded into the store
    pub loaded_at: String,
}
