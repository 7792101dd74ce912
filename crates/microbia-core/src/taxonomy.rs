//! In-memory reference tables.
//!
//! Loaded once from the database layer before any resolution happens, then
//! shared immutably. The resolver borrows these tables; tests inject fixtures
//! through [`Taxonomy::from_records`].

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use crate::codes;
use crate::db::{Database, DbResult};
use crate::models::{TaxonomicRecord, TaxonomySnapshot};

/// Minimum jaro-winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.82;

/// Immutable reference taxonomy, sorted in canonical order.
pub struct Taxonomy {
    /// Rows sorted alphabetically by fullname; every search tie-breaks on
    /// this order (first match wins)
    records: Vec<TaxonomicRecord>,
    by_identifier: HashMap<String, usize>,
    snapshot: Option<TaxonomySnapshot>,
}

impl Taxonomy {
    /// Load the taxonomy and its provenance from the reference store.
    pub fn load(db: &Database) -> DbResult<Self> {
        let records = db.list_taxa()?;
        let snapshot = db.get_snapshot()?;
        let mut taxonomy = Self::from_records(records);
        taxonomy.snapshot = snapshot;
        Ok(taxonomy)
    }

    /// Build a taxonomy directly from records (test fixtures, custom panels).
    pub fn from_records(mut records: Vec<TaxonomicRecord>) -> Self {
        records.sort_by(|a, b| a.fullname.cmp(&b.fullname));
        let by_identifier = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.identifier.to_ascii_uppercase(), i))
            .collect();
        Self {
            records,
            by_identifier,
            snapshot: None,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All rows in canonical order.
    pub fn records(&self) -> &[TaxonomicRecord] {
        &self.records
    }

    /// Provenance of the loaded dataset, when recorded.
    pub fn snapshot(&self) -> Option<&TaxonomySnapshot> {
        self.snapshot.as_ref()
    }

    /// Look up a row by identifier (case-insensitive).
    pub fn get(&self, identifier: &str) -> Option<&TaxonomicRecord> {
        self.by_identifier
            .get(&identifier.to_ascii_uppercase())
            .map(|&i| &self.records[i])
    }

    /// Species epithet of a row, by identifier.
    pub fn species_of(&self, identifier: &str) -> Option<&str> {
        self.get(identifier).and_then(|r| r.species.as_deref())
    }

    /// Whether `code` is a taxonomy row or a recognized group pseudo-code.
    pub fn is_valid_code(&self, code: &str) -> bool {
        self.get(code).is_some() || codes::is_group_code(code)
    }

    /// First row (in canonical order) whose fullname matches the pattern.
    ///
    /// Family-placeholder rows are never matched by name.
    pub fn find_fullname(&self, pattern: &Regex) -> Option<&TaxonomicRecord> {
        self.records
            .iter()
            .filter(|r| !r.is_family_placeholder())
            .find(|r| pattern.is_match(&r.fullname))
    }

    /// First row whose fullname equals `name` (case-insensitive).
    pub fn find_fullname_exact(&self, name: &str) -> Option<&TaxonomicRecord> {
        self.records
            .iter()
            .filter(|r| !r.is_family_placeholder())
            .find(|r| r.fullname.eq_ignore_ascii_case(name))
    }

    /// Closest known fullname to `input`, when close enough to name.
    pub fn suggest(&self, input: &str) -> Option<&str> {
        let input_lower = input.to_lowercase();
        self.records
            .iter()
            .filter(|r| !r.is_family_placeholder())
            .map(|r| {
                let score = strsim::jaro_winkler(&input_lower, &r.fullname.to_lowercase());
                (r.fullname.as_str(), score)
            })
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .map(|(name, _)| name)
    }
}

/// Errors importing site-specific code tables.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Deserialize)]
struct SiteCodeRow {
    code: String,
    identifier: String,
}

/// Site-specific external codes mapped to taxonomy identifiers.
///
/// Keys are matched case-insensitively.
#[derive(Debug, Default, Clone)]
pub struct SiteCodeTable {
    map: HashMap<String, String>,
}

impl SiteCodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all site codes from the reference store.
    pub fn load(db: &Database) -> DbResult<Self> {
        let mut table = Self::new();
        for (code, identifier) in db.list_site_codes()? {
            table.insert(&code, &identifier);
        }
        Ok(table)
    }

    /// Import a `code,identifier` CSV (with header row).
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, ImportError> {
        let mut table = Self::new();
        let mut csv_reader = csv::Reader::from_reader(reader);
        for row in csv_reader.deserialize() {
            let row: SiteCodeRow = row?;
            table.insert(&row.code, &row.identifier);
        }
        Ok(table)
    }

    /// Import a `code,identifier` CSV file.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn insert(&mut self, code: &str, identifier: &str) {
        self.map.insert(code.to_lowercase(), identifier.to_string());
    }

    /// Look up a code (case-insensitive).
    pub fn get(&self, code: &str) -> Option<&str> {
        self.map.get(&code.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
