//! Microorganism name resolver.
//!
//! Pipeline: Dedup -> Passthrough -> Overrides -> Matcher Cascade -> Grouping
//!
//! Resolution is best-effort: dirty free-text that matches nothing becomes a
//! missing value and one aggregated warning, never an error. Only structural
//! misuse (zero or more than two input columns, mismatched column lengths)
//! fails hard.

mod grouping;
mod normalizer;
mod overrides;
mod strategies;

pub use normalizer::SearchForms;

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{GroupingOptions, Resolution, UnresolvedInput};
use crate::taxonomy::{SiteCodeTable, Taxonomy};
use overrides::OverrideTable;
use strategies::MatchStrategy;

/// Resolver errors. All of these mark caller programming errors; dirty data
/// never produces one.
#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("no input columns supplied")]
    EmptyInput,

    #[error("expected one or two input columns, got {0}")]
    TooManyColumns(usize),

    #[error("genus and species columns differ in length: {0} vs {1}")]
    ColumnLengthMismatch(usize, usize),
}

pub type ResolverResult<T> = Result<T, ResolverError>;

/// Resolves free-text microorganism descriptions to taxonomy identifiers.
///
/// Borrows an immutable [`Taxonomy`] (and optionally a [`SiteCodeTable`]);
/// every call is pure and deterministic with respect to those tables.
pub struct Resolver<'a> {
    taxonomy: &'a Taxonomy,
    site_codes: Option<&'a SiteCodeTable>,
    overrides: OverrideTable,
    strategies: Vec<Box<dyn MatchStrategy>>,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over a taxonomy.
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        Self {
            taxonomy,
            site_codes: None,
            overrides: OverrideTable::new(),
            strategies: strategies::default_strategies(),
        }
    }

    /// Create a resolver that also consults a site-specific code table.
    pub fn with_site_codes(taxonomy: &'a Taxonomy, site_codes: &'a SiteCodeTable) -> Self {
        Self {
            site_codes: Some(site_codes),
            ..Self::new(taxonomy)
        }
    }

    /// The taxonomy this resolver searches.
    pub fn taxonomy(&self) -> &Taxonomy {
        self.taxonomy
    }

    /// Resolve a single input value.
    pub fn resolve(
        &self,
        input: &str,
        options: &GroupingOptions,
    ) -> ResolverResult<Option<String>> {
        let base = self.resolve_base(input)?;
        Ok(base.map(|code| grouping::reclassify(code, self.taxonomy, options)))
    }

    /// Resolve a collection of inputs, preserving length and order.
    ///
    /// Each distinct raw value is resolved once and broadcast back onto the
    /// full input. Distinct values that fail to resolve are returned in
    /// `unresolved` (first-appearance order) and reported in one aggregated
    /// warning.
    pub fn resolve_all(
        &self,
        inputs: &[&str],
        options: &GroupingOptions,
    ) -> ResolverResult<Resolution> {
        // Dedup key is the raw input. Two raw strings that normalize to the
        // same form are resolved redundantly; the result is identical.
        let mut cache: HashMap<&str, Option<String>> = HashMap::new();
        let mut distinct: Vec<&str> = Vec::new();
        for &raw in inputs {
            if !cache.contains_key(raw) {
                let code = self.resolve(raw, options)?;
                cache.insert(raw, code);
                distinct.push(raw);
            }
        }

        let unresolved: Vec<UnresolvedInput> = distinct
            .iter()
            .filter(|raw| cache[*raw].is_none() && !normalizer::trim_input(raw).is_empty())
            .map(|raw| UnresolvedInput {
                input: (*raw).to_string(),
                suggestion: self.taxonomy.suggest(raw).map(String::from),
            })
            .collect();

        if !unresolved.is_empty() {
            let listed: Vec<String> = unresolved
                .iter()
                .map(|u| match &u.suggestion {
                    Some(s) => format!("'{}' (did you mean '{}'?)", u.input, s),
                    None => format!("'{}'", u.input),
                })
                .collect();
            warn!(count = unresolved.len(), "unresolved inputs: {}", listed.join(", "));
        }

        let codes = inputs.iter().map(|raw| cache[raw].clone()).collect();
        Ok(Resolution { codes, unresolved })
    }

    /// Resolve parallel genus and species columns, concatenated pairwise with
    /// a single space.
    pub fn resolve_pairs(
        &self,
        genus: &[&str],
        species: &[&str],
        options: &GroupingOptions,
    ) -> ResolverResult<Resolution> {
        if genus.len() != species.len() {
            return Err(ResolverError::ColumnLengthMismatch(
                genus.len(),
                species.len(),
            ));
        }
        let combined: Vec<String> = genus
            .iter()
            .zip(species)
            .map(|(g, s)| format!("{} {}", g, s))
            .collect();
        let refs: Vec<&str> = combined.iter().map(String::as_str).collect();
        self.resolve_all(&refs, options)
    }

    /// Resolve one or two input columns; anything else is a hard error.
    pub fn resolve_table(
        &self,
        columns: &[&[&str]],
        options: &GroupingOptions,
    ) -> ResolverResult<Resolution> {
        match columns {
            [] => Err(ResolverError::EmptyInput),
            [single] => self.resolve_all(single, options),
            [genus, species] => self.resolve_pairs(genus, species, options),
            _ => Err(ResolverError::TooManyColumns(columns.len())),
        }
    }

    /// Base resolution of one input, grouping disabled.
    fn resolve_base(&self, raw: &str) -> ResolverResult<Option<String>> {
        let Some(forms) = SearchForms::build(raw)? else {
            return Ok(None);
        };

        // Already-valid identifiers pass through untouched
        if let Some(code) = self
            .canonical_code(raw.trim())
            .or_else(|| self.canonical_code(&forms.trimmed))
        {
            return Ok(Some(code));
        }

        if let Some(code) = self.overrides.apply(&forms) {
            debug!(input = raw, code = %code, "resolved by override");
            return Ok(Some(code));
        }

        for strategy in &self.strategies {
            if let Some(code) = strategy.try_resolve(&forms, self.taxonomy, self.site_codes)? {
                debug!(strategy = strategy.name(), input = raw, code = %code, "resolved");
                return Ok(Some(code));
            }
        }

        Ok(None)
    }

    /// Canonical identifier for a value that already names a taxonomy row or
    /// a group pseudo-code.
    fn canonical_code(&self, value: &str) -> Option<String> {
        if let Some(record) = self.taxonomy.get(value) {
            return Some(record.identifier.clone());
        }
        crate::codes::GROUP_CODES
            .iter()
            .find(|c| c.eq_ignore_ascii_case(value))
            .map(|c| c.to_string())
    }
}
