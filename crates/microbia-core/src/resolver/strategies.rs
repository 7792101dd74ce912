//! Ordered matcher cascade.
//!
//! Each strategy tries to resolve one normalized input against the taxonomy;
//! the resolver walks the list in fixed precedence and stops at the first
//! hit. Adding a rule means inserting a strategy at the right priority, not
//! rewriting branching logic. Every fullname search returns the first match
//! in canonical table order.

use lazy_static::lazy_static;
use regex::Regex;

use super::normalizer::{anchored_pattern, trim_input, SearchForms};
use crate::taxonomy::{SiteCodeTable, Taxonomy};

lazy_static! {
    static ref GRAM_PREFIX: Regex = Regex::new(r"(?i)^gram\b").unwrap();
}

/// One rung of the resolution cascade.
pub(crate) trait MatchStrategy {
    /// Short name, for trace output.
    fn name(&self) -> &'static str;

    fn try_resolve(
        &self,
        forms: &SearchForms,
        taxonomy: &Taxonomy,
        site_codes: Option<&SiteCodeTable>,
    ) -> Result<Option<String>, regex::Error>;
}

/// The default cascade, in precedence order.
pub(crate) fn default_strategies() -> Vec<Box<dyn MatchStrategy>> {
    vec![
        Box::new(CollapsedFullname),
        Box::new(WildcardFullname),
        Box::new(GenusExact),
        Box::new(GenusWildcard),
        Box::new(SiteCode),
        Box::new(SplitBridge),
        Box::new(StainPrefix),
    ]
}

fn found(record: Option<&crate::models::TaxonomicRecord>) -> Option<String> {
    record.map(|r| r.identifier.clone())
}

/// Space-preserving wildcard against fullname.
struct CollapsedFullname;

impl MatchStrategy for CollapsedFullname {
    fn name(&self) -> &'static str {
        "collapsed-fullname"
    }

    fn try_resolve(
        &self,
        forms: &SearchForms,
        taxonomy: &Taxonomy,
        _site_codes: Option<&SiteCodeTable>,
    ) -> Result<Option<String>, regex::Error> {
        Ok(found(taxonomy.find_fullname(forms.collapsed())))
    }
}

/// Loose wildcard against fullname.
struct WildcardFullname;

impl MatchStrategy for WildcardFullname {
    fn name(&self) -> &'static str {
        "wildcard-fullname"
    }

    fn try_resolve(
        &self,
        forms: &SearchForms,
        taxonomy: &Taxonomy,
        _site_codes: Option<&SiteCodeTable>,
    ) -> Result<Option<String>, regex::Error> {
        Ok(found(taxonomy.find_fullname(forms.wildcarded())))
    }
}

/// Exact genus + "species" equality, so a bare genus lands on its own
/// genus-level row instead of an alphabetically earlier accident.
struct GenusExact;

impl MatchStrategy for GenusExact {
    fn name(&self) -> &'static str {
        "genus-exact"
    }

    fn try_resolve(
        &self,
        forms: &SearchForms,
        taxonomy: &Taxonomy,
        _site_codes: Option<&SiteCodeTable>,
    ) -> Result<Option<String>, regex::Error> {
        Ok(found(taxonomy.find_fullname_exact(&forms.species_suffixed)))
    }
}

/// Loose wildcard over the genus + "species" form.
struct GenusWildcard;

impl MatchStrategy for GenusWildcard {
    fn name(&self) -> &'static str {
        "genus-wildcard"
    }

    fn try_resolve(
        &self,
        forms: &SearchForms,
        taxonomy: &Taxonomy,
        _site_codes: Option<&SiteCodeTable>,
    ) -> Result<Option<String>, regex::Error> {
        Ok(found(taxonomy.find_fullname(forms.species_suffixed_loose())))
    }
}

/// Site-specific external code lookup (exact, case-insensitive).
struct SiteCode;

impl MatchStrategy for SiteCode {
    fn name(&self) -> &'static str {
        "site-code"
    }

    fn try_resolve(
        &self,
        forms: &SearchForms,
        _taxonomy: &Taxonomy,
        site_codes: Option<&SiteCodeTable>,
    ) -> Result<Option<String>, regex::Error> {
        let Some(table) = site_codes else {
            return Ok(None);
        };
        Ok(table
            .get(forms.raw.trim())
            .or_else(|| table.get(&forms.trimmed))
            .map(String::from))
    }
}

/// Split the input at its character midpoint and bridge the halves with a
/// wildcard and a space: "klpn" becomes "^kl.* pn", matching "Klebsiella
/// pneumoniae". Anchored at the start only.
struct SplitBridge;

impl MatchStrategy for SplitBridge {
    fn name(&self) -> &'static str {
        "split-bridge"
    }

    fn try_resolve(
        &self,
        forms: &SearchForms,
        taxonomy: &Taxonomy,
        _site_codes: Option<&SiteCodeTable>,
    ) -> Result<Option<String>, regex::Error> {
        let chars: Vec<char> = forms.trimmed.chars().collect();
        if chars.len() < 2 {
            return Ok(None);
        }
        let mid = chars.len() / 2;
        let left: String = chars[..mid].iter().collect();
        let right: String = chars[mid..].iter().collect();

        let pattern = Regex::new(&format!(
            "(?i)^{}.* {}",
            regex::escape(&left),
            regex::escape(right.trim_start())
        ))?;
        Ok(found(taxonomy.find_fullname(&pattern)))
    }
}

/// Drop a leading "Gram" token and retry with a loose wildcard, so staining
/// phrasing ("Gram positive Streptococcus pyogenes") still finds the name.
struct StainPrefix;

impl MatchStrategy for StainPrefix {
    fn name(&self) -> &'static str {
        "stain-prefix"
    }

    fn try_resolve(
        &self,
        forms: &SearchForms,
        taxonomy: &Taxonomy,
        _site_codes: Option<&SiteCodeTable>,
    ) -> Result<Option<String>, regex::Error> {
        if !GRAM_PREFIX.is_match(&forms.trimmed) {
            return Ok(None);
        }
        let stripped = trim_input(&GRAM_PREFIX.replace(&forms.trimmed, ""));
        if stripped.is_empty() {
            return Ok(None);
        }
        let pattern = anchored_pattern(&stripped, ".*")?;
        Ok(found(taxonomy.find_fullname(&pattern)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn fixture() -> Taxonomy {
        Taxonomy::from_records(data::builtin_taxa())
    }

    fn run(strategy: &dyn MatchStrategy, input: &str, taxonomy: &Taxonomy) -> Option<String> {
        let forms = SearchForms::build(input).unwrap().unwrap();
        strategy.try_resolve(&forms, taxonomy, None).unwrap()
    }

    #[test]
    fn test_collapsed_fullname() {
        let taxonomy = fixture();
        assert_eq!(
            run(&CollapsedFullname, "S aureus", &taxonomy).as_deref(),
            Some("STAAUR")
        );
        assert_eq!(
            run(&CollapsedFullname, "Staphylococcus aureus", &taxonomy).as_deref(),
            Some("STAAUR")
        );
        assert!(run(&CollapsedFullname, "stau", &taxonomy).is_none());
    }

    #[test]
    fn test_genus_exact_beats_nothing_else() {
        let taxonomy = fixture();
        assert_eq!(
            run(&GenusExact, "Klebsiella", &taxonomy).as_deref(),
            Some("KLE")
        );
        assert!(run(&GenusExact, "Klebs", &taxonomy).is_none());
    }

    #[test]
    fn test_genus_wildcard_partial() {
        let taxonomy = fixture();
        assert_eq!(
            run(&GenusWildcard, "staph", &taxonomy).as_deref(),
            Some("STA")
        );
    }

    #[test]
    fn test_site_code_lookup() {
        let taxonomy = fixture();
        let mut sites = SiteCodeTable::new();
        sites.insert("eco", "ESCCOL");

        let forms = SearchForms::build("ECO").unwrap().unwrap();
        let result = SiteCode
            .try_resolve(&forms, &taxonomy, Some(&sites))
            .unwrap();
        assert_eq!(result.as_deref(), Some("ESCCOL"));

        let no_table = SiteCode.try_resolve(&forms, &taxonomy, None).unwrap();
        assert!(no_table.is_none());
    }

    #[test]
    fn test_split_bridge_concatenated_abbreviations() {
        let taxonomy = fixture();
        assert_eq!(
            run(&SplitBridge, "klpn", &taxonomy).as_deref(),
            Some("KLEPNE")
        );
        assert_eq!(
            run(&SplitBridge, "stau", &taxonomy).as_deref(),
            Some("STAAUR")
        );
        assert_eq!(
            run(&SplitBridge, "staaur", &taxonomy).as_deref(),
            Some("STAAUR")
        );
        assert!(run(&SplitBridge, "x", &taxonomy).is_none());
    }

    #[test]
    fn test_stain_prefix_stripped() {
        let taxonomy = fixture();
        assert_eq!(
            run(&StainPrefix, "Gram Streptococcus pyogenes", &taxonomy).as_deref(),
            Some("STCPYO")
        );
        // Without a Gram prefix the strategy stays silent
        assert!(run(&StainPrefix, "Streptococcus pyogenes", &taxonomy).is_none());
        // "Gram" alone strips to nothing
        assert!(run(&StainPrefix, "Gram", &taxonomy).is_none());
    }
}
