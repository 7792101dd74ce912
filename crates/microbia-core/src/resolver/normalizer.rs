//! Input normalizer.
//!
//! Derives the search forms the resolution cascade matches against:
//! - `trimmed`: punctuation stripped, whitespace collapsed
//! - `collapsed`: spaces widened to "any characters, then a literal space"
//!   ("S aureus" matches "Staphylococcus aureus")
//! - `wildcarded`: spaces widened to bare "any characters" - looser, the
//!   input's spaces no longer have to line up with spaces in the fullname
//! - `species_suffixed`: trimmed + " species", for genus-only input

use regex::Regex;

/// Strip non-alphanumeric characters (keeping spaces) and collapse runs of
/// whitespace to single spaces.
pub(crate) fn trim_input(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-insensitive pattern anchored start-to-end, with the words of `text`
/// joined by `joiner`. Literal fragments are escaped.
pub(crate) fn anchored_pattern(text: &str, joiner: &str) -> Result<Regex, regex::Error> {
    let parts: Vec<String> = text.split(' ').map(|p| regex::escape(p)).collect();
    Regex::new(&format!("(?i)^{}$", parts.join(joiner)))
}

/// Derived search forms of one input value.
#[derive(Debug)]
pub struct SearchForms {
    /// The input exactly as supplied
    pub raw: String,
    /// Punctuation-stripped, whitespace-collapsed input
    pub trimmed: String,
    /// `trimmed` + " species"
    pub species_suffixed: String,
    collapsed: Regex,
    wildcarded: Regex,
    species_suffixed_loose: Regex,
}

impl SearchForms {
    /// Build the search forms; `None` when the input normalizes to nothing.
    pub fn build(raw: &str) -> Result<Option<Self>, regex::Error> {
        let trimmed = trim_input(raw);
        if trimmed.is_empty() {
            return Ok(None);
        }

        let species_suffixed = format!("{} species", trimmed);
        let collapsed = anchored_pattern(&trimmed, ".* ")?;
        let wildcarded = anchored_pattern(&trimmed, ".*")?;
        let species_suffixed_loose = anchored_pattern(&species_suffixed, ".*")?;

        Ok(Some(Self {
            raw: raw.to_string(),
            trimmed,
            species_suffixed,
            collapsed,
            wildcarded,
            species_suffixed_loose,
        }))
    }

    /// Space-preserving wildcard pattern over the full name.
    pub fn collapsed(&self) -> &Regex {
        &self.collapsed
    }

    /// Loose wildcard pattern over the full name.
    pub fn wildcarded(&self) -> &Regex {
        &self.wildcarded
    }

    /// Loose wildcard pattern over the genus + "species" form.
    pub fn species_suffixed_loose(&self) -> &Regex {
        &self.species_suffixed_loose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_strips_punctuation() {
        assert_eq!(trim_input("S. aureus"), "S aureus");
        assert_eq!(trim_input("  E.\tcoli  "), "E coli");
        assert_eq!(trim_input("Streptococcus (group A)"), "Streptococcus group A");
        assert_eq!(trim_input("!!!"), "");
        assert_eq!(trim_input(""), "");
    }

    #[test]
    fn test_empty_input_yields_no_forms() {
        assert!(SearchForms::build("").unwrap().is_none());
        assert!(SearchForms::build("..,;-").unwrap().is_none());
        assert!(SearchForms::build("   ").unwrap().is_none());
    }

    #[test]
    fn test_collapsed_matches_abbreviated_genus() {
        let forms = SearchForms::build("S aureus").unwrap().unwrap();
        assert!(forms.collapsed().is_match("Staphylococcus aureus"));
        assert!(!forms.collapsed().is_match("Staphylococcus epidermidis"));
        // Anchored: no trailing garbage
        assert!(!forms.collapsed().is_match("Staphylococcus aureus x"));
    }

    #[test]
    fn test_wildcarded_is_looser_than_collapsed() {
        // The input's space falls inside a single word of the fullname, so
        // only the loose form matches.
        let forms = SearchForms::build("Staphyl ococcus aureus").unwrap().unwrap();
        assert!(!forms.collapsed().is_match("Staphylococcus aureus"));
        assert!(forms.wildcarded().is_match("Staphylococcus aureus"));
    }

    #[test]
    fn test_species_suffixed_forms() {
        let forms = SearchForms::build("Klebsiella").unwrap().unwrap();
        assert_eq!(forms.species_suffixed, "Klebsiella species");
        assert!(forms.species_suffixed_loose().is_match("Klebsiella species"));

        let partial = SearchForms::build("staph").unwrap().unwrap();
        assert!(partial.species_suffixed_loose().is_match("Staphylococcus species"));
    }

    #[test]
    fn test_case_insensitive_matching() {
        let forms = SearchForms::build("STAPHYLOCOCCUS AUREUS").unwrap().unwrap();
        assert!(forms.collapsed().is_match("Staphylococcus aureus"));
    }

    #[test]
    fn test_punctuation_only_separators_collapse() {
        let forms = SearchForms::build("a+b (c)").unwrap().unwrap();
        // Punctuation is removed outright, not turned into spaces
        assert_eq!(forms.trimmed, "ab c");
        assert!(forms.wildcarded().is_match("abXYZc"));
    }
}
