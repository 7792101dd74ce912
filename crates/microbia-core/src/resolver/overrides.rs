//! Clinical override table.
//!
//! Fixed literal rules evaluated before any general table search. Each rule
//! short-circuits the rest of the cascade for its input. Evaluation order:
//! disambiguation traps, coagulase free-text, acronyms.

use lazy_static::lazy_static;
use regex::Regex;

use super::normalizer::SearchForms;
use crate::codes;

lazy_static! {
    /// Abbreviated "E" + anything + "coli" is Escherichia coli. Alphabetical
    /// table order would hand it to Entamoeba coli otherwise.
    static ref E_COLI_TRAP: Regex = Regex::new(r"(?i)^e.*coli$").unwrap();
    /// Guard: spelled-out Entamoeba must keep resolving to the amoeba.
    static ref ENTAMOEBA_GUARD: Regex = Regex::new(r"(?i)^enta").unwrap();

    static ref COAGULASE_NEGATIVE_TEXT: Regex =
        Regex::new(r"(?i)coagulase negative|\bcons\b|\bcns\b").unwrap();
    static ref COAGULASE_POSITIVE_TEXT: Regex =
        Regex::new(r"(?i)coagulase positive|\bcops\b").unwrap();
}

/// A disambiguation trap: inputs matching `pattern` (and not `unless`)
/// resolve to a fixed identifier.
struct Trap {
    pattern: &'static Regex,
    unless: Option<&'static Regex>,
    identifier: &'static str,
}

/// Resistance acronyms and other exact-match abbreviations.
const ACRONYMS: &[(&str, &str)] = &[
    ("MRSA", codes::S_AUREUS),
    ("VISA", codes::S_AUREUS),
    ("VRSA", codes::S_AUREUS),
    ("MRSE", codes::S_EPIDERMIDIS),
    ("VRE", codes::ENTEROCOCCUS),
    ("MRPA", codes::P_AERUGINOSA),
    ("PISP", codes::S_PNEUMONIAE),
    ("PRSP", codes::S_PNEUMONIAE),
    ("VISP", codes::S_PNEUMONIAE),
    ("VRSP", codes::S_PNEUMONIAE),
];

/// The fixed override rule set.
pub(crate) struct OverrideTable {
    traps: Vec<Trap>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self {
            traps: vec![Trap {
                pattern: &E_COLI_TRAP,
                unless: Some(&ENTAMOEBA_GUARD),
                identifier: codes::E_COLI,
            }],
        }
    }

    /// Apply the override rules to one input; `Some` short-circuits the
    /// remaining cascade.
    pub fn apply(&self, forms: &SearchForms) -> Option<String> {
        let trimmed = forms.trimmed.as_str();

        for trap in &self.traps {
            if trap.pattern.is_match(trimmed)
                && !trap.unless.is_some_and(|guard| guard.is_match(trimmed))
            {
                return Some(trap.identifier.to_string());
            }
        }

        if COAGULASE_NEGATIVE_TEXT.is_match(trimmed) {
            return Some(codes::CONS.to_string());
        }
        if COAGULASE_POSITIVE_TEXT.is_match(trimmed) {
            return Some(codes::COPS.to_string());
        }

        ACRONYMS
            .iter()
            .find(|(acronym, _)| acronym.eq_ignore_ascii_case(trimmed))
            .map(|(_, identifier)| identifier.to_string())
    }
}
