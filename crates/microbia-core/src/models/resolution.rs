//! Resolution output models.

use serde::{Deserialize, Serialize};

/// How Staphylococcus species are regrouped after base resolution.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum CoagulaseGrouping {
    /// Keep species-level identifiers
    #[default]
    Off,
    /// Map coagulase-negative species to the CoNS group code
    Negative,
    /// Map negatives to CoNS and positives (incl. S. aureus) to CoPS
    All,
}

/// Per-call grouping flags for the resolution pipeline.
///
/// Grouping is a second pass: base resolution always runs with both flags off
/// and the resulting species-level identifier is then reclassified.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupingOptions {
    /// Coagulase-status regrouping of staphylococci
    pub coagulase: CoagulaseGrouping,
    /// Lancefield regrouping of streptococci
    pub lancefield: bool,
}

impl GroupingOptions {
    /// No regrouping at all.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        self.coagulase == CoagulaseGrouping::Off && !self.lancefield
    }
}

/// A distinct input value that failed to resolve.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnresolvedInput {
    /// The raw input as supplied by the caller
    pub input: String,
    /// Closest known fullname, when one is close enough to be worth naming
    pub suggestion: Option<String>,
}

/// Result of a batch resolution call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resolution {
    /// One entry per input, in input order; `None` marks an unresolved value
    pub codes: Vec<Option<String>>,
    /// Distinct failing inputs, in first-appearance order
    pub unresolved: Vec<UnresolvedInput>,
}

impl Resolution {
    /// Number of inputs that resolved to an identifier.
    pub fn resolved_count(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    /// Whether every input resolved.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty() && self.codes.iter().all(|c| c.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_options_default_is_off() {
        let opts = GroupingOptions::default();
        assert!(opts.is_none());
        assert_eq!(opts.coagulase, CoagulaseGrouping::Off);
        assert!(!opts.lancefield);
    }

    #[test]
    fn test_resolution_counts() {
        let res = Resolution {
            codes: vec![Some("STAAUR".into()), None, Some("ESCCOL".into())],
            unresolved: vec![UnresolvedInput {
                input: "garbage".into(),
                suggestion: None,
            }],
        };
        assert_eq!(res.resolved_count(), 2);
        assert!(!res.is_complete());
    }
}
