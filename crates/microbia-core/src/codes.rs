//! Well-known identifiers.
//!
//! Group pseudo-identifiers name clinically defined groups rather than
//! taxonomy rows. They are never present in the reference table but are valid
//! resolution results and pass through the resolver unchanged.

/// Coagulase-negative staphylococci (CoNS).
pub const CONS: &str = "STACNS";
/// Coagulase-positive staphylococci (CoPS).
pub const COPS: &str = "STACPS";

/// Beta-haemolytic streptococci, Lancefield group A.
pub const STREP_GROUP_A: &str = "STCGRA";
/// Lancefield group B.
pub const STREP_GROUP_B: &str = "STCGRB";
/// Lancefield group C.
pub const STREP_GROUP_C: &str = "STCGRC";
/// Lancefield group F.
pub const STREP_GROUP_F: &str = "STCGRF";
/// Lancefield group H.
pub const STREP_GROUP_H: &str = "STCGRH";
/// Lancefield group K.
pub const STREP_GROUP_K: &str = "STCGRK";

/// All group pseudo-identifiers accepted by identifier passthrough.
pub const GROUP_CODES: &[&str] = &[
    CONS,
    COPS,
    STREP_GROUP_A,
    STREP_GROUP_B,
    STREP_GROUP_C,
    STREP_GROUP_F,
    STREP_GROUP_H,
    STREP_GROUP_K,
];

// Species and genus codes targeted by the clinical override table.
pub const S_AUREUS: &str = "STAAUR";
pub const S_EPIDERMIDIS: &str = "STAEPI";
pub const S_PNEUMONIAE: &str = "STCPNE";
pub const E_COLI: &str = "ESCCOL";
pub const ENTEROCOCCUS: &str = "ENC";
pub const P_AERUGINOSA: &str = "PSEAER";

/// Whether `code` names a clinically defined group rather than a taxonomy row.
pub fn is_group_code(code: &str) -> bool {
    GROUP_CODES.iter().any(|c| c.eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_code_detection() {
        assert!(is_group_code("STACNS"));
        assert!(is_group_code("stcgra"));
        assert!(!is_group_code("STAAUR"));
        assert!(!is_group_code(""));
    }
}
