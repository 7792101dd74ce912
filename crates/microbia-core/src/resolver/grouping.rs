//! Clinical regrouping of resolved identifiers.
//!
//! Runs as a second pass: base resolution always happens with grouping
//! disabled, then the species-level identifier is reclassified here. Species
//! missing from the fixed tables keep their own identifier.

use crate::codes;
use crate::models::{CoagulaseGrouping, GroupingOptions};
use crate::taxonomy::Taxonomy;

const STAPHYLOCOCCUS_PREFIX: &str = "STA";
const STREPTOCOCCUS_PREFIX: &str = "STC";

/// Coagulase-negative Staphylococcus species.
const COAGULASE_NEGATIVE: &[&str] = &[
    "arlettae",
    "auricularis",
    "capitis",
    "caprae",
    "carnosus",
    "cohnii",
    "condimenti",
    "devriesei",
    "epidermidis",
    "equorum",
    "fleurettii",
    "gallinarum",
    "haemolyticus",
    "hominis",
    "jettensis",
    "kloosii",
    "lentus",
    "lugdunensis",
    "massiliensis",
    "nepalensis",
    "pasteuri",
    "pettenkoferi",
    "piscifermentans",
    "saccharolyticus",
    "saprophyticus",
    "sciuri",
    "simulans",
    "stepanovicii",
    "succinus",
    "vitulinus",
    "warneri",
    "xylosus",
];

/// Coagulase-positive Staphylococcus species besides S. aureus.
const COAGULASE_POSITIVE: &[&str] = &[
    "agnetis",
    "chromogenes",
    "delphini",
    "hyicus",
    "intermedius",
    "lutrae",
    "pseudintermedius",
    "schleiferi",
    "simiae",
];

/// Lancefield serological group of a Streptococcus species, when mapped.
///
/// Some species officially carry more than one group; only the primary
/// clinical assignment is kept here.
fn lancefield_group(species: &str) -> Option<&'static str> {
    match species {
        "pyogenes" => Some(codes::STREP_GROUP_A),
        "agalactiae" => Some(codes::STREP_GROUP_B),
        "equisimilis" | "equi" | "zooepidemicus" | "dysgalactiae" => Some(codes::STREP_GROUP_C),
        "anginosus" => Some(codes::STREP_GROUP_F),
        "sanguis" => Some(codes::STREP_GROUP_H),
        "salivarius" => Some(codes::STREP_GROUP_K),
        _ => None,
    }
}

/// Reclassify a base-resolved identifier according to the grouping flags.
///
/// Identifiers that are not taxonomy rows (group pseudo-codes included) pass
/// through unchanged, as do genus-level rows.
pub(crate) fn reclassify(code: String, taxonomy: &Taxonomy, options: &GroupingOptions) -> String {
    if options.is_none() {
        return code;
    }

    let Some(species) = taxonomy.species_of(&code) else {
        return code;
    };

    if options.coagulase != CoagulaseGrouping::Off && code.starts_with(STAPHYLOCOCCUS_PREFIX) {
        if COAGULASE_NEGATIVE.contains(&species) {
            return codes::CONS.to_string();
        }
        if options.coagulase == CoagulaseGrouping::All
            && (species == "aureus" || COAGULASE_POSITIVE.contains(&species))
        {
            return codes::COPS.to_string();
        }
    }

    if options.lancefield && code.starts_with(STREPTOCOCCUS_PREFIX) {
        if let Some(group) = lancefield_group(species) {
            return group.to_string();
        }
    }

    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn fixture() -> Taxonomy {
        Taxonomy::from_records(data::builtin_taxa())
    }

    fn coagulase(mode: CoagulaseGrouping) -> GroupingOptions {
        GroupingOptions {
            coagulase: mode,
            lancefield: false,
        }
    }

    fn lancefield() -> GroupingOptions {
        GroupingOptions {
            coagulase: CoagulaseGrouping::Off,
            lancefield: true,
        }
    }

    #[test]
    fn test_no_grouping_passes_through() {
        let taxonomy = fixture();
        let opts = GroupingOptions::none();
        assert_eq!(reclassify("STAEPI".into(), &taxonomy, &opts), "STAEPI");
        assert_eq!(reclassify("STCPYO".into(), &taxonomy, &opts), "STCPYO");
    }

    #[test]
    fn test_coagulase_negative_grouping() {
        let taxonomy = fixture();
        let opts = coagulase(CoagulaseGrouping::Negative);

        for code in ["STAEPI", "STAHAE", "STAHOM", "STALUG", "STASAP", "STAWAR"] {
            assert_eq!(reclassify(code.into(), &taxonomy, &opts), codes::CONS);
        }
        // Positives keep their species identifier in Negative mode
        assert_eq!(reclassify("STAAUR".into(), &taxonomy, &opts), "STAAUR");
        assert_eq!(reclassify("STAINT".into(), &taxonomy, &opts), "STAINT");
    }

    #[test]
    fn test_coagulase_all_grouping() {
        let taxonomy = fixture();
        let opts = coagulase(CoagulaseGrouping::All);

        assert_eq!(reclassify("STAEPI".into(), &taxonomy, &opts), codes::CONS);
        assert_eq!(reclassify("STAAUR".into(), &taxonomy, &opts), codes::COPS);
        assert_eq!(reclassify("STAINT".into(), &taxonomy, &opts), codes::COPS);
        assert_eq!(reclassify("STASCH".into(), &taxonomy, &opts), codes::COPS);
    }

    #[test]
    fn test_lancefield_grouping() {
        let taxonomy = fixture();
        let opts = lancefield();

        assert_eq!(reclassify("STCPYO".into(), &taxonomy, &opts), codes::STREP_GROUP_A);
        assert_eq!(reclassify("STCAGA".into(), &taxonomy, &opts), codes::STREP_GROUP_B);
        assert_eq!(reclassify("STCDYS".into(), &taxonomy, &opts), codes::STREP_GROUP_C);
        assert_eq!(reclassify("STCEQU".into(), &taxonomy, &opts), codes::STREP_GROUP_C);
        assert_eq!(reclassify("STCEQS".into(), &taxonomy, &opts), codes::STREP_GROUP_C);
        assert_eq!(reclassify("STCZOO".into(), &taxonomy, &opts), codes::STREP_GROUP_C);
        assert_eq!(reclassify("STCANG".into(), &taxonomy, &opts), codes::STREP_GROUP_F);
        assert_eq!(reclassify("STCSAN".into(), &taxonomy, &opts), codes::STREP_GROUP_H);
        assert_eq!(reclassify("STCSAL".into(), &taxonomy, &opts), codes::STREP_GROUP_K);
    }

    #[test]
    fn test_unmapped_streptococcus_keeps_species_code() {
        let taxonomy = fixture();
        // S. mitis and S. pneumoniae carry no Lancefield assignment here
        assert_eq!(reclassify("STCMIT".into(), &fixture(), &lancefield()), "STCMIT");
        assert_eq!(reclassify("STCPNE".into(), &taxonomy, &lancefield()), "STCPNE");
    }

    #[test]
    fn test_pseudo_codes_and_genus_rows_pass_through() {
        let taxonomy = fixture();
        let opts = GroupingOptions {
            coagulase: CoagulaseGrouping::All,
            lancefield: true,
        };
        // Group pseudo-codes are not taxonomy rows
        assert_eq!(reclassify(codes::CONS.into(), &taxonomy, &opts), codes::CONS);
        // Genus-level rows have no species epithet
        assert_eq!(reclassify("STA".into(), &taxonomy, &opts), "STA");
        // Other genera are untouched
        assert_eq!(reclassify("ESCCOL".into(), &taxonomy, &opts), "ESCCOL");
    }
}
