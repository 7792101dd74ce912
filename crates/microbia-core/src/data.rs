//! Builtin reference dataset.
//!
//! A representative clinical panel: the staphylococci and streptococci needed
//! for coagulase and Lancefield grouping, common Enterobacteriaceae and
//! non-fermenters, plus the classic free-text traps (Entamoeba coli). Sites
//! with a full laboratory dictionary replace or extend this panel through the
//! database layer.

use chrono::Utc;

use crate::db::{Database, DbResult};
use crate::models::{TaxonomicRecord, TaxonomySnapshot};

/// Name of the builtin dataset.
pub const DATASET_SOURCE: &str = "microbia-builtin";
/// Version of the builtin dataset.
pub const DATASET_VERSION: &str = "2025.2";

struct Lineage {
    kingdom: &'static str,
    phylum: &'static str,
    class: &'static str,
    order: &'static str,
    family: &'static str,
}

const STAPHYLOCOCCACEAE: Lineage = Lineage {
    kingdom: "Bacteria",
    phylum: "Firmicutes",
    class: "Bacilli",
    order: "Bacillales",
    family: "Staphylococcaceae",
};

const STREPTOCOCCACEAE: Lineage = Lineage {
    kingdom: "Bacteria",
    phylum: "Firmicutes",
    class: "Bacilli",
    order: "Lactobacillales",
    family: "Streptococcaceae",
};

const ENTEROCOCCACEAE: Lineage = Lineage {
    kingdom: "Bacteria",
    phylum: "Firmicutes",
    class: "Bacilli",
    order: "Lactobacillales",
    family: "Enterococcaceae",
};

const ENTEROBACTERIACEAE: Lineage = Lineage {
    kingdom: "Bacteria",
    phylum: "Proteobacteria",
    class: "Gammaproteobacteria",
    order: "Enterobacterales",
    family: "Enterobacteriaceae",
};

const PSEUDOMONADACEAE: Lineage = Lineage {
    kingdom: "Bacteria",
    phylum: "Proteobacteria",
    class: "Gammaproteobacteria",
    order: "Pseudomonadales",
    family: "Pseudomonadaceae",
};

const MORAXELLACEAE: Lineage = Lineage {
    kingdom: "Bacteria",
    phylum: "Proteobacteria",
    class: "Gammaproteobacteria",
    order: "Pseudomonadales",
    family: "Moraxellaceae",
};

const PASTEURELLACEAE: Lineage = Lineage {
    kingdom: "Bacteria",
    phylum: "Proteobacteria",
    class: "Gammaproteobacteria",
    order: "Pasteurellales",
    family: "Pasteurellaceae",
};

const ENTAMOEBIDAE: Lineage = Lineage {
    kingdom: "Protozoa",
    phylum: "Amoebozoa",
    class: "Archamoebae",
    order: "Amoebida",
    family: "Entamoebidae",
};

const DEBARYOMYCETACEAE: Lineage = Lineage {
    kingdom: "Fungi",
    phylum: "Ascomycota",
    class: "Saccharomycetes",
    order: "Saccharomycetales",
    family: "Debaryomycetaceae",
};

fn species(
    lineage: &Lineage,
    identifier: &str,
    genus: &str,
    epithet: &str,
    authors: &str,
    year: i32,
) -> TaxonomicRecord {
    TaxonomicRecord {
        identifier: identifier.into(),
        fullname: format!("{} {}", genus, epithet),
        kingdom: lineage.kingdom.into(),
        phylum: lineage.phylum.into(),
        class: lineage.class.into(),
        order: lineage.order.into(),
        family: lineage.family.into(),
        genus: genus.into(),
        species: Some(epithet.into()),
        subspecies: None,
        authors: Some(authors.into()),
        year: Some(year),
    }
}

fn genus(lineage: &Lineage, identifier: &str, genus: &str) -> TaxonomicRecord {
    TaxonomicRecord {
        identifier: identifier.into(),
        fullname: format!("{} species", genus),
        kingdom: lineage.kingdom.into(),
        phylum: lineage.phylum.into(),
        class: lineage.class.into(),
        order: lineage.order.into(),
        family: lineage.family.into(),
        genus: genus.into(),
        species: None,
        subspecies: None,
        authors: None,
        year: None,
    }
}

fn family_placeholder(lineage: &Lineage, identifier: &str) -> TaxonomicRecord {
    TaxonomicRecord {
        identifier: identifier.into(),
        fullname: format!("{} (unidentified)", lineage.family),
        kingdom: lineage.kingdom.into(),
        phylum: lineage.phylum.into(),
        class: lineage.class.into(),
        order: lineage.order.into(),
        family: lineage.family.into(),
        genus: String::new(),
        species: None,
        subspecies: None,
        authors: None,
        year: None,
    }
}

/// The builtin clinical reference panel.
pub fn builtin_taxa() -> Vec<TaxonomicRecord> {
    let mut taxa = Vec::new();

    // Staphylococci
    taxa.push(genus(&STAPHYLOCOCCACEAE, "STA", "Staphylococcus"));
    for (id, epithet, authors, year) in [
        ("STAAUR", "aureus", "Rosenbach", 1884),
        ("STACAP", "capitis", "Kloos and Schleifer", 1975),
        ("STAEPI", "epidermidis", "(Winslow and Winslow) Evans", 1916),
        ("STAHAE", "haemolyticus", "Schleifer and Kloos", 1975),
        ("STAHOM", "hominis", "Kloos and Schleifer", 1975),
        ("STAINT", "intermedius", "Hajek", 1976),
        ("STALUG", "lugdunensis", "Freney et al.", 1988),
        ("STASAP", "saprophyticus", "(Fairbrother) Shaw et al.", 1951),
        ("STASCH", "schleiferi", "Freney et al.", 1988),
        ("STASIM", "simulans", "Kloos and Schleifer", 1975),
        ("STAWAR", "warneri", "Kloos and Schleifer", 1975),
    ] {
        taxa.push(species(
            &STAPHYLOCOCCACEAE,
            id,
            "Staphylococcus",
            epithet,
            authors,
            year,
        ));
    }

    // Streptococci
    taxa.push(genus(&STREPTOCOCCACEAE, "STC", "Streptococcus"));
    for (id, epithet, authors, year) in [
        ("STCAGA", "agalactiae", "Lehmann and Neumann", 1896),
        ("STCANG", "anginosus", "(Andrewes and Horder) Smith and Sherman", 1938),
        ("STCDYS", "dysgalactiae", "(Diernhofer) Garvie et al.", 1983),
        ("STCEQU", "equi", "Sand and Jensen", 1888),
        ("STCEQS", "equisimilis", "Frost and Engelbrecht", 1936),
        ("STCMIT", "mitis", "Andrewes and Horder", 1906),
        ("STCPNE", "pneumoniae", "(Klein) Chester", 1901),
        ("STCPYO", "pyogenes", "Rosenbach", 1884),
        ("STCSAL", "salivarius", "Andrewes and Horder", 1906),
        ("STCSAN", "sanguis", "White and Niven", 1946),
        ("STCZOO", "zooepidemicus", "(ex Frost) Farrow and Collins", 1985),
    ] {
        taxa.push(species(
            &STREPTOCOCCACEAE,
            id,
            "Streptococcus",
            epithet,
            authors,
            year,
        ));
    }

    // Enterococci
    taxa.push(genus(&ENTEROCOCCACEAE, "ENC", "Enterococcus"));
    taxa.push(species(
        &ENTEROCOCCACEAE,
        "ENCFAE",
        "Enterococcus",
        "faecalis",
        "(Andrewes and Horder) Schleifer and Kilpper-Balz",
        1984,
    ));
    taxa.push(species(
        &ENTEROCOCCACEAE,
        "ENCFAC",
        "Enterococcus",
        "faecium",
        "(Orla-Jensen) Schleifer and Kilpper-Balz",
        1984,
    ));

    // Enterobacteriaceae
    taxa.push(family_placeholder(&ENTEROBACTERIACEAE, "F_ENTRBC"));
    taxa.push(genus(&ENTEROBACTERIACEAE, "ESC", "Escherichia"));
    taxa.push(species(
        &ENTEROBACTERIACEAE,
        "ESCCOL",
        "Escherichia",
        "coli",
        "(Migula) Castellani and Chalmers",
        1919,
    ));
    taxa.push(genus(&ENTEROBACTERIACEAE, "KLE", "Klebsiella"));
    taxa.push(species(
        &ENTEROBACTERIACEAE,
        "KLEOXY",
        "Klebsiella",
        "oxytoca",
        "(Flugge) Lautrop",
        1956,
    ));
    taxa.push(species(
        &ENTEROBACTERIACEAE,
        "KLEPNE",
        "Klebsiella",
        "pneumoniae",
        "(Schroeter) Trevisan",
        1887,
    ));
    taxa.push(genus(&ENTEROBACTERIACEAE, "EBC", "Enterobacter"));
    taxa.push(species(
        &ENTEROBACTERIACEAE,
        "EBCCLO",
        "Enterobacter",
        "cloacae",
        "(Jordan) Hormaeche and Edwards",
        1960,
    ));
    taxa.push(genus(&ENTEROBACTERIACEAE, "PRT", "Proteus"));
    taxa.push(species(
        &ENTEROBACTERIACEAE,
        "PRTMIR",
        "Proteus",
        "mirabilis",
        "Hauser",
        1885,
    ));
    taxa.push(genus(&ENTEROBACTERIACEAE, "SER", "Serratia"));
    taxa.push(species(
        &ENTEROBACTERIACEAE,
        "SERMAR",
        "Serratia",
        "marcescens",
        "Bizio",
        1823,
    ));
    taxa.push(genus(&ENTEROBACTERIACEAE, "SAL", "Salmonella"));
    taxa.push(species(
        &ENTEROBACTERIACEAE,
        "SALENT",
        "Salmonella",
        "enterica",
        "(ex Kauffmann and Edwards) Le Minor and Popoff",
        1987,
    ));

    // Non-fermenters and other gram-negatives
    taxa.push(genus(&PSEUDOMONADACEAE, "PSE", "Pseudomonas"));
    taxa.push(species(
        &PSEUDOMONADACEAE,
        "PSEAER",
        "Pseudomonas",
        "aeruginosa",
        "(Schroeter) Migula",
        1900,
    ));
    taxa.push(genus(&MORAXELLACEAE, "ACI", "Acinetobacter"));
    taxa.push(species(
        &MORAXELLACEAE,
        "ACIBAU",
        "Acinetobacter",
        "baumannii",
        "Bouvet and Grimont",
        1986,
    ));
    taxa.push(genus(&MORAXELLACEAE, "MOR", "Moraxella"));
    taxa.push(species(
        &MORAXELLACEAE,
        "MORCAT",
        "Moraxella",
        "catarrhalis",
        "(Frosch and Kolle) Henriksen and Bovre",
        1968,
    ));
    taxa.push(genus(&PASTEURELLACEAE, "HAE", "Haemophilus"));
    taxa.push(species(
        &PASTEURELLACEAE,
        "HAEINF",
        "Haemophilus",
        "influenzae",
        "(Lehmann and Neumann) Winslow et al.",
        1917,
    ));

    // The classic free-text trap: Entamoeba coli is not E. coli
    taxa.push(genus(&ENTAMOEBIDAE, "ETM", "Entamoeba"));
    taxa.push(species(
        &ENTAMOEBIDAE,
        "ETMCOL",
        "Entamoeba",
        "coli",
        "(Grassi) Casagrandi and Barbagallo",
        1895,
    ));
    taxa.push(species(
        &ENTAMOEBIDAE,
        "ETMHIS",
        "Entamoeba",
        "histolytica",
        "Schaudinn",
        1903,
    ));

    // Yeasts
    taxa.push(genus(&DEBARYOMYCETACEAE, "CAN", "Candida"));
    taxa.push(species(
        &DEBARYOMYCETACEAE,
        "CANALB",
        "Candida",
        "albicans",
        "(Robin) Berkhout",
        1923,
    ));

    taxa
}

/// Seed a database with the builtin panel and record its provenance.
pub fn seed(db: &Database) -> DbResult<TaxonomySnapshot> {
    for record in builtin_taxa() {
        db.upsert_taxon(&record)?;
    }
    let snapshot = TaxonomySnapshot {
        source: DATASET_SOURCE.into(),
        version: DATASET_VERSION.into(),
        loaded_at: Utc::now().to_rfc3339(),
    };
    db.set_snapshot(&snapshot)?;
    Ok(snapshot)
}
