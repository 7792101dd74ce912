//! SQLite schema definition.

/// Complete database schema for the microbia reference store.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Reference Taxonomy
-- ============================================================================

CREATE TABLE IF NOT EXISTS taxonomy (
    identifier TEXT PRIMARY KEY,
    fullname TEXT NOT NULL UNIQUE,
    kingdom TEXT NOT NULL DEFAULT '',
    phylum TEXT NOT NULL DEFAULT '',
    class TEXT NOT NULL DEFAULT '',
    "order" TEXT NOT NULL DEFAULT '',
    family TEXT NOT NULL DEFAULT '',
    genus TEXT NOT NULL DEFAULT '',
    species TEXT,
    subspecies TEXT,
    authors TEXT,
    year INTEGER,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Canonical search order is alphabetical by fullname
CREATE INDEX IF NOT EXISTS idx_taxonomy_fullname ON taxonomy(fullname);
CREATE INDEX IF NOT EXISTS idx_taxonomy_genus ON taxonomy(genus);

-- ============================================================================
-- Site-Specific Codes
-- ============================================================================

CREATE TABLE IF NOT EXISTS site_codes (
    code TEXT PRIMARY KEY COLLATE NOCASE,
    identifier TEXT NOT NULL REFERENCES taxonomy(identifier),
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_site_codes_identifier ON site_codes(identifier);

-- ============================================================================
-- Dataset Metadata
-- ============================================================================

CREATE TABLE IF NOT EXISTS dataset_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_valid() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.execute_batch(SCHEMA);
        assert!(result.is_ok(), "Schema should be valid SQL: {:?}", result);
    }

    #[test]
    fn test_fullname_unique() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        conn.execute(
            "INSERT INTO taxonomy (identifier, fullname) VALUES (?, ?)",
            ["STAAUR", "Staphylococcus aureus"],
        )
        .unwrap();

        // Same fullname under a different identifier must be rejected
        let result = conn.execute(
            "INSERT INTO taxonomy (identifier, fullname) VALUES (?, ?)",
            ["STAAU2", "Staphylococcus aureus"],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_site_code_case_insensitive_key() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        conn.execute(
            "INSERT INTO taxonomy (identifier, fullname) VALUES (?, ?)",
            ["ESCCOL", "Escherichia coli"],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO site_codes (code, identifier) VALUES (?, ?)",
            ["eco", "ESCCOL"],
        )
        .unwrap();

        // NOCASE collation makes 'ECO' collide with 'eco'
        let result = conn.execute(
            "INSERT INTO site_codes (code, identifier) VALUES (?, ?)",
            ["ECO", "ESCCOL"],
        );
        assert!(result.is_err());
    }
}
