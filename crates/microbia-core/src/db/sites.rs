//! Site-specific code table operations.

use rusqlite::OptionalExtension;

use super::{Database, DbError, DbResult};

impl Database {
    /// Insert or update a site-specific code mapping.
    ///
    /// The target identifier must exist in the taxonomy table.
    pub fn upsert_site_code(&self, code: &str, identifier: &str) -> DbResult<()> {
        if self.get_taxon(identifier)?.is_none() {
            return Err(DbError::Constraint(format!(
                "site code '{}' targets unknown identifier '{}'",
                code, identifier
            )));
        }

        self.conn.execute(
            r#"
            INSERT INTO site_codes (code, identifier) VALUES (?1, ?2)
            ON CONFLICT(code) DO UPDATE SET identifier = excluded.identifier
            "#,
            [code, identifier],
        )?;
        Ok(())
    }

    /// Look up a site-specific code (case-insensitive).
    pub fn get_site_code(&self, code: &str) -> DbResult<Option<String>> {
        let result = self
            .conn
            .query_row(
                "SELECT identifier FROM site_codes WHERE code = ?",
                [code],
                |row| row.get(0),
            )
            .optional()?;
        Ok(result)
    }

    /// All site code mappings as (code, identifier) pairs.
    pub fn list_site_codes(&self) -> DbResult<Vec<(String, String)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT code, identifier FROM site_codes ORDER BY code")?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

        let mut pairs = Vec::new();
        for row in rows {
            pairs.push(row?);
        }
        Ok(pairs)
    }
}
