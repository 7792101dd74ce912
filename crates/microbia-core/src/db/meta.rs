//! Dataset metadata operations.

use rusqlite::OptionalExtension;

use super::{Database, DbResult};
use crate::models::TaxonomySnapshot;

const SNAPSHOT_KEY: &str = "snapshot";

impl Database {
    /// Record provenance of the loaded dataset.
    pub fn set_snapshot(&self, snapshot: &TaxonomySnapshot) -> DbResult<()> {
        let value = serde_json::to_string(snapshot)?;
        self.conn.execute(
            r#"
            INSERT INTO dataset_meta (key, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = datetime('now')
            "#,
            [SNAPSHOT_KEY, &value],
        )?;
        Ok(())
    }

    /// Provenance of the loaded dataset, if one was recorded.
    pub fn get_snapshot(&self) -> DbResult<Option<TaxonomySnapshot>> {
        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM dataset_meta WHERE key = ?",
                [SNAPSHOT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        value
            .map(|v| serde_json::from_str(&v).map_err(Into::into))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_roundtrip() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.get_snapshot().unwrap().is_none());

        let snapshot = TaxonomySnapshot {
            source: "builtin".into(),
            version: "0.1.0".into(),
            loaded_at: chrono::Utc::now().to_rfc3339(),
        };
        db.set_snapshot(&snapshot).unwrap();

        let retrieved = db.get_snapshot().unwrap().unwrap();
        assert_eq!(retrieved, snapshot);
    }

    #[test]
    fn test_snapshot_overwrites() {
        let db = Database::open_in_memory().unwrap();
        let mut snapshot = TaxonomySnapshot {
            source: "builtin".into(),
            version: "0.1.0".into(),
            loaded_at: chrono::Utc::now().to_rfc3339(),
        };
        db.set_snapshot(&snapshot).unwrap();

        snapshot.version = "0.2.0".into();
        db.set_snapshot(&snapshot).unwrap();

        assert_eq!(db.get_snapshot().unwrap().unwrap().version, "0.2.0");
    }
}
