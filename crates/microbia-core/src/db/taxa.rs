//! Taxonomy table operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};
use crate::models::TaxonomicRecord;

impl Database {
    /// Insert or update a taxonomy row.
    pub fn upsert_taxon(&self, record: &TaxonomicRecord) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO taxonomy (
                identifier, fullname, kingdom, phylum, class, "order", family,
                genus, species, subspecies, authors, year, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, datetime('now'))
            ON CONFLICT(identifier) DO UPDATE SET
                fullname = excluded.fullname,
                kingdom = excluded.kingdom,
                phylum = excluded.phylum,
                class = excluded.class,
                "order" = excluded."order",
                family = excluded.family,
                genus = excluded.genus,
                species = excluded.species,
                subspecies = excluded.subspecies,
                authors = excluded.authors,
                year = excluded.year,
                updated_at = datetime('now')
            "#,
            params![
                record.identifier,
                record.fullname,
                record.kingdom,
                record.phylum,
                record.class,
                record.order,
                record.family,
                record.genus,
                record.species,
                record.subspecies,
                record.authors,
                record.year,
            ],
        )?;
        Ok(())
    }

    /// Get a taxonomy row by identifier.
    pub fn get_taxon(&self, identifier: &str) -> DbResult<Option<TaxonomicRecord>> {
        let result = self
            .conn
            .query_row(
                r#"
                SELECT identifier, fullname, kingdom, phylum, class, "order", family,
                       genus, species, subspecies, authors, year
                FROM taxonomy
                WHERE identifier = ?
                "#,
                [identifier],
                map_taxon_row,
            )
            .optional()?;
        Ok(result)
    }

    /// All taxonomy rows in canonical order (alphabetical by fullname).
    ///
    /// Every name search tie-breaks on this order: the first matching row wins.
    pub fn list_taxa(&self) -> DbResult<Vec<TaxonomicRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT identifier, fullname, kingdom, phylum, class, "order", family,
                   genus, species, subspecies, authors, year
            FROM taxonomy
            ORDER BY fullname
            "#,
        )?;

        let rows = stmt.query_map([], map_taxon_row)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Number of taxonomy rows.
    pub fn count_taxa(&self) -> DbResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM taxonomy", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn map_taxon_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<TaxonomicRecord> {
    Ok(TaxonomicRecord {
        identifier: row.get(0)?,
        fullname: row.get(1)?,
        kingdom: row.get(2)?,
        phylum: row.get(3)?,
        class: row.get(4)?,
        order: row.get(5)?,
        family: row.get(6)?,
        genus: row.get(7)?,
        species: row.get(8)?,
        subspecies: row.get(9)?,
        authors: row.get(10)?,
        year: row.get(11)?,
    })
}
