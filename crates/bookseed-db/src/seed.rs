//! Reference data and the seeding transaction.
//!
//! Inserts use INSERT OR IGNORE so re-runs are idempotent: rows whose id is
//! already present are preserved as they are, whatever their contents.

use bookseed_common::{Error, Result};
use rusqlite::Connection;

use crate::models::{Author, Publisher};
use crate::queries::{authors, publishers};

/// Reference publishers as `(publisher_id, name)`.
pub const PUBLISHERS: &[(i64, &str)] = &[
    (1, "Editorial Santillana"),
    (2, "Grupo Planeta"),
    (3, "Siglo XXI Editores"),
    (4, "Alfaguara"),
    (5, "Editorial Norma"),
    (6, "Ediciones SM"),
    (7, "Fondo de Cultura Económica"),
];

/// Reference authors as `(author_id, first_name, middle_name, last_name)`.
pub const AUTHORS: &[(i64, &str, Option<&str>, Option<&str>)] = &[
    (1, "Gabriel", None, Some("García Márquez")),
    (2, "Laura", None, Some("Esquivel")),
    (3, "Mario", None, Some("Vargas Llosa")),
    (4, "Isabel", None, Some("Allende")),
    (5, "Octavio", None, Some("Paz")),
    (6, "Jorge", Some("Luis"), Some("Borges")),
    (7, "Julio", None, Some("Cortázar")),
    (8, "Carlos", None, Some("Fuentes")),
];

/// Reference publishers as models.
pub fn reference_publishers() -> Vec<Publisher> {
    PUBLISHERS
        .iter()
        .map(|&(id, name)| Publisher::new(id, name))
        .collect()
}

/// Reference authors as models.
pub fn reference_authors() -> Vec<Author> {
    AUTHORS
        .iter()
        .map(|&(id, first, middle, last)| Author::new(id, first, middle, last))
        .collect()
}

/// Per-table insert counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TableCounts {
    pub inserted: usize,
    pub skipped: usize,
}

impl TableCounts {
    fn record(&mut self, written: bool) {
        if written {
            self.inserted += 1;
        } else {
            self.skipped += 1;
        }
    }
}

/// Result of a seeding pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub publishers: TableCounts,
    pub authors: TableCounts,
}

impl SeedReport {
    /// Rows written across both tables.
    pub fn inserted(&self) -> usize {
        self.publishers.inserted + self.authors.inserted
    }

    /// Rows left alone because their id already existed.
    pub fn skipped(&self) -> usize {
        self.publishers.skipped + self.authors.skipped
    }
}

/// Insert all reference rows inside a single transaction.
///
/// Either every insert is committed or, on the first failure, the
/// transaction is rolled back and the error returned. The schema must
/// already exist.
pub fn seed_reference_data(conn: &Connection) -> Result<SeedReport> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| Error::database(format!("Failed to begin seed transaction: {}", e)))?;

    let mut report = SeedReport::default();

    for publisher in reference_publishers() {
        let written = publishers::insert_or_ignore(&tx, &publisher)?;
        tracing::debug!(publisher_id = publisher.publisher_id, written, "publisher");
        report.publishers.record(written);
    }

    for author in reference_authors() {
        let written = authors::insert_or_ignore(&tx, &author)?;
        tracing::debug!(author_id = author.author_id, written, "author");
        report.authors.record(written);
    }

    tx.commit()
        .map_err(|e| Error::database(format!("Failed to commit seed transaction: {}", e)))?;

    tracing::info!(
        inserted = report.inserted(),
        skipped = report.skipped(),
        "reference data seeded"
    );

    Ok(report)
}
