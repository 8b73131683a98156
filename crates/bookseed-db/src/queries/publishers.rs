//! Publisher database queries.

use bookseed_common::{Error, Result};
use rusqlite::{Connection, Row};

use crate::models::Publisher;

fn row_to_publisher(row: &Row) -> rusqlite::Result<Publisher> {
    Ok(Publisher {
        publisher_id: row.get(0)?,
        name: row.get(1)?,
    })
}

/// Insert a publisher unless one with the same id already exists.
///
/// An existing row is left untouched.
///
/// # Returns
///
/// * `Ok(true)` - The row was written
/// * `Ok(false)` - A row with this id was already present
/// * `Err(Error)` - If a database error occurs
pub fn insert_or_ignore(conn: &Connection, publisher: &Publisher) -> Result<bool> {
    let changed = conn
        .execute(
            "INSERT OR IGNORE INTO publishers (publisher_id, name) VALUES (:id, :name)",
            rusqlite::named_params! {
                ":id": publisher.publisher_id,
                ":name": publisher.name,
            },
        )
        .map_err(|e| {
            Error::database(format!(
                "Failed to insert publisher {}: {}",
                publisher.publisher_id, e
            ))
        })?;

    Ok(changed == 1)
}

/// Get a publisher by id.
pub fn get(conn: &Connection, publisher_id: i64) -> Result<Option<Publisher>> {
    let result = conn.query_row(
        "SELECT publisher_id, name FROM publishers WHERE publisher_id = :id",
        rusqlite::named_params! { ":id": publisher_id },
        row_to_publisher,
    );

    match result {
        Ok(publisher) => Ok(Some(publisher)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List every publisher ordered by id.
pub fn list(conn: &Connection) -> Result<Vec<Publisher>> {
    let mut stmt = conn
        .prepare("SELECT publisher_id, name FROM publishers ORDER BY publisher_id")
        .map_err(|e| Error::database(e.to_string()))?;

    let publishers = stmt
        .query_map([], row_to_publisher)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(publishers)
}

/// Count publishers.
pub fn count(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM publishers", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))
}
