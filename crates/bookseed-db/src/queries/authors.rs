//! Author database queries.

use bookseed_common::{Error, Result};
use rusqlite::{Connection, Row};

use crate::models::Author;

fn row_to_author(row: &Row) -> rusqlite::Result<Author> {
    Ok(Author {
        author_id: row.get(0)?,
        first_name: row.get(1)?,
        middle_name: row.get(2)?,
        last_name: row.get(3)?,
    })
}

/// Insert an author unless one with the same id already exists.
///
/// Returns `true` when the row was written, `false` when an existing row
/// with this id was kept instead.
pub fn insert_or_ignore(conn: &Connection, author: &Author) -> Result<bool> {
    let changed = conn
        .execute(
            "INSERT OR IGNORE INTO authors (author_id, first_name, middle_name, last_name)
             VALUES (:id, :first_name, :middle_name, :last_name)",
            rusqlite::named_params! {
                ":id": author.author_id,
                ":first_name": author.first_name,
                ":middle_name": author.middle_name,
                ":last_name": author.last_name,
            },
        )
        .map_err(|e| {
            Error::database(format!("Failed to insert author {}: {}", author.author_id, e))
        })?;

    Ok(changed == 1)
}

/// Get an author by id.
pub fn get(conn: &Connection, author_id: i64) -> Result<Option<Author>> {
    let result = conn.query_row(
        "SELECT author_id, first_name, middle_name, last_name
         FROM authors WHERE author_id = :id",
        rusqlite::named_params! { ":id": author_id },
        row_to_author,
    );

    match result {
        Ok(author) => Ok(Some(author)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List every author ordered by id.
pub fn list(conn: &Connection) -> Result<Vec<Author>> {
    let mut stmt = conn
        .prepare(
            "SELECT author_id, first_name, middle_name, last_name
             FROM authors ORDER BY author_id",
        )
        .map_err(|e| Error::database(e.to_string()))?;

    let authors = stmt
        .query_map([], row_to_author)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(authors)
}

/// Count authors.
pub fn count(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM authors", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))
}
