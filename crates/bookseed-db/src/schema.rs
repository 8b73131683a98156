//! Schema definition for the reference tables.
//!
//! Each table is created with `CREATE TABLE IF NOT EXISTS`, so running
//! [`ensure_schema`] against a database that already holds the tables is a
//! no-op. Statements run outside any explicit transaction and commit
//! individually.

use bookseed_common::{Error, Result};
use rusqlite::Connection;

/// A table and the DDL that creates it.
struct TableDdl {
    name: &'static str,
    sql: &'static str,
}

/// Publisher table name.
pub const PUBLISHERS_TABLE: &str = "publishers";

/// Author table name.
pub const AUTHORS_TABLE: &str = "authors";

/// All reference tables, in creation order.
const TABLES: &[TableDdl] = &[
    TableDdl {
        name: PUBLISHERS_TABLE,
        sql: "CREATE TABLE IF NOT EXISTS publishers (
            publisher_id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        )",
    },
    TableDdl {
        name: AUTHORS_TABLE,
        sql: "CREATE TABLE IF NOT EXISTS authors (
            author_id INTEGER PRIMARY KEY,
            first_name TEXT NOT NULL,
            middle_name TEXT NULL,
            last_name TEXT NULL
        )",
    },
];

/// Column description as reported by `PRAGMA table_info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: String,
    pub not_null: bool,
    pub primary_key: bool,
}

/// Create the publisher and author tables if they are absent.
///
/// # Returns
///
/// * `Ok(usize)` - Number of tables that did not exist beforehand
/// * `Err(Error)` - If a DDL statement fails
pub fn ensure_schema(conn: &Connection) -> Result<usize> {
    let mut created = 0;

    for table in TABLES {
        let existed = table_exists(conn, table.name)?;

        conn.execute(table.sql, [])
            .map_err(|e| Error::database(format!("Failed to create table {}: {}", table.name, e)))?;

        if existed {
            tracing::debug!(table = table.name, "table already present");
        } else {
            tracing::info!(table = table.name, "created table");
            created += 1;
        }
    }

    Ok(created)
}

/// Names of every table this schema manages.
pub fn table_names() -> Vec<&'static str> {
    TABLES.iter().map(|t| t.name).collect()
}

/// Check whether a table named `name` exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
            [name],
            |row| row.get(0),
        )
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(count > 0)
}

/// Columns of table `name`, in declaration order.
///
/// Returns an empty list when the table does not exist.
pub fn table_columns(conn: &Connection, name: &str) -> Result<Vec<ColumnInfo>> {
    let mut stmt = conn
        .prepare("SELECT name, type, \"notnull\", pk FROM pragma_table_info(?) ORDER BY cid")
        .map_err(|e| Error::database(e.to_string()))?;

    let columns = stmt
        .query_map([name], |row| {
            Ok(ColumnInfo {
                name: row.get(0)?,
                data_type: row.get(1)?,
                not_null: row.get::<_, i64>(2)? != 0,
                primary_key: row.get::<_, i64>(3)? != 0,
            })
        })
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::open_in_memory;

    fn column_names(conn: &Connection, table: &str) -> Vec<String> {
        table_columns(conn, table)
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect()
    }

    #[test]
    fn test_ensure_schema_creates_tables() {
        let conn = open_in_memory().unwrap();

        let created = ensure_schema(&conn).unwrap();
        assert_eq!(created, 2);

        for table in table_names() {
            assert!(table_exists(&conn, table).unwrap(), "Table {} should exist", table);
        }
    }

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let conn = open_in_memory().unwrap();

        assert_eq!(ensure_schema(&conn).unwrap(), 2);
        assert_eq!(ensure_schema(&conn).unwrap(), 0);
    }

    #[test]
    fn test_ensure_schema_keeps_existing_rows() {
        let conn = open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO publishers (publisher_id, name) VALUES (42, 'Anagrama')",
            [],
        )
        .unwrap();

        ensure_schema(&conn).unwrap();

        let name: String = conn
            .query_row("SELECT name FROM publishers WHERE publisher_id = 42", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(name, "Anagrama");
    }

    #[test]
    fn test_column_layout() {
        let conn = open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();

        assert_eq!(column_names(&conn, PUBLISHERS_TABLE), ["publisher_id", "name"]);
        assert_eq!(
            column_names(&conn, AUTHORS_TABLE),
            ["author_id", "first_name", "middle_name", "last_name"]
        );

        let authors = table_columns(&conn, AUTHORS_TABLE).unwrap();
        assert!(authors[0].primary_key);
        assert_eq!(authors[0].data_type, "INTEGER");
        assert!(authors[1].not_null);
        assert!(!authors[2].not_null);
        assert!(!authors[3].not_null);
    }

    #[test]
    fn test_table_columns_missing_table() {
        let conn = open_in_memory().unwrap();
        assert!(table_columns(&conn, "nope").unwrap().is_empty());
        assert!(!table_exists(&conn, "nope").unwrap());
    }
}
