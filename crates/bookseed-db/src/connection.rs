//! Database connection management.
//!
//! A seeding run holds exactly one connection for its whole lifetime. The
//! connection is released when dropped, so early returns on error paths
//! close it too; [`close`] exists for the success path, where a failed close
//! should still be reported.

use std::path::Path;

use bookseed_common::{Error, Result};
use rusqlite::Connection;

/// Open (creating if necessary) the SQLite database file at `db_path`.
///
/// The parent directory must already exist.
///
/// # Arguments
///
/// * `db_path` - Path to the SQLite database file
///
/// # Returns
///
/// * `Ok(Connection)` - An open connection
/// * `Err(Error)` - If the file cannot be opened or created
///
/// # Example
///
/// ```no_run
/// use bookseed_db::connection::open;
///
/// let conn = open("./labaseuno.db").unwrap();
/// ```
pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Connection> {
    let db_path = db_path.as_ref();
    let conn = Connection::open(db_path).map_err(|e| {
        Error::database(format!(
            "Failed to open database at {}: {}",
            db_path.display(),
            e
        ))
    })?;

    configure(&conn)?;
    tracing::debug!(path = %db_path.display(), "opened database");
    Ok(conn)
}

/// Open an in-memory database for testing.
///
/// # Example
///
/// ```
/// use bookseed_db::connection::open_in_memory;
///
/// let conn = open_in_memory().unwrap();
/// ```
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()
        .map_err(|e| Error::database(format!("Failed to open in-memory database: {}", e)))?;

    configure(&conn)?;
    Ok(conn)
}

/// Close a connection, surfacing any error SQLite reports while doing so.
pub fn close(conn: Connection) -> Result<()> {
    conn.close()
        .map_err(|(_, e)| Error::database(format!("Failed to close database: {}", e)))
}

fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(|e| Error::database(format!("Failed to configure connection: {}", e)))
}
