//! CLI end-to-end tests
//!
//! Run the bookseed binary against temporary working directories and
//! inspect the resulting database file directly.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the bookseed binary, isolated from the caller's environment
#[allow(deprecated)]
fn bookseed_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bookseed").unwrap();
    cmd.current_dir(cwd).env_remove("DB_PATH").env_remove("RUST_LOG");
    cmd
}

fn author_row(path: &Path, id: i64) -> (String, Option<String>, Option<String>) {
    let conn = Connection::open(path).unwrap();
    conn.query_row(
        "SELECT first_name, middle_name, last_name FROM authors WHERE author_id = ?",
        [id],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )
    .unwrap()
}

fn count(path: &Path, table: &str) -> i64 {
    let conn = Connection::open(path).unwrap();
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
        row.get(0)
    })
    .unwrap()
}

#[test]
fn test_default_path_is_created() {
    let dir = tempdir().unwrap();

    bookseed_cmd(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Connected to database at: ./labaseuno.db\n",
        ));

    let db = dir.path().join("labaseuno.db");
    assert!(db.exists());
    assert_eq!(
        author_row(&db, 3),
        ("Mario".to_string(), None, Some("Vargas Llosa".to_string()))
    );
}

#[test]
fn test_db_path_override() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("books.db");

    bookseed_cmd(dir.path())
        .env("DB_PATH", &db)
        .assert()
        .success()
        .stdout(predicate::str::contains(db.display().to_string()));

    assert!(db.exists());
    assert!(!dir.path().join("labaseuno.db").exists());
    assert_eq!(count(&db, "publishers"), 7);
    assert_eq!(count(&db, "authors"), 8);
}

#[test]
fn test_dotenv_file_supplies_path() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".env"), "DB_PATH=./from_env_file.db\n").unwrap();

    bookseed_cmd(dir.path()).assert().success();

    assert!(dir.path().join("from_env_file.db").exists());
}

#[test]
fn test_second_run_is_identical() {
    let dir = tempdir().unwrap();

    let first = bookseed_cmd(dir.path()).output().unwrap();
    let second = bookseed_cmd(dir.path()).output().unwrap();

    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout);

    let db = dir.path().join("labaseuno.db");
    assert_eq!(count(&db, "publishers"), 7);
    assert_eq!(count(&db, "authors"), 8);
    assert_eq!(
        author_row(&db, 6),
        (
            "Jorge".to_string(),
            Some("Luis".to_string()),
            Some("Borges".to_string())
        )
    );
}

#[test]
fn test_existing_publisher_name_is_kept() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("labaseuno.db");
    {
        let conn = Connection::open(&db).unwrap();
        conn.execute_batch(
            "CREATE TABLE publishers (publisher_id INTEGER PRIMARY KEY, name TEXT NOT NULL);
             INSERT INTO publishers (publisher_id, name) VALUES (1, 'Anagrama');",
        )
        .unwrap();
    }

    bookseed_cmd(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Anagrama"))
        .stdout(predicate::str::contains("Editorial Santillana").not());

    let conn = Connection::open(&db).unwrap();
    let name: String = conn
        .query_row(
            "SELECT name FROM publishers WHERE publisher_id = 1",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(name, "Anagrama");
    assert_eq!(count(&db, "publishers"), 7);
}

#[test]
fn test_stdout_carries_report_only() {
    let dir = tempdir().unwrap();

    bookseed_cmd(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Tables 'publishers' and 'authors' created successfully.",
        ))
        .stdout(predicate::str::contains("Data inserted successfully."))
        .stdout(predicate::str::contains("\nPublishers:\n"))
        .stdout(predicate::str::contains("\nAuthors:\n"))
        .stdout(predicate::str::contains("García Márquez"))
        .stdout(predicate::str::contains("INFO").not());
}

#[test]
fn test_unopenable_path_fails() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("no_such_dir").join("seed.db");

    bookseed_cmd(dir.path())
        .env("DB_PATH", &db)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("no_such_dir"));

    assert!(!db.exists());
}
