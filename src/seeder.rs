//! The seeding run: connect, ensure schema, seed, verify.
//!
//! Stages execute strictly in order and any failure aborts the run. The
//! connection lives only inside [`Seeder::run`]; it is dropped (and so
//! closed) on every error path and closed explicitly on success.

use std::fmt;
use std::io::Write;

use bookseed_common::Result;
use bookseed_db::connection;
use bookseed_db::models::{Author, Publisher};
use bookseed_db::queries::{authors, publishers};
use bookseed_db::schema;
use bookseed_db::seed::{self, SeedReport};
use rusqlite::Connection;

use crate::config::Config;
use crate::render::{authors_table, publishers_table};

/// Progress of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Connect,
    SchemaReady,
    Seeded,
    Verified,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Connect => "connect",
            Stage::SchemaReady => "schema_ready",
            Stage::Seeded => "seeded",
            Stage::Verified => "verified",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// What a completed run found in the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub report: SeedReport,
    pub publishers: Vec<Publisher>,
    pub authors: Vec<Author>,
}

pub struct Seeder {
    config: Config,
    stage: Stage,
}

impl Seeder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            stage: Stage::Connect,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Run every stage, writing status lines and table dumps to `out`.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Outcome> {
        let conn = connection::open(&self.config.db_path)?;
        writeln!(
            out,
            "Connected to database at: {}",
            self.config.db_path.display()
        )?;

        schema::ensure_schema(&conn)?;
        self.advance(Stage::SchemaReady);
        writeln!(out, "Tables 'publishers' and 'authors' created successfully.")?;

        let report = seed::seed_reference_data(&conn)?;
        self.advance(Stage::Seeded);
        writeln!(out, "Data inserted successfully.")?;

        let outcome = verify(&conn, report, out)?;
        self.advance(Stage::Verified);

        connection::close(conn)?;
        self.advance(Stage::Done);

        Ok(outcome)
    }

    fn advance(&mut self, next: Stage) {
        tracing::info!(from = %self.stage, to = %next, "stage");
        self.stage = next;
    }
}

fn verify<W: Write>(conn: &Connection, report: SeedReport, out: &mut W) -> Result<Outcome> {
    let publishers = publishers::list(conn)?;
    let authors = authors::list(conn)?;

    writeln!(out, "\nPublishers:")?;
    write!(out, "{}", publishers_table(&publishers))?;

    writeln!(out, "\nAuthors:")?;
    write!(out, "{}", authors_table(&authors))?;

    tracing::info!(
        publishers = publishers.len(),
        authors = authors.len(),
        "verified table contents"
    );

    Ok(Outcome {
        report,
        publishers,
        authors,
    })
}
