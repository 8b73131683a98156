//! Runtime configuration.
//!
//! The only setting is the database location, taken from the `DB_PATH`
//! environment variable. A `.env` file in the working directory is loaded
//! first when present; variables already set in the process environment
//! take precedence over it.

use std::ffi::OsString;
use std::path::PathBuf;

use bookseed_common::{Error, Result};

/// Environment variable naming the database file.
pub const DB_PATH_VAR: &str = "DB_PATH";

/// Database file used when `DB_PATH` is unset or empty.
pub const DEFAULT_DB_PATH: &str = "./labaseuno.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

impl Config {
    /// Load `.env` if present, then resolve from the process environment.
    pub fn from_env() -> Result<Self> {
        load_dotenv()?;
        Ok(Self::from_lookup(|name| std::env::var_os(name)))
    }

    /// Resolve the configuration through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        match lookup(DB_PATH_VAR) {
            Some(path) if !path.is_empty() => Self {
                db_path: PathBuf::from(path),
            },
            _ => Self::default(),
        }
    }
}

fn load_dotenv() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded .env");
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(Error::config(format!("Failed to load .env file: {}", e))),
    }
}
