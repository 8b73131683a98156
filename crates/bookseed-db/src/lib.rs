//! Bookseed-DB: schema, reference data, and query operations
//!
//! This crate provides database functionality for bookseed using SQLite
//! with rusqlite.
//!
//! # Modules
//!
//! - `connection` - Opening and closing the database
//! - `schema` - Table DDL and schema inspection
//! - `models` - Rust models matching database schema
//! - `queries` - Per-table query operations
//! - `seed` - Reference rows and the seeding transaction
//!
//! # Example
//!
//! ```
//! use bookseed_db::connection::open_in_memory;
//! use bookseed_db::queries::authors;
//! use bookseed_db::{schema, seed};
//!
//! let conn = open_in_memory().unwrap();
//! schema::ensure_schema(&conn).unwrap();
//! seed::seed_reference_data(&conn).unwrap();
//!
//! let borges = authors::get(&conn, 6).unwrap().unwrap();
//! assert_eq!(borges.middle_name.as_deref(), Some("Luis"));
//! ```

pub mod connection;
pub mod models;
pub mod queries;
pub mod schema;
pub mod seed;
