//! Bookseed - reference data seeder for a local SQLite database
//!
//! This library crate exposes the run sequence for integration testing.

pub mod config;
pub mod render;
pub mod seeder;
