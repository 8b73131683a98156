//! Database query modules.
//!
//! One module per reference table:
//! - publishers: Publisher inserts and lookups
//! - authors: Author inserts and lookups

pub mod authors;
pub mod publishers;
