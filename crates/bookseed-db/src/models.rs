//! Rust models matching the database schema.

use serde::{Deserialize, Serialize};

/// Publisher reference row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Publisher {
    pub publisher_id: i64,
    pub name: String,
}

impl Publisher {
    pub fn new(publisher_id: i64, name: impl Into<String>) -> Self {
        Self {
            publisher_id,
            name: name.into(),
        }
    }
}

/// Author reference row. Only the first name is required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub author_id: i64,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
}

impl Author {
    pub fn new(
        author_id: i64,
        first_name: impl Into<String>,
        middle_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Self {
        Self {
            author_id,
            first_name: first_name.into(),
            middle_name: middle_name.map(str::to_string),
            last_name: last_name.map(str::to_string),
        }
    }
}
