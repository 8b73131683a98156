//! Common error types used throughout bookseed.
//!
//! Covers the failure classes a seeding run can hit: configuration,
//! database access, and filesystem I/O.

/// Common error type for bookseed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration could not be resolved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new Config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new Database error.
    pub fn database<S: Into<String>>(msg: S) -> Self {
        Self::Database(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("malformed .env file");
        assert_eq!(
            err.to_string(),
            "Configuration error: malformed .env file"
        );

        let err = Error::database("unable to open database file");
        assert_eq!(err.to_string(), "Database error: unable to open database file");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "IO error: read-only");
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(Error::config("x"), Error::Config(_)));
        assert!(matches!(Error::database(String::from("x")), Error::Database(_)));
    }
}
