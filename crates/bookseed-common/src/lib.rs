//! Bookseed-Common: shared error handling.
//!
//! # Examples
//!
//! ```
//! use bookseed_common::{Error, Result};
//!
//! fn open() -> Result<()> {
//!     Err(Error::database("unable to open database file"))
//! }
//!
//! assert!(open().is_err());
//! ```

pub mod error;

pub use error::{Error, Result};
