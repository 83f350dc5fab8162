//! Error types for roster rendering and parsing.
//!
//! The core model is total: constructing people and pets, appending to a
//! pet list, and rendering a report in memory cannot fail. Errors arise only
//! at the crate's boundaries:
//!
//! - **I/O errors**: writing a rendered report to an output sink
//! - **Parse errors**: turning text into a [`Species`](crate::Species)
//!
//! ## Examples
//!
//! ```rust
//! use menagerie::{Error, Species};
//!
//! let result = "ferret".parse::<Species>();
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     eprintln!("Parse error: {}", err);
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors this crate can produce.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while writing a rendered report
    #[error("IO error: {0}")]
    Io(String),

    /// Unrecognized species name
    #[error("Unknown species: {0:?} (expected \"dog\" or \"cat\")")]
    UnknownSpecies(String),
}

impl Error {
    /// Creates an I/O error for report writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an unknown-species error for unrecognized species names.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use menagerie::Error;
    ///
    /// let err = Error::unknown_species("ferret");
    /// assert!(err.to_string().contains("ferret"));
    /// ```
    pub fn unknown_species<T: fmt::Display>(found: T) -> Self {
        Error::UnknownSpecies(found.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
