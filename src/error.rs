//! Error types for the bm25 library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`Bm25Error`] enum.
//!
//! # Examples
//!
//! ```
//! use bm25::error::{Bm25Error, Result};
//!
//! fn empty_corpus() -> Result<f64> {
//!     Err(Bm25Error::invalid_statistics("document count is zero"))
//! }
//!
//! match empty_corpus() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for bm25 operations.
#[derive(Error, Debug)]
pub enum Bm25Error {
    /// I/O errors (reading corpus files, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corpus statistics that cannot be scored against
    #[error("Invalid statistics: {0}")]
    InvalidStatistics(String),

    /// Tokenization and vocabulary errors
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Parameters outside their accepted range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with Bm25Error.
pub type Result<T> = std::result::Result<T, Bm25Error>;

impl Bm25Error {
    /// Create a new invalid statistics error.
    pub fn invalid_statistics<S: Into<String>>(msg: S) -> Self {
        Bm25Error::InvalidStatistics(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        Bm25Error::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Bm25Error::InvalidArgument(msg.into())
    }
}
