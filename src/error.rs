//! Error types for the Shingler library.
//!
//! Rewriting a query never fails. Errors only come from the code around the
//! rewriter: loading a configuration, reading a query document, or driving the
//! command line. All of them are represented by [`ShinglerError`].
//!
//! # Examples
//!
//! ```
//! use shingler::error::{Result, ShinglerError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ShinglerError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Shingler operations.
#[derive(Error, Debug)]
pub enum ShinglerError {
    /// I/O errors (reading configuration or query files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rewriter configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed query trees
    #[error("Query error: {0}")]
    Query(String),

    /// Invalid arguments passed by a caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with ShinglerError.
pub type Result<T> = std::result::Result<T, ShinglerError>;

impl ShinglerError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ShinglerError::Config(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        ShinglerError::Query(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ShinglerError::InvalidArgument(msg.into())
    }
}
