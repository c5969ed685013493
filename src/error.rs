//! Error types for the Lexiscan library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`LexiscanError`] enum. Most engine operations cannot fail; errors are
//! reserved for caller misuse (such as a zero result capacity) and for I/O
//! performed by the CLI layer.
//!
//! # Examples
//!
//! ```
//! use lexiscan::error::{LexiscanError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexiscanError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexiscan operations.
#[derive(Error, Debug)]
pub enum LexiscanError {
    /// I/O errors (word list loading, output writing, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A caller-supplied argument violated a precondition
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Lexicon-related errors (malformed word lists, etc.)
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexiscanError.
pub type Result<T> = std::result::Result<T, LexiscanError>;

impl LexiscanError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexiscanError::InvalidArgument(msg.into())
    }

    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        LexiscanError::Lexicon(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexiscanError::Other(msg.into())
    }
}
