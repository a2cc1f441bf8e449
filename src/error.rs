//! Error types for the Quill library.
//!
//! Text analysis itself never fails: every analysis function is defined for
//! all string inputs. Errors only arise at the edges, when a configuration is
//! loaded or validated, or when the command line front end does I/O.
//!
//! # Examples
//!
//! ```
//! use quill::error::{QuillError, Result};
//!
//! fn load_profile(name: &str) -> Result<()> {
//!     Err(QuillError::config(format!("unknown profile: {name}")))
//! }
//!
//! match load_profile("baroque") {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Quill operations.
#[derive(Error, Debug)]
pub enum QuillError {
    /// I/O errors (reading config files or stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors (invalid lexicons, weights, patterns)
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with QuillError.
pub type Result<T> = std::result::Result<T, QuillError>;

impl QuillError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        QuillError::Config(msg.into())
    }
}
