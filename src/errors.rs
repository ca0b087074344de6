/*!
 * Error types for the progtranslate application.
 *
 * This module contains the error type shared by the library modules,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::Path;

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// The locale file does not exist or cannot be read
    #[error("File error: {path}: {message}")]
    File {
        /// Path that failed to load
        path: String,
        /// Underlying I/O message
        message: String,
    },

    /// The locale file is not valid JSON
    #[error("Parse error: {path}: {message}")]
    Parse {
        /// Path of the malformed file
        path: String,
        /// Parser message, including line and column
        message: String,
    },

    /// Valid JSON whose shape cannot be walked
    #[error("Document error: {0}")]
    Document(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Build a file error for the given path
    pub fn file<P: AsRef<Path>>(path: P, error: &std::io::Error) -> Self {
        Self::File {
            path: path.as_ref().display().to_string(),
            message: error.to_string(),
        }
    }

    /// Build a parse error for the given path
    pub fn parse<P: AsRef<Path>>(path: P, error: &serde_json::Error) -> Self {
        Self::Parse {
            path: path.as_ref().display().to_string(),
            message: error.to_string(),
        }
    }
}
