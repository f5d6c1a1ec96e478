//! Error types for computed field scanning
//!
//! Every variant is recovered from inside the scanner: the file (or, for a
//! language or query failure, the whole scan) contributes no fields.

use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Result type alias for scanning operations
pub type Result<T> = std::result::Result<T, ComputedError>;

/// Error types for scanning operations
#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum ComputedError {
    /// Source file could not be read
    #[error("Failed to read {path}: {source}")]
    FileRead {
        /// The file path
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parser rejected the grammar
    #[error("Language error for {language}: {message}")]
    Language {
        /// The language name
        language: String,
        /// Error message
        message: String,
    },

    /// Parse error occurred
    #[error("Parse error in {path}: {message}")]
    ParseError {
        /// The file path
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// Query compilation error
    #[error("Query compilation error for {language}: {message}")]
    QueryError {
        /// The language name
        language: String,
        /// Error message
        message: String,
    },
}

impl ComputedError {
    /// Create a file read error
    pub fn file_read(path: PathBuf, source: std::io::Error) -> Self {
        ComputedError::FileRead { path, source }
    }

    /// Create a language error
    pub fn language(language: impl Into<String>, message: impl Into<String>) -> Self {
        ComputedError::Language {
            language: language.into(),
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse_error(path: PathBuf, message: impl Into<String>) -> Self {
        ComputedError::ParseError {
            path,
            message: message.into(),
        }
    }

    /// Create a query error
    pub fn query_error(language: impl Into<String>, message: impl Into<String>) -> Self {
        ComputedError::QueryError {
            language: language.into(),
            message: message.into(),
        }
    }
}
