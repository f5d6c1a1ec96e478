//! Error types for blueprint discovery.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using DirectoryError.
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Errors that can occur while enumerating a convention directory.
///
/// The locator recovers from every variant by treating the affected
/// sub-directory as empty.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// Failed to list a directory.
    #[error("failed to read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl DirectoryError {
    /// Create a ReadDir error.
    pub fn read_dir(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }
}
