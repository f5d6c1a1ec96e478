//! Error types for blueprint parsing

use std::path::PathBuf;
use thiserror::Error;

/// Result type for blueprint parsing operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur while reading a blueprint document.
///
/// These never escape [`BlueprintParser::parse`](crate::BlueprintParser::parse);
/// they are logged there and the document contributes no fields.
#[derive(Debug, Error)]
pub enum FieldsError {
    /// Blueprint file exists but could not be read
    #[error("failed to read blueprint '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Blueprint content is not valid YAML
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Unknown content type name
    #[error("unknown content type: {name}")]
    UnknownContentType { name: String },
}

impl FieldsError {
    /// Create a FileRead error.
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FieldsError::UnknownContentType {
            name: "page".into(),
        };
        assert_eq!(err.to_string(), "unknown content type: page");
    }

    #[test]
    fn test_file_read_error_names_path() {
        let err = FieldsError::file_read(
            "/blueprints/collections/blog/article.yaml",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("article.yaml"));
        assert!(err.to_string().contains("denied"));
    }
}
