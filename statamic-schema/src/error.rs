//! Error types for the schema crate
//!
//! Discovery and lookup never fail; only building an analyzer from a project
//! on disk can, when its configuration is unusable.

use statamic_config::ConfigError;
use thiserror::Error;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Error types for schema operations
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Project configuration could not be loaded
    #[error("Failed to load schema configuration: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let error: SchemaError = ConfigError::validation("bad severity").into();
        assert!(error.to_string().contains("bad severity"));
    }
}
