//! Configuration types
//!
//! # Example
//!
//! ```
//! use statamic_config::Severity;
//!
//! let severity = Severity::Error;
//! assert_eq!(severity.to_string(), "error");
//!
//! let parsed: Severity = "warning".parse().unwrap();
//! assert_eq!(parsed, Severity::Warning);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Default blueprint directory, relative to the project root.
pub const DEFAULT_BLUEPRINT_PATH: &str = "resources/blueprints";

/// Default directory scanned for computed field registrations.
pub const DEFAULT_COMPUTED_SCAN_PATH: &str = "app";

/// Severity level for reported diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error severity - must be fixed
    Error,
    /// Warning severity - should be fixed
    Warning,
    /// Info severity - informational
    Info,
    /// Hint severity - suggestion
    Hint,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
            Severity::Hint => write!(f, "hint"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "hint" => Ok(Severity::Hint),
            _ => Err(ConfigError::validation(format!("Invalid severity: {}", s))),
        }
    }
}

/// Everything schema discovery needs to know about a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Base directories holding `collections/`, `taxonomies/`, `globals/` and `assets/`.
    pub blueprint_paths: Vec<PathBuf>,
    /// Files and directories scanned for `Collection::computed` calls.
    pub computed_scan_paths: Vec<PathBuf>,
    /// Fieldtype handle to PHP class for addon fieldtypes.
    pub custom_fieldtypes: BTreeMap<String, String>,
    /// Severity of the undefined field diagnostic.
    pub undefined_field_severity: Severity,
    /// When false, undefined field access is never reported.
    pub report_undefined_fields: bool,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            blueprint_paths: vec![PathBuf::from(DEFAULT_BLUEPRINT_PATH)],
            computed_scan_paths: vec![PathBuf::from(DEFAULT_COMPUTED_SCAN_PATH)],
            custom_fieldtypes: BTreeMap::new(),
            undefined_field_severity: Severity::Error,
            report_undefined_fields: true,
        }
    }
}

impl SchemaConfig {
    /// Anchor relative paths at `root`. Absolute paths are kept as they are.
    pub fn resolve_paths(mut self, root: &Path) -> Self {
        let anchor = |path: PathBuf| {
            if path.is_relative() {
                root.join(path)
            } else {
                path
            }
        };

        self.blueprint_paths = self.blueprint_paths.into_iter().map(anchor).collect();
        self.computed_scan_paths = self.computed_scan_paths.into_iter().map(anchor).collect();
        self
    }

    /// Reject custom fieldtypes with an empty handle or class.
    pub fn validate(&self) -> ConfigResult<()> {
        for (kind, class) in &self.custom_fieldtypes {
            if kind.trim().is_empty() {
                return Err(ConfigError::validation(
                    "custom fieldtype handle must not be empty",
                ));
            }
            if class.trim().trim_start_matches('\\').is_empty() {
                return Err(ConfigError::validation(format!(
                    "custom fieldtype '{}' has no class",
                    kind
                )));
            }
        }
        Ok(())
    }
}
