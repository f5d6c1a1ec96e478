//! Configuration management for Statamic schema discovery using Figment
//!
//! A project tells the schema crates where its blueprints live, which source
//! directories to scan for computed fields, which addon fieldtypes map to
//! which PHP classes, and how loudly to report undefined field access.
//!
//! # Quick Start
//!
//! ```no_run
//! use statamic_config::load_configuration;
//!
//! let config = load_configuration("/srv/site")?;
//! for path in &config.blueprint_paths {
//!     println!("blueprints: {}", path.display());
//! }
//! # Ok::<(), statamic_config::ConfigError>(())
//! ```
//!
//! # Configuration Files
//!
//! The project root is searched for `statamic-schema.{toml,yaml,yml,json}`.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! blueprint_paths:
//!   - resources/blueprints
//!   - vendor/acme/theme/resources/blueprints
//! computed_scan_paths:
//!   - app
//! custom_fieldtypes:
//!   money: App\Fieldtypes\Money
//! undefined_field_severity: warning
//! ```
//!
//! # Environment Variables
//!
//! Any key can be overridden with a `STATAMIC_SCHEMA_` variable, e.g.
//! `STATAMIC_SCHEMA_REPORT_UNDEFINED_FIELDS=false`.

use std::path::PathBuf;

/// File discovery logic for configuration files
pub mod discovery;
/// Error types and handling
pub mod error;
/// Figment-backed provider
pub mod provider;
/// Configuration types
pub mod types;

pub use discovery::{ConfigFile, ConfigFormat, FileDiscovery};
pub use error::{ConfigError, ConfigResult};
pub use provider::{ConfigProvider, ENV_PREFIX};
pub use types::{SchemaConfig, Severity, DEFAULT_BLUEPRINT_PATH, DEFAULT_COMPUTED_SCAN_PATH};

/// Load configuration for the project at `root` with the standard precedence
///
/// 1. Default values (lowest precedence)
/// 2. `statamic-schema.*` files in `root`
/// 3. `STATAMIC_SCHEMA_*` environment variables
pub fn load_configuration(root: impl Into<PathBuf>) -> ConfigResult<SchemaConfig> {
    ConfigProvider::new(root).load()
}

#[cfg(test)]
mod tests;
