//! Configuration file discovery
//!
//! A project may carry a `statamic-schema.{toml,yaml,yml,json}` file in its
//! root. Every candidate that exists is loaded, in candidate order.

use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// File names searched in the project root, lowest precedence first.
const CANDIDATES: &[&str] = &[
    "statamic-schema.toml",
    "statamic-schema.yaml",
    "statamic-schema.yml",
    "statamic-schema.json",
];

/// Represents a discovered configuration file
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Full path to the configuration file
    pub path: PathBuf,
    /// Detected format of the file
    pub format: ConfigFormat,
}

impl ConfigFile {
    /// Classify a path by its extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let format = ConfigFormat::from_extension(path.extension()?.to_str()?)?;
        Some(Self { path, format })
    }
}

/// Configuration file format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format (.toml extension)
    Toml,
    /// YAML format (.yaml or .yml extensions)
    Yaml,
    /// JSON format (.json extension)
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Finds configuration files in a project root
pub struct FileDiscovery {
    root: PathBuf,
}

impl FileDiscovery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Existing configuration files, in merge order.
    pub fn discover_all(&self) -> Vec<ConfigFile> {
        if !self.root.is_dir() {
            debug!("Project root is not a directory: {}", self.root.display());
            return Vec::new();
        }

        let files: Vec<ConfigFile> = CANDIDATES
            .iter()
            .map(|name| self.root.join(name))
            .filter(|candidate| candidate.is_file())
            .filter_map(ConfigFile::from_path)
            .collect();

        debug!("Discovered {} configuration files", files.len());
        for file in &files {
            trace!("Found config: {} ({:?})", file.path.display(), file.format);
        }

        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_format_from_extension() {
        assert_eq!(ConfigFormat::from_extension("toml"), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_extension("yaml"), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_extension("yml"), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_extension("JSON"), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_extension("txt"), None);
        assert_eq!(ConfigFormat::from_extension(""), None);
    }

    #[test]
    fn test_discover_nothing_in_empty_root() {
        let temp_dir = TempDir::new().unwrap();
        assert!(FileDiscovery::new(temp_dir.path()).discover_all().is_empty());
    }

    #[test]
    fn test_discover_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let discovery = FileDiscovery::new(temp_dir.path().join("missing"));
        assert!(discovery.discover_all().is_empty());
    }

    #[test]
    fn test_discover_in_candidate_order() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("statamic-schema.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("statamic-schema.toml"), "").unwrap();
        fs::write(temp_dir.path().join("schema.toml"), "").unwrap();

        let files = FileDiscovery::new(temp_dir.path()).discover_all();
        let formats: Vec<ConfigFormat> = files.iter().map(|f| f.format).collect();
        assert_eq!(formats, vec![ConfigFormat::Toml, ConfigFormat::Json]);
    }

    #[test]
    fn test_directory_named_like_config_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("statamic-schema.yaml")).unwrap();
        assert!(FileDiscovery::new(temp_dir.path()).discover_all().is_empty());
    }
}
