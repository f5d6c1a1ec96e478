//! Configuration provider using Figment

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use tracing::{debug, info, trace};

use crate::{
    discovery::{ConfigFile, ConfigFormat, FileDiscovery},
    error::{ConfigError, ConfigResult},
    types::SchemaConfig,
};

/// Prefix of environment variables that override file values.
pub const ENV_PREFIX: &str = "STATAMIC_SCHEMA_";

/// Configuration provider using figment
///
/// Sources are merged in precedence order, later sources overriding earlier ones:
/// 1. Default values
/// 2. Configuration files discovered in the project root
/// 3. An explicitly named configuration file
/// 4. Environment variables prefixed with `STATAMIC_SCHEMA_`
///
/// Nested keys in environment variables are separated by `__`, so
/// `STATAMIC_SCHEMA_CUSTOM_FIELDTYPES__MONEY` sets `custom_fieldtypes.money`.
pub struct ConfigProvider {
    root: PathBuf,
    explicit_file: Option<PathBuf>,
}

impl ConfigProvider {
    /// Create a provider for the project at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            explicit_file: None,
        }
    }

    /// Also load `path`, which must exist, on top of discovered files
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_file = Some(path.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load, validate and anchor the configuration
    pub fn load(&self) -> ConfigResult<SchemaConfig> {
        debug!("Loading schema configuration for {}", self.root.display());

        let config: SchemaConfig = self.build_figment()?.extract()?;
        config.validate()?;
        let config = config.resolve_paths(&self.root);

        info!(
            "Loaded schema configuration with {} blueprint paths and {} scan paths",
            config.blueprint_paths.len(),
            config.computed_scan_paths.len()
        );
        Ok(config)
    }

    fn build_figment(&self) -> ConfigResult<Figment> {
        debug!("Building figment configuration with precedence order");

        let mut figment = Figment::new()
            .merge(self.get_default_config())
            .merge(self.load_discovered_config_files());

        if let Some(path) = &self.explicit_file {
            figment = figment.merge(self.load_explicit_file(path)?);
        }

        Ok(figment.merge(self.load_env_vars()))
    }

    fn get_default_config(&self) -> Figment {
        trace!("Loading default configuration values");
        Figment::from(Serialized::defaults(SchemaConfig::default()))
    }

    fn load_discovered_config_files(&self) -> Figment {
        FileDiscovery::new(&self.root)
            .discover_all()
            .iter()
            .fold(Figment::new(), |figment, file| {
                trace!("Loading config file: {} ({:?})", file.path.display(), file.format);
                figment.merge(load_config_file(file))
            })
    }

    fn load_explicit_file(&self, path: &Path) -> ConfigResult<Figment> {
        let path = if path.is_relative() {
            self.root.join(path)
        } else {
            path.to_path_buf()
        };

        if !path.is_file() {
            return Err(ConfigError::FileNotFound { path });
        }

        let file = ConfigFile::from_path(&path).ok_or_else(|| ConfigError::UnsupportedFormat {
            format: path
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_default(),
        })?;

        Ok(load_config_file(&file))
    }

    fn load_env_vars(&self) -> Figment {
        debug!("Loading environment variables");
        Figment::from(
            Env::prefixed(ENV_PREFIX)
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        )
    }
}

/// Load a single configuration file based on its format
fn load_config_file(config_file: &ConfigFile) -> Figment {
    let path = &config_file.path;

    match config_file.format {
        ConfigFormat::Toml => Figment::from(Toml::file(path)),
        ConfigFormat::Yaml => Figment::from(Yaml::file(path)),
        ConfigFormat::Json => Figment::from(Json::file(path)),
    }
}
