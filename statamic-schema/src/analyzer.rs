//! One value wiring every schema component for a project.

use std::path::PathBuf;
use std::rc::Rc;

use statamic_computed::ComputedFieldScanner;
use statamic_config::{load_configuration, SchemaConfig};
use statamic_directory::BlueprintLocator;
use statamic_fields::BlueprintParser;
use tracing::debug;

use crate::error::Result;
use crate::mapper::FieldtypeMapper;
use crate::properties::BlueprintPropertyExtension;
use crate::repository::BlueprintRepository;
use crate::return_types::ReturnTypeResolver;
use crate::rules::UndefinedFieldRule;

/// Repository, mapper, property extension, rule and return types sharing one
/// registry.
#[derive(Debug, Clone)]
pub struct SchemaAnalyzer {
    config: SchemaConfig,
    repository: Rc<BlueprintRepository>,
    mapper: Rc<FieldtypeMapper>,
    properties: BlueprintPropertyExtension,
    rule: UndefinedFieldRule,
    return_types: ReturnTypeResolver,
}

impl SchemaAnalyzer {
    /// Wire components from an already loaded configuration.
    ///
    /// Paths are used as given; nothing is read until the first query.
    pub fn from_config(config: &SchemaConfig) -> Self {
        debug!(
            blueprint_paths = config.blueprint_paths.len(),
            computed_scan_paths = config.computed_scan_paths.len(),
            "creating schema analyzer"
        );

        let repository = Rc::new(BlueprintRepository::new(
            BlueprintLocator::new(config.blueprint_paths.clone()),
            BlueprintParser::new(),
            ComputedFieldScanner::new(config.computed_scan_paths.clone()),
        ));
        let mapper = Rc::new(FieldtypeMapper::with_custom_fieldtypes(
            config.custom_fieldtypes.clone(),
        ));

        Self {
            config: config.clone(),
            properties: BlueprintPropertyExtension::new(Rc::clone(&repository), Rc::clone(&mapper)),
            rule: UndefinedFieldRule::new(Rc::clone(&repository), config.undefined_field_severity)
                .with_enabled(config.report_undefined_fields),
            return_types: ReturnTypeResolver::new(),
            repository,
            mapper,
        }
    }

    /// Load the project's configuration and wire components from it.
    pub fn load(root: impl Into<PathBuf>) -> Result<Self> {
        let config = load_configuration(root)?;
        Ok(Self::from_config(&config))
    }

    /// The configuration the analyzer was built from.
    pub fn config(&self) -> &SchemaConfig {
        &self.config
    }

    /// The shared field registry.
    pub fn repository(&self) -> &BlueprintRepository {
        &self.repository
    }

    /// The fieldtype mapper, including custom fieldtypes.
    pub fn mapper(&self) -> &FieldtypeMapper {
        &self.mapper
    }

    /// Property reflection for content classes.
    pub fn properties(&self) -> &BlueprintPropertyExtension {
        &self.properties
    }

    /// The undefined field rule.
    pub fn rule(&self) -> &UndefinedFieldRule {
        &self.rule
    }

    /// Facade and query builder return types.
    pub fn return_types(&self) -> &ReturnTypeResolver {
        &self.return_types
    }
}
