//! The merged field registry.
//!
//! Blueprint fields are collected per content type in locator order, then
//! every computed field is appended to the entry bucket. The registry is built
//! on first use and kept for the life of the repository.

use std::collections::{BTreeMap, HashMap};

use once_cell::unsync::OnceCell;
use statamic_computed::ComputedFieldScanner;
use statamic_directory::BlueprintLocator;
use statamic_fields::{BlueprintParser, ContentType, FieldDefinition};
use tracing::debug;

use crate::content::ContentClassMap;
use crate::semantic::SemanticType;

/// Result of looking a property name up on a content type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldLookup<'a> {
    /// A property every instance has, with its fixed type
    Universal(&'static SemanticType),
    /// A field declared in a blueprint or registered as computed
    Blueprint(&'a FieldDefinition),
}

impl<'a> FieldLookup<'a> {
    /// True for universal properties.
    pub fn is_universal(&self) -> bool {
        matches!(self, FieldLookup::Universal(_))
    }

    /// The field definition, for blueprint fields.
    pub fn field(&self) -> Option<&'a FieldDefinition> {
        match self {
            FieldLookup::Blueprint(field) => Some(field),
            FieldLookup::Universal(_) => None,
        }
    }
}

/// Every discovered field, grouped by content type.
///
/// All four content types are always present. Within a content type a handle
/// may appear more than once; lookups resolve to the last occurrence.
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    fields: BTreeMap<ContentType, Vec<FieldDefinition>>,
    index: BTreeMap<ContentType, HashMap<String, usize>>,
}

impl FieldRegistry {
    /// An empty registry with a bucket for every content type.
    pub fn new() -> Self {
        let mut registry = Self::default();
        for content_type in ContentType::ALL {
            registry.fields.insert(content_type, Vec::new());
            registry.index.insert(content_type, HashMap::new());
        }
        registry
    }

    /// Append fields to a content type's bucket.
    pub fn extend(
        &mut self,
        content_type: ContentType,
        fields: impl IntoIterator<Item = FieldDefinition>,
    ) {
        let bucket = self.fields.entry(content_type).or_default();
        let index = self.index.entry(content_type).or_default();

        for field in fields {
            index.insert(field.handle().to_string(), bucket.len());
            bucket.push(field);
        }
    }

    /// Fields of a content type, duplicates included, in discovery order.
    pub fn fields(&self, content_type: ContentType) -> &[FieldDefinition] {
        self.fields
            .get(&content_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The last field named `handle`.
    pub fn get(&self, content_type: ContentType, handle: &str) -> Option<&FieldDefinition> {
        let position = *self.index.get(&content_type)?.get(handle)?;
        self.fields.get(&content_type)?.get(position)
    }

    /// Handle to field, last occurrence winning.
    pub fn field_map(&self, content_type: ContentType) -> BTreeMap<&str, &FieldDefinition> {
        self.fields(content_type)
            .iter()
            .map(|field| (field.handle(), field))
            .collect()
    }

    /// Total number of fields across all content types.
    pub fn len(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    /// True when no field was discovered at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Answers field queries from blueprints and computed registrations.
#[derive(Debug)]
pub struct BlueprintRepository {
    locator: BlueprintLocator,
    parser: BlueprintParser,
    scanner: ComputedFieldScanner,
    registry: OnceCell<FieldRegistry>,
}

impl BlueprintRepository {
    /// Create a repository. Nothing is read until the first query.
    pub fn new(
        locator: BlueprintLocator,
        parser: BlueprintParser,
        scanner: ComputedFieldScanner,
    ) -> Self {
        Self {
            locator,
            parser,
            scanner,
            registry: OnceCell::new(),
        }
    }

    /// The merged registry, built on first call.
    pub fn registry(&self) -> &FieldRegistry {
        self.registry.get_or_init(|| self.build_registry())
    }

    /// All fields of a content type, duplicates included.
    pub fn fields_for_content_type(&self, content_type: ContentType) -> &[FieldDefinition] {
        self.registry().fields(content_type)
    }

    /// Handle to field for a content type, last occurrence winning.
    pub fn field_map_for_content_type(
        &self,
        content_type: ContentType,
    ) -> BTreeMap<&str, &FieldDefinition> {
        self.registry().field_map(content_type)
    }

    /// True for universal properties and registered fields.
    pub fn has_field(&self, content_type: ContentType, handle: &str) -> bool {
        self.get_field(content_type, handle).is_some()
    }

    /// Look a name up, universal properties first.
    pub fn get_field(&self, content_type: ContentType, handle: &str) -> Option<FieldLookup<'_>> {
        if let Some(ty) = ContentClassMap::universal_property(content_type, handle) {
            return Some(FieldLookup::Universal(ty));
        }
        self.blueprint_field(content_type, handle)
            .map(FieldLookup::Blueprint)
    }

    /// Look a name up in the registry only, ignoring universal properties.
    pub fn blueprint_field(&self, content_type: ContentType, handle: &str) -> Option<&FieldDefinition> {
        self.registry().get(content_type, handle)
    }

    fn build_registry(&self) -> FieldRegistry {
        let mut registry = FieldRegistry::new();

        let locations = self.locator.locate_all();
        debug!(count = locations.len(), "building field registry");

        for location in &locations {
            registry.extend(location.content_type, self.parser.parse(&location.path));
        }

        // Computed fields only exist on entries.
        registry.extend(ContentType::Entry, self.scanner.scan().iter().cloned());

        for content_type in ContentType::ALL {
            debug!(
                content_type = %content_type,
                fields = registry.fields(content_type).len(),
                "registered fields"
            );
        }

        registry
    }
}
