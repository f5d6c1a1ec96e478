//! Fieldtype to semantic type mapping.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use statamic_fields::FieldDefinition;

use crate::semantic::SemanticType;

const STRING_KINDS: &[&str] = &[
    "text", "textarea", "markdown", "slug", "code", "color", "html", "video", "template", "link",
    "time", "yaml", "table",
];

const SELECT_KINDS: &[&str] = &["select", "button_group", "radio"];

const ARRAY_KINDS: &[&str] = &[
    "checkboxes",
    "array",
    "list",
    "bard",
    "replicator",
    "grid",
    "structures",
];

/// Fieldtypes that store a handle of another Statamic object.
const REFERENCE_KINDS: &[&str] = &["collections", "taxonomies", "sites", "form"];

/// Relationship fieldtypes and the class of each related item.
pub const RELATIONSHIP_CLASSES: &[(&str, &str)] = &[
    ("entries", "Statamic\\Entries\\Entry"),
    ("terms", "Statamic\\Taxonomies\\LocalizedTerm"),
    ("assets", "Statamic\\Assets\\Asset"),
    ("users", "Statamic\\Contracts\\Auth\\User"),
];

enum FieldtypeRule {
    Fixed(SemanticType),
    /// Cardinality depends on `max_items`.
    Relationship(&'static str),
}

static FIELDTYPES: Lazy<HashMap<&'static str, FieldtypeRule>> = Lazy::new(|| {
    let mut table = HashMap::new();

    for kind in STRING_KINDS.iter().chain(REFERENCE_KINDS) {
        table.insert(*kind, FieldtypeRule::Fixed(SemanticType::String));
    }
    table.insert("toggle", FieldtypeRule::Fixed(SemanticType::Bool));
    table.insert("integer", FieldtypeRule::Fixed(SemanticType::Int));
    table.insert("range", FieldtypeRule::Fixed(SemanticType::Int));
    table.insert("float", FieldtypeRule::Fixed(SemanticType::Float));
    table.insert("date", FieldtypeRule::Fixed(SemanticType::Date));

    let select = SemanticType::Union(vec![SemanticType::String, SemanticType::Int]);
    for kind in SELECT_KINDS {
        table.insert(*kind, FieldtypeRule::Fixed(select.clone()));
    }
    for kind in ARRAY_KINDS {
        table.insert(*kind, FieldtypeRule::Fixed(SemanticType::mixed_array()));
    }
    for (kind, class) in RELATIONSHIP_CLASSES {
        table.insert(*kind, FieldtypeRule::Relationship(*class));
    }

    table
});

/// Maps a field's declared fieldtype to the type its value has at runtime.
///
/// Built-in fieldtypes are resolved first, so a custom mapping can add
/// fieldtypes but never change a built-in one. Anything unknown, including
/// computed fields, is `mixed`.
#[derive(Debug, Clone, Default)]
pub struct FieldtypeMapper {
    custom_fieldtypes: BTreeMap<String, String>,
}

impl FieldtypeMapper {
    /// A mapper that knows only the built-in fieldtypes.
    pub fn new() -> Self {
        Self::default()
    }

    /// A mapper that also resolves addon fieldtypes to their PHP classes.
    pub fn with_custom_fieldtypes(custom_fieldtypes: BTreeMap<String, String>) -> Self {
        Self { custom_fieldtypes }
    }

    /// Addon fieldtype handle to class.
    pub fn custom_fieldtypes(&self) -> &BTreeMap<String, String> {
        &self.custom_fieldtypes
    }

    /// The semantic type of `field`. Total: every field maps to something.
    pub fn map_to_type(&self, field: &FieldDefinition) -> SemanticType {
        match FIELDTYPES.get(field.kind()) {
            Some(FieldtypeRule::Fixed(ty)) => ty.clone(),
            Some(FieldtypeRule::Relationship(class)) => relationship_type(field, class),
            None => match self.custom_fieldtypes.get(field.kind()) {
                Some(class) => SemanticType::object(class),
                None => SemanticType::Mixed,
            },
        }
    }
}

fn relationship_type(field: &FieldDefinition, class: &str) -> SemanticType {
    let item = SemanticType::object(class);
    if field.is_single_relationship() {
        SemanticType::nullable(item)
    } else {
        SemanticType::list_of(item)
    }
}
