//! Which PHP classes hold blueprint content, and the properties every
//! instance carries regardless of blueprints.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use statamic_fields::ContentType;

use crate::reflection::ClassReflection;
use crate::semantic::SemanticType;

/// Content classes and contracts, by content type.
const CLASS_TO_CONTENT_TYPE: &[(&str, ContentType)] = &[
    ("Statamic\\Entries\\Entry", ContentType::Entry),
    ("Statamic\\Contracts\\Entries\\Entry", ContentType::Entry),
    ("Statamic\\Taxonomies\\LocalizedTerm", ContentType::Term),
    ("Statamic\\Contracts\\Taxonomies\\Term", ContentType::Term),
    ("Statamic\\Assets\\Asset", ContentType::Asset),
    ("Statamic\\Contracts\\Assets\\Asset", ContentType::Asset),
    ("Statamic\\Globals\\Variables", ContentType::Global),
    ("Statamic\\Contracts\\Globals\\Variables", ContentType::Global),
];

/// Universal property name to type.
pub type PropertyTable = BTreeMap<&'static str, SemanticType>;

static UNIVERSAL_PROPERTIES: Lazy<BTreeMap<ContentType, PropertyTable>> =
    Lazy::new(build_universal_properties);

/// Lookups between PHP classes and content types.
pub struct ContentClassMap;

impl ContentClassMap {
    /// Content type of a class name, ignoring ancestors.
    pub fn content_type_for_name(class: &str) -> Option<ContentType> {
        let class = class.trim_start_matches('\\');
        CLASS_TO_CONTENT_TYPE
            .iter()
            .find(|(name, _)| *name == class)
            .map(|(_, content_type)| *content_type)
    }

    /// Content type of a class, checking the class itself then its ancestors
    /// in the order the host lists them.
    pub fn content_type_for<C: ClassReflection + ?Sized>(class: &C) -> Option<ContentType> {
        Self::content_type_for_name(class.name()).or_else(|| {
            class
                .ancestors()
                .iter()
                .find_map(|ancestor| Self::content_type_for_name(ancestor))
        })
    }

    /// True for content classes and their subclasses.
    pub fn is_content_class<C: ClassReflection + ?Sized>(class: &C) -> bool {
        Self::content_type_for(class).is_some()
    }

    /// Properties present on every instance of `content_type`.
    pub fn universal_properties(content_type: ContentType) -> &'static PropertyTable {
        // Every content type has an entry in the table.
        &UNIVERSAL_PROPERTIES[&content_type]
    }

    /// Type of a universal property, if `name` is one.
    pub fn universal_property(content_type: ContentType, name: &str) -> Option<&'static SemanticType> {
        Self::universal_properties(content_type).get(name)
    }
}

fn build_universal_properties() -> BTreeMap<ContentType, PropertyTable> {
    use SemanticType as T;

    let string_or_null = || SemanticType::nullable(T::String);
    let int_or_null = || SemanticType::nullable(T::Int);

    let entry = PropertyTable::from([
        ("id", T::String),
        ("title", T::String),
        ("slug", T::String),
        ("url", T::String),
        ("uri", string_or_null()),
        ("permalink", T::String),
        ("date", T::Date),
        ("published", T::Bool),
        ("status", T::String),
        ("locale", T::String),
        ("last_modified", T::Date),
        ("edit_url", T::String),
        ("api_url", string_or_null()),
        ("collection", SemanticType::object("Statamic\\Entries\\Collection")),
    ]);

    let term = PropertyTable::from([
        ("id", T::String),
        ("title", T::String),
        ("slug", T::String),
        ("url", T::String),
        ("uri", string_or_null()),
        ("permalink", T::String),
        ("locale", T::String),
        ("edit_url", T::String),
        ("api_url", string_or_null()),
    ]);

    let asset = PropertyTable::from([
        ("id", T::String),
        ("url", T::String),
        ("permalink", T::String),
        ("path", T::String),
        ("filename", T::String),
        ("basename", T::String),
        ("extension", T::String),
        ("size", T::Int),
        ("size_bytes", T::Int),
        ("last_modified", T::Date),
        ("mime_type", T::String),
        ("edit_url", T::String),
        ("api_url", string_or_null()),
        ("is_image", T::Bool),
        ("is_audio", T::Bool),
        ("is_video", T::Bool),
        ("width", int_or_null()),
        ("height", int_or_null()),
    ]);

    let global = PropertyTable::from([
        ("id", T::String),
        ("handle", T::String),
        ("title", T::String),
        ("locale", T::String),
        ("api_url", string_or_null()),
    ]);

    BTreeMap::from([
        (ContentType::Entry, entry),
        (ContentType::Term, term),
        (ContentType::Asset, asset),
        (ContentType::Global, global),
    ])
}
