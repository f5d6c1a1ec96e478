//! Property reflection for content classes.
//!
//! Lets the host resolve `$entry->hero_image` to a typed property instead of
//! a magic `__get`.

use std::rc::Rc;

use serde::Serialize;

use crate::content::ContentClassMap;
use crate::mapper::FieldtypeMapper;
use crate::reflection::ClassReflection;
use crate::repository::{BlueprintRepository, FieldLookup};
use crate::semantic::SemanticType;

/// A readable property backed by a universal property or a blueprint field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlueprintProperty {
    /// The class the property was requested on
    pub declaring_class: String,
    /// Type of the property's value
    #[serde(rename = "type", serialize_with = "serialize_display")]
    pub ty: SemanticType,
}

fn serialize_display<S: serde::Serializer>(ty: &SemanticType, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(ty)
}

/// Resolves properties on entries, terms, assets and global variables.
#[derive(Debug, Clone)]
pub struct BlueprintPropertyExtension {
    repository: Rc<BlueprintRepository>,
    mapper: Rc<FieldtypeMapper>,
}

impl BlueprintPropertyExtension {
    /// Create an extension over a shared repository and mapper.
    pub fn new(repository: Rc<BlueprintRepository>, mapper: Rc<FieldtypeMapper>) -> Self {
        Self { repository, mapper }
    }

    /// True when `class` is a content class and `name` is a universal
    /// property or a registered field of its content type.
    pub fn has_property<C: ClassReflection + ?Sized>(&self, class: &C, name: &str) -> bool {
        ContentClassMap::content_type_for(class)
            .is_some_and(|content_type| self.repository.has_field(content_type, name))
    }

    /// The property `name` on `class`, if [`has_property`](Self::has_property) holds.
    pub fn get_property<C: ClassReflection + ?Sized>(
        &self,
        class: &C,
        name: &str,
    ) -> Option<BlueprintProperty> {
        let content_type = ContentClassMap::content_type_for(class)?;

        let ty = match self.repository.get_field(content_type, name)? {
            FieldLookup::Universal(ty) => ty.clone(),
            FieldLookup::Blueprint(field) => self.mapper.map_to_type(field),
        };

        Some(BlueprintProperty {
            declaring_class: class.name().to_string(),
            ty,
        })
    }
}
