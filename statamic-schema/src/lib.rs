//! # Statamic schema discovery
//!
//! Statamic entries, terms, assets and global variables expose their fields
//! through magic properties. This crate recovers those fields statically so a
//! PHP analysis host can type `$entry->hero_image` and flag `$entry->subtitle`
//! when no blueprint declares it.
//!
//! ## Features
//!
//! - **Registry**: blueprint fields and computed fields merged per content type
//! - **Types**: each fieldtype mapped to a [`SemanticType`]
//! - **Properties**: universal properties and blueprint fields as typed properties
//! - **Rule**: one diagnostic for every read of an undeclared field
//! - **Return types**: narrowed results of the Entry, Collection and GlobalSet
//!   facades and their query builders
//!
//! ## Example
//!
//! ```no_run
//! use statamic_schema::{ClassDescriptor, PropertyFetch, SchemaAnalyzer};
//!
//! let analyzer = SchemaAnalyzer::load("/srv/site")?;
//! let entry = ClassDescriptor::new("Statamic\\Entries\\Entry");
//!
//! if let Some(property) = analyzer.properties().get_property(&entry, "hero_image") {
//!     println!("hero_image: {}", property.ty);
//! }
//!
//! for diagnostic in analyzer.rule().process(&PropertyFetch::named("subtitle", vec![entry])) {
//!     println!("{}", diagnostic);
//! }
//! # Ok::<(), statamic_schema::SchemaError>(())
//! ```

#![warn(missing_docs)]

mod analyzer;
mod content;
mod error;
mod mapper;
mod properties;
mod reflection;
mod repository;
mod return_types;
mod rules;
mod semantic;

pub use analyzer::SchemaAnalyzer;
pub use content::{ContentClassMap, PropertyTable};
pub use error::{Result, SchemaError};
pub use mapper::{FieldtypeMapper, RELATIONSHIP_CLASSES};
pub use properties::{BlueprintProperty, BlueprintPropertyExtension};
pub use reflection::{ClassDescriptor, ClassReflection};
pub use repository::{BlueprintRepository, FieldLookup, FieldRegistry};
pub use return_types::{
    ReturnTypeResolver, BUILDER_MODELS, COLLECTION_FACADE, ENTRY_FACADE, GLOBAL_SET_FACADE,
};
pub use rules::{Diagnostic, PropertyFetch, PropertyName, UndefinedFieldRule, UNDEFINED_FIELD_IDENTIFIER};
pub use semantic::{SemanticType, CARBON_CLASS};

pub use statamic_config::{SchemaConfig, Severity};
pub use statamic_fields::{ContentType, FieldDefinition};
