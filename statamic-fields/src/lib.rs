//! Blueprint field definitions and the blueprint document parser
//!
//! `statamic-fields` is the leaf crate of the schema discovery workspace. It owns
//! the immutable [`FieldDefinition`] value, the [`ContentType`] tag that every
//! other crate keys its tables by, and the [`BlueprintParser`] that turns one
//! YAML blueprint into a flat list of fields.
//!
//! # Architecture
//!
//! - **Schema-only**: Describes which fields exist and how they are declared, never field values
//! - **YAML on disk**: One blueprint document per file, three accepted document shapes
//! - **Total parsing**: [`BlueprintParser::parse`] never fails; bad input yields no fields

pub mod error;
pub mod parser;
pub mod types;

pub use error::{FieldsError, Result};
pub use parser::BlueprintParser;
pub use types::{ContentType, FieldConfig, FieldDefinition, COMPUTED_KIND, DEFAULT_KIND};
