//! Blueprint document parser.
//!
//! Statamic has used three layouts for blueprints over time. All three are
//! accepted, and a single document may mix them:
//!
//! ```yaml
//! tabs:                    # current layout
//!   main:
//!     sections:
//!       - fields:
//!           - handle: body
//!             field: { type: markdown }
//!     fields: []           # a tab may also list fields directly
//! sections:                # legacy layout
//!   main:
//!     fields: []
//! fields: []               # flat layout
//! ```

use std::path::Path;

use serde_yaml_ng::{Mapping, Value};
use tracing::{debug, trace, warn};

use crate::error::{FieldsError, Result};
use crate::types::{FieldConfig, FieldDefinition, DEFAULT_KIND};

/// Keys already captured by [`FieldDefinition`] or irrelevant to typing.
const BOOKKEEPING_KEYS: &[&str] = &["type", "display", "instructions", "handle"];

/// Stateless reader that turns one blueprint into a flat field list.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlueprintParser;

impl BlueprintParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse the blueprint at `path`.
    ///
    /// Never fails: a missing, unreadable, empty or malformed document yields
    /// an empty list.
    pub fn parse(&self, path: &Path) -> Vec<FieldDefinition> {
        match self.try_parse(path) {
            Ok(fields) => {
                trace!(path = %path.display(), fields = fields.len(), "parsed blueprint");
                fields
            }
            Err(e) => {
                warn!("Skipping blueprint '{}': {}", path.display(), e);
                Vec::new()
            }
        }
    }

    /// Parse the blueprint at `path`, surfacing read and YAML errors.
    ///
    /// A path that does not exist is not an error and yields no fields.
    pub fn try_parse(&self, path: &Path) -> Result<Vec<FieldDefinition>> {
        if !path.exists() {
            debug!(path = %path.display(), "blueprint does not exist");
            return Ok(Vec::new());
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| FieldsError::file_read(path, e))?;
        self.parse_str(&content)
    }

    /// Parse blueprint content held in memory.
    pub fn parse_str(&self, content: &str) -> Result<Vec<FieldDefinition>> {
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let document: Value = serde_yaml_ng::from_str(content)?;

        Ok(match document {
            Value::Mapping(ref root) => extract_fields(root),
            _ => Vec::new(),
        })
    }
}

fn extract_fields(root: &Mapping) -> Vec<FieldDefinition> {
    let mut fields = Vec::new();

    if let Some(tabs) = root.get("tabs") {
        for tab in members(tabs) {
            if let Value::Mapping(tab) = tab {
                fields.extend(extract_fields_from_tab(tab));
            }
        }
    }

    if let Some(sections) = root.get("sections") {
        for section in members(sections) {
            fields.extend(extract_fields_from_section(section));
        }
    }

    if let Some(list) = root.get("fields") {
        fields.extend(parse_field_list(list));
    }

    fields
}

fn extract_fields_from_tab(tab: &Mapping) -> Vec<FieldDefinition> {
    let mut fields = Vec::new();

    if let Some(sections) = tab.get("sections") {
        for section in members(sections) {
            fields.extend(extract_fields_from_section(section));
        }
    }

    if let Some(list) = tab.get("fields") {
        fields.extend(parse_field_list(list));
    }

    fields
}

fn extract_fields_from_section(section: &Value) -> Vec<FieldDefinition> {
    match section.get("fields") {
        Some(list) => parse_field_list(list),
        None => Vec::new(),
    }
}

fn parse_field_list(list: &Value) -> Vec<FieldDefinition> {
    members(list).filter_map(parse_field_entry).collect()
}

/// Build one definition from a `fields` entry, or skip it.
///
/// Both idioms are accepted: a reference entry whose data sits under `field`,
/// and an inline entry that carries the data itself.
fn parse_field_entry(entry: &Value) -> Option<FieldDefinition> {
    let Value::Mapping(entry) = entry else {
        return None;
    };

    // Fieldset imports are not expanded.
    if entry.contains_key("import") {
        return None;
    }

    let handle = entry.get("handle")?.as_str()?;

    let data = match entry.get("field") {
        None | Some(Value::Null) => entry,
        Some(Value::Mapping(field)) => field,
        Some(_) => return None,
    };

    let kind = match data.get("type") {
        None | Some(Value::Null) => DEFAULT_KIND,
        Some(kind) => kind.as_str()?,
    };

    let config: FieldConfig = data
        .iter()
        .filter_map(|(key, value)| Some((config_key(key)?, value.clone())))
        .filter(|(key, _)| !BOOKKEEPING_KEYS.contains(&key.as_str()))
        .collect();

    Some(FieldDefinition::new(handle, kind, config))
}

/// Scalar mapping keys become strings; structured keys are dropped.
fn config_key(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// The children of a sequence, or the values of a mapping.
fn members(value: &Value) -> Box<dyn Iterator<Item = &Value> + '_> {
    match value {
        Value::Sequence(items) => Box::new(items.iter()),
        Value::Mapping(map) => Box::new(map.values()),
        _ => Box::new(std::iter::empty()),
    }
}
