//! Core field and content-type types for the blueprint registry.
//!
//! A [`FieldDefinition`] is the unit every discovery source produces: a handle,
//! the declared fieldtype (its "kind"), and whatever configuration the blueprint
//! carried alongside it. Definitions are immutable once built.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FieldsError;

/// Fieldtype assumed when a blueprint field omits `type`.
pub const DEFAULT_KIND: &str = "text";

/// Fieldtype given to fields registered in source via `Collection::computed`.
pub const COMPUTED_KIND: &str = "computed";

/// Auxiliary configuration of a field, keyed by option name.
pub type FieldConfig = BTreeMap<String, serde_yaml_ng::Value>;

/// The four kinds of content the registry classifies fields under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Entry,
    Term,
    Asset,
    Global,
}

impl ContentType {
    /// Every content type, in registry order.
    pub const ALL: [ContentType; 4] = [
        ContentType::Entry,
        ContentType::Term,
        ContentType::Asset,
        ContentType::Global,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Entry => "entry",
            ContentType::Term => "term",
            ContentType::Asset => "asset",
            ContentType::Global => "global",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = FieldsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entry" => Ok(ContentType::Entry),
            "term" => Ok(ContentType::Term),
            "asset" => Ok(ContentType::Asset),
            "global" => Ok(ContentType::Global),
            _ => Err(FieldsError::UnknownContentType { name: s.to_string() }),
        }
    }
}

/// A discovered field: the handle, fieldtype and configuration of one attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    handle: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    config: FieldConfig,
}

impl FieldDefinition {
    pub fn new(handle: impl Into<String>, kind: impl Into<String>, config: FieldConfig) -> Self {
        Self {
            handle: handle.into(),
            kind: kind.into(),
            config,
        }
    }

    /// A field registered in application source; carries no configuration.
    pub fn computed(handle: impl Into<String>) -> Self {
        Self::new(handle, COMPUTED_KIND, FieldConfig::new())
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// The declared fieldtype, e.g. `markdown` or `assets`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// `max_items` as an integer.
    ///
    /// Accepts an integer or a numeric string. A string with a fractional
    /// part or an exponent is truncated toward zero, so `"1.0"` and `"1e0"`
    /// are both 1. Any other value, or no value, yields `None`.
    pub fn max_items(&self) -> Option<i64> {
        match self.config.get("max_items")? {
            serde_yaml_ng::Value::Number(n) => n.as_i64(),
            serde_yaml_ng::Value::String(s) => parse_numeric(s.trim()),
            _ => None,
        }
    }

    /// True when the field holds at most one related item.
    pub fn is_single_relationship(&self) -> bool {
        self.max_items() == Some(1)
    }
}

fn parse_numeric(s: &str) -> Option<i64> {
    if let Ok(n) = s.parse::<i64>() {
        return Some(n);
    }
    s.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(|n| n.trunc() as i64)
}
