//! The undefined blueprint field rule.
//!
//! # Example
//!
//! ```
//! use statamic_schema::{Diagnostic, Severity};
//!
//! let diagnostic = Diagnostic::new(
//!     "Access to field 'subtitle' on Statamic\\Entries\\Entry that is not defined in any blueprint.",
//!     Severity::Error,
//! );
//! assert_eq!(diagnostic.identifier, "statamic.undefinedField");
//! ```

use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use statamic_config::Severity;

use crate::content::ContentClassMap;
use crate::reflection::{ClassDescriptor, ClassReflection};
use crate::repository::BlueprintRepository;

/// Identifier attached to every undefined field diagnostic.
pub const UNDEFINED_FIELD_IDENTIFIER: &str = "statamic.undefinedField";

/// The property name of a fetch expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyName {
    /// `$entry->subtitle`
    Static(String),
    /// `$entry->{$name}` or `$entry->$name`
    Dynamic,
}

/// A property fetch as the host sees it.
#[derive(Debug, Clone)]
pub struct PropertyFetch<C = ClassDescriptor> {
    /// The fetched property
    pub name: PropertyName,
    /// Every class the receiver expression may be an instance of
    pub receiver_classes: Vec<C>,
    /// Line of the fetch, when known
    pub line: Option<usize>,
}

impl<C> PropertyFetch<C> {
    /// A fetch of a literal property name.
    pub fn named(name: impl Into<String>, receiver_classes: Vec<C>) -> Self {
        Self {
            name: PropertyName::Static(name.into()),
            receiver_classes,
            line: None,
        }
    }

    /// A fetch whose name is only known at runtime.
    pub fn dynamic(receiver_classes: Vec<C>) -> Self {
        Self {
            name: PropertyName::Dynamic,
            receiver_classes,
            line: None,
        }
    }

    /// Attach a line number.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

/// A problem found in analyzed code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Stable identifier for suppression and filtering
    pub identifier: &'static str,
    /// Human readable description
    pub message: String,
    /// Severity level of the diagnostic
    pub severity: Severity,
    /// Line the diagnostic applies to, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Diagnostic {
    /// Create an undefined field diagnostic with no line.
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            identifier: UNDEFINED_FIELD_IDENTIFIER,
            message: message.into(),
            severity,
            line: None,
        }
    }

    /// Format the diagnostic as a compact single-line summary
    pub fn compact_format(&self) -> String {
        match self.line {
            Some(line) => format!("{}:{} {}", self.severity, line, self.identifier),
            None => format!("{} {}", self.severity, self.identifier),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.message, self.identifier)
    }
}

/// Reports reads of fields no blueprint declares.
#[derive(Debug, Clone)]
pub struct UndefinedFieldRule {
    repository: Rc<BlueprintRepository>,
    severity: Severity,
    enabled: bool,
}

impl UndefinedFieldRule {
    /// Create an enabled rule reporting at `severity`.
    pub fn new(repository: Rc<BlueprintRepository>, severity: Severity) -> Self {
        Self {
            repository,
            severity,
            enabled: true,
        }
    }

    /// Turn reporting on or off.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Severity of reported diagnostics.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Check one property fetch.
    ///
    /// The first receiver class that is a content class decides: a universal
    /// property or registered field is fine, anything else is one diagnostic.
    /// Dynamic names and receivers with no content class are never reported.
    pub fn process<C: ClassReflection>(&self, fetch: &PropertyFetch<C>) -> Vec<Diagnostic> {
        if !self.enabled {
            return Vec::new();
        }

        let PropertyName::Static(name) = &fetch.name else {
            return Vec::new();
        };

        for class in &fetch.receiver_classes {
            let Some(content_type) = ContentClassMap::content_type_for(class) else {
                continue;
            };

            if self.repository.has_field(content_type, name) {
                return Vec::new();
            }

            let mut diagnostic = Diagnostic::new(
                format!(
                    "Access to field '{}' on {} that is not defined in any blueprint.",
                    name,
                    class.display_name()
                ),
                self.severity,
            );
            diagnostic.line = fetch.line;
            return vec![diagnostic];
        }

        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_formatting() {
        let mut diagnostic = Diagnostic::new("Access to field 'x' on Foo.", Severity::Warning);
        assert_eq!(diagnostic.compact_format(), "warning statamic.undefinedField");
        assert_eq!(
            diagnostic.to_string(),
            "Access to field 'x' on Foo. [statamic.undefinedField]"
        );

        diagnostic.line = Some(12);
        assert_eq!(diagnostic.compact_format(), "warning:12 statamic.undefinedField");
    }

    #[test]
    fn test_diagnostic_serializes() {
        let diagnostic = Diagnostic::new("message", Severity::Error);
        let json = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(json["identifier"], "statamic.undefinedField");
        assert_eq!(json["severity"], "error");
        assert!(json.get("line").is_none());
    }

    #[test]
    fn test_property_fetch_builders() {
        let fetch: PropertyFetch = PropertyFetch::named("subtitle", Vec::new()).at_line(7);
        assert_eq!(fetch.name, PropertyName::Static("subtitle".into()));
        assert_eq!(fetch.line, Some(7));

        let fetch: PropertyFetch = PropertyFetch::dynamic(Vec::new());
        assert_eq!(fetch.name, PropertyName::Dynamic);
    }
}
