//! The host's view of a PHP class.
//!
//! The analysis engine owns class reflection; this crate only needs a class's
//! name, how to print it, and the names of its parents and interfaces.

/// Reflection data for one class, supplied by the analysis host.
pub trait ClassReflection {
    /// Fully qualified class name, without a leading `\`.
    fn name(&self) -> &str;

    /// Name used in messages. Defaults to [`name`](Self::name).
    fn display_name(&self) -> &str {
        self.name()
    }

    /// Fully qualified names of every parent class and implemented interface.
    fn ancestors(&self) -> &[String];
}

/// A plain-data [`ClassReflection`] for hosts without one of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    name: String,
    display_name: Option<String>,
    ancestors: Vec<String>,
}

impl ClassDescriptor {
    /// Describe `name` with no ancestors.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().trim_start_matches('\\').to_string(),
            display_name: None,
            ancestors: Vec::new(),
        }
    }

    /// Add a parent class or interface.
    pub fn with_ancestor(mut self, ancestor: impl AsRef<str>) -> Self {
        self.ancestors
            .push(ancestor.as_ref().trim_start_matches('\\').to_string());
        self
    }

    /// Override the name used in messages.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }
}

impl ClassReflection for ClassDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    fn ancestors(&self) -> &[String] {
        &self.ancestors
    }
}
