//! Semantic types handed to the type-inference host.
//!
//! Rendering follows PHPStan's notation, so `Display` output can be compared
//! against what the host prints: `Statamic\Assets\Asset|null`,
//! `array<int, Statamic\Assets\Asset>`, `array`, `string|int`.

use std::fmt;

/// Class that `date` fields and timestamps resolve to.
pub const CARBON_CLASS: &str = "Carbon\\Carbon";

/// The type of a property as the host's type system sees it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SemanticType {
    /// `string`
    String,
    /// `bool`
    Bool,
    /// `int`
    Int,
    /// `float`
    Float,
    /// A `Carbon\Carbon` instance
    Date,
    /// `null`
    Null,
    /// An instance of the named class
    Object(String),
    /// Any one of the members
    Union(Vec<SemanticType>),
    /// An array with the given key and value types
    Array {
        /// Key type
        key: Box<SemanticType>,
        /// Value type
        value: Box<SemanticType>,
    },
    /// Nothing is known
    Mixed,
    /// A generic class instantiated with type arguments
    Generic {
        /// The generic class
        class: String,
        /// Type arguments, in declaration order
        args: Vec<SemanticType>,
    },
}

impl SemanticType {
    /// An instance of `class`; a leading `\` is dropped.
    pub fn object(class: impl AsRef<str>) -> Self {
        SemanticType::Object(class.as_ref().trim_start_matches('\\').to_string())
    }

    /// `inner|null`
    pub fn nullable(inner: SemanticType) -> Self {
        SemanticType::Union(vec![inner, SemanticType::Null])
    }

    /// `array<int, value>`
    pub fn list_of(value: SemanticType) -> Self {
        SemanticType::Array {
            key: Box::new(SemanticType::Int),
            value: Box::new(value),
        }
    }

    /// `array<mixed, mixed>`
    pub fn mixed_array() -> Self {
        SemanticType::Array {
            key: Box::new(SemanticType::Mixed),
            value: Box::new(SemanticType::Mixed),
        }
    }

    /// `class<args...>`
    pub fn generic(class: impl AsRef<str>, args: Vec<SemanticType>) -> Self {
        SemanticType::Generic {
            class: class.as_ref().trim_start_matches('\\').to_string(),
            args,
        }
    }

    /// True when `null` is one of the possible values.
    pub fn is_nullable(&self) -> bool {
        match self {
            SemanticType::Null | SemanticType::Mixed => true,
            SemanticType::Union(members) => members.iter().any(SemanticType::is_nullable),
            _ => false,
        }
    }

    /// The class of an object, date or generic type.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            SemanticType::Object(class) | SemanticType::Generic { class, .. } => Some(class),
            SemanticType::Date => Some(CARBON_CLASS),
            _ => None,
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticType::String => f.write_str("string"),
            SemanticType::Bool => f.write_str("bool"),
            SemanticType::Int => f.write_str("int"),
            SemanticType::Float => f.write_str("float"),
            SemanticType::Date => f.write_str(CARBON_CLASS),
            SemanticType::Null => f.write_str("null"),
            SemanticType::Mixed => f.write_str("mixed"),
            SemanticType::Object(class) => f.write_str(class),
            SemanticType::Union(members) => write_joined(f, members, "|"),
            SemanticType::Array { key, value } => {
                if **key == SemanticType::Mixed && **value == SemanticType::Mixed {
                    f.write_str("array")
                } else {
                    write!(f, "array<{}, {}>", key, value)
                }
            }
            SemanticType::Generic { class, args } => {
                write!(f, "{}<", class)?;
                write_joined(f, args, ", ")?;
                f.write_str(">")
            }
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, types: &[SemanticType], separator: &str) -> fmt::Result {
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{}", ty)?;
    }
    Ok(())
}
