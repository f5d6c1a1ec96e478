//! Tree-sitter based discovery of computed fields
//!
//! Statamic lets applications attach fields to entries from PHP code instead of
//! a blueprint:
//!
//! ```php
//! use Statamic\Facades\Collection;
//!
//! Collection::computed('articles', 'reading_time', fn ($entry) => ...);
//! Collection::computed(['articles', 'pages'], [
//!     'shares' => fn ($entry) => 0,
//!     'likes' => fn ($entry) => 0,
//! ]);
//! ```
//!
//! [`ComputedFieldScanner`] walks a set of source paths, parses every PHP file
//! that mentions `computed` with tree-sitter, and turns each matching call into
//! [`FieldDefinition`](statamic_fields::FieldDefinition)s of kind `computed`.
//!
//! # Quick Start
//!
//! ```no_run
//! use statamic_computed::ComputedFieldScanner;
//!
//! let scanner = ComputedFieldScanner::new(vec!["app".into()]);
//! for field in scanner.scan() {
//!     println!("computed field: {}", field.handle());
//! }
//! ```

pub mod error;
pub mod language;
pub mod scanner;

pub use error::{ComputedError, Result};
pub use language::{LanguageConfig, PHP};
pub use scanner::{ComputedFieldScanner, FACADE_CLASSES, REGISTRATION_METHOD};
