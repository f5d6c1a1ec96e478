//! Blueprint discovery under Statamic's directory conventions.
//!
//! A Statamic project keeps its blueprints under one or more base directories
//! (usually `resources/blueprints`). Inside each base, four sub-directories are
//! recognised:
//!
//! ```text
//! resources/blueprints/
//!   collections/<collection>/<blueprint>.yaml   ← entry, group = collection
//!   taxonomies/<taxonomy>/<blueprint>.yaml      ← term, group = taxonomy
//!   globals/<set>.yaml                          ← global, group = file stem
//!   assets/<container>.yaml                     ← asset, group = file stem
//! ```
//!
//! # Example
//!
//! ```no_run
//! use statamic_directory::BlueprintLocator;
//! use statamic_fields::ContentType;
//!
//! let locator = BlueprintLocator::new(vec!["resources/blueprints".into()]);
//! for location in locator.locate_for_content_type(ContentType::Entry) {
//!     println!("{} ({}): {}", location.group, location.content_type, location.path.display());
//! }
//! ```

mod config;
mod error;
mod locator;

// Re-export main types
pub use config::{Convention, Layout, CONVENTIONS};
pub use error::{DirectoryError, Result};
pub use locator::{BlueprintLocation, BlueprintLocator, BLUEPRINT_EXTENSION};
