//! Source language configuration for tree-sitter
//!
//! Only PHP is scanned; the registration idiom does not exist elsewhere.

use std::path::Path;
use tree_sitter::Language;

/// Configuration for a scanned language
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Language name (e.g., "php")
    pub name: &'static str,
    /// Tree-sitter language function
    pub language_fn: fn() -> Language,
    /// File extensions for this language (without dot)
    pub extensions: &'static [&'static str],
}

impl LanguageConfig {
    /// Get the tree-sitter Language
    pub fn language(&self) -> Language {
        (self.language_fn)()
    }

    /// Check whether a path carries one of this language's extensions
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.contains(&ext))
    }
}

fn lang_php() -> Language {
    tree_sitter_php::LANGUAGE_PHP.into()
}

/// PHP, including the leading `<?php` open tag and any inline HTML.
pub static PHP: LanguageConfig = LanguageConfig {
    name: "php",
    language_fn: lang_php,
    extensions: &["php"],
};
