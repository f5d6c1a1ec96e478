//! Blueprint location discovery.
//!
//! The locator walks every configured base directory and applies each entry
//! of [`CONVENTIONS`] to it. Missing directories produce no locations, and a
//! directory that cannot be listed is logged and treated as empty, so one bad
//! path never hides the blueprints found elsewhere.

use std::path::{Path, PathBuf};

use serde::Serialize;
use statamic_fields::ContentType;
use walkdir::WalkDir;

use crate::config::{Convention, Layout, CONVENTIONS};
use crate::error::{DirectoryError, Result};

/// File extension of blueprint documents.
pub const BLUEPRINT_EXTENSION: &str = "yaml";

/// Where a blueprint lives and what it describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlueprintLocation {
    pub content_type: ContentType,
    /// The full path to the blueprint file.
    pub path: PathBuf,
    /// Collection or taxonomy handle for nested layouts, file stem for flat ones.
    pub group: String,
}

/// Finds blueprint documents beneath a list of base directories.
#[derive(Debug, Clone, Default)]
pub struct BlueprintLocator {
    base_paths: Vec<PathBuf>,
}

impl BlueprintLocator {
    pub fn new(base_paths: Vec<PathBuf>) -> Self {
        Self { base_paths }
    }

    pub fn base_paths(&self) -> &[PathBuf] {
        &self.base_paths
    }

    /// Locate every blueprint under every base path.
    ///
    /// Base paths are visited in configured order; within a base path the
    /// conventions are applied in [`CONVENTIONS`] order. Groups and files are
    /// sorted by name.
    pub fn locate_all(&self) -> Vec<BlueprintLocation> {
        let mut locations = Vec::new();

        for base_path in &self.base_paths {
            if !base_path.is_dir() {
                tracing::debug!(
                    "Skipping blueprint path '{}' - not a directory",
                    base_path.display()
                );
                continue;
            }

            for convention in CONVENTIONS {
                locations.extend(self.locate_convention(base_path, convention));
            }
        }

        tracing::debug!(
            locations = locations.len(),
            base_paths = self.base_paths.len(),
            "located blueprints"
        );

        locations
    }

    /// Locate the blueprints of a single content type, preserving order.
    pub fn locate_for_content_type(&self, content_type: ContentType) -> Vec<BlueprintLocation> {
        self.locate_all()
            .into_iter()
            .filter(|location| location.content_type == content_type)
            .collect()
    }

    fn locate_convention(&self, base_path: &Path, convention: &Convention) -> Vec<BlueprintLocation> {
        let dir = base_path.join(convention.dir_name);
        if !dir.is_dir() {
            return Vec::new();
        }

        let result = match convention.layout {
            Layout::Nested => Self::scan_nested(&dir, convention.content_type),
            Layout::Flat => Self::scan_flat(&dir, convention.content_type),
        };

        result.unwrap_or_else(|e| {
            tracing::warn!("Skipping blueprint directory '{}': {}", dir.display(), e);
            Vec::new()
        })
    }

    /// Scan `{dir}/{group}/*.yaml`.
    fn scan_nested(dir: &Path, content_type: ContentType) -> Result<Vec<BlueprintLocation>> {
        let mut locations = Vec::new();

        for group_dir in list_dir(dir)?.into_iter().filter(|p| p.is_dir()) {
            let Some(group) = file_name(&group_dir) else {
                continue;
            };

            let files = match blueprint_files(&group_dir) {
                Ok(files) => files,
                Err(e) => {
                    tracing::warn!("Skipping blueprint group '{}': {}", group_dir.display(), e);
                    continue;
                }
            };

            locations.extend(files.into_iter().map(|path| BlueprintLocation {
                content_type,
                path,
                group: group.clone(),
            }));
        }

        Ok(locations)
    }

    /// Scan `{dir}/*.yaml`.
    fn scan_flat(dir: &Path, content_type: ContentType) -> Result<Vec<BlueprintLocation>> {
        Ok(blueprint_files(dir)?
            .into_iter()
            .filter_map(|path| {
                let group = path.file_stem()?.to_str()?.to_string();
                Some(BlueprintLocation {
                    content_type,
                    path,
                    group,
                })
            })
            .collect())
    }
}

/// Immediate children of `dir`, sorted by file name.
///
/// Only a failure to open `dir` itself is an error. Children that cannot be
/// inspected, such as dangling symlinks, are logged and left out.
fn list_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut children = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        match entry {
            Ok(entry) => children.push(entry.into_path()),
            Err(e) if e.depth() == 0 => return Err(DirectoryError::read_dir(dir, e)),
            Err(e) => tracing::warn!("Skipping entry in '{}': {}", dir.display(), e),
        }
    }

    Ok(children)
}

/// Blueprint files directly inside `dir`. Hidden files are not blueprints.
fn blueprint_files(dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(list_dir(dir)?
        .into_iter()
        .filter(|path| path.is_file())
        .filter(|path| !file_name(path).is_some_and(|name| name.starts_with('.')))
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(BLUEPRINT_EXTENSION))
        .collect())
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}
