//! The fixed sub-directory conventions blueprints are discovered under.

use statamic_fields::ContentType;

/// How blueprint files are arranged beneath a convention directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `{dir}/{group}/{blueprint}.yaml`; the group is the child directory name.
    Nested,
    /// `{dir}/{blueprint}.yaml`; the group is the file stem.
    Flat,
}

/// One recognised sub-directory of a blueprint base path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Convention {
    /// Sub-directory name relative to the base path
    pub dir_name: &'static str,
    /// Content type of every blueprint found here
    pub content_type: ContentType,
    pub layout: Layout,
}

/// All conventions, in discovery order: nested before flat.
pub static CONVENTIONS: &[Convention] = &[
    Convention {
        dir_name: "collections",
        content_type: ContentType::Entry,
        layout: Layout::Nested,
    },
    Convention {
        dir_name: "taxonomies",
        content_type: ContentType::Term,
        layout: Layout::Nested,
    },
    Convention {
        dir_name: "globals",
        content_type: ContentType::Global,
        layout: Layout::Flat,
    },
    Convention {
        dir_name: "assets",
        content_type: ContentType::Asset,
        layout: Layout::Flat,
    },
];
