// Model entry types and drop payloads for the vault

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Validation status of a model folder
///
/// Derived fresh from directory contents on every scan, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelStatus {
    /// Both the weights file and the index file are present
    Complete,
    /// The folder has children but lacks one or both required files
    MissingFiles {
        /// The `.pth` weights file is absent
        weights: bool,
        /// The `.index` file is absent
        index: bool,
    },
    /// The folder has no children at all
    Empty,
}

impl ModelStatus {
    /// Whether the model folder is usable as-is
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Status glyph shown next to the model name, if any
    #[must_use]
    pub const fn glyph(&self) -> Option<&'static str> {
        match self {
            Self::Complete => None,
            Self::MissingFiles { .. } => Some("⚠️"),
            Self::Empty => Some("❔"),
        }
    }

    /// Tooltip-style detail message for non-complete folders
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Complete => None,
            Self::Empty => Some("Folder is empty.".to_string()),
            Self::MissingFiles { weights, index } => {
                let mut missing = Vec::new();
                if *weights {
                    missing.push(format!(".{}", crate::WEIGHTS_EXTENSION));
                }
                if *index {
                    missing.push(format!(".{}", crate::INDEX_EXTENSION));
                }
                Some(format!(
                    "Missing {} file(s). Model won't work.",
                    missing.join(", ")
                ))
            }
        }
    }
}

/// One installed model: a direct subdirectory of the model root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Folder name under the model root
    pub name: String,
    /// Validation status derived from the folder's immediate children
    pub status: ModelStatus,
}

impl ModelEntry {
    /// Create a new entry
    #[must_use]
    pub fn new<S: Into<String>>(name: S, status: ModelStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }

    /// Name with the status glyph appended, as rendered in a list view
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.status.glyph() {
            Some(glyph) => format!("{} {}", self.name, glyph),
            None => self.name.clone(),
        }
    }

    /// Tooltip detail for this entry, if the folder is not complete
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        self.status.detail()
    }
}

/// A drag-and-drop payload of one or more filesystem paths
///
/// Single-item and multi-item drops follow different import rules, so the
/// distinction is modeled explicitly instead of inspecting list length at
/// every call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropPayload {
    /// One dropped file or directory
    Single(PathBuf),
    /// Several items dropped together
    Multiple(Vec<PathBuf>),
}

impl DropPayload {
    /// Build a payload from a list of dropped paths, collapsing a
    /// single-element list to `Single`
    #[must_use]
    pub fn from_paths(mut paths: Vec<PathBuf>) -> Self {
        if paths.len() == 1 {
            Self::Single(paths.remove(0))
        } else {
            Self::Multiple(paths)
        }
    }

    /// All paths in the payload, in drop order
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        match self {
            Self::Single(path) => std::slice::from_ref(path),
            Self::Multiple(paths) => paths,
        }
    }
}

impl From<PathBuf> for DropPayload {
    fn from(path: PathBuf) -> Self {
        Self::Single(path)
    }
}

impl From<Vec<PathBuf>> for DropPayload {
    fn from(paths: Vec<PathBuf>) -> Self {
        Self::from_paths(paths)
    }
}
