//! Type definitions for discovered scripts.

use std::fmt;
use std::path::{Path, PathBuf};

use super::ordering::sort_entries;

/// A discovered script file.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ScriptEntry {
    /// Path used to launch the script (root joined with the relative path).
    path: PathBuf,
    /// Root-relative path with `/` separators, used for display and filtering.
    relative: String,
}

impl ScriptEntry {
    /// Create a new entry.
    pub fn new(path: impl Into<PathBuf>, relative: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            relative: relative.into(),
        }
    }

    /// Get the path used to launch the script.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the root-relative path.
    pub fn relative(&self) -> &str {
        &self.relative
    }

    /// Number of directory levels below the root.
    pub fn depth(&self) -> usize {
        path_depth(&self.relative)
    }
}

impl fmt::Debug for ScriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptEntry")
            .field("relative", &self.relative)
            .field("path", &self.path)
            .finish()
    }
}

impl fmt::Display for ScriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.relative)
    }
}

/// Count the path separators in a relative path.
pub fn path_depth(relative: &str) -> usize {
    relative.bytes().filter(|&b| b == b'/').count()
}

/// The ordered, duplicate-free set of scripts for one session.
#[derive(Debug, Clone, Default)]
pub struct ScriptCatalog {
    root: PathBuf,
    entries: Vec<ScriptEntry>,
}

impl ScriptCatalog {
    /// Create an empty catalog for the given root.
    pub fn empty(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    /// Build a catalog from discovered entries, applying the catalog order.
    pub fn from_discovered(root: impl Into<PathBuf>, mut entries: Vec<ScriptEntry>) -> Self {
        sort_entries(&mut entries);
        Self {
            root: root.into(),
            entries,
        }
    }

    /// Get the directory the catalog was discovered from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the number of scripts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over scripts in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ScriptEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ScriptCatalog {
    type Item = &'a ScriptEntry;
    type IntoIter = std::slice::Iter<'a, ScriptEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
