//! Recursive script discovery under a root directory.

use std::path::Path;

use glob::Pattern;
use walkdir::WalkDir;

use super::types::ScriptEntry;
use crate::error::{Result, ScripnyError};

/// Settings for a discovery walk.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Substring a file name must contain.
    pub marker: String,
    /// Compiled exclude patterns, matched against root-relative paths.
    pub exclude: Vec<Pattern>,
}

impl DiscoveryOptions {
    /// Create options with a marker and no excludes.
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            exclude: Vec::new(),
        }
    }

    /// Compile and attach exclude glob patterns.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` for the first pattern that does not compile.
    pub fn with_excludes(mut self, patterns: &[String]) -> Result<Self> {
        self.exclude = compile_excludes(patterns)?;
        Ok(self)
    }

    fn is_excluded(&self, relative: &str) -> bool {
        self.exclude.iter().any(|p| p.matches(relative))
    }
}

/// Compile exclude glob patterns.
pub fn compile_excludes(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| ScripnyError::InvalidPattern {
                pattern: p.clone(),
                message: e.msg.to_string(),
            })
        })
        .collect()
}

/// Walk `root` and collect every regular file whose name contains the marker.
///
/// Symbolic links below the root are not followed, so the walk always
/// terminates. Entries that cannot be read are skipped. A missing root
/// yields an empty list.
///
/// Entries come back in filesystem order; use
/// [`ScriptCatalog::from_discovered`](super::ScriptCatalog::from_discovered)
/// to put them in catalog order.
///
/// # Errors
///
/// Returns `OutOfMemory` if the result list cannot grow.
pub fn discover(root: &Path, options: &DiscoveryOptions) -> Result<Vec<ScriptEntry>> {
    let mut found = Vec::new();

    let walker = WalkDir::new(root).follow_links(false).min_depth(1);
    for entry in walker.into_iter().filter_map(|e| match e {
        Ok(entry) => Some(entry),
        Err(err) => {
            tracing::debug!(error = %err, "skipping unreadable entry");
            None
        }
    }) {
        // Symlinks report their own type here, never is_file()
        if !entry.file_type().is_file() {
            continue;
        }
        if !entry
            .file_name()
            .to_string_lossy()
            .contains(options.marker.as_str())
        {
            continue;
        }

        let Some(relative) = relative_path(root, entry.path()) else {
            continue;
        };
        if options.is_excluded(&relative) {
            tracing::trace!(script = %relative, "excluded");
            continue;
        }

        found
            .try_reserve(1)
            .map_err(|_| ScripnyError::OutOfMemory {
                operation: "growing the script catalog",
                requested: found.len() + 1,
            })?;
        found.push(ScriptEntry::new(entry.into_path(), relative));
    }

    tracing::debug!(root = %root.display(), count = found.len(), "discovery finished");
    Ok(found)
}

/// Root-relative path with `/` separators.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let stripped = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = stripped
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    Some(parts.join("/"))
}
