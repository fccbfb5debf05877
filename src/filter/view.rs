//! Filtered views over the script catalog.

use std::ops::Index;

use super::fuzzy::fuzzy_matches;
use crate::catalog::{ScriptCatalog, ScriptEntry};
use crate::config::FilterConfig;

/// How a search term is matched against relative paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    /// Match case exactly.
    pub case_sensitive: bool,
    /// Subsequence matching instead of contiguous substrings.
    pub fuzzy: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            fuzzy: false,
        }
    }
}

impl From<&FilterConfig> for FilterOptions {
    fn from(config: &FilterConfig) -> Self {
        Self {
            case_sensitive: config.case_sensitive,
            fuzzy: config.fuzzy,
        }
    }
}

impl FilterOptions {
    /// Check a single relative path against the term.
    pub fn matches(&self, term: &str, relative: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        if self.fuzzy {
            return fuzzy_matches(term, relative, self.case_sensitive);
        }
        if self.case_sensitive {
            relative.contains(term)
        } else {
            relative.to_lowercase().contains(&term.to_lowercase())
        }
    }
}

/// The scripts matching a search term, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct FilterView<'a> {
    entries: Vec<&'a ScriptEntry>,
}

impl<'a> FilterView<'a> {
    /// Number of visible scripts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the script at a view position.
    pub fn get(&self, index: usize) -> Option<&'a ScriptEntry> {
        self.entries.get(index).copied()
    }

    /// Iterate in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &'a ScriptEntry> + '_ {
        self.entries.iter().copied()
    }

    /// Get the view as a slice.
    pub fn as_slice(&self) -> &[&'a ScriptEntry] {
        &self.entries
    }
}

impl<'a> Index<usize> for FilterView<'a> {
    type Output = ScriptEntry;

    fn index(&self, index: usize) -> &ScriptEntry {
        self.entries[index]
    }
}

/// Filter the catalog with plain case-sensitive substring matching.
///
/// # Examples
///
/// ```
/// use scripny::catalog::{ScriptCatalog, ScriptEntry};
/// use scripny::filter::filter;
///
/// let catalog = ScriptCatalog::from_discovered(
///     "scripts",
///     vec![
///         ScriptEntry::new("scripts/a.sh", "a.sh"),
///         ScriptEntry::new("scripts/sub/b.sh", "sub/b.sh"),
///     ],
/// );
///
/// let view = filter(&catalog, "b");
/// assert_eq!(view.len(), 1);
/// assert_eq!(view[0].relative(), "sub/b.sh");
/// ```
pub fn filter<'a>(catalog: &'a ScriptCatalog, term: &str) -> FilterView<'a> {
    filter_with(catalog, term, FilterOptions::default())
}

/// Filter the catalog with explicit matching options.
///
/// The result is always a subsequence of the catalog in catalog order; an
/// empty term yields every script.
pub fn filter_with<'a>(
    catalog: &'a ScriptCatalog,
    term: &str,
    options: FilterOptions,
) -> FilterView<'a> {
    let entries = if term.is_empty() {
        catalog.iter().collect()
    } else {
        catalog
            .iter()
            .filter(|e| options.matches(term, e.relative()))
            .collect()
    };
    FilterView { entries }
}
