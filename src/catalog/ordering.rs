//! Catalog ordering.
//!
//! Scripts are ordered by directory depth first, so top-level scripts come
//! before nested ones, then byte-wise by path. The order does not depend on
//! the order the filesystem returned entries in.

use std::cmp::Ordering;

use super::types::ScriptEntry;

/// Compare two scripts by depth, then byte-wise by relative path.
///
/// Every entry of a catalog shares the same root, so comparing relative
/// paths orders the full paths identically.
pub fn compare_entries(a: &ScriptEntry, b: &ScriptEntry) -> Ordering {
    a.depth()
        .cmp(&b.depth())
        .then_with(|| a.relative().as_bytes().cmp(b.relative().as_bytes()))
}

/// Sort entries into catalog order and drop duplicate paths.
pub fn sort_entries(entries: &mut Vec<ScriptEntry>) {
    entries.sort_by(compare_entries);
    entries.dedup_by(|a, b| a.path() == b.path());
}
