//! Script discovery and the ordered script catalog.

mod descriptions;
mod discovery;
mod ordering;
mod types;

use std::path::Path;

pub use descriptions::{describe_line, read_description, NO_DESCRIPTION, READ_FAILED};
pub use discovery::{compile_excludes, discover, DiscoveryOptions};
pub use ordering::{compare_entries, sort_entries};
pub use types::{path_depth, ScriptCatalog, ScriptEntry};

use crate::error::Result;

/// Discover scripts under `root` and build the ordered catalog.
///
/// # Errors
///
/// Returns an error if the catalog cannot grow.
pub fn load_catalog(root: &Path, options: &DiscoveryOptions) -> Result<ScriptCatalog> {
    let entries = discover(root, options)?;
    Ok(ScriptCatalog::from_discovered(root, entries))
}
