//! Script descriptions read from a fixed line of the script file.
//!
//! By convention the third line of a script holds a comment describing it:
//!
//! ```text
//! #!/bin/sh
//!
//! # Rotate the nginx logs
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Shown when the description line is missing or blank.
pub const NO_DESCRIPTION: &str = "No description available";

/// Shown when the script cannot be opened or read.
pub const READ_FAILED: &str = "Failed to read script";

/// Bytes read per line; longer lines are split like `fgets` would.
const MAX_LINE_BYTES: u64 = 1000;

/// Read the description of a script from its `line`-th line (1-based).
///
/// Never fails: unreadable files produce [`READ_FAILED`] and short files
/// produce [`NO_DESCRIPTION`].
pub fn read_description(path: &Path, line: usize) -> String {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            tracing::debug!(script = %path.display(), error = %e, "cannot open script");
            return READ_FAILED.to_string();
        }
    };
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();

    for _ in 0..line.max(1) {
        buf.clear();
        match (&mut reader).take(MAX_LINE_BYTES).read_until(b'\n', &mut buf) {
            Ok(0) => return NO_DESCRIPTION.to_string(),
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(script = %path.display(), error = %e, "cannot read script");
                return READ_FAILED.to_string();
            }
        }
    }

    describe_line(&String::from_utf8_lossy(&buf))
}

/// Turn a raw line into a description: drop one leading `#` and trim.
pub fn describe_line(raw: &str) -> String {
    let trimmed = raw.trim();
    let text = trimmed.strip_prefix('#').unwrap_or(trimmed).trim();
    if text.is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        text.to_string()
    }
}
