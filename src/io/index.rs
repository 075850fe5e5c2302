//! Collision-safe sequential index allocation
//!
//! The output directory's file listing is the sole persistence mechanism for
//! the icon counter: the next free index is re-derived from the names already
//! present, so repeated invocations (and later sheets in the same batch)
//! continue numbering where the directory left off instead of overwriting.

use crate::io::configuration::{ICON_EXTENSION, ICON_PREFIX};
use crate::io::error::{ExtractError, Result};
use std::path::Path;

/// Determine the next unused icon index for an output directory
///
/// Scans the directory for names of the form `icon_<digits>.png`, parses the
/// numeric suffix of each, and returns one past the highest, or `1` when no
/// icons exist yet. Names that merely resemble the pattern but carry a
/// non-numeric suffix belong to someone else and are ignored rather than
/// aborting the batch.
///
/// # Errors
///
/// Returns [`ExtractError::FileSystem`] if the directory cannot be listed.
pub fn next_icon_index(output_dir: &Path) -> Result<u64> {
    let entries = std::fs::read_dir(output_dir).map_err(|e| ExtractError::FileSystem {
        path: output_dir.to_path_buf(),
        operation: "list output directory",
        source: e,
    })?;

    let mut highest = 0;
    for entry in entries {
        let entry = entry.map_err(|e| ExtractError::FileSystem {
            path: output_dir.to_path_buf(),
            operation: "list output directory",
            source: e,
        })?;
        let name = entry.file_name();
        if let Some(index) = parse_icon_index(&name.to_string_lossy()) {
            highest = highest.max(index);
        }
    }

    Ok(highest + 1)
}

/// Extract the numeric index from an icon filename, if it matches the pattern
fn parse_icon_index(name: &str) -> Option<u64> {
    name.strip_prefix(ICON_PREFIX)?
        .strip_suffix(&format!(".{ICON_EXTENSION}"))?
        .parse()
        .ok()
}
