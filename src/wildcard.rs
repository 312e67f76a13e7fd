// Wildcard expansion module
// Expands glob patterns in CLI targets into concrete file paths

use crate::error::HashError;
use std::path::PathBuf;

/// Expand a wildcard pattern into a sorted list of matching paths
///
/// Plain strings without wildcard characters pass through untouched so a
/// later per-target check can report a missing file precisely. A malformed
/// pattern, or one that matches nothing, is an argument error.
pub fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>, HashError> {
    if !contains_wildcard(pattern) {
        return Ok(vec![PathBuf::from(pattern)]);
    }

    let paths = glob::glob(pattern).map_err(|e| HashError::InvalidArguments {
        message: format!("Invalid glob pattern '{}': {}", pattern, e),
    })?;

    let mut matches = Vec::new();
    for entry in paths {
        let path = entry.map_err(|e| HashError::InvalidArguments {
            message: format!("Error reading glob pattern '{}': {}", pattern, e),
        })?;
        matches.push(path);
    }

    if matches.is_empty() {
        return Err(HashError::InvalidArguments {
            message: format!("No files match pattern '{}'", pattern),
        });
    }

    // Sort matches for consistent ordering
    matches.sort();

    Ok(matches)
}

/// Check if a string contains wildcard characters
pub fn contains_wildcard(s: &str) -> bool {
    s.contains('*') || s.contains('?') || s.contains('[')
}
