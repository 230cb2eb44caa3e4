use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};

/// Read an exclusion list: one case id per line, blank lines and '#'
/// comments skipped, ids upper-cased for canonical comparison.
pub fn read_exclusions(path: &Path) -> Result<BTreeSet<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read exclusion list {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_ascii_uppercase())
        .collect())
}
