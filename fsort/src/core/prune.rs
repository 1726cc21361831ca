// src/core/prune.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Removes every empty directory below `root`, deepest first, so a folder
/// that only held empty folders goes too. `root` itself is never removed.
///
/// # Returns
///
/// * `Ok(usize)` - The number of directories removed
///
/// # Errors
///
/// This function may return an error if:
/// * The tree cannot be walked
/// * An empty directory cannot be removed
pub fn delete_empty_folders(root: &Path) -> Result<usize> {
    let mut removed: usize = 0;

    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .contents_first(true)
    {
        let entry = entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let is_empty = fs::read_dir(path)
            .with_context(|| format!("Failed to read directory: {}", path.display()))?
            .next()
            .is_none();
        if is_empty {
            fs::remove_dir(path)
                .with_context(|| format!("Failed to remove directory: {}", path.display()))?;
            debug!("Removed empty folder {}", path.display());
            removed = removed.saturating_add(1);
        }
    }

    Ok(removed)
}
