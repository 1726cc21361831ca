// src/core/scanner/folders.rs
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists `root` followed by every directory below it, parents before children.
///
/// Symlinked directories are not followed, so a link pointing back up the
/// tree cannot loop the walk.
///
/// # Errors
///
/// This function may return an error if:
/// * The root directory cannot be read
/// * A sub-directory becomes unreadable during traversal
pub fn find_all_folders(root: &Path) -> Result<Vec<PathBuf>> {
    let mut folders = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
    {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;
        if entry.file_type().is_dir() {
            folders.push(entry.into_path());
        }
    }

    Ok(folders)
}
