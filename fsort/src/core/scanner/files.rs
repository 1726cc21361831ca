// src/core/scanner/files.rs
use anyhow::{Context as _, Result};
use rayon::ThreadPool;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Lists the regular files directly inside `folder`, without descending.
///
/// # Errors
///
/// Fails if the folder or one of its entries cannot be read.
pub fn find_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(folder)
        .with_context(|| format!("Failed to read directory: {}", folder.display()))?
    {
        let path = entry
            .with_context(|| format!("Failed to read entry in: {}", folder.display()))?
            .path();
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

/// Lists the files of every folder on the pool, then flattens and sorts them.
///
/// # Errors
///
/// Returns the first folder listing error encountered.
pub fn find_all_files(folders: &[PathBuf], pool: &ThreadPool) -> Result<Vec<PathBuf>> {
    let per_folder: Vec<Vec<PathBuf>> = pool.install(|| {
        folders
            .par_iter()
            .map(|folder| find_files(folder))
            .collect::<Result<_>>()
    })?;

    let mut files: Vec<PathBuf> = per_folder.into_iter().flatten().collect();
    files.sort();
    Ok(files)
}
