// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Failures a caller of the sorter may want to tell apart.
///
/// Everything else travels as a plain `anyhow::Error` with context attached.
#[derive(Error, Debug)]
pub enum SortError {
    #[error("Folder '{}' not found.", .0.display())]
    FolderNotFound(PathBuf),

    #[error("Unsupported archive format: {}", .0.display())]
    UnsupportedArchive(PathBuf),

    #[error("Invalid worker count: {0} (must be at least 1)")]
    InvalidWorkers(usize),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}
