// src/utils.rs
use crate::models::SortSummary;
use std::path::Path;

/// Absolute form of `path` for messages, falling back to the path as given.
#[must_use]
pub fn display_root(path: &Path) -> String {
    path.canonicalize()
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

pub fn print_summary(root: &Path, summary: &SortSummary) {
    println!("\nNumber of folders: {}", summary.folders);
    println!("Number of files: {}", summary.files);
    if summary.failed_renames > 0 {
        println!("Files that could not be moved: {}", summary.failed_renames);
    }
    if summary.archives_failed > 0 {
        println!("Archives that could not be unpacked: {}", summary.archives_failed);
    }
    println!("\nFolder '{}' sorted.", display_root(root));
}
