// src/core/sorter.rs
use crate::core::archive::unpack_archives;
use crate::core::pool::{DEFAULT_WORKERS, build_pool};
use crate::core::prune::delete_empty_folders;
use crate::core::rename::{execute_renames, plan_renames};
use crate::core::report::{
    completed_moves, is_report_file, write_extension_report, write_files_report,
};
use crate::core::scanner::{find_all_files, find_all_folders};
use crate::error::SortError;
use crate::models::{Category, SortSummary};
use anyhow::{Context as _, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Runtime knobs for one run of [`sort_folder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOptions {
    pub workers: usize,
    pub normalize: bool,
    pub write_reports: bool,
    pub extract_archives: bool,
    pub prune_empty: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            normalize: false,
            write_reports: true,
            extract_archives: true,
            prune_empty: true,
        }
    }
}

/// Creates the six category folders under `root`. Existing ones are kept.
///
/// # Errors
///
/// Fails if a folder cannot be created.
pub fn create_category_folders(root: &Path) -> Result<()> {
    for category in Category::ALL {
        let path = root.join(category.folder_name());
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Sorts everything below `root` into category folders.
///
/// Walks the tree, classifies and moves every file, writes the two reports,
/// unpacks archives and finally prunes empty folders.
///
/// # Returns
///
/// * `Ok(SortSummary)` - Counts describing what happened
///
/// # Errors
///
/// This function may return an error if:
/// * `root` is not an existing directory
/// * The tree cannot be walked or a category folder cannot be created
/// * A report cannot be written
/// * An empty folder cannot be removed
///
/// Failed moves and failed archives do not abort the run; they are
/// counted in the summary instead.
pub fn sort_folder(root: &Path, options: &SortOptions) -> Result<SortSummary> {
    if !root.is_dir() {
        return Err(SortError::FolderNotFound(root.to_path_buf()).into());
    }
    let pool = build_pool(options.workers)?;
    let mut summary = SortSummary::new();

    let folders = find_all_folders(root)?;
    summary.folders = folders.len();

    let files: Vec<_> = find_all_files(&folders, &pool)?
        .into_iter()
        .filter(|file| !(options.write_reports && is_report_file(root, file)))
        .collect();
    summary.files = files.len();
    info!(
        "Found {} folders and {} files in {}",
        summary.folders,
        summary.files,
        root.display()
    );

    create_category_folders(root)?;

    let plan = plan_renames(root, &files, options.normalize);
    for renamed in &plan {
        summary.record(renamed.category);
    }
    let failures = execute_renames(&plan, &pool);
    summary.failed_renames = failures.len();
    summary.renamed = plan
        .iter()
        .filter(|renamed| !renamed.is_in_place())
        .count()
        .saturating_sub(failures.len());
    info!("Moved {} files, {} failed", summary.renamed, summary.failed_renames);

    // Reports go out after the moves so a user's own file of the same name
    // has already left the root.
    if options.write_reports {
        write_extension_report(root, &files)?;
        let failed: Vec<PathBuf> = failures.into_iter().map(|(source, _)| source).collect();
        write_files_report(root, &completed_moves(&plan, &failed))?;
    }

    if options.extract_archives {
        let outcome = unpack_archives(&root.join(Category::Archives.folder_name()), &pool)?;
        summary.archives_extracted = outcome.extracted;
        summary.archives_failed = outcome.failed;
        info!(
            "Unpacked {} archives, {} failed",
            outcome.extracted, outcome.failed
        );
    }

    if options.prune_empty {
        summary.folders_removed = delete_empty_folders(root)?;
        info!("Removed {} empty folders", summary.folders_removed);
    }

    Ok(summary)
}
