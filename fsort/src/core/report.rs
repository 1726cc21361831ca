// src/core/report.rs
use crate::models::{Category, ExtensionReport, RenamedFile};
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Read as _;
use std::path::{Path, PathBuf};
use tracing::info;

pub const EXTENSIONS_REPORT: &str = "extensions.txt";
pub const FILES_REPORT: &str = "files.txt";

/// Opening text of each generated report, used to tell it from a user's
/// own file of the same name.
const EXTENSIONS_PREFIXES: &[&str] = &["Found known extensions: "];
const FILES_PREFIXES: &[&str] = &["Files in folder ", "Archives in folder "];

fn starts_with_any(path: &Path, prefixes: &[&str]) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };
    let mut head = Vec::new();
    if file.take(64).read_to_end(&mut head).is_err() {
        return false;
    }
    prefixes
        .iter()
        .any(|prefix| head.starts_with(prefix.as_bytes()))
}

/// True for a report an earlier run wrote into `root`.
///
/// A user's own `files.txt` or `extensions.txt` does not start the way the
/// generated reports do, so it is sorted like any other file.
#[must_use]
pub fn is_report_file(root: &Path, path: &Path) -> bool {
    if path.parent() != Some(root) {
        return false;
    }
    match path.file_name() {
        Some(name) if name == EXTENSIONS_REPORT => starts_with_any(path, EXTENSIONS_PREFIXES),
        Some(name) if name == FILES_REPORT => starts_with_any(path, FILES_PREFIXES),
        _ => false,
    }
}

/// The plan minus the files whose move failed, so the report only lists
/// files that actually reached their new name.
#[must_use]
pub fn completed_moves(plan: &[RenamedFile], failed: &[PathBuf]) -> Vec<RenamedFile> {
    let failed: HashSet<&PathBuf> = failed.iter().collect();
    plan.iter()
        .filter(|renamed| !failed.contains(&renamed.source))
        .cloned()
        .collect()
}

/// Writes `extensions.txt` into `root`. Nothing is written for an empty file list.
///
/// # Errors
///
/// Fails if the report cannot be written.
pub fn write_extension_report(root: &Path, files: &[PathBuf]) -> Result<Option<PathBuf>> {
    if files.is_empty() {
        return Ok(None);
    }
    let report = ExtensionReport::from_files(files);
    let path = root.join(EXTENSIONS_REPORT);
    fs::write(&path, report.render())
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(Some(path))
}

/// Renders the `files.txt` body: one section per non-empty category.
///
/// Archives list the stem they will be unpacked under instead of the new name.
#[must_use]
pub fn render_files_report(plan: &[RenamedFile]) -> String {
    let mut out = String::new();

    for category in Category::ALL {
        let entries: Vec<&RenamedFile> =
            plan.iter().filter(|r| r.category == category).collect();
        if entries.is_empty() {
            continue;
        }

        let heading = if category == Category::Archives {
            "Archives"
        } else {
            "Files"
        };
        out.push_str(&format!("{heading} in folder {}:\n", category.folder_name()));
        for entry in entries {
            let shown = if category == Category::Archives {
                entry.new_stem()
            } else {
                entry.new_name.to_string_lossy().into_owned()
            };
            out.push_str(&format!("{} -> {shown}\n", entry.source.display()));
        }
        out.push_str("\n\n");
    }

    out
}

/// Writes `files.txt` into `root`. Nothing is written for an empty plan.
///
/// # Errors
///
/// Fails if the report cannot be written.
pub fn write_files_report(root: &Path, plan: &[RenamedFile]) -> Result<Option<PathBuf>> {
    if plan.is_empty() {
        return Ok(None);
    }
    let path = root.join(FILES_REPORT);
    fs::write(&path, render_files_report(plan))
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(Some(path))
}
