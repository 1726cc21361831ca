// src/config.rs
use crate::core::sorter::SortOptions;
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the settings file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "fsort.toml";

/// Optional runtime settings read from a TOML file.
///
/// Every field may be left out; missing ones keep the built-in default.
/// The extension table is not configurable.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub workers: Option<usize>,
    pub normalize: Option<bool>,
    pub reports: Option<bool>,
    pub extract_archives: Option<bool>,
    pub prune_empty: Option<bool>,
}

impl Settings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Fails on invalid TOML or unknown keys.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse settings")
    }

    /// Layers these settings over `options`.
    #[must_use]
    pub fn apply(&self, mut options: SortOptions) -> SortOptions {
        if let Some(workers) = self.workers {
            options.workers = workers;
        }
        if let Some(normalize) = self.normalize {
            options.normalize = normalize;
        }
        if let Some(reports) = self.reports {
            options.write_reports = reports;
        }
        if let Some(extract) = self.extract_archives {
            options.extract_archives = extract;
        }
        if let Some(prune) = self.prune_empty {
            options.prune_empty = prune;
        }
        options
    }
}

/// Loads settings from `explicit` if given, otherwise from `fsort.toml` in
/// `cwd` when it exists. No file means default settings.
///
/// # Errors
///
/// This function may return an error if:
/// * An explicitly named file cannot be read
/// * The file contents are not valid settings
pub fn load_settings(explicit: Option<&Path>, cwd: &Path) -> Result<Settings> {
    let path: PathBuf = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = cwd.join(DEFAULT_CONFIG_FILE);
            if !candidate.is_file() {
                return Ok(Settings::default());
            }
            candidate
        }
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
    Settings::from_toml(&content)
        .with_context(|| format!("Invalid settings file: {}", path.display()))
}
