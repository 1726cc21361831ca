// src/models/extension_report.rs
use crate::models::{Category, extension_key};
use std::collections::BTreeSet;
use std::path::Path;

/// Known and unknown extensions seen among the scanned files, kept sorted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtensionReport {
    pub known: BTreeSet<String>,
    pub unknown: BTreeSet<String>,
}

impl ExtensionReport {
    /// Builds the report from a file list. Files without an extension are skipped.
    #[must_use]
    pub fn from_files(files: &[impl AsRef<Path>]) -> Self {
        let mut report = Self::default();
        for file in files {
            let key = extension_key(file.as_ref());
            if key.is_empty() {
                continue;
            }
            if Category::from_extension(&key).is_some() {
                report.known.insert(key);
            } else {
                report.unknown.insert(key);
            }
        }
        report
    }

    #[must_use]
    pub fn render(&self) -> String {
        let known: Vec<&str> = self.known.iter().map(String::as_str).collect();
        let unknown: Vec<&str> = self.unknown.iter().map(String::as_str).collect();
        format!(
            "Found known extensions: {}.\nFound unknown extensions: {}.",
            known.join(", "),
            unknown.join(", ")
        )
    }
}
