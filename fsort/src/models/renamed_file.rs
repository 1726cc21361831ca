// src/models/renamed_file.rs
use crate::models::Category;
use std::ffi::OsString;
use std::path::PathBuf;

/// One planned move of a file into its category folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedFile {
    pub source: PathBuf,
    pub category: Category,
    pub new_name: OsString,
    pub target: PathBuf,
}

impl RenamedFile {
    /// Stem of the target name. For archives this is the folder they unpack into.
    #[must_use]
    pub fn new_stem(&self) -> String {
        self.target
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    #[inline]
    #[must_use]
    pub fn is_in_place(&self) -> bool {
        self.source == self.target
    }
}
