// src/models.rs
pub mod category;
pub mod extension_report;
pub mod renamed_file;
pub mod sort_summary;

pub use category::{Category, extension_key};
pub use extension_report::ExtensionReport;
pub use renamed_file::RenamedFile;
pub use sort_summary::SortSummary;
