// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use cli::{Args, run};
pub use config::{Settings, load_settings};
pub use crate::core::archive::{ArchiveFormat, ArchiveOutcome, unpack_archive, unpack_archives};
pub use crate::core::normalize::normalize;
pub use crate::core::pool::build_pool;
pub use crate::core::prune::delete_empty_folders;
pub use crate::core::rename::{
    execute_renames, increment_os_suffix, increment_suffix, plan_renames, resolve_target,
};
pub use crate::core::report::{
    EXTENSIONS_REPORT, FILES_REPORT, completed_moves, render_files_report,
    write_extension_report, write_files_report,
};
pub use crate::core::scanner::{find_all_files, find_all_folders, find_files};
pub use crate::core::sorter::{SortOptions, create_category_folders, sort_folder};
pub use error::SortError;
pub use models::{Category, ExtensionReport, RenamedFile, SortSummary};
