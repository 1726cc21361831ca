// src/core/scanner.rs
pub mod files;
pub mod folders;

#[cfg(test)]
pub mod test_utils;

pub use files::{find_all_files, find_files};
pub use folders::find_all_folders;
