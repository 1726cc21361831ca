// src/core.rs
pub mod archive;
pub mod normalize;
pub mod pool;
pub mod prune;
pub mod rename;
pub mod report;
pub mod scanner;
pub mod sorter;
