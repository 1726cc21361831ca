// src/core/scanner/test_utils.rs
use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "holiday.jpg", "jpeg bytes")?;
    create_test_file(&dir, "notes.txt", "some notes")?;
    create_test_file(&dir, "nested/track.mp3", "audio")?;
    create_test_file(&dir, "nested/deeper/script.py", "print()")?;
    fs::create_dir_all(dir.path().join("empty/inner"))?;

    Ok(dir)
}
