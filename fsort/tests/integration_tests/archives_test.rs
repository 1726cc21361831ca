// tests/integration_tests/archives_test.rs
use super::common::{create_test_file, create_zip, setup_messy_directory};
use anyhow::Result;
use fsort::{SortOptions, sort_folder};
use std::fs;

#[test]
fn test_archives_are_unpacked_into_stem_folder() -> Result<()> {
    let temp_dir = setup_messy_directory()?;
    let root = temp_dir.path();

    let summary = sort_folder(root, &SortOptions::default())?;

    assert_eq!(summary.archives_extracted, 1);
    assert_eq!(summary.archives_failed, 0);
    assert!(!root.join("archives/photos.zip").exists());
    assert_eq!(fs::read_to_string(root.join("archives/photos/inside.png"))?, "png");
    Ok(())
}

#[test]
fn test_broken_archive_is_left_in_place() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let root = temp_dir.path();
    create_test_file(root, "old/broken.zip", "not really a zip")?;
    create_zip(root, "good.zip", &[("a.txt", "a")])?;

    let summary = sort_folder(root, &SortOptions::default())?;

    assert_eq!(summary.archives_extracted, 1);
    assert_eq!(summary.archives_failed, 1);
    assert!(root.join("archives/broken.zip").is_file());
    assert!(!root.join("archives/broken").exists());
    assert!(root.join("archives/good/a.txt").is_file());
    Ok(())
}

#[test]
fn test_extraction_can_be_disabled() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let root = temp_dir.path();
    create_zip(root, "keep.zip", &[("a.txt", "a")])?;

    let summary = sort_folder(
        root,
        &SortOptions {
            extract_archives: false,
            ..SortOptions::default()
        },
    )?;

    assert_eq!(summary.archives_extracted, 0);
    assert!(root.join("archives/keep.zip").is_file());
    Ok(())
}
