// tests/integration_tests/collisions_test.rs
use super::common::{create_test_file, create_zip, setup_messy_directory};
use anyhow::Result;
use fsort::{SortOptions, sort_folder};
use std::fs;

#[test]
fn test_duplicate_names_never_overwrite() -> Result<()> {
    let temp_dir = setup_messy_directory()?;
    let root = temp_dir.path();

    sort_folder(root, &SortOptions::default())?;

    // Sorted by path: beach.jpg, trip/beach.jpg, trip/day2/beach.JPG
    assert_eq!(fs::read_to_string(root.join("images/beach.jpg"))?, "jpg one");
    assert_eq!(fs::read_to_string(root.join("images/beach1.jpg"))?, "jpg two");
    assert_eq!(fs::read_to_string(root.join("images/beach.JPG"))?, "jpg three");
    Ok(())
}

#[test]
fn test_existing_numbered_files_are_skipped() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let root = temp_dir.path();
    create_test_file(root, "documents/scan9.pdf", "old nine")?;
    create_test_file(root, "documents/scan10.pdf", "old ten")?;
    create_test_file(root, "inbox/scan9.pdf", "new")?;

    sort_folder(root, &SortOptions::default())?;

    assert_eq!(fs::read_to_string(root.join("documents/scan9.pdf"))?, "old nine");
    assert_eq!(fs::read_to_string(root.join("documents/scan10.pdf"))?, "old ten");
    assert_eq!(fs::read_to_string(root.join("documents/scan11.pdf"))?, "new");
    Ok(())
}

#[test]
fn test_all_digit_names() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let root = temp_dir.path();
    create_test_file(root, "a/007.mp3", "first")?;
    create_test_file(root, "b/007.mp3", "second")?;

    sort_folder(root, &SortOptions::default())?;

    assert_eq!(fs::read_to_string(root.join("audio/007.mp3"))?, "first");
    assert_eq!(fs::read_to_string(root.join("audio/8.mp3"))?, "second");
    Ok(())
}

#[test]
fn test_same_stem_archives_keep_the_good_contents() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let root = temp_dir.path();
    create_zip(root, "album.zip", &[("track01.mp3", "music")])?;
    create_test_file(root, "old/album.tar", &"not a tar header ".repeat(64))?;

    let summary = sort_folder(root, &SortOptions::default())?;

    assert_eq!(summary.archives_extracted, 1);
    assert_eq!(summary.archives_failed, 1);
    assert!(!root.join("archives/album.zip").exists());
    assert!(root.join("archives/album.tar").is_file());
    assert_eq!(fs::read_to_string(root.join("archives/album/track01.mp3"))?, "music");
    Ok(())
}
