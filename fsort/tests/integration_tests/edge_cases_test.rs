// tests/integration_tests/edge_cases_test.rs
use super::common::{create_test_file, setup_messy_directory};
use anyhow::Result;
use fsort::{Category, SortError, SortOptions, sort_folder};
use std::fs;

#[test]
fn test_second_run_is_stable() -> Result<()> {
    let temp_dir = setup_messy_directory()?;
    let root = temp_dir.path();

    sort_folder(root, &SortOptions::default())?;
    let summary = sort_folder(root, &SortOptions::default())?;

    assert_eq!(summary.failed_renames, 0);
    assert!(root.join("images/beach.jpg").is_file());
    assert!(!root.join("images/beach2.jpg").exists(), "Sorted files stay put");
    assert!(!root.join("documents/files.txt").exists(), "Reports are not sorted");
    assert!(!root.join("documents/extensions.txt").exists());
    Ok(())
}

#[test]
fn test_root_must_be_a_directory() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    create_test_file(temp_dir.path(), "plain.txt", "not a folder")?;

    let err = sort_folder(&temp_dir.path().join("plain.txt"), &SortOptions::default())
        .expect_err("a file is not a folder");
    assert!(matches!(
        err.downcast_ref::<SortError>(),
        Some(SortError::FolderNotFound(_))
    ));
    Ok(())
}

#[test]
fn test_zero_workers_is_rejected() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let result = sort_folder(
        temp_dir.path(),
        &SortOptions {
            workers: 0,
            ..SortOptions::default()
        },
    );
    assert!(result.is_err());
    Ok(())
}

#[test]
fn test_hidden_and_extensionless_files_go_to_others() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let root = temp_dir.path();
    create_test_file(root, ".bashrc", "alias")?;
    create_test_file(root, "cfg/Makefile", "all:")?;

    let summary = sort_folder(root, &SortOptions::default())?;

    assert_eq!(summary.count(Category::Others), 2);
    assert!(root.join("others/.bashrc").is_file());
    assert!(root.join("others/Makefile").is_file());
    assert_eq!(
        fs::read_to_string(root.join("extensions.txt"))?,
        "Found known extensions: .\nFound unknown extensions: ."
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_non_utf8_file_name_is_kept_byte_for_byte() -> Result<()> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt as _;

    let temp_dir = tempfile::TempDir::new()?;
    let root = temp_dir.path();
    let raw = OsStr::from_bytes(b"caf\xe9.txt");
    fs::create_dir_all(root.join("inbox"))?;
    fs::write(root.join("inbox").join(raw), "latin-1 name")?;

    sort_folder(root, &SortOptions::default())?;

    let names: Vec<Vec<u8>> = fs::read_dir(root.join("documents"))?
        .map(|entry| entry.map(|e| e.file_name().as_bytes().to_vec()))
        .collect::<Result<_, _>>()?;
    assert_eq!(names, vec![b"caf\xe9.txt".to_vec()]);
    assert_eq!(fs::read_to_string(root.join("documents").join(raw))?, "latin-1 name");
    Ok(())
}
