// tests/integration_tests/sorting_test.rs
use super::common::setup_messy_directory;
use anyhow::Result;
use fsort::{Category, SortOptions, sort_folder};

#[test]
fn test_sort_messy_directory() -> Result<()> {
    let temp_dir = setup_messy_directory()?;
    let root = temp_dir.path();

    let summary = sort_folder(root, &SortOptions::default())?;

    assert_eq!(summary.files, 10);
    assert_eq!(summary.count(Category::Images), 3);
    assert_eq!(summary.count(Category::Video), 1);
    assert_eq!(summary.count(Category::Documents), 2);
    assert_eq!(summary.count(Category::Audio), 1);
    assert_eq!(summary.count(Category::Archives), 1);
    assert_eq!(summary.count(Category::Others), 2);
    assert_eq!(summary.failed_renames, 0);

    assert!(root.join("video/movie.mkv").is_file());
    assert!(root.join("documents/report.docx").is_file());
    assert!(root.join("documents/budget.xlsx").is_file());
    assert!(root.join("audio/song.ogg").is_file());
    assert!(root.join("others/tool.exe").is_file());
    assert!(root.join("others/LICENSE").is_file());

    for gone in ["trip", "work", "music", "misc", "downloads", "stale"] {
        assert!(!root.join(gone).exists(), "{gone} should have been pruned");
    }
    Ok(())
}

#[test]
fn test_sort_with_single_worker_matches_default() -> Result<()> {
    let first = setup_messy_directory()?;
    let second = setup_messy_directory()?;

    let pooled = sort_folder(first.path(), &SortOptions::default())?;
    let single = sort_folder(
        second.path(),
        &SortOptions {
            workers: 1,
            ..SortOptions::default()
        },
    )?;

    assert_eq!(pooled.per_category, single.per_category);
    assert_eq!(pooled.renamed, single.renamed);
    Ok(())
}

#[test]
fn test_normalize_renames_cyrillic_files() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    super::common::create_test_file(temp_dir.path(), "Звіт за рік.pdf", "pdf")?;

    sort_folder(
        temp_dir.path(),
        &SortOptions {
            normalize: true,
            ..SortOptions::default()
        },
    )?;

    assert!(temp_dir.path().join("documents/Zvit_za_rik.pdf").is_file());
    Ok(())
}
