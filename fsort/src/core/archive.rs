// src/core/archive.rs
use crate::error::SortError;
use anyhow::{Context as _, Result};
use flate2::read::GzDecoder;
use rayon::ThreadPool;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufReader, Cursor, ErrorKind, Read as _};
use std::path::{Path, PathBuf};
use tar::Archive;
use tracing::{debug, warn};
use zip::ZipArchive;

/// Offset and value of the magic that marks a POSIX tar header.
const TAR_MAGIC_OFFSET: usize = 257;
const TAR_MAGIC: &[u8] = b"ustar";
const TAR_BLOCK: u64 = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    Tar,
    TarGz,
    /// Any other `.gz`: a tarball if the decompressed data carries the tar
    /// magic, otherwise a single compressed file.
    Gz,
}

impl ArchiveFormat {
    /// Picks the format from the file name, case-insensitively.
    #[must_use]
    pub fn detect(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_lowercase();
        if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Some(Self::TarGz)
        } else if name.ends_with(".gz") {
            Some(Self::Gz)
        } else if name.ends_with(".tar") {
            Some(Self::Tar)
        } else if name.ends_with(".zip") {
            Some(Self::Zip)
        } else {
            None
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveOutcome {
    pub extracted: usize,
    pub failed: usize,
}

fn looks_like_tar(head: &[u8]) -> bool {
    head.get(TAR_MAGIC_OFFSET..TAR_MAGIC_OFFSET + TAR_MAGIC.len()) == Some(TAR_MAGIC)
}

fn extract_gz(archive: &Path, reader: BufReader<File>, dest: &Path) -> Result<()> {
    let mut decoder = GzDecoder::new(reader);
    let mut head = Vec::new();
    (&mut decoder)
        .take(TAR_BLOCK)
        .read_to_end(&mut head)
        .with_context(|| format!("Failed to decompress: {}", archive.display()))?;
    let mut stream = Cursor::new(head).chain(decoder);

    if looks_like_tar(stream.get_ref().0.get_ref()) {
        return Archive::new(stream)
            .unpack(dest)
            .with_context(|| format!("Failed to extract tar.gz archive: {}", archive.display()));
    }

    let name = archive
        .file_stem()
        .ok_or_else(|| SortError::UnsupportedArchive(archive.to_path_buf()))?;
    let out_path = dest.join(name);
    let mut out = File::create(&out_path)
        .with_context(|| format!("Failed to create file: {}", out_path.display()))?;
    io::copy(&mut stream, &mut out)
        .with_context(|| format!("Failed to decompress: {}", archive.display()))?;
    Ok(())
}

fn extract_into(archive: &Path, format: ArchiveFormat, dest: &Path) -> Result<()> {
    let file = File::open(archive)
        .with_context(|| format!("Failed to open archive: {}", archive.display()))?;
    let reader = BufReader::new(file);

    match format {
        ArchiveFormat::Zip => {
            let mut zip = ZipArchive::new(reader)
                .with_context(|| format!("Failed to read zip archive: {}", archive.display()))?;
            zip.extract(dest)
                .with_context(|| format!("Failed to extract zip archive: {}", archive.display()))?;
        }
        ArchiveFormat::Tar => {
            Archive::new(reader)
                .unpack(dest)
                .with_context(|| format!("Failed to extract tar archive: {}", archive.display()))?;
        }
        ArchiveFormat::TarGz => {
            Archive::new(GzDecoder::new(reader))
                .unpack(dest)
                .with_context(|| format!("Failed to extract tar.gz archive: {}", archive.display()))?;
        }
        ArchiveFormat::Gz => extract_gz(archive, reader, dest)?,
    }

    Ok(())
}

/// Folder an archive unpacks into: `archives_dir/<stem>`.
#[must_use]
pub fn destination_for(archive: &Path, archives_dir: &Path) -> Option<PathBuf> {
    archive.file_stem().map(|stem| archives_dir.join(stem))
}

/// Creates `dest` if missing. Returns whether this call created it.
fn claim_destination(dest: &Path) -> Result<bool> {
    match fs::create_dir(dest) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == ErrorKind::AlreadyExists && dest.is_dir() => Ok(false),
        Err(err) => Err(err)
            .with_context(|| format!("Failed to create directory: {}", dest.display())),
    }
}

/// Unpacks `archive` into `archives_dir/<stem>` and deletes the archive.
///
/// On failure the archive is kept. A destination folder created by this
/// call is removed again if it is still empty; a folder that already
/// existed is never touched.
///
/// # Errors
///
/// Fails for unknown formats, unreadable or corrupt archives, and when the
/// destination cannot be created.
pub fn unpack_archive(archive: &Path, archives_dir: &Path) -> Result<PathBuf> {
    let format = ArchiveFormat::detect(archive)
        .ok_or_else(|| SortError::UnsupportedArchive(archive.to_path_buf()))?;
    let dest = destination_for(archive, archives_dir)
        .ok_or_else(|| SortError::UnsupportedArchive(archive.to_path_buf()))?;

    let created = claim_destination(&dest)?;

    if let Err(err) = extract_into(archive, format, &dest) {
        // remove_dir only succeeds on an empty folder
        let cleanup = if created { fs::remove_dir(&dest) } else { Ok(()) };
        if let Err(cleanup) = cleanup {
            warn!("Left partial extraction in {}: {cleanup}", dest.display());
        }
        return Err(err);
    }

    fs::remove_file(archive)
        .with_context(|| format!("Failed to remove archive: {}", archive.display()))?;
    debug!("Unpacked {} into {}", archive.display(), dest.display());
    Ok(dest)
}

/// Unpacks every file sitting directly in `archives_dir` on the pool.
///
/// Archives sharing a destination folder (`a.zip` and `a.tar`) run one
/// after the other inside a single task; distinct destinations run in
/// parallel. Individual failures are logged and counted. A missing
/// `archives_dir` is treated as empty.
///
/// # Errors
///
/// Fails only if `archives_dir` exists but cannot be listed.
pub fn unpack_archives(archives_dir: &Path, pool: &ThreadPool) -> Result<ArchiveOutcome> {
    if !archives_dir.is_dir() {
        return Ok(ArchiveOutcome::default());
    }

    let mut groups: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();
    for archive in crate::core::scanner::find_files(archives_dir)? {
        let dest = destination_for(&archive, archives_dir).unwrap_or_else(|| archive.clone());
        groups.entry(dest).or_default().push(archive);
    }
    let groups: Vec<Vec<PathBuf>> = groups
        .into_values()
        .map(|mut group| {
            group.sort();
            group
        })
        .collect();

    let results: Vec<bool> = pool.install(|| {
        groups
            .par_iter()
            .flat_map_iter(|group| {
                group.iter().map(|archive| match unpack_archive(archive, archives_dir) {
                    Ok(_) => true,
                    Err(err) => {
                        warn!("{err:#}");
                        false
                    }
                })
            })
            .collect()
    });

    let extracted = results.iter().filter(|ok| **ok).count();
    Ok(ArchiveOutcome {
        extracted,
        failed: results.len().saturating_sub(extracted),
    })
}
