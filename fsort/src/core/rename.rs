// src/core/rename.rs
use crate::core::normalize::normalize;
use crate::models::{Category, RenamedFile};
use anyhow::{Context as _, Result};
use rayon::ThreadPool;
use rayon::prelude::*;
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Adds one to the trailing number of `stem`, or appends `1` when there is none.
///
/// Leading zeros of the trailing number are dropped (`img007` becomes `img8`).
/// The arithmetic is done on the decimal string, so arbitrarily long runs of
/// digits never overflow.
#[must_use]
pub fn increment_suffix(stem: &str) -> String {
    let prefix = stem.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &stem[prefix.len()..];
    if digits.is_empty() {
        return format!("{stem}1");
    }

    let significant = digits.trim_start_matches('0');
    let mut bytes: Vec<u8> = significant.bytes().collect();
    let mut carry = true;
    for byte in bytes.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte = byte.saturating_add(1);
            carry = false;
            break;
        }
    }
    if carry {
        bytes.insert(0, b'1');
    }

    let number = String::from_utf8_lossy(&bytes);
    format!("{prefix}{number}")
}

/// Same as [`increment_suffix`] for names that may not be valid UTF-8.
///
/// Only the trailing ASCII digits are touched, the rest of the name keeps
/// its original bytes.
#[must_use]
pub fn increment_os_suffix(stem: &OsStr) -> OsString {
    if let Some(text) = stem.to_str() {
        return OsString::from(increment_suffix(text));
    }
    increment_raw_suffix(stem)
}

#[cfg(unix)]
fn increment_raw_suffix(stem: &OsStr) -> OsString {
    use std::os::unix::ffi::{OsStrExt as _, OsStringExt as _};

    let bytes = stem.as_bytes();
    let split = bytes
        .iter()
        .rposition(|byte| !byte.is_ascii_digit())
        .map_or(0, |index| index.saturating_add(1));
    let (prefix, digits) = bytes.split_at(split);
    // Trailing ASCII digits always form valid UTF-8.
    let digits = String::from_utf8_lossy(digits);

    let mut raw = prefix.to_vec();
    raw.extend_from_slice(increment_suffix(&digits).as_bytes());
    OsString::from_vec(raw)
}

#[cfg(not(unix))]
fn increment_raw_suffix(stem: &OsStr) -> OsString {
    OsString::from(increment_suffix(&stem.to_string_lossy()))
}

fn file_name(stem: &OsStr, extension: Option<&OsStr>) -> OsString {
    let mut name = stem.to_os_string();
    if let Some(extension) = extension {
        name.push(".");
        name.push(extension);
    }
    name
}

/// Picks the first free path `dir/stem.extension`, bumping the trailing
/// number of the stem until it hits neither an existing file nor a path
/// already reserved in this run. `source` itself never counts as taken.
///
/// The chosen path is added to `reserved`.
pub fn resolve_target(
    dir: &Path,
    stem: &OsStr,
    extension: Option<&OsStr>,
    reserved: &mut HashSet<PathBuf>,
    source: &Path,
) -> PathBuf {
    let mut stem = stem.to_os_string();
    let mut candidate = dir.join(file_name(&stem, extension));

    while reserved.contains(&candidate) || (candidate.is_file() && candidate != source) {
        stem = increment_os_suffix(&stem);
        candidate = dir.join(file_name(&stem, extension));
    }

    reserved.insert(candidate.clone());
    candidate
}

struct Wanted {
    category: Category,
    path: PathBuf,
    stem: OsString,
    extension: Option<OsString>,
}

/// Where `source` would go without any collision. The stem keeps its raw
/// bytes unless normalization is on.
fn wanted_path(root: &Path, source: &Path, normalize_names: bool) -> Wanted {
    let category = Category::classify(source);
    let raw_stem = source.file_stem().unwrap_or_default();
    let stem = if normalize_names {
        OsString::from(normalize(&raw_stem.to_string_lossy()))
    } else {
        raw_stem.to_os_string()
    };
    let extension = source.extension().map(OsStr::to_os_string);
    let path = root
        .join(category.folder_name())
        .join(file_name(&stem, extension.as_deref()));
    Wanted {
        category,
        path,
        stem,
        extension,
    }
}

/// Works out where every file goes. Runs sequentially so that the reserved
/// set sees every earlier decision.
#[must_use]
pub fn plan_renames(root: &Path, files: &[PathBuf], normalize_names: bool) -> Vec<RenamedFile> {
    // Files already sitting at their target keep it, whatever order they come in.
    let mut reserved: HashSet<PathBuf> = files
        .iter()
        .filter(|source| wanted_path(root, source, normalize_names).path == **source)
        .cloned()
        .collect();
    let mut plan = Vec::with_capacity(files.len());

    for source in files {
        let wanted = wanted_path(root, source, normalize_names);
        let target = if wanted.path == *source {
            wanted.path
        } else {
            let dir = root.join(wanted.category.folder_name());
            resolve_target(
                &dir,
                &wanted.stem,
                wanted.extension.as_deref(),
                &mut reserved,
                source,
            )
        };

        let new_name = target.file_name().unwrap_or_default().to_os_string();

        debug!("Planned {} -> {}", source.display(), target.display());

        plan.push(RenamedFile {
            source: source.clone(),
            category: wanted.category,
            new_name,
            target,
        });
    }

    plan
}

fn move_file(renamed: &RenamedFile) -> Result<()> {
    if renamed.is_in_place() {
        return Ok(());
    }
    fs::rename(&renamed.source, &renamed.target).with_context(|| {
        format!(
            "Failed to move {} to {}",
            renamed.source.display(),
            renamed.target.display()
        )
    })
}

/// Executes a plan on the pool. Failures are logged and returned, the
/// remaining moves still run.
pub fn execute_renames(plan: &[RenamedFile], pool: &ThreadPool) -> Vec<(PathBuf, anyhow::Error)> {
    pool.install(|| {
        plan.par_iter()
            .filter_map(|renamed| match move_file(renamed) {
                Ok(()) => None,
                Err(err) => {
                    warn!("{err:#}");
                    Some((renamed.source.clone(), err))
                }
            })
            .collect()
    })
}
