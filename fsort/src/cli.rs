// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::env;
use std::path::PathBuf;
use tracing::debug;

use crate::config::{Settings, load_settings};
use crate::core::sorter::{SortOptions, sort_folder};
use crate::models::SortSummary;
use crate::utils::print_summary;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Folder to sort
    pub folder: PathBuf,

    /// Number of worker threads for filesystem calls
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Transliterate Cyrillic and replace other symbols in file names with '_'
    #[arg(short, long)]
    pub normalize: bool,

    /// Do not write extensions.txt and files.txt
    #[arg(long)]
    pub no_reports: bool,

    /// Leave archives packed
    #[arg(long)]
    pub no_extract: bool,

    /// Keep empty folders
    #[arg(long)]
    pub no_prune: bool,

    /// Settings file (defaults to ./fsort.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Defaults, then the settings file, then flags given on the command line.
    #[must_use]
    pub fn to_options(&self, settings: &Settings) -> SortOptions {
        let mut options = settings.apply(SortOptions::default());
        if let Some(workers) = self.workers {
            options.workers = workers;
        }
        if self.normalize {
            options.normalize = true;
        }
        if self.no_reports {
            options.write_reports = false;
        }
        if self.no_extract {
            options.extract_archives = false;
        }
        if self.no_prune {
            options.prune_empty = false;
        }
        options
    }
}

/// Runs one sort from parsed arguments and prints the summary.
///
/// # Errors
///
/// Fails when the settings cannot be loaded or the sort itself fails.
pub fn run(args: &Args) -> Result<SortSummary> {
    let settings = load_settings(args.config.as_deref(), &env::current_dir()?)?;
    let options = args.to_options(&settings);
    debug!("Sorting {} with {options:?}", args.folder.display());

    let summary = sort_folder(&args.folder, &options)?;
    print_summary(&args.folder, &summary);
    Ok(summary)
}
