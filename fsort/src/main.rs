// src/main.rs
use clap::Parser as _;
use fsort::{Args, SortError, run};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(SortError::FolderNotFound(path)) = err.downcast_ref::<SortError>() {
                println!("\nFolder '{}' not found.", fsort::utils::display_root(path));
            } else {
                eprintln!("Error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
