//! # ftbracket Runner
//!
//! Shared entry-point plumbing for the bracket export binaries.
//!
//! ## Binaries
//! - `fetch_leaderboard <output_file>` - download the raw leaderboard JSON
//! - `seed_bracket <input_file> <output_file>` - ids/uris object
//! - `export_ranked <input_file> <output_file>` - flat id+uri array
//! - `export_pairs <input_file> <output_file>` - two space-separated arrays
//!
//! The three export tools seed the same bracket and differ only in encoding.
//!
//! ## Output Streams
//! Logs go to stderr. Stdout carries usage text and the final status line.

pub mod fetch;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use ftbracket_core::{OutputMode, PipelineConfig, RunSummary, run_pipeline};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Positional arguments shared by the three export tools.
#[derive(Parser, Debug, Clone)]
pub struct ExportArgs {
    /// Raw leaderboard JSON (as written by fetch_leaderboard)
    pub input_file: PathBuf,

    /// Destination file (overwritten)
    pub output_file: PathBuf,
}

/// Initialize stderr tracing.
///
/// Honors RUST_LOG if set, otherwise INFO.
pub fn init_tracing(service_name: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
    tracing::debug!("{} starting", service_name);
}

/// Parse CLI args, or print `usage` to stdout and exit(1) when they are missing.
///
/// `--help` and `--version` keep clap's normal behaviour.
pub fn parse_args_or_usage<T: Parser>(usage: &str) -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{}", usage);
            std::process::exit(1);
        }
    }
}

/// Full run of one export tool: config, pipeline, status line.
pub fn run_export(args: &ExportArgs, mode: OutputMode) -> anyhow::Result<RunSummary> {
    let config = PipelineConfig::from_env().context("Failed to load configuration")?;

    let summary = run_pipeline(&args.input_file, &args.output_file, mode, &config)
        .with_context(|| format!("{} export failed for {:?}", mode, args.input_file))?;

    info!(
        "{}: {} records, {} bytes",
        mode,
        summary.qualified,
        summary.bytes_len
    );
    println!("Output has been written to {}", summary.output_path.display());
    Ok(summary)
}
