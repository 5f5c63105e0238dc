//! fetch_leaderboard
//!
//! Downloads the raw leaderboard JSON and writes it unchanged.
//!
//! Usage: fetch_leaderboard <output_file>
//!
//! The endpoint defaults to the friendmex stats leaderboard and can be
//! overridden with `[fetch] leaderboard_url` in `$FTBRACKET_CONFIG`.

use anyhow::{Context, Result};
use clap::Parser;
use ftbracket_core::PipelineConfig;
use ftbracket_runner::fetch::fetch_to_file;
use ftbracket_runner::{init_tracing, parse_args_or_usage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fetch_leaderboard")]
#[command(about = "Download the raw leaderboard JSON")]
#[command(version)]
struct Args {
    /// Destination file (overwritten)
    output_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Args = parse_args_or_usage("Usage: fetch_leaderboard <output_filename>");
    init_tracing("fetch_leaderboard");

    let config = PipelineConfig::from_env().context("Failed to load configuration")?;
    fetch_to_file(&config.fetch.leaderboard_url, &args.output_file).await?;

    println!("Data has been written to {}", args.output_file.display());
    Ok(())
}
