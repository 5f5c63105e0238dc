//! seed_bracket
//!
//! Seeds the first 64 qualifying leaderboard records into a 64-slot
//! single-elimination bracket.
//!
//! Usage: seed_bracket <input_file> <output_file>
//!
//! Output: `{"ids":[...64 decimal ids...],"uris":[...64 URIs...]}` in slot order.

use anyhow::Result;
use ftbracket_core::OutputMode;
use ftbracket_runner::{ExportArgs, init_tracing, parse_args_or_usage, run_export};

fn main() -> Result<()> {
    let args: ExportArgs = parse_args_or_usage("Usage: seed_bracket <input_file> <output_file>");
    init_tracing("seed_bracket");

    run_export(&args, OutputMode::IdsUris)?;
    Ok(())
}
