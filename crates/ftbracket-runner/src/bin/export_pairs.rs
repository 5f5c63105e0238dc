//! export_pairs
//!
//! Seeds the first 64 qualifying records and writes the bracket as two
//! aligned arrays.
//!
//! Usage: export_pairs <input_file> <output_file>
//!
//! Output: `[<id>,...] ["<uri>",...]`

use anyhow::Result;
use ftbracket_core::OutputMode;
use ftbracket_runner::{ExportArgs, init_tracing, parse_args_or_usage, run_export};

fn main() -> Result<()> {
    let args: ExportArgs = parse_args_or_usage("Usage: export_pairs <input_file> <output_file>");
    init_tracing("export_pairs");

    run_export(&args, OutputMode::SpacedArrays)?;
    Ok(())
}
