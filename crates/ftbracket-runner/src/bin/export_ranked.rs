//! export_ranked
//!
//! Seeds the first 64 qualifying records and writes the bracket as one
//! array of id/uri objects.
//!
//! Usage: export_ranked <input_file> <output_file>
//!
//! Output: `[{"id":<decimal>,"uri":"<uri>"},...]`

use anyhow::Result;
use ftbracket_core::OutputMode;
use ftbracket_runner::{ExportArgs, init_tracing, parse_args_or_usage, run_export};

fn main() -> Result<()> {
    let args: ExportArgs = parse_args_or_usage("Usage: export_ranked <input_file> <output_file>");
    init_tracing("export_ranked");

    run_export(&args, OutputMode::Flat)?;
    Ok(())
}
