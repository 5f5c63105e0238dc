//! # Export Pipeline
//!
//! Composes qualify -> seed -> render -> write. Every export tool runs the
//! same trusted-avatar filter and the same seeded layout; tools differ only
//! in the [`OutputMode`] they ask for.
//!
//! | Tool | Encoding |
//! |------|----------|
//! | `seed_bracket` | [`OutputMode::IdsUris`] |
//! | `export_ranked` | [`OutputMode::Flat`] |
//! | `export_pairs` | [`OutputMode::SpacedArrays`] |
//!
//! ## Failure Contract
//! Every stage fails fast. The output path is only touched after the text
//! is fully rendered, so input, filter and seeding failures never create or
//! modify it.

use crate::artifact::{sha256_hex, write_atomic};
use crate::config::PipelineConfig;
use crate::error::{BracketError, Result};
use crate::qualify::QualifiedSet;
use crate::seeding::{REGION_COUNT, SeedPermutation, seed_bracket};
use crate::serialize::{OutputMode, render};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result of a completed pipeline run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub mode: OutputMode,
    pub output_path: PathBuf,
    /// Records placed in the bracket
    pub qualified: usize,
    /// Input entries inspected before the bracket filled
    pub scanned: usize,
    pub bytes_len: usize,
    /// SHA-256 of the output bytes (lowercase hex)
    pub sha256: String,
}

/// Run the in-memory part of the pipeline on a raw JSON payload.
pub fn transform(payload: &[u8], mode: OutputMode, cfg: &PipelineConfig) -> Result<String> {
    transform_inner(payload, mode, cfg).map(|(text, _)| text)
}

fn transform_inner(
    payload: &[u8],
    mode: OutputMode,
    cfg: &PipelineConfig,
) -> Result<(String, SelectionStats)> {
    let parsed: Value = serde_json::from_slice(payload)?;

    let qualified = QualifiedSet::select(&parsed, &cfg.trusted_policy())?;
    let stats = SelectionStats {
        qualified: qualified.len(),
        scanned: qualified.scanned(),
    };
    info!(
        "Qualified {} records ({} scanned)",
        stats.qualified, stats.scanned
    );

    let bracket = seed_bracket(qualified.into_records(), &SeedPermutation::standard())?;
    for region in 0..REGION_COUNT {
        debug!(
            "Region {} top slot: {}",
            region,
            bracket.region(region)[0].address
        );
    }

    let text = render(&bracket, mode, &cfg.output.uri_base)?;
    Ok((text, stats))
}

struct SelectionStats {
    qualified: usize,
    scanned: usize,
}

/// Read `input`, seed it, and atomically write it to `output` encoded as `mode`.
pub fn run_pipeline(
    input: &Path,
    output: &Path,
    mode: OutputMode,
    cfg: &PipelineConfig,
) -> Result<RunSummary> {
    info!("=== bracket export ({}) ===", mode);
    info!("Input: {:?}", input);

    let payload = std::fs::read(input).map_err(|e| BracketError::io(input, e))?;
    info!("Read {} bytes", payload.len());

    let (text, stats) = transform_inner(&payload, mode, cfg)?;

    write_atomic(output, text.as_bytes())?;
    let sha256 = sha256_hex(text.as_bytes());
    info!(
        "Wrote {} bytes to {:?} (sha256 {}...)",
        text.len(),
        output,
        &sha256[..16]
    );

    Ok(RunSummary {
        mode,
        output_path: output.to_path_buf(),
        qualified: stats.qualified,
        scanned: stats.scanned,
        bytes_len: text.len(),
        sha256,
    })
}
