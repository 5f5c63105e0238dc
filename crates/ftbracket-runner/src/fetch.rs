//! Leaderboard download.
//!
//! The payload is passed through untouched; validation happens in the
//! export tools so a fetch never has to be repeated to retry a parse.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

/// GET `url` and return the response body.
///
/// Non-2xx responses are errors. No retries; transport timeouts are reqwest's defaults.
pub async fn fetch_leaderboard(url: &str) -> Result<Vec<u8>> {
    info!("GET {}", url);

    let resp = reqwest::get(url)
        .await
        .with_context(|| format!("GET {}", url))?
        .error_for_status()
        .with_context(|| format!("non-200 from {}", url))?;

    let body = resp
        .bytes()
        .await
        .with_context(|| format!("read body from {}", url))?;

    info!("Received {} bytes", body.len());
    Ok(body.to_vec())
}

/// Fetch `url` and atomically write the raw body to `out`.
pub async fn fetch_to_file(url: &str, out: &Path) -> Result<usize> {
    let body = fetch_leaderboard(url).await?;

    match serde_json::from_slice::<Value>(&body) {
        Ok(Value::Array(entries)) => info!("Leaderboard has {} entries", entries.len()),
        Ok(_) => warn!("Leaderboard payload is not a JSON array"),
        Err(e) => warn!("Leaderboard payload is not valid JSON: {}", e),
    }

    ftbracket_core::artifact::write_atomic(out, &body)
        .with_context(|| format!("write {}", out.display()))?;
    Ok(body.len())
}
