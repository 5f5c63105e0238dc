//! # Bracket Serialization
//!
//! Encodes a populated [`Bracket`] for downstream consumers.
//!
//! ## Modes
//! | Mode | Shape |
//! |------|-------|
//! | [`OutputMode::IdsUris`] | `{"ids":[1,...],"uris":["https://...",...]}` |
//! | [`OutputMode::SpacedArrays`] | `[1,...] ["https://...",...]` |
//! | [`OutputMode::Flat`] | `[{"id":1,"uri":"https://..."},...]` |
//!
//! Ids are unquoted JSON numbers at full precision. They are emitted as raw
//! number tokens so 160-bit values survive the encoder. URIs are
//! `uri_base` + the address exactly as the source spelled it.

use crate::error::Result;
use crate::record::CandidateRecord;
use crate::seeding::Bracket;
use serde::Serialize;
use serde_json::value::RawValue;
use std::fmt;

/// Resource locator prefix for user records.
pub const DEFAULT_URI_BASE: &str = "https://prod-api.kosetto.com/users/";

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One object with aligned `ids` and `uris` arrays.
    #[default]
    IdsUris,
    /// Two bracket-delimited arrays separated by a single space.
    SpacedArrays,
    /// One array of `{id, uri}` objects.
    Flat,
}

impl OutputMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::IdsUris => "ids_uris",
            Self::SpacedArrays => "spaced_arrays",
            Self::Flat => "flat",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Output Record
// =============================================================================

/// Read-only per-slot view: decimal id plus API URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub id: String,
    pub uri: String,
}

impl OutputRecord {
    pub fn from_record(record: &CandidateRecord, uri_base: &str) -> Self {
        Self {
            id: record.address.to_decimal(),
            uri: format!("{}{}", uri_base, record.address.raw()),
        }
    }

    fn id_token(&self) -> Result<Box<RawValue>> {
        Ok(RawValue::from_string(self.id.clone())?)
    }
}

/// Derive the output view for every slot, in slot order.
pub fn output_records(bracket: &Bracket, uri_base: &str) -> Vec<OutputRecord> {
    bracket
        .slots()
        .iter()
        .map(|r| OutputRecord::from_record(r, uri_base))
        .collect()
}

// =============================================================================
// Encoders
// =============================================================================

#[derive(Serialize)]
struct IdsUrisDoc<'a> {
    ids: Vec<Box<RawValue>>,
    uris: Vec<&'a str>,
}

#[derive(Serialize)]
struct FlatEntry<'a> {
    id: Box<RawValue>,
    uri: &'a str,
}

/// Encode `bracket` in `mode`.
pub fn render(bracket: &Bracket, mode: OutputMode, uri_base: &str) -> Result<String> {
    let records = output_records(bracket, uri_base);
    let ids = records
        .iter()
        .map(OutputRecord::id_token)
        .collect::<Result<Vec<_>>>()?;
    let uris: Vec<&str> = records.iter().map(|r| r.uri.as_str()).collect();

    let text = match mode {
        OutputMode::IdsUris => serde_json::to_string(&IdsUrisDoc { ids, uris })?,
        OutputMode::SpacedArrays => format!(
            "{} {}",
            serde_json::to_string(&ids)?,
            serde_json::to_string(&uris)?
        ),
        OutputMode::Flat => {
            let entries: Vec<FlatEntry<'_>> = ids
                .into_iter()
                .zip(uris)
                .map(|(id, uri)| FlatEntry { id, uri })
                .collect();
            serde_json::to_string(&entries)?
        }
    };
    Ok(text)
}
