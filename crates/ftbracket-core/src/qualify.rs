//! # Qualification Filter
//!
//! Reduces the raw leaderboard payload to the ordered set of records that
//! may enter the bracket.
//!
//! ## Rules
//! A record qualifies iff:
//! - it is a JSON object
//! - `address` is a non-empty string or a number, and non-zero
//! - the avatar field is a string starting with the trusted prefix
//!
//! ## Invariants
//! - Arrival order is preserved (arrival order is the seed order)
//! - Scanning stops at [`BRACKET_SIZE`] qualifiers; the excess is never inspected
//! - Fewer than [`BRACKET_SIZE`] qualifiers is a hard failure, not a warning

use crate::error::{BracketError, Result};
use crate::record::{Address, CandidateRecord, json_kind};
use crate::seeding::BRACKET_SIZE;
use serde_json::Value;
use tracing::debug;

/// Only avatars hosted here are accepted.
pub const DEFAULT_TRUSTED_AVATAR_PREFIX: &str = "https://pbs.twimg.com/";

/// Leaderboard field carrying the avatar URL.
pub const DEFAULT_AVATAR_FIELD: &str = "twitterPfpUrl";

// =============================================================================
// Policy
// =============================================================================

/// Which leaderboard entries are allowed into the bracket: a non-zero
/// address and an avatar URL under `prefix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifyPolicy {
    pub prefix: String,
    pub avatar_field: String,
}

impl Default for QualifyPolicy {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_TRUSTED_AVATAR_PREFIX.to_string(),
            avatar_field: DEFAULT_AVATAR_FIELD.to_string(),
        }
    }
}

impl QualifyPolicy {
    /// Evaluate one raw entry. `Ok(None)` means "skip", `Err` halts the run.
    fn evaluate(&self, index: usize, entry: &Value) -> Result<Option<CandidateRecord>> {
        let Some(obj) = entry.as_object() else {
            return Ok(None);
        };
        let Some(address) = obj.get("address").filter(|v| is_present(v)) else {
            return Ok(None);
        };
        let avatar = match obj.get(self.avatar_field.as_str()) {
            Some(Value::String(url)) if url.starts_with(self.prefix.as_str()) => url,
            _ => return Ok(None),
        };

        let address = Address::from_json(address).map_err(|e| with_index(index, e))?;
        if address.is_zero() {
            return Ok(None);
        }
        Ok(Some(CandidateRecord::new(address, Some(avatar.clone()))))
    }
}

/// Presence test for `address`: only non-empty strings and numbers count.
/// Null, booleans, arrays and objects are treated as absent.
fn is_present(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.is_empty(),
        Value::Number(_) => true,
        _ => false,
    }
}

fn with_index(index: usize, err: BracketError) -> BracketError {
    match err {
        BracketError::MalformedInput(msg) => {
            BracketError::MalformedInput(format!("record {}: {}", index, msg))
        }
        other => other,
    }
}

// =============================================================================
// Qualified Set
// =============================================================================

/// The first [`BRACKET_SIZE`] qualifying records, in arrival order.
#[derive(Debug, Clone)]
pub struct QualifiedSet {
    records: Vec<CandidateRecord>,
    scanned: usize,
}

impl QualifiedSet {
    /// Filter `payload` (a JSON array of leaderboard entries) under `policy`.
    pub fn select(payload: &Value, policy: &QualifyPolicy) -> Result<Self> {
        let entries = payload.as_array().ok_or_else(|| {
            BracketError::MalformedInput(format!(
                "leaderboard must be a JSON array, got {}",
                json_kind(payload)
            ))
        })?;

        let mut records = Vec::with_capacity(BRACKET_SIZE);
        let mut scanned = 0;
        for (index, entry) in entries.iter().enumerate() {
            if records.len() == BRACKET_SIZE {
                break;
            }
            scanned += 1;
            if let Some(record) = policy.evaluate(index, entry)? {
                records.push(record);
            }
        }

        debug!(
            "qualified {} of {} scanned entries ({} total)",
            records.len(),
            scanned,
            entries.len()
        );

        if records.len() < BRACKET_SIZE {
            return Err(BracketError::InsufficientData {
                required: BRACKET_SIZE,
                found: records.len(),
            });
        }

        Ok(Self { records, scanned })
    }

    pub fn records(&self) -> &[CandidateRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<CandidateRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of input entries inspected before the cap was reached.
    pub fn scanned(&self) -> usize {
        self.scanned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(address: &str) -> Value {
        json!({
            "address": address,
            "twitterPfpUrl": format!("https://pbs.twimg.com/profile_images/{}.jpg", address),
            "username": format!("user_{}", address),
        })
    }

    fn leaderboard(n: usize) -> Value {
        Value::Array((1..=n).map(|i| entry(&i.to_string())).collect())
    }

    fn addresses(set: &QualifiedSet) -> Vec<String> {
        set.records()
            .iter()
            .map(|r| r.address.raw().to_string())
            .collect()
    }

    #[test]
    fn test_exactly_64_selected_in_order() {
        let set = QualifiedSet::select(&leaderboard(100), &QualifyPolicy::default()).unwrap();
        assert_eq!(set.len(), 64);
        assert_eq!(set.scanned(), 64);
        let expected: Vec<String> = (1..=64).map(|i| i.to_string()).collect();
        assert_eq!(addresses(&set), expected);
    }

    #[test]
    fn test_insufficient_records_fails() {
        let err = QualifiedSet::select(&leaderboard(63), &QualifyPolicy::default()).unwrap_err();
        assert!(matches!(
            err,
            BracketError::InsufficientData {
                required: 64,
                found: 63
            }
        ));
    }

    #[test]
    fn test_untrusted_and_missing_fields_skipped() {
        let mut entries = vec![
            json!({"address": "0x01", "twitterPfpUrl": "https://evil.example/pfp.jpg"}),
            json!({"address": "0x02"}),
            json!({"twitterPfpUrl": "https://pbs.twimg.com/a.jpg"}),
            json!({"address": "", "twitterPfpUrl": "https://pbs.twimg.com/a.jpg"}),
            json!({"address": "0x0", "twitterPfpUrl": "https://pbs.twimg.com/a.jpg"}),
            json!({"address": null, "twitterPfpUrl": "https://pbs.twimg.com/a.jpg"}),
            json!({"address": "0x03", "twitterPfpUrl": null}),
            json!({"address": "0x04", "twitterPfpUrl": 12}),
            json!("not an object"),
        ];
        let skipped = entries.len();
        entries.extend((1..=64).map(|i| entry(&format!("0x{:x}", i + 1000))));

        let set = QualifiedSet::select(&Value::Array(entries), &QualifyPolicy::default()).unwrap();
        assert_eq!(set.len(), 64);
        assert_eq!(set.scanned(), skipped + 64);
        assert_eq!(set.records()[0].address.raw(), "0x3e9");
    }

    #[test]
    fn test_prefix_is_configurable() {
        let payload = Value::Array(
            (1..=64)
                .map(|i| json!({"address": i.to_string(), "avatar": "https://cdn.example/x.png"}))
                .collect(),
        );
        let policy = QualifyPolicy {
            prefix: "https://cdn.example/".to_string(),
            avatar_field: "avatar".to_string(),
        };
        let set = QualifiedSet::select(&payload, &policy).unwrap();
        assert_eq!(set.len(), 64);

        // Same payload under the default policy has no qualifiers.
        let err = QualifiedSet::select(&payload, &QualifyPolicy::default()).unwrap_err();
        assert!(matches!(err, BracketError::InsufficientData { found: 0, .. }));
    }

    #[test]
    fn test_malformed_address_halts() {
        let mut entries = vec![json!({
            "address": "0xnothex",
            "twitterPfpUrl": "https://pbs.twimg.com/a.jpg"
        })];
        entries.extend((1..=64).map(|i| entry(&i.to_string())));
        let err = QualifiedSet::select(&Value::Array(entries), &QualifyPolicy::default())
            .unwrap_err();
        match err {
            BracketError::MalformedInput(msg) => assert!(msg.starts_with("record 0:"), "{}", msg),
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_entries_past_the_cap_are_not_inspected() {
        let mut entries: Vec<Value> = (1..=64).map(|i| entry(&i.to_string())).collect();
        entries.push(json!({
            "address": "garbage",
            "twitterPfpUrl": "https://pbs.twimg.com/a.jpg"
        }));
        let set = QualifiedSet::select(&Value::Array(entries), &QualifyPolicy::default()).unwrap();
        assert_eq!(set.len(), 64);
    }

    #[test]
    fn test_non_scalar_addresses_are_skipped() {
        let avatar = "https://pbs.twimg.com/a.jpg";
        let mut entries = vec![
            json!({"address": true, "twitterPfpUrl": avatar}),
            json!({"address": false, "twitterPfpUrl": avatar}),
            json!({"address": ["0x01"], "twitterPfpUrl": avatar}),
            json!({"address": {"hex": "0x01"}, "twitterPfpUrl": avatar}),
            json!({"address": 0, "twitterPfpUrl": avatar}),
        ];
        entries.extend((1..=64).map(|i| entry(&i.to_string())));

        let set = QualifiedSet::select(&Value::Array(entries), &QualifyPolicy::default()).unwrap();
        assert_eq!(set.len(), 64);
        assert_eq!(set.scanned(), 5 + 64);
        assert_eq!(set.records()[0].address.raw(), "1");
    }

    #[test]
    fn test_numeric_address_qualifies() {
        let entries: Vec<Value> = (1..=64u64)
            .map(|i| json!({"address": i, "twitterPfpUrl": "https://pbs.twimg.com/a.jpg"}))
            .collect();
        let set = QualifiedSet::select(&Value::Array(entries), &QualifyPolicy::default()).unwrap();
        assert_eq!(set.records()[63].address.to_decimal(), "64");
    }

    #[test]
    fn test_non_array_payload_is_malformed() {
        let err =
            QualifiedSet::select(&json!({"users": []}), &QualifyPolicy::default()).unwrap_err();
        assert!(matches!(err, BracketError::MalformedInput(_)));
    }
}
