//! # Candidate Records
//!
//! One leaderboard entrant and its on-chain address.
//!
//! ## Address Representation
//! Addresses are 160-bit (or wider) integers written either as `0x`-prefixed
//! hex or as plain decimal. They are held as [`BigUint`] next to the raw
//! text so that:
//! - the decimal id never passes through f64 (no precision loss)
//! - the URI embeds the address exactly as the source wrote it

use crate::error::{BracketError, Result};
use num_bigint::BigUint;
use num_traits::Zero;
use serde_json::Value;
use std::fmt;

// =============================================================================
// Address
// =============================================================================

/// Arbitrary-precision, non-negative address plus its original spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    raw: String,
    value: BigUint,
}

impl Address {
    /// Parse an integer literal the way `BigInt(string)` does for
    /// non-negative input.
    ///
    /// Surrounding whitespace is ignored and a blank string is zero.
    /// `0x`, `0o` and `0b` select radix 16, 8 and 2, anything else is decimal.
    /// Signs and `_` separators are rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self {
                raw: raw.to_string(),
                value: BigUint::zero(),
            });
        }

        let (digits, radix) = split_radix(trimmed);
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(BracketError::MalformedInput(format!(
                "invalid address literal {:?}",
                raw
            )));
        }

        let value = BigUint::parse_bytes(digits.as_bytes(), radix).ok_or_else(|| {
            BracketError::MalformedInput(format!("invalid address literal {:?}", raw))
        })?;

        Ok(Self {
            raw: raw.to_string(),
            value,
        })
    }

    /// Build from a JSON `address` field: a string literal or an unsigned integer.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Self::parse(s),
            Value::Number(n) => n
                .as_u64()
                .map(|u| Self {
                    raw: n.to_string(),
                    value: BigUint::from(u),
                })
                .ok_or_else(|| {
                    BracketError::MalformedInput(format!(
                        "address must be a non-negative integer, got {}",
                        n
                    ))
                }),
            other => Err(BracketError::MalformedInput(format!(
                "address must be a string or integer, got {}",
                json_kind(other)
            ))),
        }
    }

    /// The address exactly as it appeared in the source record.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Full-precision base-10 rendering.
    pub fn to_decimal(&self) -> String {
        self.value.to_str_radix(10)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn split_radix(literal: &str) -> (&str, u32) {
    let bytes = literal.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => return (&literal[2..], 16),
            b'o' | b'O' => return (&literal[2..], 8),
            b'b' | b'B' => return (&literal[2..], 2),
            _ => {}
        }
    }
    (literal, 10)
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Candidate Record
// =============================================================================

/// A leaderboard entrant that reached the bracket stage.
///
/// `avatar_url` only matters for qualification; it never reaches the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    pub address: Address,
    pub avatar_url: Option<String>,
}

impl CandidateRecord {
    pub fn new(address: Address, avatar_url: Option<String>) -> Self {
        Self {
            address,
            avatar_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_hex_address() {
        let addr = Address::parse("0x5a4f0c1dd3e8d0a8c1b6e2d4c0a7f3b9e1d2c3b4").unwrap();
        assert_eq!(
            addr.to_decimal(),
            "515571983742125250332617364380501042477166412724"
        );
        assert_eq!(addr.raw(), "0x5a4f0c1dd3e8d0a8c1b6e2d4c0a7f3b9e1d2c3b4");
    }

    #[test]
    fn test_parse_decimal_address() {
        let addr = Address::parse("42").unwrap();
        assert_eq!(addr.to_decimal(), "42");
        assert_eq!(addr.value(), &BigUint::from(42u32));
    }

    #[test]
    fn test_max_160_bit_round_trip() {
        let hex = format!("0x{}", "ff".repeat(20));
        let addr = Address::parse(&hex).unwrap();
        let dec = addr.to_decimal();
        assert_eq!(dec, "1461501637330902918203684832716283019655932542975");

        let reparsed: BigUint = dec.parse().unwrap();
        assert_eq!(&reparsed, addr.value());
        assert_eq!(reparsed.bits(), 160);
    }

    #[test]
    fn test_256_bit_round_trip() {
        let hex = format!("0x{}", "ff".repeat(32));
        let addr = Address::parse(&hex).unwrap();
        assert_eq!(
            addr.to_decimal(),
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
        let reparsed = Address::parse(&addr.to_decimal()).unwrap();
        assert_eq!(reparsed.value(), addr.value());
    }

    #[test]
    fn test_radix_prefixes_and_whitespace() {
        assert_eq!(Address::parse("0XFF").unwrap().to_decimal(), "255");
        assert_eq!(Address::parse("0o17").unwrap().to_decimal(), "15");
        assert_eq!(Address::parse("0b101").unwrap().to_decimal(), "5");
        let padded = Address::parse("  0x10 ").unwrap();
        assert_eq!(padded.to_decimal(), "16");
        // Raw text is preserved verbatim for the URI.
        assert_eq!(padded.raw(), "  0x10 ");
    }

    #[test]
    fn test_blank_address_is_zero() {
        assert!(Address::parse("").unwrap().is_zero());
        assert!(Address::parse("   ").unwrap().is_zero());
        assert!(Address::parse("0x0").unwrap().is_zero());
    }

    #[test]
    fn test_rejects_invalid_literals() {
        for bad in ["0x", "-5", "+5", "1_000", "0xzz", "12a", "1.5"] {
            let err = Address::parse(bad).unwrap_err();
            assert!(
                matches!(err, BracketError::MalformedInput(_)),
                "expected MalformedInput for {:?}, got {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_from_json_number_and_string() {
        let from_num = Address::from_json(&json!(77)).unwrap();
        assert_eq!(from_num.raw(), "77");
        assert_eq!(from_num.to_decimal(), "77");

        let from_str = Address::from_json(&json!("0x4d")).unwrap();
        assert_eq!(from_str.to_decimal(), "77");
        assert_eq!(from_str.raw(), "0x4d");
    }

    #[test]
    fn test_from_json_rejects_other_kinds() {
        assert!(Address::from_json(&json!(-1)).is_err());
        assert!(Address::from_json(&json!(1.5)).is_err());
        assert!(Address::from_json(&json!(null)).is_err());
        assert!(Address::from_json(&json!({"a": 1})).is_err());
    }
}
