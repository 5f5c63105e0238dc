//! # Bracket Seeding
//!
//! Places 64 ranked records into a single-elimination bracket.
//!
//! ## Layout
//! The bracket is four contiguous regions of 16 slots. Input rank `i` is
//! dealt round-robin across regions:
//!
//! ```text
//! region j = i mod 4
//! seed   k = i div 4          (0 = strongest in region)
//! slot     = j * 16 + SEED_ORDER[k]
//! ```
//!
//! ## Invariants
//! - [`SEED_ORDER`] is a permutation of 0..16, so every slot is filled exactly once
//! - The top two seeds of a region sit in opposite halves of it (slots 0 and 14)
//! - Wrong arity is an internal contract failure; nothing is partially seeded

use crate::error::{BracketError, Result};
use crate::record::CandidateRecord;

pub const BRACKET_SIZE: usize = 64;
pub const REGION_COUNT: usize = 4;
pub const REGION_SIZE: usize = 16;

/// Slot offset within a region for seed ranks 0..16.
///
/// Must stay bit-for-bit identical to keep outputs compatible with earlier runs.
pub const SEED_ORDER: [usize; REGION_SIZE] = [0, 14, 10, 6, 2, 8, 12, 4, 5, 13, 9, 3, 7, 11, 15, 1];

// =============================================================================
// Seed Permutation
// =============================================================================

/// A validated seed-rank -> slot-offset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPermutation([usize; REGION_SIZE]);

impl SeedPermutation {
    /// Validate that `order` uses each offset in 0..16 exactly once.
    pub fn new(order: [usize; REGION_SIZE]) -> Result<Self> {
        let mut seen = [false; REGION_SIZE];
        for (rank, &offset) in order.iter().enumerate() {
            if offset >= REGION_SIZE {
                return Err(BracketError::InvariantViolation(format!(
                    "seed rank {} maps to offset {} (must be < {})",
                    rank, offset, REGION_SIZE
                )));
            }
            if seen[offset] {
                return Err(BracketError::InvariantViolation(format!(
                    "seed offset {} assigned twice",
                    offset
                )));
            }
            seen[offset] = true;
        }
        Ok(Self(order))
    }

    /// The fixed production table.
    pub fn standard() -> Self {
        // SEED_ORDER is checked by test_standard_table_is_permutation.
        Self(SEED_ORDER)
    }

    pub fn offset(&self, seed_rank: usize) -> usize {
        self.0[seed_rank]
    }
}

impl Default for SeedPermutation {
    fn default() -> Self {
        Self::standard()
    }
}

/// Bracket slot for input rank `rank` (must be < [`BRACKET_SIZE`]).
pub fn seed_slot(rank: usize, perm: &SeedPermutation) -> usize {
    let region = rank % REGION_COUNT;
    let seed = rank / REGION_COUNT;
    region * REGION_SIZE + perm.offset(seed)
}

// =============================================================================
// Bracket
// =============================================================================

/// A fully populated 64-slot bracket. Only [`seed_bracket`] builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bracket {
    slots: Vec<CandidateRecord>,
}

impl Bracket {
    pub fn slots(&self) -> &[CandidateRecord] {
        &self.slots
    }

    /// The 16 slots of region `region` (0..4).
    pub fn region(&self, region: usize) -> &[CandidateRecord] {
        let start = region * REGION_SIZE;
        &self.slots[start..start + REGION_SIZE]
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

fn check_arity(len: usize) -> Result<()> {
    if len != BRACKET_SIZE {
        return Err(BracketError::InvariantViolation(format!(
            "bracket needs exactly {} records, got {}",
            BRACKET_SIZE, len
        )));
    }
    Ok(())
}

/// Seed exactly [`BRACKET_SIZE`] ranked records into a bracket.
pub fn seed_bracket(records: Vec<CandidateRecord>, perm: &SeedPermutation) -> Result<Bracket> {
    check_arity(records.len())?;

    let mut slots: Vec<Option<CandidateRecord>> = vec![None; BRACKET_SIZE];
    for (rank, record) in records.into_iter().enumerate() {
        let slot = seed_slot(rank, perm);
        if slots[slot].replace(record).is_some() {
            return Err(BracketError::InvariantViolation(format!(
                "slot {} filled twice (rank {})",
                slot, rank
            )));
        }
    }

    let slots = slots
        .into_iter()
        .enumerate()
        .map(|(slot, record)| {
            record.ok_or_else(|| {
                BracketError::InvariantViolation(format!("slot {} left empty", slot))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Bracket { slots })
}
