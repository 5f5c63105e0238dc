//! # ftbracket-core
//!
//! Turns a leaderboard dump into a 64-slot single-elimination bracket.
//!
//! ## Pipeline
//! 1. [`qualify`] - keep the first 64 records passing the address and avatar checks
//! 2. [`seeding`] - place them into four 16-slot regions via [`seeding::SEED_ORDER`]
//! 3. [`serialize`] - encode ids and URIs in one of the [`serialize::OutputMode`]s
//! 4. [`artifact`] - write the text atomically and hash it
//!
//! [`pipeline`] composes the stages; export tools differ only in output mode.
//!
//! ## Determinism Contract
//! - Input order is the seed order (record 0 is the top seed)
//! - Fixed permutation table, no randomness, no wall-clock
//! - Compact JSON only, so identical inputs produce identical bytes

pub mod artifact;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod qualify;
pub mod record;
pub mod seeding;
pub mod serialize;

pub use config::PipelineConfig;
pub use error::{BracketError, Result};
pub use pipeline::{RunSummary, run_pipeline, transform};
pub use qualify::{QualifiedSet, QualifyPolicy};
pub use record::{Address, CandidateRecord};
pub use seeding::{
    BRACKET_SIZE, Bracket, REGION_COUNT, REGION_SIZE, SEED_ORDER, SeedPermutation,
    seed_bracket,
};
pub use serialize::{OutputMode, OutputRecord, render};
