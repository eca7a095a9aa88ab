//! distribution — observed and expected first-digit frequency tables.
//!
//! Purpose
//! -------
//! Second stage of the Benford pipeline: aggregate per-value digit
//! extractions into the observed frequency table
//! ([`ObservedDistribution`]) and provide the fixed theoretical Benford
//! table it is compared against ([`benford_proportions`] and friends).
//!
//! Key behaviors
//! -------------
//! - The observed side owns the engine's data-quality contract: fail fast
//!   on non-finite input (by default) and fail with insufficient data
//!   when no valid digit remains.
//! - The expected side is precomputed once per process and independent of
//!   input; both sides index digit d at slot d − 1.
//!
//! Downstream usage
//! ----------------
//! - The statistical evaluator ([`crate::analysis`]) consumes both tables;
//!   presentation layers read counts/percentages and the exclusion tally.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`observed`] cover aggregation, filter accounting, and
//!   failure paths; tests in [`expected`] pin the theoretical table.

pub mod expected;
pub mod observed;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::expected::{
    benford_proportions, expected_counts, expected_percentages, expected_proportion, DIGIT_COUNT,
};
pub use self::observed::{ExclusionTally, ObservedDistribution};
