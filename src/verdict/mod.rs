//! verdict — anomaly classification from (p-value, MAD).
//!
//! Purpose
//! -------
//! Final stage of the Benford pipeline: turn the evaluator's deviation
//! metrics into a qualitative conclusion. The subtree separates the
//! tunable configuration ([`VerdictThresholds`], [`ConformityBand`]) from
//! the fixed decision policy ([`synthesize`], [`Verdict`]).
//!
//! Key behaviors
//! -------------
//! - Thresholds are host-tunable, validated configuration; the decision
//!   table itself is code and exhaustively matched.
//! - Classification uses both a statistical axis (p-value vs α) and a
//!   practical axis (MAD vs the published conformity bands) so neither
//!   large-sample artifacts nor small-sample deviations dominate.
//!
//! Downstream usage
//! ----------------
//! - The pipeline entry point calls [`synthesize`] after metric
//!   evaluation; hosts may also call it directly to re-classify stored
//!   metrics under alternative thresholds without re-running the
//!   analysis.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`thresholds`] cover validation and band boundaries;
//!   tests in [`policy`] enumerate the full decision table.

pub mod policy;
pub mod thresholds;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::policy::{synthesize, Verdict};
pub use self::thresholds::{
    ConformityBand, VerdictThresholds, DEFAULT_ALPHA, DEFAULT_MAD_ACCEPTABLE, DEFAULT_MAD_CLOSE,
    DEFAULT_MAD_CRITICAL,
};
