//! Analysis options — the per-run configuration bundle.
//!
//! Purpose
//! -------
//! Bundle everything a single analysis run is parameterized by: the value
//! filter policy, the non-finite handling mode, and the verdict
//! thresholds. One options value plus one numeric sequence fully
//! determines one result; runs are pure functions of the pair.
//!
//! Conventions
//! -----------
//! - Fields are public plain data; the pipeline entry point re-validates
//!   the thresholds via [`crate::analysis::validation::validate_options`]
//!   before any computation.
//! - `Default` reproduces the hosting tool's defaults: zeros ignored,
//!   negatives kept, fail fast on non-finite values, published MAD bands.

use crate::digits::{FilterPolicy, NonFiniteHandling};
use crate::verdict::VerdictThresholds;

/// BenfordOptions — filter policy, non-finite handling, and thresholds.
///
/// Purpose
/// -------
/// Carry the complete configuration for one analysis run so hosts pass a
/// single value alongside the data.
///
/// Fields
/// ------
/// - `filter`: [`FilterPolicy`]
///   Which values enter the sample (zeros, negatives).
/// - `non_finite`: [`NonFiniteHandling`]
///   Fail fast on NaN/±∞ (default) or exclude and tally.
/// - `thresholds`: [`VerdictThresholds`]
///   Significance level and MAD cutpoints for verdict synthesis.
///
/// Invariants
/// ----------
/// - `thresholds` must satisfy its own invariants; the entry point
///   enforces this before analysis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BenfordOptions {
    /// Which values enter the sample.
    pub filter: FilterPolicy,
    /// How NaN/±∞ values are treated.
    pub non_finite: NonFiniteHandling,
    /// Verdict thresholds for this run.
    pub thresholds: VerdictThresholds,
}

impl BenfordOptions {
    /// Construct an options bundle from its parts.
    pub fn new(
        filter: FilterPolicy, non_finite: NonFiniteHandling, thresholds: VerdictThresholds,
    ) -> Self {
        BenfordOptions { filter, non_finite, thresholds }
    }
}
