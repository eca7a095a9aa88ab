//! analysis — the Benford pipeline: options, guards, metrics, outcome.
//!
//! Purpose
//! -------
//! Tie the engine's stages together. This subtree owns the per-run
//! configuration bundle ([`BenfordOptions`]), the entry-point guards
//! ([`validate_options`]), the statistical evaluator
//! ([`DeviationMetrics`]), and the end-to-end pipeline with its
//! structured result ([`BenfordOutcome`]).
//!
//! Key behaviors
//! -------------
//! - One call — [`BenfordOutcome::analyze`] — runs extract → build →
//!   evaluate → synthesize and returns an immutable result; each run is
//!   a pure function of (sequence, options).
//! - The evaluator computes the Chi-Square statistic over counts, its
//!   upper-tail χ²(8) p-value via `statrs`, and MAD/SAD on the
//!   proportion scale, plus a χ² reliability note for low expected
//!   counts.
//!
//! Invariants & assumptions
//! ------------------------
//! - Entry points validate configuration first and report all failures
//!   via [`BenfordResult`](crate::errors::BenfordResult); panics indicate
//!   programming errors.
//! - Results are internally consistent: stored verdict/band match the
//!   stored metrics under the run's thresholds.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use benford_analytics::analysis::{BenfordOptions, BenfordOutcome};
//!
//!   let data = vec![12.0, 17.5, 104.2, 230.9, 3.1, 45.0];
//!   let outcome = BenfordOutcome::analyze(&data, &BenfordOptions::default())?;
//!   println!("{} (p = {:.4})", outcome.verdict().label(), outcome.p_value());
//!   # Ok::<(), benford_analytics::errors::BenfordError>(())
//!   ```
//!
//! - Python bindings expose thin wrappers around the same entry point and
//!   rely on `From<BenfordError> for PyErr` to raise `ValueError`.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`metrics`] pin the statistic, p-value, MAD/SAD, and
//!   reliability bookkeeping; tests in [`outcome`] cover end-to-end
//!   verdicts, idempotence, and the presentation table; tests in
//!   [`validation`] cover the entry-point guard. The `tests/` directory
//!   exercises the full pipeline against realistic datasets.

pub mod metrics;
pub mod options;
pub mod outcome;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::metrics::{DeviationMetrics, DEGREES_OF_FREEDOM, LOW_EXPECTED_COUNT};
pub use self::options::BenfordOptions;
pub use self::outcome::{BenfordOutcome, DigitRow, RECOMMENDED_MIN_SAMPLE};
pub use self::validation::validate_options;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use benford_analytics::analysis::prelude::*;
//
// to import the main analysis surface in a single line.

pub mod prelude {
    pub use super::options::BenfordOptions;
    pub use super::outcome::{BenfordOutcome, DigitRow};
}
