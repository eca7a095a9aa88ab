//! analysis::validation — entry-point guards for the pipeline.
//!
//! Purpose
//! -------
//! Centralize the configuration checks performed at the top of every
//! analysis run, so the pipeline body can assume a well-formed options
//! bundle. Data-quality checks on the sequence itself (non-finite values,
//! empty samples) are deliberately NOT duplicated here: they depend on
//! the filter policy and are enforced during aggregation in
//! [`ObservedDistribution::from_sequence`](crate::distribution::ObservedDistribution::from_sequence),
//! which also knows each element's index.
//!
//! Conventions
//! -----------
//! - A successful return (`Ok(())`) guarantees the thresholds satisfy
//!   their invariants; the sequence may still fail during aggregation.
//! - Errors are reported via the crate-wide
//!   [`BenfordError`](crate::errors::BenfordError).

use crate::analysis::options::BenfordOptions;
use crate::errors::BenfordResult;

/// Validate the configuration of an analysis run.
///
/// Parameters
/// ----------
/// - `options`: [`BenfordOptions`]
///   The per-run configuration bundle. Filter flags and non-finite
///   handling are unconstrained; thresholds carry invariants.
///
/// Returns
/// -------
/// `BenfordResult<()>`
///   - `Ok(())` if the thresholds satisfy `0 < alpha < 1` and strictly
///     ascending, positive, finite MAD cutpoints.
///   - `Err(BenfordError::InvalidAlpha)` or
///     `Err(BenfordError::InvalidMadCutpoints)` otherwise.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `BenfordError`.
pub fn validate_options(options: &BenfordOptions) -> BenfordResult<()> {
    options.thresholds.validate()
}
