//! The theoretical Benford first-digit distribution — fixed expected table.
//!
//! Purpose
//! -------
//! Provide the precomputed Benford proportions P(d) = log10(1 + 1/d) for
//! d = 1..=9 and the derived views the evaluator and presentation layers
//! need (percentages, expected counts for a sample size).
//!
//! Key behaviors
//! -------------
//! - The table is computed exactly once per process and shared; it is
//!   never recomputed per run and is independent of input data.
//! - Proportions sum to 1 (the digit categories partition all leading
//!   digits), so percentages sum to 100 within floating rounding.
//!
//! Conventions
//! -----------
//! - Index i of every 9-slot table corresponds to digit i + 1, matching
//!   [`LeadingDigit::index`](crate::digits::LeadingDigit::index).
//!
//! Testing notes
//! -------------
//! - Unit tests pin the table against the defining formula, the published
//!   rounded percentages (30.1%, 17.6%, …, 4.6%), and the sum-to-100
//!   invariant.

use std::sync::LazyLock;

use crate::digits::LeadingDigit;

/// Number of leading-digit categories (digits 1 through 9).
pub const DIGIT_COUNT: usize = 9;

/// P(d) = log10(1 + 1/d) for d = 1..=9, computed once and shared.
static PROPORTIONS: LazyLock<[f64; DIGIT_COUNT]> =
    LazyLock::new(|| std::array::from_fn(|i| (1.0 + 1.0 / ((i + 1) as f64)).log10()));

/// The fixed Benford proportion table, indexed by digit − 1.
pub fn benford_proportions() -> &'static [f64; DIGIT_COUNT] {
    &PROPORTIONS
}

/// Expected proportion of the given leading digit under Benford's Law.
pub fn expected_proportion(digit: LeadingDigit) -> f64 {
    PROPORTIONS[digit.index()]
}

/// The expected table as percentages (1 → 30.10…, 9 → 4.57…).
pub fn expected_percentages() -> [f64; DIGIT_COUNT] {
    std::array::from_fn(|i| PROPORTIONS[i] * 100.0)
}

/// Expected absolute counts for a sample of `sample_size` valid digits.
///
/// Parameters
/// ----------
/// - `sample_size`: `usize`
///   Number of values that yielded a defined leading digit (N).
///
/// Returns
/// -------
/// `[f64; DIGIT_COUNT]`
///   Per-digit expected counts P(d) × N; strictly positive whenever
///   `sample_size ≥ 1`.
pub fn expected_counts(sample_size: usize) -> [f64; DIGIT_COUNT] {
    let n = sample_size as f64;
    std::array::from_fn(|i| PROPORTIONS[i] * n)
}
