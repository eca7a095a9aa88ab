//! Observed first-digit distribution — aggregation over a numeric sequence.
//!
//! Purpose
//! -------
//! Build the observed leading-digit frequency table for a full dataset:
//! apply the digit extractor to every element, count digits 1–9, tally
//! exclusions by reason, and enforce the engine's data-quality contract
//! (fail fast on non-finite input by default, fail when no valid digit
//! remains).
//!
//! Key behaviors
//! -------------
//! - [`ObservedDistribution::from_sequence`] is the single constructor;
//!   the resulting value is immutable and internally consistent.
//! - Counts always sum to the sample size N; proportions sum to 1 and
//!   percentages to 100 within floating rounding.
//! - Exclusions are never silent: every dropped value increments exactly
//!   one [`ExclusionTally`] bucket.
//!
//! Invariants & assumptions
//! ------------------------
//! - N ≥ 1 for every successfully constructed value; N = 0 is reported as
//!   [`BenfordError::InsufficientData`] instead.
//! - `counts[i]` corresponds to digit i + 1, matching the expected-table
//!   indexing in [`expected`](crate::distribution::expected).
//!
//! Downstream usage
//! ----------------
//! - The statistical evaluator consumes [`ObservedDistribution`] directly;
//!   presentation layers read `counts()` / `percentages()` for tables and
//!   charts and `exclusions()` for data-quality messaging.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the reference counting scenario, percentage
//!   normalization, filter accounting, both non-finite handling modes,
//!   and the empty / fully-filtered failure paths.

use crate::digits::{extract, ExclusionReason, Extraction, FilterPolicy, LeadingDigit, NonFiniteHandling};
use crate::distribution::expected::DIGIT_COUNT;
use crate::errors::{BenfordError, BenfordResult};

/// ExclusionTally — per-reason counts of values dropped before analysis.
///
/// Purpose
/// -------
/// Account for every input element that did not contribute a leading
/// digit, split by exclusion reason, so hosts can report "ignored/invalid
/// records" alongside the analysis result.
///
/// Fields
/// ------
/// - `zeros`: `usize`
///   Values equal to zero (no defined leading digit).
/// - `negatives`: `usize`
///   Values dropped by the `ignore_negatives` filter.
/// - `non_finite`: `usize`
///   NaN/±∞ values dropped under
///   [`NonFiniteHandling::Exclude`]; always 0 under fail-fast handling.
///
/// Invariants
/// ----------
/// - For a constructed [`ObservedDistribution`] over a sequence of length
///   L with sample size N: `zeros + negatives + non_finite == L − N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExclusionTally {
    /// Values equal to zero.
    pub zeros: usize,
    /// Values dropped by the negative filter.
    pub negatives: usize,
    /// Non-finite values dropped under `Exclude` handling.
    pub non_finite: usize,
}

impl ExclusionTally {
    /// Total number of excluded values across all reasons.
    pub fn total(&self) -> usize {
        self.zeros + self.negatives + self.non_finite
    }
}

/// ObservedDistribution — digit counts and exclusion accounting for one run.
///
/// Purpose
/// -------
/// Hold the observed frequency table of leading digits 1–9 for a filtered
/// numeric sequence, together with the sample size N and the exclusion
/// tally, as an immutable value object consumed by the evaluator and the
/// presentation contract.
///
/// Key behaviors
/// -------------
/// - Constructed only via [`ObservedDistribution::from_sequence`], which
///   enforces the non-finite and insufficient-data contracts.
/// - Exposes counts, proportions, and percentages; all three views agree
///   (`percentages()[i] == proportions()[i] * 100`).
///
/// Invariants
/// ----------
/// - `counts().iter().sum::<u64>() == sample_size() as u64`.
/// - `sample_size() ≥ 1`.
/// - Proportions sum to 1 and percentages to 100 within floating rounding.
///
/// Performance
/// -----------
/// - Construction is a single O(L) pass with no allocations; the value
///   itself is a fixed-size table plus three counters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservedDistribution {
    counts: [u64; DIGIT_COUNT],
    sample_size: usize,
    exclusions: ExclusionTally,
}

impl ObservedDistribution {
    /// Aggregate a numeric sequence into an observed digit distribution.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `&[f64]`
    ///   Raw numeric sequence, already parsed by an external loader. May
    ///   contain zeros, negatives, and (erroneously) non-finite values.
    /// - `policy`: [`FilterPolicy`]
    ///   Exclusion switches applied once, before digit extraction.
    /// - `non_finite`: [`NonFiniteHandling`]
    ///   Fail fast on the first NaN/±∞ (default) or drop and tally.
    ///
    /// Returns
    /// -------
    /// `BenfordResult<ObservedDistribution>`
    ///   - `Ok` with counts, N, and the exclusion tally on success.
    ///   - `Err(BenfordError::NonFiniteValue { index, value })` on the
    ///     first non-finite element under fail-fast handling.
    ///   - `Err(BenfordError::InsufficientData { total, excluded })` when
    ///     no element yields a defined leading digit (empty input or
    ///     everything filtered).
    ///
    /// Errors
    /// ------
    /// - `BenfordError::NonFiniteValue`
    ///   Carries the element index and offending value so the host can
    ///   point at the broken record.
    /// - `BenfordError::InsufficientData`
    ///   Carries the input length and exclusion count for the
    ///   "cannot analyze empty/fully-filtered dataset" message.
    ///
    /// Panics
    /// ------
    /// - Never panics; all invalid inputs are surfaced as errors.
    pub fn from_sequence(
        data: &[f64], policy: FilterPolicy, non_finite: NonFiniteHandling,
    ) -> BenfordResult<Self> {
        let mut counts = [0u64; DIGIT_COUNT];
        let mut exclusions = ExclusionTally::default();

        for (index, &value) in data.iter().enumerate() {
            match extract(value, policy) {
                Extraction::Digit(digit) => counts[digit.index()] += 1,
                Extraction::Excluded(ExclusionReason::Zero) => exclusions.zeros += 1,
                Extraction::Excluded(ExclusionReason::Negative) => exclusions.negatives += 1,
                Extraction::Excluded(ExclusionReason::NonFinite) => match non_finite {
                    NonFiniteHandling::Fail => {
                        return Err(BenfordError::NonFiniteValue { index, value });
                    }
                    NonFiniteHandling::Exclude => exclusions.non_finite += 1,
                },
            }
        }

        let sample_size = counts.iter().sum::<u64>() as usize;
        if sample_size == 0 {
            return Err(BenfordError::InsufficientData {
                total: data.len(),
                excluded: exclusions.total(),
            });
        }

        Ok(ObservedDistribution { counts, sample_size, exclusions })
    }

    /// Per-digit observed counts, indexed by digit − 1.
    pub fn counts(&self) -> &[u64; DIGIT_COUNT] {
        &self.counts
    }

    /// Observed count for one digit.
    pub fn count(&self, digit: LeadingDigit) -> u64 {
        self.counts[digit.index()]
    }

    /// Number of values that yielded a defined leading digit (N).
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Per-digit observed proportions (counts / N), indexed by digit − 1.
    pub fn proportions(&self) -> [f64; DIGIT_COUNT] {
        let n = self.sample_size as f64;
        std::array::from_fn(|i| self.counts[i] as f64 / n)
    }

    /// Observed proportion for one digit.
    pub fn proportion(&self, digit: LeadingDigit) -> f64 {
        self.counts[digit.index()] as f64 / self.sample_size as f64
    }

    /// Per-digit observed percentages, indexed by digit − 1.
    pub fn percentages(&self) -> [f64; DIGIT_COUNT] {
        let props = self.proportions();
        std::array::from_fn(|i| props[i] * 100.0)
    }

    /// Accounting of values excluded before digit extraction.
    pub fn exclusions(&self) -> &ExclusionTally {
        &self.exclusions
    }
}
