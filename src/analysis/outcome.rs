//! Analysis outcome — the end-to-end pipeline and its structured result.
//!
//! Purpose
//! -------
//! Run the full Benford pipeline (extract → build → evaluate →
//! synthesize) over a numeric sequence and hold everything the
//! presentation and report collaborators consume: the observed and
//! expected tables, sample size, deviation metrics, verdict, conformity
//! band, exclusion accounting, and reliability/adequacy notes.
//!
//! Key behaviors
//! -------------
//! - [`BenfordOutcome::analyze`] is the engine's single entry point: one
//!   call, one immutable result, no side effects, no shared state across
//!   runs. Identical (sequence, options) inputs yield identical results.
//! - [`BenfordOutcome::digit_table`] renders the per-digit comparison
//!   rows (count, observed %, expected %, difference in percentage
//!   points) both the charting and the report collaborators display.
//! - Sample adequacy: Benford analysis on fewer than
//!   [`RECOMMENDED_MIN_SAMPLE`] valid digits is statistically weak; the
//!   result flags this rather than failing, since only N = 0 is fatal.
//!
//! Invariants & assumptions
//! ------------------------
//! - The outcome is internally consistent: the verdict and band were
//!   synthesized from exactly the metrics and thresholds stored in the
//!   run, and the digit table reflects exactly the stored distribution.
//!
//! Downstream usage
//! ----------------
//! - Hosts call `analyze`, render `digit_table()` plus the scalar
//!   accessors, and map the verdict/band labels to their severity UI.
//!   Re-analysis with different filters or thresholds is simply another
//!   `analyze` call.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the conforming and anomalous ends of the verdict
//!   range, pipeline idempotence, digit-table consistency, and the
//!   adequacy flag; error paths are covered by the builder's and the
//!   integration suite's tests.

use crate::analysis::metrics::DeviationMetrics;
use crate::analysis::options::BenfordOptions;
use crate::analysis::validation::validate_options;
use crate::distribution::{expected_percentages, ExclusionTally, ObservedDistribution, DIGIT_COUNT};
use crate::errors::BenfordResult;
use crate::verdict::{synthesize, ConformityBand, Verdict};

/// Valid-digit count below which a Benford analysis is considered weak.
pub const RECOMMENDED_MIN_SAMPLE: usize = 100;

/// DigitRow — one row of the per-digit comparison table.
///
/// Purpose
/// -------
/// Carry the fields the charting collaborator plots (observed vs expected
/// bars) and the report collaborator tabulates, for a single digit.
///
/// Fields
/// ------
/// - `digit`: `u8` — the leading digit, 1..=9.
/// - `count`: `u64` — observed occurrences.
/// - `observed_pct`: `f64` — observed share of N, in percent.
/// - `expected_pct`: `f64` — Benford share, in percent.
/// - `difference_pp`: `f64` — observed − expected, in percentage points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigitRow {
    /// The leading digit, 1..=9.
    pub digit: u8,
    /// Observed occurrences of the digit.
    pub count: u64,
    /// Observed share of the sample, in percent.
    pub observed_pct: f64,
    /// Expected Benford share, in percent.
    pub expected_pct: f64,
    /// Observed minus expected, in percentage points.
    pub difference_pp: f64,
}

/// BenfordOutcome — structured result of one analysis run.
///
/// Purpose
/// -------
/// Bundle the observed distribution, deviation metrics, verdict, and
/// conformity band of one run behind scalar accessors, so downstream
/// code (including Python bindings) does not depend on internal layout.
///
/// Key behaviors
/// -------------
/// - Constructed only by [`BenfordOutcome::analyze`]; immutable after
///   construction.
/// - Exposes the presentation contract (`digit_table()`) and the
///   data-quality notes (`exclusions()`, `chi_square_reliable()`,
///   `sample_adequate()`) alongside the core metrics.
///
/// Invariants
/// ----------
/// - `verdict()`/`band()` agree with `p_value()`/`mad()` under the
///   thresholds the run was configured with.
/// - `digit_table()` rows sum: counts to N, observed percentages to 100
///   within rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct BenfordOutcome {
    observed: ObservedDistribution,
    metrics: DeviationMetrics,
    verdict: Verdict,
    band: ConformityBand,
}

impl BenfordOutcome {
    /// Run the full Benford analysis pipeline.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `&[f64]`
    ///   The raw numeric sequence (an externally parsed column).
    /// - `options`: [`BenfordOptions`]
    ///   Filter policy, non-finite handling, and verdict thresholds.
    ///
    /// Returns
    /// -------
    /// `BenfordResult<BenfordOutcome>`
    ///   - `Ok(BenfordOutcome)` with the complete structured result.
    ///   - `Err(BenfordError::InvalidAlpha | InvalidMadCutpoints)` when
    ///     the thresholds are malformed.
    ///   - `Err(BenfordError::NonFiniteValue { .. })` on the first NaN/±∞
    ///     under fail-fast handling.
    ///   - `Err(BenfordError::InsufficientData { .. })` when no valid
    ///     leading digit remains.
    ///   - `Err(BenfordError::DegenerateExpected { .. })` on a malformed
    ///     expected-distribution configuration (defensive; never with the
    ///     fixed table).
    ///
    /// Errors
    /// ------
    /// - See the variant list above; all errors carry the offending
    ///   value, index, or counts for host-side messaging.
    ///
    /// Panics
    /// ------
    /// - Never panics on user-facing invalid input.
    pub fn analyze(data: &[f64], options: &BenfordOptions) -> BenfordResult<Self> {
        validate_options(options)?;

        let observed =
            ObservedDistribution::from_sequence(data, options.filter, options.non_finite)?;
        let metrics = DeviationMetrics::evaluate(&observed)?;
        let (verdict, band) = synthesize(metrics.p_value(), metrics.mad(), &options.thresholds);

        Ok(BenfordOutcome { observed, metrics, verdict, band })
    }

    /// The observed digit distribution of this run.
    pub fn observed(&self) -> &ObservedDistribution {
        &self.observed
    }

    /// The deviation metrics of this run.
    pub fn metrics(&self) -> &DeviationMetrics {
        &self.metrics
    }

    /// Number of values that yielded a defined leading digit (N).
    pub fn sample_size(&self) -> usize {
        self.observed.sample_size()
    }

    /// The Pearson Chi-Square statistic.
    pub fn chi_square(&self) -> f64 {
        self.metrics.chi_square()
    }

    /// Upper-tail χ²(8) p-value of the statistic.
    pub fn p_value(&self) -> f64 {
        self.metrics.p_value()
    }

    /// Mean absolute deviation of proportions.
    pub fn mad(&self) -> f64 {
        self.metrics.mad()
    }

    /// Sum of absolute deviations of proportions (9 × MAD).
    pub fn sad(&self) -> f64 {
        self.metrics.sad()
    }

    /// The qualitative anomaly conclusion.
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// The MAD conformity band the verdict was derived from.
    pub fn band(&self) -> ConformityBand {
        self.band
    }

    /// Accounting of values excluded before digit extraction.
    pub fn exclusions(&self) -> &ExclusionTally {
        self.observed.exclusions()
    }

    /// Whether the χ² approximation is trustworthy for this sample.
    pub fn chi_square_reliable(&self) -> bool {
        self.metrics.chi_square_reliable()
    }

    /// Whether N meets the recommended minimum for a meaningful analysis.
    pub fn sample_adequate(&self) -> bool {
        self.sample_size() >= RECOMMENDED_MIN_SAMPLE
    }

    /// The per-digit comparison rows for charts and reports.
    ///
    /// Returns
    /// -------
    /// `[DigitRow; DIGIT_COUNT]`
    ///   One row per digit 1..=9, in digit order: observed count,
    ///   observed and expected percentages, and their difference in
    ///   percentage points.
    pub fn digit_table(&self) -> [DigitRow; DIGIT_COUNT] {
        let counts = self.observed.counts();
        let observed_pct = self.observed.percentages();
        let expected_pct = expected_percentages();

        std::array::from_fn(|i| DigitRow {
            digit: (i + 1) as u8,
            count: counts[i],
            observed_pct: observed_pct[i],
            expected_pct: expected_pct[i],
            difference_pp: observed_pct[i] - expected_pct[i],
        })
    }
}
