//! Deviation metrics — Chi-Square, p-value, MAD, and SAD.
//!
//! Purpose
//! -------
//! Quantify how far an observed first-digit distribution lies from the
//! theoretical Benford table, on two complementary axes: a statistical
//! axis (Pearson Chi-Square goodness-of-fit statistic with its upper-tail
//! χ²(8) p-value) and a practical axis (mean and sum of absolute
//! deviations between the two proportion tables).
//!
//! Key behaviors
//! -------------
//! - Chi-Square is computed over absolute counts
//!   Σ (observedᵢ − expectedᵢ)² / expectedᵢ with expectedᵢ = P(i) × N and
//!   8 degrees of freedom (9 digit categories − 1).
//! - The p-value is the upper tail of χ²(8) at the statistic, via the
//!   `statrs` Chi-Square CDF.
//! - MAD/SAD are computed on the proportion scale so the published MAD
//!   conformity bands apply directly; SAD = 9 × MAD by construction.
//! - Digits whose expected count falls below 5 are recorded: the
//!   Chi-Square approximation is weak there and hosts should warn. This
//!   is a reliability note, never an error.
//!
//! Invariants & assumptions
//! ------------------------
//! - The observed distribution has N ≥ 1 (guaranteed by its builder).
//! - Expected counts are strictly positive for N ≥ 1 under the fixed
//!   Benford table; the degenerate guard exists defensively and signals a
//!   configuration bug if it ever fires.
//! - The statistic is ≥ 0 and the p-value lies in [0, 1].
//!
//! Conventions
//! -----------
//! - [`DeviationMetrics`] is immutable once computed from a given
//!   (observed, expected, N) triple; re-evaluating the same distribution
//!   yields identical values.
//!
//! Testing notes
//! -------------
//! - Unit tests cover near-zero metrics on a synthetic Benford-exact
//!   sample, the SAD = 9 × MAD identity, statistic/p-value ranges, and
//!   the low-expected-count bookkeeping on small samples.

use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::distribution::{benford_proportions, expected_counts, ObservedDistribution, DIGIT_COUNT};
use crate::errors::{BenfordError, BenfordResult};

/// Degrees of freedom of the first-digit Chi-Square test (9 − 1).
pub const DEGREES_OF_FREEDOM: usize = DIGIT_COUNT - 1;

/// Expected-count level below which the χ² approximation is flagged.
pub const LOW_EXPECTED_COUNT: f64 = 5.0;

/// DeviationMetrics — immutable statistical summary of one comparison.
///
/// Purpose
/// -------
/// Hold the Chi-Square statistic, its upper-tail p-value, MAD, SAD, and
/// the χ² reliability note for one (observed, expected, N) comparison.
///
/// Fields
/// ------
/// - `chi_square`: `f64`
///   Pearson goodness-of-fit statistic over counts; ≥ 0.
/// - `p_value`: `f64`
///   Upper-tail probability of the statistic under χ²(8); in [0, 1].
/// - `mad`: `f64`
///   Mean absolute deviation of proportions, (1/9) Σ |obsᵢ − expᵢ|.
/// - `sad`: `f64`
///   Sum of absolute deviations, Σ |obsᵢ − expᵢ| = 9 × MAD.
/// - `low_expected_digits`: `Vec<u8>`
///   Digits whose expected count is below [`LOW_EXPECTED_COUNT`]; empty
///   for N ≥ 110 under the Benford table.
///
/// Invariants
/// ----------
/// - `chi_square ≥ 0`, `0 ≤ p_value ≤ 1`, `0 ≤ mad`, `sad = 9 × mad`.
///
/// Performance
/// -----------
/// - Evaluation is O(9); the only allocation is the (usually empty)
///   low-expected-digit list.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviationMetrics {
    chi_square: f64,
    p_value: f64,
    mad: f64,
    sad: f64,
    low_expected_digits: Vec<u8>,
}

impl DeviationMetrics {
    /// Evaluate all deviation metrics for an observed distribution.
    ///
    /// Parameters
    /// ----------
    /// - `observed`: [`ObservedDistribution`]
    ///   The aggregated digit counts with N ≥ 1.
    ///
    /// Returns
    /// -------
    /// `BenfordResult<DeviationMetrics>`
    ///   - `Ok(DeviationMetrics)` with the statistic, p-value, MAD, SAD,
    ///     and reliability note.
    ///   - `Err(BenfordError::DegenerateExpected)` if any expected count
    ///     is not strictly positive — impossible with the fixed Benford
    ///     table and N ≥ 1, and guarded defensively because a zero
    ///     expected count makes the statistic undefined.
    ///
    /// Errors
    /// ------
    /// - `BenfordError::DegenerateExpected { digit, expected }`
    ///   Indicates a malformed expected-distribution configuration; fatal
    ///   to the run.
    ///
    /// Panics
    /// ------
    /// - Never panics; the χ²(8) distribution construction is infallible
    ///   for the fixed positive degrees of freedom.
    pub fn evaluate(observed: &ObservedDistribution) -> BenfordResult<Self> {
        let expected = expected_counts(observed.sample_size());

        let mut low_expected_digits = Vec::new();
        for (i, &count) in expected.iter().enumerate() {
            if count <= 0.0 {
                return Err(BenfordError::DegenerateExpected {
                    digit: (i + 1) as u8,
                    expected: count,
                });
            }
            if count < LOW_EXPECTED_COUNT {
                low_expected_digits.push((i + 1) as u8);
            }
        }

        let counts = observed.counts();
        let chi_square: f64 = (0..DIGIT_COUNT)
            .map(|i| {
                let diff = counts[i] as f64 - expected[i];
                diff * diff / expected[i]
            })
            .sum();

        let p_value = 1.0
            - ChiSquared::new(DEGREES_OF_FREEDOM as f64)
                .expect("freedom = 8")
                .cdf(chi_square);

        let observed_props = observed.proportions();
        let expected_props = benford_proportions();
        let sad: f64 =
            (0..DIGIT_COUNT).map(|i| (observed_props[i] - expected_props[i]).abs()).sum();
        let mad = sad / DIGIT_COUNT as f64;

        Ok(DeviationMetrics { chi_square, p_value, mad, sad, low_expected_digits })
    }

    /// The Pearson Chi-Square goodness-of-fit statistic.
    pub fn chi_square(&self) -> f64 {
        self.chi_square
    }

    /// Upper-tail χ²(8) probability of [`chi_square`](Self::chi_square).
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Mean absolute deviation of proportions.
    pub fn mad(&self) -> f64 {
        self.mad
    }

    /// Sum of absolute deviations of proportions (9 × MAD).
    pub fn sad(&self) -> f64 {
        self.sad
    }

    /// Degrees of freedom of the test (always 8).
    pub fn degrees_of_freedom(&self) -> usize {
        DEGREES_OF_FREEDOM
    }

    /// Digits whose expected count is below [`LOW_EXPECTED_COUNT`].
    pub fn low_expected_digits(&self) -> &[u8] {
        &self.low_expected_digits
    }

    /// Whether the χ² approximation is trustworthy (no low expected counts).
    pub fn chi_square_reliable(&self) -> bool {
        self.low_expected_digits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::{FilterPolicy, NonFiniteHandling};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Near-zero metrics and a high p-value on a Benford-exact sample.
    // - The SAD = 9 × MAD identity and statistic/p-value range invariants
    //   on a skewed sample.
    // - Low-expected-count bookkeeping for small and large N.
    //
    // They intentionally DO NOT cover:
    // - The DegenerateExpected guard, which is unreachable through the
    //   public API (expected counts are strictly positive for N ≥ 1 under
    //   the fixed table).
    // - Verdict synthesis from these metrics; that lives in `verdict`.
    // -------------------------------------------------------------------------

    /// Sequence whose digit counts follow the Benford table rounded to
    /// integers at N = 1000: [301, 176, 125, 97, 79, 67, 58, 51, 46].
    fn benford_exact_sample() -> Vec<f64> {
        let counts = [301usize, 176, 125, 97, 79, 67, 58, 51, 46];
        let mut data = Vec::with_capacity(1000);
        for (i, &count) in counts.iter().enumerate() {
            data.extend(std::iter::repeat((i + 1) as f64).take(count));
        }
        data
    }

    fn observe(data: &[f64]) -> ObservedDistribution {
        ObservedDistribution::from_sequence(
            data,
            FilterPolicy::default(),
            NonFiniteHandling::Fail,
        )
        .expect("test sequence should aggregate")
    }

    #[test]
    // Purpose
    // -------
    // Verify that a sample matching the theoretical table (up to count
    // rounding) produces a tiny statistic, a high p-value, and MAD near
    // zero.
    //
    // Given
    // -----
    // - The 1000-element Benford-exact sample.
    //
    // Expect
    // ------
    // - chi_square < 0.1, p_value > 0.99, mad < 0.001, and a reliable
    //   χ² approximation.
    fn evaluate_benford_exact_sample_is_near_zero() {
        // Arrange
        let data = benford_exact_sample();
        let observed = observe(&data);

        // Act
        let metrics = DeviationMetrics::evaluate(&observed).expect("evaluation should succeed");

        // Assert
        assert!(metrics.chi_square() < 0.1, "chi² should be tiny, got {}", metrics.chi_square());
        assert!(metrics.p_value() > 0.99, "p should be high, got {}", metrics.p_value());
        assert!(metrics.mad() < 0.001, "MAD should be near zero, got {}", metrics.mad());
        assert!(metrics.chi_square_reliable());
    }

    #[test]
    // Purpose
    // -------
    // Verify the SAD = 9 × MAD identity and the range invariants
    // (statistic ≥ 0, p ∈ [0, 1]) on a skewed sample.
    //
    // Given
    // -----
    // - The concentrated reference sequence over digits 1–3.
    //
    // Expect
    // ------
    // - sad ≈ 9 × mad, chi_square ≥ 0, p_value ∈ [0, 1], and a notably
    //   high MAD (above the published nonconformity cutpoint 0.015).
    fn evaluate_skewed_sample_identities_and_ranges() {
        // Arrange
        let data = [1.0, 10.0, 100.0, 1000.0, 2.0, 20.0, 200.0, 3.0, 30.0, 300.0];
        let observed = observe(&data);

        // Act
        let metrics = DeviationMetrics::evaluate(&observed).expect("evaluation should succeed");

        // Assert
        assert!((metrics.sad() - 9.0 * metrics.mad()).abs() < 1e-12);
        assert!(metrics.chi_square() >= 0.0);
        assert!((0.0..=1.0).contains(&metrics.p_value()));
        assert!(metrics.mad() > 0.015, "MAD should be high, got {}", metrics.mad());
        assert_eq!(metrics.degrees_of_freedom(), 8);
    }

    #[test]
    // Purpose
    // -------
    // Verify low-expected-count bookkeeping: with N = 10 every digit from
    // 4 upward has an expected count below 5, while N = 1000 has none.
    //
    // Given
    // -----
    // - The 10-element reference sequence and the 1000-element exact
    //   sample.
    //
    // Expect
    // ------
    // - N = 10: χ² unreliable, and every digit is flagged (expected
    //   counts 3.01 … 0.46 are all below 5).
    // - N = 1000: χ² reliable, no flagged digits.
    fn evaluate_flags_low_expected_counts_for_small_samples() {
        // Arrange
        let small = [1.0, 10.0, 100.0, 1000.0, 2.0, 20.0, 200.0, 3.0, 30.0, 300.0];
        let large = benford_exact_sample();

        // Act
        let small_metrics =
            DeviationMetrics::evaluate(&observe(&small)).expect("evaluation should succeed");
        let large_metrics =
            DeviationMetrics::evaluate(&observe(&large)).expect("evaluation should succeed");

        // Assert
        assert!(!small_metrics.chi_square_reliable());
        assert_eq!(small_metrics.low_expected_digits(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(large_metrics.chi_square_reliable());
        assert!(large_metrics.low_expected_digits().is_empty());
    }

    #[test]
    // Purpose
    // -------
    // Verify idempotence: evaluating the same distribution twice yields
    // identical metrics.
    //
    // Given
    // -----
    // - One observed distribution over a mixed sample.
    //
    // Expect
    // ------
    // - Two evaluations compare equal.
    fn evaluate_is_idempotent() {
        // Arrange
        let data = [1.2, 1.9, 23.0, 3.14, 47.0, 560.0, 7.1, 89.0, 912.0];
        let observed = observe(&data);

        // Act
        let first = DeviationMetrics::evaluate(&observed).expect("evaluation should succeed");
        let second = DeviationMetrics::evaluate(&observed).expect("evaluation should succeed");

        // Assert
        assert_eq!(first, second);
    }
}
