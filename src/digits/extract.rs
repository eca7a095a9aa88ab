//! Leading significant digit extraction — per-value classification.
//!
//! Purpose
//! -------
//! Derive the leading significant digit (1–9) of a single numeric value,
//! applying the sign/zero filter policy, and classify every value that
//! cannot contribute a digit by the reason it was excluded.
//!
//! Key behaviors
//! -------------
//! - Normalize |x| into [1, 10) by repeated division/multiplication by 10;
//!   the integer part is the leading digit, so both 0.0042 and 420000
//!   yield 4. Sign and scale are ignored.
//! - Classify exclusions with [`ExclusionReason`] rather than collapsing
//!   them into a bare "no digit": the aggregation layer needs the reason
//!   to decide between failing fast (non-finite under
//!   [`NonFiniteHandling::Fail`](crate::digits::NonFiniteHandling)) and
//!   tallying.
//! - Never produce 0 or a digit above 9; exact zeros are always excluded
//!   since a leading digit is undefined for zero.
//!
//! Invariants & assumptions
//! ------------------------
//! - The normalization loop terminates for every finite non-zero input.
//! - [`LeadingDigit`] values always satisfy 1 ≤ digit ≤ 9.
//! - Classification is ordered: non-finite first, then zero, then the
//!   negative filter, then normalization. First match wins.
//!
//! Conventions
//! -----------
//! - Extraction itself never returns an error; converting
//!   `Excluded(NonFinite)` into
//!   [`BenfordError::NonFiniteValue`](crate::errors::BenfordError) is the
//!   aggregation layer's job, which also knows the element's index.
//!
//! Testing notes
//! -------------
//! - Unit tests cover scale/sign invariance, every exclusion branch, and
//!   a sweep asserting the extracted digit is always in [1, 9].

use crate::digits::policy::FilterPolicy;

/// LeadingDigit — a validated first significant digit in [1, 9].
///
/// Purpose
/// -------
/// Carry the invariant 1 ≤ digit ≤ 9 in the type so downstream counting
/// code can index a 9-slot table without rechecking bounds.
///
/// Invariants
/// ----------
/// - `get()` is always in 1..=9; `index()` is always in 0..=8.
///
/// Performance
/// -----------
/// - A single byte; `Copy` everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeadingDigit(u8);

impl LeadingDigit {
    /// Construct from a raw digit, returning `None` outside [1, 9].
    pub fn new(digit: u8) -> Option<Self> {
        if (1..=9).contains(&digit) { Some(LeadingDigit(digit)) } else { None }
    }

    /// The digit value, in 1..=9.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position in a 9-slot digit table, in 0..=8.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

/// Why a value was excluded from the digit sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    /// Exactly zero; a leading digit is undefined for zero.
    Zero,
    /// Strictly negative and the policy ignores negatives.
    Negative,
    /// NaN or ±∞; handling is decided by the aggregation layer.
    NonFinite,
}

/// Outcome of classifying a single value under a filter policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// The value contributes this leading digit to the sample.
    Digit(LeadingDigit),
    /// The value is excluded for the given reason.
    Excluded(ExclusionReason),
}

/// Classify one value: filter, then derive its leading significant digit.
///
/// Parameters
/// ----------
/// - `value`: `f64`
///   Raw input value. May be zero, negative, or non-finite; every case is
///   classified rather than panicking.
/// - `policy`: [`FilterPolicy`]
///   Exclusion switches. Only `ignore_negatives` changes which values
///   yield digits: negatives are otherwise analyzed via their absolute
///   value. Exact zeros are excluded regardless of `ignore_zeros`.
///
/// Returns
/// -------
/// [`Extraction`]
///   - `Digit(d)` with d in [1, 9] for finite, non-zero values that pass
///     the filters.
///   - `Excluded(reason)` otherwise, with the first matching reason in
///     the order NonFinite, Zero, Negative.
///
/// Notes
/// -----
/// - Normalization divides |x| by 10 while it is ≥ 10, then multiplies by
///   10 while it is < 1, leaving it in [1, 10); truncation then gives the
///   leading digit directly.
/// - A truncated digit of 0 cannot occur for values in [1, 10); the
///   fallback exclusion mirrors the defensive guard in the extraction
///   logic this engine reproduces.
pub fn extract(value: f64, policy: FilterPolicy) -> Extraction {
    if !value.is_finite() {
        return Extraction::Excluded(ExclusionReason::NonFinite);
    }

    if value == 0.0 {
        return Extraction::Excluded(ExclusionReason::Zero);
    }

    if policy.ignore_negatives && value < 0.0 {
        return Extraction::Excluded(ExclusionReason::Negative);
    }

    let mut x = value.abs();
    while x >= 10.0 {
        x /= 10.0;
    }
    while x < 1.0 {
        x *= 10.0;
    }

    // x lies in [1, 10), so truncation yields a digit in 1..=9.
    match LeadingDigit::new(x as u8) {
        Some(digit) => Extraction::Digit(digit),
        None => Extraction::Excluded(ExclusionReason::Zero),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Scale and sign invariance of digit extraction.
    // - Every exclusion branch: non-finite, zero, filtered negative.
    // - The range invariant digit ∈ [1, 9] over a value sweep.
    //
    // They intentionally DO NOT cover:
    // - Aggregation across sequences, exclusion tallies, or fail-fast
    //   behavior on non-finite values; those live in
    //   `distribution::observed`.
    // -------------------------------------------------------------------------

    fn digit_of(value: f64) -> u8 {
        match extract(value, FilterPolicy::default()) {
            Extraction::Digit(d) => d.get(),
            other => panic!("expected a digit for {value}, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that extraction ignores scale: values differing only by a
    // power of ten share a leading digit.
    //
    // Given
    // -----
    // - 0.0042 and 420000.0, plus powers of ten of 1 and 9.
    //
    // Expect
    // ------
    // - Both 0.0042 and 420000.0 yield digit 4; 1, 10, 100 yield 1;
    //   0.9 and 9000.0 yield 9.
    fn extract_is_scale_invariant() {
        // Arrange / Act / Assert
        assert_eq!(digit_of(0.0042), 4);
        assert_eq!(digit_of(420000.0), 4);
        assert_eq!(digit_of(1.0), 1);
        assert_eq!(digit_of(10.0), 1);
        assert_eq!(digit_of(100.0), 1);
        assert_eq!(digit_of(0.9), 9);
        assert_eq!(digit_of(9000.0), 9);
    }

    #[test]
    // Purpose
    // -------
    // Verify that negatives are analyzed via their absolute value when
    // the policy keeps them, and excluded with reason Negative when the
    // policy drops them.
    //
    // Given
    // -----
    // - Value -273.15 under the default policy (negatives kept) and under
    //   a policy with `ignore_negatives = true`.
    //
    // Expect
    // ------
    // - Default policy: digit 2.
    // - Ignoring policy: `Excluded(Negative)`.
    fn extract_handles_negatives_per_policy() {
        // Arrange
        let keep = FilterPolicy::default();
        let drop = FilterPolicy::new(true, true);

        // Act
        let kept = extract(-273.15, keep);
        let dropped = extract(-273.15, drop);

        // Assert
        assert_eq!(kept, Extraction::Digit(LeadingDigit::new(2).unwrap()));
        assert_eq!(dropped, Extraction::Excluded(ExclusionReason::Negative));
    }

    #[test]
    // Purpose
    // -------
    // Verify that exact zero is excluded with reason Zero regardless of
    // the `ignore_zeros` flag, since zero has no leading digit.
    //
    // Given
    // -----
    // - Value 0.0 under policies with `ignore_zeros` true and false.
    //
    // Expect
    // ------
    // - Both classify as `Excluded(Zero)`.
    fn extract_always_excludes_exact_zero() {
        // Arrange
        let ignoring = FilterPolicy::new(true, false);
        let keeping = FilterPolicy::new(false, false);

        // Act / Assert
        assert_eq!(extract(0.0, ignoring), Extraction::Excluded(ExclusionReason::Zero));
        assert_eq!(extract(0.0, keeping), Extraction::Excluded(ExclusionReason::Zero));
        assert_eq!(extract(-0.0, keeping), Extraction::Excluded(ExclusionReason::Zero));
    }

    #[test]
    // Purpose
    // -------
    // Verify that NaN and both infinities classify as NonFinite rather
    // than yielding a digit or panicking.
    //
    // Given
    // -----
    // - NaN, +∞, and −∞ under the default policy.
    //
    // Expect
    // ------
    // - All three classify as `Excluded(NonFinite)`.
    fn extract_classifies_non_finite_values() {
        // Arrange
        let policy = FilterPolicy::default();

        // Act / Assert
        assert_eq!(extract(f64::NAN, policy), Extraction::Excluded(ExclusionReason::NonFinite));
        assert_eq!(
            extract(f64::INFINITY, policy),
            Extraction::Excluded(ExclusionReason::NonFinite)
        );
        assert_eq!(
            extract(f64::NEG_INFINITY, policy),
            Extraction::Excluded(ExclusionReason::NonFinite)
        );
    }

    #[test]
    // Purpose
    // -------
    // Check the range invariant over a sweep of magnitudes: every
    // extracted digit lies in [1, 9], never 0 and never above 9.
    //
    // Given
    // -----
    // - Mantissas 1..=9 scaled by powers of ten from 1e-12 to 1e12.
    //
    // Expect
    // ------
    // - Each value yields exactly its mantissa as the leading digit.
    fn extract_digit_always_within_one_to_nine() {
        // Arrange
        let policy = FilterPolicy::default();

        // Act / Assert
        for mantissa in 1..=9u32 {
            for exponent in -12..=12i32 {
                let value = f64::from(mantissa) * 10f64.powi(exponent);
                match extract(value, policy) {
                    Extraction::Digit(d) => {
                        assert!((1..=9).contains(&d.get()));
                        assert_eq!(
                            d.get(),
                            mantissa as u8,
                            "value {value} should lead with {mantissa}"
                        );
                    }
                    other => panic!("expected a digit for {value}, got {other:?}"),
                }
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that `LeadingDigit::new` enforces the [1, 9] invariant.
    //
    // Given
    // -----
    // - Raw digits 0, 1, 9, and 10.
    //
    // Expect
    // ------
    // - 0 and 10 are rejected; 1 and 9 are accepted with matching
    //   `get()`/`index()` values.
    fn leading_digit_new_enforces_bounds() {
        // Arrange / Act / Assert
        assert!(LeadingDigit::new(0).is_none());
        assert!(LeadingDigit::new(10).is_none());

        let one = LeadingDigit::new(1).unwrap();
        let nine = LeadingDigit::new(9).unwrap();
        assert_eq!(one.get(), 1);
        assert_eq!(one.index(), 0);
        assert_eq!(nine.get(), 9);
        assert_eq!(nine.index(), 8);
    }
}
