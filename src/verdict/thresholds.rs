//! Verdict thresholds — tunable cutpoints for the anomaly classification.
//!
//! Purpose
//! -------
//! Provide a small, validated container for the decision thresholds the
//! verdict synthesizer works with: the Chi-Square significance level α
//! and the three MAD cutpoints separating the published conformity bands.
//! The cutpoints are configuration, not hardcoded mathematics; hosts may
//! override any of them per run.
//!
//! Key behaviors
//! -------------
//! - Construct [`VerdictThresholds`] values enforcing 0 < α < 1 and
//!   strictly ascending, strictly positive, finite MAD cutpoints.
//! - Reject invalid configurations via typed errors instead of panicking
//!   at call sites; entry points re-validate via [`VerdictThresholds::validate`]
//!   since the fields are public.
//! - Classify a MAD value into a [`ConformityBand`] against the cutpoints.
//!
//! Invariants & assumptions
//! ------------------------
//! - `0 < mad_close < mad_acceptable < mad_critical`, all finite.
//! - MAD cutpoints are on the proportion scale (0.006 = 0.6 percentage
//!   points), matching how the engine computes MAD.
//!
//! Conventions
//! -----------
//! - Defaults follow the published nonconformity guidance: MAD below
//!   0.006 is close conformity, 0.006–0.012 acceptable, 0.012–0.015
//!   marginal, above 0.015 nonconforming; α defaults to 0.05.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the default values, every validation branch, and
//!   band classification at and around each cutpoint.

use crate::errors::{BenfordError, BenfordResult};

/// Default Chi-Square significance level.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Default upper bound of the close-conformity MAD band.
pub const DEFAULT_MAD_CLOSE: f64 = 0.006;

/// Default upper bound of the acceptable-conformity MAD band.
pub const DEFAULT_MAD_ACCEPTABLE: f64 = 0.012;

/// Default upper bound of the marginal-conformity MAD band.
pub const DEFAULT_MAD_CRITICAL: f64 = 0.015;

/// ConformityBand — the published MAD nonconformity bands.
///
/// Purpose
/// -------
/// Name the practical-magnitude band a MAD value falls into, independent
/// of statistical significance. Exposed alongside the verdict so hosts
/// can render the conformity table the guidance literature uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConformityBand {
    /// MAD below the close cutpoint: close conformity.
    Close,
    /// MAD in [close, acceptable): acceptable conformity.
    Acceptable,
    /// MAD in [acceptable, critical): marginal conformity.
    Marginal,
    /// MAD at or above the critical cutpoint: nonconformity.
    Nonconforming,
}

impl ConformityBand {
    /// Stable label for presentation and FFI surfaces.
    pub fn label(self) -> &'static str {
        match self {
            ConformityBand::Close => "close conformity",
            ConformityBand::Acceptable => "acceptable conformity",
            ConformityBand::Marginal => "marginal conformity",
            ConformityBand::Nonconforming => "nonconformity",
        }
    }
}

/// VerdictThresholds — α and MAD cutpoints for verdict synthesis.
///
/// Purpose
/// -------
/// Represent the validated decision thresholds for one analysis run:
/// the significance level applied to the Chi-Square p-value and the
/// ascending MAD cutpoints bounding the conformity bands.
///
/// Parameters
/// ----------
/// Constructed via [`VerdictThresholds::new`] or [`Default`]:
/// - `alpha`: `f64` — significance level, `0 < alpha < 1`.
/// - `mad_close`, `mad_acceptable`, `mad_critical`: `f64` — strictly
///   positive, finite, strictly ascending cutpoints on the proportion
///   scale.
///
/// Fields
/// ------
/// - `alpha`: `f64`
///   p-values below this are statistically significant deviations.
/// - `mad_close`: `f64`
///   Upper bound of the close-conformity band.
/// - `mad_acceptable`: `f64`
///   Upper bound of the acceptable-conformity band.
/// - `mad_critical`: `f64`
///   Upper bound of the marginal band; at or above is nonconformity.
///
/// Invariants
/// ----------
/// - `0 < alpha < 1`.
/// - `0 < mad_close < mad_acceptable < mad_critical`, all finite.
///
/// Performance
/// -----------
/// - Four scalars; `Copy` and cheap to pass by value.
///
/// Notes
/// -----
/// - Fields are public for ergonomic literal construction; pipeline entry
///   points re-check the invariants via [`VerdictThresholds::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerdictThresholds {
    /// Significance level for the Chi-Square p-value.
    pub alpha: f64,
    /// Upper bound of the close-conformity MAD band.
    pub mad_close: f64,
    /// Upper bound of the acceptable-conformity MAD band.
    pub mad_acceptable: f64,
    /// Upper bound of the marginal-conformity MAD band.
    pub mad_critical: f64,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        VerdictThresholds {
            alpha: DEFAULT_ALPHA,
            mad_close: DEFAULT_MAD_CLOSE,
            mad_acceptable: DEFAULT_MAD_ACCEPTABLE,
            mad_critical: DEFAULT_MAD_CRITICAL,
        }
    }
}

impl VerdictThresholds {
    /// Construct validated thresholds.
    ///
    /// Parameters
    /// ----------
    /// - `alpha`: `f64`
    ///   Significance level; must satisfy `0 < alpha < 1`.
    /// - `mad_close`, `mad_acceptable`, `mad_critical`: `f64`
    ///   MAD cutpoints; must be finite, strictly positive, and strictly
    ///   ascending.
    ///
    /// Returns
    /// -------
    /// `BenfordResult<VerdictThresholds>`
    ///   - `Ok` when all invariants hold.
    ///   - `Err(BenfordError::InvalidAlpha)` or
    ///     `Err(BenfordError::InvalidMadCutpoints)` otherwise.
    ///
    /// Errors
    /// ------
    /// - `BenfordError::InvalidAlpha`
    ///   Returned when `alpha` is non-finite or outside (0, 1).
    /// - `BenfordError::InvalidMadCutpoints`
    ///   Returned when a cutpoint is non-finite, non-positive, or the
    ///   triple is not strictly ascending; the reason names the violated
    ///   constraint.
    ///
    /// Panics
    /// ------
    /// - Never panics; all invalid inputs are reported via errors.
    pub fn new(
        alpha: f64, mad_close: f64, mad_acceptable: f64, mad_critical: f64,
    ) -> BenfordResult<Self> {
        let thresholds = VerdictThresholds { alpha, mad_close, mad_acceptable, mad_critical };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Re-check the threshold invariants (fields are public).
    ///
    /// Returns
    /// -------
    /// `BenfordResult<()>`
    ///   `Ok(())` when the invariants hold; the same errors as
    ///   [`VerdictThresholds::new`] otherwise.
    pub fn validate(&self) -> BenfordResult<()> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(BenfordError::InvalidAlpha { value: self.alpha });
        }

        let cutpoints = [self.mad_close, self.mad_acceptable, self.mad_critical];
        if cutpoints.iter().any(|c| !c.is_finite()) {
            return Err(self.cutpoint_error("cutpoints must be finite"));
        }
        if self.mad_close <= 0.0 {
            return Err(self.cutpoint_error("cutpoints must be strictly positive"));
        }
        if self.mad_close >= self.mad_acceptable || self.mad_acceptable >= self.mad_critical {
            return Err(self.cutpoint_error("cutpoints must be strictly ascending"));
        }

        Ok(())
    }

    /// Band the MAD value falls into under these cutpoints.
    pub fn classify_mad(&self, mad: f64) -> ConformityBand {
        if mad < self.mad_close {
            ConformityBand::Close
        } else if mad < self.mad_acceptable {
            ConformityBand::Acceptable
        } else if mad < self.mad_critical {
            ConformityBand::Marginal
        } else {
            ConformityBand::Nonconforming
        }
    }

    /// Whether the p-value marks a statistically significant deviation.
    pub fn is_significant(&self, p_value: f64) -> bool {
        p_value < self.alpha
    }

    fn cutpoint_error(&self, reason: &'static str) -> BenfordError {
        BenfordError::InvalidMadCutpoints {
            close: self.mad_close,
            acceptable: self.mad_acceptable,
            critical: self.mad_critical,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Default threshold values against the published guidance bands.
    // - Every validation branch: alpha range, finiteness, positivity,
    //   ascending order.
    // - Band classification at and around each cutpoint.
    //
    // They intentionally DO NOT cover:
    // - Verdict synthesis from (p-value, band); that lives in
    //   `verdict::policy`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Pin the default thresholds to α = 0.05 and the published MAD bands
    // 0.006 / 0.012 / 0.015.
    //
    // Given
    // -----
    // - `VerdictThresholds::default()`.
    //
    // Expect
    // ------
    // - Field values match the documented defaults and validate cleanly.
    fn thresholds_default_matches_published_bands() {
        // Arrange / Act
        let thresholds = VerdictThresholds::default();

        // Assert
        assert_eq!(thresholds.alpha, 0.05);
        assert_eq!(thresholds.mad_close, 0.006);
        assert_eq!(thresholds.mad_acceptable, 0.012);
        assert_eq!(thresholds.mad_critical, 0.015);
        assert!(thresholds.validate().is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Verify that alpha outside (0, 1) is rejected with InvalidAlpha.
    //
    // Given
    // -----
    // - alpha values 0.0, 1.0, and NaN with otherwise-default cutpoints.
    //
    // Expect
    // ------
    // - Each returns `Err(BenfordError::InvalidAlpha)`.
    fn thresholds_new_rejects_out_of_range_alpha() {
        // Arrange
        let d = VerdictThresholds::default();

        // Act / Assert
        for alpha in [0.0, 1.0, f64::NAN] {
            match VerdictThresholds::new(alpha, d.mad_close, d.mad_acceptable, d.mad_critical) {
                Err(BenfordError::InvalidAlpha { .. }) => (),
                other => panic!("expected InvalidAlpha for alpha = {alpha}, got {other:?}"),
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that non-ascending, non-positive, or non-finite cutpoints
    // are rejected with InvalidMadCutpoints and a naming reason.
    //
    // Given
    // -----
    // - Cutpoint triples violating each constraint in turn.
    //
    // Expect
    // ------
    // - Each returns `Err(BenfordError::InvalidMadCutpoints)` whose reason
    //   names the violated constraint.
    fn thresholds_new_rejects_malformed_cutpoints() {
        // Arrange
        let cases: [((f64, f64, f64), &str); 3] = [
            ((0.015, 0.012, 0.006), "ascending"),
            ((0.0, 0.012, 0.015), "positive"),
            ((f64::INFINITY, 0.012, 0.015), "finite"),
        ];

        // Act / Assert
        for ((close, acceptable, critical), expected_reason) in cases {
            match VerdictThresholds::new(0.05, close, acceptable, critical) {
                Err(BenfordError::InvalidMadCutpoints { reason, .. }) => {
                    assert!(
                        reason.contains(expected_reason),
                        "reason {reason:?} should mention {expected_reason:?}"
                    );
                }
                other => panic!(
                    "expected InvalidMadCutpoints for ({close}, {acceptable}, {critical}), \
                     got {other:?}"
                ),
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify band classification at and around each cutpoint: bands are
    // half-open on the right, so a MAD exactly at a cutpoint falls into
    // the higher band.
    //
    // Given
    // -----
    // - Default thresholds and MAD values straddling each cutpoint.
    //
    // Expect
    // ------
    // - 0.0 and 0.0059 → Close; 0.006 and 0.0119 → Acceptable;
    //   0.012 and 0.0149 → Marginal; 0.015 and 0.05 → Nonconforming.
    fn thresholds_classify_mad_bands_are_half_open() {
        // Arrange
        let thresholds = VerdictThresholds::default();

        // Act / Assert
        assert_eq!(thresholds.classify_mad(0.0), ConformityBand::Close);
        assert_eq!(thresholds.classify_mad(0.0059), ConformityBand::Close);
        assert_eq!(thresholds.classify_mad(0.006), ConformityBand::Acceptable);
        assert_eq!(thresholds.classify_mad(0.0119), ConformityBand::Acceptable);
        assert_eq!(thresholds.classify_mad(0.012), ConformityBand::Marginal);
        assert_eq!(thresholds.classify_mad(0.0149), ConformityBand::Marginal);
        assert_eq!(thresholds.classify_mad(0.015), ConformityBand::Nonconforming);
        assert_eq!(thresholds.classify_mad(0.05), ConformityBand::Nonconforming);
    }
}
