//! Verdict synthesis — two-axis classification of (p-value, MAD).
//!
//! Purpose
//! -------
//! Map the pair (Chi-Square p-value, MAD) to a qualitative anomaly
//! conclusion under a [`VerdictThresholds`] configuration. The policy is
//! a single exhaustive match over (significant?, conformity band) so the
//! mapping stays auditable and testable on its own, without nested
//! conditionals.
//!
//! Key behaviors
//! -------------
//! - Two axes deliberately temper each other: large samples with
//!   statistically significant but practically tiny deviations are not
//!   over-flagged ([`Verdict::NegligibleDeviation`]), and non-significant
//!   results with a sizable practical deviation are not waved through
//!   silently ([`Verdict::AcceptableDeviation`]).
//! - First match wins, in the documented order; the match is exhaustive,
//!   so adding a band or verdict without updating the policy fails to
//!   compile.
//!
//! Invariants & assumptions
//! ------------------------
//! - The p-value lies in [0, 1] and MAD is ≥ 0; both are produced by the
//!   evaluator, which guarantees this.
//! - Thresholds have been validated by the pipeline entry point.
//!
//! Testing notes
//! -------------
//! - Unit tests enumerate all (significance, band) combinations and pin
//!   the resulting verdicts and labels.

use crate::verdict::thresholds::{ConformityBand, VerdictThresholds};

/// Verdict — qualitative conclusion of a Benford conformity analysis.
///
/// Purpose
/// -------
/// Name the anomaly conclusion derived solely from the (p-value, MAD)
/// pair. Ordered from benign to suspicious.
///
/// Variants
/// --------
/// - `Conforms`
///   Not significant and MAD in the close band: no anomaly.
/// - `AcceptableDeviation`
///   Not significant but MAD above the close band: acceptable, watch the
///   practical magnitude.
/// - `NegligibleDeviation`
///   Significant but MAD in the close band: typically a large-sample
///   artifact, low suspicion.
/// - `ModerateSuspicion`
///   Significant with MAD in the acceptable band: investigate with
///   context.
/// - `HighSuspicion`
///   Significant with MAD in the marginal or nonconforming band: flagged
///   for investigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No anomaly: statistically and practically conforming.
    Conforms,
    /// Non-significant, but practical deviation above the close band.
    AcceptableDeviation,
    /// Significant yet practically negligible (large-sample artifact).
    NegligibleDeviation,
    /// Significant with moderate practical deviation.
    ModerateSuspicion,
    /// Significant with large practical deviation; flagged.
    HighSuspicion,
}

impl Verdict {
    /// Stable label for presentation and FFI surfaces.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Conforms => "conforms to Benford's Law",
            Verdict::AcceptableDeviation => "acceptable with minor deviation",
            Verdict::NegligibleDeviation => "statistically significant but practically negligible",
            Verdict::ModerateSuspicion => "moderate suspicion of anomaly",
            Verdict::HighSuspicion => "high suspicion of anomaly",
        }
    }

    /// Whether the conclusion warrants follow-up investigation.
    pub fn flags_for_investigation(self) -> bool {
        matches!(self, Verdict::ModerateSuspicion | Verdict::HighSuspicion)
    }
}

/// Classify (p-value, MAD) into a verdict and its conformity band.
///
/// Parameters
/// ----------
/// - `p_value`: `f64`
///   Upper-tail Chi-Square probability from the evaluator, in [0, 1].
/// - `mad`: `f64`
///   Mean absolute deviation on the proportion scale, ≥ 0.
/// - `thresholds`: [`VerdictThresholds`]
///   Validated significance level and MAD cutpoints.
///
/// Returns
/// -------
/// `(Verdict, ConformityBand)`
///   The conclusion and the practical-magnitude band it was derived from.
///
/// Notes
/// -----
/// - The decision table, first match wins:
///   1. not significant ∧ Close → `Conforms`
///   2. not significant ∧ any other band → `AcceptableDeviation`
///   3. significant ∧ Close → `NegligibleDeviation`
///   4. significant ∧ Acceptable → `ModerateSuspicion`
///   5. significant ∧ Marginal or Nonconforming → `HighSuspicion`
pub fn synthesize(
    p_value: f64, mad: f64, thresholds: &VerdictThresholds,
) -> (Verdict, ConformityBand) {
    let significant = thresholds.is_significant(p_value);
    let band = thresholds.classify_mad(mad);

    let verdict = match (significant, band) {
        (false, ConformityBand::Close) => Verdict::Conforms,
        (false, _) => Verdict::AcceptableDeviation,
        (true, ConformityBand::Close) => Verdict::NegligibleDeviation,
        (true, ConformityBand::Acceptable) => Verdict::ModerateSuspicion,
        (true, ConformityBand::Marginal | ConformityBand::Nonconforming) => Verdict::HighSuspicion,
    };

    (verdict, band)
}
