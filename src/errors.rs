//! errors — engine-wide error types and Python bridges.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by every stage of the
//! Benford analysis pipeline (digit extraction, distribution building,
//! metric evaluation, verdict configuration), together with a conversion
//! layer to Python exceptions for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`BenfordResult`] and [`BenfordError`] as the canonical result
//!   and error types for the analysis engine.
//! - Attach human-readable `Display` messages to each variant so that
//!   diagnostics are meaningful without additional context; every variant
//!   carries the offending value, index, or count it refers to.
//! - Implement `From<BenfordError> for PyErr` to map engine errors into
//!   `PyValueError` values visible to Python callers.
//!
//! Invariants & assumptions
//! ------------------------
//! - Pipeline stages validate their inputs and return [`BenfordResult<T>`]
//!   instead of panicking; panics indicate programming errors.
//! - `BenfordError` values are small, cheap to clone, and suitable for use
//!   in both unit tests and higher-level orchestration code.
//! - No error is silently swallowed: exclusion of values under a filter
//!   policy is accounting, not error recovery, and is reported separately
//!   on the analysis result.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints (e.g.
//!   "0 < alpha < 1", "cannot analyze an empty or fully-filtered dataset")
//!   rather than low-level details.
//! - All variants convert to `PyValueError` at the Python boundary with the
//!   Rust `Display` message preserved verbatim.
//!
//! Downstream usage
//! ----------------
//! - Engine entry points ([`crate::analysis::BenfordOutcome::analyze`],
//!   [`crate::distribution::ObservedDistribution::from_sequence`]) return
//!   [`BenfordResult<T>`] and propagate failures with `?`.
//! - Hosts may match on variants to distinguish recoverable data-quality
//!   failures (`NonFiniteValue`, `InsufficientData`) from configuration
//!   bugs (`DegenerateExpected`, invalid thresholds), which are fatal to
//!   the run.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload (offending value, index, or count).

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type BenfordResult<T> = Result<T, BenfordError>;

/// BenfordError — error conditions for the Benford analysis engine.
///
/// Purpose
/// -------
/// Represent all validation and computation failures that can occur while
/// turning a raw numeric sequence into a Benford conformity result:
/// malformed input values, empty samples, and degenerate or malformed
/// configuration.
///
/// Variants
/// --------
/// - `NonFiniteValue { index, value }`
///   An input element is NaN or ±∞ and non-finite handling is set to fail
///   fast. Carries the element's position and the offending value.
/// - `InsufficientData { total, excluded }`
///   No element yielded a defined leading digit (empty input or everything
///   filtered out), so N = 0 and the analysis cannot proceed.
/// - `DegenerateExpected { digit, expected }`
///   The expected count for a digit is not strictly positive, making the
///   Chi-Square statistic undefined. Cannot occur with the fixed Benford
///   table; indicates a configuration bug.
/// - `InvalidAlpha { value }`
///   The significance level violates `0 < alpha < 1`.
/// - `InvalidMadCutpoints { close, acceptable, critical, reason }`
///   The MAD conformity cutpoints are non-finite, non-positive, or not
///   strictly ascending.
///
/// Invariants
/// ----------
/// - Each variant carries just enough information (offending value, index,
///   or counts) for the host to render an actionable message.
/// - `NonFiniteValue` is only emitted under
///   [`NonFiniteHandling::Fail`](crate::digits::NonFiniteHandling); under
///   `Exclude` the value is dropped and tallied instead.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] for
///   idiomatic `?`-based propagation.
/// - A blanket [`From<BenfordError> for PyErr`] implementation maps all
///   cases to `PyValueError` at the Python boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum BenfordError {
    //------ Input/data validation ------
    /// A data element is NaN/±∞ under fail-fast non-finite handling.
    NonFiniteValue { index: usize, value: f64 },

    /// Zero valid leading digits after filtering; analysis cannot proceed.
    InsufficientData { total: usize, excluded: usize },

    //------ Expected-distribution configuration ------
    /// Expected count for a digit is ≤ 0; Chi-Square is undefined.
    DegenerateExpected { digit: u8, expected: f64 },

    //------ Verdict-threshold configuration ------
    /// Significance level outside (0, 1).
    InvalidAlpha { value: f64 },

    /// MAD cutpoints non-finite, non-positive, or not strictly ascending.
    InvalidMadCutpoints { close: f64, acceptable: f64, critical: f64, reason: &'static str },
}

impl std::error::Error for BenfordError {}

impl std::fmt::Display for BenfordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BenfordError::NonFiniteValue { index, value } => {
                write!(
                    f,
                    "Non-finite value {value} at index {index}. Leading-digit analysis \
                     requires finite input."
                )
            }
            BenfordError::InsufficientData { total, excluded } => {
                write!(
                    f,
                    "Cannot analyze an empty or fully-filtered dataset: {excluded} of \
                     {total} values were excluded and no valid leading digits remain."
                )
            }
            BenfordError::DegenerateExpected { digit, expected } => {
                write!(
                    f,
                    "Expected count for digit {digit} is {expected}; the Chi-Square \
                     statistic is undefined. The expected-distribution configuration \
                     is malformed."
                )
            }
            BenfordError::InvalidAlpha { value } => {
                write!(f, "Invalid significance level: {value}. Must satisfy 0 < alpha < 1.")
            }
            BenfordError::InvalidMadCutpoints { close, acceptable, critical, reason } => {
                write!(
                    f,
                    "Invalid MAD cutpoints (close = {close}, acceptable = {acceptable}, \
                     critical = {critical}): {reason}"
                )
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<BenfordError> for PyErr {
    fn from(err: BenfordError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` formatting for BenfordError variants.
    // - Embedding of payload values (offending value, index, counts,
    //   cutpoints) into error messages.
    //
    // They intentionally DO NOT cover:
    // - The `From<BenfordError> for PyErr` conversion, since exercising it
    //   requires linking against the Python C API and is better handled by
    //   Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `BenfordError::NonFiniteValue` reports both the index and
    // the offending value in its `Display` representation.
    //
    // Given
    // -----
    // - A `NonFiniteValue` with index = 7 and value = NaN.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "7" and "NaN".
    fn benford_error_non_finite_value_includes_index_and_value() {
        // Arrange
        let err = BenfordError::NonFiniteValue { index: 7, value: f64::NAN };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('7'), "Display message should include the index.\nGot: {msg}");
        assert!(msg.contains("NaN"), "Display message should include the value.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `BenfordError::InsufficientData` reports the total and
    // excluded counts so hosts can render an actionable message.
    //
    // Given
    // -----
    // - An `InsufficientData` with total = 12 and excluded = 12.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "12".
    fn benford_error_insufficient_data_includes_counts() {
        // Arrange
        let err = BenfordError::InsufficientData { total: 12, excluded: 12 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("12"), "Display message should include the counts.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `BenfordError::DegenerateExpected` names the digit whose
    // expected count is degenerate.
    //
    // Given
    // -----
    // - A `DegenerateExpected` with digit = 9 and expected = 0.0.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "9" and "0".
    fn benford_error_degenerate_expected_includes_digit() {
        // Arrange
        let err = BenfordError::DegenerateExpected { digit: 9, expected: 0.0 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('9'), "Display message should include the digit.\nGot: {msg}");
        assert!(msg.contains('0'), "Display message should include the count.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `BenfordError::InvalidMadCutpoints` embeds both the
    // cutpoints and the human-readable reason.
    //
    // Given
    // -----
    // - Cutpoints (0.015, 0.012, 0.006) with reason "cutpoints must be
    //   strictly ascending".
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "0.015" and the reason text.
    fn benford_error_invalid_mad_cutpoints_includes_payload_and_reason() {
        // Arrange
        let err = BenfordError::InvalidMadCutpoints {
            close: 0.015,
            acceptable: 0.012,
            critical: 0.006,
            reason: "cutpoints must be strictly ascending",
        };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("0.015"), "Display message should include cutpoints.\nGot: {msg}");
        assert!(
            msg.contains("strictly ascending"),
            "Display message should include the reason.\nGot: {msg}"
        );
    }
}
