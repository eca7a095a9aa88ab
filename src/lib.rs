//! benford_analytics — Benford's Law conformity analysis with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the Benford analysis engine to Python via the
//! `_benford_analytics` extension module. When the `python-bindings`
//! feature is enabled, this module defines the Python-facing classes and
//! submodules used by the `benford_analytics` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`digits`, `distribution`,
//!   `analysis`, `verdict`, `errors`) as the public crate surface.
//! - Define the [`BenfordAnalysis`] `#[pyclass]` wrapper and the
//!   `#[pymodule]` initializer for the `_benford_analytics` Python
//!   extension.
//! - Create and register the `analysis` Python submodule under
//!   `benford_analytics` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this
//!   file performs only FFI glue, input coercion, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible class mirrors
//!   the invariants and signature of its Rust counterpart
//!   ([`BenfordOutcome`](analysis::BenfordOutcome)).
//! - On successful conversion from Python objects to Rust types, the
//!   invariants documented in the core modules are assumed to hold.
//!
//! Conventions
//! -----------
//! - The Python-exposed class lives under `_benford_analytics.analysis`
//!   and is typically wrapped by a thin pure-Python facade in the
//!   top-level `benford_analytics` package (the hosting application:
//!   file upload, column selection, charts, PDF reports).
//! - Errors from core Rust code are propagated as
//!   [`BenfordError`](errors::BenfordError) values internally and
//!   converted to `ValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the inner modules and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature:
//!
//!   ```rust
//!   use benford_analytics::analysis::{BenfordOptions, BenfordOutcome};
//!
//!   let column = vec![132.0, 17.5, 1042.0, 23.9, 3.1, 450.0, 26.0];
//!   let outcome = BenfordOutcome::analyze(&column, &BenfordOptions::default())?;
//!   for row in outcome.digit_table() {
//!       println!("{}: {:>6.2}% vs {:>6.2}%", row.digit, row.observed_pct, row.expected_pct);
//!   }
//!   # Ok::<(), benford_analytics::errors::BenfordError>(())
//!   ```
//!
//! - The Python packaging layer imports the `_benford_analytics` module
//!   defined here and wraps its class in user-facing Python APIs.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner
//!   modules and by the `tests/` integration suite.
//! - Smoke tests for the PyO3 bindings verify that the class can be
//!   constructed and its getters read correctly from Python.

pub mod analysis;
pub mod digits;
pub mod distribution;
pub mod errors;
pub mod utils;
pub mod verdict;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    analysis::BenfordOutcome,
    distribution::expected_percentages,
    utils::{build_benford_options, extract_f64_array},
};

/// BenfordAnalysis — Python-facing wrapper for one analysis run.
///
/// Purpose
/// -------
/// Represent the result of a Benford conformity analysis when called from
/// Python and forward all computation to
/// [`BenfordOutcome`](analysis::BenfordOutcome).
///
/// Key behaviors
/// -------------
/// - Validate and convert Python inputs (numpy array, pandas Series, or
///   float sequence) into a contiguous `f64` slice.
/// - Run the pipeline via [`BenfordOutcome::analyze`] and store the
///   outcome internally.
/// - Expose scalar accessors (`n`, `chi_square`, `p_value`, `mad`, `sad`,
///   `verdict`, …) and table accessors (`counts`, `observed_pct`,
///   `expected_pct`) as Python properties.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `BenfordAnalysis(data, ignore_zeros=True, ignore_negatives=False,
/// fail_on_non_finite=True, alpha=0.05, mad_close=0.006,
/// mad_acceptable=0.012, mad_critical=0.015)`:
/// - `data`: one-dimensional array-like of `f64` values.
/// - `ignore_zeros`, `ignore_negatives`: value filters applied before
///   digit extraction.
/// - `fail_on_non_finite`: raise on the first NaN/±∞ (default) or drop
///   and tally such values.
/// - `alpha`, `mad_close`, `mad_acceptable`, `mad_critical`: verdict
///   thresholds; validated on construction.
///
/// Fields
/// ------
/// - `inner`: [`BenfordOutcome`](analysis::BenfordOutcome)
///   Rust-side container holding the full analysis result used by the
///   accessors.
///
/// Invariants
/// ----------
/// - `inner` satisfies all invariants documented on
///   [`BenfordOutcome`](analysis::BenfordOutcome).
///
/// Notes
/// -----
/// - This type is primarily intended to be used from Python; native Rust
///   code should prefer calling [`BenfordOutcome::analyze`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "benford_analytics.analysis")]
pub struct BenfordAnalysis {
    /// The full analysis result.
    inner: BenfordOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl BenfordAnalysis {
    /// Run a Benford first-digit conformity analysis over a numeric column.
    ///
    /// The observed leading-digit distribution is compared against the
    /// theoretical Benford table with a χ²(8) goodness-of-fit test and
    /// the MAD/SAD practical deviation metrics; the verdict combines the
    /// statistical and practical axes.
    #[new]
    #[pyo3(
        text_signature = "(data, /, ignore_zeros=True, ignore_negatives=False, \
                          fail_on_non_finite=True, alpha=0.05, mad_close=0.006, \
                          mad_acceptable=0.012, mad_critical=0.015)",
        signature = (
            raw_data,
            ignore_zeros = None,
            ignore_negatives = None,
            fail_on_non_finite = None,
            alpha = None,
            mad_close = None,
            mad_acceptable = None,
            mad_critical = None,
        )
    )]
    pub fn analyze<'py>(
        py: Python<'py>, raw_data: &Bound<'py, PyAny>, ignore_zeros: Option<bool>,
        ignore_negatives: Option<bool>, fail_on_non_finite: Option<bool>, alpha: Option<f64>,
        mad_close: Option<f64>, mad_acceptable: Option<f64>, mad_critical: Option<f64>,
    ) -> PyResult<BenfordAnalysis> {
        let options = build_benford_options(
            ignore_zeros,
            ignore_negatives,
            fail_on_non_finite,
            alpha,
            mad_close,
            mad_acceptable,
            mad_critical,
        )?;

        let arr = extract_f64_array(py, raw_data)?;
        let data: &[f64] = arr.as_slice().map_err(|_| {
            PyValueError::new_err("data must be a 1-D contiguous float64 array or sequence")
        })?;

        let outcome = BenfordOutcome::analyze(data, &options)?;
        Ok(BenfordAnalysis { inner: outcome })
    }

    /// Number of values that yielded a defined leading digit.
    #[getter]
    pub fn n(&self) -> usize {
        self.inner.sample_size()
    }

    /// Observed counts per digit 1..=9.
    #[getter]
    pub fn counts(&self) -> Vec<u64> {
        self.inner.observed().counts().to_vec()
    }

    /// Observed percentages per digit 1..=9.
    #[getter]
    pub fn observed_pct(&self) -> Vec<f64> {
        self.inner.observed().percentages().to_vec()
    }

    /// Expected Benford percentages per digit 1..=9.
    #[getter]
    pub fn expected_pct(&self) -> Vec<f64> {
        expected_percentages().to_vec()
    }

    /// The Pearson Chi-Square goodness-of-fit statistic.
    #[getter]
    pub fn chi_square(&self) -> f64 {
        self.inner.chi_square()
    }

    /// Upper-tail χ²(8) p-value of the statistic.
    #[getter]
    pub fn p_value(&self) -> f64 {
        self.inner.p_value()
    }

    /// Degrees of freedom of the test (always 8).
    #[getter]
    pub fn degrees_of_freedom(&self) -> usize {
        self.inner.metrics().degrees_of_freedom()
    }

    /// Mean absolute deviation of proportions.
    #[getter]
    pub fn mad(&self) -> f64 {
        self.inner.mad()
    }

    /// Sum of absolute deviations of proportions (9 × MAD).
    #[getter]
    pub fn sad(&self) -> f64 {
        self.inner.sad()
    }

    /// Qualitative anomaly conclusion label.
    #[getter]
    pub fn verdict(&self) -> &'static str {
        self.inner.verdict().label()
    }

    /// MAD conformity band label.
    #[getter]
    pub fn conformity_band(&self) -> &'static str {
        self.inner.band().label()
    }

    /// Whether the conclusion warrants follow-up investigation.
    #[getter]
    pub fn flags_for_investigation(&self) -> bool {
        self.inner.verdict().flags_for_investigation()
    }

    /// Count of values excluded as zero.
    #[getter]
    pub fn excluded_zeros(&self) -> usize {
        self.inner.exclusions().zeros
    }

    /// Count of values excluded by the negative filter.
    #[getter]
    pub fn excluded_negatives(&self) -> usize {
        self.inner.exclusions().negatives
    }

    /// Count of non-finite values dropped (exclude mode only).
    #[getter]
    pub fn excluded_non_finite(&self) -> usize {
        self.inner.exclusions().non_finite
    }

    /// Digits whose expected count is below the χ² reliability level.
    #[getter]
    pub fn low_expected_digits(&self) -> Vec<u8> {
        self.inner.metrics().low_expected_digits().to_vec()
    }

    /// Whether the χ² approximation is trustworthy for this sample.
    #[getter]
    pub fn chi_square_reliable(&self) -> bool {
        self.inner.chi_square_reliable()
    }

    /// Whether N meets the recommended minimum sample for the analysis.
    #[getter]
    pub fn sample_adequate(&self) -> bool {
        self.inner.sample_adequate()
    }
}

/// _benford_analytics — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_benford_analytics` Python module and register the
/// `analysis` submodule used by the public `benford_analytics` package.
///
/// Key behaviors
/// -------------
/// - Create the `analysis` submodule and attach it to the parent module.
/// - Register the submodule in `sys.modules` so it is importable via the
///   dotted path `benford_analytics.analysis`.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _benford_analytics<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let analysis_mod = PyModule::new(_py, "analysis")?;
    analysis(_py, m, &analysis_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("benford_analytics.analysis", analysis_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn analysis<'py>(
    _py: Python, benford_analytics: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<BenfordAnalysis>()?;
    benford_analytics.add_submodule(m)?;
    Ok(())
}
