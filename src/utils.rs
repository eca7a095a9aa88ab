#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
use crate::{
    analysis::BenfordOptions,
    digits::{FilterPolicy, NonFiniteHandling},
    verdict::VerdictThresholds,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Assemble a validated [`BenfordOptions`] bundle from Python keyword
/// arguments, applying the engine defaults for anything omitted.
#[cfg(feature = "python-bindings")]
pub fn build_benford_options(
    ignore_zeros: Option<bool>, ignore_negatives: Option<bool>, fail_on_non_finite: Option<bool>,
    alpha: Option<f64>, mad_close: Option<f64>, mad_acceptable: Option<f64>,
    mad_critical: Option<f64>,
) -> PyResult<BenfordOptions> {
    let default_filter = FilterPolicy::default();
    let filter = FilterPolicy::new(
        ignore_zeros.unwrap_or(default_filter.ignore_zeros),
        ignore_negatives.unwrap_or(default_filter.ignore_negatives),
    );

    let non_finite = if fail_on_non_finite.unwrap_or(true) {
        NonFiniteHandling::Fail
    } else {
        NonFiniteHandling::Exclude
    };

    let defaults = VerdictThresholds::default();
    let thresholds = VerdictThresholds::new(
        alpha.unwrap_or(defaults.alpha),
        mad_close.unwrap_or(defaults.mad_close),
        mad_acceptable.unwrap_or(defaults.mad_acceptable),
        mad_critical.unwrap_or(defaults.mad_critical),
    )?;

    Ok(BenfordOptions::new(filter, non_finite, thresholds))
}
