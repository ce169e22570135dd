#[cfg(feature = "python-bindings")]
use ndarray::Array2;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::glasso::{
    core::{
        covariance::CovarianceMatrix,
        options::{GlassoOptions, Tolerances},
        penalty::Penalty,
    },
    errors::GlassoError,
};

#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray2;

#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix<'py>(
    _py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<Array2<f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return Ok(arr_ro.as_array().to_owned());
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(frame_ro) = obj.extract::<PyReadonlyArray2<f64>>() {
            return Ok(frame_ro.as_array().to_owned());
        }
    }

    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 2-D numpy.ndarray, pandas.DataFrame, or nested sequence of float64",
        )
    })?;
    let nrows = rows.len();
    let ncols = rows.first().map(|row| row.len()).unwrap_or(0);
    if rows.iter().any(|row| row.len() != ncols) {
        return Err(PyValueError::new_err("nested sequence rows must all have the same length"));
    }
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((nrows, ncols), flat)
        .map_err(|err| PyValueError::new_err(err.to_string()))
}

#[cfg(feature = "python-bindings")]
pub fn extract_covariance<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<CovarianceMatrix> {
    let matrix = extract_f64_matrix(py, raw_data)?;
    CovarianceMatrix::new(matrix).map_err(PyErr::from)
}

#[cfg(feature = "python-bindings")]
pub fn extract_penalty<'py>(py: Python<'py>, raw_penalty: &Bound<'py, PyAny>) -> PyResult<Penalty> {
    if let Ok(value) = raw_penalty.extract::<f64>() {
        return Penalty::scalar(value).map_err(PyErr::from);
    }
    let matrix = extract_f64_matrix(py, raw_penalty)?;
    Penalty::matrix(matrix).map_err(PyErr::from)
}

#[cfg(feature = "python-bindings")]
pub fn build_glasso_options(
    convergence_tolerance: Option<f64>, max_outer_iter: Option<usize>,
    max_inner_iter: Option<usize>, diagonal_augmentation: Option<bool>,
) -> PyResult<GlassoOptions> {
    let defaults = Tolerances::default();

    // Tolerances::new -> GlassoResult<Tolerances> -> PyErr
    let tols = Tolerances::new(
        convergence_tolerance.unwrap_or(defaults.convergence_tolerance),
        max_outer_iter.unwrap_or(defaults.max_outer_iter),
        max_inner_iter.unwrap_or(defaults.max_inner_iter),
    )
    .map_err(|err: GlassoError| PyErr::from(err))?;

    Ok(GlassoOptions::new(tols, diagonal_augmentation.unwrap_or(true)))
}
