//! rust_glasso — high-performance sparse Gaussian graphical model
//! estimation with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the graphical-lasso estimator and the partial-correlation graph
//! builder to Python via the `_rust_glasso` extension module. When the
//! `python-bindings` feature is enabled, this module defines the
//! Python-facing classes and submodules used by the `rust_glasso` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`glasso` and `graph`) as the public
//!   crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_rust_glasso` Python extension.
//! - Create and register Python submodules (`glasso`, `graph`) under
//!   `rust_glasso` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner Rust modules; this
//!   file performs only FFI glue, input validation, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible types mirror the
//!   invariants and signatures of their Rust counterparts (e.g.
//!   [`GraphicalLassoModel`], [`VariableGraph`]).
//! - On successful conversion from Python objects to Rust types, the
//!   invariants documented in the core modules are assumed to hold.
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_rust_glasso.<submodule>` and are
//!   typically wrapped by thin pure-Python facades in the top-level
//!   `rust_glasso` package.
//! - Matrices cross the boundary as 2-D float64 arrays in, and row-major
//!   `list[list[float]]` out, matching NumPy conventions.
//! - Errors from core Rust code are propagated as rich error types
//!   internally and converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should usually depend directly on the inner modules
//!   and can ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_rust_glasso` module defined
//!   here and wraps its classes in user-facing Python APIs.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by the integration suite under `tests/`.
//! - Smoke tests for the PyO3 bindings verify that classes can be
//!   constructed, called, and round-tripped correctly from Python.

pub mod glasso;
pub mod graph;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    glasso::{
        errors::GlassoError,
        models::graphical_lasso::GraphicalLassoModel,
    },
    graph::{
        builder::{build_variable_graph_with_options, GraphOptions, VariableGraph},
        partial_corr::partial_correlations,
    },
    utils::{build_glasso_options, extract_covariance, extract_penalty},
};

#[cfg(feature = "python-bindings")]
use ndarray::ArrayView2;

/// Convert a matrix view into row-major nested vectors for Python.
#[cfg(feature = "python-bindings")]
fn matrix_to_rows(matrix: ArrayView2<'_, f64>) -> Vec<Vec<f64>> {
    let (nrows, _ncols) = matrix.dim();
    let mut out = Vec::with_capacity(nrows);
    for i in 0..nrows {
        out.push(matrix.row(i).to_vec());
    }
    out
}

/// GraphicalLasso — Python-facing wrapper for the graphical-lasso estimator.
///
/// Purpose
/// -------
/// Expose the [`GraphicalLassoModel`] API to Python callers while preserving
/// the core Rust invariants and error handling.
///
/// Key behaviors
/// -------------
/// - Build a [`GraphicalLassoModel`] from Python-friendly keyword options.
/// - Provide a `fit` method that converts a 2-D covariance array and a
///   scalar-or-matrix penalty into validated Rust types and delegates to the
///   core implementation.
/// - Cache the estimation outcome for inspection from Python via property
///   getters (`precision`, `regularized_covariance`, `iterations`,
///   `converged`, `delta`).
/// - Derive the partial-correlation matrix and the variable graph from the
///   cached estimate.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `GraphicalLasso(convergence_tolerance=1e-4, max_outer_iter=100,
/// max_inner_iter=1000, diagonal_augmentation=True)`:
/// - `convergence_tolerance`: `Option<f64>`
///   Positive relative tolerance on the per-pass change of the working
///   matrix.
/// - `max_outer_iter` / `max_inner_iter`: `Option<usize>`
///   Positive pass/sweep budgets for the outer loop and the per-block lasso.
/// - `diagonal_augmentation`: `Option<bool>`
///   Whether to initialize the working matrix as `S + diag(ρ)`.
///
/// Fields
/// ------
/// - `inner`: [`GraphicalLassoModel`]
///   Fully configured model that owns the cached results.
///
/// Invariants
/// ----------
/// - `inner` is always a well-formed model created through
///   [`build_glasso_options`]; invalid options never construct an instance.
///
/// Performance
/// -----------
/// - All heavy numerical work occurs inside `inner`; this wrapper performs
///   only input conversion, dispatch, and error mapping.
///
/// Notes
/// -----
/// - Native Rust callers should usually work with [`GraphicalLassoModel`]
///   directly; this type exists solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_glasso.glasso")]
pub struct GraphicalLasso {
    /// Underlying Rust GraphicalLassoModel.
    pub inner: GraphicalLassoModel,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl GraphicalLasso {
    #[new]
    #[pyo3(
        signature = (
            convergence_tolerance = None,
            max_outer_iter = None,
            max_inner_iter = None,
            diagonal_augmentation = None,
        ),
        text_signature = "(convergence_tolerance=1e-4, max_outer_iter=100, \
                          max_inner_iter=1000, diagonal_augmentation=True)"
    )]
    #[allow(clippy::self_named_constructors)]
    pub fn graphical_lasso(
        convergence_tolerance: Option<f64>, max_outer_iter: Option<usize>,
        max_inner_iter: Option<usize>, diagonal_augmentation: Option<bool>,
    ) -> PyResult<Self> {
        let options = build_glasso_options(
            convergence_tolerance,
            max_outer_iter,
            max_inner_iter,
            diagonal_augmentation,
        )?;
        Ok(GraphicalLasso { inner: GraphicalLassoModel::new(options) })
    }

    #[pyo3(
        signature = (covariance, penalty),
        text_signature = "(self, covariance, penalty, /)"
    )]
    pub fn fit<'py>(
        &mut self, py: Python<'py>, covariance: &Bound<'py, PyAny>, penalty: &Bound<'py, PyAny>,
    ) -> PyResult<()> {
        let cov = extract_covariance(py, covariance)?;
        let pen = extract_penalty(py, penalty)?;
        self.inner.fit(&cov, &pen).map_err(PyErr::from)?;
        Ok(())
    }

    #[getter]
    pub fn precision(&self) -> PyResult<Vec<Vec<f64>>> {
        let estimate = self.inner.precision().map_err(PyErr::from)?;
        Ok(matrix_to_rows(estimate.theta()))
    }

    #[getter]
    pub fn regularized_covariance(&self) -> PyResult<Vec<Vec<f64>>> {
        let estimate = self.inner.precision().map_err(PyErr::from)?;
        match estimate.regularized_covariance() {
            Some(w) => Ok(matrix_to_rows(w)),
            None => Err(GlassoError::ModelNotFitted.into()),
        }
    }

    #[getter]
    pub fn iterations(&self) -> PyResult<usize> {
        Ok(self.inner.outcome().map_err(PyErr::from)?.iterations)
    }

    #[getter]
    pub fn converged(&self) -> PyResult<bool> {
        Ok(self.inner.outcome().map_err(PyErr::from)?.converged)
    }

    #[getter]
    pub fn delta(&self) -> PyResult<f64> {
        Ok(self.inner.outcome().map_err(PyErr::from)?.delta)
    }

    pub fn partial_correlations(&self) -> PyResult<Vec<Vec<f64>>> {
        let estimate = self.inner.precision().map_err(PyErr::from)?;
        let pcorr = partial_correlations(estimate).map_err(PyErr::from)?;
        Ok(matrix_to_rows(pcorr.view()))
    }

    #[pyo3(
        signature = (labels, edge_tolerance = None),
        text_signature = "(self, labels, /, edge_tolerance=1e-10)"
    )]
    pub fn build_graph(
        &self, labels: Vec<String>, edge_tolerance: Option<f64>,
    ) -> PyResult<PartialCorrelationGraph> {
        let estimate = self.inner.precision().map_err(PyErr::from)?;
        let options = match edge_tolerance {
            Some(tol) => GraphOptions::new(tol).map_err(PyErr::from)?,
            None => GraphOptions::default(),
        };
        let graph = build_variable_graph_with_options(estimate, &labels, &options)
            .map_err(PyErr::from)?;
        Ok(PartialCorrelationGraph { inner: graph })
    }
}

/// PartialCorrelationGraph — Python-facing wrapper for [`VariableGraph`].
///
/// Instances are produced by `GraphicalLasso.build_graph` and expose the
/// immutable node/edge structure as plain Python data: labels, `(a, b,
/// weight)` edge tuples, and label-based lookups.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_glasso.graph")]
pub struct PartialCorrelationGraph {
    /// Underlying Rust VariableGraph.
    pub inner: VariableGraph,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PartialCorrelationGraph {
    #[getter]
    pub fn nodes(&self) -> Vec<String> {
        self.inner.labels().to_vec()
    }

    #[getter]
    pub fn edges(&self) -> Vec<(String, String, f64)> {
        let labels = self.inner.labels();
        self.inner
            .edges()
            .iter()
            .map(|e| (labels[e.source].clone(), labels[e.target].clone(), e.weight))
            .collect()
    }

    #[getter]
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    #[getter]
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.inner.has_edge(a, b)
    }

    pub fn weight(&self, a: &str, b: &str) -> Option<f64> {
        self.inner.weight(a, b)
    }

    pub fn neighbors(&self, label: &str) -> Option<Vec<String>> {
        self.inner
            .neighbors(label)
            .map(|names| names.into_iter().map(|s| s.to_string()).collect())
    }
}

/// _rust_glasso — PyO3 module initializer for the Python extension.
///
/// Defines the `_rust_glasso` Python module, registers the `glasso` and
/// `graph` submodules, and inserts them into `sys.modules` so they are
/// importable via dotted paths from Python. Invoked automatically by Python
/// when importing the compiled extension; not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_glasso<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let glasso_mod = PyModule::new(_py, "glasso")?;
    let graph_mod = PyModule::new(_py, "graph")?;
    glasso_submodule(_py, m, &glasso_mod)?;
    graph_submodule(_py, m, &graph_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_glasso.glasso", glasso_mod)?;

    _py.import("sys")?.getattr("modules")?.set_item("rust_glasso.graph", graph_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn glasso_submodule<'py>(
    _py: Python, rust_glasso: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<GraphicalLasso>()?;
    rust_glasso.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn graph_submodule<'py>(
    _py: Python, rust_glasso: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PartialCorrelationGraph>()?;
    rust_glasso.add_submodule(m)?;
    Ok(())
}
