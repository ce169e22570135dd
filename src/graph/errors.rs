//! Errors for partial-correlation graph construction (label validation,
//! precision-input checks, and edge-tolerance options).
//!
//! This module defines [`GraphError`], used by the graph-builder surface.
//! It implements `Display`/`Error` and, when the `python-bindings` feature
//! is enabled, converts to `PyErr`.
//!
//! ## Conventions
//! - **Indices are 0-based** and refer to positions in the caller's label
//!   sequence / precision matrix.
//! - Upstream shape guarantees from the estimator are re-checked here only
//!   where the graph contract depends on them (diagonal positivity); label
//!   checks are the builder's own.
#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

/// Crate-wide result alias for graph operations that may produce
/// [`GraphError`].
pub type GraphResult<T> = Result<T, GraphError>;

/// Unified error type for partial-correlation graph construction.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    // ---- Label validation ----
    /// Number of labels does not match the precision dimension.
    LabelCountMismatch { expected: usize, actual: usize },

    /// A label occurs more than once.
    DuplicateLabel { index: usize, label: String },

    // ---- Precision input ----
    /// Precision diagonal entries must be strictly positive.
    NonPositiveDiagonal { index: usize, value: f64 },

    /// A precision entry is NaN/±inf.
    NonFiniteEntry { row: usize, col: usize, value: f64 },

    // ---- Options ----
    /// Edge tolerance needs to be non-negative and finite.
    InvalidEdgeTolerance { value: f64, reason: &'static str },
}

impl std::error::Error for GraphError {}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Label validation ----
            GraphError::LabelCountMismatch { expected, actual } => {
                write!(f, "Label count mismatch: expected {expected}, got {actual}")
            }
            GraphError::DuplicateLabel { index, label } => {
                write!(f, "Duplicate label at index {index}: {label:?}")
            }
            // ---- Precision input ----
            GraphError::NonPositiveDiagonal { index, value } => {
                write!(f, "Precision diagonal at index {index} must be > 0; got {value}")
            }
            GraphError::NonFiniteEntry { row, col, value } => {
                write!(f, "Precision entry at ({row}, {col}) is non-finite: {value}")
            }
            // ---- Options ----
            GraphError::InvalidEdgeTolerance { value, reason } => {
                write!(f, "Invalid edge tolerance {value}: {reason}")
            }
        }
    }
}

/// Convert a [`GraphError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl std::convert::From<GraphError> for PyErr {
    fn from(err: GraphError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
