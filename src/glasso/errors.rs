//! Errors for graphical-lasso estimation (covariance validation, penalty
//! checks, solver invariants, and convergence failures).
//!
//! This module defines the estimator error type, [`GlassoError`], and a
//! penalty error type, [`PenaltyError`], used across the public API and the
//! internal solver. Both implement `Display`/`Error` and, when the
//! `python-bindings` feature is enabled, convert to `PyErr`.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy).
//! - Covariance matrices must be square with `p ≥ 2`, finite entries, a
//!   strictly positive diagonal, and symmetry within tolerance.
//! - Penalties must be finite and non-negative, elementwise.
//! - Non-convergence is the only recoverable failure: the best-so-far
//!   estimate travels inside [`GlassoError::NotConverged`] so callers can
//!   accept it explicitly or retry with a larger budget.
use crate::glasso::core::precision::PrecisionEstimate;

#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

/// Crate-wide result alias for estimator operations that may produce
/// [`GlassoError`].
pub type GlassoResult<T> = Result<T, GlassoError>;

/// Result alias for penalty-construction/validation paths that may produce
/// [`PenaltyError`].
pub type PenaltyResult<T> = Result<T, PenaltyError>;

/// Unified error type for graphical-lasso estimation.
///
/// Covers covariance/input validation, option checks, penalty problems
/// surfaced at estimation time, solver numerical invariants, and
/// convergence failures. Implements `Display`/`Error` and converts to a
/// Python `ValueError` at PyO3 boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum GlassoError {
    // ---- Covariance validation ----
    /// Input matrix is not square.
    NotSquare { nrows: usize, ncols: usize },

    /// Covariance must have at least two variables.
    DimensionTooSmall { dim: usize },

    /// A matrix entry is NaN/±inf.
    NonFiniteEntry { row: usize, col: usize, value: f64 },

    /// Symmetry violated beyond tolerance.
    Asymmetric { row: usize, col: usize, delta: f64, tolerance: f64 },

    /// Covariance diagonal entries must be strictly positive.
    NonPositiveDiagonal { index: usize, value: f64 },

    // ---- Options validation ----
    /// Convergence tolerance needs to be positive and finite.
    InvalidConvergenceTolerance { tol: f64, reason: &'static str },

    /// Maximum outer iterations needs to be positive.
    InvalidMaxOuterIter { max_iter: usize, reason: &'static str },

    /// Maximum inner (lasso) iterations needs to be positive.
    InvalidMaxInnerIter { max_iter: usize, reason: &'static str },

    // ---- Penalty (surfaced at estimation time) ----
    /// A penalty entry is negative.
    NegativePenalty { row: usize, col: usize, value: f64 },

    /// A penalty entry is NaN/±inf.
    NonFinitePenalty { row: usize, col: usize, value: f64 },

    /// Matrix penalty shape does not match the covariance.
    PenaltyShapeMismatch { expected: usize, found: (usize, usize) },

    /// Matrix penalty symmetry violated beyond tolerance.
    AsymmetricPenalty { row: usize, col: usize, delta: f64 },

    // ---- Solver numerical invariants ----
    /// A block gram diagonal entry is non-positive; the lasso update for
    /// that coordinate is undefined.
    SingularBlock { coordinate: usize, value: f64 },

    /// The lasso sub-solver produced a non-finite coefficient.
    NonFiniteBlockSolution { coordinate: usize, value: f64 },

    /// A working-matrix entry became non-finite during a block update.
    NonFiniteWorkingMatrix { row: usize, col: usize, value: f64 },

    /// The Schur complement for a block was non-positive during precision
    /// recovery; the implied Θ diagonal would not be strictly positive.
    NonPositiveSchurComplement { block: usize, value: f64 },

    // ---- Convergence ----
    /// Outer loop exhausted its iteration budget. Recoverable: `partial`
    /// holds the best estimate found so far.
    NotConverged {
        iterations: usize,
        delta: f64,
        tolerance: f64,
        partial: Box<PrecisionEstimate>,
    },

    // ---- Model state ----
    /// Model hasn't been fitted yet.
    ModelNotFitted,
}

impl std::error::Error for GlassoError {}

impl std::fmt::Display for GlassoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Covariance validation ----
            GlassoError::NotSquare { nrows, ncols } => {
                write!(f, "Matrix must be square; got {nrows} rows and {ncols} columns")
            }
            GlassoError::DimensionTooSmall { dim } => {
                write!(f, "Covariance must cover at least 2 variables; got p = {dim}")
            }
            GlassoError::NonFiniteEntry { row, col, value } => {
                write!(f, "Matrix entry at ({row}, {col}) is non-finite: {value}")
            }
            GlassoError::Asymmetric { row, col, delta, tolerance } => {
                write!(
                    f,
                    "Matrix is not symmetric at ({row}, {col}): |a_ij - a_ji| = {delta} exceeds tolerance {tolerance}"
                )
            }
            GlassoError::NonPositiveDiagonal { index, value } => {
                write!(f, "Covariance diagonal at index {index} must be > 0; got {value}")
            }

            // ---- Options validation ----
            GlassoError::InvalidConvergenceTolerance { tol, reason } => {
                write!(f, "Invalid convergence tolerance {tol}: {reason}")
            }
            GlassoError::InvalidMaxOuterIter { max_iter, reason } => {
                write!(f, "Invalid maximum outer iterations {max_iter}: {reason}")
            }
            GlassoError::InvalidMaxInnerIter { max_iter, reason } => {
                write!(f, "Invalid maximum inner iterations {max_iter}: {reason}")
            }

            // ---- Penalty ----
            GlassoError::NegativePenalty { row, col, value } => {
                write!(f, "Penalty entry at ({row}, {col}) must be non-negative; got {value}")
            }
            GlassoError::NonFinitePenalty { row, col, value } => {
                write!(f, "Penalty entry at ({row}, {col}) is non-finite: {value}")
            }
            GlassoError::PenaltyShapeMismatch { expected, found } => {
                write!(
                    f,
                    "Matrix penalty shape mismatch: expected ({expected}, {expected}), found {found:?}"
                )
            }
            GlassoError::AsymmetricPenalty { row, col, delta } => {
                write!(
                    f,
                    "Matrix penalty is not symmetric at ({row}, {col}): |r_ij - r_ji| = {delta}"
                )
            }

            // ---- Solver numerical invariants ----
            GlassoError::SingularBlock { coordinate, value } => {
                write!(
                    f,
                    "Block gram diagonal at coordinate {coordinate} must be > 0; got {value} (near-singular block)"
                )
            }
            GlassoError::NonFiniteBlockSolution { coordinate, value } => {
                write!(f, "Lasso coefficient at coordinate {coordinate} is non-finite: {value}")
            }
            GlassoError::NonFiniteWorkingMatrix { row, col, value } => {
                write!(f, "Working matrix entry at ({row}, {col}) became non-finite: {value}")
            }
            GlassoError::NonPositiveSchurComplement { block, value } => {
                write!(
                    f,
                    "Schur complement for block {block} must be > 0 to recover the precision diagonal; got {value}"
                )
            }

            // ---- Convergence ----
            GlassoError::NotConverged { iterations, delta, tolerance, .. } => {
                write!(
                    f,
                    "Outer loop did not converge after {iterations} passes: last delta {delta} above tolerance {tolerance} (partial estimate attached)"
                )
            }

            // ---- Model state ----
            GlassoError::ModelNotFitted => {
                write!(f, "Model hasn't been fitted yet.")
            }
        }
    }
}

/// Convert a [`GlassoError`] into a Python `ValueError` with the error message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl std::convert::From<GlassoError> for PyErr {
    fn from(err: GlassoError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Errors specific to penalty construction and validation.
///
/// Typical causes include negative or non-finite entries and, for
/// matrix-valued penalties, non-square or asymmetric inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum PenaltyError {
    /// A penalty entry is negative.
    NegativeEntry { row: usize, col: usize, value: f64 },

    /// A penalty entry is NaN/±inf.
    NonFiniteEntry { row: usize, col: usize, value: f64 },

    /// Matrix penalty must be square.
    NotSquare { nrows: usize, ncols: usize },

    /// Matrix penalty symmetry violated beyond tolerance.
    Asymmetric { row: usize, col: usize, delta: f64 },

    /// Matrix penalty shape does not match the covariance dimension.
    ShapeMismatch { expected: usize, found: (usize, usize) },
}

impl std::error::Error for PenaltyError {}

impl std::fmt::Display for PenaltyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PenaltyError::NegativeEntry { row, col, value } => {
                write!(f, "Penalty entry at ({row}, {col}) must be non-negative; got {value}")
            }
            PenaltyError::NonFiniteEntry { row, col, value } => {
                write!(f, "Penalty entry at ({row}, {col}) is non-finite: {value}")
            }
            PenaltyError::NotSquare { nrows, ncols } => {
                write!(f, "Matrix penalty must be square; got {nrows} rows and {ncols} columns")
            }
            PenaltyError::Asymmetric { row, col, delta } => {
                write!(
                    f,
                    "Matrix penalty is not symmetric at ({row}, {col}): |r_ij - r_ji| = {delta}"
                )
            }
            PenaltyError::ShapeMismatch { expected, found } => {
                write!(
                    f,
                    "Matrix penalty shape mismatch: expected ({expected}, {expected}), found {found:?}"
                )
            }
        }
    }
}

/// Convert a [`PenaltyError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl std::convert::From<PenaltyError> for PyErr {
    fn from(err: PenaltyError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

impl From<PenaltyError> for GlassoError {
    fn from(err: PenaltyError) -> GlassoError {
        match err {
            PenaltyError::NegativeEntry { row, col, value } => {
                GlassoError::NegativePenalty { row, col, value }
            }
            PenaltyError::NonFiniteEntry { row, col, value } => {
                GlassoError::NonFinitePenalty { row, col, value }
            }
            PenaltyError::NotSquare { nrows, ncols } => {
                GlassoError::PenaltyShapeMismatch { expected: nrows.max(ncols), found: (nrows, ncols) }
            }
            PenaltyError::Asymmetric { row, col, delta } => {
                GlassoError::AsymmetricPenalty { row, col, delta }
            }
            PenaltyError::ShapeMismatch { expected, found } => {
                GlassoError::PenaltyShapeMismatch { expected, found }
            }
        }
    }
}
