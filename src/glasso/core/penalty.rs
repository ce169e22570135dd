//! ℓ₁ penalty specification for graphical-lasso estimation.
//!
//! Purpose
//! -------
//! Represent the sparsity penalty `ρ` in both of its admissible forms: a
//! single scalar applied uniformly to every matrix entry, or a full `p×p`
//! matrix of per-pair penalties for non-uniform regularization. Validation
//! happens once at construction; the solver then reads penalties through
//! uniform accessors without caring which form was supplied.
//!
//! Key behaviors
//! -------------
//! - [`Penalty::scalar`] validates a single non-negative, finite value.
//! - [`Penalty::matrix`] validates a square, symmetric, elementwise
//!   non-negative and finite penalty matrix.
//! - [`Penalty::value_at`] / [`Penalty::diagonal`] give the solver an
//!   entry-level view regardless of form.
//! - [`Penalty::check_dim`] defers the shape-vs-covariance check to
//!   estimation time, when the covariance dimension is known.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every penalty entry is finite and `≥ 0`.
//! - A matrix penalty is square and symmetric within
//!   [`PENALTY_SYMMETRY_TOLERANCE`].
//! - `ρ = 0` is legal everywhere and degenerates the estimator to the
//!   unpenalized inverse (when that inverse exists numerically).
//!
//! Conventions
//! -----------
//! - `value_at(i, j)` is the penalty applied to `Θ[i][j]`; for the scalar
//!   form this is the same value for every pair.
//! - `diagonal(k)` is the amount added to `W[k][k]` under diagonal
//!   augmentation.
//!
//! Testing notes
//! -------------
//! - Unit tests cover both constructors' accept/reject paths, the accessor
//!   equivalence between forms, and `check_dim` mismatch reporting.
use crate::glasso::errors::{PenaltyError, PenaltyResult};
use ndarray::Array2;

/// Absolute tolerance for the symmetry check on matrix penalties.
pub const PENALTY_SYMMETRY_TOLERANCE: f64 = 1e-8;

/// `Penalty` — scalar-or-matrix ℓ₁ penalty `ρ`.
///
/// Purpose
/// -------
/// Carry the penalty in whichever form the caller supplied, after one-time
/// validation. The two forms share the same accessor surface so the solver
/// is polymorphic over them without generics.
///
/// Invariants
/// ----------
/// - `Scalar(v)`: `v` is finite and `≥ 0`.
/// - `Matrix(m)`: `m` is square, symmetric within tolerance, and every entry
///   is finite and `≥ 0`.
///
/// Notes
/// -----
/// - Constructed via [`Penalty::scalar`] or [`Penalty::matrix`]; the enum
///   variants themselves are not exposed for direct construction so the
///   invariants cannot be bypassed.
#[derive(Debug, Clone, PartialEq)]
pub enum Penalty {
    /// Uniform penalty applied to every entry.
    Scalar(f64),
    /// Per-pair penalties; entry (i, j) penalizes `Θ[i][j]`.
    Matrix(Array2<f64>),
}

impl Penalty {
    /// Construct a validated uniform penalty.
    ///
    /// Parameters
    /// ----------
    /// - `value`: `f64`
    ///   The penalty applied to every entry. Must be finite and `≥ 0`.
    ///
    /// Errors
    /// ------
    /// - `PenaltyError::NonFiniteEntry` for NaN/±inf (reported at (0, 0)).
    /// - `PenaltyError::NegativeEntry` for negative values (reported at (0, 0)).
    pub fn scalar(value: f64) -> PenaltyResult<Self> {
        if !value.is_finite() {
            return Err(PenaltyError::NonFiniteEntry { row: 0, col: 0, value });
        }
        if value < 0.0 {
            return Err(PenaltyError::NegativeEntry { row: 0, col: 0, value });
        }
        Ok(Penalty::Scalar(value))
    }

    /// Construct a validated matrix penalty.
    ///
    /// Parameters
    /// ----------
    /// - `matrix`: `Array2<f64>`
    ///   Per-pair penalties. Must be square, symmetric within
    ///   [`PENALTY_SYMMETRY_TOLERANCE`], and elementwise finite and `≥ 0`.
    ///
    /// Errors
    /// ------
    /// - `PenaltyError::NotSquare` for rectangular input.
    /// - `PenaltyError::NonFiniteEntry` at the first NaN/±inf.
    /// - `PenaltyError::NegativeEntry` at the first negative entry.
    /// - `PenaltyError::Asymmetric` at the first pair beyond tolerance.
    ///
    /// Notes
    /// -----
    /// - The shape is checked against the covariance dimension later, via
    ///   [`Penalty::check_dim`], because the target dimension is unknown
    ///   here.
    pub fn matrix(matrix: Array2<f64>) -> PenaltyResult<Self> {
        let (nrows, ncols) = matrix.dim();
        if nrows != ncols {
            return Err(PenaltyError::NotSquare { nrows, ncols });
        }
        for ((row, col), &value) in matrix.indexed_iter() {
            if !value.is_finite() {
                return Err(PenaltyError::NonFiniteEntry { row, col, value });
            }
            if value < 0.0 {
                return Err(PenaltyError::NegativeEntry { row, col, value });
            }
        }
        for row in 0..nrows {
            for col in (row + 1)..ncols {
                let delta = (matrix[[row, col]] - matrix[[col, row]]).abs();
                if delta > PENALTY_SYMMETRY_TOLERANCE {
                    return Err(PenaltyError::Asymmetric { row, col, delta });
                }
            }
        }
        Ok(Penalty::Matrix(matrix))
    }

    /// Check the penalty shape against the covariance dimension `p`.
    ///
    /// A scalar penalty matches any dimension; a matrix penalty must be
    /// exactly `p×p`.
    pub fn check_dim(&self, dim: usize) -> PenaltyResult<()> {
        match self {
            Penalty::Scalar(_) => Ok(()),
            Penalty::Matrix(m) => {
                if m.dim() != (dim, dim) {
                    return Err(PenaltyError::ShapeMismatch { expected: dim, found: m.dim() });
                }
                Ok(())
            }
        }
    }

    /// Penalty applied to entry (i, j).
    #[inline]
    pub fn value_at(&self, row: usize, col: usize) -> f64 {
        match self {
            Penalty::Scalar(value) => *value,
            Penalty::Matrix(m) => m[[row, col]],
        }
    }

    /// Penalty added to `W[k][k]` under diagonal augmentation.
    #[inline]
    pub fn diagonal(&self, index: usize) -> f64 {
        self.value_at(index, index)
    }

    /// Largest penalty over all entries. Useful for diagnostics and for
    /// reasoning about the fully-sparse regime in tests.
    pub fn max_value(&self) -> f64 {
        match self {
            Penalty::Scalar(value) => *value,
            Penalty::Matrix(m) => m.iter().fold(0.0_f64, |acc, &v| acc.max(v)),
        }
    }
}
