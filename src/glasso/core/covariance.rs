//! Covariance input container for graphical-lasso estimation.
//!
//! Purpose
//! -------
//! Provide a small, validated container for the empirical covariance matrix
//! `S` consumed by the estimator. This module centralizes input validation so
//! downstream code (workspace, solver, precision recovery) can assume a
//! square, symmetric, finite matrix with a strictly positive diagonal.
//!
//! Key behaviors
//! -------------
//! - [`CovarianceMatrix`] enforces structural invariants at construction time
//!   (square, `p ≥ 2`, finite entries, strictly positive diagonal, symmetry
//!   within an absolute tolerance).
//! - The contained matrix is immutable after construction; the solver copies
//!   it into its own working matrix rather than mutating the input.
//!
//! Invariants & assumptions
//! ------------------------
//! - `S` is square with `p ≥ 2`.
//! - All entries are finite.
//! - `S[k][k] > 0` for every `k`.
//! - `|S[i][j] − S[j][i]| ≤ symmetry_tolerance` for every pair.
//! - Positive definiteness is **not** required: the penalty regularizes the
//!   working matrix, and the solver surfaces numerical failures explicitly
//!   when a block turns out to be effectively singular.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; variable `k` corresponds to row/column `k`.
//! - The default symmetry tolerance is [`DEFAULT_SYMMETRY_TOLERANCE`];
//!   callers with noisier inputs can pass their own via
//!   [`CovarianceMatrix::with_tolerance`].
//!
//! Downstream usage
//! ----------------
//! - Construct [`CovarianceMatrix`] at the boundary where raw matrices enter
//!   the estimation stack, then pass it to
//!   [`estimate_precision`](crate::glasso::core::solver::estimate_precision)
//!   or [`GraphicalLassoModel::fit`](crate::glasso::models::graphical_lasso::GraphicalLassoModel::fit).
//! - Consumers may rely on the documented invariants and skip re-validation.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path and every rejection path (non-square,
//!   too small, non-finite, asymmetric, non-positive diagonal), plus the
//!   custom-tolerance constructor.
use crate::glasso::{
    core::validation::{
        validate_finite, validate_min_dimension, validate_positive_diagonal, validate_square,
        validate_symmetric,
    },
    errors::GlassoResult,
};
use ndarray::{Array2, ArrayView2};

/// Default absolute tolerance for the symmetry check on covariance inputs.
pub const DEFAULT_SYMMETRY_TOLERANCE: f64 = 1e-8;

/// `CovarianceMatrix` — validated empirical covariance input `S`.
///
/// Purpose
/// -------
/// Represent a single, validated `p×p` empirical covariance matrix for
/// graphical-lasso estimation. The constructor is the only validation gate;
/// once built, the matrix is treated as immutable.
///
/// Key behaviors
/// -------------
/// - Stores the covariance as an `ndarray::Array2<f64>`.
/// - Enforces squareness, `p ≥ 2`, finiteness, strict diagonal positivity,
///   and symmetry within tolerance at construction time.
/// - Exposes read-only views for the solver ([`CovarianceMatrix::view`],
///   [`CovarianceMatrix::dim`]).
///
/// Invariants
/// ----------
/// - All invariants listed in the module docs hold for the lifetime of the
///   value.
///
/// Performance
/// -----------
/// - Validation is O(p²) in a single scan plus an upper-triangle symmetry
///   pass; after construction this type is a plain container.
///
/// Notes
/// -----
/// - Construction does **not** symmetrize the input; asymmetry beyond
///   tolerance is an error, and asymmetry within tolerance is preserved
///   as-is (the solver only ever reads one triangle per block anyway).
#[derive(Debug, Clone, PartialEq)]
pub struct CovarianceMatrix {
    /// The validated covariance entries.
    matrix: Array2<f64>,
}

impl CovarianceMatrix {
    /// Construct a validated [`CovarianceMatrix`] with the default symmetry
    /// tolerance.
    ///
    /// Parameters
    /// ----------
    /// - `matrix`: `Array2<f64>`
    ///   Raw covariance entries. Must be square with `p ≥ 2`, finite, have a
    ///   strictly positive diagonal, and be symmetric within
    ///   [`DEFAULT_SYMMETRY_TOLERANCE`].
    ///
    /// Returns
    /// -------
    /// `GlassoResult<CovarianceMatrix>`
    ///   - `Ok(CovarianceMatrix)` if all invariants are satisfied.
    ///   - `Err(GlassoError)` naming the first violated invariant otherwise.
    ///
    /// Errors
    /// ------
    /// - `GlassoError::NotSquare` when the input is rectangular.
    /// - `GlassoError::DimensionTooSmall` when `p < 2`.
    /// - `GlassoError::NonFiniteEntry` at the first NaN/±inf.
    /// - `GlassoError::NonPositiveDiagonal` at the first diagonal entry ≤ 0.
    /// - `GlassoError::Asymmetric` at the first pair violating the tolerance.
    ///
    /// Panics
    /// ------
    /// - Never panics; all invalid inputs are reported via `GlassoError`.
    pub fn new(matrix: Array2<f64>) -> GlassoResult<Self> {
        Self::with_tolerance(matrix, DEFAULT_SYMMETRY_TOLERANCE)
    }

    /// Construct a validated [`CovarianceMatrix`] with an explicit symmetry
    /// tolerance.
    ///
    /// Identical to [`CovarianceMatrix::new`] except that the caller chooses
    /// the absolute tolerance used for the symmetry check. Useful when the
    /// covariance was accumulated in a way that introduces more than the
    /// default amount of floating-point asymmetry.
    pub fn with_tolerance(matrix: Array2<f64>, symmetry_tolerance: f64) -> GlassoResult<Self> {
        validate_square(matrix.view())?;
        validate_min_dimension(matrix.nrows())?;
        validate_finite(matrix.view())?;
        validate_positive_diagonal(matrix.view())?;
        validate_symmetric(matrix.view(), symmetry_tolerance)?;
        Ok(CovarianceMatrix { matrix })
    }

    /// Number of variables `p`.
    pub fn dim(&self) -> usize {
        self.matrix.nrows()
    }

    /// Read-only view of the covariance entries.
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.matrix.view()
    }

    /// Mean absolute off-diagonal magnitude of `S`.
    ///
    /// Used by the solver to scale the outer convergence threshold so the
    /// stopping rule is invariant to the overall magnitude of the input.
    /// Returns `0.0` for a diagonal matrix.
    pub fn mean_abs_offdiagonal(&self) -> f64 {
        let p = self.dim();
        let mut total = 0.0;
        for row in 0..p {
            for col in 0..p {
                if row != col {
                    total += self.matrix[[row, col]].abs();
                }
            }
        }
        total / ((p * (p - 1)) as f64)
    }
}
