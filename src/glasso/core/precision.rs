//! Precision estimate containers and solver outcome.
//!
//! Purpose
//! -------
//! Hold the output of a graphical-lasso run: the sparse precision matrix
//! `Θ`, optionally its companion regularized covariance `W ≈ Θ⁻¹` for
//! diagnostics, and the normalized solver outcome (iterations, final delta,
//! convergence flag).
//!
//! Key behaviors
//! -------------
//! - [`PrecisionEstimate`] guards its invariants (square, symmetric within
//!   tolerance, finite, strictly positive diagonal) when built from raw data
//!   via [`PrecisionEstimate::from_row_major`]; solver-built values satisfy
//!   them by construction.
//! - Flat row-major interchange ([`to_row_major`] / [`from_row_major`]) for
//!   test fixtures and cross-language round trips; no file format is
//!   mandated.
//! - [`EstimateOutcome`] is the normalized result of one run, cached by
//!   [`GraphicalLassoModel`] after fitting.
//!
//! Invariants & assumptions
//! ------------------------
//! - `Θ` is square with `p ≥ 2`, finite, symmetric within
//!   [`DEFAULT_SYMMETRY_TOLERANCE`], and `Θ[k][k] > 0` for every `k`.
//! - `W` is present only on solver-built estimates; fixture-built estimates
//!   carry `None`.
//!
//! Conventions
//! -----------
//! - Row-major layout for the flat interchange arrays, `dim` alongside.
//! - Off-diagonal sparsity is counted with an explicit tolerance because the
//!   iterative inner solver can leave symmetrization noise around exact
//!   zeros.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the flat round trip, each `from_row_major` rejection
//!   path, and the sparsity counter.
//!
//! [`to_row_major`]: PrecisionEstimate::to_row_major
//! [`from_row_major`]: PrecisionEstimate::from_row_major
//! [`GraphicalLassoModel`]: crate::glasso::models::graphical_lasso::GraphicalLassoModel
//! [`DEFAULT_SYMMETRY_TOLERANCE`]: crate::glasso::core::covariance::DEFAULT_SYMMETRY_TOLERANCE
use crate::glasso::{
    core::{
        covariance::DEFAULT_SYMMETRY_TOLERANCE,
        validation::{
            validate_finite, validate_min_dimension, validate_positive_diagonal, validate_square,
            validate_symmetric,
        },
    },
    errors::{GlassoError, GlassoResult},
};
use ndarray::{Array2, ArrayView2};

/// `PrecisionEstimate` — symmetric sparse precision matrix `Θ` with an
/// optional regularized covariance companion.
///
/// Owned exclusively by the estimation run that produced it (or by the
/// caller that built it from fixture data); immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecisionEstimate {
    /// The precision matrix `Θ`.
    theta: Array2<f64>,
    /// Regularized covariance `W ≈ Θ⁻¹`; diagnostics only, absent on
    /// fixture-built estimates.
    covariance: Option<Array2<f64>>,
}

impl PrecisionEstimate {
    /// Assemble a solver-built estimate. The solver guarantees the type's
    /// invariants, so no re-validation happens here.
    pub(crate) fn from_solver(theta: Array2<f64>, covariance: Array2<f64>) -> Self {
        PrecisionEstimate { theta, covariance: Some(covariance) }
    }

    /// Rebuild an estimate from a flat row-major array plus its dimension.
    ///
    /// Intended for test fixtures and interchange; the input is fully
    /// re-validated since it did not come from the solver.
    ///
    /// # Errors
    /// - `GlassoError::NotSquare` when `data.len() != dim²`.
    /// - `GlassoError::DimensionTooSmall` when `dim < 2`.
    /// - `GlassoError::NonFiniteEntry`, `GlassoError::Asymmetric`, and
    ///   `GlassoError::NonPositiveDiagonal` per the shared validators.
    pub fn from_row_major(data: Vec<f64>, dim: usize) -> GlassoResult<Self> {
        let expected = dim * dim;
        if data.len() != expected {
            // Report the flat length against the implied square shape.
            return Err(GlassoError::NotSquare { nrows: dim, ncols: data.len() / dim.max(1) });
        }
        let theta = Array2::from_shape_vec((dim, dim), data)
            .expect("length was checked against dim * dim");
        validate_square(theta.view())?;
        validate_min_dimension(dim)?;
        validate_finite(theta.view())?;
        validate_positive_diagonal(theta.view())?;
        validate_symmetric(theta.view(), DEFAULT_SYMMETRY_TOLERANCE)?;
        Ok(PrecisionEstimate { theta, covariance: None })
    }

    /// Flatten `Θ` to a row-major array plus its dimension.
    pub fn to_row_major(&self) -> (Vec<f64>, usize) {
        (self.theta.iter().copied().collect(), self.dim())
    }

    /// Number of variables `p`.
    pub fn dim(&self) -> usize {
        self.theta.nrows()
    }

    /// Read-only view of `Θ`.
    pub fn theta(&self) -> ArrayView2<'_, f64> {
        self.theta.view()
    }

    /// Read-only view of the regularized covariance `W`, when present.
    pub fn regularized_covariance(&self) -> Option<ArrayView2<'_, f64>> {
        self.covariance.as_ref().map(|w| w.view())
    }

    /// Count off-diagonal entries with `|Θ[i][j]| > tolerance`, over the
    /// full matrix (each undirected pair counts twice).
    pub fn nonzero_offdiagonal_count(&self, tolerance: f64) -> usize {
        let p = self.dim();
        let mut count = 0;
        for row in 0..p {
            for col in 0..p {
                if row != col && self.theta[[row, col]].abs() > tolerance {
                    count += 1;
                }
            }
        }
        count
    }
}

/// `EstimateOutcome` — normalized result of one solver run.
///
/// - `precision`: the estimate (best-so-far when `converged` is `false`).
/// - `iterations`: outer passes performed.
/// - `delta`: mean absolute off-diagonal change of `W` on the last pass.
/// - `threshold`: the scaled stopping threshold the run compared against.
/// - `converged`: whether `delta` fell below `threshold` within the budget.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateOutcome {
    pub precision: PrecisionEstimate,
    pub iterations: usize,
    pub delta: f64,
    pub threshold: f64,
    pub converged: bool,
}
