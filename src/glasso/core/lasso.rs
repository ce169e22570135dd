//! Coordinate-descent lasso sub-solver for a single block.
//!
//! Solves the per-block subproblem of the graphical lasso,
//!
//! `min_β ½ βᵀ V β − βᵀ s + Σ_j ρ_j |β_j|`
//!
//! where `V = W₁₁` is the current (p−1)×(p−1) working submatrix, `s = s₁₂`
//! is the covariance column for the active block, and `ρ_j` are the
//! per-coordinate penalties.
//!
//! ## Update rule
//! For each coordinate `j`, with the partial residual
//! `r_j = s_j − Σ_{l≠j} V[j,l]·β_l`, the exact coordinate minimizer is
//!
//! `β_j ← S(r_j, ρ_j) / V[j,j]`
//!
//! with the soft-threshold operator `S(x, t) = sign(x)·max(|x|−t, 0)`.
//! Coordinates are swept in order until the maximum absolute change over a
//! sweep falls below the tolerance or the sweep budget is exhausted.
//!
//! ## What this module does
//! - Implements the sweep loop as a **pure function** over borrowed views,
//!   writing the solution into a caller-owned `β` buffer (warm starts come
//!   for free: whatever the buffer holds is the starting point).
//! - Reports the sweep count and final change in a [`LassoOutcome`] so the
//!   solver and tests can observe convergence behavior.
//! - Surfaces numerical failures (`V[j,j] ≤ 0`, non-finite coefficients) as
//!   explicit errors rather than letting NaNs propagate.
//!
//! ## Invariants (enforced upstream)
//! - `V` is square with `V.nrows() == s.len() == penalties.len() == β.len()`.
//! - All inputs are finite; penalties are non-negative.
use crate::glasso::errors::{GlassoError, GlassoResult};
use ndarray::{Array1, ArrayView1, ArrayView2};

/// Soft-threshold operator `S(x, t) = sign(x)·max(|x|−t, 0)`.
///
/// The shrinkage step of every lasso-type update: values within `[−t, t]`
/// collapse to exactly `0.0`, larger magnitudes shrink toward zero by `t`.
#[inline]
pub fn soft_threshold(x: f64, threshold: f64) -> f64 {
    if x > threshold {
        x - threshold
    } else if x < -threshold {
        x + threshold
    } else {
        0.0
    }
}

/// Outcome of one block solve: sweeps performed, final sweep change, and
/// whether the tolerance was met within the budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LassoOutcome {
    pub iterations: usize,
    pub delta: f64,
    pub converged: bool,
}

/// Run coordinate descent on one block, writing the solution into `beta`.
///
/// # Behavior
/// - Starts from the current contents of `beta` (warm start).
/// - Sweeps all coordinates in index order; each sweep updates every
///   coordinate once via the soft-threshold rule.
/// - Stops when the maximum absolute coordinate change over a sweep is
///   `< tolerance`, or after `max_iter` sweeps (reported via
///   `LassoOutcome::converged`; hitting the cap is not an error).
///
/// # Inputs
/// - `gram`: symmetric positive block matrix `V` (borrowed view).
/// - `target`: right-hand side `s` (borrowed view).
/// - `penalties`: per-coordinate ℓ₁ penalties `ρ_j` (borrowed view).
/// - `beta`: solution buffer, updated in place.
/// - `tolerance`: absolute sweep-change threshold (> 0).
/// - `max_iter`: sweep budget (> 0).
///
/// # Returns
/// - [`LassoOutcome`] with the sweep count, last sweep change, and
///   convergence flag.
///
/// # Errors
/// - [`GlassoError::SingularBlock`] if some `V[j,j] ≤ 0`.
/// - [`GlassoError::NonFiniteBlockSolution`] if an update produces a
///   non-finite coefficient.
pub fn lasso_coordinate_descent(
    gram: ArrayView2<'_, f64>, target: ArrayView1<'_, f64>, penalties: ArrayView1<'_, f64>,
    beta: &mut Array1<f64>, tolerance: f64, max_iter: usize,
) -> GlassoResult<LassoOutcome> {
    let dim = beta.len();
    debug_assert_eq!(gram.nrows(), dim);
    debug_assert_eq!(target.len(), dim);
    debug_assert_eq!(penalties.len(), dim);

    let mut delta = f64::INFINITY;
    let mut iterations = 0;
    while iterations < max_iter {
        delta = 0.0;
        for j in 0..dim {
            let diag = gram[[j, j]];
            if diag <= 0.0 {
                return Err(GlassoError::SingularBlock { coordinate: j, value: diag });
            }
            // r_j = s_j − Σ_{l≠j} V[j,l]·β_l, via a full dot minus the own term.
            let residual = target[j] - (gram.row(j).dot(beta) - diag * beta[j]);
            let updated = soft_threshold(residual, penalties[j]) / diag;
            if !updated.is_finite() {
                return Err(GlassoError::NonFiniteBlockSolution { coordinate: j, value: updated });
            }
            let change = (updated - beta[j]).abs();
            if change > delta {
                delta = change;
            }
            beta[j] = updated;
        }
        iterations += 1;
        if delta < tolerance {
            return Ok(LassoOutcome { iterations, delta, converged: true });
        }
    }
    Ok(LassoOutcome { iterations, delta, converged: false })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{array, Array1};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The soft-threshold operator's three regimes, including exact zeros.
    // - Agreement of the single-variable solve with the closed-form lasso
    //   solution β = S(s, ρ) / v.
    // - Exact solution of an unpenalized 2×2 system.
    // - Warm starts, budget exhaustion, and the singular-block error path.
    //
    // They intentionally DO NOT cover:
    // - Block extraction and the outer loop (solver module tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify all three regimes of the soft-threshold operator.
    //
    // Given
    // -----
    // - Inputs above, below, and inside the threshold band.
    //
    // Expect
    // ------
    // - Shrink-down, shrink-up, and an exact 0.0 inside the band.
    fn soft_threshold_covers_all_regimes() {
        assert_relative_eq!(soft_threshold(2.0, 0.5), 1.5);
        assert_relative_eq!(soft_threshold(-2.0, 0.5), -1.5);
        assert_eq!(soft_threshold(0.3, 0.5), 0.0);
        assert_eq!(soft_threshold(-0.3, 0.5), 0.0);
        assert_eq!(soft_threshold(0.5, 0.5), 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a single-variable solve matches the closed-form lasso
    // solution β = S(s, ρ) / v in one sweep.
    //
    // Given
    // -----
    // - v = 2.0, s = 1.5, ρ = 0.5, zero-initialized β.
    //
    // Expect
    // ------
    // - β = (1.5 − 0.5) / 2.0 = 0.5, converged on the second sweep.
    fn single_variable_solve_matches_closed_form() {
        // Arrange
        let gram = array![[2.0]];
        let target = array![1.5];
        let penalties = array![0.5];
        let mut beta = Array1::<f64>::zeros(1);

        // Act
        let outcome = lasso_coordinate_descent(
            gram.view(),
            target.view(),
            penalties.view(),
            &mut beta,
            1e-12,
            100,
        )
        .expect("single-variable solve should succeed");

        // Assert
        assert!(outcome.converged);
        assert_relative_eq!(beta[0], 0.5, max_relative = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a penalty at or above |s| drives the single coefficient
    // to exactly zero.
    //
    // Given
    // -----
    // - v = 1.0, s = 0.4, ρ = 0.4.
    //
    // Expect
    // ------
    // - β == 0.0 exactly (not merely small).
    fn dominating_penalty_produces_exact_zero() {
        let gram = array![[1.0]];
        let target = array![0.4];
        let penalties = array![0.4];
        let mut beta = Array1::<f64>::zeros(1);
        let outcome = lasso_coordinate_descent(
            gram.view(),
            target.view(),
            penalties.view(),
            &mut beta,
            1e-12,
            100,
        )
        .unwrap();
        assert!(outcome.converged);
        assert_eq!(beta[0], 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify that the unpenalized sweep loop solves a 2×2 linear system
    // V β = s to tight tolerance.
    //
    // Given
    // -----
    // - V = [[2, 0.5], [0.5, 1]], s = [1, 1], ρ = 0.
    // - Exact solution β = V⁻¹ s = [2/7, 6/7].
    //
    // Expect
    // ------
    // - Converged β matches the exact solution within 1e-8.
    fn unpenalized_solve_matches_linear_system_solution() {
        // Arrange
        let gram = array![[2.0, 0.5], [0.5, 1.0]];
        let target = array![1.0, 1.0];
        let penalties = array![0.0, 0.0];
        let mut beta = Array1::<f64>::zeros(2);

        // Act
        let outcome = lasso_coordinate_descent(
            gram.view(),
            target.view(),
            penalties.view(),
            &mut beta,
            1e-12,
            10_000,
        )
        .expect("unpenalized solve should succeed");

        // Assert
        assert!(outcome.converged);
        assert_relative_eq!(beta[0], 2.0 / 7.0, max_relative = 1e-8);
        assert_relative_eq!(beta[1], 6.0 / 7.0, max_relative = 1e-8);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a warm start at the solution converges in a single
    // sweep with zero change.
    //
    // Given
    // -----
    // - The 2×2 system above with β pre-loaded to the exact solution.
    //
    // Expect
    // ------
    // - One sweep, converged, delta below tolerance.
    fn warm_start_at_solution_converges_in_one_sweep() {
        let gram = array![[2.0, 0.5], [0.5, 1.0]];
        let target = array![1.0, 1.0];
        let penalties = array![0.0, 0.0];
        let mut beta = array![2.0 / 7.0, 6.0 / 7.0];
        let outcome = lasso_coordinate_descent(
            gram.view(),
            target.view(),
            penalties.view(),
            &mut beta,
            1e-10,
            100,
        )
        .unwrap();
        assert!(outcome.converged);
        assert_eq!(outcome.iterations, 1);
        assert!(outcome.delta < 1e-10);
    }

    #[test]
    // Purpose
    // -------
    // Verify that exhausting the sweep budget is reported as
    // `converged == false` rather than an error.
    //
    // Given
    // -----
    // - A well-posed 2×2 system with an absurdly tight tolerance and a
    //   budget of one sweep.
    //
    // Expect
    // ------
    // - `Ok(outcome)` with `iterations == 1` and `converged == false`.
    fn sweep_budget_exhaustion_is_not_an_error() {
        let gram = array![[2.0, 0.9], [0.9, 2.0]];
        let target = array![1.0, -1.0];
        let penalties = array![0.1, 0.1];
        let mut beta = Array1::<f64>::zeros(2);
        let outcome = lasso_coordinate_descent(
            gram.view(),
            target.view(),
            penalties.view(),
            &mut beta,
            1e-300,
            1,
        )
        .unwrap();
        assert_eq!(outcome.iterations, 1);
        assert!(!outcome.converged);
    }

    #[test]
    // Purpose
    // -------
    // Verify the singular-block error path for a non-positive gram
    // diagonal.
    //
    // Given
    // -----
    // - V with V[1,1] = 0.
    //
    // Expect
    // ------
    // - `Err(GlassoError::SingularBlock { coordinate: 1, value: 0.0 })`.
    fn non_positive_gram_diagonal_is_reported() {
        let gram = array![[1.0, 0.0], [0.0, 0.0]];
        let target = array![1.0, 1.0];
        let penalties = array![0.0, 0.0];
        let mut beta = Array1::<f64>::zeros(2);
        match lasso_coordinate_descent(
            gram.view(),
            target.view(),
            penalties.view(),
            &mut beta,
            1e-8,
            10,
        ) {
            Err(GlassoError::SingularBlock { coordinate, value }) => {
                assert_eq!(coordinate, 1);
                assert_eq!(value, 0.0);
            }
            other => panic!("expected SingularBlock, got {other:?}"),
        }
    }
}
