//! Block coordinate-descent solver for the graphical lasso.
//!
//! Maximizes the penalized Gaussian log-likelihood
//!
//! `log det Θ − trace(S·Θ) − Σ_{ij} ρ_ij·|Θ_ij|`
//!
//! by block coordinate descent on the working covariance estimate `W`
//! (Friedman–Hastie–Tibshirani), each block solved by the coordinate-descent
//! lasso in [`core::lasso`](crate::glasso::core::lasso).
//!
//! ## Algorithm
//! 1. Initialize `W = S + diag(ρ)` (diagonal augmentation; `W = S` when the
//!    option is off). The diagonal of `W` is fixed for the whole run.
//! 2. Pass over blocks `k = 0..p`: extract `W₁₁` and `s₁₂`, lasso-solve for
//!    `β` (warm-started from the previous pass), and write
//!    `w₁₂ = W₁₁·β` back into row/column `k` of `W`.
//! 3. After each full pass, measure `delta` = mean absolute off-diagonal
//!    change of `W` and stop when `delta < tol · mean|S_offdiag|` (the raw
//!    tolerance when `S` is diagonal). Exceeding the pass budget surfaces
//!    [`GlassoError::NotConverged`] with the best-so-far estimate attached.
//! 4. Recover `Θ` from the converged `W` and per-block `β`:
//!    `Θ[k,k] = 1/(W[k,k] − w₁₂ᵀβ)` and `Θ[j,k] = −β_j·Θ[k,k]`, symmetrized
//!    by averaging. Lasso zeros in `β` carry through as zeros in `Θ`.
//!
//! ## Ownership
//! All mutable state lives in one [`GlassoWorkspace`] owned by the run;
//! the input covariance and penalty are only read. The computation is
//! single-threaded and deterministic: blocks are visited in index order, so
//! repeated runs on the same inputs produce bitwise-identical results.
use crate::glasso::{
    core::{
        covariance::CovarianceMatrix,
        lasso::lasso_coordinate_descent,
        options::GlassoOptions,
        penalty::Penalty,
        precision::{EstimateOutcome, PrecisionEstimate},
        workspace::{full_index, GlassoWorkspace},
    },
    errors::{GlassoError, GlassoResult},
};
use ndarray::Array2;

/// Estimate a sparse precision matrix from a covariance and a penalty.
///
/// This is the functional entry point: it runs the full block descent and
/// returns the estimate, or [`GlassoError::NotConverged`] carrying the
/// best-so-far estimate when the pass budget runs out. Callers that want the
/// outcome diagnostics (pass count, final delta) regardless of convergence
/// should use [`GraphicalLassoModel::fit`] instead.
///
/// # Errors
/// - Penalty shape mismatches against the covariance dimension.
/// - Numerical failures from the block solves (`SingularBlock`,
///   `NonFiniteBlockSolution`, `NonFiniteWorkingMatrix`,
///   `NonPositiveSchurComplement`).
/// - `NotConverged` after `max_outer_iter` passes (recoverable; the partial
///   estimate travels in the error).
///
/// [`GraphicalLassoModel::fit`]: crate::glasso::models::graphical_lasso::GraphicalLassoModel::fit
pub fn estimate_precision(
    cov: &CovarianceMatrix, penalty: &Penalty, options: &GlassoOptions,
) -> GlassoResult<PrecisionEstimate> {
    let outcome = run_block_descent(cov, penalty, options)?;
    if outcome.converged {
        Ok(outcome.precision)
    } else {
        Err(GlassoError::NotConverged {
            iterations: outcome.iterations,
            delta: outcome.delta,
            tolerance: outcome.threshold,
            partial: Box::new(outcome.precision),
        })
    }
}

/// Run the outer block-coordinate loop and recover `Θ`.
///
/// Returns an [`EstimateOutcome`] whether or not the run converged; only
/// hard numerical failures are errors at this level. The `threshold` field
/// records the scaled stopping threshold actually compared against.
pub(crate) fn run_block_descent(
    cov: &CovarianceMatrix, penalty: &Penalty, options: &GlassoOptions,
) -> GlassoResult<EstimateOutcome> {
    penalty.check_dim(cov.dim())?;

    let p = cov.dim();
    let tols = &options.tols;
    let scale = cov.mean_abs_offdiagonal();
    let threshold = if scale > 0.0 {
        tols.convergence_tolerance * scale
    } else {
        tols.convergence_tolerance
    };

    let mut ws = GlassoWorkspace::new(cov, penalty, options.diagonal_augmentation);
    let mut iterations = 0;
    let mut delta = f64::INFINITY;
    let mut converged = false;

    while iterations < tols.max_outer_iter {
        ws.snapshot();
        for block in 0..p {
            ws.load_block(cov, penalty, block);
            ws.beta.assign(&ws.betas.row(block));
            lasso_coordinate_descent(
                ws.w11.view(),
                ws.s12.view(),
                ws.penalties.view(),
                &mut ws.beta,
                tols.convergence_tolerance,
                tols.max_inner_iter,
            )?;
            ws.betas.row_mut(block).assign(&ws.beta);
            ws.store_block(block)?;
        }
        delta = ws.pass_delta();
        iterations += 1;
        if delta < threshold {
            converged = true;
            break;
        }
    }

    let theta = recover_precision(&mut ws, cov, penalty)?;
    let precision = PrecisionEstimate::from_solver(theta, ws.w);
    Ok(EstimateOutcome { precision, iterations, delta, threshold, converged })
}

/// Recover `Θ` from the final `W` and the per-block lasso solutions.
///
/// For each block `k`, with `β` the stored solution and `w₁₂ = W₁₁·β`:
///
/// `Θ[k,k] = 1/(W[k,k] − w₁₂ᵀβ)`,  `Θ[j,k] = −β_j·Θ[k,k]`
///
/// assembled over all blocks and symmetrized by averaging. The Schur
/// complement in the denominator must be strictly positive for `Θ` to carry
/// a valid diagonal; anything else is surfaced as an error.
fn recover_precision(
    ws: &mut GlassoWorkspace, cov: &CovarianceMatrix, penalty: &Penalty,
) -> GlassoResult<Array2<f64>> {
    let p = ws.dim();
    let mut theta = Array2::<f64>::zeros((p, p));
    for block in 0..p {
        ws.load_block(cov, penalty, block);
        let beta = ws.betas.row(block);
        for row in 0..(p - 1) {
            ws.w12[row] = ws.w11.row(row).dot(&beta);
        }
        let schur = ws.w[[block, block]] - ws.w12.dot(&beta);
        if !schur.is_finite() {
            return Err(GlassoError::NonFiniteWorkingMatrix {
                row: block,
                col: block,
                value: schur,
            });
        }
        if schur <= 0.0 {
            return Err(GlassoError::NonPositiveSchurComplement { block, value: schur });
        }
        let theta_kk = 1.0 / schur;
        theta[[block, block]] = theta_kk;
        for (reduced, &coef) in beta.iter().enumerate() {
            theta[[full_index(reduced, block), block]] = -coef * theta_kk;
        }
    }
    for row in 0..p {
        for col in (row + 1)..p {
            let averaged = 0.5 * (theta[[row, col]] + theta[[col, row]]);
            theta[[row, col]] = averaged;
            theta[[col, row]] = averaged;
        }
    }
    Ok(theta)
}
