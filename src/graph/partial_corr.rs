//! Partial correlations from a precision matrix.
//!
//! For a precision matrix `Θ`, the partial correlation between variables
//! `i` and `j` given all others is
//!
//! `pcorr[i,j] = −Θ[i,j] / sqrt(Θ[i,i]·Θ[j,j])`
//!
//! with the diagonal forced to 0 by convention (self-correlation carries no
//! information in the graph). Exact zeros in `Θ` pass through as exact zeros
//! in the partial correlations, which is what makes the downstream edge
//! test meaningful.
//!
//! Values are bounded near `[−1, 1]` in theory but not strictly, because
//! the ℓ₁ penalty shrinks the precision entries; consumers should not rely
//! on a hard bound.
use crate::{
    glasso::core::precision::PrecisionEstimate,
    graph::errors::{GraphError, GraphResult},
};
use ndarray::Array2;

/// Compute the partial-correlation matrix of a precision estimate.
///
/// # Behavior
/// - Validates that every diagonal entry of `Θ` is strictly positive and
///   every entry is finite (solver-built estimates satisfy this by
///   construction; fixture-built ones are re-checked defensively at the
///   boundary the graph contract cares about).
/// - Returns a symmetric `p×p` matrix with a zero diagonal.
///
/// # Errors
/// - [`GraphError::NonPositiveDiagonal`] at the first diagonal entry ≤ 0.
/// - [`GraphError::NonFiniteEntry`] at the first NaN/±inf entry.
pub fn partial_correlations(precision: &PrecisionEstimate) -> GraphResult<Array2<f64>> {
    let theta = precision.theta();
    let p = precision.dim();

    for ((row, col), &value) in theta.indexed_iter() {
        if !value.is_finite() {
            return Err(GraphError::NonFiniteEntry { row, col, value });
        }
    }
    for (index, &value) in theta.diag().iter().enumerate() {
        if value <= 0.0 {
            return Err(GraphError::NonPositiveDiagonal { index, value });
        }
    }

    let mut pcorr = Array2::<f64>::zeros((p, p));
    for row in 0..p {
        for col in 0..p {
            if row != col {
                let denom = (theta[[row, row]] * theta[[col, col]]).sqrt();
                pcorr[[row, col]] = -theta[[row, col]] / denom;
            }
        }
    }
    Ok(pcorr)
}
