//! Solver workspace — working matrix `W` and per-block scratch buffers.
//!
//! Purpose
//! -------
//! Own every piece of mutable state for one graphical-lasso run: the working
//! covariance estimate `W`, its previous-pass snapshot, the extracted block
//! (`W₁₁`, `s₁₂`), the per-block penalty vector, and the warm-start lasso
//! solutions for all `p` blocks. One run owns exactly one workspace; nothing
//! here is shared across concurrent runs, which keeps the in-place block
//! updates free of hidden aliasing.
//!
//! Key behaviors
//! -------------
//! - [`GlassoWorkspace::new`] allocates all buffers once, sized by `p`, and
//!   initializes `W` from `S` (with or without diagonal augmentation).
//! - [`GlassoWorkspace::load_block`] copies the reduced submatrix `W₁₁`, the
//!   covariance column `s₁₂`, and the block penalty vector into the scratch
//!   buffers for block `k`.
//! - [`GlassoWorkspace::store_block`] computes `w₁₂ = W₁₁·β` and writes it
//!   symmetrically into row/column `k` of `W`, leaving the diagonal fixed.
//! - [`GlassoWorkspace::snapshot`] / [`GlassoWorkspace::pass_delta`]
//!   implement the per-pass convergence measurement against the previous
//!   pass.
//!
//! Invariants & assumptions
//! ------------------------
//! - Buffer shapes are fixed at construction: `W`, `W_prev` are `p×p`;
//!   `W₁₁` is `(p−1)×(p−1)`; `s₁₂`, `w₁₂`, and the penalty buffer have
//!   length `p−1`; the warm-start matrix is `p×(p−1)` (row `k` holds block
//!   `k`'s last solution).
//! - The reduced index `j ∈ 0..p−1` maps to the full index
//!   `j` when `j < k` and `j + 1` otherwise; [`load_block`] and
//!   [`store_block`] use the same mapping, so a round trip is lossless.
//! - `W`'s diagonal is written once at construction and never touched by
//!   block updates.
//!
//! Conventions
//! -----------
//! - No heap allocation after construction; the outer loop reuses the same
//!   buffers for every block and pass.
//! - This type is purely numeric; it performs no I/O and no logging.
//!
//! Downstream usage
//! ----------------
//! - The solver drives the workspace through the
//!   `snapshot → (load_block → lasso → store_block)×p → pass_delta` cycle
//!   and reads `W` plus the warm-start rows during precision recovery.
//!
//! Testing notes
//! -------------
//! - Unit tests cover initialization with/without augmentation, the index
//!   mapping of block extraction, symmetric write-back with a fixed
//!   diagonal, and the pass-delta measurement.
//!
//! [`load_block`]: GlassoWorkspace::load_block
//! [`store_block`]: GlassoWorkspace::store_block
use crate::glasso::{
    core::{covariance::CovarianceMatrix, penalty::Penalty},
    errors::{GlassoError, GlassoResult},
};
use ndarray::{Array1, Array2};

/// `GlassoWorkspace` — exclusively-owned mutable state for one run.
///
/// Fields are public within the crate so the solver can drive the update
/// cycle without accessor overhead; the type is not part of the public API.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GlassoWorkspace {
    /// Working covariance estimate `W`, updated in place block by block.
    pub w: Array2<f64>,
    /// Snapshot of `W` at the start of the current pass.
    pub w_prev: Array2<f64>,
    /// Reduced submatrix `W₁₁` for the active block.
    pub w11: Array2<f64>,
    /// Covariance column `s₁₂` for the active block.
    pub s12: Array1<f64>,
    /// Updated off-diagonal column `w₁₂ = W₁₁·β` for the active block.
    pub w12: Array1<f64>,
    /// Per-coordinate penalties for the active block.
    pub penalties: Array1<f64>,
    /// Lasso solution scratch for the active block.
    pub beta: Array1<f64>,
    /// Warm-start lasso solutions; row `k` is block `k`'s last `β`.
    pub betas: Array2<f64>,
}

/// Map a reduced block coordinate to its full-matrix index.
#[inline]
pub(crate) fn full_index(reduced: usize, block: usize) -> usize {
    if reduced < block { reduced } else { reduced + 1 }
}

impl GlassoWorkspace {
    /// Allocate all buffers and initialize `W` from the covariance.
    ///
    /// With `diagonal_augmentation`, `W = S + diag(ρ)`; otherwise `W = S`.
    /// The diagonal set here stays fixed for the entire run.
    pub fn new(cov: &CovarianceMatrix, penalty: &Penalty, diagonal_augmentation: bool) -> Self {
        let p = cov.dim();
        let mut w = cov.view().to_owned();
        if diagonal_augmentation {
            for k in 0..p {
                w[[k, k]] += penalty.diagonal(k);
            }
        }
        let w_prev = w.clone();
        GlassoWorkspace {
            w,
            w_prev,
            w11: Array2::zeros((p - 1, p - 1)),
            s12: Array1::zeros(p - 1),
            w12: Array1::zeros(p - 1),
            penalties: Array1::zeros(p - 1),
            beta: Array1::zeros(p - 1),
            betas: Array2::zeros((p, p - 1)),
        }
    }

    /// Number of variables `p`.
    #[inline]
    pub fn dim(&self) -> usize {
        self.w.nrows()
    }

    /// Fill the scratch buffers for block `k` from `W`, `S`, and the penalty.
    ///
    /// Copies `W₁₁` (all rows/columns of `W` except `k`), `s₁₂` (column `k`
    /// of `S` restricted to the other indices), and the per-coordinate
    /// penalties `ρ_{jk}`.
    pub fn load_block(&mut self, cov: &CovarianceMatrix, penalty: &Penalty, block: usize) {
        let p = self.dim();
        let s = cov.view();
        for row in 0..(p - 1) {
            let full_row = full_index(row, block);
            self.s12[row] = s[[full_row, block]];
            self.penalties[row] = penalty.value_at(full_row, block);
            for col in 0..(p - 1) {
                let full_col = full_index(col, block);
                self.w11[[row, col]] = self.w[[full_row, full_col]];
            }
        }
    }

    /// Write block `k`'s solution back into `W`.
    ///
    /// Computes `w₁₂ = W₁₁·β` from the warm-start row for `block` and writes
    /// it into row and column `k` of `W` (off-diagonal entries only; the
    /// diagonal is fixed by construction).
    ///
    /// # Errors
    /// - [`GlassoError::NonFiniteWorkingMatrix`] if any updated entry is
    ///   NaN/±inf, reported at its full-matrix position.
    pub fn store_block(&mut self, block: usize) -> GlassoResult<()> {
        let p = self.dim();
        let beta = self.betas.row(block);
        for row in 0..(p - 1) {
            self.w12[row] = self.w11.row(row).dot(&beta);
        }
        for (reduced, &value) in self.w12.iter().enumerate() {
            let full_row = full_index(reduced, block);
            if !value.is_finite() {
                return Err(GlassoError::NonFiniteWorkingMatrix {
                    row: full_row,
                    col: block,
                    value,
                });
            }
            self.w[[full_row, block]] = value;
            self.w[[block, full_row]] = value;
        }
        Ok(())
    }

    /// Record the current `W` as the previous-pass reference.
    pub fn snapshot(&mut self) {
        self.w_prev.assign(&self.w);
    }

    /// Mean absolute off-diagonal change of `W` since the last snapshot.
    pub fn pass_delta(&self) -> f64 {
        let p = self.dim();
        let mut total = 0.0;
        for row in 0..p {
            for col in 0..p {
                if row != col {
                    total += (self.w[[row, col]] - self.w_prev[[row, col]]).abs();
                }
            }
        }
        total / ((p * (p - 1)) as f64)
    }
}
