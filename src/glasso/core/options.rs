//! Estimator options — configuration for graphical-lasso runs.
//!
//! Purpose
//! -------
//! Collect the configuration knobs for a graphical-lasso estimation run in
//! one place, making runs explicit and reproducible: iteration budgets and
//! the convergence tolerance ([`Tolerances`]), and the diagonal-augmentation
//! switch ([`GlassoOptions`]).
//!
//! Key behaviors
//! -------------
//! - Represent iteration/tolerance configuration via [`Tolerances`], with a
//!   validated constructor and documented defaults.
//! - Represent run-level configuration via [`GlassoOptions`], bundling
//!   tolerances with the diagonal-augmentation flag.
//! - Keep cross-cutting configuration out of the solver loop, so call sites
//!   pass explicit, validated options instead of ad-hoc flags.
//!
//! Invariants & assumptions
//! ------------------------
//! - `convergence_tolerance` is finite and strictly positive.
//! - `max_outer_iter` and `max_inner_iter` are strictly positive.
//! - [`GlassoOptions`] assumes its [`Tolerances`] component was validated by
//!   its own constructor; it imposes no cross-field checks.
//!
//! Conventions
//! -----------
//! - The outer tolerance is applied to the mean absolute off-diagonal change
//!   of the working matrix per pass, scaled by the mean absolute off-diagonal
//!   magnitude of `S` (see the solver module for the exact stopping rule).
//! - The same tolerance bounds the inner lasso sweeps, applied to the
//!   maximum absolute coordinate change.
//!
//! Downstream usage
//! ----------------
//! - Build a [`GlassoOptions`] (or start from `GlassoOptions::default()`)
//!   and pass it to
//!   [`estimate_precision`](crate::glasso::core::solver::estimate_precision)
//!   or a [`GraphicalLassoModel`](crate::glasso::models::graphical_lasso::GraphicalLassoModel).
//!
//! Testing notes
//! -------------
//! - Unit tests cover the validated constructor's accept/reject paths and
//!   the documented defaults.
use crate::glasso::{
    core::validation::{
        verify_convergence_tolerance, verify_max_inner_iter, verify_max_outer_iter,
    },
    errors::GlassoResult,
};

/// Default relative tolerance on the per-pass change of the working matrix.
pub const DEFAULT_CONVERGENCE_TOLERANCE: f64 = 1e-4;

/// Default cap on full passes of the outer block-coordinate loop.
pub const DEFAULT_MAX_OUTER_ITER: usize = 100;

/// Default cap on coordinate sweeps of the inner lasso sub-solver.
pub const DEFAULT_MAX_INNER_ITER: usize = 1000;

/// Numerical tolerances and iteration limits used by the solver.
///
/// - `convergence_tolerance`: stop the outer loop when the scaled mean
///   absolute off-diagonal change of `W` falls below this threshold; also
///   bounds the inner lasso sweeps.
/// - `max_outer_iter`: hard cap on full passes over all `p` blocks.
/// - `max_inner_iter`: hard cap on coordinate sweeps per block solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub convergence_tolerance: f64,
    pub max_outer_iter: usize,
    pub max_inner_iter: usize,
}

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Rules
    /// - `convergence_tolerance` must be **finite and strictly positive**.
    /// - `max_outer_iter` and `max_inner_iter` must be `> 0`.
    ///
    /// # Errors
    /// - [`GlassoError::InvalidConvergenceTolerance`] for non-finite or
    ///   non-positive tolerances.
    /// - [`GlassoError::InvalidMaxOuterIter`] / [`GlassoError::InvalidMaxInnerIter`]
    ///   when an iteration cap is zero.
    ///
    /// [`GlassoError::InvalidConvergenceTolerance`]: crate::glasso::errors::GlassoError::InvalidConvergenceTolerance
    /// [`GlassoError::InvalidMaxOuterIter`]: crate::glasso::errors::GlassoError::InvalidMaxOuterIter
    /// [`GlassoError::InvalidMaxInnerIter`]: crate::glasso::errors::GlassoError::InvalidMaxInnerIter
    pub fn new(
        convergence_tolerance: f64, max_outer_iter: usize, max_inner_iter: usize,
    ) -> GlassoResult<Self> {
        verify_convergence_tolerance(convergence_tolerance)?;
        verify_max_outer_iter(max_outer_iter)?;
        verify_max_inner_iter(max_inner_iter)?;
        Ok(Self { convergence_tolerance, max_outer_iter, max_inner_iter })
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            convergence_tolerance: DEFAULT_CONVERGENCE_TOLERANCE,
            max_outer_iter: DEFAULT_MAX_OUTER_ITER,
            max_inner_iter: DEFAULT_MAX_INNER_ITER,
        }
    }
}

/// Run-level configuration for graphical-lasso estimation.
///
/// Fields:
/// - `tols: Tolerances` — numerical tolerances and iteration limits.
/// - `diagonal_augmentation: bool` — when `true` (the default), initialize
///   the working matrix as `W = S + diag(ρ)`, which improves conditioning
///   and guarantees a positive-definite start whenever `ρ > 0`; when
///   `false`, start from `W = S` unchanged.
///
/// Constructor:
/// - `new(tols, diagonal_augmentation) -> Self` — builds options; validation
///   of numeric values is handled in `Tolerances::new`.
///
/// Default:
/// - `tols`: `convergence_tolerance = 1e-4`, `max_outer_iter = 100`,
///   `max_inner_iter = 1000`
/// - `diagonal_augmentation`: `true`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlassoOptions {
    pub tols: Tolerances,
    pub diagonal_augmentation: bool,
}

impl GlassoOptions {
    /// Create a new set of estimator options.
    ///
    /// This constructor does not mutate values; validation of numeric fields
    /// is performed inside [`Tolerances::new`].
    pub fn new(tols: Tolerances, diagonal_augmentation: bool) -> Self {
        Self { tols, diagonal_augmentation }
    }
}

impl Default for GlassoOptions {
    fn default() -> Self {
        Self { tols: Tolerances::default(), diagonal_augmentation: true }
    }
}
