//! core — shared graphical-lasso data types, scratch space, and solvers.
//!
//! Purpose
//! -------
//! Collect the core building blocks of the estimator: the validated
//! covariance and penalty containers, run options, the per-run workspace,
//! the inner coordinate-descent lasso, the outer block-descent solver, and
//! the precision output types. The model layer and the Python bindings
//! build on top of these primitives.
//!
//! Key behaviors
//! -------------
//! - Validated input containers ([`CovarianceMatrix`], [`Penalty`]) are the
//!   only entry gates; everything downstream assumes their invariants.
//! - Mutable solver state is confined to the crate-private workspace, which
//!   one run owns exclusively.
//! - The functional entry point [`estimate_precision`] and the outcome
//!   types ([`PrecisionEstimate`], [`EstimateOutcome`]) are re-exported at
//!   this level for ergonomic imports.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based throughout; block `k` refers to row/column `k` of
//!   the working matrix.
//! - This module tree performs no I/O and no logging; errors are surfaced
//!   as [`GlassoResult`](crate::glasso::errors::GlassoResult) values.

pub mod covariance;
pub mod lasso;
pub mod options;
pub mod penalty;
pub mod precision;
pub mod solver;
pub mod validation;
pub(crate) mod workspace;

pub use self::covariance::{CovarianceMatrix, DEFAULT_SYMMETRY_TOLERANCE};
pub use self::lasso::{lasso_coordinate_descent, soft_threshold, LassoOutcome};
pub use self::options::{
    GlassoOptions, Tolerances, DEFAULT_CONVERGENCE_TOLERANCE, DEFAULT_MAX_INNER_ITER,
    DEFAULT_MAX_OUTER_ITER,
};
pub use self::penalty::Penalty;
pub use self::precision::{EstimateOutcome, PrecisionEstimate};
pub use self::solver::estimate_precision;
