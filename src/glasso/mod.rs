//! glasso — sparse precision-matrix estimation stack: core numerics,
//! models, and errors.
//!
//! Purpose
//! -------
//! Provide a cohesive graphical-lasso layer that bundles validated input
//! containers, the block coordinate-descent solver with its lasso
//! sub-solver, a fit-then-inspect model type, and shared error types under a
//! single namespace. This is the surface most consumers (including the
//! Python bindings) should depend on.
//!
//! Key behaviors
//! -------------
//! - Collect the numerical building blocks in [`core`]: covariance and
//!   penalty containers, options, the workspace, the lasso sub-solver, the
//!   outer solver, and the precision output types.
//! - Expose the user-facing model API in [`models`] via
//!   [`GraphicalLassoModel`], caching an [`EstimateOutcome`] per fit.
//! - Centralize estimator error types in [`errors`] (`GlassoError`,
//!   `PenaltyError`, and the `GlassoResult` / `PenaltyResult` aliases) so
//!   callers see a uniform error surface.
//! - Re-export the everyday types directly from this module and via
//!   [`prelude`] for ergonomic imports in downstream crates and bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - Covariance inputs are carried in validated [`CovarianceMatrix`]
//!   instances: square, `p ≥ 2`, finite, strictly positive diagonal, and
//!   symmetric within tolerance.
//! - Penalties are validated [`Penalty`] values: finite, elementwise
//!   non-negative, and (for the matrix form) square and symmetric.
//! - Working matrices and scratch buffers are single-owner per run; the
//!   same model instance is not meant to be fitted concurrently. Multiple
//!   independent runs (e.g., over a penalty grid) share no state.
//! - Non-finite values never propagate silently: every pathological value
//!   is surfaced as a `GlassoError` at the point of detection.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based throughout; the working matrix `W` stores the
//!   regularized covariance estimate, with its diagonal fixed at
//!   initialization.
//! - The estimation stack itself performs no I/O and no logging; callers
//!   orchestrate data loading and logging. Error conditions are surfaced as
//!   [`GlassoResult`] values; panics indicate programming errors such as
//!   shape mismatches in crate-internal scratch handling.
//!
//! Downstream usage
//! ----------------
//! - Typical end-to-end flow:
//!   1. Construct a [`CovarianceMatrix`] from the empirical covariance.
//!   2. Build a [`Penalty`] (scalar or per-pair matrix) and
//!      [`GlassoOptions`] (tolerances, iteration caps, diagonal
//!      augmentation).
//!   3. Either call [`estimate_precision`] directly, or construct a
//!      [`GraphicalLassoModel`] and `fit` it to keep outcome diagnostics.
//!   4. Hand the resulting [`PrecisionEstimate`] to
//!      [`graph`](crate::graph) to materialize the partial-correlation
//!      variable graph.
//! - Python bindings are expected to import from this module (or its
//!   [`prelude`]) and rely on the `GlassoError` / `PenaltyError`
//!   conversions into `PyErr` defined in [`errors`].
//!
//! Testing notes
//! -------------
//! - Unit tests in [`core`] cover container validation, the soft-threshold
//!   and lasso sub-solver against closed forms, workspace block round
//!   trips, and solver-level exactness/degeneracy properties.
//! - Unit tests in [`models`] cover fit caching and the not-fitted /
//!   non-converged error paths.
//! - The integration suite exercises the full covariance → precision →
//!   graph pipeline, including sparsity monotonicity and structure
//!   recovery on synthetic Gaussian data.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------
//
// These are the everyday types most users need. More specialized items
// (validation helpers, the lasso sub-solver, interchange constants) remain
// under their respective submodules.

pub use self::core::{
    estimate_precision, CovarianceMatrix, EstimateOutcome, GlassoOptions, Penalty,
    PrecisionEstimate, Tolerances,
};

pub use self::errors::{GlassoError, GlassoResult, PenaltyError, PenaltyResult};

pub use self::models::GraphicalLassoModel;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_glasso::glasso::prelude::*;
//
// to import the main estimation surface in a single line, without pulling in
// lower-level internals.

pub mod prelude {
    pub use super::{
        estimate_precision, CovarianceMatrix, EstimateOutcome, GlassoError, GlassoOptions,
        GlassoResult, GraphicalLassoModel, Penalty, PenaltyError, PenaltyResult,
        PrecisionEstimate, Tolerances,
    };
}
