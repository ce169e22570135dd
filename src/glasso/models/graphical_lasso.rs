//! Graphical-lasso model: configured estimator with cached results.
//!
//! This module wires the block coordinate-descent solver to a small stateful
//! model type, mirroring the fit-then-inspect workflow: configure once,
//! [`fit`](GraphicalLassoModel::fit) against a covariance and penalty, then
//! read the cached [`EstimateOutcome`] and [`PrecisionEstimate`].
//!
//! Key ideas:
//! - The model owns only configuration and cached results; all mutable
//!   solver state lives in the per-run workspace inside the solver, so one
//!   model can be fitted repeatedly (e.g., across a penalty grid for
//!   cross-validation driven by the caller) without hidden carry-over.
//! - Non-convergence is reported as an error **and** the partial outcome is
//!   retained in `results`, so callers can explicitly accept a best-so-far
//!   estimate after inspecting the diagnostics.
use crate::glasso::{
    core::{
        covariance::CovarianceMatrix,
        options::GlassoOptions,
        penalty::Penalty,
        precision::{EstimateOutcome, PrecisionEstimate},
        solver::run_block_descent,
    },
    errors::{GlassoError, GlassoResult},
};

/// Graphical-lasso model with cached fit results.
///
/// Encapsulates run options and, after [`fit`](GraphicalLassoModel::fit),
/// the last [`EstimateOutcome`]. Construction is infallible because options
/// are validated by their own builders.
///
/// # Notes
/// - Repeated fits overwrite `results`; the model never mixes state across
///   runs.
/// - Fitting different covariances with the same model is supported; the
///   model is configuration, not data.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicalLassoModel {
    /// Run options.
    pub options: GlassoOptions,
    /// Fit results (populated after `fit`, also on non-convergence).
    pub results: Option<EstimateOutcome>,
}

impl GraphicalLassoModel {
    /// Construct a model from validated options.
    pub fn new(options: GlassoOptions) -> GraphicalLassoModel {
        GraphicalLassoModel { options, results: None }
    }

    /// Fit the model against a covariance and penalty, caching the outcome.
    ///
    /// ## Steps
    /// 1. Run the full block coordinate descent via the solver.
    /// 2. Store the [`EstimateOutcome`] in `self.results` regardless of
    ///    convergence.
    /// 3. Return `Ok(())` when converged, or
    ///    [`GlassoError::NotConverged`] (with the partial estimate attached)
    ///    otherwise — the cached outcome stays available either way.
    ///
    /// ## Errors
    /// - All solver errors propagate unchanged; on hard numerical failures
    ///   `self.results` keeps its previous value.
    pub fn fit(&mut self, cov: &CovarianceMatrix, penalty: &Penalty) -> GlassoResult<()> {
        let outcome = run_block_descent(cov, penalty, &self.options)?;
        let converged = outcome.converged;
        let iterations = outcome.iterations;
        let delta = outcome.delta;
        let threshold = outcome.threshold;
        self.results = Some(outcome);
        if converged {
            Ok(())
        } else {
            let partial = self
                .results
                .as_ref()
                .map(|outcome| outcome.precision.clone())
                .expect("results were just populated");
            Err(GlassoError::NotConverged {
                iterations,
                delta,
                tolerance: threshold,
                partial: Box::new(partial),
            })
        }
    }

    /// The fitted precision estimate.
    ///
    /// ## Errors
    /// - [`GlassoError::ModelNotFitted`] before the first successful or
    ///   partially successful fit.
    pub fn precision(&self) -> GlassoResult<&PrecisionEstimate> {
        match &self.results {
            Some(outcome) => Ok(&outcome.precision),
            None => Err(GlassoError::ModelNotFitted),
        }
    }

    /// The full outcome of the last fit.
    ///
    /// ## Errors
    /// - [`GlassoError::ModelNotFitted`] before the first fit.
    pub fn outcome(&self) -> GlassoResult<&EstimateOutcome> {
        match &self.results {
            Some(outcome) => Ok(outcome),
            None => Err(GlassoError::ModelNotFitted),
        }
    }
}
