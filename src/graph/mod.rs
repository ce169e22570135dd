//! graph — partial-correlation graph construction from precision estimates.
//!
//! Purpose
//! -------
//! Turn a fitted [`PrecisionEstimate`] into its conditional-independence
//! structure: the partial-correlation matrix ([`partial_corr`]) and the
//! undirected weighted [`VariableGraph`] over labeled variables
//! ([`builder`]). Data flows one way — precision in, graph out — with no
//! feedback into the estimator.
//!
//! Key behaviors
//! -------------
//! - [`partial_correlations`] computes `−Θ[i,j]/sqrt(Θ[i,i]·Θ[j,j])` with a
//!   zero diagonal.
//! - [`build_variable_graph`] validates labels, applies the edge tolerance,
//!   and materializes an immutable graph owned by the caller.
//! - Errors are centralized in [`errors`] as [`GraphError`] /
//!   [`GraphResult`].
//!
//! Conventions
//! -----------
//! - The graph is symmetric by construction and has no self-loops; each
//!   undirected edge is stored once with `source < target`.
//! - This module performs no I/O and no logging.
//!
//! [`PrecisionEstimate`]: crate::glasso::core::precision::PrecisionEstimate

pub mod builder;
pub mod errors;
pub mod partial_corr;

pub use self::builder::{
    build_variable_graph, build_variable_graph_with_options, GraphEdge, GraphOptions,
    VariableGraph, DEFAULT_EDGE_TOLERANCE,
};
pub use self::errors::{GraphError, GraphResult};
pub use self::partial_corr::partial_correlations;
