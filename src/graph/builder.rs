//! Variable-graph construction from partial correlations.
//!
//! Purpose
//! -------
//! Materialize the undirected weighted graph implied by a precision
//! estimate: one node per labeled variable, one edge per pair whose partial
//! correlation is non-zero beyond a small tolerance, edge weight equal to
//! the signed partial correlation. Under the pairwise Markov property this
//! is the conditional-independence graph of the fitted Gaussian model.
//!
//! Key behaviors
//! -------------
//! - [`build_variable_graph`] validates the label sequence against the
//!   precision dimension, computes partial correlations, and collects the
//!   surviving edges; [`build_variable_graph_with_options`] additionally
//!   takes a validated [`GraphOptions`].
//! - [`VariableGraph`] is immutable after construction and exposes
//!   label-based lookups (`has_edge`, `weight`, `neighbors`, `degree`)
//!   alongside the raw sorted edge list.
//!
//! Invariants & assumptions
//! ------------------------
//! - Labels are unique and their count equals the precision dimension.
//! - Edges are stored once per unordered pair with `source < target`
//!   (indices into the label sequence), sorted lexicographically by index
//!   pair; there are no self-loops.
//! - Construction is a pure function of its inputs: calling it twice on the
//!   same estimate yields identical edge sets and weights.
//!
//! Conventions
//! -----------
//! - The default edge tolerance [`DEFAULT_EDGE_TOLERANCE`] (1e-10) exists
//!   only to absorb floating-point noise around the exact zeros induced by
//!   the ℓ₁ penalty; it is not a significance filter.
//!
//! Testing notes
//! -------------
//! - Unit tests cover label validation, edge collection on a fixture with
//!   known zeros, the accessor surface, tolerance handling, and
//!   construction idempotence.
use crate::{
    glasso::core::precision::PrecisionEstimate,
    graph::{
        errors::{GraphError, GraphResult},
        partial_corr::partial_correlations,
    },
};
use std::collections::HashSet;

/// Default absolute tolerance below which a partial correlation is treated
/// as an exact zero (no edge).
pub const DEFAULT_EDGE_TOLERANCE: f64 = 1e-10;

/// Options for graph construction.
///
/// Fields:
/// - `edge_tolerance: f64` — absolute threshold for edge inclusion; a pair
///   (i, j) becomes an edge iff `|pcorr[i,j]| > edge_tolerance`.
///
/// Constructor:
/// - `new(edge_tolerance) -> GraphResult<Self>` — requires a finite,
///   non-negative tolerance. Zero is legal and means an exact-zero test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphOptions {
    pub edge_tolerance: f64,
}

impl GraphOptions {
    /// Construct validated graph options.
    ///
    /// # Errors
    /// - [`GraphError::InvalidEdgeTolerance`] for negative or non-finite
    ///   tolerances.
    pub fn new(edge_tolerance: f64) -> GraphResult<Self> {
        if !edge_tolerance.is_finite() {
            return Err(GraphError::InvalidEdgeTolerance {
                value: edge_tolerance,
                reason: "Edge tolerance must be finite.",
            });
        }
        if edge_tolerance < 0.0 {
            return Err(GraphError::InvalidEdgeTolerance {
                value: edge_tolerance,
                reason: "Edge tolerance must be non-negative.",
            });
        }
        Ok(Self { edge_tolerance })
    }
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self { edge_tolerance: DEFAULT_EDGE_TOLERANCE }
    }
}

/// One undirected edge: indices into the label sequence with
/// `source < target`, weighted by the signed partial correlation.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

/// `VariableGraph` — undirected weighted conditional-independence graph.
///
/// Built once from a precision estimate and a label sequence; immutable
/// thereafter. Nodes are the labels in their original order; edges are the
/// pairs whose partial correlation survived the edge tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableGraph {
    labels: Vec<String>,
    edges: Vec<GraphEdge>,
}

/// Build the variable graph with default options.
///
/// See [`build_variable_graph_with_options`] for the contract.
pub fn build_variable_graph(
    precision: &PrecisionEstimate, labels: &[String],
) -> GraphResult<VariableGraph> {
    build_variable_graph_with_options(precision, labels, &GraphOptions::default())
}

/// Build the variable graph from a precision estimate and labels.
///
/// # Behavior
/// 1. Validates `labels.len()` against the precision dimension and label
///    uniqueness.
/// 2. Computes partial correlations (re-validating the precision input).
/// 3. Collects every unordered pair with
///    `|pcorr[i,j]| > options.edge_tolerance` as an edge weighted by the
///    signed partial correlation.
///
/// # Errors
/// - [`GraphError::LabelCountMismatch`] / [`GraphError::DuplicateLabel`]
///   from label validation.
/// - Precision-input errors propagated from
///   [`partial_correlations`].
pub fn build_variable_graph_with_options(
    precision: &PrecisionEstimate, labels: &[String], options: &GraphOptions,
) -> GraphResult<VariableGraph> {
    let p = precision.dim();
    if labels.len() != p {
        return Err(GraphError::LabelCountMismatch { expected: p, actual: labels.len() });
    }
    let mut seen: HashSet<&str> = HashSet::with_capacity(p);
    for (index, label) in labels.iter().enumerate() {
        if !seen.insert(label.as_str()) {
            return Err(GraphError::DuplicateLabel { index, label: label.clone() });
        }
    }

    let pcorr = partial_correlations(precision)?;
    let mut edges = Vec::new();
    for source in 0..p {
        for target in (source + 1)..p {
            let weight = pcorr[[source, target]];
            if weight.abs() > options.edge_tolerance {
                edges.push(GraphEdge { source, target, weight });
            }
        }
    }
    Ok(VariableGraph { labels: labels.to_vec(), edges })
}

impl VariableGraph {
    /// Number of nodes (variables).
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Node labels in their original order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Sorted edge list (by index pair, `source < target`).
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Index of a label, if present.
    pub fn label_index(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Whether an edge connects the two labeled nodes. Unknown labels and
    /// self-pairs yield `false`.
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.weight(a, b).is_some()
    }

    /// Signed partial-correlation weight of the edge between two labeled
    /// nodes, if such an edge exists.
    pub fn weight(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.label_index(a)?;
        let j = self.label_index(b)?;
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        self.edges
            .iter()
            .find(|e| e.source == lo && e.target == hi)
            .map(|e| e.weight)
    }

    /// Labels adjacent to the given node, in label order. `None` for an
    /// unknown label.
    pub fn neighbors(&self, label: &str) -> Option<Vec<&str>> {
        let index = self.label_index(label)?;
        let mut adjacent: Vec<usize> = self
            .edges
            .iter()
            .filter_map(|e| {
                if e.source == index {
                    Some(e.target)
                } else if e.target == index {
                    Some(e.source)
                } else {
                    None
                }
            })
            .collect();
        adjacent.sort_unstable();
        Some(adjacent.into_iter().map(|i| self.labels[i].as_str()).collect())
    }

    /// Degree of the given node. `None` for an unknown label.
    pub fn degree(&self, label: &str) -> Option<usize> {
        self.neighbors(label).map(|n| n.len())
    }
}
