//! Integration tests for graphical-lasso estimation and graph construction.
//!
//! Purpose
//! -------
//! - Validate the end-to-end pipeline: from a validated covariance matrix,
//!   through penalized precision estimation, to partial correlations and
//!   the variable graph.
//! - Exercise realistic regimes (penalty grids, synthetic Gaussian samples,
//!   boundary dimensions) rather than toy edge cases only.
//!
//! Coverage
//! --------
//! - `glasso::core`:
//!   - `CovarianceMatrix` construction from sample covariances.
//!   - `estimate_precision` across penalties: symmetry, diagonal
//!     positivity, sparsity monotonicity, and the unpenalized analytic
//!     closed form.
//!   - Flat row-major interchange of `PrecisionEstimate`.
//! - `glasso::models::graphical_lasso::GraphicalLassoModel`:
//!   - Fit-then-inspect workflow over a penalty grid.
//! - `graph`:
//!   - Partial correlations and variable-graph construction, including the
//!     degenerate edgeless regime, idempotence, and structure recovery on
//!     synthetic chain data.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of low-level building blocks (validators,
//!   the lasso sub-solver, workspace round trips) — covered by unit tests.
//! - Python bindings — expected to be tested at the Python package level.
//! - Exhaustive stress testing over large `p` — the estimator is specified
//!   for dense, moderate-dimension problems.
use approx::assert_relative_eq;
use ndarray::{array, Array2};
use rand::{rngs::StdRng, SeedableRng};
use rand::distributions::Distribution;
use rust_glasso::{
    glasso::{
        core::{
            covariance::CovarianceMatrix,
            options::{GlassoOptions, Tolerances},
            penalty::Penalty,
            precision::PrecisionEstimate,
            solver::estimate_precision,
        },
        models::graphical_lasso::GraphicalLassoModel,
    },
    graph::{
        builder::{build_variable_graph, GraphOptions},
        partial_corr::partial_correlations,
    },
};
use statrs::distribution::Normal;

/// Purpose
/// -------
/// Draw `n` samples from a 3-variable Gaussian chain X1 → X2 → X3 in which
/// X1 ⊥ X3 | X2 holds by construction, for structure-recovery tests.
///
/// Parameters
/// ----------
/// - `n`: Number of samples; should be large (≥ 5000) so sampling noise is
///   well below the recovery tolerance.
/// - `seed`: RNG seed; fixed by callers so the test is deterministic.
///
/// Returns
/// -------
/// - An `n×3` matrix of samples generated as
///   `x1 = z1`, `x2 = 0.8·x1 + z2`, `x3 = 0.8·x2 + z3` with independent
///   standard-normal innovations.
///
/// Invariants
/// ----------
/// - The implied precision matrix is tridiagonal: the (1, 3) partial
///   correlation is exactly zero in population.
fn simulate_chain_samples(n: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let standard_normal = Normal::new(0.0, 1.0).expect("unit normal parameters are valid");
    let mut samples = Array2::<f64>::zeros((n, 3));
    for t in 0..n {
        let x1 = standard_normal.sample(&mut rng);
        let x2 = 0.8 * x1 + standard_normal.sample(&mut rng);
        let x3 = 0.8 * x2 + standard_normal.sample(&mut rng);
        samples[[t, 0]] = x1;
        samples[[t, 1]] = x2;
        samples[[t, 2]] = x3;
    }
    samples
}

/// Purpose
/// -------
/// Compute the (symmetrized) sample covariance of an `n×p` data matrix.
///
/// Parameters
/// ----------
/// - `samples`: Data matrix with observations in rows; `n ≥ 2`.
///
/// Returns
/// -------
/// - A validated `CovarianceMatrix` built from
///   `(Xᶜ)ᵀXᶜ / (n − 1)`, averaged with its transpose so accumulated
///   floating-point asymmetry cannot trip the symmetry gate.
fn sample_covariance(samples: &Array2<f64>) -> CovarianceMatrix {
    let n = samples.nrows();
    let p = samples.ncols();
    let mut centered = samples.clone();
    for j in 0..p {
        let mean = samples.column(j).mean().expect("non-empty sample column");
        for t in 0..n {
            centered[[t, j]] -= mean;
        }
    }
    let raw = centered.t().dot(&centered) / ((n - 1) as f64);
    let symmetrized = 0.5 * (&raw + &raw.t());
    CovarianceMatrix::new(symmetrized)
        .expect("sample covariance of non-degenerate data should validate")
}

/// Purpose
/// -------
/// Provide a stable, documented baseline options configuration for
/// integration tests that should reflect typical user settings.
///
/// Configuration
/// -------------
/// - `convergence_tolerance = 1e-6`, `max_outer_iter = 200`,
///   `max_inner_iter = 2000`, diagonal augmentation on.
///
/// Invariants
/// ----------
/// - Panics if the underlying constructors reject the supplied parameters;
///   that is a test-time configuration error, not a behavior under test.
fn default_test_options() -> GlassoOptions {
    let tols = Tolerances::new(1e-6, 200, 2000)
        .expect("Tolerances::new should accept baseline settings");
    GlassoOptions::new(tols, true)
}

/// Purpose
/// -------
/// Provide a tight options configuration for tests that compare against
/// analytic closed forms and need the solver driven near machine precision.
///
/// Configuration
/// -------------
/// - `convergence_tolerance = 1e-10`, `max_outer_iter = 500`,
///   `max_inner_iter = 50_000`, diagonal augmentation on.
fn tight_test_options() -> GlassoOptions {
    let tols = Tolerances::new(1e-10, 500, 50_000)
        .expect("Tolerances::new should accept tight settings");
    GlassoOptions::new(tols, true)
}

/// The synthetic 4×4 covariance used for the penalty-grid tests: an
/// AR-like structure with off-diagonal magnitudes decaying away from the
/// diagonal.
fn grid_covariance() -> CovarianceMatrix {
    CovarianceMatrix::new(array![
        [1.0, 0.5, 0.25, 0.1],
        [0.5, 1.0, 0.5, 0.25],
        [0.25, 0.5, 1.0, 0.5],
        [0.1, 0.25, 0.5, 1.0]
    ])
    .expect("grid covariance is symmetric with positive diagonal")
}

#[test]
// Purpose
// -------
// Ensure the estimator produces a symmetric precision matrix with a
// strictly positive diagonal across an entire penalty grid, via the
// fit-then-inspect model workflow.
//
// Given
// -----
// - The synthetic 4×4 grid covariance.
// - Penalties ρ ∈ {0.0, 0.1, 0.3, 0.5, 0.9}.
// - Baseline options from `default_test_options()`.
//
// Expect
// ------
// - Every fit converges.
// - Every Θ is exactly symmetric (post-averaging) with Θ[k][k] > 0 and
//   finite entries throughout.
fn precision_is_symmetric_positive_diagonal_across_penalty_grid() {
    let cov = grid_covariance();
    let mut model = GraphicalLassoModel::new(default_test_options());
    for &rho in &[0.0, 0.1, 0.3, 0.5, 0.9] {
        let penalty = Penalty::scalar(rho).expect("grid penalties are non-negative");
        model.fit(&cov, &penalty).expect("grid fits should converge");
        let outcome = model.outcome().expect("outcome cached after fit");
        assert!(outcome.converged, "fit should converge at rho = {rho}");
        let theta = outcome.precision.theta();
        for row in 0..4 {
            assert!(theta[[row, row]] > 0.0, "diagonal must be positive at rho = {rho}");
            for col in 0..4 {
                assert!(theta[[row, col]].is_finite());
                assert_eq!(theta[[row, col]], theta[[col, row]]);
            }
        }
    }
}

#[test]
// Purpose
// -------
// Verify weak sparsity monotonicity: increasing the penalty never
// increases the number of non-zero off-diagonal precision entries.
//
// Given
// -----
// - The synthetic 4×4 grid covariance.
// - Penalties ρ ∈ {0.1, 0.3, 0.5, 0.9} in increasing order.
//
// Expect
// ------
// - The non-zero off-diagonal counts (at tolerance 1e-10) are
//   non-increasing along the grid.
// - The largest penalty, which dominates every off-diagonal covariance
//   magnitude, yields a fully diagonal Θ.
fn sparsity_is_weakly_monotone_in_the_penalty() {
    let cov = grid_covariance();
    let options = default_test_options();
    let mut counts = Vec::new();
    for &rho in &[0.1, 0.3, 0.5, 0.9] {
        let penalty = Penalty::scalar(rho).unwrap();
        let estimate =
            estimate_precision(&cov, &penalty, &options).expect("grid fits should converge");
        counts.push(estimate.nonzero_offdiagonal_count(1e-10));
    }
    for window in counts.windows(2) {
        assert!(
            window[1] <= window[0],
            "non-zero count increased along the penalty grid: {counts:?}"
        );
    }
    assert_eq!(*counts.last().unwrap(), 0, "dominating penalty should zero all off-diagonals");
}

#[test]
// Purpose
// -------
// Verify the degenerate fully-sparse regime end-to-end: a penalty large
// enough to dominate every off-diagonal covariance yields a graph with
// zero edges over the full node set.
//
// Given
// -----
// - The synthetic 4×4 grid covariance with max |off-diagonal| = 0.5.
// - ρ = 0.9 and labels for the four variables.
//
// Expect
// ------
// - Four nodes, zero edges, and no neighbors for any node.
fn dominating_penalty_yields_edgeless_graph() {
    let cov = grid_covariance();
    let penalty = Penalty::scalar(0.9).unwrap();
    let estimate = estimate_precision(&cov, &penalty, &default_test_options())
        .expect("fully sparse regime converges quickly");
    let labels: Vec<String> =
        ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
    let graph = build_variable_graph(&estimate, &labels).expect("labels are unique");
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 0);
    for label in &labels {
        assert_eq!(graph.degree(label), Some(0));
    }
}

#[test]
// Purpose
// -------
// Check the unpenalized estimator against the closed-form partial
// correlation on a 3-variable problem.
//
// Given
// -----
// - Correlation matrix [[1, 0.2, 0.8], [0.2, 1, 0.1], [0.8, 0.1, 1]].
// - ρ = 0 with tight tolerances.
// - Closed form for the (1, 2 | 3) partial correlation:
//   (ρ12 − ρ13·ρ23) / sqrt((1 − ρ13²)(1 − ρ23²)).
//
// Expect
// ------
// - The estimated partial correlation between variables 1 and 2 matches
//   the closed form within 1e-6.
fn unpenalized_partial_correlation_matches_closed_form() {
    // Arrange
    let cov = CovarianceMatrix::new(array![
        [1.0, 0.2, 0.8],
        [0.2, 1.0, 0.1],
        [0.8, 0.1, 1.0]
    ])
    .unwrap();
    let penalty = Penalty::scalar(0.0).unwrap();

    // Act
    let estimate = estimate_precision(&cov, &penalty, &tight_test_options())
        .expect("unpenalized 3x3 estimation should converge");
    let pcorr = partial_correlations(&estimate).expect("solver estimate is valid");

    // Assert
    let (r12, r13, r23): (f64, f64, f64) = (0.2, 0.8, 0.1);
    let closed_form = (r12 - r13 * r23) / ((1.0 - r13 * r13) * (1.0 - r23 * r23)).sqrt();
    assert_relative_eq!(pcorr[[0, 1]], closed_form, epsilon = 1e-6);
    assert_relative_eq!(pcorr[[1, 0]], closed_form, epsilon = 1e-6);
    assert_eq!(pcorr[[0, 0]], 0.0);
}

#[test]
// Purpose
// -------
// Verify structure recovery on synthetic data from a known sparse
// Gaussian Markov random field: a 3-variable chain X1–X2–X3 with
// X1 ⊥ X3 | X2.
//
// Given
// -----
// - n = 6000 seeded samples from the chain.
// - The sample covariance and ρ = 0.05 with baseline options.
//
// Expect
// ------
// - |partial corr(X1, X3)| < 0.05 (the absent edge).
// - Partial correlations for both adjacent pairs exceed 0.2 in absolute
//   value.
// - The variable graph contains exactly the two chain edges.
fn chain_structure_is_recovered_from_synthetic_samples() {
    // Arrange
    let samples = simulate_chain_samples(6000, 42);
    let cov = sample_covariance(&samples);
    let penalty = Penalty::scalar(0.05).unwrap();

    // Act
    let estimate = estimate_precision(&cov, &penalty, &default_test_options())
        .expect("chain estimation should converge");
    let pcorr = partial_correlations(&estimate).expect("solver estimate is valid");

    // Assert: partial-correlation pattern
    assert!(
        pcorr[[0, 2]].abs() < 0.05,
        "conditionally independent pair should be near zero, got {}",
        pcorr[[0, 2]]
    );
    assert!(pcorr[[0, 1]].abs() > 0.2, "adjacent pair (1, 2) should be clearly non-zero");
    assert!(pcorr[[1, 2]].abs() > 0.2, "adjacent pair (2, 3) should be clearly non-zero");

    // Assert: graph structure
    let labels: Vec<String> = ["x1", "x2", "x3"].iter().map(|s| s.to_string()).collect();
    let graph = build_variable_graph_with_tolerance(&estimate, &labels, 0.05);
    assert!(graph.has_edge("x1", "x2"));
    assert!(graph.has_edge("x2", "x3"));
    assert!(!graph.has_edge("x1", "x3"));
}

/// Build a graph with an explicit edge tolerance; thin wrapper shared by
/// the recovery test so the assertion block stays readable.
fn build_variable_graph_with_tolerance(
    estimate: &PrecisionEstimate, labels: &[String], tolerance: f64,
) -> rust_glasso::graph::builder::VariableGraph {
    let options = GraphOptions::new(tolerance).expect("test tolerance is valid");
    rust_glasso::graph::builder::build_variable_graph_with_options(estimate, labels, &options)
        .expect("labels are unique and sized to the estimate")
}

#[test]
// Purpose
// -------
// Verify the p = 2 boundary: the smallest admissible problem must not
// error, and a dominating penalty yields an edgeless 2-node graph while a
// small penalty keeps the single edge.
//
// Given
// -----
// - S = [[1, 0.5], [0.5, 1]] with ρ = 0.6 and ρ = 0.1.
//
// Expect
// ------
// - Both fits converge.
// - ρ = 0.6: zero edges; ρ = 0.1: exactly one edge with negative-free
//   lookup symmetry.
fn two_variable_boundary_is_supported() {
    let cov = CovarianceMatrix::new(array![[1.0, 0.5], [0.5, 1.0]]).unwrap();
    let labels: Vec<String> = ["left", "right"].iter().map(|s| s.to_string()).collect();

    let sparse = estimate_precision(
        &cov,
        &Penalty::scalar(0.6).unwrap(),
        &default_test_options(),
    )
    .expect("p = 2 with dominating penalty should converge");
    let sparse_graph = build_variable_graph(&sparse, &labels).unwrap();
    assert_eq!(sparse_graph.node_count(), 2);
    assert_eq!(sparse_graph.edge_count(), 0);

    let dense = estimate_precision(
        &cov,
        &Penalty::scalar(0.1).unwrap(),
        &default_test_options(),
    )
    .expect("p = 2 with small penalty should converge");
    let dense_graph = build_variable_graph(&dense, &labels).unwrap();
    assert_eq!(dense_graph.edge_count(), 1);
    assert_eq!(dense_graph.weight("left", "right"), dense_graph.weight("right", "left"));
}

#[test]
// Purpose
// -------
// Verify the flat row-major interchange end-to-end: an estimate that
// round-trips through `to_row_major` / `from_row_major` produces the same
// partial correlations and the same graph as the original.
//
// Given
// -----
// - The grid covariance estimated at ρ = 0.3.
//
// Expect
// ------
// - The reconstructed estimate carries the identical Θ.
// - Graphs built from the original and the reconstruction are equal, and
//   building twice from the same estimate is idempotent.
fn flat_interchange_preserves_graph_construction() {
    // Arrange
    let cov = grid_covariance();
    let penalty = Penalty::scalar(0.3).unwrap();
    let estimate = estimate_precision(&cov, &penalty, &default_test_options())
        .expect("grid fit should converge");
    let labels: Vec<String> =
        ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();

    // Act
    let (flat, dim) = estimate.to_row_major();
    let restored =
        PrecisionEstimate::from_row_major(flat, dim).expect("solver output is a valid fixture");

    // Assert
    assert_eq!(restored.theta(), estimate.theta());
    let original_graph = build_variable_graph(&estimate, &labels).unwrap();
    let restored_graph = build_variable_graph(&restored, &labels).unwrap();
    let repeated_graph = build_variable_graph(&estimate, &labels).unwrap();
    assert_eq!(original_graph, restored_graph);
    assert_eq!(original_graph, repeated_graph);
}
