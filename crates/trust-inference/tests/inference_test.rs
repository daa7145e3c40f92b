//! Inference behavior: worked examples, weighting modes, caps, validation.

use petgraph::stable_graph::NodeIndex;
use trust_core::config::{InferenceConfig, TrustConfig};
use trust_core::errors::{GraphError, InferenceError};
use trust_inference::{expand_source, ExpansionParams, InferenceEngine, Source, TrustGraph};

// ═══════════════════════════════════════════════════════════════════════════
// HELPERS
// ═══════════════════════════════════════════════════════════════════════════

fn n(i: usize) -> NodeIndex {
    NodeIndex::new(i)
}

fn engine(n_paths: usize, reversed: bool) -> InferenceEngine {
    InferenceEngine::new(InferenceConfig {
        n_paths: Some(n_paths),
        reversed: Some(reversed),
        max_paths: None,
    })
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {expected}, got {actual}"
    );
}

fn diamond() -> TrustGraph {
    TrustGraph::from_edges(4, &[(0, 1, 0.6), (0, 2, 0.4), (1, 3, 1.0), (2, 3, 1.0)])
}

// ═══════════════════════════════════════════════════════════════════════════
// Worked examples
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn chain_forward_uncapped() {
    let g = TrustGraph::from_edges(3, &[(0, 1, 0.5), (1, 2, 0.8)]);
    let m = engine(0, false).infer(&g, Source::Single(n(0))).unwrap();
    assert_close(m.get(n(0), n(1)), 0.5);
    assert_close(m.get(n(0), n(2)), 0.4);
    assert_eq!(m.get(n(0), n(0)), 0.0);
}

#[test]
fn diamond_forward_uncapped() {
    let m = engine(0, false).infer(&diamond(), Source::Single(n(0))).unwrap();
    assert_close(m.get(n(0), n(1)), 0.6);
    assert_close(m.get(n(0), n(2)), 0.4);
    assert_close(m.get(n(0), n(3)), (0.6 * 0.6 + 0.4 * 0.4) / (0.6 + 0.4));
}

#[test]
fn diamond_reversed_uncapped() {
    // Both two-hop paths weigh the second edge (1.0) and carry value .6 / .4.
    let m = engine(0, true).infer(&diamond(), Source::Single(n(0))).unwrap();
    assert_close(m.get(n(0), n(3)), 0.5);
}

#[test]
fn infer_from_matches_matrix_row() {
    let e = engine(0, false);
    let g = diamond();
    let row = e.infer_from(&g, n(0)).unwrap();
    let m = e.infer_all(&g).unwrap();
    assert_eq!(m.row(n(0)), Some(row.as_slice()));
}

#[test]
fn trust_between_single_target() {
    let t = engine(0, false).trust_between(&diamond(), n(0), n(3)).unwrap();
    assert_close(t, 0.52);
}

#[test]
fn trust_between_unknown_target_rejected() {
    let err = engine(0, false)
        .trust_between(&diamond(), n(0), n(42))
        .unwrap_err();
    assert!(matches!(err, InferenceError::Graph(GraphError::InvalidSource { index: 42, .. })));
}

// ═══════════════════════════════════════════════════════════════════════════
// Reachability and diagonal
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn unreachable_destinations_stay_zero() {
    // 3 only points into the component; nothing reaches it.
    let g = TrustGraph::from_edges(4, &[(0, 1, 0.9), (1, 2, 0.9), (3, 0, 0.9)]);
    let expansion = expand_source(&g, n(0), &ExpansionParams::new(0, false), None).unwrap();
    assert_eq!(expansion.weight_sum[3], 0.0);
    let row = expansion.normalized();
    assert_eq!(row[3], 0.0);
    assert_eq!(row[0], 0.0);
}

#[test]
fn isolated_vertex_row_is_all_zero() {
    let g = TrustGraph::from_edges(3, &[(0, 1, 0.5)]);
    let m = engine(0, false).infer_all(&g).unwrap();
    assert!(m.row(n(2)).unwrap().iter().all(|&t| t == 0.0));
}

#[test]
fn diagonal_is_zero_on_cycles() {
    let g = TrustGraph::from_edges(3, &[(0, 1, 0.9), (1, 2, 0.9), (2, 0, 0.9)]);
    let m = engine(0, false).infer_all(&g).unwrap();
    for v in 0..3 {
        assert_eq!(m.get(n(v), n(v)), 0.0);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Parallel edges
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn parallel_edges_each_contribute() {
    let mut g = TrustGraph::new();
    g.connect("a", "b", 0.2);
    g.connect("a", "b", 0.8);
    let a = g.get_node("a").unwrap();
    let b = g.get_node("b").unwrap();
    let e = expand_source(&g, a, &ExpansionParams::new(0, false), None).unwrap();
    assert_close(e.weight_sum[b.index()], 2.0);
    assert_close(e.normalized()[b.index()], 0.5);
}

// ═══════════════════════════════════════════════════════════════════════════
// Caps
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn large_cap_equals_uncapped() {
    let g = TrustGraph::from_edges(
        5,
        &[(0, 1, 0.9), (0, 2, 0.5), (1, 2, 0.7), (2, 3, 0.6), (1, 3, 0.4), (3, 4, 0.8), (2, 4, 0.3)],
    );
    let exhaustive = engine(0, false).infer_all(&g).unwrap();
    let wide = engine(10_000, false).infer_all(&g).unwrap();
    assert_eq!(exhaustive, wide);
}

#[test]
fn small_cap_prunes_deep_paths() {
    // Forward: 0->1->2->3 needs the two-hop path to survive growth.
    let g = TrustGraph::from_edges(4, &[(0, 1, 0.5), (1, 2, 0.5), (2, 3, 0.5)]);
    let full = engine(0, false).infer_from(&g, n(0)).unwrap();
    let capped = engine(1, false).infer_from(&g, n(0)).unwrap();
    assert_close(full[3], 0.125);
    assert_eq!(capped[3], 0.0);
    // Contributions made before pruning are kept.
    assert_close(capped[2], full[2]);
}

#[test]
fn path_limit_surfaces_as_error() {
    let edges: Vec<(usize, usize, f64)> = (0..7)
        .flat_map(|a| (0..7).filter(move |&b| b != a).map(move |b| (a, b, 0.9)))
        .collect();
    let g = TrustGraph::from_edges(7, &edges);
    let e = InferenceEngine::new(InferenceConfig {
        n_paths: Some(0),
        reversed: None,
        max_paths: Some(500),
    });
    let err = e.infer_all(&g).unwrap_err();
    assert!(matches!(err, InferenceError::PathLimitExceeded { limit: 500, .. }));
}

// ═══════════════════════════════════════════════════════════════════════════
// Determinism and configuration
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn repeated_runs_are_bit_identical() {
    let g = TrustGraph::from_edges(
        6,
        &[(0, 1, 0.31), (1, 2, 0.77), (2, 0, 0.5), (2, 3, 0.9), (3, 4, 0.1), (4, 5, 0.6), (5, 1, 0.45), (0, 4, 0.2)],
    );
    for n_paths in [0, 1, 3] {
        let e = engine(n_paths, false);
        let first = e.infer_all(&g).unwrap();
        for _ in 0..5 {
            let again = e.infer_all(&g).unwrap();
            let same = (0..6).all(|v| {
                (0..6).all(|w| first.get(n(v), n(w)).to_bits() == again.get(n(v), n(w)).to_bits())
            });
            assert!(same, "run differed for n_paths={n_paths}");
        }
    }
}

#[test]
fn engine_from_toml_config() {
    let config = TrustConfig::from_toml(
        r#"
[inference]
n_paths = 0
reversed = true

[runtime]
threads = 2
"#,
    )
    .unwrap();
    let e = InferenceEngine::from_config(&config);
    assert!(e.params().reversed);
    let m = e.infer(&diamond(), Source::All).unwrap();
    assert_close(m.get(n(0), n(3)), 0.5);
}

#[test]
fn json_loaded_graph_end_to_end() {
    let g = TrustGraph::from_json(
        r#"{"edges": [{"source": "alice", "target": "bob", "trust": 0.5},
                      {"source": "bob", "target": "carol", "trust": 0.8}]}"#,
    )
    .unwrap();
    let alice = g.get_node("alice").unwrap();
    let carol = g.get_node("carol").unwrap();
    let t = engine(0, false).trust_between(&g, alice, carol).unwrap();
    assert_close(t, 0.4);
}
