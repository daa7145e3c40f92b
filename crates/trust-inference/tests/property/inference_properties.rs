//! Property tests for trust inference against a brute-force simple-path
//! enumerator, plus queue ordering against a sorted model.

use petgraph::algo::has_path_connecting;
use petgraph::stable_graph::NodeIndex;
use petgraph::visit::EdgeRef;
use proptest::prelude::*;

use trust_core::config::InferenceConfig;
use trust_inference::{expand_source, DualPriorityQueue, ExpansionParams, InferenceEngine, TrustGraph};

const MAX_NODES: usize = 6;

fn engine(n_paths: usize, reversed: bool) -> InferenceEngine {
    InferenceEngine::new(InferenceConfig {
        n_paths: Some(n_paths),
        reversed: Some(reversed),
        max_paths: None,
    })
}

fn graph_strategy() -> impl Strategy<Value = TrustGraph> {
    (2..=MAX_NODES).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, 0.05_f64..=1.0_f64), 0..n * 2)
            .prop_map(move |edges| TrustGraph::from_edges(n, &edges))
    })
}

/// Every simple path from `source`, as the ordered list of edge trusts.
fn simple_paths(graph: &TrustGraph, source: NodeIndex) -> Vec<(NodeIndex, Vec<f64>)> {
    fn walk(
        graph: &TrustGraph,
        head: NodeIndex,
        on_path: &mut Vec<NodeIndex>,
        trusts: &mut Vec<f64>,
        out: &mut Vec<(NodeIndex, Vec<f64>)>,
    ) {
        for edge in graph.graph.edges(head) {
            let next = edge.target();
            if on_path.contains(&next) {
                continue;
            }
            on_path.push(next);
            trusts.push(edge.weight().trust);
            out.push((next, trusts.clone()));
            walk(graph, next, on_path, trusts, out);
            trusts.pop();
            on_path.pop();
        }
    }

    let mut out = Vec::new();
    walk(graph, source, &mut vec![source], &mut Vec::new(), &mut out);
    out
}

/// Exhaustive trust row: forward weights exclude the last edge, reversed
/// weights exclude the first.
fn brute_force_row(graph: &TrustGraph, source: NodeIndex, reversed: bool) -> Vec<f64> {
    let bound = graph.node_bound();
    let mut trust = vec![0.0; bound];
    let mut weight_sum = vec![0.0; bound];
    for (target, trusts) in simple_paths(graph, source) {
        let value: f64 = trusts.iter().product();
        let weight: f64 = if reversed {
            trusts[1..].iter().product()
        } else {
            trusts[..trusts.len() - 1].iter().product()
        };
        weight_sum[target.index()] += weight;
        trust[target.index()] += weight * value;
    }
    for (t, ws) in trust.iter_mut().zip(&weight_sum) {
        if *ws > 0.0 {
            *t /= ws;
        }
    }
    trust
}

fn max_edge_trust(graph: &TrustGraph) -> f64 {
    graph.graph.edge_weights().map(|e| e.trust).fold(0.0, f64::max)
}

proptest! {
    #[test]
    fn uncapped_matches_exhaustive_enumeration(graph in graph_strategy(), reversed in any::<bool>()) {
        let m = engine(0, reversed).infer_all(&graph).unwrap();
        for v in graph.graph.node_indices() {
            let expected = brute_force_row(&graph, v, reversed);
            for (w, exp) in expected.iter().enumerate() {
                let got = m.get(v, NodeIndex::new(w));
                prop_assert!((got - exp).abs() < 1e-9, "t[{}][{}] = {} expected {}", v.index(), w, got, exp);
            }
        }
    }

    #[test]
    fn stored_paths_are_simple_and_connected(graph in graph_strategy(), n_paths in 0_usize..6, reversed in any::<bool>()) {
        let params = ExpansionParams::new(n_paths, reversed);
        for v in graph.graph.node_indices() {
            let e = expand_source(&graph, v, &params, None).unwrap();
            for (_, path) in e.paths.iter() {
                prop_assert_eq!(path.vertex_count(), path.hops() + 1);
                let mut head = v;
                let mut seen = vec![v];
                for &edge in &path.edges {
                    let (from, to) = graph.graph.edge_endpoints(edge).unwrap();
                    prop_assert_eq!(from, head);
                    prop_assert!(!seen.contains(&to), "vertex {} repeated", to.index());
                    seen.push(to);
                    head = to;
                }
                prop_assert_eq!(head, path.head);
            }
        }
    }

    #[test]
    fn increasing_cap_converges_to_uncapped(graph in graph_strategy(), reversed in any::<bool>()) {
        let exhaustive = engine(0, reversed).infer_all(&graph).unwrap();
        let count = graph
            .graph
            .node_indices()
            .map(|v| simple_paths(&graph, v).len())
            .max()
            .unwrap_or(0)
            .max(1);

        // Once a cap reproduces the exhaustive matrix, every larger cap does too.
        let mut stable_from = None;
        for k in 1..=count {
            let capped = engine(k, reversed).infer_all(&graph).unwrap();
            match stable_from {
                Some(from) => prop_assert_eq!(&capped, &exhaustive, "k = {} diverged after stabilizing at {}", k, from),
                None if capped == exhaustive => stable_from = Some(k),
                None => {}
            }
        }
        prop_assert!(stable_from.is_some(), "no cap up to {} matched the uncapped result", count);
    }

    #[test]
    fn kept_set_never_exceeds_cap(graph in graph_strategy(), n_paths in 1_usize..5) {
        let params = ExpansionParams::new(n_paths, false);
        for v in graph.graph.node_indices() {
            let e = expand_source(&graph, v, &params, None).unwrap();
            prop_assert!(e.kept.len() <= n_paths);
        }
    }

    #[test]
    fn trust_bounded_by_max_edge(graph in graph_strategy(), n_paths in 0_usize..4, reversed in any::<bool>()) {
        let m = engine(n_paths, reversed).infer_all(&graph).unwrap();
        let max = max_edge_trust(&graph);
        for v in graph.graph.node_indices() {
            prop_assert_eq!(m.get(v, v), 0.0);
            for w in graph.graph.node_indices() {
                let t = m.get(v, w);
                prop_assert!(t >= 0.0 && t <= max + 1e-12, "t = {} max = {}", t, max);
            }
        }
    }

    #[test]
    fn unreachable_pairs_have_no_weight(graph in graph_strategy(), n_paths in 0_usize..4) {
        let params = ExpansionParams::new(n_paths, false);
        for v in graph.graph.node_indices() {
            let e = expand_source(&graph, v, &params, None).unwrap();
            for w in graph.graph.node_indices() {
                if w != v && !has_path_connecting(&graph.graph, v, w, None) {
                    prop_assert_eq!(e.weight_sum[w.index()], 0.0);
                    prop_assert_eq!(e.trust[w.index()], 0.0);
                }
            }
        }
    }

    #[test]
    fn queue_matches_sorted_model(ops in prop::collection::vec((0_u8..4, 0_u32..100), 0..300)) {
        let mut queue = DualPriorityQueue::new();
        let mut model: Vec<u32> = Vec::new();
        for (op, value) in ops {
            match op {
                0 | 1 => {
                    queue.push(value);
                    let at = model.partition_point(|&x| x <= value);
                    model.insert(at, value);
                }
                2 => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(queue.pop_smallest(), expected);
                }
                _ => prop_assert_eq!(queue.pop_largest(), model.pop()),
            }
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.peek_smallest(), model.first());
            prop_assert_eq!(queue.peek_largest(), model.last());
        }
    }
}
