//! petgraph::StableGraph wrapper with TrustNode and TrustEdge types.

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::NodeIndexable;
use petgraph::Directed;
use serde::{Deserialize, Serialize};
use trust_core::types::FxHashMap;

/// A vertex in the trust graph, e.g. an agent or a key holder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustNode {
    pub label: String,
}

/// Direct, one-hop trust from the edge's source to its target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrustEdge {
    /// Trust weight, expected in (0, 1]. Checked by `validate_graph`.
    pub trust: f64,
}

/// The underlying directed graph type.
pub type TrustStableGraph = StableGraph<TrustNode, TrustEdge, Directed>;

/// Wrapper providing label-indexed access to the trust graph.
///
/// Vertex indices are stable across removals, so a removed vertex leaves a
/// hole below `node_bound()`. Result matrices are indexed by `node_bound()`
/// and holes read as zero trust.
#[derive(Debug, Clone)]
pub struct TrustGraph {
    /// The petgraph stable graph.
    pub graph: TrustStableGraph,
    /// Map from label → NodeIndex for O(1) lookup.
    pub node_index: FxHashMap<String, NodeIndex>,
}

impl TrustGraph {
    /// Create an empty trust graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: FxHashMap::default(),
        }
    }

    /// Build a graph from `(source, target, trust)` triples over vertices
    /// `0..node_count`. Vertices are labelled by their index; endpoints past
    /// `node_count` grow the vertex set.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize, f64)]) -> Self {
        let bound = edges
            .iter()
            .map(|&(s, t, _)| s.max(t) + 1)
            .max()
            .unwrap_or(0)
            .max(node_count);

        let mut graph = Self::new();
        let nodes: Vec<NodeIndex> = (0..bound).map(|i| graph.ensure_node(&i.to_string())).collect();
        for &(s, t, trust) in edges {
            graph.add_trust_edge(nodes[s], nodes[t], trust);
        }
        graph
    }

    /// Get or create a node with the given label.
    pub fn ensure_node(&mut self, label: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(label) {
            return idx;
        }
        let idx = self.graph.add_node(TrustNode {
            label: label.to_string(),
        });
        self.node_index.insert(label.to_string(), idx);
        idx
    }

    /// Add a directed trust edge between existing nodes.
    /// Parallel edges are allowed; each contributes its own paths.
    pub fn add_trust_edge(&mut self, source: NodeIndex, target: NodeIndex, trust: f64) -> EdgeIndex {
        self.graph.add_edge(source, target, TrustEdge { trust })
    }

    /// Add a trust edge between labelled nodes, creating them as needed.
    pub fn connect(&mut self, source: &str, target: &str, trust: f64) -> EdgeIndex {
        let s = self.ensure_node(source);
        let t = self.ensure_node(target);
        self.add_trust_edge(s, t, trust)
    }

    /// Look up a node index by label.
    pub fn get_node(&self, label: &str) -> Option<NodeIndex> {
        self.node_index.get(label).copied()
    }

    /// Label of a live node.
    pub fn label(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(|n| n.label.as_str())
    }

    /// Remove a node and all its edges. Its index becomes a hole.
    pub fn remove_node(&mut self, label: &str) -> bool {
        if let Some(idx) = self.node_index.remove(label) {
            self.graph.remove_node(idx);
            true
        } else {
            false
        }
    }

    /// Whether `idx` refers to a live node.
    pub fn contains(&self, idx: NodeIndex) -> bool {
        self.graph.contains_node(idx)
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// One past the highest live node index; the row/column count of results.
    pub fn node_bound(&self) -> usize {
        NodeIndexable::node_bound(&self.graph)
    }
}

impl Default for TrustGraph {
    fn default() -> Self {
        Self::new()
    }
}
