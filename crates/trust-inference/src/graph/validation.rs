//! Input validation. Runs before expansion so bad input never produces a
//! partially computed matrix.

use petgraph::stable_graph::NodeIndex;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use trust_core::errors::GraphError;

use super::trust_graph::TrustGraph;

/// Check every edge trust is finite and in (0, 1].
pub fn validate_graph(graph: &TrustGraph) -> Result<(), GraphError> {
    for edge in graph.graph.edge_references() {
        let value = edge.weight().trust;
        if !is_valid_trust(value) {
            return Err(GraphError::InvalidEdgeTrust {
                edge: edge.id().index(),
                source_node: edge.source().index(),
                target_node: edge.target().index(),
                value,
            });
        }
    }
    Ok(())
}

/// Check a source vertex is in range and live.
pub fn validate_source(graph: &TrustGraph, source: NodeIndex) -> Result<(), GraphError> {
    if !graph.contains(source) {
        return Err(GraphError::InvalidSource {
            index: source.index(),
            bound: graph.node_bound(),
        });
    }
    Ok(())
}

fn is_valid_trust(value: f64) -> bool {
    value.is_finite() && value > 0.0 && value <= 1.0
}
