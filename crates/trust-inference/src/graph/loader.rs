//! JSON edge-list loader.
//!
//! ```json
//! { "nodes": ["alice", "bob"],
//!   "edges": [{ "source": "alice", "target": "bob", "trust": 0.8 }] }
//! ```
//!
//! `nodes` is optional and only fixes vertex order; edge endpoints are
//! created on first use.

use std::path::Path;

use serde::Deserialize;
use trust_core::errors::GraphError;

use super::trust_graph::TrustGraph;

#[derive(Debug, Deserialize)]
struct EdgeListDocument {
    #[serde(default)]
    nodes: Vec<String>,
    #[serde(default)]
    edges: Vec<EdgeRecord>,
}

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    source: String,
    target: String,
    trust: Option<f64>,
}

impl TrustGraph {
    /// Parse a JSON edge list. Edges without a `trust` value are rejected,
    /// never defaulted. Range checks are left to `validate_graph`.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        let doc: EdgeListDocument =
            serde_json::from_str(json).map_err(|e| GraphError::Parse(e.to_string()))?;

        let mut graph = TrustGraph::new();
        for label in &doc.nodes {
            graph.ensure_node(label);
        }
        for edge in doc.edges {
            let trust = edge.trust.ok_or_else(|| GraphError::MissingEdgeTrust {
                source_label: edge.source.clone(),
                target_label: edge.target.clone(),
            })?;
            graph.connect(&edge.source, &edge.target, trust);
        }
        Ok(graph)
    }

    /// Read and parse a JSON edge-list file.
    pub fn from_json_file(path: &Path) -> Result<Self, GraphError> {
        let json = std::fs::read_to_string(path).map_err(|e| GraphError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }
}
