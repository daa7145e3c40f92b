//! Result matrix of inferred trust, indexed `[source][destination]`.

use petgraph::stable_graph::NodeIndex;
use serde::{Deserialize, Serialize};

/// Dense trust matrix of order `node_bound`. Only requested sources have a
/// row; every other entry reads as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustMatrix {
    order: usize,
    rows: Vec<Vec<f64>>,
}

impl TrustMatrix {
    /// An all-zero matrix with no computed rows.
    pub fn new(order: usize) -> Self {
        Self {
            order,
            rows: vec![Vec::new(); order],
        }
    }

    /// Number of rows and columns.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Inferred trust from `source` toward `target`.
    pub fn get(&self, source: NodeIndex, target: NodeIndex) -> f64 {
        self.rows
            .get(source.index())
            .and_then(|row| row.get(target.index()))
            .copied()
            .unwrap_or(0.0)
    }

    /// The computed row for `source`, if it was requested.
    pub fn row(&self, source: NodeIndex) -> Option<&[f64]> {
        self.rows
            .get(source.index())
            .filter(|row| !row.is_empty())
            .map(Vec::as_slice)
    }

    pub fn is_computed(&self, source: NodeIndex) -> bool {
        self.row(source).is_some()
    }

    /// Sources with a computed row, ascending.
    pub fn sources(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.is_empty())
            .map(|(i, _)| NodeIndex::new(i))
    }

    /// Largest entry, 0 for an empty matrix.
    pub fn max_value(&self) -> f64 {
        self.rows.iter().flatten().copied().fold(0.0, f64::max)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub(crate) fn set_row(&mut self, source: NodeIndex, row: Vec<f64>) {
        debug_assert_eq!(row.len(), self.order);
        self.rows[source.index()] = row;
    }
}
