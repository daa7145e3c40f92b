//! Path priority.
//!
//! Higher weight ranks higher. Among equal weights the shorter path ranks
//! higher, favouring short attestation chains. Remaining ties go to the
//! earlier handle, so the order is total and runs are reproducible.

use std::cmp::Ordering;

use super::store::{PathId, PathStore};

/// Snapshot of the fields that order a path. Path records are immutable once
/// stored, so the snapshot never goes stale.
#[derive(Debug, Clone, Copy)]
pub struct PathRank {
    pub weight: f64,
    pub len: usize,
    pub id: PathId,
}

impl PathRank {
    /// Rank of a stored path.
    pub fn of(store: &PathStore, id: PathId) -> Self {
        let path = store.get(id);
        Self {
            weight: path.weight,
            len: path.vertex_count(),
            id,
        }
    }
}

impl PartialEq for PathRank {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PathRank {}

impl PartialOrd for PathRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PathRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| other.len.cmp(&self.len))
            .then_with(|| other.id.cmp(&self.id))
    }
}
