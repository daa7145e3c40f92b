//! Per-source best-first path expansion.
//!
//! Starting from a seed path at the source, the frontier repeatedly yields
//! its highest-ranked path. Every path popped (except the seed) joins the
//! kept set; with a cap K the kept set drops its lowest-ranked member once
//! it holds more than K. Each popped path is grown along every out-edge of
//! its head that does not revisit a vertex, and every grown path makes its
//! contribution to the destination immediately. Whether a grown path is
//! itself grown further depends on whether it could still make the kept set.
//!
//! Weighting, for a parent `p` extended along an edge with trust `c`:
//! - forward: `weight = p.value`, `value = p.value * c`
//! - reversed: `weight = p.weight * c` except on the first hop, where the
//!   seed weight of 1 is kept; `value = p.value * c`
//!
//! Contributions: `weight_sum[a] += weight`, `trust[a] += weight * value`.

use petgraph::stable_graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::debug;
use trust_core::config::InferenceConfig;
use trust_core::errors::InferenceError;
use trust_core::traits::{Cancellable, CancellationToken};
use trust_core::types::SmallVec8;

use crate::graph::TrustGraph;
use crate::normalize::normalize_row;
use crate::paths::{Path, PathId, PathRank, PathStore};
use crate::queue::DualPriorityQueue;

/// Parameters of one per-source expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionParams {
    /// Cap K on the kept set. 0 = uncapped: every discovered path is grown.
    ///
    /// With K = 0 the keep-growing test is skipped outright. Comparing a new
    /// path against the bottom of an unbounded kept set, as the capped rule
    /// does, would stop forward expansion after the first hop below 1.0, so
    /// K = 0 would not match the limit of large K.
    pub n_paths: usize,
    /// Reversed weighting.
    pub reversed: bool,
    /// Hard limit on stored paths; exceeding it fails the run.
    pub max_paths: Option<usize>,
}

impl ExpansionParams {
    pub fn new(n_paths: usize, reversed: bool) -> Self {
        Self {
            n_paths,
            reversed,
            max_paths: None,
        }
    }

    pub fn with_max_paths(mut self, limit: usize) -> Self {
        self.max_paths = Some(limit);
        self
    }

    pub fn is_capped(&self) -> bool {
        self.n_paths > 0
    }
}

impl From<&InferenceConfig> for ExpansionParams {
    fn from(config: &InferenceConfig) -> Self {
        Self {
            n_paths: config.effective_n_paths(),
            reversed: config.effective_reversed(),
            max_paths: config.max_paths,
        }
    }
}

/// Counters for one per-source expansion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpansionStats {
    /// Paths that contributed to a destination.
    pub discovered: usize,
    /// Paths popped from the frontier and grown (seed included).
    pub expanded: usize,
    /// Paths that contributed but were not grown further.
    pub pruned: usize,
    /// Paths dropped from the kept set by the cap.
    pub evicted: usize,
    /// Evictions that hit the path just popped, which is then not grown.
    pub self_evicted: usize,
}

/// Raw result of expanding one source, before normalization.
#[derive(Debug)]
pub struct Expansion {
    pub source: NodeIndex,
    /// Accumulated `weight * value` per destination.
    pub trust: Vec<f64>,
    /// Accumulated `weight` per destination.
    pub weight_sum: Vec<f64>,
    /// Every path that was queued for growth, seed at `PathId(0)`.
    pub paths: PathStore,
    /// Final kept set, highest rank first.
    pub kept: Vec<PathId>,
    pub stats: ExpansionStats,
}

impl Expansion {
    /// Normalized trust row for this source.
    pub fn normalized(mut self) -> Vec<f64> {
        normalize_row(&mut self.trust, &self.weight_sum);
        self.trust
    }

    /// Number of destinations that received any contribution.
    pub fn reached(&self) -> usize {
        self.weight_sum.iter().filter(|&&w| w > 0.0).count()
    }
}

/// Expand all simple paths from `source` that the cap allows.
///
/// The caller validates the graph and the source beforehand.
pub fn expand_source(
    graph: &TrustGraph,
    source: NodeIndex,
    params: &ExpansionParams,
    cancel: Option<&CancellationToken>,
) -> Result<Expansion, InferenceError> {
    let bound = graph.node_bound();
    let mut trust = vec![0.0; bound];
    let mut weight_sum = vec![0.0; bound];
    let mut paths = PathStore::new();
    let mut frontier = DualPriorityQueue::new();
    let mut kept: DualPriorityQueue<PathRank> = DualPriorityQueue::new();
    let mut stats = ExpansionStats::default();

    let seed = paths.insert(Path::seed(source));
    frontier.push(PathRank::of(&paths, seed));

    while let Some(top) = frontier.pop_largest() {
        if cancel.is_some_and(|c| c.is_cancelled()) {
            return Err(InferenceError::Cancelled);
        }

        let pi = top.id;
        if !paths[pi].is_seed() {
            kept.push(top);
        }

        if params.is_capped() && kept.len() > params.n_paths {
            if let Some(bottom) = kept.pop_smallest() {
                stats.evicted += 1;
                if bottom.id == pi {
                    // Contribution already counted; not worth growing.
                    stats.self_evicted += 1;
                    continue;
                }
            }
        }
        stats.expanded += 1;

        let parent = &paths[pi];
        let out_edges: SmallVec8<(EdgeIndex, NodeIndex, f64)> = graph
            .graph
            .edges(parent.head)
            .filter(|e| !parent.contains(e.target()))
            .map(|e| (e.id(), e.target(), e.weight().trust))
            .collect();

        for (edge, target, c) in out_edges {
            let mut np = paths[pi].clone();
            if params.reversed {
                if np.vertex_count() > 1 {
                    np.weight *= c;
                }
                np.value *= c;
            } else {
                np.weight = np.value;
                np.value *= c;
            }

            weight_sum[target.index()] += np.weight;
            trust[target.index()] += np.weight * np.value;
            stats.discovered += 1;

            np.extend(edge, target);

            let keep_growing = !params.is_capped()
                || kept.len() < params.n_paths
                || kept
                    .peek_smallest()
                    .map_or(true, |bottom| np.weight >= bottom.weight);

            if keep_growing {
                if let Some(limit) = params.max_paths {
                    if paths.len() >= limit {
                        return Err(InferenceError::PathLimitExceeded {
                            source_node: source.index(),
                            limit,
                        });
                    }
                }
                let id = paths.insert(np);
                frontier.push(PathRank::of(&paths, id));
            } else {
                stats.pruned += 1;
            }
        }
    }

    let kept: Vec<PathId> = std::iter::from_fn(|| kept.pop_largest().map(|r| r.id)).collect();

    debug!(
        source = source.index(),
        discovered = stats.discovered,
        expanded = stats.expanded,
        pruned = stats.pruned,
        evicted = stats.evicted,
        paths_stored = paths.len(),
        "source expanded"
    );

    Ok(Expansion {
        source,
        trust,
        weight_sum,
        paths,
        kept,
        stats,
    })
}
