//! Append-only path arena. Queues refer to paths by `PathId`, so pruning
//! decisions never copy path data and a handle stays valid for the whole
//! per-source run.

use petgraph::stable_graph::{EdgeIndex, NodeIndex};
use trust_core::types::{FxHashSet, SmallVec8};

/// Stable handle into a `PathStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathId(pub usize);

/// A simple path grown outward from one origin vertex.
#[derive(Debug, Clone)]
pub struct Path {
    /// Cumulative trust product from the origin to the terminal vertex.
    pub value: f64,
    /// Ranking and averaging weight; see `expansion` for the forward and
    /// reversed rules.
    pub weight: f64,
    /// Vertices on the path, origin included. Never holds a repeat.
    pub visited: FxHashSet<NodeIndex>,
    /// Traversed edges in order. Empty for the seed path.
    pub edges: SmallVec8<EdgeIndex>,
    /// Terminal vertex.
    pub head: NodeIndex,
}

impl Path {
    /// The trivial zero-edge path at `origin`.
    pub fn seed(origin: NodeIndex) -> Self {
        let mut visited = FxHashSet::default();
        visited.insert(origin);
        Self {
            value: 1.0,
            weight: 1.0,
            visited,
            edges: SmallVec8::new(),
            head: origin,
        }
    }

    /// Number of edges.
    pub fn hops(&self) -> usize {
        self.edges.len()
    }

    /// Number of vertices on the path (hops + 1).
    pub fn vertex_count(&self) -> usize {
        self.visited.len()
    }

    pub fn is_seed(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, vertex: NodeIndex) -> bool {
        self.visited.contains(&vertex)
    }

    /// Record one more hop along `edge` to `target`.
    pub fn extend(&mut self, edge: EdgeIndex, target: NodeIndex) {
        self.visited.insert(target);
        self.edges.push(edge);
        self.head = target;
    }
}

/// Arena of path records. Paths are appended, never removed.
#[derive(Debug, Default)]
pub struct PathStore {
    paths: Vec<Path>,
}

impl PathStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a path and return its handle.
    pub fn insert(&mut self, path: Path) -> PathId {
        self.paths.push(path);
        PathId(self.paths.len() - 1)
    }

    /// Panics on a handle this store did not issue.
    pub fn get(&self, id: PathId) -> &Path {
        &self.paths[id.0]
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PathId, &Path)> {
        self.paths.iter().enumerate().map(|(i, p)| (PathId(i), p))
    }
}

impl std::ops::Index<PathId> for PathStore {
    type Output = Path;

    fn index(&self, id: PathId) -> &Path {
        self.get(id)
    }
}
