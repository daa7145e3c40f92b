//! Inference engine: validates input, fans per-source expansion out over
//! rayon workers, and assembles the normalized rows into a `TrustMatrix`.
//!
//! Sources share only read access to the graph; each task owns its path
//! store, queues and accumulators and produces one disjoint row.

use std::path::Path;
use std::time::Instant;

use petgraph::stable_graph::NodeIndex;
use rayon::prelude::*;
use tracing::{info, instrument, warn};
use trust_core::config::{ConfigOverrides, InferenceConfig, RuntimeConfig, TrustConfig};
use trust_core::errors::{GraphError, InferenceError};
use trust_core::traits::CancellationToken;

use crate::expansion::{expand_source, ExpansionParams};
use crate::graph::{validate_graph, validate_source, TrustGraph};
use crate::matrix::TrustMatrix;

/// Which sources to compute rows for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    All,
    Single(NodeIndex),
}

impl Source {
    /// Negative indices select every vertex.
    pub fn from_index(index: i64) -> Self {
        match usize::try_from(index) {
            Ok(i) => Self::Single(NodeIndex::new(i)),
            Err(_) => Self::All,
        }
    }
}

/// Runs trust inference with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct InferenceEngine {
    config: InferenceConfig,
    runtime: RuntimeConfig,
    cancel: Option<CancellationToken>,
}

impl InferenceEngine {
    pub fn new(config: InferenceConfig) -> Self {
        Self {
            config,
            runtime: RuntimeConfig::default(),
            cancel: None,
        }
    }

    pub fn from_config(config: &TrustConfig) -> Self {
        Self {
            config: config.inference.clone(),
            runtime: config.runtime.clone(),
            cancel: None,
        }
    }

    /// Build an engine from `trust.toml` under `root`, environment
    /// overrides and `overrides`, in that order of increasing priority.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, InferenceError> {
        let config = TrustConfig::load(root, overrides)?;
        Ok(Self::from_config(&config))
    }

    pub fn with_runtime(mut self, runtime: RuntimeConfig) -> Self {
        self.runtime = runtime;
        self
    }

    /// Abort runs when `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    pub fn params(&self) -> ExpansionParams {
        ExpansionParams::from(&self.config)
    }

    /// Compute trust rows for the requested sources.
    #[instrument(skip(self, graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
    pub fn infer(&self, graph: &TrustGraph, source: Source) -> Result<TrustMatrix, InferenceError> {
        validate_graph(graph)?;
        let sources: Vec<NodeIndex> = match source {
            Source::All => graph.graph.node_indices().collect(),
            Source::Single(v) => {
                validate_source(graph, v)?;
                vec![v]
            }
        };

        let params = self.params();
        if self.config.is_uncapped() && graph.node_count() > self.runtime.effective_uncapped_warn_nodes() {
            warn!(
                nodes = graph.node_count(),
                "uncapped trust inference enumerates every simple path; memory is unbounded"
            );
        }

        let start = Instant::now();
        let cancel = self.cancel.as_ref();
        let rows = self.run_in_pool(|| {
            sources
                .par_iter()
                .map(|&v| expand_source(graph, v, &params, cancel).map(|e| (v, e.normalized())))
                .collect::<Result<Vec<_>, InferenceError>>()
        })??;

        let mut matrix = TrustMatrix::new(graph.node_bound());
        for (v, row) in rows {
            matrix.set_row(v, row);
        }

        info!(
            sources = sources.len(),
            n_paths = params.n_paths,
            reversed = params.reversed,
            inference_time_ms = start.elapsed().as_millis() as u64,
            "trust inference complete"
        );
        Ok(matrix)
    }

    /// Trust rows for every vertex.
    pub fn infer_all(&self, graph: &TrustGraph) -> Result<TrustMatrix, InferenceError> {
        self.infer(graph, Source::All)
    }

    /// Normalized trust row for one source, indexed by destination.
    pub fn infer_from(&self, graph: &TrustGraph, source: NodeIndex) -> Result<Vec<f64>, InferenceError> {
        validate_graph(graph)?;
        validate_source(graph, source)?;
        let expansion = expand_source(graph, source, &self.params(), self.cancel.as_ref())?;
        Ok(expansion.normalized())
    }

    /// Inferred trust from `source` toward a single `target`.
    pub fn trust_between(
        &self,
        graph: &TrustGraph,
        source: NodeIndex,
        target: NodeIndex,
    ) -> Result<f64, InferenceError> {
        validate_source(graph, target)?;
        let row = self.infer_from(graph, source)?;
        Ok(row[target.index()])
    }

    /// Inferred trust between two labelled vertices.
    pub fn trust_between_labels(
        &self,
        graph: &TrustGraph,
        source: &str,
        target: &str,
    ) -> Result<f64, InferenceError> {
        let resolve = |label: &str| {
            graph
                .get_node(label)
                .ok_or_else(|| GraphError::UnknownNode(label.to_string()))
        };
        let (s, t) = (resolve(source)?, resolve(target)?);
        self.trust_between(graph, s, t)
    }

    /// Run `op` on a dedicated pool when a thread count is configured,
    /// otherwise on rayon's global pool.
    fn run_in_pool<R, F>(&self, op: F) -> Result<R, InferenceError>
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        match self.runtime.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| InferenceError::ThreadPool(e.to_string()))?;
                Ok(pool.install(op))
            }
            None => Ok(op()),
        }
    }
}
