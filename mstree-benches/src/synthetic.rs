//! Seeded synthetic graphs for benchmarking.
//!
//! Every generated graph is connected: a random spanning tree is laid down
//! first and the remaining edges join uniformly chosen vertex pairs.

use mstree_core::{Edge, EdgeHeap};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;

/// Configuration for [`SyntheticGraph::generate`].
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edges generated per vertex, including the spanning tree.
    pub edges_per_vertex: usize,
    /// Weights are drawn from `0..max_weight`.
    pub max_weight: i64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Errors raised by invalid generator configuration.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SyntheticError {
    /// At least one vertex is required.
    #[error("vertex_count must be at least 1")]
    ZeroVertices,
    /// The weight range must be non-empty.
    #[error("max_weight must be positive (got {got})")]
    EmptyWeightRange {
        /// The rejected upper bound.
        got: i64,
    },
    /// The requested edge count does not fit in `usize`.
    #[error("{vertex_count} vertices x {edges_per_vertex} edges overflows usize")]
    TooManyEdges {
        /// Requested vertex count.
        vertex_count: usize,
        /// Requested edges per vertex.
        edges_per_vertex: usize,
    },
}

/// A connected graph with a fixed edge list.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl SyntheticGraph {
    /// Generates a graph from `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the configuration is invalid.
    ///
    /// # Examples
    /// ```
    /// use mstree_benches::synthetic::{SyntheticGraph, SyntheticGraphConfig};
    ///
    /// let graph = SyntheticGraph::generate(&SyntheticGraphConfig {
    ///     vertex_count: 10,
    ///     edges_per_vertex: 3,
    ///     max_weight: 100,
    ///     seed: 7,
    /// })?;
    /// assert_eq!(graph.vertex_count(), 10);
    /// assert_eq!(graph.edges().len(), 30);
    /// # Ok::<(), mstree_benches::synthetic::SyntheticError>(())
    /// ```
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, SyntheticError> {
        let SyntheticGraphConfig {
            vertex_count,
            edges_per_vertex,
            max_weight,
            seed,
        } = *config;
        if vertex_count == 0 {
            return Err(SyntheticError::ZeroVertices);
        }
        if max_weight <= 0 {
            return Err(SyntheticError::EmptyWeightRange { got: max_weight });
        }
        let edge_count = vertex_count
            .checked_mul(edges_per_vertex)
            .ok_or(SyntheticError::TooManyEdges {
                vertex_count,
                edges_per_vertex,
            })?;

        let mut rng = SmallRng::seed_from_u64(seed);
        let mut edges = Vec::with_capacity(edge_count.max(vertex_count.saturating_sub(1)));
        for vertex in 1..vertex_count {
            let parent = rng.gen_range(0..vertex);
            edges.push(Edge::new(parent, vertex, rng.gen_range(0..max_weight)));
        }
        while edges.len() < edge_count {
            let v1 = rng.gen_range(0..vertex_count);
            let v2 = rng.gen_range(0..vertex_count);
            edges.push(Edge::new(v1, v2, rng.gen_range(0..max_weight)));
        }

        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the generated edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Builds a heap holding every edge of the graph.
    ///
    /// # Errors
    /// Returns [`mstree_core::HeapError`] when the storage cannot be reserved.
    pub fn heap(&self) -> Result<EdgeHeap, mstree_core::HeapError> {
        let mut heap = EdgeHeap::with_capacity(self.edges.len())?;
        heap.try_extend(self.edges.iter().copied())?;
        Ok(heap)
    }
}
