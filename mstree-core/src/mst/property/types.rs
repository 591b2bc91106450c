//! Fixture types for MST property tests.

use test_strategy::Arbitrary;

use crate::Edge;

/// Shape of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphShape {
    /// A random spanning tree plus a few extra edges; always connected.
    #[weight(3)]
    ConnectedSparse,
    /// Most vertex pairs joined by an edge.
    #[weight(2)]
    Dense,
    /// Weights drawn from a tiny range so ties dominate.
    #[weight(3)]
    ManyIdentical,
    /// Several components with no edges between them.
    #[weight(2)]
    Disconnected,
    /// Repeated edges between the same endpoints with different weights.
    #[weight(2)]
    ParallelEdges,
}

/// Generated graph plus the shape that produced it.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edges in insertion order.
    pub edges: Vec<Edge>,
    /// Shape used during generation.
    pub shape: GraphShape,
}
