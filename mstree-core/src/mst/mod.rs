//! Kruskal minimum spanning tree (MST) driver.
//!
//! The driver repeatedly peeks at the cheapest edge left in an [`EdgeHeap`],
//! asks a [`DisjointSet`] whether its endpoints are already connected, and
//! either accepts it (adding its weight and merging the endpoints) or discards
//! it. It stops as soon as every vertex belongs to one set, or when the heap
//! runs dry; in the latter case the result describes a minimum spanning
//! forest.

use std::fmt;

use tracing::{Span, debug, field, info, instrument, trace};

use crate::{
    edge::Edge,
    error::MstError,
    heap::EdgeHeap,
    union_find::DisjointSet,
};

/// Why the driver stopped.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Termination {
    /// An accepted edge left every vertex in a single component.
    AllConnected,
    /// The heap ran out of edges first.
    Exhausted,
}

impl Termination {
    /// Returns a stable label for logging.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllConnected => "all_connected",
            Self::Exhausted => "exhausted",
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a Kruskal run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MstOutcome {
    total_weight: i64,
    accepted: Vec<Edge>,
    discarded: usize,
    component_count: usize,
    termination: Termination,
}

impl MstOutcome {
    /// Returns the summed weight of the accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> i64 { self.total_weight }

    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn accepted(&self) -> &[Edge] { &self.accepted }

    /// Returns how many edges were discarded because they closed a cycle.
    #[must_use]
    #[rustfmt::skip]
    pub const fn discarded(&self) -> usize { self.discarded }

    /// Returns the number of components left when the driver stopped.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns why the driver stopped.
    #[must_use]
    #[rustfmt::skip]
    pub const fn termination(&self) -> Termination { self.termination }

    /// Returns `true` when the run stopped because all vertices were joined.
    #[must_use]
    pub const fn all_connected(&self) -> bool {
        matches!(self.termination, Termination::AllConnected)
    }
}

#[derive(Clone, Copy)]
enum DriverState {
    Running,
    Done(Termination),
}

struct Tally {
    total_weight: i64,
    accepted: Vec<Edge>,
    discarded: usize,
}

/// Runs Kruskal's algorithm over the edges held by `heap`.
///
/// Edges left in the heap after early termination are dropped along with it.
///
/// # Errors
///
/// Returns an error when:
/// - `vertex_count == 0`
/// - the union-find tables for `vertex_count` vertices cannot be reserved
/// - an edge references a vertex `>= vertex_count`
/// - the running total overflows `i64`
///
/// # Examples
/// ```
/// use mstree_core::{Edge, EdgeHeap, Termination, kruskal};
///
/// let mut heap = EdgeHeap::with_capacity(2)?;
/// heap.insert(Edge::new(0, 1, 10))?;
/// heap.insert(Edge::new(2, 3, 20))?;
/// let outcome = kruskal(4, heap)?;
/// assert_eq!(outcome.total_weight(), 30);
/// assert_eq!(outcome.termination(), Termination::Exhausted);
/// assert_eq!(outcome.component_count(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "mst.kruskal",
    err,
    skip(heap),
    fields(edges = heap.len(), total_weight = field::Empty, termination = field::Empty),
)]
pub fn kruskal(vertex_count: usize, mut heap: EdgeHeap) -> Result<MstOutcome, MstError> {
    if vertex_count == 0 {
        return Err(MstError::EmptyGraph);
    }

    #[cfg(feature = "metrics")]
    metrics::counter!("mst_runs_total").increment(1);

    let mut union_find = DisjointSet::try_new(vertex_count)?;
    let mut tally = Tally {
        total_weight: 0,
        accepted: Vec::with_capacity(vertex_count.saturating_sub(1).min(heap.len())),
        discarded: 0,
    };

    let mut state = DriverState::Running;
    let termination = loop {
        match state {
            DriverState::Running => {
                state = step(&mut heap, &mut union_find, &mut tally)?;
            }
            DriverState::Done(termination) => break termination,
        }
    };

    let span = Span::current();
    span.record("total_weight", tally.total_weight);
    span.record("termination", field::display(termination));
    info!(
        total_weight = tally.total_weight,
        accepted = tally.accepted.len(),
        discarded = tally.discarded,
        components = union_find.components(),
        %termination,
        "kruskal completed"
    );

    Ok(MstOutcome {
        total_weight: tally.total_weight,
        accepted: tally.accepted,
        discarded: tally.discarded,
        component_count: union_find.components(),
        termination,
    })
}

/// Builds a heap sized to `edges` and runs [`kruskal`] over it.
///
/// # Errors
///
/// Returns [`MstError::Heap`] if the heap storage cannot be reserved, or any
/// error [`kruskal`] reports.
pub fn minimum_spanning_weight(
    vertex_count: usize,
    edges: impl IntoIterator<Item = Edge>,
) -> Result<MstOutcome, MstError> {
    let edges: Vec<Edge> = edges.into_iter().collect();
    let mut heap = EdgeHeap::with_capacity(edges.len())?;
    heap.try_extend(edges)?;
    kruskal(vertex_count, heap)
}

fn step(
    heap: &mut EdgeHeap,
    union_find: &mut DisjointSet,
    tally: &mut Tally,
) -> Result<DriverState, MstError> {
    let Some(edge) = heap.peek_min().copied() else {
        return Ok(DriverState::Done(Termination::Exhausted));
    };

    if union_find.connected(edge.v1(), edge.v2())? {
        trace!(v1 = edge.v1(), v2 = edge.v2(), weight = edge.weight(), "edge discarded");
        tally.discarded += 1;
        #[cfg(feature = "metrics")]
        metrics::counter!("mst_edges_discarded").increment(1);
        heap.extract_min();
        return Ok(DriverState::Running);
    }

    let total_weight = tally
        .total_weight
        .checked_add(edge.weight())
        .ok_or(MstError::WeightOverflow {
            accumulated: tally.total_weight,
            weight: edge.weight(),
        })?;
    union_find.union(edge.v1(), edge.v2())?;
    tally.total_weight = total_weight;
    tally.accepted.push(edge);
    debug!(v1 = edge.v1(), v2 = edge.v2(), weight = edge.weight(), "edge accepted");
    #[cfg(feature = "metrics")]
    metrics::counter!("mst_edges_accepted").increment(1);
    heap.extract_min();

    if union_find.components() == 1 {
        return Ok(DriverState::Done(Termination::AllConnected));
    }
    Ok(DriverState::Running)
}


#[cfg(test)]
mod property;
