//! Graph generators for MST property tests.
//!
//! Each generator is driven by a seeded [`SmallRng`] so a failing case can be
//! replayed from its seed alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{GraphShape, MstFixture};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 48;
const DENSE_MAX_VERTICES: usize = 20;
/// Largest graph handed to the exhaustive oracle.
pub(super) const EXHAUSTIVE_MAX_VERTICES: usize = 6;
/// Largest edge count handed to the exhaustive oracle.
pub(super) const EXHAUSTIVE_MAX_EDGES: usize = 10;

/// Fixtures covering every [`GraphShape`].
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Tiny arbitrary multigraphs (self-loops and duplicates allowed) for the
/// exhaustive oracle.
pub(super) fn tiny_graph_strategy() -> impl Strategy<Value = (usize, Vec<Edge>)> {
    (1..=EXHAUSTIVE_MAX_VERTICES).prop_flat_map(|vertex_count| {
        let edge = (0..vertex_count, 0..vertex_count, -20_i64..20)
            .prop_map(|(v1, v2, weight)| Edge::new(v1, v2, weight));
        (
            Just(vertex_count),
            prop::collection::vec(edge, 0..=EXHAUSTIVE_MAX_EDGES),
        )
    })
}

/// Tiny connected graphs with pairwise distinct weights.
pub(super) fn tiny_connected_distinct_strategy() -> impl Strategy<Value = (usize, Vec<Edge>)> {
    (2..=EXHAUSTIVE_MAX_VERTICES, any::<u64>()).prop_map(|(vertex_count, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut edges = spanning_tree(vertex_count, &mut rng, |_| 0);
        let extra = rng.gen_range(0..=EXHAUSTIVE_MAX_EDGES - edges.len());
        edges.extend(random_edges(vertex_count, extra, &mut rng, |_| 0));
        let mut weights: Vec<i64> = (1..=40).collect();
        shuffle(&mut weights, &mut rng);
        let edges = edges
            .into_iter()
            .zip(weights)
            .map(|(edge, weight)| Edge::new(edge.v1(), edge.v2(), weight))
            .collect();
        (vertex_count, edges)
    })
}

/// Generates a fixture for one shape.
pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> MstFixture {
    let edges_and_count = match shape {
        GraphShape::ConnectedSparse => connected_sparse(rng),
        GraphShape::Dense => dense(rng),
        GraphShape::ManyIdentical => many_identical(rng),
        GraphShape::Disconnected => disconnected(rng),
        GraphShape::ParallelEdges => parallel_edges(rng),
    };
    let (vertex_count, mut edges) = edges_and_count;
    shuffle(&mut edges, rng);
    MstFixture {
        vertex_count,
        edges,
        shape,
    }
}

fn continuous_weight(rng: &mut SmallRng) -> i64 {
    rng.gen_range(-1_000..1_000)
}

fn connected_sparse(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = spanning_tree(vertex_count, rng, continuous_weight);
    let extra = rng.gen_range(0..=vertex_count);
    edges.extend(random_edges(vertex_count, extra, rng, continuous_weight));
    (vertex_count, edges)
}

fn dense(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
    let probability = rng.gen_range(0.7..=0.95);
    let mut edges = Vec::new();
    for v1 in 0..vertex_count {
        for v2 in (v1 + 1)..vertex_count {
            if rng.gen_bool(probability) {
                edges.push(Edge::new(v1, v2, continuous_weight(rng)));
            }
        }
    }
    (vertex_count, edges)
}

fn many_identical(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let levels = rng.gen_range(1..=3);
    let mut weight = move |rng: &mut SmallRng| rng.gen_range(0..levels);
    let mut edges = spanning_tree(vertex_count, rng, &mut weight);
    let extra = rng.gen_range(0..=vertex_count.saturating_mul(2));
    edges.extend(random_edges(vertex_count, extra, rng, weight));
    (vertex_count, edges)
}

fn disconnected(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let groups = rng.gen_range(2..=5);
    let mut vertex_count = 0;
    let mut edges = Vec::new();
    for _ in 0..groups {
        let size = rng.gen_range(1..=10);
        let tree = spanning_tree(size, rng, continuous_weight);
        let extra = random_edges(size, size / 2, rng, continuous_weight);
        edges.extend(
            tree.into_iter()
                .chain(extra)
                .map(|edge| Edge::new(edge.v1() + vertex_count, edge.v2() + vertex_count, edge.weight())),
        );
        vertex_count += size;
    }
    (vertex_count, edges)
}

fn parallel_edges(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let (vertex_count, base) = connected_sparse(rng);
    let mut edges = Vec::with_capacity(base.len() * 2);
    for edge in base {
        edges.push(edge);
        for _ in 0..rng.gen_range(0..=2) {
            let weight = edge.weight() + rng.gen_range(-50..=50);
            edges.push(Edge::new(edge.v2(), edge.v1(), weight));
        }
    }
    (vertex_count, edges)
}

/// Random tree over `0..vertex_count`: every vertex after the first links to
/// an earlier one.
fn spanning_tree(
    vertex_count: usize,
    rng: &mut SmallRng,
    mut weight: impl FnMut(&mut SmallRng) -> i64,
) -> Vec<Edge> {
    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);
    (1..vertex_count)
        .map(|position| {
            let parent = order[rng.gen_range(0..position)];
            Edge::new(parent, order[position], weight(rng))
        })
        .collect()
}

fn random_edges(
    vertex_count: usize,
    count: usize,
    rng: &mut SmallRng,
    mut weight: impl FnMut(&mut SmallRng) -> i64,
) -> Vec<Edge> {
    if vertex_count == 0 {
        return Vec::new();
    }
    (0..count)
        .map(|_| {
            let v1 = rng.gen_range(0..vertex_count);
            let v2 = rng.gen_range(0..vertex_count);
            Edge::new(v1, v2, weight(rng))
        })
        .collect()
}

fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
