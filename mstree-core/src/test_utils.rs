//! Shared test utilities for `mstree-core`.

use mstree_test_support::proptest_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{Edge, EdgeHeap};

/// Builds a proptest configuration from the shared run profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds edges from one-based `(v1, v2, weight)` triples.
pub(crate) fn one_based(triples: &[(i64, i64, i64)]) -> Vec<Edge> {
    triples
        .iter()
        .map(|&(v1, v2, weight)| Edge::from_one_based(v1, v2, weight).expect("labels are positive"))
        .collect()
}

/// Builds a heap holding exactly `edges`.
pub(crate) fn heap_with(edges: &[Edge]) -> EdgeHeap {
    let mut heap = EdgeHeap::with_capacity(edges.len()).expect("test heaps allocate");
    heap.try_extend(edges.iter().copied())
        .expect("capacity matches the edge count");
    heap
}
