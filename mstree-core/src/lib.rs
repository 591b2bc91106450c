//! Minimum spanning tree weight via Kruskal's algorithm.
//!
//! The crate pairs two leaf structures with a small driver:
//!
//! - [`EdgeHeap`], a fixed-capacity binary min-heap ordered by edge weight;
//! - [`DisjointSet`], a union-find with path compression and union-by-rank;
//! - [`kruskal`], which drains the heap cheapest-first and accepts every edge
//!   that joins two previously separate components.
//!
//! Disconnected graphs are accepted; the result then describes a minimum
//! spanning forest.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the driver emits:
//!
//! - `mst_runs_total` (counter)
//! - `mst_edges_accepted` (counter)
//! - `mst_edges_discarded` (counter)
//!
//! # Examples
//! ```
//! use mstree_core::{Edge, minimum_spanning_weight};
//!
//! let edges = [
//!     Edge::new(0, 1, 1),
//!     Edge::new(1, 2, 2),
//!     Edge::new(2, 3, 3),
//!     Edge::new(3, 0, 4),
//!     Edge::new(0, 2, 5),
//! ];
//! let outcome = minimum_spanning_weight(4, edges)?;
//! assert_eq!(outcome.total_weight(), 6);
//! assert!(outcome.all_connected());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod edge;
mod error;
mod heap;
mod mst;
#[cfg(test)]
mod test_utils;
mod union_find;

pub use crate::{
    edge::{Edge, VertexId},
    error::{
        EdgeError, EdgeErrorCode, HeapError, HeapErrorCode, MstError, MstErrorCode,
        UnionFindError, UnionFindErrorCode,
    },
    heap::EdgeHeap,
    mst::{MstOutcome, Termination, kruskal, minimum_spanning_weight},
    union_find::DisjointSet,
};
