//! Benchmark support crate for mstree.
//!
//! Provides seeded synthetic graphs and parameter labels for the Criterion
//! benchmarks covering the edge heap and the Kruskal driver.

pub mod error;
pub mod params;
pub mod synthetic;
