//! Property-based tests for the Kruskal driver.
//!
//! Checks the driver against two oracles (exhaustive spanning-subset
//! enumeration on tiny graphs and a sort-based sequential Kruskal on larger
//! ones) and validates the structure of its output across graph shapes.

mod strategies;
mod structural;
mod types;
