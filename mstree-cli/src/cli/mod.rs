//! Command-line pipeline for the `mstree` batch program.
//!
//! The program reads a graph description from stdin, computes the minimum
//! spanning tree (or forest) weight with Kruskal's algorithm, and prints it.

mod commands;
mod input;

pub use commands::{ALL_CONNECTED_BANNER, Cli, CliError, render_outcome, run, run_cli};
pub use input::{GraphInput, InputError, read_graph};
