//! Support library for the `mstree` binary.
//!
//! Exposes the command pipeline and logging setup so integration tests and
//! doctests can drive the program without spawning a subprocess.

pub mod cli;
pub mod logging;
