//! Command execution and output rendering for the mstree CLI.

use std::io::{self, Read, Write};

use clap::Parser;
use mstree_core::{EdgeHeap, HeapError, MstError, MstOutcome, kruskal};
use thiserror::Error;
use tracing::{info, instrument};

use super::input::{InputError, read_graph};

/// Line printed ahead of the weight when every vertex ended up connected.
pub const ALL_CONNECTED_BANNER: &str = "All Nodes Are Connected!";

/// Command-line options parsed by [`clap`].
///
/// The program takes no flags; the graph is always read from stdin.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "mstree",
    version,
    about = "Compute the minimum spanning tree weight of a graph read from stdin."
)]
pub struct Cli {}

/// Errors surfaced while executing the command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The graph description was malformed.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The edge heap could not be built or overflowed.
    #[error(transparent)]
    Heap(#[from] HeapError),
    /// The MST computation failed.
    #[error(transparent)]
    Mst(#[from] MstError),
}

impl CliError {
    /// Returns a stable machine-readable code for logging.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Input(err) => err.code(),
            Self::Heap(err) => err.code().as_str(),
            Self::Mst(err) => err.code().as_str(),
        }
    }
}

/// Executes the command represented by `cli` against `input`.
///
/// # Errors
/// Returns [`CliError`] when parsing or the MST computation fails.
#[instrument(name = "cli.run", err, skip_all)]
pub fn run_cli(_cli: &Cli, input: impl Read) -> Result<MstOutcome, CliError> {
    run(input)
}

/// Parses a graph from `input` and computes its minimum spanning weight.
///
/// The heap is sized to the declared edge count, so surplus edges fail with
/// [`HeapError::CapacityExceeded`].
///
/// # Errors
/// Returns [`CliError`] when parsing, heap construction, or the MST
/// computation fails.
///
/// # Examples
/// ```
/// use mstree_cli::cli::run;
///
/// let outcome = run("4 2\n1 2 10\n3 4 20\n".as_bytes())?;
/// assert_eq!(outcome.total_weight(), 30);
/// assert!(!outcome.all_connected());
/// # Ok::<(), mstree_cli::cli::CliError>(())
/// ```
pub fn run(input: impl Read) -> Result<MstOutcome, CliError> {
    let graph = read_graph(input)?;
    let mut heap = EdgeHeap::with_capacity(graph.declared_edges)?;
    heap.try_extend(graph.edges)?;
    let outcome = kruskal(graph.vertex_count, heap)?;
    info!(
        total_weight = outcome.total_weight(),
        all_connected = outcome.all_connected(),
        "command completed"
    );
    Ok(outcome)
}

/// Renders `outcome` to `writer`.
///
/// The banner line appears only when the run stopped because every vertex
/// was joined; the total weight always follows on its own line.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// use mstree_cli::cli::{render_outcome, run};
///
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let outcome = run("1 0\n".as_bytes())?;
/// let mut buffer = Vec::new();
/// render_outcome(&outcome, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "0\n");
/// # Ok(())
/// # }
/// ```
pub fn render_outcome(outcome: &MstOutcome, mut writer: impl Write) -> io::Result<()> {
    if outcome.all_connected() {
        writeln!(writer, "{ALL_CONNECTED_BANNER}")?;
    }
    writeln!(writer, "{}", outcome.total_weight())
}
