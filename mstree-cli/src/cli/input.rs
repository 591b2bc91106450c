//! Parsing of the whitespace-separated graph description read from stdin.
//!
//! ```text
//! <vertex_count> <edge_count>
//! <v1> <v2> <weight>    (edge_count times, labels one-based)
//! ```
//!
//! Line breaks carry no meaning; only the token sequence matters.

use std::io::{self, Read};

use mstree_core::{Edge, EdgeError};
use thiserror::Error;
use tracing::{Span, debug, field, instrument};

/// Errors raised while parsing the graph description.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InputError {
    /// Reading the input stream failed.
    #[error("failed to read input: {source}")]
    Io {
        /// Underlying stream failure.
        #[from]
        source: io::Error,
    },
    /// The input ended before both header counts were read.
    #[error("input must start with `<vertex_count> <edge_count>`")]
    MissingHeader,
    /// A token was not a signed integer.
    #[error("token {position} (`{token}`) is not an integer")]
    InvalidToken {
        /// One-based position of the token in the input.
        position: usize,
        /// The token as read.
        token: String,
    },
    /// A header count was negative.
    #[error("{name} must not be negative (got {value})")]
    NegativeCount {
        /// Which count was invalid.
        name: &'static str,
        /// The value as read.
        value: i64,
    },
    /// The input ended partway through an edge triple.
    #[error("edge {index} is incomplete; expected `<v1> <v2> <weight>`")]
    TruncatedEdge {
        /// One-based index of the incomplete edge.
        index: usize,
    },
    /// Fewer edges were supplied than the header declared.
    #[error("header declares {expected} edges but only {found} were supplied")]
    MissingEdges {
        /// Edge count from the header.
        expected: usize,
        /// Edges actually read.
        found: usize,
    },
    /// An edge names a vertex label above the declared vertex count.
    #[error("vertex label {label} exceeds the vertex count {vertex_count}")]
    VertexOutOfRange {
        /// The offending one-based label.
        label: i64,
        /// Vertex count from the header.
        vertex_count: usize,
    },
    /// An edge names a label below 1.
    #[error(transparent)]
    Edge {
        /// Underlying edge construction failure.
        #[from]
        source: EdgeError,
    },
}

impl InputError {
    /// Returns a stable machine-readable code for the variant.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "INPUT_IO",
            Self::MissingHeader => "INPUT_MISSING_HEADER",
            Self::InvalidToken { .. } => "INPUT_INVALID_TOKEN",
            Self::NegativeCount { .. } => "INPUT_NEGATIVE_COUNT",
            Self::TruncatedEdge { .. } => "INPUT_TRUNCATED_EDGE",
            Self::MissingEdges { .. } => "INPUT_MISSING_EDGES",
            Self::VertexOutOfRange { .. } => "INPUT_VERTEX_OUT_OF_RANGE",
            Self::Edge { source } => source.code().as_str(),
        }
    }
}

/// Graph description parsed from the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphInput {
    /// Number of vertices declared by the header.
    pub vertex_count: usize,
    /// Number of edges declared by the header.
    pub declared_edges: usize,
    /// Edges in input order, converted to zero-based ids.
    pub edges: Vec<Edge>,
}

/// Reads and parses a complete graph description from `reader`.
///
/// Edges beyond the declared count are kept so the caller's fixed-capacity
/// heap can reject them.
///
/// # Errors
/// Returns [`InputError`] when the stream cannot be read, a token is not an
/// integer, a count is negative, an edge is incomplete or names an invalid
/// vertex, or fewer edges than declared are present.
///
/// # Examples
/// ```
/// use mstree_cli::cli::read_graph;
///
/// let graph = read_graph("2 1\n1 2 7\n".as_bytes())?;
/// assert_eq!(graph.vertex_count, 2);
/// assert_eq!(graph.edges[0].weight(), 7);
/// # Ok::<(), mstree_cli::cli::InputError>(())
/// ```
#[instrument(
    name = "cli.read_graph",
    err,
    skip(reader),
    fields(vertex_count = field::Empty, declared_edges = field::Empty, supplied_edges = field::Empty),
)]
pub fn read_graph(mut reader: impl Read) -> Result<GraphInput, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut tokens = text
        .split_ascii_whitespace()
        .enumerate()
        .map(|(index, token)| parse_token(index + 1, token));

    let vertex_count = next_count(&mut tokens, "vertex count")?;
    let declared_edges = next_count(&mut tokens, "edge count")?;
    let span = Span::current();
    span.record("vertex_count", vertex_count);
    span.record("declared_edges", declared_edges);

    let values = tokens.collect::<Result<Vec<i64>, InputError>>()?;
    let mut edges = Vec::with_capacity(declared_edges.min(values.len()));
    for (index, triple) in values.chunks(3).enumerate() {
        let &[v1, v2, weight] = triple else {
            return Err(InputError::TruncatedEdge { index: index + 1 });
        };
        edges.push(edge_from_labels(v1, v2, weight, vertex_count)?);
    }
    span.record("supplied_edges", edges.len());

    if edges.len() < declared_edges {
        return Err(InputError::MissingEdges {
            expected: declared_edges,
            found: edges.len(),
        });
    }
    debug!(supplied = edges.len(), "graph parsed");

    Ok(GraphInput {
        vertex_count,
        declared_edges,
        edges,
    })
}

fn parse_token(position: usize, token: &str) -> Result<i64, InputError> {
    token.parse().map_err(|_| InputError::InvalidToken {
        position,
        token: token.to_owned(),
    })
}

fn next_count(
    tokens: &mut impl Iterator<Item = Result<i64, InputError>>,
    name: &'static str,
) -> Result<usize, InputError> {
    let value = tokens.next().ok_or(InputError::MissingHeader)??;
    usize::try_from(value).map_err(|_| InputError::NegativeCount { name, value })
}

fn edge_from_labels(
    v1: i64,
    v2: i64,
    weight: i64,
    vertex_count: usize,
) -> Result<Edge, InputError> {
    let edge = Edge::from_one_based(v1, v2, weight)?;
    for (label, id) in [(v1, edge.v1()), (v2, edge.v2())] {
        if id >= vertex_count {
            return Err(InputError::VertexOutOfRange {
                label,
                vertex_count,
            });
        }
    }
    Ok(edge)
}
