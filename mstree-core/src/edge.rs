//! Weighted undirected edges.

use crate::error::EdgeError;

/// Zero-based vertex identifier.
pub type VertexId = usize;

/// An undirected weighted edge between two zero-based vertices.
///
/// Endpoints are stored as supplied; `(a, b)` and `(b, a)` describe the same
/// connection and self-loops are permitted (the driver discards them because
/// their endpoints are trivially connected).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    v1: VertexId,
    v2: VertexId,
    weight: i64,
}

impl Edge {
    /// Creates an edge from zero-based endpoints.
    #[must_use]
    pub const fn new(v1: VertexId, v2: VertexId, weight: i64) -> Self {
        Self { v1, v2, weight }
    }

    /// Creates an edge from one-based vertex labels.
    ///
    /// # Errors
    /// Returns [`EdgeError::NonPositiveLabel`] when either label is below 1.
    ///
    /// # Examples
    /// ```
    /// use mstree_core::Edge;
    ///
    /// let edge = Edge::from_one_based(1, 3, -4)?;
    /// assert_eq!((edge.v1(), edge.v2(), edge.weight()), (0, 2, -4));
    /// # Ok::<(), mstree_core::EdgeError>(())
    /// ```
    pub fn from_one_based(v1: i64, v2: i64, weight: i64) -> Result<Self, EdgeError> {
        Ok(Self::new(label_to_id(v1)?, label_to_id(v2)?, weight))
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn v1(&self) -> VertexId { self.v1 }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn v2(&self) -> VertexId { self.v2 }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }
}

fn label_to_id(label: i64) -> Result<VertexId, EdgeError> {
    label
        .checked_sub(1)
        .and_then(|id| VertexId::try_from(id).ok())
        .ok_or(EdgeError::NonPositiveLabel { label })
}
