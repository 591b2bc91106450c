//! Union-find (disjoint set union) used by the Kruskal driver for cycle
//! detection.
//!
//! Every vertex starts as a singleton root with rank 1. Lookups compress the
//! visited path onto the root. Unions attach the lower-rank root beneath the
//! higher-rank one; on equal ranks the first argument's root goes beneath the
//! second's, and the surviving root's rank grows by one. A running count of
//! disjoint sets is kept so callers can tell when everything is joined.

use crate::{edge::VertexId, error::UnionFindError};

const INITIAL_RANK: usize = 1;

/// Disjoint-set forest over the vertices `0..len`.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<VertexId>,
    rank: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Creates `vertex_count` singleton sets.
    ///
    /// # Errors
    /// Returns [`UnionFindError::Allocation`] when storage for the parent or
    /// rank tables cannot be reserved.
    pub fn try_new(vertex_count: usize) -> Result<Self, UnionFindError> {
        let allocation = |_| UnionFindError::Allocation { vertex_count };

        let mut parent = Vec::new();
        parent.try_reserve_exact(vertex_count).map_err(allocation)?;
        parent.extend(0..vertex_count);

        let mut rank = Vec::new();
        rank.try_reserve_exact(vertex_count).map_err(allocation)?;
        rank.resize(vertex_count, INITIAL_RANK);

        Ok(Self {
            parent,
            rank,
            components: vertex_count,
        })
    }

    /// Returns the number of tracked vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no vertices are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    pub const fn components(&self) -> usize {
        self.components
    }

    /// Returns the representative of the set containing `vertex`.
    ///
    /// Every vertex on the path to the root is re-pointed at the root.
    ///
    /// # Errors
    /// Returns [`UnionFindError::VertexOutOfRange`] when `vertex >= len()`.
    pub fn find(&mut self, vertex: VertexId) -> Result<VertexId, UnionFindError> {
        self.check(vertex)?;

        let mut root = vertex;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = vertex;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        Ok(root)
    }

    /// Returns `true` when `v1` and `v2` belong to the same set.
    ///
    /// # Errors
    /// Returns [`UnionFindError::VertexOutOfRange`] for an unknown vertex.
    pub fn connected(&mut self, v1: VertexId, v2: VertexId) -> Result<bool, UnionFindError> {
        Ok(self.find(v1)? == self.find(v2)?)
    }

    /// Merges the sets containing `v1` and `v2`.
    ///
    /// Returns `false` without changes when both already share a set.
    ///
    /// # Errors
    /// Returns [`UnionFindError::VertexOutOfRange`] for an unknown vertex.
    pub fn union(&mut self, v1: VertexId, v2: VertexId) -> Result<bool, UnionFindError> {
        let root1 = self.find(v1)?;
        let root2 = self.find(v2)?;
        if root1 == root2 {
            return Ok(false);
        }

        let rank1 = self.rank[root1];
        let rank2 = self.rank[root2];
        if rank1 > rank2 {
            self.parent[root2] = root1;
        } else {
            self.parent[root1] = root2;
            if rank1 == rank2 {
                self.rank[root2] = rank2.saturating_add(1);
            }
        }

        self.components -= 1;
        Ok(true)
    }

    /// Returns the rank currently stored for `vertex`.
    ///
    /// Only root ranks are meaningful; a rank is an upper bound on tree height
    /// offset by the initial rank of 1.
    ///
    /// # Errors
    /// Returns [`UnionFindError::VertexOutOfRange`] for an unknown vertex.
    pub fn rank_of(&self, vertex: VertexId) -> Result<usize, UnionFindError> {
        self.check(vertex)?;
        Ok(self.rank[vertex])
    }

    fn check(&self, vertex: VertexId) -> Result<(), UnionFindError> {
        let vertex_count = self.parent.len();
        if vertex < vertex_count {
            Ok(())
        } else {
            Err(UnionFindError::VertexOutOfRange {
                vertex,
                vertex_count,
            })
        }
    }

    #[cfg(test)]
    pub(crate) fn parent_of(&self, vertex: VertexId) -> VertexId {
        self.parent[vertex]
    }
}
