//! Fixed-capacity binary min-heap of edges keyed by weight.
//!
//! Elements live in a single `Vec` laid out as an implicit binary tree:
//! the children of slot `i` are `2i + 1` and `2i + 2`, and every element's
//! weight is at least its parent's. Only weights are compared; equal weights
//! never trigger a swap in either direction, and when both children undercut
//! a node during sift-down the left child wins ties.

use crate::{edge::Edge, error::HeapError};

/// Binary min-heap holding at most `capacity` edges.
///
/// The capacity is fixed at construction. Inserting into a full heap fails
/// with [`HeapError::CapacityExceeded`] rather than growing.
#[derive(Clone, Debug)]
pub struct EdgeHeap {
    elements: Vec<Edge>,
    capacity: usize,
}

impl EdgeHeap {
    /// Creates an empty heap with room for exactly `capacity` edges.
    ///
    /// # Errors
    /// Returns [`HeapError::Allocation`] when the storage cannot be reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self, HeapError> {
        let mut elements = Vec::new();
        elements
            .try_reserve_exact(capacity)
            .map_err(|_| HeapError::Allocation { capacity })?;
        Ok(Self { elements, capacity })
    }

    /// Inserts `edge` and restores heap order by sifting it up.
    ///
    /// # Errors
    /// Returns [`HeapError::CapacityExceeded`] when the heap is already full.
    pub fn insert(&mut self, edge: Edge) -> Result<(), HeapError> {
        if self.is_full() {
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.elements.push(edge);
        self.sift_up(self.elements.len() - 1);
        Ok(())
    }

    /// Inserts every edge yielded by `edges`, stopping at the first failure.
    ///
    /// Edges inserted before the failure remain in the heap.
    ///
    /// # Errors
    /// Returns [`HeapError::CapacityExceeded`] once the heap is full.
    pub fn try_extend(&mut self, edges: impl IntoIterator<Item = Edge>) -> Result<(), HeapError> {
        edges.into_iter().try_for_each(|edge| self.insert(edge))
    }

    /// Returns the cheapest edge without removing it.
    #[must_use]
    pub fn peek_min(&self) -> Option<&Edge> {
        self.elements.first()
    }

    /// Removes and returns the cheapest edge.
    ///
    /// The last element moves into the root slot and sifts down. Extracting
    /// from an empty heap is a no-op that returns `None`.
    pub fn extract_min(&mut self) -> Option<Edge> {
        if self.elements.is_empty() {
            return None;
        }
        let min = self.elements.swap_remove(0);
        self.sift_down(0);
        Some(min)
    }

    /// Returns the number of edges currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` when the heap holds no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the fixed capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` when no further edge can be inserted.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.elements.len() >= self.capacity
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.elements[parent].weight() <= self.elements[index].weight() {
                break;
            }
            self.elements.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.elements.len();
        loop {
            let mut smallest = index;
            for child in [left_child(index), right_child(index)] {
                if child < len && self.elements[child].weight() < self.elements[smallest].weight()
                {
                    smallest = child;
                }
            }
            if smallest == index {
                return;
            }
            self.elements.swap(index, smallest);
            index = smallest;
        }
    }

    /// Checks the heap-order invariant over every parent/child pair.
    #[cfg(test)]
    pub(crate) fn is_heap_ordered(&self) -> bool {
        (1..self.elements.len())
            .all(|i| self.elements[parent(i)].weight() <= self.elements[i].weight())
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[Edge] {
        &self.elements
    }
}

const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

const fn left_child(index: usize) -> usize {
    2 * index + 1
}

const fn right_child(index: usize) -> usize {
    2 * index + 2
}
