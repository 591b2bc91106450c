//! Error types for the mstree core library.
//!
//! Every error enum exposes a stable machine-readable code so callers can log
//! or match on failures without depending on display strings.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while building an [`crate::Edge`] from external labels.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum EdgeError {
    /// Vertex labels are one-based; zero and negative labels are invalid.
    #[error("vertex label {label} is not positive; labels start at 1")]
    NonPositiveLabel {
        /// The offending label as supplied.
        label: i64,
    },
}

define_error_codes! {
    /// Stable codes describing [`EdgeError`] variants.
    enum EdgeErrorCode for EdgeError {
        /// Vertex labels are one-based; zero and negative labels are invalid.
        NonPositiveLabel => NonPositiveLabel { .. } => "EDGE_NON_POSITIVE_LABEL",
    }
}

/// An error produced by [`crate::EdgeHeap`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum HeapError {
    /// Storage for the requested capacity could not be reserved.
    #[error("failed to reserve storage for {capacity} edges")]
    Allocation {
        /// Requested capacity.
        capacity: usize,
    },
    /// An insertion was attempted on a full heap.
    #[error("heap overflow: capacity of {capacity} edges already reached")]
    CapacityExceeded {
        /// Fixed capacity of the heap.
        capacity: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`HeapError`] variants.
    enum HeapErrorCode for HeapError {
        /// Storage for the requested capacity could not be reserved.
        Allocation => Allocation { .. } => "HEAP_ALLOCATION_FAILED",
        /// An insertion was attempted on a full heap.
        CapacityExceeded => CapacityExceeded { .. } => "HEAP_CAPACITY_EXCEEDED",
    }
}

/// An error produced by [`crate::DisjointSet`] construction and lookups.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum UnionFindError {
    /// Storage for the parent and rank tables could not be reserved.
    #[error("failed to reserve union-find storage for {vertex_count} vertices")]
    Allocation {
        /// Requested vertex count.
        vertex_count: usize,
    },
    /// The vertex id is outside `0..vertex_count`.
    #[error("vertex {vertex} is out of range for {vertex_count} vertices")]
    VertexOutOfRange {
        /// The requested vertex id.
        vertex: usize,
        /// Number of vertices tracked by the structure.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`UnionFindError`] variants.
    enum UnionFindErrorCode for UnionFindError {
        /// Storage for the parent and rank tables could not be reserved.
        Allocation => Allocation { .. } => "UNION_FIND_ALLOCATION_FAILED",
        /// The vertex id is outside `0..vertex_count`.
        VertexOutOfRange => VertexOutOfRange { .. } => "UNION_FIND_VERTEX_OUT_OF_RANGE",
    }
}

/// Errors returned while computing a minimum spanning tree or forest.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The caller requested an MST for a graph without vertices.
    #[error("cannot compute an MST for a graph with no vertices")]
    EmptyGraph,
    /// Building the edge heap failed.
    #[error(transparent)]
    Heap {
        /// Underlying heap failure.
        #[from]
        source: HeapError,
    },
    /// An edge referenced a vertex the union-find does not track.
    #[error(transparent)]
    UnionFind {
        /// Underlying lookup failure.
        #[from]
        source: UnionFindError,
    },
    /// Adding an accepted edge overflowed the `i64` running total.
    #[error("MST weight overflowed: {accumulated} + {weight} does not fit in i64")]
    WeightOverflow {
        /// Running total before the failing edge.
        accumulated: i64,
        /// Weight of the failing edge.
        weight: i64,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The caller requested an MST for a graph without vertices.
        EmptyGraph => EmptyGraph => "MST_EMPTY_GRAPH",
        /// Building the edge heap failed.
        Heap => Heap { .. } => "MST_HEAP",
        /// An edge referenced a vertex the union-find does not track.
        UnionFind => UnionFind { .. } => "MST_UNION_FIND",
        /// Adding an accepted edge overflowed the running total.
        WeightOverflow => WeightOverflow { .. } => "MST_WEIGHT_OVERFLOW",
    }
}
