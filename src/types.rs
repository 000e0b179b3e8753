use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use thiserror::Error;

/// Anything that can name a vertex.
///
/// `Ord` is needed to store every edge in canonical `(min, max)` form.
pub trait Vertex: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Vertex for T {}

/// Undirected edge, always stored as `(min, max)`.
pub type Edge<V> = (V, V);

/// Snapshot of a graph's adjacency: vertex to neighbors, both in insertion order.
pub type Adjacency<V> = IndexMap<V, Vec<V>>;

/// Wrapper for petgraph's graph type, node weights are vertex identifiers.
pub type UnGraph<V> = petgraph::graph::UnGraph<V, ()>;

/// Outcome of a graph mutation.
///
/// Illegal edits are ignored rather than treated as faults, so nothing here is an error.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mutation {
    Applied,
    Rejected(RejectReason),
}

impl Mutation {
    pub fn is_applied(&self) -> bool {
        matches!(self, Mutation::Applied)
    }
}

impl std::fmt::Display for Mutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mutation::Applied => write!(f, "Applied"),
            Mutation::Rejected(reason) => write!(f, "Rejected: {}", reason),
        }
    }
}

/// Why a mutation left the graph untouched.
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RejectReason {
    #[error("self-loops are not allowed")]
    SelfLoop,
    #[error("vertex already exists")]
    DuplicateVertex,
    #[error("edge already exists")]
    DuplicateEdge,
    #[error("vertex not found")]
    VertexNotFound,
    #[error("edge not found")]
    EdgeNotFound,
}

/// Orders the endpoints of an undirected edge.
pub(crate) fn canonical<V: Ord>(a: V, b: V) -> Edge<V> {
    if a <= b { (a, b) } else { (b, a) }
}
