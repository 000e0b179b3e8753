//! # grafla
//!
//! A small undirected graph container and route finding between two of its vertices:
//! every simple path, a shortest one and a longest one.
//!
//! [`Graph`] is meant to sit behind an interactive editor. Edits that make no sense (a
//! self-loop, an edge that already exists, removing something that is not there) are ignored
//! and reported as a [`Mutation`] instead of failing.
//!
//! The searches in [`pathfinder`] never look at a [`Graph`] directly, only at an
//! [`AdjacencyView`], so a plain `HashMap<V, Vec<V>>` works just as well.
//!
//! Interop with [`petgraph`](https://docs.rs/petgraph) via [`Graph::to_petgraph`] and
//! [`Graph::from_petgraph`].
//!
//! ```
//! use grafla::{Graph, Mutation, RejectReason, pathfinder};
//!
//! let mut g = Graph::new();
//! g.add_edge("A", "B");
//! g.add_edge("B", "C");
//! assert_eq!(g.add_edge("C", "B"), Mutation::Rejected(RejectReason::DuplicateEdge));
//!
//! assert_eq!(pathfinder::all_paths(&"A", &"C", &g), vec![vec!["A", "B", "C"]]);
//! ```

pub mod adjacency;
pub mod debugging;
pub mod error;
pub mod generate;
pub mod graph;
pub mod input;
pub mod output;
pub mod pathfinder;
pub mod search_blocks;
pub mod types;

#[cfg(test)]
mod testing;

pub use adjacency::AdjacencyView;
pub use error::{InputError, SearchError};
pub use graph::Graph;
pub use input::{from_file, from_str};
pub use pathfinder::{all_paths, longest_path, shortest_path};
pub use search_blocks::options::{CancelToken, SearchOptions};
pub use types::{Adjacency, Edge, Mutation, RejectReason, UnGraph, Vertex};
