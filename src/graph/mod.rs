//! Undirected weighted graph with metric closure.
//!
//! Vertices live in an insertion-ordered arena owned by [`Graph`]; adjacency
//! entries hold neighbour identities rather than references, so the cyclic
//! neighbour structure needs no shared ownership.

mod arena;
mod metric;
mod shortest_path;

pub use arena::Graph;
pub use shortest_path::{ShortestPathEngine, ShortestPaths};
