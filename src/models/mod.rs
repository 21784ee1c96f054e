//! Core value types for weighted undirected graphs and TSP tours.
//!
//! Provides vertex identities, vertices with their adjacency, edges with a
//! deterministic total order, tours produced by the solvers, and the solver
//! trait that ties them together.

mod edge;
mod solver;
mod tour;
mod vertex;

pub use edge::Edge;
pub use solver::TspSolver;
pub use tour::{path_length, Tour};
pub use vertex::{Vertex, VertexId};
