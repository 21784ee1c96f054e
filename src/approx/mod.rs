//! Polynomial-time TSP approximation (Christofides-style).
//!
//! - [`Christofides`] — full pipeline as a [`TspSolver`](crate::models::TspSolver)
//! - [`minimum_spanning_tree`] — Kruskal (1956), O(E·V)
//! - [`odd_degree_subgraph`] — odd-degree vertices of a tree with their original edges
//! - [`greedy_matching`] — greedy near-minimum matching, O(V·Δ)
//! - [`Multigraph`] — tree ∪ matching with a backtracking Eulerian circuit
//! - [`shortcut`] — first-occurrence reduction of a closed walk

mod christofides;
mod eulerian;
mod matching;
mod odd_vertices;
mod spanning_tree;

pub use christofides::Christofides;
pub use eulerian::{shortcut, Link, LinkKind, Multigraph};
pub use matching::{greedy_matching, pair_unmatched, Matching};
pub use odd_vertices::odd_degree_subgraph;
pub use spanning_tree::minimum_spanning_tree;
