//! Exact TSP solver.
//!
//! - [`BranchAndBound`] — depth-first branch-and-bound over a [`Graph`](crate::graph::Graph)
//! - [`branch_and_bound`] — the same search over a bare distance matrix
//! - [`nearest_neighbor_tour`] — greedy seed tour used as the initial incumbent

mod branch_and_bound;
mod frame;
mod greedy;

pub use branch_and_bound::{branch_and_bound, BranchAndBound, SearchStats};
pub use greedy::nearest_neighbor_tour;
