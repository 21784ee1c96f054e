//! # metric-tsp
//!
//! Undirected weighted graphs with metric closure, and two Travelling
//! Salesman solvers over them: an exact branch-and-bound search and a
//! Christofides-style approximation.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (VertexId, Vertex, Edge, Tour, TspSolver trait)
//! - [`graph`] — Graph arena, reachability, Dijkstra, metric closure
//! - [`distance`] — Dense distance matrix snapshot
//! - [`exact`] — Branch-and-bound with a nearest-neighbor seed
//! - [`approx`] — MST + matching + Eulerian shortcutting
//! - [`generator`] — Random complete graphs
//! - [`config`] — Serializable solver settings
//!
//! ## Example
//!
//! ```
//! use metric_tsp::approx::Christofides;
//! use metric_tsp::exact::BranchAndBound;
//! use metric_tsp::generator::GraphGenerator;
//! use metric_tsp::models::TspSolver;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut graph = GraphGenerator::new(6)
//!     .generate(&mut StdRng::seed_from_u64(1))
//!     .unwrap();
//! graph.assure_metric();
//!
//! let exact = BranchAndBound::new().calculate_optimum(&graph).unwrap();
//! let approx = Christofides::new().calculate_optimum(&graph).unwrap();
//! assert!(exact.cost() <= approx.cost() + 1e-9);
//! ```

pub mod approx;
pub mod config;
pub mod distance;
pub mod error;
pub mod exact;
pub mod generator;
pub mod graph;
pub mod models;

pub use error::{Error, Result};
