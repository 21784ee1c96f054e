//! Distance matrices.
//!
//! Provides a dense distance matrix snapshot of a graph for the exact solver.

mod matrix;

pub use matrix::DistanceMatrix;
