//! Solver configuration.
//!
//! All settings deserialize with defaults for missing fields, so a partial
//! JSON document is a valid configuration.

use serde::{Deserialize, Serialize};

/// Settings for the branch-and-bound solver.
///
/// # Examples
///
/// ```
/// use metric_tsp::config::ExactConfig;
///
/// let config = ExactConfig::default().with_max_vertices(12);
/// assert_eq!(config.max_vertices, Some(12));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExactConfig {
    /// Refuse graphs with more vertices than this. `None` means no cap.
    pub max_vertices: Option<usize>,
}

impl ExactConfig {
    pub fn with_max_vertices(mut self, max: usize) -> Self {
        self.max_vertices = Some(max);
        self
    }
}

/// Settings for the MST + matching approximation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApproximationConfig {
    /// Pair odd-degree vertices the greedy matching left over, in vertex
    /// order, at their shortest-path distance. Keeps the multigraph Eulerian
    /// at the cost of the 1.5 bound. When off, leftovers make the solver fail
    /// with [`Error::NotEulerian`](crate::Error::NotEulerian).
    pub pair_unmatched: bool,
}

impl Default for ApproximationConfig {
    fn default() -> Self {
        Self {
            pair_unmatched: true,
        }
    }
}

impl ApproximationConfig {
    pub fn with_pair_unmatched(mut self, pair: bool) -> Self {
        self.pair_unmatched = pair;
        self
    }
}

/// Combined configuration for both solvers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub exact: ExactConfig,
    pub approximation: ApproximationConfig,
}
