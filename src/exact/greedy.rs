//! Nearest-neighbor seed tour.
//!
//! Builds a tour greedily: starting from `start`, always move to the nearest
//! unvisited vertex, then close the cycle. Its cost seeds the incumbent of
//! the branch-and-bound search.
//!
//! # Complexity
//!
//! O(n²) where n = number of vertices.

use crate::distance::DistanceMatrix;

/// Greedy nearest-neighbor tour from `start`.
///
/// Returns the visiting order (starting with `start`) and the closed tour
/// cost. Ties go to the lowest index. Unreachable steps contribute +inf.
///
/// # Examples
///
/// ```
/// use metric_tsp::distance::DistanceMatrix;
/// use metric_tsp::exact::nearest_neighbor_tour;
///
/// let dm = DistanceMatrix::from_data(4, vec![
///     0.0, 1.0, 2.0, 3.0,
///     1.0, 0.0, 1.0, 2.0,
///     2.0, 1.0, 0.0, 1.0,
///     3.0, 2.0, 1.0, 0.0,
/// ]).unwrap();
///
/// let (order, cost) = nearest_neighbor_tour(&dm, 0);
/// assert_eq!(order, vec![0, 1, 2, 3]);
/// assert_eq!(cost, 6.0);
/// ```
pub fn nearest_neighbor_tour(distances: &DistanceMatrix, start: usize) -> (Vec<usize>, f64) {
    let n = distances.size();
    if n == 0 {
        return (Vec::new(), 0.0);
    }

    let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != start).collect();
    let mut order = Vec::with_capacity(n);
    order.push(start);
    let mut current = start;

    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        unvisited.retain(|&i| i != next);
        order.push(next);
        current = next;
    }

    let cost = distances.tour_cost(&order);
    (order, cost)
}
