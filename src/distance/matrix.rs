//! Dense distance matrix.

use crate::graph::Graph;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built from a graph's direct edges; rows and columns follow the graph's
/// vertex insertion order. Pairs without a direct edge hold +inf and the
/// diagonal holds zero.
///
/// # Examples
///
/// ```
/// use metric_tsp::graph::Graph;
/// use metric_tsp::distance::DistanceMatrix;
///
/// let mut g = Graph::with_vertices(3);
/// g.connect(&"V0".into(), &"V1".into(), 5.0).unwrap();
/// let dm = DistanceMatrix::from_graph(&g);
/// assert_eq!(dm.get(0, 1), 5.0);
/// assert_eq!(dm.get(1, 0), 5.0);
/// assert!(dm.get(0, 2).is_infinite());
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix of the given size with +inf off the diagonal.
    pub fn new(size: usize) -> Self {
        let mut data = vec![f64::INFINITY; size * size];
        for i in 0..size {
            data[i * size + i] = 0.0;
        }
        Self { data, size }
    }

    /// Collects the direct edge weights of `graph`.
    pub fn from_graph(graph: &Graph) -> Self {
        let mut dm = Self::new(graph.num_vertices());
        for edge in graph.edges() {
            if let (Some(i), Some(j)) = (graph.index_of(edge.v1()), graph.index_of(edge.v2())) {
                dm.set(i, j, edge.weight());
                dm.set(j, i, edge.weight());
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from `from` to `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the nearest neighbor of `from` among the given candidates.
    ///
    /// Ties go to the earliest candidate. Returns `None` if `candidates` is
    /// empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }

    /// Cost of the closed tour `order[0] → … → order[n-1] → order[0]`.
    pub fn tour_cost(&self, order: &[usize]) -> f64 {
        if order.len() < 2 {
            return 0.0;
        }
        let mut cost: f64 = order.windows(2).map(|w| self.get(w[0], w[1])).sum();
        cost += self.get(order[order.len() - 1], order[0]);
        cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VertexId;

    fn sample_graph() -> Graph {
        let mut g = Graph::with_vertices(3);
        g.connect(&VertexId::from("V0"), &VertexId::from("V1"), 5.0)
            .expect("connect");
        g.connect(&VertexId::from("V0"), &VertexId::from("V2"), 8.0)
            .expect("connect");
        g.connect(&VertexId::from("V1"), &VertexId::from("V2"), 5.0)
            .expect("connect");
        g
    }

    #[test]
    fn test_from_graph() {
        let dm = DistanceMatrix::from_graph(&sample_graph());
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(2, 0), 8.0);
        assert_eq!(dm.get(1, 1), 0.0);
    }

    #[test]
    fn test_missing_edges_are_infinite() {
        let mut g = Graph::with_vertices(2);
        g.add_vertex();
        let dm = DistanceMatrix::from_graph(&g);
        assert!(dm.get(0, 2).is_infinite());
        assert!(dm.get(2, 0).is_infinite());
        assert_eq!(dm.get(2, 2), 0.0);
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_new_defaults() {
        let dm = DistanceMatrix::new(3);
        assert_eq!(dm.get(0, 0), 0.0);
        assert!(dm.get(0, 1).is_infinite());
    }

    #[test]
    fn test_nearest_neighbor() {
        let dm = DistanceMatrix::from_graph(&sample_graph());
        assert_eq!(dm.nearest_neighbor(0, &[1, 2]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, &[2]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, &[]), None);
        // 1→0 and 1→2 both cost 5
        assert_eq!(dm.nearest_neighbor(1, &[2, 0]), Some(2));
    }

    #[test]
    fn test_tour_cost() {
        let dm = DistanceMatrix::from_graph(&sample_graph());
        assert_eq!(dm.tour_cost(&[0, 1, 2]), 18.0);
        assert_eq!(dm.tour_cost(&[0]), 0.0);
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert_eq!(dm.get(0, 1), 10.0);
        assert_eq!(dm.get(1, 0), 15.0);
        assert_eq!(dm.tour_cost(&[0, 1]), 25.0);
    }
}
