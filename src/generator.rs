//! Random complete-graph generation.

use log::debug;
use rand::Rng;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Builds complete graphs with random weights.
///
/// Each weight is `uniform[0, 1) * uniform_int[0, max_factor)`, so a share
/// of the edges weigh exactly zero. The result is generally not metric; run
/// [`Graph::assure_metric`] before handing it to a solver.
///
/// # Examples
///
/// ```
/// use metric_tsp::generator::GraphGenerator;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let g = GraphGenerator::new(5).generate(&mut rng).unwrap();
/// assert_eq!(g.num_vertices(), 5);
/// assert_eq!(g.num_edges(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphGenerator {
    size: usize,
    max_factor: u32,
}

impl GraphGenerator {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            max_factor: 50,
        }
    }

    /// Upper bound (exclusive) of the integer weight factor. Clamped to 1.
    pub fn with_max_factor(mut self, max_factor: u32) -> Self {
        self.max_factor = max_factor.max(1);
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Generates a complete graph over `size` auto-labelled vertices.
    ///
    /// Fails with [`Error::NoVertices`] if `size` is zero.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Graph> {
        let mut graph = Graph::with_vertices(self.size);
        connect_all(&mut graph, self.max_factor, rng)?;
        Ok(graph)
    }
}

/// Connects every pair of vertices already in `graph` with a random weight.
///
/// Fails with [`Error::NoVertices`] on an empty graph.
pub fn connect_all<R: Rng>(graph: &mut Graph, max_factor: u32, rng: &mut R) -> Result<()> {
    if graph.num_vertices() == 0 {
        return Err(Error::NoVertices);
    }
    let ids: Vec<_> = graph.vertex_ids().cloned().collect();
    let max_factor = max_factor.max(1);
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            let weight = rng.random::<f64>() * f64::from(rng.random_range(0..max_factor));
            graph.connect(a, b, weight)?;
        }
    }
    debug!(
        "generated {} edges over {} vertices",
        graph.num_edges(),
        graph.num_vertices()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_complete() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = GraphGenerator::new(8).generate(&mut rng).expect("non-empty");
        assert_eq!(g.num_edges(), 28);
        assert!(g.vertices().iter().all(|v| v.degree() == 7));
        assert!(g
            .edges()
            .iter()
            .all(|e| (0.0..49.0).contains(&e.weight())));
    }

    #[test]
    fn test_seed_is_reproducible() {
        let generator = GraphGenerator::new(6);
        let a = generator
            .generate(&mut StdRng::seed_from_u64(3))
            .expect("non-empty");
        let b = generator
            .generate(&mut StdRng::seed_from_u64(3))
            .expect("non-empty");
        let weights = |g: &Graph| g.edges().iter().map(|e| e.weight()).collect::<Vec<_>>();
        assert_eq!(weights(&a), weights(&b));
    }

    #[test]
    fn test_zero_size() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            GraphGenerator::new(0).generate(&mut rng).map(|g| g.num_vertices()),
            Err(Error::NoVertices)
        );
    }

    #[test]
    fn test_single_vertex_has_no_edges() {
        let mut rng = StdRng::seed_from_u64(0);
        let g = GraphGenerator::new(1).generate(&mut rng).expect("non-empty");
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn test_factor_one_gives_zero_weights() {
        let mut rng = StdRng::seed_from_u64(9);
        let g = GraphGenerator::new(4)
            .with_max_factor(1)
            .generate(&mut rng)
            .expect("non-empty");
        assert!(g.edges().iter().all(|e| e.weight() == 0.0));
    }
}
