//! Metric closure.

use log::{debug, warn};

use super::{Graph, ShortestPathEngine, ShortestPaths};
use crate::error::{Error, Result};
use crate::models::VertexId;

impl Graph {
    /// Rewrites every direct edge weight to the shortest-path distance
    /// between its endpoints, so the weights satisfy the triangle inequality.
    ///
    /// Weights only ever shrink. Missing edges are not added: the graph must
    /// already be connected, and pairs without a direct edge stay absent.
    /// Returns the number of weight updates applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use metric_tsp::graph::Graph;
    ///
    /// let mut g = Graph::with_vertices(3);
    /// let (a, b, c) = ("V0".into(), "V1".into(), "V2".into());
    /// g.connect(&a, &b, 1.0).unwrap();
    /// g.connect(&b, &c, 1.0).unwrap();
    /// g.connect(&a, &c, 5.0).unwrap();
    ///
    /// assert_eq!(g.assure_metric(), 1);
    /// assert_eq!(g.edge_cost(&a, &c).unwrap(), 2.0);
    /// ```
    pub fn assure_metric(&mut self) -> usize {
        let n = self.num_vertices();
        debug!("metric closure: start n={n} edges={}", self.num_edges());

        let mut engine = ShortestPathEngine::new(n);
        let mut updated = 0;
        let mut unreachable = false;

        for source in 0..n {
            engine.compute(self, source);

            let vertex = self.vertex_at(source);
            let shorter: Vec<(VertexId, VertexId, f64)> = vertex
                .edges()
                .filter_map(|edge| {
                    let far = edge.other(vertex.id())?;
                    let distance = engine.distance(self.index_of(far)?);
                    (distance < edge.weight()).then(|| (vertex.id().clone(), far.clone(), distance))
                })
                .collect();
            unreachable |= (0..n).any(|i| engine.distance(i).is_infinite());

            for (from, to, distance) in shorter {
                if self.update_weight(&from, &to, distance).is_ok() {
                    updated += 1;
                }
            }
            engine.reset();
        }

        if unreachable {
            warn!("metric closure: graph is disconnected, unreachable pairs keep no edge");
        }
        debug!("metric closure: done, {updated} weights shortened");
        updated
    }

    /// Shortest distances and paths from `source` to every vertex.
    pub fn shortest_paths_from(&self, source: &VertexId) -> Result<ShortestPaths> {
        let index = self
            .index_of(source)
            .ok_or_else(|| Error::NoSuchVertex(source.clone()))?;
        let mut engine = ShortestPathEngine::new(self.num_vertices());
        engine.compute(self, index);
        Ok(ShortestPaths::from_engine(self, &engine))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn build(n: usize, edges: &[(usize, usize, f64)]) -> Graph {
        let mut g = Graph::with_vertices(n);
        for &(a, b, w) in edges {
            g.connect(&VertexId::sequential(a), &VertexId::sequential(b), w)
                .expect("vertices exist");
        }
        g
    }

    fn assert_weights(g: &Graph, expected: &[(usize, usize, f64)]) {
        for &(a, b, w) in expected {
            let got = g
                .edge_cost(&VertexId::sequential(a), &VertexId::sequential(b))
                .expect("edge exists");
            assert!((got - w).abs() < EPS, "V{a}-V{b}: expected {w}, got {got}");
        }
    }

    #[test]
    fn test_closure_four_vertices() {
        let mut g = build(
            4,
            &[
                (0, 1, 5.0),
                (0, 2, 1.2),
                (0, 3, 2.5),
                (1, 2, 4.0),
                (1, 3, 2.0),
                (2, 3, 1.1),
            ],
        );
        g.assure_metric();
        assert_weights(
            &g,
            &[
                (0, 1, 4.3),
                (0, 2, 1.2),
                (0, 3, 2.3),
                (1, 2, 3.1),
                (1, 3, 2.0),
                (2, 3, 1.1),
            ],
        );
        assert_eq!(g.num_edges(), 6);
    }

    #[test]
    fn test_closure_five_vertices() {
        let mut g = build(
            5,
            &[
                (0, 1, 6.2),
                (0, 2, 7.0),
                (0, 3, 9.8),
                (0, 4, 2.0),
                (1, 2, 0.5),
                (1, 3, 0.6),
                (1, 4, 3.1),
                (2, 3, 1.2),
                (2, 4, 1.2),
                (3, 4, 2.7),
            ],
        );
        g.assure_metric();
        assert_weights(
            &g,
            &[
                (0, 1, 3.7),
                (0, 2, 3.2),
                (0, 3, 4.3),
                (0, 4, 2.0),
                (1, 2, 0.5),
                (1, 3, 0.6),
                (1, 4, 1.7),
                (2, 3, 1.1),
                (2, 4, 1.2),
                (3, 4, 2.3),
            ],
        );
    }

    #[test]
    fn test_already_metric_is_noop() {
        let edges = [
            (0, 1, 4.3),
            (0, 2, 1.2),
            (0, 3, 2.3),
            (1, 2, 3.1),
            (1, 3, 2.0),
            (2, 3, 1.1),
        ];
        let mut g = build(4, &edges);
        g.assure_metric();
        assert_weights(&g, &edges);
    }

    #[test]
    fn test_disconnected_leaves_components_alone() {
        let mut g = build(4, &[(0, 1, 1.0), (2, 3, 7.0)]);
        assert_eq!(g.assure_metric(), 0);
        assert_weights(&g, &[(0, 1, 1.0), (2, 3, 7.0)]);
        assert_eq!(g.num_edges(), 2);
    }

    #[test]
    fn test_shortest_paths_unknown_source() {
        let g = build(2, &[(0, 1, 1.0)]);
        assert!(matches!(
            g.shortest_paths_from(&VertexId::from("X")),
            Err(Error::NoSuchVertex(_))
        ));
    }
}
