//! Odd-degree induced subgraph.

use log::debug;

use crate::error::Result;
use crate::graph::Graph;

/// Collects the vertices of odd degree in `mst` and connects them with the
/// edges `original` has between them, at their original weights.
///
/// By the handshake lemma the number of odd vertices is always even.
///
/// # Examples
///
/// ```
/// use metric_tsp::graph::Graph;
/// use metric_tsp::approx::{minimum_spanning_tree, odd_degree_subgraph};
///
/// let mut g = Graph::with_vertices(3);
/// g.connect(&"V0".into(), &"V1".into(), 1.0).unwrap();
/// g.connect(&"V1".into(), &"V2".into(), 1.0).unwrap();
/// g.connect(&"V0".into(), &"V2".into(), 5.0).unwrap();
///
/// let mst = minimum_spanning_tree(&g).unwrap();
/// let odd = odd_degree_subgraph(&mst, &g).unwrap();
/// assert_eq!(odd.num_vertices(), 2);
/// assert_eq!(odd.edge_cost(&"V0".into(), &"V2".into()).unwrap(), 5.0);
/// ```
pub fn odd_degree_subgraph(mst: &Graph, original: &Graph) -> Result<Graph> {
    let mut odd = Graph::new();
    for vertex in mst.vertices().iter().filter(|v| v.degree() % 2 == 1) {
        odd.add_vertex_with_id(vertex.id().as_str())?;
    }

    let ids: Vec<_> = odd.vertex_ids().cloned().collect();
    for id in &ids {
        let Some(source) = original.vertex(id) else {
            continue;
        };
        for edge in source.edges() {
            let Some(other) = edge.other(id) else {
                continue;
            };
            if odd.has_vertex(other) && !odd.has_direct_edge(id, other) {
                odd.connect(id, other, edge.weight())?;
            }
        }
    }

    debug!(
        "odd-degree subgraph: {} vertices, {} edges",
        odd.num_vertices(),
        odd.num_edges()
    );
    Ok(odd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx::minimum_spanning_tree;
    use crate::models::VertexId;

    fn id(n: usize) -> VertexId {
        VertexId::sequential(n)
    }

    #[test]
    fn test_star_tree() {
        // MST is a star around V0: V0 has degree 3, leaves degree 1.
        let mut g = Graph::with_vertices(4);
        for leaf in 1..4 {
            g.connect(&id(0), &id(leaf), 1.0).expect("connect");
        }
        g.connect(&id(1), &id(2), 5.0).expect("connect");
        g.connect(&id(2), &id(3), 6.0).expect("connect");
        g.connect(&id(1), &id(3), 7.0).expect("connect");

        let mst = minimum_spanning_tree(&g).expect("valid graph");
        let odd = odd_degree_subgraph(&mst, &g).expect("valid graph");
        assert_eq!(odd.num_vertices(), 4);
        assert_eq!(odd.num_edges(), 6);
        assert_eq!(odd.edge_cost(&id(2), &id(3)), Ok(6.0));
    }

    #[test]
    fn test_path_tree_has_two_odd_ends() {
        let mut g = Graph::with_vertices(4);
        g.connect(&id(0), &id(1), 1.0).expect("connect");
        g.connect(&id(1), &id(2), 1.0).expect("connect");
        g.connect(&id(2), &id(3), 1.0).expect("connect");
        g.connect(&id(0), &id(3), 9.0).expect("connect");

        let mst = minimum_spanning_tree(&g).expect("valid graph");
        let odd = odd_degree_subgraph(&mst, &g).expect("valid graph");
        let ids: Vec<_> = odd.vertex_ids().cloned().collect();
        assert_eq!(ids, vec![id(0), id(3)]);
        assert_eq!(odd.edge_cost(&id(0), &id(3)), Ok(9.0));
    }

    #[test]
    fn test_odd_count_is_even() {
        let mut g = Graph::with_vertices(7);
        for i in 0..7 {
            for j in (i + 1)..7 {
                g.connect(&id(i), &id(j), ((i * 5 + j * 3) % 7) as f64 + 0.5)
                    .expect("connect");
            }
        }
        let mst = minimum_spanning_tree(&g).expect("valid graph");
        let odd = odd_degree_subgraph(&mst, &g).expect("valid graph");
        assert_eq!(odd.num_vertices() % 2, 0);
        assert!(odd.vertices().iter().all(|v| mst
            .vertex(v.id())
            .is_some_and(|m| m.degree() % 2 == 1)));
    }
}
