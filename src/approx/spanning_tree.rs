//! Minimum spanning tree by Kruskal's algorithm.
//!
//! # Algorithm
//!
//! Copy every vertex into an edgeless graph, then walk the original edges in
//! ascending order (ties broken by canonical endpoints). An edge is taken
//! when its endpoints are not yet reachable from each other inside the
//! tree. Stops once the tree has |V| − 1 edges.
//!
//! # Complexity
//!
//! O(E · V): each candidate edge costs one reachability search in the tree.
//!
//! # Reference
//!
//! Kruskal, J.B. (1956). "On the shortest spanning subtree of a graph and the
//! traveling salesman problem", *Proc. AMS* 7(1), 48-50.

use log::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Builds a minimum spanning tree (forest, if `original` is disconnected).
///
/// The result holds the same vertex ids as `original`, in the same order.
///
/// # Examples
///
/// ```
/// use metric_tsp::graph::Graph;
/// use metric_tsp::approx::minimum_spanning_tree;
///
/// let mut g = Graph::with_vertices(3);
/// g.connect(&"V0".into(), &"V1".into(), 1.0).unwrap();
/// g.connect(&"V1".into(), &"V2".into(), 2.0).unwrap();
/// g.connect(&"V0".into(), &"V2".into(), 3.0).unwrap();
///
/// let mst = minimum_spanning_tree(&g).unwrap();
/// assert_eq!(mst.num_edges(), 2);
/// assert!(!mst.has_direct_edge(&"V0".into(), &"V2".into()));
/// ```
pub fn minimum_spanning_tree(original: &Graph) -> Result<Graph> {
    let mut mst = Graph::new();
    for id in original.vertex_ids() {
        mst.add_vertex_with_id(id.as_str())?;
    }

    let target = original.num_vertices().saturating_sub(1);
    for edge in original.edges() {
        if mst.num_edges() >= target {
            break;
        }
        let (Some(i), Some(j)) = (mst.index_of(edge.v1()), mst.index_of(edge.v2())) else {
            return Err(Error::NoSuchVertex(edge.v1().clone()));
        };
        if !mst.is_reachable(i, j) {
            mst.connect(edge.v1(), edge.v2(), edge.weight())?;
        }
    }

    debug!(
        "spanning tree: {} edges over {} vertices",
        mst.num_edges(),
        mst.num_vertices()
    );
    Ok(mst)
}
