//! Greedy near-minimum perfect matching over odd-degree vertices.
//!
//! # Algorithm
//!
//! Visit the vertices in order. An unmatched vertex is paired with the
//! unmatched neighbour behind its cheapest incident edge. This is a
//! heuristic, not the exact minimum-weight matching: on incomplete graphs a
//! vertex may find every neighbour already taken and stay unmatched.
//!
//! # Complexity
//!
//! O(V · Δ) where Δ is the maximum degree.

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::models::VertexId;

/// Result of [`greedy_matching`].
#[derive(Debug, Clone)]
pub struct Matching {
    /// Same vertices as the input, with only the matching edges.
    pub graph: Graph,
    /// Vertices left without a partner, in vertex order.
    pub unmatched: Vec<VertexId>,
}

impl Matching {
    /// Returns `true` if every vertex has exactly one partner.
    pub fn is_perfect(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// Greedily matches the vertices of `odd`.
///
/// # Examples
///
/// ```
/// use metric_tsp::graph::Graph;
/// use metric_tsp::approx::greedy_matching;
///
/// let mut g = Graph::with_vertices(4);
/// let ids: Vec<_> = g.vertex_ids().cloned().collect();
/// g.connect(&ids[0], &ids[1], 1.0).unwrap();
/// g.connect(&ids[0], &ids[2], 2.0).unwrap();
/// g.connect(&ids[2], &ids[3], 1.0).unwrap();
/// g.connect(&ids[1], &ids[3], 4.0).unwrap();
///
/// let m = greedy_matching(&g).unwrap();
/// assert!(m.is_perfect());
/// assert_eq!(m.graph.num_edges(), 2);
/// assert!(m.graph.has_direct_edge(&ids[0], &ids[1]));
/// assert!(m.graph.has_direct_edge(&ids[2], &ids[3]));
/// ```
pub fn greedy_matching(odd: &Graph) -> Result<Matching> {
    let mut matching = Graph::new();
    for id in odd.vertex_ids() {
        matching.add_vertex_with_id(id.as_str())?;
    }

    let is_free = |m: &Graph, id: &VertexId| m.vertex(id).is_some_and(|v| v.degree() == 0);
    let mut unmatched = Vec::new();

    for vertex in odd.vertices() {
        if !is_free(&matching, vertex.id()) {
            continue;
        }
        let cheapest = vertex
            .edges()
            .filter(|e| {
                e.other(vertex.id())
                    .is_some_and(|other| is_free(&matching, other))
            })
            .min()
            .cloned();

        match cheapest {
            Some(edge) => {
                matching.connect(edge.v1(), edge.v2(), edge.weight())?;
            }
            None => unmatched.push(vertex.id().clone()),
        }
    }

    if !unmatched.is_empty() {
        warn!(
            "greedy matching left {} odd vertices unmatched",
            unmatched.len()
        );
    }
    Ok(Matching {
        graph: matching,
        unmatched,
    })
}

/// Pairs leftover vertices in order, linking each pair at its
/// shortest-path distance in `original`.
///
/// Leftovers are never adjacent to each other (the greedy pass would have
/// matched them), so the link stands for a walk through `original` rather
/// than a direct edge. Fails with
/// [`Error::NoDirectEdge`](crate::Error::NoDirectEdge) if a pair is not
/// reachable at all. An odd leftover count leaves the last vertex unpaired.
pub fn pair_unmatched(matching: &mut Matching, original: &Graph) -> Result<()> {
    let mut chunks = matching.unmatched.chunks_exact(2);
    let mut pairs = Vec::new();
    for pair in &mut chunks {
        let distance = original
            .shortest_paths_from(&pair[0])?
            .distance_to(&pair[1])
            .filter(|d| d.is_finite())
            .ok_or_else(|| Error::no_direct_edge(&pair[0], &pair[1]))?;
        pairs.push((pair[0].clone(), pair[1].clone(), distance));
    }
    let rest = chunks.remainder().to_vec();

    for (a, b, weight) in pairs {
        debug!("pairing leftover {a} with {b} at distance {weight}");
        matching.graph.connect(&a, &b, weight)?;
    }
    matching.unmatched = rest;
    Ok(())
}
