//! Single-source shortest paths (Dijkstra).
//!
//! # Algorithm
//!
//! Tentative distances start at +inf except the source at 0. The unsettled
//! vertex with the smallest tentative distance is popped from a binary heap
//! and every incident edge is relaxed; a neighbour's distance and
//! predecessor change only on a strictly shorter path. Stale heap entries
//! are skipped on pop.
//!
//! # Complexity
//!
//! O((V + E) log V).
//!
//! # Reference
//!
//! Dijkstra, E.W. (1959). "A note on two problems in connexion with graphs",
//! *Numerische Mathematik* 1, 269-271.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::Graph;
use crate::models::VertexId;

#[derive(Debug, Clone, Copy)]
struct State {
    cost: f64,
    index: usize,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for State {
    // Reversed so the max-heap pops the cheapest state first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Reusable Dijkstra state over a graph's vertex indices.
///
/// Buffers are sized once; [`reset`](Self::reset) must be called between
/// runs from different sources.
#[derive(Debug, Clone)]
pub struct ShortestPathEngine {
    distance: Vec<f64>,
    previous: Vec<Option<usize>>,
}

impl ShortestPathEngine {
    /// Creates an engine for a graph with `n` vertices, already reset.
    pub fn new(n: usize) -> Self {
        Self {
            distance: vec![f64::INFINITY; n],
            previous: vec![None; n],
        }
    }

    /// Sets every tentative distance back to +inf and clears predecessors.
    pub fn reset(&mut self) {
        self.distance.fill(f64::INFINITY);
        self.previous.fill(None);
    }

    /// Runs Dijkstra from vertex index `source`.
    ///
    /// # Panics
    ///
    /// Panics if `source` or the graph's vertex count do not match the
    /// engine's size.
    pub fn compute(&mut self, graph: &Graph, source: usize) {
        let mut heap = BinaryHeap::new();
        self.distance[source] = 0.0;
        heap.push(State {
            cost: 0.0,
            index: source,
        });

        while let Some(State { cost, index }) = heap.pop() {
            if cost > self.distance[index] {
                continue;
            }
            let vertex = graph.vertex_at(index);
            for edge in vertex.edges() {
                let Some(next) = edge.other(vertex.id()).and_then(|n| graph.index_of(n)) else {
                    continue;
                };
                let through = cost + edge.weight();
                if through < self.distance[next] {
                    self.distance[next] = through;
                    self.previous[next] = Some(index);
                    heap.push(State {
                        cost: through,
                        index: next,
                    });
                }
            }
        }
    }

    /// Tentative (after [`compute`](Self::compute), final) distance to `index`.
    pub fn distance(&self, index: usize) -> f64 {
        self.distance[index]
    }

    /// Predecessor of `index` on its shortest path, if settled.
    pub fn previous(&self, index: usize) -> Option<usize> {
        self.previous[index]
    }
}

/// Shortest-path tree from one source, resolved to vertex ids.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    ids: Vec<VertexId>,
    distance: Vec<f64>,
    previous: Vec<Option<usize>>,
}

impl ShortestPaths {
    pub(crate) fn from_engine(graph: &Graph, engine: &ShortestPathEngine) -> Self {
        Self {
            ids: graph.vertex_ids().cloned().collect(),
            distance: engine.distance.clone(),
            previous: engine.previous.clone(),
        }
    }

    fn position(&self, target: &VertexId) -> Option<usize> {
        self.ids.iter().position(|id| id == target)
    }

    /// Distance to `target`; +inf if unreachable, `None` if unknown.
    pub fn distance_to(&self, target: &VertexId) -> Option<f64> {
        self.position(target).map(|i| self.distance[i])
    }

    /// Vertex sequence from the source to `target`, both inclusive.
    ///
    /// `None` if `target` is unknown or unreachable.
    pub fn path_to(&self, target: &VertexId) -> Option<Vec<VertexId>> {
        let mut at = self.position(target)?;
        if self.distance[at].is_infinite() {
            return None;
        }
        let mut path = vec![self.ids[at].clone()];
        while let Some(prev) = self.previous[at] {
            path.push(self.ids[prev].clone());
            at = prev;
        }
        path.reverse();
        Some(path)
    }
}
