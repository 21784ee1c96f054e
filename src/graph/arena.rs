//! Graph storage: vertex arena, adjacency and the ordered edge set.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::error::{Error, Result};
use crate::models::{Edge, Vertex, VertexId};

/// An undirected, edge-weighted graph.
///
/// Vertices are kept in insertion order; that order defines vertex indices
/// used by the solvers ("vertex 0" is the first vertex added). Every edge is
/// recorded in both endpoints' adjacency and once in an ordered edge set.
///
/// # Examples
///
/// ```
/// use metric_tsp::graph::Graph;
///
/// let mut g = Graph::new();
/// let a = g.add_vertex();
/// let b = g.add_vertex();
/// let c = g.add_vertex_with_id("depot").unwrap();
/// g.connect(&a, &b, 2.0).unwrap();
/// g.connect(&b, &c, 3.0).unwrap();
///
/// assert_eq!(a.as_str(), "V0");
/// assert_eq!(g.num_edges(), 2);
/// assert!(g.is_connected(&a, &c).unwrap());
/// assert!(!g.has_direct_edge(&a, &c));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: HashMap<VertexId, usize>,
    edges: BTreeSet<Edge>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `n` auto-labelled vertices `V0..V{n-1}` and no edges.
    pub fn with_vertices(n: usize) -> Self {
        let mut g = Self::new();
        for _ in 0..n {
            g.add_vertex();
        }
        g
    }

    /// Adds a vertex labelled `V{k}` with the lowest unused `k`.
    pub fn add_vertex(&mut self) -> VertexId {
        let mut k = 0;
        while self.index.contains_key(&VertexId::sequential(k)) {
            k += 1;
        }
        let id = VertexId::sequential(k);
        self.insert_vertex(id.clone());
        id
    }

    /// Adds a vertex with an explicit label.
    ///
    /// Fails with [`Error::InvalidIdentity`] for an empty or blank label and
    /// [`Error::DuplicateVertex`] if the label is taken.
    pub fn add_vertex_with_id(&mut self, id: impl Into<String>) -> Result<VertexId> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::InvalidIdentity(id));
        }
        let id = VertexId::from(id);
        if self.index.contains_key(&id) {
            return Err(Error::DuplicateVertex(id));
        }
        self.insert_vertex(id.clone());
        Ok(id)
    }

    fn insert_vertex(&mut self, id: VertexId) {
        self.index.insert(id.clone(), self.vertices.len());
        self.vertices.push(Vertex::new(id));
    }

    /// Detaches every incident edge of `id`, then removes the vertex.
    pub fn remove_vertex(&mut self, id: &VertexId) -> Result<Vertex> {
        let pos = self.require(id)?;
        let neighbours: Vec<VertexId> = self.vertices[pos].neighbours().cloned().collect();
        for neighbour in &neighbours {
            self.disconnect(id, neighbour)?;
        }

        let removed = self.vertices.remove(pos);
        self.index.remove(id);
        for (i, v) in self.vertices.iter().enumerate().skip(pos) {
            self.index.insert(v.id().clone(), i);
        }
        Ok(removed)
    }

    /// Connects `v1` and `v2`, replacing any existing edge between them.
    pub fn connect(&mut self, v1: &VertexId, v2: &VertexId, weight: f64) -> Result<Edge> {
        let i = self.require(v1)?;
        let j = self.require(v2)?;
        if i == j {
            return Err(Error::SelfLoop(v1.clone()));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight(weight));
        }

        let edge = Edge::new(v1.clone(), v2.clone(), weight);
        if let Some(previous) = self.vertices[i].attach(v2.clone(), edge.clone()) {
            self.edges.remove(&previous);
        }
        self.vertices[j].attach(v1.clone(), edge.clone());
        self.edges.insert(edge.clone());
        Ok(edge)
    }

    /// Removes the direct edge between `v1` and `v2`.
    pub fn disconnect(&mut self, v1: &VertexId, v2: &VertexId) -> Result<Edge> {
        let i = self.require(v1)?;
        let j = self.require(v2)?;
        let edge = self.vertices[i]
            .detach(v2)
            .ok_or_else(|| Error::no_direct_edge(v1, v2))?;
        self.vertices[j].detach(v1);
        self.edges.remove(&edge);
        Ok(edge)
    }

    /// Returns `true` if `v2` is reachable from `v1` through any path.
    ///
    /// Depth-first search that stops as soon as a visited vertex has a direct
    /// edge to the target.
    pub fn is_connected(&self, v1: &VertexId, v2: &VertexId) -> Result<bool> {
        let start = self.require(v1)?;
        let target = self.require(v2)?;
        Ok(self.is_reachable(start, target))
    }

    pub(crate) fn is_reachable(&self, start: usize, target: usize) -> bool {
        if start == target {
            return true;
        }
        let target_id = self.vertices[target].id();
        let mut visited = vec![false; self.vertices.len()];
        let mut stack = vec![start];
        visited[start] = true;

        while let Some(u) = stack.pop() {
            let vertex = &self.vertices[u];
            if vertex.has_direct_connection(target_id) {
                return true;
            }
            for neighbour in vertex.neighbours() {
                let Some(&n) = self.index.get(neighbour) else {
                    continue;
                };
                if !visited[n] {
                    visited[n] = true;
                    stack.push(n);
                }
            }
        }
        false
    }

    /// Returns `true` if both vertices exist and share a direct edge.
    pub fn has_direct_edge(&self, v1: &VertexId, v2: &VertexId) -> bool {
        self.vertex(v1)
            .is_some_and(|v| v.has_direct_connection(v2))
    }

    /// The direct edge between `v1` and `v2`.
    pub fn edge(&self, v1: &VertexId, v2: &VertexId) -> Result<&Edge> {
        let i = self.require(v1)?;
        self.require(v2)?;
        self.vertices[i]
            .edge_to(v2)
            .ok_or_else(|| Error::no_direct_edge(v1, v2))
    }

    /// Weight of the direct edge between `v1` and `v2`.
    pub fn edge_cost(&self, v1: &VertexId, v2: &VertexId) -> Result<f64> {
        self.edge(v1, v2).map(Edge::weight)
    }

    /// Overwrites the weight of an existing edge in both adjacency maps and
    /// the edge set.
    pub(crate) fn update_weight(&mut self, v1: &VertexId, v2: &VertexId, weight: f64) -> Result<()> {
        let i = self.require(v1)?;
        let j = self.require(v2)?;
        let old = self.vertices[i]
            .edge_to_mut(v2)
            .ok_or_else(|| Error::no_direct_edge(v1, v2))?;
        self.edges.remove(&*old);
        old.update_weight(weight);
        let updated = old.clone();
        if let Some(twin) = self.vertices[j].edge_to_mut(v1) {
            twin.update_weight(weight);
        }
        self.edges.insert(updated);
        Ok(())
    }

    pub fn has_vertex(&self, id: &VertexId) -> bool {
        self.index.contains_key(id)
    }

    pub fn vertex(&self, id: &VertexId) -> Option<&Vertex> {
        self.index.get(id).map(|&i| &self.vertices[i])
    }

    /// Position of `id` in insertion order.
    pub fn index_of(&self, id: &VertexId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All vertex ids in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = &VertexId> {
        self.vertices.iter().map(Vertex::id)
    }

    /// All edges, ordered by weight then canonical endpoints.
    pub fn edges(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn vertex_at(&self, i: usize) -> &Vertex {
        &self.vertices[i]
    }

    fn require(&self, id: &VertexId) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| Error::NoSuchVertex(id.clone()))
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph object containing:")?;
        if self.vertices.len() <= 16 {
            for v in &self.vertices {
                writeln!(f, "{v}")?;
            }
        } else {
            for v in &self.vertices {
                write!(f, ", {}", v.id())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
