//! Vertex identity and adjacency.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Edge;

/// Label identifying a vertex, unique within one [`Graph`](crate::graph::Graph).
///
/// # Examples
///
/// ```
/// use metric_tsp::models::VertexId;
///
/// let id = VertexId::from("V3");
/// assert_eq!(id.as_str(), "V3");
/// assert_eq!(VertexId::sequential(3), id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(String);

impl VertexId {
    /// Auto-assigned label for the `n`-th sequential vertex (`V{n}`).
    pub fn sequential(n: usize) -> Self {
        Self(format!("V{n}"))
    }

    /// Returns the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VertexId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for VertexId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for VertexId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A graph node: an immutable identity plus the edges to its neighbours.
///
/// Adjacency is keyed by neighbour identity, never by reference; the owning
/// graph keeps both sides of every edge in sync. Two vertices are equal iff
/// their identities are equal.
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    neighbourhood: BTreeMap<VertexId, Edge>,
}

impl Vertex {
    pub(crate) fn new(id: VertexId) -> Self {
        Self {
            id,
            neighbourhood: BTreeMap::new(),
        }
    }

    /// The vertex identity.
    pub fn id(&self) -> &VertexId {
        &self.id
    }

    /// Number of incident edges.
    pub fn degree(&self) -> usize {
        self.neighbourhood.len()
    }

    /// Returns `true` if a direct edge to `other` exists.
    pub fn has_direct_connection(&self, other: &VertexId) -> bool {
        self.neighbourhood.contains_key(other)
    }

    /// The direct edge to `other`, if any.
    pub fn edge_to(&self, other: &VertexId) -> Option<&Edge> {
        self.neighbourhood.get(other)
    }

    /// Neighbour identities in id order.
    pub fn neighbours(&self) -> impl Iterator<Item = &VertexId> {
        self.neighbourhood.keys()
    }

    /// Incident edges in neighbour-id order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.neighbourhood.values()
    }

    pub(crate) fn attach(&mut self, neighbour: VertexId, edge: Edge) -> Option<Edge> {
        self.neighbourhood.insert(neighbour, edge)
    }

    pub(crate) fn detach(&mut self, neighbour: &VertexId) -> Option<Edge> {
        self.neighbourhood.remove(neighbour)
    }

    pub(crate) fn edge_to_mut(&mut self, neighbour: &VertexId) -> Option<&mut Edge> {
        self.neighbourhood.get_mut(neighbour)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex{{ID:{}, {} connections:", self.id, self.degree())?;
        for (neighbour, edge) in &self.neighbourhood {
            write!(f, "\t{} ({})", neighbour, edge.weight())?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_equality_by_id() {
        let mut a = Vertex::new(VertexId::from("A"));
        let b = Vertex::new(VertexId::from("A"));
        a.attach(
            VertexId::from("B"),
            Edge::new(VertexId::from("A"), VertexId::from("B"), 1.0),
        );
        assert_eq!(a, b);
        assert_ne!(a.degree(), b.degree());
    }

    #[test]
    fn test_attach_detach() {
        let mut v = Vertex::new(VertexId::from("V0"));
        let n = VertexId::from("V1");
        v.attach(n.clone(), Edge::new(v.id().clone(), n.clone(), 2.5));
        assert!(v.has_direct_connection(&n));
        assert_eq!(v.edge_to(&n).map(Edge::weight), Some(2.5));

        let removed = v.detach(&n).expect("edge present");
        assert_eq!(removed.weight(), 2.5);
        assert_eq!(v.degree(), 0);
    }

    #[test]
    fn test_display() {
        let mut v = Vertex::new(VertexId::from("V0"));
        v.attach(
            VertexId::from("V1"),
            Edge::new(VertexId::from("V0"), VertexId::from("V1"), 3.0),
        );
        assert_eq!(v.to_string(), "Vertex{ID:V0, 1 connections:\tV1 (3)}");
    }
}
