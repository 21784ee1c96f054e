//! Eulerian circuit over the union of tree and matching edges.
//!
//! # Algorithm
//!
//! Backtracking edge-exhaustion: from the current vertex try each unused
//! incident link (tree links before matching links), mark it used and push
//! it on the trail, recurse, and on failure pop it and unmark it. A move is
//! skipped when the links still unused would no longer be reachable from
//! the vertex it leads to, so in an Eulerian multigraph the first surviving
//! choice always completes (Fleury's rule).
//!
//! # Complexity
//!
//! O(E²) on Eulerian input.

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Which spanning structure a link came from. Tree links sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LinkKind {
    Tree,
    Matching,
}

/// One edge of the multigraph, by vertex index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub kind: LinkKind,
}

impl Link {
    fn other(&self, v: usize) -> usize {
        if self.a == v {
            self.b
        } else {
            self.a
        }
    }
}

/// Multigraph of tree and matching edges over the original vertex indices.
///
/// A pair joined by both a tree edge and a matching edge gets two links.
#[derive(Debug, Clone)]
pub struct Multigraph {
    links: Vec<Link>,
    incidence: Vec<Vec<usize>>,
}

impl Multigraph {
    /// Unites the edges of `tree` and `matching`, indexing vertices by their
    /// position in `original`.
    pub fn from_parts(original: &Graph, tree: &Graph, matching: &Graph) -> Result<Self> {
        let mut multigraph = Self {
            links: Vec::with_capacity(tree.num_edges() + matching.num_edges()),
            incidence: vec![Vec::new(); original.num_vertices()],
        };
        for (part, kind) in [(tree, LinkKind::Tree), (matching, LinkKind::Matching)] {
            for edge in part.edges() {
                let a = original
                    .index_of(edge.v1())
                    .ok_or_else(|| Error::NoSuchVertex(edge.v1().clone()))?;
                let b = original
                    .index_of(edge.v2())
                    .ok_or_else(|| Error::NoSuchVertex(edge.v2().clone()))?;
                multigraph.push(Link { a, b, kind });
            }
        }
        Ok(multigraph)
    }

    /// Adds `link`, keeping each incidence list ordered by kind and then
    /// by insertion.
    fn push(&mut self, link: Link) {
        let id = self.links.len();
        self.links.push(link);
        for end in [link.a, link.b] {
            let list = &self.incidence[end];
            let at = list.partition_point(|&other| self.links[other].kind <= link.kind);
            self.incidence[end].insert(at, id);
        }
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Returns `true` if every vertex has even degree.
    pub fn is_even(&self) -> bool {
        self.incidence.iter().all(|links| links.len() % 2 == 0)
    }

    /// Link indices of a closed walk from `start` using every link exactly
    /// once, or `None` if no such circuit exists.
    pub fn eulerian_circuit(&self, start: usize) -> Option<Vec<usize>> {
        if start >= self.incidence.len() {
            return None;
        }
        let mut used = vec![false; self.links.len()];
        let mut trail = Vec::with_capacity(self.links.len());
        if !self.unused_reachable_from(start, &used) {
            return None;
        }
        self.extend(start, start, &mut used, &mut trail)
            .then_some(trail)
    }

    fn extend(&self, at: usize, start: usize, used: &mut [bool], trail: &mut Vec<usize>) -> bool {
        if trail.len() == self.links.len() {
            return at == start;
        }
        for &link in &self.incidence[at] {
            if used[link] {
                continue;
            }
            let next = self.links[link].other(at);
            used[link] = true;
            trail.push(link);
            if self.unused_reachable_from(next, used) && self.extend(next, start, used, trail) {
                return true;
            }
            trail.pop();
            used[link] = false;
        }
        false
    }

    /// Every unused link touches a vertex reachable from `from` over unused
    /// links.
    fn unused_reachable_from(&self, from: usize, used: &[bool]) -> bool {
        let mut seen = vec![false; self.incidence.len()];
        let mut stack = vec![from];
        seen[from] = true;
        while let Some(v) = stack.pop() {
            for &link in &self.incidence[v] {
                if used[link] {
                    continue;
                }
                let next = self.links[link].other(v);
                if !seen[next] {
                    seen[next] = true;
                    stack.push(next);
                }
            }
        }
        self.links
            .iter()
            .zip(used)
            .all(|(link, &u)| u || seen[link.a])
    }

    /// Vertex sequence of walking `trail` from `start`, both ends included.
    pub fn walk(&self, start: usize, trail: &[usize]) -> Vec<usize> {
        let mut vertices = Vec::with_capacity(trail.len() + 1);
        vertices.push(start);
        let mut at = start;
        for &link in trail {
            at = self.links[link].other(at);
            vertices.push(at);
        }
        vertices
    }
}

/// Keeps the first occurrence of each vertex, turning a closed walk into a
/// Hamiltonian order.
pub fn shortcut(walk: &[usize]) -> Vec<usize> {
    let mut seen = Vec::new();
    let mut order = Vec::new();
    for &v in walk {
        if v >= seen.len() {
            seen.resize(v + 1, false);
        }
        if !seen[v] {
            seen[v] = true;
            order.push(v);
        }
    }
    order
}
