//! Error type shared by the graph model and both solvers.

use thiserror::Error as ThisError;

use crate::models::VertexId;

/// Failures raised by graph operations, solvers and the generator.
///
/// Structural errors (`NoSuchVertex`, `DuplicateVertex`, `InvalidIdentity`,
/// `NoDirectEdge`) signal caller misuse and are never recovered internally.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    #[error("invalid vertex id: {0:?}")]
    InvalidIdentity(String),
    #[error("vertex {0} already exists")]
    DuplicateVertex(VertexId),
    #[error("no such vertex: {0}")]
    NoSuchVertex(VertexId),
    #[error("no direct edge between {from} and {to}")]
    NoDirectEdge { from: VertexId, to: VertexId },
    #[error("unsupported weight type: {0}")]
    UnsupportedWeightType(String),
    #[error("invalid weight {0}: weights must be finite and non-negative")]
    InvalidWeight(f64),
    #[error("cannot connect {0} to itself")]
    SelfLoop(VertexId),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no vertices to connect")]
    NoVertices,
    #[error("graph is disconnected: spanning tree has {found} of {expected} edges")]
    Disconnected { found: usize, expected: usize },
    #[error("multigraph has no eulerian circuit")]
    NotEulerian,
    #[error("no hamiltonian cycle of finite cost")]
    NoHamiltonianCycle,
    #[error("graph has {found} vertices, exact solver is capped at {max}")]
    TooManyVertices { found: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn no_direct_edge(from: &VertexId, to: &VertexId) -> Self {
        Self::NoDirectEdge {
            from: from.clone(),
            to: to.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = Error::no_direct_edge(&VertexId::from("V0"), &VertexId::from("V3"));
        assert_eq!(e.to_string(), "no direct edge between V0 and V3");

        let e = Error::invalid_input("a tour needs at least 2 vertices");
        assert_eq!(e.to_string(), "invalid input: a tour needs at least 2 vertices");
    }
}
