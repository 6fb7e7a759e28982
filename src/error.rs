//! Error types for the postman pipeline.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PostmanError>;

/// Errors surfaced by graph construction and by the solver pipeline.
///
/// Every variant is fatal for the call that produced it: the algorithms are
/// deterministic, so retrying on the same graph cannot change the outcome.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PostmanError {
    /// The graph has no edges, so there is no route to compute.
    #[error("graph has no edges")]
    EmptyGraph,

    /// A vertex label was not found in the graph.
    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    /// An edge weight was negative, NaN, or infinite.
    #[error("invalid weight {weight} on edge {from} -- {to}")]
    InvalidWeight {
        /// First endpoint label.
        from: String,
        /// Second endpoint label.
        to: String,
        /// Offending weight.
        weight: f64,
    },

    /// Self-loops are not supported.
    #[error("self-loop on vertex {0} is not supported")]
    SelfLoop(String),

    /// Two vertices lie in different connected components.
    #[error("no path between {from} and {to}: graph is disconnected")]
    DisconnectedGraph {
        /// Source vertex label.
        from: String,
        /// Target vertex label.
        to: String,
    },

    /// The complete graph over odd-degree vertices has no perfect matching.
    #[error("no perfect matching: {matched} of {odd_vertices} odd-degree vertices matched")]
    NoPerfectMatching {
        /// Number of odd-degree vertices.
        odd_vertices: usize,
        /// Number of vertices the maximum matching covered.
        matched: usize,
    },

    /// The multigraph handed to the circuit extractor is not Eulerian.
    #[error("graph is not Eulerian: {0}")]
    NotEulerian(EulerianViolation),

    /// The requested start vertex has no incident edge.
    #[error("start vertex {0} has no incident edge")]
    IsolatedStartVertex(String),

    /// A computed circuit failed validation.
    #[error("circuit failed validation with {count} violation(s), first: {first}")]
    InvalidCircuit {
        /// Number of violations found.
        count: usize,
        /// Description of the first violation.
        first: String,
    },
}

/// The Eulerian precondition that a multigraph violated.
#[derive(Debug, Clone, PartialEq)]
pub enum EulerianViolation {
    /// The multigraph has no edges.
    NoEdges,
    /// A vertex has odd degree.
    OddDegree {
        /// Vertex label.
        vertex: String,
        /// Its degree.
        degree: usize,
    },
    /// A vertex with edges is unreachable from the rest of the edges.
    Disconnected {
        /// Label of an unreachable vertex.
        vertex: String,
    },
}

impl fmt::Display for EulerianViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEdges => write!(f, "no edges"),
            Self::OddDegree { vertex, degree } => {
                write!(f, "vertex {vertex} has odd degree {degree}")
            }
            Self::Disconnected { vertex } => {
                write!(f, "vertex {vertex} is not connected to the other edges")
            }
        }
    }
}

/// Formats a vertex label for error messages.
pub(crate) fn label<V: fmt::Debug>(vertex: &V) -> String {
    format!("{vertex:?}")
}
