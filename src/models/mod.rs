//! Domain model types for route inspection.
//!
//! Provides the weighted undirected multigraph the solver reads, and the
//! solution types it returns: an ordered circuit of edge traversals with a
//! cost breakdown, plus the violation types reported by circuit validation.

mod graph;
mod solution;

pub use graph::{Edge, EdgeId, Graph, VertexId};
pub use solution::{CircuitStep, Solution, Violation, ViolationType};
