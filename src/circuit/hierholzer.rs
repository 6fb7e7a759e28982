//! Hierholzer's algorithm for Eulerian circuits.
//!
//! # Algorithm
//!
//! Walk unused edges from the start, pushing each reached vertex on a stack.
//! When the vertex on top has no unused edge left, pop it and emit the edge
//! it was entered by. Popping happens exactly when a sub-circuit closes, so
//! the emitted edges, reversed, form a single closed walk with every
//! sub-circuit spliced in at the vertex it was discovered from.
//!
//! # Complexity
//!
//! O(E): each edge is consumed once and each incidence list is scanned once.
//!
//! # Reference
//!
//! Hierholzer, C.; Wiener, C. (1873). "Über die Möglichkeit, einen
//! Linienzug ohne Wiederholung und ohne Unterbrechung zu umfahren",
//! *Mathematische Annalen* 6(1), 30-32.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::analysis::check_eulerian;
use crate::error::{label, PostmanError, Result};
use crate::models::{EdgeId, Graph, VertexId};

/// One edge traversal in an Eulerian circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Traversal {
    /// Vertex the traversal leaves.
    pub from: VertexId,
    /// Vertex the traversal enters.
    pub to: VertexId,
    /// The exact edge walked.
    pub edge: EdgeId,
}

/// The first vertex, in insertion order, that has an incident edge.
pub fn default_start<V>(graph: &Graph<V>) -> Option<VertexId>
where
    V: Clone + Eq + Hash + Debug,
{
    (0..graph.num_vertices()).find(|&v| graph.degree(v) > 0)
}

/// Computes a closed walk that uses every edge of `graph` exactly once.
///
/// Starts at `start`, or at [`default_start`] when `None`. Fails with
/// `NotEulerian` if the graph has no edges, an odd-degree vertex, or more than
/// one edge-bearing component; with `VertexNotFound` or
/// `IsolatedStartVertex` for an unusable start.
///
/// Neighbours are taken in incidence (insertion) order, so the circuit is
/// fully determined by the graph.
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
/// use u_postman::circuit::eulerian_circuit;
///
/// let g = Graph::from_edges([("A", "B", 1.0), ("B", "C", 1.0), ("C", "A", 1.0)]).unwrap();
/// let circuit = eulerian_circuit(&g, Some(&"B")).unwrap();
/// assert_eq!(circuit.len(), 3);
/// assert_eq!(circuit[0].from, 1);
/// assert_eq!(circuit[2].to, 1);
/// ```
pub fn eulerian_circuit<V>(graph: &Graph<V>, start: Option<&V>) -> Result<Vec<Traversal>>
where
    V: Clone + Eq + Hash + Debug,
{
    check_eulerian(graph)?;
    let start = match start {
        Some(vertex) => {
            let id = graph.require_vertex(vertex)?;
            if graph.degree(id) == 0 {
                return Err(PostmanError::IsolatedStartVertex(label(vertex)));
            }
            id
        }
        None => match default_start(graph) {
            Some(id) => id,
            None => unreachable!("an Eulerian graph has at least one edge"),
        },
    };

    let circuit = hierholzer(graph, start);
    debug!(start, edges = circuit.len(), "extracted Eulerian circuit");
    Ok(circuit)
}

fn hierholzer<V>(graph: &Graph<V>, start: VertexId) -> Vec<Traversal>
where
    V: Clone + Eq + Hash + Debug,
{
    let mut used = vec![false; graph.num_edges()];
    // Next incidence slot to inspect, per vertex.
    let mut cursor = vec![0usize; graph.num_vertices()];
    let mut stack: Vec<(VertexId, Option<EdgeId>)> = vec![(start, None)];
    let mut circuit = Vec::with_capacity(graph.num_edges());

    while let Some(&(current, entered_by)) = stack.last() {
        let incident = graph.incident_edges(current);
        while cursor[current] < incident.len() && used[incident[cursor[current]]] {
            cursor[current] += 1;
        }

        if let Some(&edge) = incident.get(cursor[current]) {
            used[edge] = true;
            stack.push((graph.edge(edge).other(current), Some(edge)));
            continue;
        }

        stack.pop();
        if let (Some(edge), Some(&(previous, _))) = (entered_by, stack.last()) {
            circuit.push(Traversal {
                from: previous,
                to: current,
                edge,
            });
        }
    }

    circuit.reverse();
    circuit
}
