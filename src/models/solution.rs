//! Solution, circuit step, and violation types.

use serde::{Deserialize, Serialize};

use super::EdgeId;

/// A type of defect found when validating a circuit.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// Step `position` does not start where the previous step ended.
    Discontinuous {
        /// Index of the offending step.
        position: usize,
    },
    /// The walk does not end at its starting vertex.
    NotClosed {
        /// Vertex the walk starts at.
        start: usize,
        /// Vertex the walk ends at.
        end: usize,
    },
    /// An edge of the graph is never traversed.
    EdgeMissing {
        /// Edge id.
        edge: EdgeId,
    },
    /// An edge is traversed more than once.
    EdgeRepeated {
        /// Edge id.
        edge: EdgeId,
        /// Number of traversals.
        count: usize,
    },
    /// A step references an edge that does not join its endpoints, or does
    /// not exist.
    UnknownEdge {
        /// Index of the offending step.
        position: usize,
        /// Edge id the step claims to use.
        edge: EdgeId,
    },
    /// A step reports a weight different from the edge it traverses.
    WeightMismatch {
        /// Index of the offending step.
        position: usize,
        /// Weight carried by the step.
        reported: f64,
        /// Weight of the edge.
        actual: f64,
    },
}

/// A defect in a circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// One traversal in a postman route.
///
/// `edge` is the id of the exact edge instance walked in the Eulerian
/// multigraph, so parallel copies stay distinguishable to renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitStep<V> {
    /// Vertex the step leaves.
    pub from: V,
    /// Vertex the step enters.
    pub to: V,
    /// Weight of the traversed edge.
    pub weight: f64,
    /// Id of the traversed edge in the Eulerian multigraph.
    pub edge: EdgeId,
}

/// A solved route inspection instance.
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
/// use u_postman::solver::solve;
///
/// let g = Graph::from_edges([("A", "B", 1.0), ("B", "C", 1.0), ("C", "A", 1.0)]).unwrap();
/// let sol = solve(&g).unwrap();
/// assert_eq!(sol.len(), 3);
/// assert!((sol.total_cost() - 3.0).abs() < 1e-10);
/// assert!(sol.is_closed());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution<V> {
    total_cost: f64,
    original_cost: f64,
    added_cost: f64,
    duplicated_edges: usize,
    circuit: Vec<CircuitStep<V>>,
}

impl<V: PartialEq> Solution<V> {
    /// Creates a solution from its cost breakdown and circuit.
    pub fn new(
        original_cost: f64,
        added_cost: f64,
        duplicated_edges: usize,
        circuit: Vec<CircuitStep<V>>,
    ) -> Self {
        Self {
            total_cost: original_cost + added_cost,
            original_cost,
            added_cost,
            duplicated_edges,
            circuit,
        }
    }

    /// Total route cost: original edge weights plus duplicated edge weights.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Sum of the input graph's edge weights.
    pub fn original_cost(&self) -> f64 {
        self.original_cost
    }

    /// Weight added by duplicating matched shortest paths.
    pub fn added_cost(&self) -> f64 {
        self.added_cost
    }

    /// Number of edges duplicated to make the graph Eulerian.
    pub fn num_duplicated_edges(&self) -> usize {
        self.duplicated_edges
    }

    /// The ordered circuit.
    pub fn circuit(&self) -> &[CircuitStep<V>] {
        &self.circuit
    }

    /// Number of traversals in the circuit.
    pub fn len(&self) -> usize {
        self.circuit.len()
    }

    /// Returns `true` if the circuit has no traversals.
    pub fn is_empty(&self) -> bool {
        self.circuit.is_empty()
    }

    /// Starting (and ending) vertex of the circuit.
    pub fn start(&self) -> Option<&V> {
        self.circuit.first().map(|s| &s.from)
    }

    /// Returns `true` if consecutive steps share endpoints and the walk
    /// returns to its start.
    pub fn is_closed(&self) -> bool {
        let (Some(first), Some(last)) = (self.circuit.first(), self.circuit.last()) else {
            return false;
        };
        let chained = self.circuit.windows(2).all(|w| w[0].to == w[1].from);
        chained && last.to == first.from
    }

    /// Sum of the weights along the circuit.
    pub fn circuit_weight(&self) -> f64 {
        self.circuit.iter().map(|s| s.weight).sum()
    }
}

impl<V: Clone> Solution<V> {
    /// Vertices in visiting order, starting and ending at the start vertex.
    pub fn vertex_sequence(&self) -> Vec<V> {
        let mut seq = Vec::with_capacity(self.circuit.len() + 1);
        if let Some(first) = self.circuit.first() {
            seq.push(first.from.clone());
        }
        seq.extend(self.circuit.iter().map(|s| s.to.clone()));
        seq
    }
}
