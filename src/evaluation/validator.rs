//! Circuit validator that checks continuity, closure, and edge coverage.

use std::fmt::Debug;
use std::hash::Hash;

use crate::models::{CircuitStep, Graph, Violation, ViolationType};

const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Checks a circuit against the multigraph it claims to traverse.
///
/// A circuit is valid when consecutive steps chain, the walk ends where it
/// started, every step names an edge that joins its endpoints with the
/// reported weight, and every edge is used exactly once.
///
/// # Examples
///
/// ```
/// use u_postman::models::{CircuitStep, Graph, ViolationType};
/// use u_postman::evaluation::CircuitValidator;
///
/// let g = Graph::from_edges([("A", "B", 1.0), ("B", "A", 2.0)]).unwrap();
/// let validator = CircuitValidator::new(&g);
///
/// let steps = vec![
///     CircuitStep { from: "A", to: "B", weight: 1.0, edge: 0 },
///     CircuitStep { from: "B", to: "A", weight: 2.0, edge: 1 },
/// ];
/// assert!(validator.validate(&steps).is_empty());
///
/// let partial = &steps[..1];
/// let violations = validator.validate(partial);
/// assert!(violations
///     .iter()
///     .any(|v| v.kind == ViolationType::EdgeMissing { edge: 1 }));
/// ```
pub struct CircuitValidator<'a, V> {
    graph: &'a Graph<V>,
}

impl<'a, V> CircuitValidator<'a, V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Creates a validator for the given multigraph.
    pub fn new(graph: &'a Graph<V>) -> Self {
        Self { graph }
    }

    /// Returns every defect found in `steps`; empty means valid.
    pub fn validate(&self, steps: &[CircuitStep<V>]) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut uses = vec![0usize; self.graph.num_edges()];

        for (position, step) in steps.iter().enumerate() {
            if position > 0 && steps[position - 1].to != step.from {
                violations.push(Violation::new(ViolationType::Discontinuous { position }));
            }

            let endpoints = self
                .graph
                .vertex_id(&step.from)
                .zip(self.graph.vertex_id(&step.to));
            let edge = match endpoints {
                Some((from, to)) if step.edge < self.graph.num_edges() => {
                    let edge = self.graph.edge(step.edge);
                    edge.connects(from, to).then_some(edge)
                }
                _ => None,
            };
            let Some(edge) = edge else {
                violations.push(Violation::new(ViolationType::UnknownEdge {
                    position,
                    edge: step.edge,
                }));
                continue;
            };

            uses[step.edge] += 1;
            if (step.weight - edge.weight()).abs() > WEIGHT_TOLERANCE * edge.weight().max(1.0) {
                violations.push(Violation::new(ViolationType::WeightMismatch {
                    position,
                    reported: step.weight,
                    actual: edge.weight(),
                }));
            }
        }

        // Closure
        if let (Some(first), Some(last)) = (steps.first(), steps.last()) {
            if first.from != last.to {
                if let (Some(start), Some(end)) =
                    (self.graph.vertex_id(&first.from), self.graph.vertex_id(&last.to))
                {
                    violations.push(Violation::new(ViolationType::NotClosed { start, end }));
                }
            }
        }

        // Coverage
        for (edge, &count) in uses.iter().enumerate() {
            match count {
                0 => violations.push(Violation::new(ViolationType::EdgeMissing { edge })),
                1 => {}
                _ => violations.push(Violation::new(ViolationType::EdgeRepeated { edge, count })),
            }
        }

        violations
    }
}

/// Validates `steps` against `graph`; see [`CircuitValidator::validate`].
pub fn validate_circuit<V>(graph: &Graph<V>, steps: &[CircuitStep<V>]) -> Vec<Violation>
where
    V: Clone + Eq + Hash + Debug,
{
    CircuitValidator::new(graph).validate(steps)
}
