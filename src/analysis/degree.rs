//! Degree parity analysis.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{label, EulerianViolation, PostmanError, Result};
use crate::models::{Graph, VertexId};

use super::connected_components;

/// Degree of every vertex, indexed by [`VertexId`].
pub fn degrees<V>(graph: &Graph<V>) -> Vec<usize>
where
    V: Clone + Eq + Hash + Debug,
{
    (0..graph.num_vertices()).map(|v| graph.degree(v)).collect()
}

/// Returns the vertices of odd degree, in insertion order.
///
/// The result always has even length (handshake lemma). An empty result means
/// every degree is even and no edge needs duplicating.
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
/// use u_postman::analysis::odd_degree_vertices;
///
/// // Path A - B - C: the two ends are odd.
/// let g = Graph::from_edges([("A", "B", 1.0), ("B", "C", 1.0)]).unwrap();
/// assert_eq!(odd_degree_vertices(&g), vec![0, 2]);
/// ```
pub fn odd_degree_vertices<V>(graph: &Graph<V>) -> Vec<VertexId>
where
    V: Clone + Eq + Hash + Debug,
{
    (0..graph.num_vertices())
        .filter(|&v| graph.degree(v) % 2 == 1)
        .collect()
}

/// Checks that a multigraph admits an Eulerian circuit.
///
/// Requires at least one edge, even degree everywhere, and a single component
/// among the edge-bearing vertices. The error names the first violated
/// condition.
pub fn check_eulerian<V>(graph: &Graph<V>) -> Result<()>
where
    V: Clone + Eq + Hash + Debug,
{
    if graph.is_empty() {
        return Err(PostmanError::NotEulerian(EulerianViolation::NoEdges));
    }
    if let Some(&v) = odd_degree_vertices(graph).first() {
        return Err(PostmanError::NotEulerian(EulerianViolation::OddDegree {
            vertex: label(graph.vertex(v)),
            degree: graph.degree(v),
        }));
    }
    let components = connected_components(graph);
    if let Some(stray) = components.get(1) {
        return Err(PostmanError::NotEulerian(EulerianViolation::Disconnected {
            vertex: label(graph.vertex(stray[0])),
        }));
    }
    Ok(())
}

/// Returns `true` if the graph admits an Eulerian circuit.
pub fn is_eulerian<V>(graph: &Graph<V>) -> bool
where
    V: Clone + Eq + Hash + Debug,
{
    check_eulerian(graph).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_a() -> Graph<&'static str> {
        Graph::from_edges([
            ("A", "B", 10.0),
            ("A", "C", 15.0),
            ("B", "D", 20.0),
            ("C", "D", 25.0),
            ("C", "E", 30.0),
            ("D", "E", 10.0),
            ("E", "F", 12.0),
            ("F", "A", 5.0),
        ])
        .expect("valid")
    }

    #[test]
    fn test_degrees() {
        let g = scenario_a();
        // A: B, C, F  B: A, D  C: A, D, E  D: B, C, E  E: C, D, F  F: E, A
        assert_eq!(degrees(&g), vec![3, 2, 3, 3, 3, 2]);
    }

    #[test]
    fn test_odd_vertices_scenario_a() {
        let g = scenario_a();
        let odd: Vec<_> = odd_degree_vertices(&g).into_iter().map(|v| *g.vertex(v)).collect();
        assert_eq!(odd, vec!["A", "C", "D", "E"]);
    }

    #[test]
    fn test_cycle_has_no_odd_vertices() {
        let g = Graph::from_edges([("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0), ("D", "A", 1.0)])
            .expect("valid");
        assert!(odd_degree_vertices(&g).is_empty());
        assert!(is_eulerian(&g));
    }

    #[test]
    fn test_parallel_edges_count_toward_degree() {
        let g = Graph::from_edges([("A", "B", 1.0), ("A", "B", 1.0)]).expect("valid");
        assert!(odd_degree_vertices(&g).is_empty());
        assert!(is_eulerian(&g));
    }

    #[test]
    fn test_check_eulerian_no_edges() {
        let g: Graph<&str> = Graph::new();
        assert_eq!(
            check_eulerian(&g),
            Err(PostmanError::NotEulerian(EulerianViolation::NoEdges))
        );
    }

    #[test]
    fn test_check_eulerian_odd_degree() {
        let g = scenario_a();
        assert_eq!(
            check_eulerian(&g),
            Err(PostmanError::NotEulerian(EulerianViolation::OddDegree {
                vertex: "\"A\"".into(),
                degree: 3,
            }))
        );
    }

    #[test]
    fn test_check_eulerian_disconnected() {
        let g = Graph::from_edges([
            ("A", "B", 1.0),
            ("B", "C", 1.0),
            ("C", "A", 1.0),
            ("X", "Y", 1.0),
            ("Y", "Z", 1.0),
            ("Z", "X", 1.0),
        ])
        .expect("valid");
        assert_eq!(
            check_eulerian(&g),
            Err(PostmanError::NotEulerian(EulerianViolation::Disconnected {
                vertex: "\"X\"".into(),
            }))
        );
    }
}
