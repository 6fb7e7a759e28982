//! Connected components over the edge-bearing part of a graph.

use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use crate::models::{Graph, VertexId};

/// Returns the connected components of the vertices that have at least one
/// incident edge.
///
/// Isolated vertices are skipped: a route never needs to reach them. Each
/// component lists its vertices in discovery (BFS) order, and components are
/// ordered by their smallest vertex id.
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
/// use u_postman::analysis::connected_components;
///
/// let g = Graph::from_edges([("A", "B", 1.0), ("C", "D", 1.0)]).unwrap();
/// assert_eq!(connected_components(&g), vec![vec![0, 1], vec![2, 3]]);
/// ```
pub fn connected_components<V>(graph: &Graph<V>) -> Vec<Vec<VertexId>>
where
    V: Clone + Eq + Hash + Debug,
{
    let n = graph.num_vertices();
    let mut seen = vec![false; n];
    let mut components = Vec::new();

    for root in 0..n {
        if seen[root] || graph.degree(root) == 0 {
            continue;
        }
        seen[root] = true;
        let mut component = vec![root];
        let mut queue = VecDeque::from([root]);
        while let Some(current) = queue.pop_front() {
            for (next, _) in graph.neighbors(current) {
                if !seen[next] {
                    seen[next] = true;
                    component.push(next);
                    queue.push_back(next);
                }
            }
        }
        components.push(component);
    }

    components
}

/// Returns `true` if all edge-bearing vertices lie in one component.
///
/// A graph without edges counts as connected.
pub fn is_connected<V>(graph: &Graph<V>) -> bool
where
    V: Clone + Eq + Hash + Debug,
{
    connected_components(graph).len() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_component() {
        let g = Graph::from_edges([(1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0)]).expect("valid");
        let comps = connected_components(&g);
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0], vec![0, 1, 2, 3]);
        assert!(is_connected(&g));
    }

    #[test]
    fn test_two_components() {
        let g = Graph::from_edges([("A", "B", 1.0), ("C", "D", 1.0), ("B", "E", 2.0)])
            .expect("valid");
        let comps = connected_components(&g);
        assert_eq!(comps, vec![vec![0, 1, 4], vec![2, 3]]);
        assert!(!is_connected(&g));
    }

    #[test]
    fn test_isolated_vertices_ignored() {
        let mut g = Graph::from_edges([("A", "B", 1.0)]).expect("valid");
        g.add_vertex("Z");
        assert_eq!(connected_components(&g), vec![vec![0, 1]]);
        assert!(is_connected(&g));
    }

    #[test]
    fn test_empty_graph() {
        let g: Graph<u32> = Graph::new();
        assert!(connected_components(&g).is_empty());
        assert!(is_connected(&g));
    }
}
