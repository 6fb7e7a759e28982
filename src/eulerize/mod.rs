//! Eulerization: duplicating matched shortest paths.
//!
//! For each matched pair of odd-degree vertices, every edge on the shortest
//! path between them gets a parallel copy. Each copy flips the parity of the
//! path's two end vertices only, so after all pairs are processed every degree
//! is even. The copies never merge with existing edges; overlapping paths add
//! independent copies.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::analysis::odd_degree_vertices;
use crate::distance::dijkstra;
use crate::error::{label, PostmanError, Result};
use crate::matching::{min_weight_matching, Matching};
use crate::models::{EdgeId, Graph};

/// A multigraph made Eulerian by duplicating edges of an input graph.
///
/// Edge ids below [`original_edges`](Self::original_edges) are the input
/// graph's edges with their ids unchanged; higher ids are duplicates.
#[derive(Debug, Clone)]
pub struct EulerianGraph<V> {
    graph: Graph<V>,
    original_edges: usize,
    duplicate_of: Vec<EdgeId>,
    added_weight: f64,
}

impl<V> EulerianGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// The multigraph, original and duplicated edges together.
    pub fn graph(&self) -> &Graph<V> {
        &self.graph
    }

    /// Consumes this value, returning the multigraph.
    pub fn into_graph(self) -> Graph<V> {
        self.graph
    }

    /// Summed weight of the duplicated edges.
    pub fn added_weight(&self) -> f64 {
        self.added_weight
    }

    /// Number of edges the input graph had.
    pub fn original_edges(&self) -> usize {
        self.original_edges
    }

    /// Number of duplicated edges.
    pub fn num_duplicates(&self) -> usize {
        self.duplicate_of.len()
    }

    /// Returns `true` if `edge` is a duplicate rather than an input edge.
    pub fn is_duplicate(&self, edge: EdgeId) -> bool {
        edge >= self.original_edges && edge < self.graph.num_edges()
    }

    /// `(duplicate id, original id)` for every duplicated edge, in creation
    /// order.
    pub fn duplicated_edges(&self) -> impl Iterator<Item = (EdgeId, EdgeId)> + '_ {
        self.duplicate_of
            .iter()
            .enumerate()
            .map(move |(i, &orig)| (self.original_edges + i, orig))
    }
}

/// Makes `graph` Eulerian with the minimum added weight.
///
/// Finds the odd-degree vertices, matches them with
/// [`min_weight_matching`], and duplicates the matched shortest paths.
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
/// use u_postman::analysis::is_eulerian;
/// use u_postman::eulerize::eulerize;
///
/// // Path A - B - C: both ends are odd, so the whole path is doubled.
/// let g = Graph::from_edges([("A", "B", 2.0), ("B", "C", 3.0)]).unwrap();
/// let eg = eulerize(&g).unwrap();
/// assert_eq!(eg.num_duplicates(), 2);
/// assert!((eg.added_weight() - 5.0).abs() < 1e-10);
/// assert!(is_eulerian(eg.graph()));
/// ```
pub fn eulerize<V>(graph: &Graph<V>) -> Result<EulerianGraph<V>>
where
    V: Clone + Eq + Hash + Debug,
{
    let odd = odd_degree_vertices(graph);
    let matching = min_weight_matching(graph, &odd)?;
    eulerize_with(graph, &matching)
}

/// Duplicates the shortest path of every pair in `matching`.
///
/// With an empty matching the result is a copy of `graph` with no added
/// weight. The input graph is not modified.
pub fn eulerize_with<V>(graph: &Graph<V>, matching: &Matching) -> Result<EulerianGraph<V>>
where
    V: Clone + Eq + Hash + Debug,
{
    let mut multigraph = graph.clone();
    let mut duplicate_of = Vec::new();
    let mut added_weight = 0.0;

    for &(u, v) in matching.pairs() {
        let tree = dijkstra(graph, u);
        let path = tree
            .path_to(graph, v)
            .ok_or_else(|| PostmanError::DisconnectedGraph {
                from: label(graph.vertex(u)),
                to: label(graph.vertex(v)),
            })?;
        for &edge in &path.edges {
            multigraph.duplicate_edge(edge);
            duplicate_of.push(edge);
            added_weight += graph.edge(edge).weight();
        }
    }

    debug!(
        pairs = matching.len(),
        duplicated = duplicate_of.len(),
        added_weight,
        "eulerized graph"
    );

    Ok(EulerianGraph {
        graph: multigraph,
        original_edges: graph.num_edges(),
        duplicate_of,
        added_weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::is_eulerian;

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
    fn test_scenario_a() {
        let g = scenario_a();
        let eg = eulerize(&g).expect("connected");
        assert!(is_eulerian(eg.graph()));
        assert_eq!(eg.original_edges(), 8);
        // A-C and D-E are each a single direct edge.
        assert_eq!(eg.num_duplicates(), 2);
        assert_eq!(eg.duplicated_edges().collect::<Vec<_>>(), vec![(8, 1), (9, 5)]);
        assert!((eg.added_weight() - 25.0).abs() < 1e-10);
        assert_eq!(eg.graph().num_edges(), 10);
    }

    #[test]
    fn test_input_unchanged() {
        let g = scenario_a();
        let _ = eulerize(&g).expect("connected");
        assert_eq!(g.num_edges(), 8);
    }

    #[test]
    fn test_already_eulerian() {
        let g = Graph::from_edges([("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0), ("D", "A", 1.0)])
            .expect("valid");
        let eg = eulerize(&g).expect("connected");
        assert_eq!(eg.num_duplicates(), 0);
        assert_eq!(eg.added_weight(), 0.0);
        assert_eq!(eg.graph().num_edges(), 4);
        assert!(!eg.is_duplicate(3));
    }

    #[test]
    fn test_overlapping_paths_add_independent_copies() {
        // Star with center H: the four leaves are odd and every path runs
        // through H, so each spoke gets its own copy.
        let g = Graph::from_edges([("H", "a", 1.0), ("H", "b", 1.0), ("H", "c", 1.0), ("H", "d", 1.0)])
            .expect("valid");
        let eg = eulerize(&g).expect("connected");
        assert!(is_eulerian(eg.graph()));
        assert_eq!(eg.num_duplicates(), 4);
        assert!((eg.added_weight() - 4.0).abs() < 1e-10);
        assert_eq!(eg.graph().degree_of(&"H"), Some(8));
    }

    #[test]
    fn test_duplicates_exact_parallel_instance() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 9.0).expect("valid");
        let light = g.add_edge("A", "B", 2.0).expect("valid");
        g.add_edge("A", "B", 4.0).expect("valid");
        let eg = eulerize(&g).expect("connected");
        assert_eq!(eg.duplicated_edges().collect::<Vec<_>>(), vec![(3, light)]);
        assert!(eg.is_duplicate(3));
        assert!(!eg.is_duplicate(light));
        assert!((eg.added_weight() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_disconnected_input_stays_disconnected() {
        // Odd vertices pair up inside each component, so eulerization succeeds
        // but the result still has two components.
        let g = Graph::from_edges([("A", "B", 1.0), ("C", "D", 1.0)]).expect("valid");
        let eg = eulerize(&g).expect("pairs within components");
        assert_eq!(eg.num_duplicates(), 2);
        assert!(!is_eulerian(eg.graph()));
    }
}
