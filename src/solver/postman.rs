//! Chinese Postman solver.
//!
//! # Algorithm
//!
//! 1. Reject graphs with no edges or with more than one edge-bearing component.
//! 2. Collect the odd-degree vertices (always an even number of them).
//! 3. Pair them by an exact minimum-weight perfect matching under
//!    shortest-path distances.
//! 4. Duplicate every edge on each matched pair's shortest path.
//! 5. Walk the resulting Eulerian multigraph with Hierholzer's algorithm.
//!
//! The route is optimal: any closed walk covering every edge must repeat a
//! set of edges that evens out all odd degrees, and the cheapest such set is
//! a union of shortest paths between optimally paired odd vertices.
//!
//! # Complexity
//!
//! O(k·(V + E) log V) for the distances between the k odd vertices, O(k³)
//! for the matching, O(E) for the circuit.
//!
//! # Reference
//!
//! Edmonds, J.; Johnson, E. L. (1973). "Matching, Euler tours and the Chinese
//! postman", *Mathematical Programming* 5, 88-124.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, info};

use crate::analysis::{connected_components, odd_degree_vertices};
use crate::circuit::eulerian_circuit;
use crate::error::{label, PostmanError, Result};
use crate::eulerize::eulerize_with;
use crate::evaluation::validate_circuit;
use crate::matching::min_weight_matching;
use crate::models::{CircuitStep, Graph, Solution};

/// Configurable route inspection solver.
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
/// use u_postman::solver::PostmanSolver;
///
/// // Path A - B - C: the whole path is walked twice.
/// let g = Graph::from_edges([("A", "B", 2.0), ("B", "C", 3.0)]).unwrap();
/// let solution = PostmanSolver::new()
///     .with_start("B")
///     .with_validation(true)
///     .solve(&g)
///     .unwrap();
///
/// assert!((solution.total_cost() - 10.0).abs() < 1e-10);
/// assert_eq!(solution.start(), Some(&"B"));
/// assert_eq!(solution.num_duplicated_edges(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PostmanSolver<V> {
    start: Option<V>,
    validate: bool,
}

impl<V> Default for PostmanSolver<V> {
    fn default() -> Self {
        Self {
            start: None,
            validate: cfg!(debug_assertions),
        }
    }
}

impl<V> PostmanSolver<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Creates a solver that starts at the first non-isolated vertex and
    /// validates its output in debug builds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the vertex the circuit starts and ends at.
    pub fn with_start(mut self, start: V) -> Self {
        self.start = Some(start);
        self
    }

    /// Enables or disables the post-solve circuit check.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// The configured start vertex, if any.
    pub fn start(&self) -> Option<&V> {
        self.start.as_ref()
    }

    /// Returns `true` if the circuit is validated before being returned.
    pub fn validates(&self) -> bool {
        self.validate
    }

    /// Computes a minimum-cost closed walk covering every edge of `graph`.
    ///
    /// # Errors
    ///
    /// - `EmptyGraph` if `graph` has no edges
    /// - `DisconnectedGraph` if the edges span more than one component
    /// - `VertexNotFound` or `IsolatedStartVertex` for an unusable start
    /// - `InvalidCircuit` if validation is enabled and the circuit fails it
    pub fn solve(&self, graph: &Graph<V>) -> Result<Solution<V>> {
        if graph.is_empty() {
            return Err(PostmanError::EmptyGraph);
        }

        let components = connected_components(graph);
        if let [first, second, ..] = components.as_slice() {
            return Err(PostmanError::DisconnectedGraph {
                from: label(graph.vertex(first[0])),
                to: label(graph.vertex(second[0])),
            });
        }

        let original_cost = graph.total_weight();
        let odd = odd_degree_vertices(graph);
        debug!(odd_vertices = odd.len(), "detected odd-degree vertices");

        let matching = min_weight_matching(graph, &odd)?;
        let eulerian = eulerize_with(graph, &matching)?;
        let multigraph = eulerian.graph();

        let circuit: Vec<CircuitStep<V>> = eulerian_circuit(multigraph, self.start.as_ref())?
            .into_iter()
            .map(|t| CircuitStep {
                from: multigraph.vertex(t.from).clone(),
                to: multigraph.vertex(t.to).clone(),
                weight: multigraph.edge(t.edge).weight(),
                edge: t.edge,
            })
            .collect();

        if self.validate {
            let violations = validate_circuit(multigraph, &circuit);
            if let Some(first) = violations.first() {
                return Err(PostmanError::InvalidCircuit {
                    count: violations.len(),
                    first: format!("{:?}", first.kind),
                });
            }
        }

        let solution = Solution::new(
            original_cost,
            eulerian.added_weight(),
            eulerian.num_duplicates(),
            circuit,
        );
        info!(
            vertices = graph.num_vertices(),
            edges = graph.num_edges(),
            duplicated = solution.num_duplicated_edges(),
            original_cost,
            total_cost = solution.total_cost(),
            "solved route inspection"
        );
        Ok(solution)
    }
}

/// Solves `graph` with the default configuration.
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
/// use u_postman::solver::solve;
///
/// let g = Graph::from_edges([
///     ("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0), ("D", "A", 1.0),
/// ]).unwrap();
/// let solution = solve(&g).unwrap();
/// assert!((solution.total_cost() - 4.0).abs() < 1e-10);
/// assert_eq!(solution.num_duplicated_edges(), 0);
/// ```
pub fn solve<V>(graph: &Graph<V>) -> Result<Solution<V>>
where
    V: Clone + Eq + Hash + Debug,
{
    PostmanSolver::new().solve(graph)
}

/// Solves `graph` with a circuit that starts and ends at `start`.
pub fn solve_from<V>(graph: &Graph<V>, start: &V) -> Result<Solution<V>>
where
    V: Clone + Eq + Hash + Debug,
{
    PostmanSolver::new().with_start(start.clone()).solve(graph)
}
