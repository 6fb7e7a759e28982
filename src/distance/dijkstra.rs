//! Dijkstra shortest paths over non-negative edge weights.
//!
//! # Algorithm
//!
//! A binary heap keyed on `(distance, vertex id)` settles vertices in
//! non-decreasing distance order. A vertex's predecessor edge changes only on
//! a strictly shorter distance, so among equal-length paths the one found
//! first (by vertex id, then incidence order) is kept. The result is fully
//! determined by the graph's insertion order.
//!
//! # Complexity
//!
//! O(E log V) per source.
//!
//! # Reference
//!
//! Dijkstra, E.W. (1959). "A note on two problems in connexion with graphs",
//! *Numerische Mathematik* 1, 269-271.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{label, PostmanError, Result};
use crate::models::{EdgeId, Graph, VertexId};

#[derive(Debug, Clone, Copy, PartialEq)]
struct State {
    cost: f64,
    vertex: VertexId,
}

impl Eq for State {}

// Reversed so the max-heap pops the smallest (cost, vertex) first.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A weighted path between two vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Vertices from source to target, both inclusive.
    pub vertices: Vec<VertexId>,
    /// Ids of the exact edges walked; `edges[i]` joins `vertices[i]` and
    /// `vertices[i + 1]`.
    pub edges: Vec<EdgeId>,
    /// Sum of the edge weights.
    pub length: f64,
}

impl ShortestPath {
    /// Resolves the vertex ids into labels.
    pub fn labels<V>(&self, graph: &Graph<V>) -> Vec<V>
    where
        V: Clone + Eq + Hash + Debug,
    {
        self.vertices.iter().map(|&v| graph.vertex(v).clone()).collect()
    }

    /// Number of edges on the path.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if source and target coincide.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Single-source shortest-path distances and predecessor edges.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: VertexId,
    dist: Vec<f64>,
    pred: Vec<Option<EdgeId>>,
}

impl ShortestPathTree {
    /// Source vertex of this tree.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Distance from the source, or `None` if `target` is unreachable.
    pub fn distance_to(&self, target: VertexId) -> Option<f64> {
        let d = self.dist[target];
        d.is_finite().then_some(d)
    }

    /// Returns `true` if a path from the source reaches `target`.
    pub fn is_reachable(&self, target: VertexId) -> bool {
        self.dist[target].is_finite()
    }

    /// Reconstructs the path from the source to `target`.
    ///
    /// Returns `None` if `target` is unreachable.
    pub fn path_to<V>(&self, graph: &Graph<V>, target: VertexId) -> Option<ShortestPath>
    where
        V: Clone + Eq + Hash + Debug,
    {
        let length = self.distance_to(target)?;
        let mut vertices = vec![target];
        let mut edges = Vec::new();
        let mut current = target;
        while let Some(e) = self.pred[current] {
            edges.push(e);
            current = graph.edge(e).other(current);
            vertices.push(current);
        }
        vertices.reverse();
        edges.reverse();
        Some(ShortestPath {
            vertices,
            edges,
            length,
        })
    }
}

/// Runs Dijkstra from `source` over the whole graph.
///
/// # Panics
///
/// Panics if `source` is out of bounds.
pub fn dijkstra<V>(graph: &Graph<V>, source: VertexId) -> ShortestPathTree
where
    V: Clone + Eq + Hash + Debug,
{
    search(graph, source, None)
}

fn search<V>(graph: &Graph<V>, source: VertexId, target: Option<VertexId>) -> ShortestPathTree
where
    V: Clone + Eq + Hash + Debug,
{
    let n = graph.num_vertices();
    let mut dist = vec![f64::INFINITY; n];
    let mut pred = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[source] = 0.0;
    heap.push(State {
        cost: 0.0,
        vertex: source,
    });

    while let Some(State { cost, vertex }) = heap.pop() {
        if settled[vertex] {
            continue;
        }
        settled[vertex] = true;
        if Some(vertex) == target {
            break;
        }
        for (next, e) in graph.neighbors(vertex) {
            if settled[next] {
                continue;
            }
            let candidate = cost + graph.edge(e).weight();
            if candidate < dist[next] {
                dist[next] = candidate;
                pred[next] = Some(e);
                heap.push(State {
                    cost: candidate,
                    vertex: next,
                });
            }
        }
    }

    ShortestPathTree { source, dist, pred }
}

fn resolve<V>(graph: &Graph<V>, from: &V, to: &V) -> Result<(VertexId, VertexId, ShortestPathTree)>
where
    V: Clone + Eq + Hash + Debug,
{
    let s = graph.require_vertex(from)?;
    let t = graph.require_vertex(to)?;
    let tree = search(graph, s, Some(t));
    if !tree.is_reachable(t) {
        return Err(PostmanError::DisconnectedGraph {
            from: label(from),
            to: label(to),
        });
    }
    Ok((s, t, tree))
}

/// Computes a shortest path between two labelled vertices.
///
/// Fails with `VertexNotFound` for unknown labels and with
/// `DisconnectedGraph` when no path exists.
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
/// use u_postman::distance::shortest_path;
///
/// let g = Graph::from_edges([("A", "B", 1.0), ("B", "C", 1.0), ("A", "C", 5.0)]).unwrap();
/// let path = shortest_path(&g, &"A", &"C").unwrap();
/// assert_eq!(path.labels(&g), vec!["A", "B", "C"]);
/// assert!((path.length - 2.0).abs() < 1e-10);
/// ```
pub fn shortest_path<V>(graph: &Graph<V>, from: &V, to: &V) -> Result<ShortestPath>
where
    V: Clone + Eq + Hash + Debug,
{
    let (_, t, tree) = resolve(graph, from, to)?;
    tree.path_to(graph, t).ok_or_else(|| PostmanError::DisconnectedGraph {
        from: label(from),
        to: label(to),
    })
}

/// Shortest-path length between two labelled vertices.
pub fn distance<V>(graph: &Graph<V>, from: &V, to: &V) -> Result<f64>
where
    V: Clone + Eq + Hash + Debug,
{
    let (_, t, tree) = resolve(graph, from, to)?;
    Ok(tree.dist[t])
}
