//! Weighted undirected multigraph.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::{label, PostmanError, Result};

/// Dense index of a vertex, assigned in insertion order.
pub type VertexId = usize;

/// Stable index of an edge in the graph's edge arena.
pub type EdgeId = usize;

/// An undirected weighted edge between two distinct vertices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    u: VertexId,
    v: VertexId,
    weight: f64,
}

impl Edge {
    /// First endpoint (as given at insertion).
    pub fn u(&self) -> VertexId {
        self.u
    }

    /// Second endpoint (as given at insertion).
    pub fn v(&self) -> VertexId {
        self.v
    }

    /// Both endpoints.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.u, self.v)
    }

    /// Edge weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the endpoint opposite to `from`.
    ///
    /// `from` must be one of the endpoints; for any other vertex `u` is returned.
    pub fn other(&self, from: VertexId) -> VertexId {
        if from == self.u {
            self.v
        } else {
            self.u
        }
    }

    /// Returns `true` if this edge joins `a` and `b` (in either order).
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.u == a && self.v == b) || (self.u == b && self.v == a)
    }
}

/// A weighted undirected multigraph with labelled vertices.
///
/// Vertices are interned into dense [`VertexId`]s in insertion order, and that
/// order is the tie-breaker wherever an algorithm must choose deterministically.
/// Edges are kept in an arena so parallel edges between the same pair stay
/// distinguishable.
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
///
/// let mut g = Graph::new();
/// g.add_edge("A", "B", 10.0).unwrap();
/// g.add_edge("A", "B", 12.0).unwrap();
/// g.add_edge("B", "C", 5.0).unwrap();
///
/// assert_eq!(g.num_vertices(), 3);
/// assert_eq!(g.num_edges(), 3);
/// assert_eq!(g.degree_of(&"B"), Some(3));
/// assert!((g.total_weight() - 27.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    try_from = "GraphData<V>",
    bound(deserialize = "V: Deserialize<'de> + Clone + Eq + Hash + Debug")
)]
pub struct Graph<V> {
    vertices: Vec<V>,
    edges: Vec<Edge>,
    #[serde(skip)]
    index: HashMap<V, VertexId>,
    #[serde(skip)]
    incidence: Vec<Vec<EdgeId>>,
}

impl<V> Graph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            index: HashMap::new(),
            incidence: Vec::new(),
        }
    }

    /// Builds a graph from `(u, v, weight)` triples.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V, f64)>,
    {
        let mut graph = Self::new();
        for (u, v, w) in edges {
            graph.add_edge(u, v, w)?;
        }
        Ok(graph)
    }

    /// Adds a vertex if absent and returns its id.
    pub fn add_vertex(&mut self, vertex: V) -> VertexId {
        if let Some(&id) = self.index.get(&vertex) {
            return id;
        }
        let id = self.vertices.len();
        self.index.insert(vertex.clone(), id);
        self.vertices.push(vertex);
        self.incidence.push(Vec::new());
        id
    }

    /// Adds an edge, inserting missing endpoints.
    ///
    /// A second edge between the same pair becomes a distinct parallel edge.
    /// Fails on self-loops and on weights that are negative or not finite.
    pub fn add_edge(&mut self, u: V, v: V, weight: f64) -> Result<EdgeId> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(PostmanError::InvalidWeight {
                from: label(&u),
                to: label(&v),
                weight,
            });
        }
        if u == v {
            return Err(PostmanError::SelfLoop(label(&u)));
        }
        let u = self.add_vertex(u);
        let v = self.add_vertex(v);
        Ok(self.push_edge(u, v, weight))
    }

    /// Adds a parallel copy of an existing edge and returns the new id.
    pub(crate) fn duplicate_edge(&mut self, edge: EdgeId) -> EdgeId {
        let Edge { u, v, weight } = self.edges[edge];
        self.push_edge(u, v, weight)
    }

    fn push_edge(&mut self, u: VertexId, v: VertexId, weight: f64) -> EdgeId {
        let id = self.edges.len();
        self.edges.push(Edge { u, v, weight });
        self.incidence[u].push(id);
        self.incidence[v].push(id);
        id
    }

    /// Looks up the id of a vertex label.
    pub fn vertex_id(&self, vertex: &V) -> Option<VertexId> {
        self.index.get(vertex).copied()
    }

    /// Looks up the id of a vertex label, failing with `VertexNotFound`.
    pub fn require_vertex(&self, vertex: &V) -> Result<VertexId> {
        self.vertex_id(vertex)
            .ok_or_else(|| PostmanError::VertexNotFound(label(vertex)))
    }

    /// Returns the label of a vertex id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds.
    pub fn vertex(&self, id: VertexId) -> &V {
        &self.vertices[id]
    }

    /// All vertex labels in insertion order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Returns `true` if the label is a vertex of this graph.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Returns the edge with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    /// All edges, indexed by [`EdgeId`].
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Ids of the edges incident to a vertex, in insertion order.
    pub fn incident_edges(&self, id: VertexId) -> &[EdgeId] {
        &self.incidence[id]
    }

    /// Neighbors of a vertex with the connecting edge, one entry per edge.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = (VertexId, EdgeId)> + '_ {
        self.incidence[id]
            .iter()
            .map(move |&e| (self.edges[e].other(id), e))
    }

    /// Ids of every edge joining `a` and `b`.
    pub fn edges_between(&self, a: VertexId, b: VertexId) -> Vec<EdgeId> {
        self.incidence[a]
            .iter()
            .copied()
            .filter(|&e| self.edges[e].connects(a, b))
            .collect()
    }

    /// Number of incident edge endpoints at a vertex.
    pub fn degree(&self, id: VertexId) -> usize {
        self.incidence[id].len()
    }

    /// Degree of a vertex looked up by label.
    pub fn degree_of(&self, vertex: &V) -> Option<usize> {
        self.vertex_id(vertex).map(|id| self.degree(id))
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges (parallel edges counted separately).
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Summed weight per unordered vertex pair, ordered by first appearance.
    ///
    /// Parallel edges collapse into one entry, which is what a renderer needs
    /// to label a multigraph drawn with single lines.
    pub fn aggregated_weights(&self) -> Vec<(VertexId, VertexId, f64)> {
        let mut slots: HashMap<(VertexId, VertexId), usize> = HashMap::new();
        let mut out: Vec<(VertexId, VertexId, f64)> = Vec::new();
        for e in &self.edges {
            let key = (e.u.min(e.v), e.u.max(e.v));
            match slots.get(&key) {
                Some(&i) => out[i].2 += e.weight,
                None => {
                    slots.insert(key, out.len());
                    out.push((e.u, e.v, e.weight));
                }
            }
        }
        out
    }
}

impl<V> Default for Graph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized form of a [`Graph`]: labels in id order and the edge arena.
#[derive(Deserialize)]
struct GraphData<V> {
    vertices: Vec<V>,
    edges: Vec<Edge>,
}

impl<V> TryFrom<GraphData<V>> for Graph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    type Error = PostmanError;

    /// Rebuilds the lookup tables, re-validating every edge.
    fn try_from(data: GraphData<V>) -> Result<Self> {
        let mut graph = Self::new();
        for vertex in &data.vertices {
            graph.add_vertex(vertex.clone());
        }
        for edge in data.edges {
            let (Some(u), Some(v)) = (data.vertices.get(edge.u), data.vertices.get(edge.v)) else {
                return Err(PostmanError::VertexNotFound(format!(
                    "#{}",
                    edge.u.max(edge.v)
                )));
            };
            graph.add_edge(u.clone(), v.clone(), edge.weight)?;
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph<&'static str> {
        Graph::from_edges([("A", "B", 1.0), ("B", "C", 2.0), ("C", "A", 3.0)]).expect("valid")
    }

    #[test]
    fn test_insertion_order_ids() {
        let g = triangle();
        assert_eq!(g.vertices(), &["A", "B", "C"]);
        assert_eq!(g.vertex_id(&"A"), Some(0));
        assert_eq!(g.vertex_id(&"C"), Some(2));
        assert_eq!(g.vertex_id(&"Z"), None);
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut g = triangle();
        assert_eq!(g.add_vertex("B"), 1);
        assert_eq!(g.add_vertex("D"), 3);
        assert_eq!(g.degree(3), 0);
        assert_eq!(g.num_vertices(), 4);
    }

    #[test]
    fn test_parallel_edges_are_distinct() {
        let mut g = Graph::new();
        let e1 = g.add_edge(1, 2, 4.0).expect("valid");
        let e2 = g.add_edge(2, 1, 6.0).expect("valid");
        assert_ne!(e1, e2);
        assert_eq!(g.num_edges(), 2);
        assert_eq!(g.degree(0), 2);
        assert_eq!(g.edges_between(0, 1), vec![e1, e2]);
        assert_eq!(g.edge(e2).weight(), 6.0);
    }

    #[test]
    fn test_rejects_invalid_weight() {
        let mut g = Graph::new();
        assert!(matches!(
            g.add_edge("A", "B", -1.0),
            Err(PostmanError::InvalidWeight { .. })
        ));
        assert!(matches!(
            g.add_edge("A", "B", f64::NAN),
            Err(PostmanError::InvalidWeight { .. })
        ));
        assert!(g.is_empty());
        assert_eq!(g.num_vertices(), 0);
    }

    #[test]
    fn test_rejects_self_loop() {
        let mut g = Graph::new();
        assert_eq!(
            g.add_edge("A", "A", 1.0),
            Err(PostmanError::SelfLoop("\"A\"".into()))
        );
    }

    #[test]
    fn test_edge_other() {
        let g = triangle();
        let e = g.edge(0);
        assert_eq!(e.other(0), 1);
        assert_eq!(e.other(1), 0);
        assert!(e.connects(1, 0));
        assert!(!e.connects(1, 2));
    }

    #[test]
    fn test_neighbors() {
        let g = triangle();
        let n: Vec<_> = g.neighbors(0).collect();
        assert_eq!(n, vec![(1, 0), (2, 2)]);
    }

    #[test]
    fn test_duplicate_edge() {
        let mut g = triangle();
        let copy = g.duplicate_edge(1);
        assert_eq!(copy, 3);
        assert_eq!(g.edge(copy).endpoints(), (1, 2));
        assert_eq!(g.edge(copy).weight(), 2.0);
        assert_eq!(g.degree(1), 3);
    }

    #[test]
    fn test_aggregated_weights() {
        let mut g = triangle();
        g.add_edge("B", "A", 4.0).expect("valid");
        let agg = g.aggregated_weights();
        assert_eq!(agg.len(), 3);
        assert_eq!(agg[0], (0, 1, 5.0));
        assert!((g.total_weight() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_require_vertex() {
        let g = triangle();
        assert_eq!(g.require_vertex(&"B"), Ok(1));
        assert_eq!(
            g.require_vertex(&"Q"),
            Err(PostmanError::VertexNotFound("\"Q\"".into()))
        );
    }

    #[test]
    fn test_serialize() {
        let g = triangle();
        let json = serde_json::to_value(&g).expect("serializable");
        assert_eq!(json["vertices"], serde_json::json!(["A", "B", "C"]));
        assert_eq!(json["edges"][1]["weight"], serde_json::json!(2.0));
    }

    #[test]
    fn test_deserialize_rebuilds_index() {
        let mut g = triangle();
        g.add_vertex("D");
        let json = serde_json::to_string(&g).expect("serializable");
        let back: Graph<String> = serde_json::from_str(&json).expect("valid graph");
        assert_eq!(back.num_vertices(), 4);
        assert_eq!(back.num_edges(), 3);
        assert_eq!(back.degree_of(&"A".to_string()), Some(2));
        assert_eq!(back.vertex_id(&"D".to_string()), Some(3));
        assert_eq!(back.edges(), g.edges());
    }

    #[test]
    fn test_deserialize_rejects_bad_edges() {
        let dangling = r#"{"vertices":["A"],"edges":[{"u":0,"v":1,"weight":1.0}]}"#;
        assert!(serde_json::from_str::<Graph<String>>(dangling).is_err());
        let negative = r#"{"vertices":["A","B"],"edges":[{"u":0,"v":1,"weight":-1.0}]}"#;
        assert!(serde_json::from_str::<Graph<String>>(negative).is_err());
    }
}
