//! Dense distance matrix over a subset of graph vertices.

use std::fmt::Debug;
use std::hash::Hash;

use crate::models::{Graph, VertexId};

use super::dijkstra;

/// A dense n×n distance matrix stored in row-major order.
///
/// Row/column `i` corresponds to the `i`-th vertex the matrix was built for.
/// Unreachable pairs hold `f64::INFINITY`.
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
/// use u_postman::distance::DistanceMatrix;
///
/// let g = Graph::from_edges([("A", "B", 3.0), ("B", "C", 4.0)]).unwrap();
/// let dm = DistanceMatrix::between(&g, &[0, 2]);
/// assert!((dm.get(0, 1) - 7.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes shortest-path distances between every pair of `vertices`.
    ///
    /// Runs one Dijkstra per vertex.
    pub fn between<V>(graph: &Graph<V>, vertices: &[VertexId]) -> Self
    where
        V: Clone + Eq + Hash + Debug,
    {
        let n = vertices.len();
        let mut dm = Self::new(n);
        for (i, &source) in vertices.iter().enumerate() {
            let tree = dijkstra(graph, source);
            for (j, &target) in vertices.iter().enumerate() {
                let d = tree.distance_to(target).unwrap_or(f64::INFINITY);
                dm.set(i, j, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from row `from` to column `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from row `from` to column `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of vertices in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the pair has a finite distance.
    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        self.get(from, to).is_finite()
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// Unreachable pairs must be unreachable in both directions.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a.is_finite() != b.is_finite() {
                    return false;
                }
                if a.is_finite() && (a - b).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Largest finite off-diagonal entry, or `None` if there is none.
    pub fn max_finite(&self) -> Option<f64> {
        let mut best: Option<f64> = None;
        for i in 0..self.size {
            for j in 0..self.size {
                let d = self.get(i, j);
                if i != j && d.is_finite() && best.map_or(true, |b| d > b) {
                    best = Some(d);
                }
            }
        }
        best
    }
}
