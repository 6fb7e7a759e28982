//! Instance generators.
//!
//! Vertices are labelled `0..n` and added in label order, so vertex ids and
//! labels coincide.

use rand::Rng;

use crate::error::Result;
use crate::models::Graph;

/// Random connected multigraph on `n` vertices.
///
/// A random spanning tree (each vertex `i > 0` attached to a uniformly chosen
/// earlier vertex) is followed by `extra_edges` uniformly random edges, which
/// may run parallel to existing ones. Weights are integers drawn uniformly
/// from `1..=max_weight`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_postman::analysis::is_connected;
/// use u_postman::generate::random_connected;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let g = random_connected(10, 5, 20, &mut rng);
/// assert_eq!(g.num_vertices(), 10);
/// assert_eq!(g.num_edges(), 14);
/// assert!(is_connected(&g));
/// ```
pub fn random_connected<R: Rng>(
    n: usize,
    extra_edges: usize,
    max_weight: u32,
    rng: &mut R,
) -> Graph<usize> {
    let mut graph = Graph::new();
    for v in 0..n {
        graph.add_vertex(v);
    }
    if n < 2 {
        return graph;
    }

    let max_weight = max_weight.max(1);

    for v in 1..n {
        let parent = rng.random_range(0..v as u64) as usize;
        let w = rng.random_range(1..=max_weight) as f64;
        graph
            .add_edge(parent, v, w)
            .expect("positive weight between distinct vertices");
    }

    for _ in 0..extra_edges {
        let u = rng.random_range(0..n as u64) as usize;
        // Offset in 1..n guarantees v != u.
        let v = (u + rng.random_range(1..n as u64) as usize) % n;
        let w = rng.random_range(1..=max_weight) as f64;
        graph
            .add_edge(u, v, w)
            .expect("positive weight between distinct vertices");
    }

    graph
}

/// Cycle `0 - 1 - ... - (n-1) - 0` with uniform edge weight.
///
/// Every vertex has degree 2, so the cycle is Eulerian for `n >= 2`
/// (`n == 2` yields two parallel edges). Smaller `n` yields no edges.
pub fn cycle(n: usize, weight: f64) -> Result<Graph<usize>> {
    let mut graph = Graph::new();
    for v in 0..n {
        graph.add_vertex(v);
    }
    if n >= 2 {
        for v in 0..n {
            graph.add_edge(v, (v + 1) % n, weight)?;
        }
    }
    Ok(graph)
}

/// `rows × cols` grid with uniform edge weight; vertex `r * cols + c` sits
/// at row `r`, column `c`.
pub fn grid(rows: usize, cols: usize, weight: f64) -> Result<Graph<usize>> {
    let mut graph = Graph::new();
    for v in 0..rows * cols {
        graph.add_vertex(v);
    }
    for r in 0..rows {
        for c in 0..cols {
            let v = r * cols + c;
            if c + 1 < cols {
                graph.add_edge(v, v + 1, weight)?;
            }
            if r + 1 < rows {
                graph.add_edge(v, v + cols, weight)?;
            }
        }
    }
    Ok(graph)
}
