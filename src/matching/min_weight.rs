//! Minimum-weight perfect matching over odd-degree vertices.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::error::{PostmanError, Result};
use crate::models::{Graph, VertexId};

use super::max_weight_matching;

/// A set of vertex pairs covering every odd-degree vertex exactly once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matching {
    pairs: Vec<(VertexId, VertexId)>,
    weight: f64,
}

impl Matching {
    /// Creates an empty matching.
    pub fn new() -> Self {
        Self::default()
    }

    /// Matched pairs; within a pair the vertex listed earlier in the input
    /// comes first, and pairs are ordered by their first vertex.
    pub fn pairs(&self) -> &[(VertexId, VertexId)] {
        &self.pairs
    }

    /// Sum of shortest-path distances over the matched pairs.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no pairs were needed.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Pairs up `odd` vertices so the summed shortest-path distance is minimal.
///
/// Builds the complete graph over `odd` weighted by shortest-path distance
/// (unreachable pairs are left out), then solves it exactly with the blossom
/// algorithm: weights are mirrored to `(max + 1) - d` and a maximum-weight
/// matching among maximum-cardinality matchings is taken.
///
/// Fails with `NoPerfectMatching` if some vertex cannot be paired, which
/// happens only when the odd vertices span several components (or their
/// count is odd).
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
/// use u_postman::analysis::odd_degree_vertices;
/// use u_postman::matching::min_weight_matching;
///
/// // Square with one diagonal: the diagonal's endpoints B and D are odd.
/// let g = Graph::from_edges([
///     ("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0), ("D", "A", 1.0), ("B", "D", 5.0),
/// ]).unwrap();
/// let odd = odd_degree_vertices(&g);
/// let m = min_weight_matching(&g, &odd).unwrap();
/// assert_eq!(m.pairs(), &[(1, 3)]);
/// assert!((m.weight() - 2.0).abs() < 1e-10);
/// ```
pub fn min_weight_matching<V>(graph: &Graph<V>, odd: &[VertexId]) -> Result<Matching>
where
    V: Clone + Eq + Hash + Debug,
{
    let n = odd.len();
    if n == 0 {
        return Ok(Matching::new());
    }

    let distances = DistanceMatrix::between(graph, odd);
    let ceiling = distances.max_finite().unwrap_or(0.0) + 1.0;
    let mut edges = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            if distances.is_reachable(i, j) {
                edges.push((i, j, ceiling - distances.get(i, j)));
            }
        }
    }

    let mate = max_weight_matching(n, &edges, true);
    let matched = mate.iter().filter(|m| m.is_some()).count();
    if matched < n {
        return Err(PostmanError::NoPerfectMatching {
            odd_vertices: n,
            matched,
        });
    }

    let mut matching = Matching::new();
    for (i, m) in mate.iter().enumerate() {
        if let Some(j) = *m {
            if i < j {
                matching.pairs.push((odd[i], odd[j]));
                matching.weight += distances.get(i, j);
            }
        }
    }

    debug!(
        odd_vertices = n,
        pairs = matching.len(),
        weight = matching.weight,
        "computed minimum-weight perfect matching"
    );
    Ok(matching)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::odd_degree_vertices;

    /// Cheapest perfect matching by exhaustive enumeration.
    fn brute_force(dm: &DistanceMatrix, rest: &[usize]) -> f64 {
        let Some((&first, tail)) = rest.split_first() else {
            return 0.0;
        };
        let mut best = f64::INFINITY;
        for (k, &partner) in tail.iter().enumerate() {
            let mut remaining = tail.to_vec();
            remaining.remove(k);
            let cost = dm.get(first, partner) + brute_force(dm, &remaining);
            best = best.min(cost);
        }
        best
    }

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
    fn test_empty() {
        let g = Graph::from_edges([("A", "B", 1.0), ("B", "A", 1.0)]).expect("valid");
        let m = min_weight_matching(&g, &[]).expect("trivial");
        assert!(m.is_empty());
        assert_eq!(m.weight(), 0.0);
    }

    #[test]
    fn test_scenario_a_matching() {
        let g = scenario_a();
        let odd = odd_degree_vertices(&g);
        let m = min_weight_matching(&g, &odd).expect("connected");
        // A-C (15) + D-E (10) beats A-D (30) + C-E (30) and A-E (17) + C-D (25).
        assert_eq!(m.pairs(), &[(0, 2), (3, 4)]);
        assert!((m.weight() - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_every_odd_vertex_matched_once() {
        let g = scenario_a();
        let odd = odd_degree_vertices(&g);
        let m = min_weight_matching(&g, &odd).expect("connected");
        let mut seen: Vec<VertexId> = m.pairs().iter().flat_map(|&(u, v)| [u, v]).collect();
        seen.sort_unstable();
        assert_eq!(seen, odd);
    }

    #[test]
    fn test_beats_greedy() {
        // Every vertex of this tree is odd. Pairing the closest pair B-C first
        // strands A and D far apart.
        let g = Graph::from_edges([("A", "B", 2.0), ("B", "C", 1.0), ("C", "D", 2.0), ("B", "X", 1.0), ("C", "Y", 1.0)])
            .expect("valid");
        let odd = odd_degree_vertices(&g);
        assert_eq!(odd.len(), 6);
        let m = min_weight_matching(&g, &odd).expect("connected");
        let dm = DistanceMatrix::between(&g, &odd);
        let idx: Vec<usize> = (0..odd.len()).collect();
        assert!((m.weight() - brute_force(&dm, &idx)).abs() < 1e-10);
    }

    #[test]
    fn test_matches_brute_force_on_complete_graph() {
        // K6 with distinct weights: every vertex has degree 5.
        let mut g = Graph::new();
        let mut w = 1.0;
        for i in 0..6u32 {
            for j in (i + 1)..6 {
                g.add_edge(i, j, w).expect("valid");
                w = (w * 7.0) % 23.0 + 1.0;
            }
        }
        let odd = odd_degree_vertices(&g);
        assert_eq!(odd.len(), 6);
        let m = min_weight_matching(&g, &odd).expect("connected");
        let dm = DistanceMatrix::between(&g, &odd);
        let idx: Vec<usize> = (0..6).collect();
        assert!((m.weight() - brute_force(&dm, &idx)).abs() < 1e-10);
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn test_no_perfect_matching_across_components() {
        let g = Graph::from_edges([("A", "B", 1.0), ("B", "C", 1.0), ("X", "Y", 1.0), ("Y", "Z", 1.0), ("Y", "W", 1.0)])
            .expect("valid");
        // Odd: A, C (first component); X, Y, Z, W (second) - pairable per side.
        let odd = odd_degree_vertices(&g);
        assert!(min_weight_matching(&g, &odd).is_ok());

        // Taking one odd vertex from each component leaves nothing to pair with.
        let split = [odd[0], odd[2]];
        assert_eq!(
            min_weight_matching(&g, &split),
            Err(PostmanError::NoPerfectMatching {
                odd_vertices: 2,
                matched: 0,
            })
        );
    }

    #[test]
    fn test_odd_count_cannot_be_perfect() {
        let g = Graph::from_edges([("A", "B", 1.0), ("B", "C", 1.0)]).expect("valid");
        assert!(matches!(
            min_weight_matching(&g, &[0, 1, 2]),
            Err(PostmanError::NoPerfectMatching {
                odd_vertices: 3,
                matched: 2,
            })
        ));
    }
}
