//! # u-postman
//!
//! Route inspection (Chinese Postman) for undirected weighted graphs: the
//! cheapest closed walk that traverses every edge at least once.
//!
//! ## Modules
//!
//! - [`models`] — Multigraph with stable edge ids, Solution, CircuitStep
//! - [`analysis`] — Degree parity, Eulerian checks, connected components
//! - [`distance`] — Dijkstra shortest paths and distance matrices
//! - [`matching`] — Exact blossom matching (maximum-weight, minimum-weight perfect)
//! - [`eulerize`] — Duplicating matched shortest paths
//! - [`circuit`] — Hierholzer circuit extraction
//! - [`evaluation`] — Circuit validation
//! - [`solver`] — End-to-end [`PostmanSolver`](solver::PostmanSolver)
//! - [`generate`] — Random and structured instance generators
//!
//! ## Example
//!
//! ```
//! use u_postman::models::Graph;
//! use u_postman::solver::solve;
//!
//! let g = Graph::from_edges([
//!     ("A", "B", 10.0), ("A", "C", 15.0), ("B", "D", 20.0), ("C", "D", 25.0),
//!     ("C", "E", 30.0), ("D", "E", 10.0), ("E", "F", 12.0), ("F", "A", 5.0),
//! ]).unwrap();
//!
//! let solution = solve(&g).unwrap();
//! assert!((solution.total_cost() - 152.0).abs() < 1e-10);
//! assert_eq!(solution.len(), 10);
//! assert!(solution.is_closed());
//! ```

pub mod analysis;
pub mod circuit;
pub mod distance;
pub mod error;
pub mod eulerize;
pub mod evaluation;
pub mod generate;
pub mod matching;
pub mod models;
pub mod solver;

pub use error::{PostmanError, Result};
