//! Shortest paths and distance matrices.
//!
//! Provides Dijkstra over non-negative weights and a dense distance matrix
//! among a chosen set of vertices (the odd-degree vertices, in practice).

mod dijkstra;
mod matrix;

pub use dijkstra::{dijkstra, distance, shortest_path, ShortestPath, ShortestPathTree};
pub use matrix::DistanceMatrix;
