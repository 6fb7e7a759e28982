//! Structural analysis of graphs.
//!
//! - [`odd_degree_vertices`] — vertices whose degree is odd
//! - [`connected_components`] — components over vertices that carry edges
//! - [`check_eulerian`] — names the first Eulerian precondition a graph violates

mod connectivity;
mod degree;

pub use connectivity::{connected_components, is_connected};
pub use degree::{check_eulerian, degrees, is_eulerian, odd_degree_vertices};
