//! Eulerian circuit extraction.
//!
//! - [`eulerian_circuit`] — Hierholzer's algorithm, O(E)

mod hierholzer;

pub use hierholzer::{default_start, eulerian_circuit, Traversal};
