//! Weighted matching.
//!
//! - [`max_weight_matching`] — Edmonds' blossom algorithm for general graphs, O(n³)
//! - [`min_weight_matching`] — minimum-weight perfect matching of odd-degree
//!   vertices under shortest-path distances

mod blossom;
mod min_weight;

pub use blossom::max_weight_matching;
pub use min_weight::{min_weight_matching, Matching};
