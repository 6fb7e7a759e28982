//! Route inspection solver.
//!
//! [`PostmanSolver`] runs the full pipeline: odd-degree detection, exact
//! minimum-weight matching, eulerization, and circuit extraction. [`solve`]
//! and [`solve_from`] use the default configuration.

mod postman;

pub use postman::{solve, solve_from, PostmanSolver};
