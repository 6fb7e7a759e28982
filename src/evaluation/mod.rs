//! Circuit validation.

mod validator;

pub use validator::{validate_circuit, CircuitValidator};
