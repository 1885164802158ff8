//! Root-finding solvers for scalar equations `f(x) = 0`.
//!
//! See the [`equation`] module for the available methods, their shared
//! [`Config`](equation::Config) and the [`Solution`](equation::Solution) they
//! return.
//!
//! # Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for
//!   [`Config`](equation::Config). Deserialized configs are validated.

pub mod equation;
