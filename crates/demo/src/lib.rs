//! Runs the example equations through every solver and reports the results.
//!
//! The `tangent-demo` binary is a thin wrapper around this library:
//!
//! ```text
//! tangent-demo [all|log|sine] [config.toml]
//! ```
//!
//! The optional TOML file may set `epsilon` and `max_iters`; keys it omits
//! keep their default values.

mod error;
pub mod report;
pub mod settings;
pub mod task;

pub use error::Error;
pub use task::{Selection, Task};
