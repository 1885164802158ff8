//! Solvers for scalar equations of the form `f(x) = 0`.
//!
//! Every solver takes a [`Function`] (or a [`Differentiable`] function when it
//! needs `f'(x)`), an initial point or bracket, a [`Config`] and an
//! [`Observer`]. It returns a [`Solution`] whose [`Status`] tells the caller
//! how the iteration ended, so running out of iterations is never mistaken for
//! convergence.
//!
//! # Solvers
//!
//! - [`newton`]: tangent method from a single start point, quadratic
//!   convergence near a simple root
//! - [`chord`]: secant on a bracket, replacing one endpoint per step, linear
//!   convergence
//! - [`combined`]: chord step from one end and tangent step from the other,
//!   closing in on the root from both sides
//!
//! The three solvers are peers. None falls back to another; comparing them is
//! left to the caller.
//!
//! # Observers
//!
//! Each solver emits one event per completed iteration, carrying the values
//! the iteration used and produced. Observers may return
//! [`Action::StopEarly`] to end the solve with
//! [`Status::StoppedByObserver`].
//!
//! [`Function`]: tangent_core::Function
//! [`Differentiable`]: tangent_core::Differentiable
//! [`Observer`]: tangent_core::Observer

mod action;
mod config;
mod error;
mod evaluate;
mod solution;
mod step;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use solution::{Solution, Status};

pub mod chord;
pub mod combined;
pub mod newton;

/// Derivative magnitude below which a tangent step is not attempted.
///
/// Newton's method and the tangent side of the combined method stop with
/// [`Status::SingularDerivative`] when `|f'(x)|` falls below this value.
pub const SINGULAR_DERIVATIVE_TOL: f64 = 1e-12;
