//! Core traits and types for the Tangent solvers.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Function`]: a scalar function `f(x)` whose root is sought
//! - [`Differentiable`]: a [`Function`] that also supplies `f'(x)`
//! - [`WithDerivative`]: pairs a function and its derivative given as closures
//! - [`Observer`]: receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::{Differentiable, Function, WithDerivative};
pub use observer::Observer;
