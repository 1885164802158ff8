use thiserror::Error;

/// Errors that can occur while solving an equation.
///
/// Running out of iterations and hitting a near-zero derivative are not
/// errors; they are reported through [`Status`](super::Status).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("starting value is not finite: {value}")]
    NonFiniteStart { value: f64 },

    #[error("non-finite function value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },

    #[error("non-finite derivative {value} at x = {x}")]
    NonFiniteDerivative { x: f64, value: f64 },

    #[error("secant through a = {a} and b = {b} is horizontal: f(a) = f(b) = {value}")]
    DegenerateSecant { a: f64, b: f64, value: f64 },
}
