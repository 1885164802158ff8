use tangent_core::{Differentiable, Function};

use super::Error;

/// Evaluates `f(x)`, rejecting non-finite results.
pub(super) fn value<F: Function + ?Sized>(function: &F, x: f64) -> Result<f64, Error> {
    let value = function.value(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteValue { x, value })
    }
}

/// Evaluates `f'(x)`, rejecting non-finite results.
pub(super) fn derivative<F: Differentiable + ?Sized>(function: &F, x: f64) -> Result<f64, Error> {
    let value = function.derivative(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteDerivative { x, value })
    }
}

/// Checks that a caller-supplied start point is finite.
pub(super) fn start(x: f64) -> Result<f64, Error> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(Error::NonFiniteStart { value: x })
    }
}

/// Checks both bracket endpoints, keeping their order.
///
/// The order matters to the combined method, which treats `a` and `b`
/// differently, so the bracket is not normalized.
pub(super) fn bracket(bracket: [f64; 2]) -> Result<(f64, f64), Error> {
    let [a, b] = bracket;
    Ok((start(a)?, start(b)?))
}
