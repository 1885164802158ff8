/// A real-valued function of one real variable.
///
/// Solvers search for an `x` where [`Function::value`] is zero. The function
/// is assumed continuous and free of side effects on the domain of use, so a
/// solver may evaluate it at the same point more than once.
///
/// Any `Fn(f64) -> f64` closure or function pointer implements this trait.
pub trait Function {
    /// Evaluates `f(x)`.
    fn value(&self, x: f64) -> f64;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}

/// A [`Function`] that also supplies its analytic derivative.
///
/// No numerical differentiation is performed anywhere in Tangent; the caller
/// is responsible for `derivative` actually being `f'(x)`.
pub trait Differentiable: Function {
    /// Evaluates `f'(x)`.
    fn derivative(&self, x: f64) -> f64;
}

/// Pairs a function with its derivative.
///
/// # Example
///
/// ```
/// use tangent_core::{Differentiable, Function, WithDerivative};
///
/// let parabola = WithDerivative::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);
///
/// assert_eq!(parabola.value(3.0), 7.0);
/// assert_eq!(parabola.derivative(3.0), 6.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WithDerivative<F, D> {
    function: F,
    derivative: D,
}

impl<F, D> WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    /// Creates a differentiable function from `f` and `f'`.
    pub fn new(function: F, derivative: D) -> Self {
        Self {
            function,
            derivative,
        }
    }
}

impl<F, D> Function for WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        (self.function)(x)
    }
}

impl<F, D> Differentiable for WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn derivative(&self, x: f64) -> f64 {
        (self.derivative)(x)
    }
}
