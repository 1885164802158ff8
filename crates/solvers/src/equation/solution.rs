use tangent_core::Function;


/// How a solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The solver's stopping test was met.
    Converged,

    /// Reached the iteration limit without meeting the stopping test.
    MaxIters,

    /// The derivative was too close to zero for a tangent step.
    ///
    /// The reported estimate is the last point reached before the step.
    SingularDerivative,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an equation solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the root.
    pub x: f64,

    /// Function value at the reported estimate.
    ///
    /// Reported as computed. It may be non-finite when a solve that did not
    /// converge ends at a point outside the function's domain.
    pub residual: f64,

    /// Iterations completed when the solver finished.
    pub iters: usize,
}

impl Solution {
    /// Returns true if the solver met its stopping test.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Builds a solution, evaluating the residual at `x`.
    pub(super) fn evaluated<F: Function + ?Sized>(
        function: &F,
        x: f64,
        status: Status,
        iters: usize,
    ) -> Self {
        Self {
            status,
            x,
            residual: function.value(x),
            iters,
        }
    }
}
