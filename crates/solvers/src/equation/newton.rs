//! Newton's (tangent) method from a single start point.
//!
//! # Algorithm
//!
//! ```text
//! x_{n+1} = x_n - f(x_n) / f'(x_n)
//! ```
//!
//! The iteration stops when a step is shorter than `epsilon`, reporting the
//! new point. Convergence is quadratic near a simple root but is not
//! guaranteed from an arbitrary start.
//!
//! When `|f'(x)|` drops below [`SINGULAR_DERIVATIVE_TOL`] no step is taken
//! and the solve ends with [`Status::SingularDerivative`], reporting the
//! current point and the number of steps already completed.
//!
//! [`SINGULAR_DERIVATIVE_TOL`]: super::SINGULAR_DERIVATIVE_TOL

mod event;

pub use event::Event;

use tangent_core::{Differentiable, Observer};
use tracing::{debug, trace};

use super::{Action, Config, Error, Solution, Status, evaluate, step};

/// Finds a root with Newton's method starting from `x0`.
///
/// The observer receives an [`Event`] after each tangent step and may return
/// [`Action::StopEarly`] to end the solve with that step's estimate.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, or if the function or its
/// derivative evaluates to a non-finite value.
pub fn solve<F, Obs>(
    function: &F,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Differentiable + ?Sized,
    Obs: Observer<Event, Action>,
{
    let mut x = evaluate::start(x0)?;
    debug!(x0, epsilon = config.epsilon(), max_iters = config.max_iters(), "newton: start");

    for iter in 1..=config.max_iters() {
        let fx = evaluate::value(function, x)?;
        let dfx = evaluate::derivative(function, x)?;

        let Some(x_next) = step::tangent(x, fx, dfx) else {
            debug!(x, dfx, iters = iter - 1, "newton: derivative too close to zero");
            return Ok(Solution {
                status: Status::SingularDerivative,
                x,
                residual: fx,
                iters: iter - 1,
            });
        };
        let delta = (x_next - x).abs();
        trace!(iter, x, fx, dfx, x_next, delta, "newton: step");

        let event = Event {
            iter,
            x,
            fx,
            dfx,
            x_next,
            delta,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::evaluated(
                function,
                x_next,
                Status::StoppedByObserver,
                iter,
            ));
        }

        if delta < config.epsilon() {
            debug!(x = x_next, iters = iter, "newton: converged");
            return Ok(Solution::evaluated(function, x_next, Status::Converged, iter));
        }

        x = x_next;
    }

    debug!(x, max_iters = config.max_iters(), "newton: iteration limit reached");
    Ok(Solution::evaluated(function, x, Status::MaxIters, config.max_iters()))
}

/// Runs Newton's method without observation.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, or if the function or its
/// derivative evaluates to a non-finite value.
pub fn solve_unobserved<F>(function: &F, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: Differentiable + ?Sized,
{
    solve(function, x0, config, ())
}
