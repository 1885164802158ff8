//! Combined chord-and-tangent method.
//!
//! # Algorithm
//!
//! Each iteration moves both ends of the bracket `[a, b]` at once, using the
//! values at the start of the iteration for both moves:
//!
//! ```text
//! a' = a - f(a) (b - a) / (f(b) - f(a))    // chord from a
//! b' = b - f(b) / f'(b)                     // tangent from b
//! ```
//!
//! The solve converges when `|b' - a'| < epsilon` and reports the midpoint of
//! the new endpoints. When the iteration limit is reached the midpoint of the
//! last endpoints is reported.
//!
//! # Preconditions
//!
//! The method relies on the chord and tangent estimates approaching the root
//! from opposite sides. That holds when, on the bracket:
//!
//! - `f(a)` and `f(b)` have opposite signs,
//! - `f` is monotonic and `f''` does not change sign,
//! - `b` is the endpoint where `f(b) f''(b) > 0` (the tangent side).
//!
//! None of this is checked. Pass the endpoints in the right order; the
//! bracket is never reordered. If the conditions fail the two estimates may
//! not close in on the root, and the solve typically ends with
//! [`Status::MaxIters`] or an error.
//!
//! A horizontal secant (`f(a) == f(b)`) is an error. A derivative at `b` with
//! magnitude below [`SINGULAR_DERIVATIVE_TOL`] ends the solve with
//! [`Status::SingularDerivative`], reporting the midpoint of the current
//! bracket.
//!
//! [`SINGULAR_DERIVATIVE_TOL`]: super::SINGULAR_DERIVATIVE_TOL

mod event;


pub use event::Event;

use tangent_core::{Differentiable, Observer};
use tracing::{debug, trace};

use super::{Action, Config, Error, Solution, Status, evaluate, step};

/// Finds a root with the combined method on `bracket = [a, b]`.
///
/// `a` is advanced by chord steps and `b` by tangent steps; see the
/// [module docs](self) for the conditions under which they converge.
///
/// The observer receives an [`Event`] after each iteration and may return
/// [`Action::StopEarly`] to end the solve with the midpoint of the new
/// endpoints.
///
/// # Errors
///
/// Returns an error if a bracket endpoint is not finite, if the function or
/// its derivative evaluates to a non-finite value, or if `f(a) == f(b)` for
/// the current bracket.
pub fn solve<F, Obs>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Differentiable + ?Sized,
    Obs: Observer<Event, Action>,
{
    let (mut a, mut b) = evaluate::bracket(bracket)?;
    debug!(a, b, epsilon = config.epsilon(), max_iters = config.max_iters(), "combined: start");

    for iter in 1..=config.max_iters() {
        let fa = evaluate::value(function, a)?;
        let fb = evaluate::value(function, b)?;
        let dfb = evaluate::derivative(function, b)?;

        let a_next = step::secant(a, fa, b, fb)?;
        let Some(b_next) = step::tangent(b, fb, dfb) else {
            debug!(b, dfb, iters = iter - 1, "combined: derivative too close to zero");
            return Ok(Solution::evaluated(
                function,
                midpoint(a, b),
                Status::SingularDerivative,
                iter - 1,
            ));
        };
        let delta = (b_next - a_next).abs();
        trace!(iter, a = a_next, b = b_next, delta, "combined: step");

        let event = Event {
            iter,
            bracket: [a, b],
            fa,
            fb,
            dfb,
            next: [a_next, b_next],
            delta,
        };

        a = a_next;
        b = b_next;

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::evaluated(
                function,
                midpoint(a, b),
                Status::StoppedByObserver,
                iter,
            ));
        }

        if delta < config.epsilon() {
            debug!(a, b, iters = iter, "combined: converged");
            return Ok(Solution::evaluated(
                function,
                midpoint(a, b),
                Status::Converged,
                iter,
            ));
        }
    }

    debug!(a, b, max_iters = config.max_iters(), "combined: iteration limit reached");
    Ok(Solution::evaluated(
        function,
        midpoint(a, b),
        Status::MaxIters,
        config.max_iters(),
    ))
}

/// Runs the combined method without observation.
///
/// # Errors
///
/// Returns an error if a bracket endpoint is not finite, if the function or
/// its derivative evaluates to a non-finite value, or if `f(a) == f(b)` for
/// the current bracket.
pub fn solve_unobserved<F>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: Differentiable + ?Sized,
{
    solve(function, bracket, config, ())
}

fn midpoint(a: f64, b: f64) -> f64 {
    0.5 * (a + b)
}
