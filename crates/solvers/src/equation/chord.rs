//! Chord method: secant steps on a bracket.
//!
//! # Algorithm
//!
//! Each iteration draws the secant through `(a, f(a))` and `(b, f(b))` and
//! takes its zero as the new estimate:
//!
//! ```text
//! x = a - f(a) (b - a) / (f(b) - f(a))
//! ```
//!
//! The solve converges when `|f(x)| < epsilon` or when `x` moved less than
//! `epsilon` from the previous estimate (the first estimate is measured
//! from `b`). Otherwise the endpoint whose value shares the sign of `f(x)`
//! is replaced by `x`: if `f(a) f(x) < 0` the root is in `[a, x]` and `b`
//! moves, else `a` moves.
//!
//! For a function that is convex or concave on the bracket one endpoint
//! stays fixed and convergence is linear.
//!
//! # Bracket
//!
//! The bracket should straddle a sign change, but this is not checked. A
//! bracket without one still produces estimates; they just need not approach
//! a root. A horizontal secant (`f(a) == f(b)`) is an error.

mod event;

pub use event::Event;

use tangent_core::{Function, Observer};
use tracing::{debug, trace};

use super::{Action, Config, Error, Solution, Status, evaluate, step};

/// Finds a root with the chord method on `bracket = [a, b]`.
///
/// The observer receives an [`Event`] after each secant step and may return
/// [`Action::StopEarly`] to end the solve with that step's estimate.
///
/// # Errors
///
/// Returns an error if a bracket endpoint is not finite, if the function
/// evaluates to a non-finite value, or if `f(a) == f(b)` for the current
/// bracket.
pub fn solve<F, Obs>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    let (mut a, mut b) = evaluate::bracket(bracket)?;
    debug!(a, b, epsilon = config.epsilon(), max_iters = config.max_iters(), "chord: start");

    let mut fa = evaluate::value(function, a)?;
    let mut fb = evaluate::value(function, b)?;

    let (mut x, mut fx) = (b, fb);

    for iter in 1..=config.max_iters() {
        let x_next = step::secant(a, fa, b, fb)?;
        let fx_next = evaluate::value(function, x_next)?;
        let delta = (x_next - x).abs();
        trace!(iter, a, b, x = x_next, fx = fx_next, delta, "chord: step");

        x = x_next;
        fx = fx_next;

        let event = Event {
            iter,
            bracket: [a, b],
            fa,
            fb,
            x,
            fx,
            delta,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x,
                residual: fx,
                iters: iter,
            });
        }

        if fx.abs() < config.epsilon() || delta < config.epsilon() {
            debug!(x, iters = iter, "chord: converged");
            return Ok(Solution {
                status: Status::Converged,
                x,
                residual: fx,
                iters: iter,
            });
        }

        if fa * fx < 0.0 {
            b = x;
            fb = fx;
        } else {
            a = x;
            fa = fx;
        }
    }

    debug!(x, max_iters = config.max_iters(), "chord: iteration limit reached");
    Ok(Solution {
        status: Status::MaxIters,
        x,
        residual: fx,
        iters: config.max_iters(),
    })
}

/// Runs the chord method without observation.
///
/// # Errors
///
/// Returns an error if a bracket endpoint is not finite, if the function
/// evaluates to a non-finite value, or if `f(a) == f(b)` for the current
/// bracket.
pub fn solve_unobserved<F>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
{
    solve(function, bracket, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn parabola(x: f64) -> f64 {
        x * x - 2.0
    }

    #[test]
    fn finds_square_root_of_two() {
        let solution =
            solve_unobserved(&parabola, [1.0, 2.0], &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 9);
        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-6);
        assert!(solution.residual.abs() < 1e-6);
    }

    #[test]
    fn convex_function_keeps_right_endpoint_fixed() {
        let mut brackets = Vec::new();
        let observer = |event: &Event| -> Option<Action> {
            brackets.push(event.bracket);
            None
        };
        solve(&parabola, [1.0, 2.0], &Config::default(), observer).expect("should solve");

        assert!(brackets.iter().all(|[_, b]| *b == 2.0));
        assert!(brackets.windows(2).all(|pair| pair[1][0] > pair[0][0]));
    }

    #[test]
    fn first_step_matches_hand_computation() {
        let config = Config::new(1e-6, 1).expect("valid config");
        let mut first = None;
        let observer = |event: &Event| -> Option<Action> {
            first = Some(*event);
            None
        };
        let solution = solve(&parabola, [1.0, 2.0], &config, observer).expect("should return");

        let event = first.expect("one event");
        assert_eq!(event.iter, 1);
        assert_eq!(event.bracket, [1.0, 2.0]);
        assert_relative_eq!(event.fa, -1.0);
        assert_relative_eq!(event.fb, 2.0);
        assert_relative_eq!(event.x, 4.0 / 3.0);
        assert_relative_eq!(event.fx, -2.0 / 9.0);
        assert_relative_eq!(event.delta, 2.0 / 3.0);

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.x, 4.0 / 3.0);
    }

    #[test]
    fn bracket_order_is_kept() {
        // a = 2 is the convex side, so every secant zero falls short of the
        // root on b's side and only b moves.
        let mut brackets = Vec::new();
        let observer = |event: &Event| -> Option<Action> {
            brackets.push(event.bracket);
            None
        };
        let solution =
            solve(&parabola, [2.0, 1.0], &Config::default(), observer).expect("should solve");

        assert!(solution.is_converged());
        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-6);
        assert!(brackets.iter().all(|[a, _]| *a == 2.0));
        assert_relative_eq!(brackets[1][1], 4.0 / 3.0);
    }

    #[test]
    fn stops_on_small_residual() {
        // Linear function: the first secant lands exactly on the root.
        let f = |x: f64| 3.0 * x - 1.5;
        let solution = solve_unobserved(&f, [0.0, 4.0], &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.x, 0.5);
    }

    #[test]
    fn errors_on_horizontal_secant() {
        let result = solve_unobserved(&parabola, [-1.0, 1.0], &Config::default());

        assert_eq!(
            result,
            Err(Error::DegenerateSecant {
                a: -1.0,
                b: 1.0,
                value: -1.0,
            })
        );
    }

    #[test]
    fn errors_on_zero_width_bracket() {
        let result = solve_unobserved(&parabola, [1.5, 1.5], &Config::default());
        assert!(matches!(result, Err(Error::DegenerateSecant { .. })));
    }

    #[test]
    fn errors_on_non_finite_bracket() {
        let result = solve_unobserved(&parabola, [f64::NAN, 2.0], &Config::default());
        assert!(matches!(result, Err(Error::NonFiniteStart { .. })));

        let result = solve_unobserved(&parabola, [1.0, f64::INFINITY], &Config::default());
        assert!(matches!(result, Err(Error::NonFiniteStart { .. })));
    }

    #[test]
    fn observer_can_stop_iteration() {
        let observer = |event: &Event| (event.iter == 3).then_some(Action::StopEarly);

        let solution =
            solve(&parabola, [1.0, 2.0], &Config::default(), observer).expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
        assert_relative_eq!(solution.residual, parabola(solution.x));
    }

    #[test]
    fn bracket_without_sign_change_is_not_rejected() {
        // Both endpoints positive; the secant extrapolates toward the root
        // below the bracket, replacing `a` every step: 1.6, 1.478..., 148/103.
        let config = Config::new(1e-6, 3).expect("valid config");
        let capped = solve_unobserved(&parabola, [2.0, 3.0], &config).expect("should return");

        assert_eq!(capped.status, Status::MaxIters);
        assert_eq!(capped.iters, 3);
        assert_relative_eq!(capped.x, 148.0 / 103.0, epsilon = 1e-12);

        let solution =
            solve_unobserved(&parabola, [2.0, 3.0], &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 14);
        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-6);
    }
}
