//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across Newton, chord, and combined solves.
//!
//! # Event traits
//!
//! - [`HasIteration`]: events that carry a 1-based iteration counter
//! - [`HasEstimate`]: events that carry the iteration's root estimate
//! - [`HasDelta`]: events that carry the iteration's convergence measure
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use tangent_core::Observer;
//! use tangent_observers::traits::{CanStopEarly, HasDelta};
//!
//! /// Stops once the step has been small for a few iterations in a row.
//! struct Settled {
//!     tolerance: f64,
//!     needed: usize,
//!     streak: usize,
//! }
//!
//! impl<E: HasDelta, A: CanStopEarly> Observer<E, A> for Settled {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.delta() < self.tolerance {
//!             self.streak += 1;
//!         } else {
//!             self.streak = 0;
//!         }
//!         (self.streak >= self.needed).then(A::stop_early)
//!     }
//! }
//! ```

use tangent_solvers::equation::{Action, chord, combined, newton};

/// An event that carries an iteration counter.
pub trait HasIteration {
    /// Returns the 1-based iteration counter.
    fn iter(&self) -> usize;
}

/// An event that carries a root estimate.
pub trait HasEstimate {
    /// Returns the estimate this iteration produced.
    fn estimate(&self) -> f64;
}

/// An event that carries the quantity a solver compares against `epsilon`.
pub trait HasDelta {
    /// Returns the step length or bracket gap for this iteration.
    fn delta(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- newton::Event ---

impl HasIteration for newton::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasEstimate for newton::Event {
    fn estimate(&self) -> f64 {
        self.x_next
    }
}

impl HasDelta for newton::Event {
    fn delta(&self) -> f64 {
        self.delta
    }
}

// --- chord::Event ---

impl HasIteration for chord::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasEstimate for chord::Event {
    fn estimate(&self) -> f64 {
        self.x
    }
}

impl HasDelta for chord::Event {
    fn delta(&self) -> f64 {
        self.delta
    }
}

// --- combined::Event ---

impl HasIteration for combined::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasEstimate for combined::Event {
    fn estimate(&self) -> f64 {
        self.midpoint()
    }
}

impl HasDelta for combined::Event {
    fn delta(&self) -> f64 {
        self.delta
    }
}

// --- CanStopEarly ---

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use tangent_core::{Observer, WithDerivative};
    use tangent_solvers::equation::{Config, Status};

    /// Stops after a fixed number of iterations, for any solver.
    struct StopAt(usize);

    impl<E: HasIteration, A: CanStopEarly> Observer<E, A> for StopAt {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.iter() >= self.0).then(A::stop_early)
        }
    }

    #[test]
    fn generic_observer_works_with_every_solver() {
        let f = WithDerivative::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);
        let config = Config::default();

        let newton = newton::solve(&f, 1.0, &config, StopAt(2)).expect("newton");
        let chord = chord::solve(&f, [1.0, 2.0], &config, StopAt(2)).expect("chord");
        let combined = combined::solve(&f, [1.0, 2.0], &config, StopAt(2)).expect("combined");

        for solution in [newton, chord, combined] {
            assert_eq!(solution.status, Status::StoppedByObserver);
            assert_eq!(solution.iters, 2);
        }
    }

    #[test]
    fn combined_estimate_is_midpoint_of_new_endpoints() {
        let event = combined::Event {
            iter: 1,
            bracket: [1.0, 2.0],
            fa: -1.0,
            fb: 2.0,
            dfb: 4.0,
            next: [4.0 / 3.0, 1.5],
            delta: 1.0 / 6.0,
        };

        assert_relative_eq!(event.estimate(), 17.0 / 12.0);
        assert_relative_eq!(event.delta(), 1.0 / 6.0);
        assert_eq!(event.iter(), 1);
    }

    #[test]
    fn estimates_track_solution() {
        let f = |x: f64| x * x - 2.0;
        let mut last = f64::NAN;
        let observer = |event: &chord::Event| -> Option<Action> {
            last = event.estimate();
            None
        };

        let solution =
            chord::solve(&f, [1.0, 2.0], &Config::default(), observer).expect("should solve");

        assert_relative_eq!(last, solution.x);
    }
}
