//! Logging observer.

use tangent_core::Observer;
use tracing::debug;

use crate::traits::{HasDelta, HasEstimate, HasIteration};

/// An observer that logs every iteration through `tracing` at debug level.
///
/// Each record carries the solver label, iteration counter, estimate, and
/// delta as structured fields. The observer never requests an action, so it
/// can be dropped into any solve without changing its outcome.
///
/// # Example
///
/// ```
/// use tangent_observers::log::LogObserver;
/// use tangent_solvers::equation::{Config, chord};
///
/// let f = |x: f64| x * x - 2.0;
/// let solution = chord::solve(&f, [1.0, 2.0], &Config::default(), LogObserver::new("chord"))
///     .unwrap();
/// assert!(solution.is_converged());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    solver: &'static str,
}

impl LogObserver {
    /// Creates a log observer that tags records with `solver`.
    #[must_use]
    pub fn new(solver: &'static str) -> Self {
        Self { solver }
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasIteration + HasEstimate + HasDelta,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        debug!(
            solver = self.solver,
            iter = event.iter(),
            estimate = event.estimate(),
            delta = event.delta(),
            "iteration"
        );
        None
    }
}
