//! Solving a task with every method and printing the outcome.
//!
//! A [`TaskReport`] renders the way the per-step printouts of a numerical
//! methods course do: a trace table per method, the root each method found
//! with a residual check, and an iteration-count comparison.

use std::fmt;

use tangent_core::Observer;
use tangent_observers::{
    log::LogObserver,
    table::{Tabulate, TraceTable},
};
use tangent_solvers::equation::{self, Action, Config, Solution, chord, combined, newton};

use crate::{Error, Task};

const RULE_WIDTH: usize = 50;

/// The outcome of one method on one task.
#[derive(Debug, Clone)]
pub struct MethodReport<E> {
    /// Display name of the method.
    pub method: &'static str,

    /// What the solver returned.
    pub solution: Solution,

    /// One row per completed iteration.
    pub table: TraceTable<E>,
}

/// The outcome of all three methods on one task.
#[derive(Debug, Clone)]
pub struct TaskReport {
    pub task: Task,
    pub config: Config,
    pub newton: MethodReport<newton::Event>,
    pub chord: MethodReport<chord::Event>,
    pub combined: MethodReport<combined::Event>,
}

impl TaskReport {
    /// Returns each method's name with the iterations it used.
    #[must_use]
    pub fn iterations(&self) -> [(&'static str, usize); 3] {
        [
            (self.newton.method, self.newton.solution.iters),
            (self.chord.method, self.chord.solution.iters),
            (self.combined.method, self.combined.solution.iters),
        ]
    }
}

/// Solves `task` with Newton's method, the chord method, and the combined
/// method.
///
/// Every iteration is recorded in the method's table and logged at debug
/// level.
///
/// # Errors
///
/// Returns an error if any solver fails.
pub fn run(task: &Task, config: &Config) -> Result<TaskReport, Error> {
    let f = &task.function;

    let newton = traced::<newton::Event, _>("Newton", task, |observer| {
        newton::solve(f, task.x0, config, observer)
    })?;
    let chord = traced::<chord::Event, _>("Chord", task, |observer| {
        chord::solve(f, task.bracket, config, observer)
    })?;
    let combined = traced::<combined::Event, _>("Combined", task, |observer| {
        combined::solve(f, task.bracket, config, observer)
    })?;

    Ok(TaskReport {
        task: *task,
        config: *config,
        newton,
        chord,
        combined,
    })
}

/// Runs one solve with an observer that fills a table and logs each event.
fn traced<E, S>(method: &'static str, task: &Task, solve: S) -> Result<MethodReport<E>, Error>
where
    E: Tabulate,
    LogObserver: Observer<E, Action>,
    S: FnOnce(&mut dyn FnMut(&E) -> Option<Action>) -> Result<Solution, equation::Error>,
{
    let mut table = TraceTable::new();
    let mut log = LogObserver::new(method);

    let solution = solve(&mut |event: &E| -> Option<Action> {
        table.record(event);
        log.observe(event)
    })
    .map_err(|source| Error::Solve {
        task: task.name,
        method,
        source,
    })?;

    Ok(MethodReport {
        method,
        solution,
        table,
    })
}

impl<E: Tabulate> fmt::Display for MethodReport<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Solution {
            status,
            x,
            residual,
            iters,
        } = self.solution;

        writeln!(f, "{} method:", self.method)?;
        write!(f, "{}", self.table)?;
        writeln!(f, "Result: x = {x:.6} (iterations: {iters}, {status:?})")?;
        writeln!(f, "Check: f({x:.6}) = {residual:.2e}")
    }
}

impl fmt::Display for TaskReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.task.bracket;

        writeln!(f, "Equation: {}", self.task.equation)?;
        writeln!(f, "Interval: [{a}, {b}]")?;
        writeln!(f, "Newton start: {}", self.task.x0)?;
        writeln!(f, "Tolerance: {}", self.config.epsilon())?;
        writeln!(f)?;

        writeln!(f, "{}", self.newton)?;
        writeln!(f, "{}", self.chord)?;
        writeln!(f, "{}", self.combined)?;

        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "Comparison:")?;
        for (method, iters) in self.iterations() {
            writeln!(f, "{method:<10}{iters} iterations")?;
        }
        Ok(())
    }
}
