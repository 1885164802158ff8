//! Iteration tables.
//!
//! [`TraceTable`] records one [`Row`] per solver iteration and implements
//! [`Display`](fmt::Display) to print them under the column headers of the
//! solver that produced them:
//!
//! ```text
//! n   x_n          f(x_n)       f'(x_n)      x_{n+1}      |dx|
//! -------------------------------------------------------------------
//! 1   1.000000     -1.000000    2.000000     1.500000     0.500000
//! ```

use std::{fmt, marker::PhantomData};

use tangent_core::Observer;
use tangent_solvers::equation::{chord, combined, newton};

/// Width of each value column, including the separating space.
const COLUMN_WIDTH: usize = 13;

/// Width of the leading iteration column.
const ITER_WIDTH: usize = 4;

/// An event that can be written as a table row.
pub trait Tabulate {
    /// Headers for the value columns, in row order.
    const COLUMNS: &'static [&'static str];

    /// Returns the 1-based iteration counter.
    fn iteration(&self) -> usize;

    /// Returns one value per entry in [`Tabulate::COLUMNS`].
    fn values(&self) -> Vec<f64>;
}

/// One recorded iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Values in the order of the event's columns.
    pub values: Vec<f64>,
}

/// An observer that records every iteration of a solve.
///
/// Pass `&mut table` as the observer so the table is still available after
/// the solve completes. It never requests an action.
///
/// # Example
///
/// ```
/// use tangent_core::WithDerivative;
/// use tangent_observers::table::TraceTable;
/// use tangent_solvers::equation::{Config, newton};
///
/// let f = WithDerivative::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);
/// let mut table = TraceTable::<newton::Event>::new();
///
/// newton::solve(&f, 1.0, &Config::default(), &mut table).unwrap();
///
/// assert_eq!(table.rows().len(), 5);
/// println!("{table}");
/// ```
#[derive(Debug, Clone)]
pub struct TraceTable<E> {
    rows: Vec<Row>,
    event: PhantomData<fn(&E)>,
}

impl<E: Tabulate> TraceTable<E> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            event: PhantomData,
        }
    }

    /// Returns the recorded rows in iteration order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the column headers, starting with the iteration column.
    pub fn headers(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once("n").chain(E::COLUMNS.iter().copied())
    }

    /// Records a row for `event`.
    pub fn record(&mut self, event: &E) {
        self.rows.push(Row {
            iter: event.iteration(),
            values: event.values(),
        });
    }
}

impl<E: Tabulate> Default for TraceTable<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Tabulate, A> Observer<E, A> for TraceTable<E> {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut TraceTable<E>` to be passed to solvers that take an observer
/// by value, so the rows can be read after the solve completes.
impl<E: Tabulate, A> Observer<E, A> for &mut TraceTable<E> {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

impl<E: Tabulate> fmt::Display for TraceTable<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = ITER_WIDTH + COLUMN_WIDTH * E::COLUMNS.len();

        write!(f, "{:<ITER_WIDTH$}", "n")?;
        for header in E::COLUMNS {
            write!(f, "{header:<COLUMN_WIDTH$}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(width))?;

        for row in &self.rows {
            write!(f, "{:<ITER_WIDTH$}", row.iter)?;
            for value in &row.values {
                write!(f, "{:<COLUMN_WIDTH$}", format!("{value:.6}"))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Tabulate for newton::Event {
    const COLUMNS: &'static [&'static str] = &["x_n", "f(x_n)", "f'(x_n)", "x_{n+1}", "|dx|"];

    fn iteration(&self) -> usize {
        self.iter
    }

    fn values(&self) -> Vec<f64> {
        vec![self.x, self.fx, self.dfx, self.x_next, self.delta]
    }
}

impl Tabulate for chord::Event {
    const COLUMNS: &'static [&'static str] = &["a", "b", "f(a)", "f(b)", "x_new", "|dx|"];

    fn iteration(&self) -> usize {
        self.iter
    }

    fn values(&self) -> Vec<f64> {
        let [a, b] = self.bracket;
        vec![a, b, self.fa, self.fb, self.x, self.delta]
    }
}

impl Tabulate for combined::Event {
    const COLUMNS: &'static [&'static str] = &["a_n", "b_n", "f(a_n)", "f(b_n)", "|a_n - b_n|"];

    fn iteration(&self) -> usize {
        self.iter
    }

    fn values(&self) -> Vec<f64> {
        let [a, b] = self.bracket;
        vec![a, b, self.fa, self.fb, self.delta]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tangent_core::WithDerivative;
    use tangent_solvers::equation::Config;

    fn parabola_table() -> TraceTable<newton::Event> {
        let f = WithDerivative::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);
        let mut table = TraceTable::new();
        newton::solve(&f, 1.0, &Config::default(), &mut table).expect("should solve");
        table
    }

    #[test]
    fn records_one_row_per_iteration() {
        let table = parabola_table();

        let iters: Vec<usize> = table.rows().iter().map(|row| row.iter).collect();
        assert_eq!(iters, [1, 2, 3, 4, 5]);
        assert_eq!(table.rows()[0].values, [1.0, -1.0, 2.0, 1.5, 0.5]);
    }

    #[test]
    fn headers_start_with_iteration_column() {
        let table = TraceTable::<chord::Event>::new();
        let headers: Vec<_> = table.headers().collect();

        assert_eq!(headers, ["n", "a", "b", "f(a)", "f(b)", "x_new", "|dx|"]);
    }

    #[test]
    fn renders_fixed_width_rows() {
        let rendered = parabola_table().to_string();
        let mut lines = rendered.lines();

        let header = lines.next().expect("header line");
        assert!(header.starts_with("n   x_n          f(x_n)"));

        let rule = lines.next().expect("rule line");
        assert_eq!(rule.len(), ITER_WIDTH + 5 * COLUMN_WIDTH);
        assert!(rule.chars().all(|c| c == '-'));

        let first = lines.next().expect("first row");
        assert!(first.starts_with("1   1.000000     -1.000000    2.000000     1.500000"));

        assert_eq!(lines.count(), 4);
    }

    #[test]
    fn combined_rows_use_starting_bracket() {
        let f = WithDerivative::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);
        let mut table = TraceTable::<combined::Event>::new();
        combined::solve(&f, [1.0, 2.0], &Config::default(), &mut table).expect("should solve");

        let first = &table.rows()[0];
        assert_eq!(first.values[..4], [1.0, 2.0, -1.0, 2.0]);
        assert_eq!(table.rows().len(), 4);
    }

    #[test]
    fn empty_table_renders_headers_only() {
        let table = TraceTable::<combined::Event>::new();
        assert_eq!(table.to_string().lines().count(), 2);
    }
}
