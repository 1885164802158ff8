//! Convergence plot for comparing solvers.
//!
//! See [`ConvergencePlot`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use tangent_core::Observer;

use crate::traits::{HasDelta, HasIteration};

/// Collects `log₁₀ delta` against iteration for several solver runs and
/// displays them together in an egui window.
///
/// Each call to [`run`](ConvergencePlot::run) starts a named series and
/// returns a [`RunObserver`] to pass to a solver. Steeper curves mean faster
/// convergence: a quadratically convergent method roughly doubles its number
/// of correct digits per iteration, which shows as an accelerating drop.
///
/// # Example
///
/// ```ignore
/// let mut plot = ConvergencePlot::new("x² = 2");
/// newton::solve(&f, 1.0, &config, plot.run("Newton"))?;
/// chord::solve(&f, [1.0, 2.0], &config, plot.run("Chord"))?;
/// plot.show()?;
/// ```
pub struct ConvergencePlot {
    title: String,
    runs: Vec<(String, Vec<[f64; 2]>)>,
}

/// Observer that appends to one series of a [`ConvergencePlot`].
///
/// Iterations with a non-positive delta have no logarithm and are skipped.
pub struct RunObserver<'a> {
    points: &'a mut Vec<[f64; 2]>,
}

impl ConvergencePlot {
    /// Creates an empty plot with a window title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            runs: Vec::new(),
        }
    }

    /// Starts a new named series and returns its observer.
    pub fn run(&mut self, name: impl Into<String>) -> RunObserver<'_> {
        let index = self.runs.len();
        self.runs.push((name.into(), Vec::new()));
        RunObserver {
            points: &mut self.runs[index].1,
        }
    }

    /// Returns each series name with its `[iteration, log₁₀ delta]` points.
    pub fn runs(&self) -> impl Iterator<Item = (&str, &[[f64; 2]])> {
        self.runs
            .iter()
            .map(|(name, points)| (name.as_str(), points.as_slice()))
    }

    /// Opens a blocking egui window displaying all collected series.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let runs = self.runs;

        eframe::run_native(
            &self.title,
            options,
            Box::new(move |_cc| Ok(Box::new(PlotApp { runs }))),
        )
    }
}

impl<E, A> Observer<E, A> for RunObserver<'_>
where
    E: HasIteration + HasDelta,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let delta = event.delta();
        if delta > 0.0 {
            #[allow(clippy::cast_precision_loss)]
            let iter = event.iter() as f64;
            self.points.push([iter, delta.log10()]);
        }
        None
    }
}

/// The egui [`eframe::App`] that renders collected series.
struct PlotApp {
    runs: Vec<(String, Vec<[f64; 2]>)>,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("convergence_plot")
                .legend(Legend::default())
                .x_axis_label("iteration")
                .y_axis_label("log₁₀ delta")
                .show(ui, |plot_ui| {
                    for (name, points) in &self.runs {
                        let line: PlotPoints = points.iter().copied().collect();
                        let markers: PlotPoints = points.iter().copied().collect();
                        plot_ui.line(Line::new(line).name(name));
                        plot_ui.points(Points::new(markers).name(name).radius(3.0));
                    }
                });
        });
    }
}
