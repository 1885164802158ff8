//! Convergence of the three root-finding methods, side by side.
//!
//! Each mode solves one equation with Newton's method, the chord method and
//! the combined chord-and-tangent method, then opens a plot of `log₁₀ delta`
//! per iteration for all three.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- sqrt2
//! cargo run --example plot --features plot -- log
//! cargo run --example plot --features plot -- sine
//! ```
//!
//! # Modes
//!
//! - **sqrt2**: x² − 2 = 0 on \[1, 2\]. The root is √2.
//! - **log**: 2x − 5 ln x − 3 = 0 on \[0.5, 1\]. The root is ≈ 0.73697.
//! - **sine**: 2 lg(x + 7) − 5 sin x = 0 on \[2.7, 2.8\]. The root is ≈ 2.73516.
//!
//! A tight tolerance is used so the difference between linear and quadratic
//! convergence is visible.

use std::{error::Error, f64::consts::LN_10};

use tangent_core::{Differentiable, WithDerivative};
use tangent_observers::ConvergencePlot;
use tangent_solvers::equation::{Config, chord, combined, newton};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "sqrt2".into());
    match mode.as_str() {
        "sqrt2" => compare(
            "x² − 2 = 0",
            &WithDerivative::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x),
            1.0,
            [1.0, 2.0],
        ),
        "log" => compare(
            "2x − 5 ln x − 3 = 0",
            &WithDerivative::new(
                |x: f64| 2.0 * x - 5.0 * x.ln() - 3.0,
                |x: f64| 2.0 - 5.0 / x,
            ),
            1.0,
            [0.5, 1.0],
        ),
        "sine" => compare(
            "2 lg(x + 7) − 5 sin x = 0",
            &WithDerivative::new(
                |x: f64| 2.0 * (x + 7.0).log10() - 5.0 * x.sin(),
                |x: f64| 2.0 / ((x + 7.0) * LN_10) - 5.0 * x.cos(),
            ),
            2.75,
            [2.7, 2.8],
        ),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [sqrt2|log|sine]");
            std::process::exit(1);
        }
    }
}

/// Runs all three methods on `f` and shows their convergence.
fn compare<F: Differentiable>(
    title: &str,
    f: &F,
    x0: f64,
    bracket: [f64; 2],
) -> Result<(), Box<dyn Error>> {
    let config = Config::new(1e-12, 100)?;
    let mut plot = ConvergencePlot::new(format!("Convergence: {title}"));

    let newton = newton::solve(f, x0, &config, plot.run("Newton"))?;
    let chord = chord::solve(f, bracket, &config, plot.run("Chord"))?;
    let combined = combined::solve(f, bracket, &config, plot.run("Combined"))?;

    for (name, solution) in [("Newton", newton), ("Chord", chord), ("Combined", combined)] {
        println!(
            "{name:>8}: x = {:.12}, iterations = {}, {:?}",
            solution.x, solution.iters, solution.status
        );
    }

    plot.show()?;
    Ok(())
}
