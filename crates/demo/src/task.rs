//! The example equations.

use std::{f64::consts::LN_10, str::FromStr};

use tangent_core::WithDerivative;

use crate::Error;

/// A differentiable function given by plain function pointers.
pub type Equation = WithDerivative<fn(f64) -> f64, fn(f64) -> f64>;

/// One equation together with where each method starts from.
#[derive(Debug, Clone, Copy)]
pub struct Task {
    /// Short name used on the command line.
    pub name: &'static str,

    /// Human-readable form of the equation.
    pub equation: &'static str,

    /// The function and its analytic derivative.
    pub function: Equation,

    /// Start point for Newton's method.
    pub x0: f64,

    /// Bracket for the chord and combined methods.
    pub bracket: [f64; 2],
}

impl Task {
    /// `2x - 5 ln(x) - 3 = 0` on `[0.5, 1.0]`, Newton from `1.0`.
    #[must_use]
    pub fn logarithmic() -> Self {
        Self {
            name: "log",
            equation: "2x - 5 ln(x) - 3 = 0",
            function: WithDerivative::new(
                log_value as fn(f64) -> f64,
                log_slope as fn(f64) -> f64,
            ),
            x0: 1.0,
            bracket: [0.5, 1.0],
        }
    }

    /// `2 lg(x + 7) - 5 sin(x) = 0` on `[2.7, 2.8]`, Newton from `2.75`.
    #[must_use]
    pub fn trigonometric() -> Self {
        Self {
            name: "sine",
            equation: "2 lg(x + 7) - 5 sin(x) = 0",
            function: WithDerivative::new(
                sine_value as fn(f64) -> f64,
                sine_slope as fn(f64) -> f64,
            ),
            x0: 2.75,
            bracket: [2.7, 2.8],
        }
    }
}

fn log_value(x: f64) -> f64 {
    2.0 * x - 5.0 * x.ln() - 3.0
}

fn log_slope(x: f64) -> f64 {
    2.0 - 5.0 / x
}

fn sine_value(x: f64) -> f64 {
    2.0 * (x + 7.0).log10() - 5.0 * x.sin()
}

fn sine_slope(x: f64) -> f64 {
    2.0 / ((x + 7.0) * LN_10) - 5.0 * x.cos()
}

/// Which tasks to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Logarithmic,
    Trigonometric,
}

impl Selection {
    /// Returns the selected tasks in a fixed order.
    #[must_use]
    pub fn tasks(self) -> Vec<Task> {
        match self {
            Self::All => vec![Task::logarithmic(), Task::trigonometric()],
            Self::Logarithmic => vec![Task::logarithmic()],
            Self::Trigonometric => vec![Task::trigonometric()],
        }
    }
}

impl FromStr for Selection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "log" => Ok(Self::Logarithmic),
            "sine" => Ok(Self::Trigonometric),
            other => Err(Error::UnknownTask(other.to_owned())),
        }
    }
}
