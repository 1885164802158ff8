use thiserror::Error;

/// Configuration shared by the equation solvers.
///
/// A `Config` is always valid: `epsilon` is finite and positive and
/// `max_iters` is at least one. Construct one with [`Config::new`] or start
/// from [`Config::default`], which uses `epsilon = 1e-6` and
/// `max_iters = 100`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawConfig"))]
pub struct Config {
    epsilon: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive")]
    Epsilon,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: 1e-6,
            max_iters: 100,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance and iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not finite and positive, or if
    /// `max_iters` is zero.
    pub fn new(epsilon: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::Epsilon);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self { epsilon, max_iters })
    }

    /// Returns a copy of this config with a different tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not finite and positive.
    pub fn with_epsilon(self, epsilon: f64) -> Result<Self, ConfigError> {
        Self::new(epsilon, self.max_iters)
    }

    /// Returns a copy of this config with a different iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero.
    pub fn with_max_iters(self, max_iters: usize) -> Result<Self, ConfigError> {
        Self::new(self.epsilon, max_iters)
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

/// Unvalidated mirror of [`Config`] used for deserialization.
///
/// Missing fields take their default values.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    epsilon: f64,
    max_iters: usize,
}

#[cfg(feature = "serde")]
impl Default for RawConfig {
    fn default() -> Self {
        let config = Config::default();
        Self {
            epsilon: config.epsilon,
            max_iters: config.max_iters,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.epsilon, raw.max_iters)
    }
}
