use thiserror::Error;

/// Configuration for the Hooke-Jeeves solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Params"))]
pub struct Config {
    rho: f64,
    epsilon: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a Hooke-Jeeves solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rho must be strictly between 0 and 1")]
    Rho,

    #[error("epsilon must be finite and positive")]
    Epsilon,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rho: 0.5,
            epsilon: 1e-6,
            max_iters: 5000,
        }
    }
}

impl Config {
    /// Creates a new config with validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `rho` is not in `(0, 1)`, if `epsilon` is not
    /// finite and positive, or if `max_iters` is zero.
    pub fn new(rho: f64, epsilon: f64, max_iters: usize) -> Result<Self, ConfigError> {
        // Written so that NaN fails the check.
        if !(rho > 0.0 && rho < 1.0) {
            return Err(ConfigError::Rho);
        }
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::Epsilon);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            rho,
            epsilon,
            max_iters,
        })
    }

    /// Returns the geometric step shrink factor.
    #[must_use]
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Returns the step length below which the search stops.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the maximum number of outer iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct Params {
    rho: f64,
    epsilon: f64,
    max_iters: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<Params> for Config {
    type Error = ConfigError;

    fn try_from(params: Params) -> Result<Self, Self::Error> {
        Self::new(params.rho, params.epsilon, params.max_iters)
    }
}
