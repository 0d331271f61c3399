use thiserror::Error;

/// Configuration for the Nelder-Mead solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Params"))]
pub struct Config {
    reqmin: f64,
    konvge: usize,
    kcount: usize,
}

/// Errors that can occur when validating a Nelder-Mead solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("reqmin must be finite and positive")]
    Reqmin,

    #[error("konvge must be at least 1")]
    Konvge,

    #[error("kcount must be at least 1")]
    Kcount,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reqmin: 1e-8,
            konvge: 10,
            kcount: 500,
        }
    }
}

impl Config {
    /// Creates a new config with validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `reqmin` is not finite and positive, or if
    /// `konvge` or `kcount` is zero.
    pub fn new(reqmin: f64, konvge: usize, kcount: usize) -> Result<Self, ConfigError> {
        if !reqmin.is_finite() || reqmin <= 0.0 {
            return Err(ConfigError::Reqmin);
        }
        if konvge == 0 {
            return Err(ConfigError::Konvge);
        }
        if kcount == 0 {
            return Err(ConfigError::Kcount);
        }

        Ok(Self {
            reqmin,
            konvge,
            kcount,
        })
    }

    /// Returns the variance threshold used by the convergence check.
    ///
    /// The check passes when the sum of squared deviations of the vertex
    /// values from their mean is at most `reqmin * n`.
    #[must_use]
    pub fn reqmin(&self) -> f64 {
        self.reqmin
    }

    /// Returns the number of simplex moves between convergence checks.
    #[must_use]
    pub fn konvge(&self) -> usize {
        self.konvge
    }

    /// Returns the evaluation budget.
    #[must_use]
    pub fn kcount(&self) -> usize {
        self.kcount
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct Params {
    reqmin: f64,
    konvge: usize,
    kcount: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<Params> for Config {
    type Error = ConfigError;

    fn try_from(params: Params) -> Result<Self, Self::Error> {
        Self::new(params.reqmin, params.konvge, params.kcount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_new() {
        assert_eq!(Config::new(1e-8, 10, 500), Ok(Config::default()));
    }

    #[test]
    fn rejects_bad_reqmin() {
        for reqmin in [0.0, -1e-8, f64::NAN, f64::INFINITY] {
            assert_eq!(Config::new(reqmin, 10, 500), Err(ConfigError::Reqmin));
        }
    }

    #[test]
    fn rejects_zero_counts() {
        assert_eq!(Config::new(1e-8, 0, 500), Err(ConfigError::Konvge));
        assert_eq!(Config::new(1e-8, 10, 0), Err(ConfigError::Kcount));
    }
}
