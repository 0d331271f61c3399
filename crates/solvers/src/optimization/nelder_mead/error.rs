use thiserror::Error;

use super::{ConfigError, MAX_VARS};

/// Errors that can occur during a Nelder-Mead search.
///
/// Exhausting the evaluation budget and failing the local-minimum test are
/// not errors. The first is reported as
/// [`Status::BudgetExceeded`](super::Status::BudgetExceeded) and the second
/// triggers a restart.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("invalid start: {0}")]
    InvalidStart(#[from] StartError),

    #[error("objective error: {0}")]
    Objective(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub(super) fn objective(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Objective(Box::new(error))
    }

    /// Returns the classic `ifault` code for argument errors.
    ///
    /// Invalid configs and starts map to `1`. Objective failures have no
    /// fault code.
    #[must_use]
    pub fn fault_code(&self) -> Option<i32> {
        match self {
            Self::InvalidConfig(_) | Self::InvalidStart(_) => Some(1),
            Self::Objective(_) => None,
        }
    }
}

/// Reasons a starting point or step vector is rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StartError {
    #[error("start point has no coordinates")]
    Empty,

    #[error("start point has {0} coordinates, at most {MAX_VARS} are supported")]
    TooManyVars(usize),

    #[error("start coordinate {0} is not finite")]
    NonFinite(usize),

    #[error("step has {found} entries, expected {expected}")]
    StepLength { expected: usize, found: usize },

    #[error("step entry {0} is not finite")]
    NonFiniteStep(usize),
}

impl StartError {
    pub(super) fn check(start: &[f64], step: &[f64]) -> Result<(), Self> {
        let n = start.len();
        if n == 0 {
            return Err(Self::Empty);
        }
        if n > MAX_VARS {
            return Err(Self::TooManyVars(n));
        }
        if let Some(index) = start.iter().position(|x| !x.is_finite()) {
            return Err(Self::NonFinite(index));
        }
        if step.len() != n {
            return Err(Self::StepLength {
                expected: n,
                found: step.len(),
            });
        }
        match step.iter().position(|s| !s.is_finite()) {
            Some(index) => Err(Self::NonFiniteStep(index)),
            None => Ok(()),
        }
    }
}
