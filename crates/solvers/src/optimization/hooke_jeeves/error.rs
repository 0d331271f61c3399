use thiserror::Error;

use super::{ConfigError, MAX_VARS};

/// Errors that can occur during a Hooke-Jeeves search.
///
/// Running out of iterations is not an error; it is reported through
/// [`Status::MaxIters`](super::Status::MaxIters).
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

    /// Returns the classic fault code for argument errors.
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

/// Reasons a starting point is rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StartError {
    #[error("start point has no coordinates")]
    Empty,

    #[error("start point has {0} coordinates, at most {MAX_VARS} are supported")]
    TooManyVars(usize),

    #[error("start coordinate {0} is not finite")]
    NonFinite(usize),
}

impl StartError {
    pub(super) fn check(start: &[f64]) -> Result<(), Self> {
        if start.is_empty() {
            return Err(Self::Empty);
        }
        if start.len() > MAX_VARS {
            return Err(Self::TooManyVars(start.len()));
        }
        match start.iter().position(|x| !x.is_finite()) {
            Some(index) => Err(Self::NonFinite(index)),
            None => Ok(()),
        }
    }
}
