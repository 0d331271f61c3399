/// Indicates why a Nelder-Mead search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The simplex converged and the result passed the local-minimum test.
    Converged,

    /// The evaluation budget `kcount` was exceeded.
    BudgetExceeded,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Nelder-Mead search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Estimated minimizer.
    pub x: Vec<f64>,

    /// Objective value at the estimated minimizer.
    pub objective: f64,

    /// Objective evaluations performed, across all restarts.
    pub evals: usize,

    /// Number of restarts after a failed local-minimum test.
    pub restarts: usize,
}

impl Solution {
    /// Returns the classic `ifault` code: `0` when converged, `2` when the
    /// budget was exceeded, and `None` when an observer stopped the run.
    #[must_use]
    pub fn fault_code(&self) -> Option<i32> {
        match self.status {
            Status::Converged => Some(0),
            Status::BudgetExceeded => Some(2),
            Status::StoppedByObserver => None,
        }
    }
}
