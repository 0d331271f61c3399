/// Indicates why a Hooke-Jeeves search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The step length shrank to `epsilon` or below.
    Converged,

    /// Reached the iteration limit with the step length still above `epsilon`.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Hooke-Jeeves search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best point found (the final base point).
    pub x: Vec<f64>,

    /// Objective value at `x`.
    pub objective: f64,

    /// Outer iterations started.
    pub iters: usize,

    /// Objective evaluations performed.
    pub evals: usize,
}
