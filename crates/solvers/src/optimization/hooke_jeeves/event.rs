/// Event emitted at the top of every outer Hooke-Jeeves iteration.
///
/// The event describes the base point the iteration is about to improve on,
/// before any exploratory move is made. The first event of a run therefore
/// reports the starting point and its objective after a single evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// One-based index of the iteration about to run.
    pub iter: usize,

    /// Objective evaluations performed so far in this run.
    pub evals: usize,

    /// Current base point.
    pub x: &'a [f64],

    /// Objective value at the base point.
    pub objective: f64,

    /// Current step length, compared against `epsilon` for termination.
    pub step_length: f64,
}
