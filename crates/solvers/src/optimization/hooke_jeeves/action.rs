/// Actions an observer can take during a Hooke-Jeeves search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the current base point.
    StopEarly,
}
