use dfmin_core::Observer;

use crate::traits::{CanStopEarly, HasObjective};

/// Stops a run as soon as an event reports an objective at or below `target`.
///
/// # Example
///
/// ```rust
/// use dfmin_core::functions::Rosenbrock;
/// use dfmin_observers::StopAtObjective;
/// use dfmin_solvers::optimization::hooke_jeeves::{self, Config, Status};
///
/// let solution = hooke_jeeves::minimize(
///     &Rosenbrock,
///     &Rosenbrock::START,
///     &Config::default(),
///     StopAtObjective::new(1e-2),
/// )
/// .unwrap();
///
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// assert!(solution.objective <= 1e-2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopAtObjective {
    target: f64,
}

impl StopAtObjective {
    /// Creates an observer that stops once the objective reaches `target`.
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self { target }
    }

    /// The objective value that triggers a stop.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }
}

impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for StopAtObjective {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.objective() <= self.target).then(A::stop_early)
    }
}
