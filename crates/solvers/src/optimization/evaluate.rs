use dfmin_core::Objective;

/// Evaluates an objective and counts the calls made during one solver run.
///
/// A fresh evaluator is created at the start of every run and threaded
/// through the run by mutable reference, so the count is exact and local to
/// that run. A call is counted before the objective is invoked, which means a
/// failed call still counts as an evaluation.
#[derive(Debug)]
pub struct Evaluator<'a, F> {
    objective: &'a F,
    evals: usize,
}

impl<'a, F: Objective> Evaluator<'a, F> {
    /// Creates an evaluator with a zero count.
    #[must_use]
    pub fn new(objective: &'a F) -> Self {
        Self { objective, evals: 0 }
    }

    /// Evaluates the objective at `x` and increments the count.
    ///
    /// # Errors
    ///
    /// Returns the objective's error if the evaluation fails.
    pub fn evaluate(&mut self, x: &[f64]) -> Result<f64, F::Error> {
        self.evals += 1;
        self.objective.evaluate(x)
    }

    /// Returns the number of evaluations made so far.
    #[must_use]
    pub fn evals(&self) -> usize {
        self.evals
    }
}
