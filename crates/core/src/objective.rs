use std::convert::Infallible;

/// A scalar objective over an n-dimensional point.
///
/// Solvers call the objective with a slice whose length equals the number of
/// solver variables. Implementations must be deterministic: repeated calls
/// with the same point must return the same value, otherwise solver results
/// are not reproducible.
///
/// Closures `Fn(&[f64]) -> f64` implement `Objective` with an [`Infallible`]
/// error, so most callers never implement this trait by hand.
pub trait Objective {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed at `x`.
    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error>;
}

/// Blanket implementation for infallible objective closures.
impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    type Error = Infallible;

    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}
