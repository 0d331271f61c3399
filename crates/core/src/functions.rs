//! Classic test objectives for unconstrained minimization.
//!
//! Both functions have a known global minimum of zero and a conventional
//! starting point far from it, which makes them the standard smoke tests for
//! pattern search and simplex methods.

use std::convert::Infallible;

use crate::Objective;

/// Rosenbrock's parabolic valley ("banana") function.
///
/// ```text
/// f(x, y) = 100 (y - x²)² + (1 - x)²
/// ```
///
/// The minimum `f(1, 1) = 0` lies at the bottom of a long curved valley that
/// is easy to find and hard to follow. Only the first two coordinates of the
/// point are read.
///
/// # Panics
///
/// Evaluating a point with fewer than [`Rosenbrock::DIM`] coordinates panics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rosenbrock;

impl Rosenbrock {
    /// Number of variables.
    pub const DIM: usize = 2;

    /// The conventional starting point.
    pub const START: [f64; 2] = [-1.2, 1.0];

    /// The global minimizer.
    pub const MINIMIZER: [f64; 2] = [1.0, 1.0];
}

impl Objective for Rosenbrock {
    type Error = Infallible;

    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
        let a = 1.0 - x[0];
        let b = x[1] - x[0] * x[0];
        Ok(100.0 * (b * b) + a * a)
    }
}

/// The Woods function, as given by More, Garbow and Hillstrom (TOMS 566).
///
/// A four-variable problem whose global minimum is `f(1, 1, 1, 1) = 0`. It also
/// has a non-optimal stationary point near `(-0.97, 0.95, -0.97, 0.95)` with
/// `f ≈ 7.876` that traps some methods.
///
/// # Panics
///
/// Evaluating a point with fewer than [`Woods::DIM`] coordinates panics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Woods;

impl Woods {
    /// Number of variables.
    pub const DIM: usize = 4;

    /// The conventional starting point.
    pub const START: [f64; 4] = [-3.0, -1.0, -3.0, -1.0];

    /// The global minimizer.
    pub const MINIMIZER: [f64; 4] = [1.0, 1.0, 1.0, 1.0];
}

impl Objective for Woods {
    type Error = Infallible;

    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
        let s1 = x[1] - x[0] * x[0];
        let s2 = 1.0 - x[0];
        let s3 = x[1] - 1.0;
        let t1 = x[3] - x[2] * x[2];
        let t2 = 1.0 - x[2];
        let t3 = x[3] - 1.0;
        let t4 = s3 + t3;
        let t5 = s3 - t3;

        Ok(100.0 * s1 * s1
            + s2 * s2
            + 90.0 * t1 * t1
            + t2 * t2
            + 10.0 * t4 * t4
            + t5 * t5 / 10.0)
    }
}
