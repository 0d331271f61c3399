use super::Vertex;

/// The simplex move made by one main-loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Move {
    /// The reflected point replaced the highest vertex.
    Reflection,

    /// The reflection beat the lowest vertex and an expansion was tried.
    /// `accepted` is true when the expanded point replaced the highest vertex.
    Expansion { accepted: bool },

    /// The reflection beat exactly one vertex and a contraction toward it was
    /// tried. `accepted` is true when the contracted point was kept.
    OutsideContraction { accepted: bool },

    /// The reflection beat no vertex and the contraction toward the highest
    /// vertex was kept.
    InsideContraction,

    /// The inside contraction failed and the whole simplex shrank toward the
    /// lowest vertex.
    Shrink,
}

impl Move {
    /// Objective evaluations the move costs on a simplex of `n + 1` vertices.
    #[must_use]
    pub fn evals(self, n: usize) -> usize {
        match self {
            Self::Reflection => 1,
            Self::Expansion { .. } | Self::OutsideContraction { .. } | Self::InsideContraction => 2,
            Self::Shrink => n + 3,
        }
    }
}

/// Events emitted by the Nelder-Mead solver.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// A simplex was built, at the start of the run or after a restart.
    Built {
        /// Restarts so far.
        restarts: usize,

        /// Evaluations so far, including the `n + 1` for this simplex.
        evals: usize,

        /// The new simplex.
        simplex: &'a [Vertex],

        /// Its lowest vertex.
        best: &'a Vertex,
    },

    /// A main-loop iteration finished.
    Moved {
        kind: Move,
        evals: usize,
        best: &'a Vertex,
    },

    /// The periodic convergence check ran.
    ///
    /// The check passes when `spread <= threshold`.
    ConvergenceCheck {
        evals: usize,
        spread: f64,
        threshold: f64,
        best: &'a Vertex,
    },

    /// The local-minimum test found a lower point and the search restarts
    /// from it.
    Restart {
        /// Restarts so far, including this one.
        restarts: usize,

        evals: usize,

        /// The improving probe the new simplex is built around.
        from: &'a [f64],

        /// Objective value at `from`.
        objective: f64,
    },
}

impl Event<'_> {
    /// Returns the evaluations performed when the event was emitted.
    #[must_use]
    pub fn evals(&self) -> usize {
        match self {
            Self::Built { evals, .. }
            | Self::Moved { evals, .. }
            | Self::ConvergenceCheck { evals, .. }
            | Self::Restart { evals, .. } => *evals,
        }
    }

    /// Returns the lowest objective value known when the event was emitted.
    #[must_use]
    pub fn best_objective(&self) -> f64 {
        match self {
            Self::Built { best, .. }
            | Self::Moved { best, .. }
            | Self::ConvergenceCheck { best, .. } => best.objective,
            Self::Restart { objective, .. } => *objective,
        }
    }
}
