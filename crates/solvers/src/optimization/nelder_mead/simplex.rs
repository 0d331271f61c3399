use dfmin_core::Objective;

use crate::optimization::Evaluator;

/// A simplex vertex and its objective value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub x: Vec<f64>,
    pub objective: f64,
}

/// The `n + 1` vertices of the working simplex.
///
/// The lowest vertex and its value are tracked separately from the vertex
/// list. They are refreshed after construction and after a shrink, and
/// updated whenever a replaced vertex beats the tracked value.
#[derive(Debug)]
pub(super) struct Simplex {
    vertices: Vec<Vertex>,
    best: usize,
    best_value: f64,
}

impl Simplex {
    /// Builds a simplex around `start`.
    ///
    /// Vertex `j < n` is `start` with coordinate `j` moved by `step[j] * del`
    /// and vertex `n` is `start` itself. The start is evaluated first.
    pub(super) fn build<F: Objective>(
        eval: &mut Evaluator<'_, F>,
        start: &[f64],
        step: &[f64],
        del: f64,
    ) -> Result<Self, F::Error> {
        let n = start.len();

        let origin = Vertex {
            x: start.to_vec(),
            objective: eval.evaluate(start)?,
        };

        let mut vertices = Vec::with_capacity(n + 1);
        let mut x = start.to_vec();
        for (j, (s, h)) in start.iter().zip(step).enumerate() {
            x[j] = s + h * del;
            let objective = eval.evaluate(&x)?;
            vertices.push(Vertex {
                x: x.clone(),
                objective,
            });
            x[j] = *s;
        }
        vertices.push(origin);

        let mut simplex = Self {
            vertices,
            best: 0,
            best_value: 0.0,
        };
        simplex.locate_best();
        Ok(simplex)
    }

    pub(super) fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub(super) fn vertex(&self, index: usize) -> &Vertex {
        &self.vertices[index]
    }

    /// The vertex currently tracked as lowest.
    pub(super) fn best(&self) -> &Vertex {
        &self.vertices[self.best]
    }

    pub(super) fn best_value(&self) -> f64 {
        self.best_value
    }

    /// Tracks the first vertex with the lowest value.
    pub(super) fn locate_best(&mut self) {
        let mut best = 0;
        for (i, vertex) in self.vertices.iter().enumerate().skip(1) {
            if vertex.objective < self.vertices[best].objective {
                best = i;
            }
        }
        self.best = best;
        self.best_value = self.vertices[best].objective;
    }

    /// Index of the first vertex with the highest value.
    pub(super) fn worst(&self) -> usize {
        let mut worst = 0;
        for (i, vertex) in self.vertices.iter().enumerate().skip(1) {
            if self.vertices[worst].objective < vertex.objective {
                worst = i;
            }
        }
        worst
    }

    /// Centroid of every vertex except `exclude`.
    pub(super) fn centroid(&self, exclude: usize) -> Vec<f64> {
        let n = self.vertices.len() - 1;
        let excluded = &self.vertices[exclude].x;

        (0..n)
            .map(|i| {
                let sum = self.vertices.iter().fold(0.0, |sum, v| sum + v.x[i]);
                (sum - excluded[i]) / n as f64
            })
            .collect()
    }

    /// Number of vertices whose value is strictly above `value`.
    pub(super) fn count_above(&self, value: f64) -> usize {
        self.vertices.iter().filter(|v| value < v.objective).count()
    }

    /// Replaces a vertex and tracks it as lowest if it beats the tracked value.
    pub(super) fn replace(&mut self, index: usize, x: Vec<f64>, objective: f64) {
        self.vertices[index] = Vertex { x, objective };
        if objective < self.best_value {
            self.best = index;
            self.best_value = objective;
        }
    }

    /// Moves every vertex halfway toward the lowest one and re-evaluates it.
    ///
    /// The lowest vertex is left where it is but still re-evaluated. The
    /// tracked lowest vertex is not refreshed; call [`Self::locate_best`].
    pub(super) fn shrink<F: Objective>(
        &mut self,
        eval: &mut Evaluator<'_, F>,
    ) -> Result<(), F::Error> {
        let anchor = self.vertices[self.best].x.clone();

        for vertex in &mut self.vertices {
            for (x, a) in vertex.x.iter_mut().zip(&anchor) {
                *x = (*x + a) * 0.5;
            }
            vertex.objective = eval.evaluate(&vertex.x)?;
        }

        Ok(())
    }

    /// Sum of squared deviations of the vertex values from their mean.
    pub(super) fn spread(&self) -> f64 {
        let count = self.vertices.len() as f64;
        let mean = self.vertices.iter().map(|v| v.objective).sum::<f64>() / count;

        self.vertices
            .iter()
            .map(|v| (v.objective - mean).powi(2))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn sphere(x: &[f64]) -> f64 {
        x.iter().map(|v| v * v).sum()
    }

    #[test]
    fn build_places_start_last() {
        let objective = sphere;
        let mut eval = Evaluator::new(&objective);

        let simplex = Simplex::build(&mut eval, &[1.0, 2.0], &[0.5, -1.0], 1.0).unwrap();

        let points: Vec<_> = simplex.vertices().iter().map(|v| v.x.clone()).collect();
        assert_eq!(points, vec![vec![1.5, 2.0], vec![1.0, 1.0], vec![1.0, 2.0]]);
        assert_eq!(eval.evals(), 3);

        // Values 6.25, 2, 5: the second vertex is lowest and the first highest.
        assert_eq!(simplex.best().x, vec![1.0, 1.0]);
        assert_relative_eq!(simplex.best_value(), 2.0);
        assert_eq!(simplex.worst(), 0);
    }

    #[test]
    fn ties_resolve_to_first_index() {
        let objective = |_: &[f64]| 1.0;
        let mut eval = Evaluator::new(&objective);

        let simplex = Simplex::build(&mut eval, &[0.0, 0.0], &[1.0, 1.0], 1.0).unwrap();

        assert_eq!(simplex.best().x, vec![1.0, 0.0]);
        assert_eq!(simplex.worst(), 0);
        assert_relative_eq!(simplex.spread(), 0.0);
    }

    #[test]
    fn centroid_skips_excluded_vertex() {
        let objective = sphere;
        let mut eval = Evaluator::new(&objective);

        let simplex = Simplex::build(&mut eval, &[0.0, 0.0], &[2.0, 4.0], 1.0).unwrap();

        // Vertices (2, 0), (0, 4), (0, 0); exclude (0, 4).
        let centroid = simplex.centroid(1);
        assert_relative_eq!(centroid.as_slice(), [1.0, 0.0].as_slice());
    }

    #[test]
    fn shrink_halves_toward_best() {
        let objective = sphere;
        let mut eval = Evaluator::new(&objective);

        let mut simplex = Simplex::build(&mut eval, &[0.0, 0.0], &[2.0, 4.0], 1.0).unwrap();
        simplex.shrink(&mut eval).unwrap();
        simplex.locate_best();

        let points: Vec<_> = simplex.vertices().iter().map(|v| v.x.clone()).collect();
        assert_eq!(points, vec![vec![1.0, 0.0], vec![0.0, 2.0], vec![0.0, 0.0]]);
        assert_eq!(eval.evals(), 6);
        assert_relative_eq!(simplex.best_value(), 0.0);
    }

    #[test]
    fn replace_tracks_improvement() {
        let objective = sphere;
        let mut eval = Evaluator::new(&objective);

        let mut simplex = Simplex::build(&mut eval, &[1.0], &[1.0], 1.0).unwrap();
        simplex.replace(0, vec![0.1], 0.01);

        assert_eq!(simplex.best().x, vec![0.1]);
        assert_relative_eq!(simplex.best_value(), 0.01);
        assert_eq!(simplex.count_above(0.5), 1);
    }
}
