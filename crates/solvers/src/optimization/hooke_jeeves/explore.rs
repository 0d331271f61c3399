use dfmin_core::Objective;

use crate::optimization::Evaluator;

/// Initial per-coordinate steps: `|start[i] * rho|`, or `rho` where that is zero.
pub(super) fn initial_steps(start: &[f64], rho: f64) -> Vec<f64> {
    start
        .iter()
        .map(|x| {
            let step = (x * rho).abs();
            if step == 0.0 { rho } else { step }
        })
        .collect()
}

/// Exploratory move around `point`, one coordinate at a time.
///
/// Each coordinate is first probed at `point[i] + delta[i]`. If that does not
/// strictly improve on the best value so far, `delta[i]` is negated and the
/// opposite side is probed. A coordinate that improves on neither side is
/// restored, but its step keeps the flipped sign.
///
/// On return `point` holds the best point found and the result is its value,
/// which is `prev_best` when no probe improved.
pub(super) fn best_nearby<F: Objective>(
    eval: &mut Evaluator<'_, F>,
    delta: &mut [f64],
    point: &mut [f64],
    prev_best: f64,
) -> Result<f64, F::Error> {
    let mut best = prev_best;

    for (i, d) in delta.iter_mut().enumerate() {
        let origin = point[i];

        point[i] = origin + *d;
        let value = eval.evaluate(point)?;
        if value < best {
            best = value;
            continue;
        }

        *d = -*d;
        point[i] = origin + *d;
        let value = eval.evaluate(point)?;
        if value < best {
            best = value;
        } else {
            point[i] = origin;
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn zero_coordinates_fall_back_to_rho() {
        let steps = initial_steps(&[-1.2, 0.0, 4.0], 0.5);
        assert_relative_eq!(steps.as_slice(), [0.6, 0.5, 2.0].as_slice());
    }

    #[test]
    fn moves_downhill_on_each_coordinate() {
        // Minimum at (1, -1): x0 improves on the first probe, x1 only after a flip.
        let objective = |x: &[f64]| (x[0] - 1.0).powi(2) + (x[1] + 1.0).powi(2);
        let mut eval = Evaluator::new(&objective);

        let mut point = vec![0.0, 0.0];
        let mut delta = vec![0.5, 0.5];
        let best = best_nearby(&mut eval, &mut delta, &mut point, 2.0).unwrap();

        assert_relative_eq!(point.as_slice(), [0.5, -0.5].as_slice());
        assert_relative_eq!(best, 0.5);
        assert_relative_eq!(delta.as_slice(), [0.5, -0.5].as_slice());
        assert_eq!(eval.evals(), 3);
    }

    #[test]
    fn failed_probes_restore_point_and_keep_flipped_sign() {
        let objective = |x: &[f64]| x[0] * x[0];
        let mut eval = Evaluator::new(&objective);

        let mut point = vec![0.0];
        let mut delta = vec![0.25];
        let best = best_nearby(&mut eval, &mut delta, &mut point, 0.0).unwrap();

        assert_relative_eq!(point[0], 0.0);
        assert_relative_eq!(best, 0.0);
        assert_relative_eq!(delta[0], -0.25);
        assert_eq!(eval.evals(), 2);
    }

    #[test]
    fn improvement_must_be_strict() {
        let objective = |_: &[f64]| 1.0;
        let mut eval = Evaluator::new(&objective);

        let mut point = vec![3.0, 4.0];
        let mut delta = vec![1.0, 1.0];
        best_nearby(&mut eval, &mut delta, &mut point, 1.0).unwrap();

        assert_relative_eq!(point.as_slice(), [3.0, 4.0].as_slice());
        assert_relative_eq!(delta.as_slice(), [-1.0, -1.0].as_slice());
    }
}
