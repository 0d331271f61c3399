use dfmin_core::{Objective, Observer};

use crate::optimization::Evaluator;

use super::{
    Action, Config, Error, Event, Solution, Status,
    error::StartError,
    explore::{best_nearby, initial_steps},
};

/// Core Hooke-Jeeves pattern search.
pub(super) fn search<F, Obs>(
    objective: &F,
    start: &[f64],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Objective,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    StartError::check(start)?;

    let rho = config.rho();
    let epsilon = config.epsilon();

    let mut eval = Evaluator::new(objective);
    let mut delta = initial_steps(start, rho);
    let mut step_length = rho;

    let mut base = start.to_vec();
    let mut base_value = eval.evaluate(&base).map_err(Error::objective)?;
    let mut iters = 0;

    while iters < config.max_iters() && step_length > epsilon {
        iters += 1;

        let event = Event {
            iter: iters,
            evals: eval.evals(),
            x: &base,
            objective: base_value,
            step_length,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(
                Status::StoppedByObserver,
                base,
                base_value,
                iters,
                eval.evals(),
            ));
        }

        let mut x = base.clone();
        let mut value = best_nearby(&mut eval, &mut delta, &mut x, base_value)
            .map_err(Error::objective)?;

        // Pattern moves: keep stepping along base -> x while it pays off.
        let mut keep = true;
        while value < base_value && keep {
            for ((d, b), xi) in delta.iter_mut().zip(base.iter_mut()).zip(x.iter_mut()) {
                *d = if *xi <= *b { -d.abs() } else { d.abs() };
                let previous = *b;
                *b = *xi;
                *xi = *xi + *xi - previous;
            }
            base_value = value;

            value = best_nearby(&mut eval, &mut delta, &mut x, base_value)
                .map_err(Error::objective)?;
            if value >= base_value {
                break;
            }

            // Guard against improvements that come from roundoff alone.
            keep = x
                .iter()
                .zip(&base)
                .zip(&delta)
                .any(|((xi, b), d)| (xi - b).abs() > 0.5 * d.abs());
        }

        if step_length >= epsilon && value >= base_value {
            step_length *= rho;
            delta.iter_mut().for_each(|d| *d *= rho);
            tracing::trace!("Shrinking step length to {step_length:.3e}");
        }
    }

    let status = if step_length > epsilon {
        Status::MaxIters
    } else {
        Status::Converged
    };

    Ok(finish(status, base, base_value, iters, eval.evals()))
}

fn finish(status: Status, x: Vec<f64>, objective: f64, iters: usize, evals: usize) -> Solution {
    tracing::debug!(
        "Hooke-Jeeves finished ({status:?}) after {iters} iterations and {evals} evaluations, f = {objective:.6e}"
    );

    Solution {
        status,
        x,
        objective,
        iters,
        evals,
    }
}
