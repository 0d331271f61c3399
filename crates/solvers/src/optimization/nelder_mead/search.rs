use dfmin_core::{Objective, Observer};

use crate::optimization::Evaluator;

use super::{
    Action, Config, Error, Event, Move, Solution, Status, Vertex, error::StartError,
    simplex::Simplex,
};

const RCOEFF: f64 = 1.0;
const ECOEFF: f64 = 2.0;
const CCOEFF: f64 = 0.5;

/// Scale of the restart simplex and of the local-minimum probes.
const EPS: f64 = 0.001;

/// Core Nelder-Mead search with restarts.
pub(super) fn search<F, Obs>(
    objective: &F,
    start: &[f64],
    step: &[f64],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Objective,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    StartError::check(start, step)?;

    let n = start.len();
    let kcount = config.kcount();
    let threshold = config.reqmin() * n as f64;

    let mut eval = Evaluator::new(objective);
    let mut origin = start.to_vec();
    let mut del = 1.0;
    let mut restarts = 0;

    'restart: loop {
        let mut simplex =
            Simplex::build(&mut eval, &origin, step, del).map_err(Error::objective)?;

        let event = Event::Built {
            restarts,
            evals: eval.evals(),
            simplex: simplex.vertices(),
            best: simplex.best(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(stopped(simplex.best(), eval.evals(), restarts));
        }

        let mut countdown = config.konvge();

        'iterate: loop {
            let kind = iterate(&mut simplex, &mut eval).map_err(Error::objective)?;
            tracing::trace!("{kind:?}, best f = {:.6e}", simplex.best_value());

            let event = Event::Moved {
                kind,
                evals: eval.evals(),
                best: simplex.best(),
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return Ok(stopped(simplex.best(), eval.evals(), restarts));
            }

            if kind == Move::Shrink {
                if eval.evals() > kcount {
                    break 'iterate;
                }
                simplex.locate_best();
                continue 'iterate;
            }

            countdown -= 1;
            if countdown > 0 {
                continue 'iterate;
            }
            if eval.evals() > kcount {
                break 'iterate;
            }

            countdown = config.konvge();
            let spread = simplex.spread();

            let event = Event::ConvergenceCheck {
                evals: eval.evals(),
                spread,
                threshold,
                best: simplex.best(),
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return Ok(stopped(simplex.best(), eval.evals(), restarts));
            }

            if spread <= threshold {
                break 'iterate;
            }
        }

        let best = simplex.best();
        if eval.evals() > kcount {
            tracing::debug!(
                "Nelder-Mead exceeded its budget of {kcount} evaluations ({} used)",
                eval.evals()
            );
            return Ok(finish(
                Status::BudgetExceeded,
                best.x.clone(),
                best.objective,
                eval.evals(),
                restarts,
            ));
        }

        let mut xmin = best.x.clone();
        let ynewlo = best.objective;

        match probe_local_min(&mut eval, &mut xmin, ynewlo, step).map_err(Error::objective)? {
            None => {
                return Ok(finish(
                    Status::Converged,
                    xmin,
                    ynewlo,
                    eval.evals(),
                    restarts,
                ));
            }
            Some(lower) => {
                restarts += 1;
                tracing::debug!(
                    "Local-minimum test found f = {lower:.6e} below {ynewlo:.6e}, restart {restarts}"
                );

                let event = Event::Restart {
                    restarts,
                    evals: eval.evals(),
                    from: &xmin,
                    objective: lower,
                };
                if let Some(Action::StopEarly) = observer.observe(&event) {
                    return Ok(finish(
                        Status::StoppedByObserver,
                        xmin,
                        lower,
                        eval.evals(),
                        restarts,
                    ));
                }

                origin = xmin;
                del = EPS;
                continue 'restart;
            }
        }
    }
}

/// Runs one main-loop iteration and returns the move it made.
///
/// A shrink leaves the tracked lowest vertex stale.
fn iterate<F: Objective>(
    simplex: &mut Simplex,
    eval: &mut Evaluator<'_, F>,
) -> Result<Move, F::Error> {
    let worst = simplex.worst();
    let centroid = simplex.centroid(worst);
    let high = simplex.vertex(worst).x.clone();

    let star: Vec<f64> = centroid
        .iter()
        .zip(&high)
        .map(|(c, h)| c + RCOEFF * (c - h))
        .collect();
    let y_star = eval.evaluate(&star)?;

    let kind = if y_star < simplex.best_value() {
        let expanded = toward(&centroid, &star, ECOEFF);
        let y_expanded = eval.evaluate(&expanded)?;

        if y_star < y_expanded {
            simplex.replace(worst, star, y_star);
            Move::Expansion { accepted: false }
        } else {
            simplex.replace(worst, expanded, y_expanded);
            Move::Expansion { accepted: true }
        }
    } else {
        match simplex.count_above(y_star) {
            0 => {
                let contracted = toward(&centroid, &high, CCOEFF);
                let y_contracted = eval.evaluate(&contracted)?;

                if simplex.vertex(worst).objective < y_contracted {
                    simplex.shrink(eval)?;
                    return Ok(Move::Shrink);
                }
                simplex.replace(worst, contracted, y_contracted);
                Move::InsideContraction
            }
            1 => {
                let contracted = toward(&centroid, &star, CCOEFF);
                let y_contracted = eval.evaluate(&contracted)?;

                if y_contracted <= y_star {
                    simplex.replace(worst, contracted, y_contracted);
                    Move::OutsideContraction { accepted: true }
                } else {
                    simplex.replace(worst, star, y_star);
                    Move::OutsideContraction { accepted: false }
                }
            }
            _ => {
                simplex.replace(worst, star, y_star);
                Move::Reflection
            }
        }
    };

    Ok(kind)
}

/// `origin + coeff * (target - origin)`, coordinate-wise.
fn toward(origin: &[f64], target: &[f64], coeff: f64) -> Vec<f64> {
    origin
        .iter()
        .zip(target)
        .map(|(o, t)| o + coeff * (t - o))
        .collect()
}

/// Probes `xmin` by `±step[i] * EPS` along each axis.
///
/// Returns the first probe value below `ynewlo`, leaving `xmin` at that
/// probe. If none is lower, every coordinate is moved back and `None` is
/// returned.
fn probe_local_min<F: Objective>(
    eval: &mut Evaluator<'_, F>,
    xmin: &mut [f64],
    ynewlo: f64,
    step: &[f64],
) -> Result<Option<f64>, F::Error> {
    for (i, s) in step.iter().enumerate() {
        let del = s * EPS;

        xmin[i] += del;
        let z = eval.evaluate(xmin)?;
        if z < ynewlo {
            return Ok(Some(z));
        }

        xmin[i] -= del * 2.0;
        let z = eval.evaluate(xmin)?;
        if z < ynewlo {
            return Ok(Some(z));
        }

        xmin[i] += del;
    }

    Ok(None)
}

fn stopped(best: &Vertex, evals: usize, restarts: usize) -> Solution {
    finish(
        Status::StoppedByObserver,
        best.x.clone(),
        best.objective,
        evals,
        restarts,
    )
}

fn finish(status: Status, x: Vec<f64>, objective: f64, evals: usize, restarts: usize) -> Solution {
    tracing::debug!(
        "Nelder-Mead finished ({status:?}) after {evals} evaluations and {restarts} restarts, f = {objective:.6e}"
    );

    Solution {
        status,
        x,
        objective,
        evals,
        restarts,
    }
}
