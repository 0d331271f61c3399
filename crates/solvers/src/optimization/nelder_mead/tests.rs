use std::cell::Cell;

use approx::assert_relative_eq;

use dfmin_core::{
    Objective,
    functions::{Rosenbrock, Woods},
};

use super::{
    Action, Config, ConfigError, Error, Event, MAX_VARS, Move, StartError, Status, minimize,
    minimize_unobserved,
};

fn distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

#[test]
fn minimizes_rosenbrock() {
    let solution = minimize_unobserved(
        &Rosenbrock,
        &Rosenbrock::START,
        &[1.0, 1.0],
        &Config::default(),
    )
    .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.fault_code(), Some(0));
    assert_eq!(solution.restarts, 0);
    assert!(distance(&solution.x, &Rosenbrock::MINIMIZER) < 5e-3);
    assert!(solution.objective < 1e-5);
    assert!(solution.evals <= Config::default().kcount());
}

#[test]
fn woods_settles_on_stationary_point_after_restart() {
    let solution = minimize_unobserved(
        &Woods,
        &Woods::START,
        &[1.0, 1.0, 1.0, 1.0],
        &Config::default(),
    )
    .unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.restarts, 1);
    assert_relative_eq!(solution.objective, 7.8765, epsilon = 1e-2);
}

#[test]
fn finds_one_dimensional_minimum() {
    let objective = |x: &[f64]| (x[0] - 3.0).powi(2);
    let config = Config::new(1e-8, 5, 500).unwrap();

    let solution = minimize_unobserved(&objective, &[0.0], &[1.0], &config).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x[0], 3.0, epsilon = 1e-3);
}

#[test]
fn small_budget_is_exceeded() {
    let config = Config::new(1e-8, 10, 20).unwrap();

    let solution =
        minimize_unobserved(&Rosenbrock, &Rosenbrock::START, &[1.0, 1.0], &config).unwrap();

    assert_eq!(solution.status, Status::BudgetExceeded);
    assert_eq!(solution.fault_code(), Some(2));
    assert!(solution.evals > 20);
    assert_relative_eq!(
        solution.objective,
        Rosenbrock.evaluate(&solution.x).unwrap()
    );
}

#[test]
fn moves_cost_the_documented_evaluations() {
    let n = Rosenbrock::DIM;
    let mut built = None;
    let mut last = 0;
    let mut kinds = Vec::new();

    let observer = |event: &Event<'_>| {
        match event {
            Event::Built { evals, simplex, .. } => {
                built = Some((*evals, simplex.len()));
                last = *evals;
            }
            Event::Moved { kind, evals, .. } => {
                assert_eq!(evals - last, kind.evals(n), "{kind:?}");
                kinds.push(*kind);
                last = *evals;
            }
            Event::ConvergenceCheck { evals, .. } => assert_eq!(*evals, last),
            Event::Restart { .. } => {}
        }
        None
    };

    minimize(
        &Rosenbrock,
        &Rosenbrock::START,
        &[1.0, 1.0],
        &Config::default(),
        observer,
    )
    .unwrap();

    assert_eq!(built, Some((n + 1, n + 1)));
    assert!(kinds.contains(&Move::Reflection));
    assert!(kinds.iter().any(|k| matches!(k, Move::Expansion { .. })));
}

/// A rippled bowl whose inside contractions regularly fail.
fn rippled(x: &[f64]) -> f64 {
    x[0] * x[0] + x[1] * x[1] + 3.0 * (7.0 * x[0]).sin() * (5.0 * x[1]).cos()
}

const RIPPLED_START: [f64; 2] = [2.5, -1.5];

#[test]
fn shrink_costs_n_plus_three_evaluations() {
    let n = RIPPLED_START.len();
    let mut last = 0;
    let mut shrinks = 0;

    let observer = |event: &Event<'_>| {
        match event {
            Event::Built { evals, .. } => last = *evals,
            Event::Moved { kind, evals, .. } => {
                if *kind == Move::Shrink {
                    assert_eq!(evals - last, n + 3);
                    shrinks += 1;
                }
                last = *evals;
            }
            _ => {}
        }
        None
    };

    let config = Config::new(1e-8, 3, 500).unwrap();
    let solution = minimize(&rippled, &RIPPLED_START, &[1.0, 1.0], &config, observer).unwrap();

    assert_eq!(shrinks, 3);
    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.restarts, 1);
    assert_eq!(solution.evals, 74);
}

#[test]
fn budget_is_checked_right_after_shrink() {
    let mut last_kind = None;
    let observer = |event: &Event<'_>| {
        if let Event::Moved { kind, .. } = event {
            last_kind = Some(*kind);
        }
        None
    };

    let config = Config::new(1e-8, 3, 25).unwrap();
    let solution = minimize(&rippled, &RIPPLED_START, &[1.0, 1.0], &config, observer).unwrap();

    // The third shrink lands at 26 evaluations, between convergence checks.
    // The run ends there, reporting the vertex that was lowest before it.
    assert_eq!(last_kind, Some(Move::Shrink));
    assert_eq!(solution.status, Status::BudgetExceeded);
    assert_eq!(solution.evals, 26);
    assert_relative_eq!(solution.x.as_slice(), [0.5, 0.0].as_slice());
    assert_relative_eq!(solution.objective, rippled(&solution.x));
}

#[test]
fn budget_spans_restarts() {
    let config = Config::new(1e-8, 3, 60).unwrap();

    let solution = minimize_unobserved(&rippled, &RIPPLED_START, &[1.0, 1.0], &config).unwrap();

    assert_eq!(solution.status, Status::BudgetExceeded);
    assert_eq!(solution.restarts, 1);
    assert_eq!(solution.evals, 70);
}

#[test]
fn restart_event_reports_lower_point() {
    let mut restarts = Vec::new();
    let mut best_before = f64::INFINITY;

    let observer = |event: &Event<'_>| {
        match event {
            Event::ConvergenceCheck { best, .. } => best_before = best.objective,
            Event::Restart {
                restarts: count,
                objective,
                from,
                ..
            } => {
                assert!(*objective < best_before);
                assert_relative_eq!(*objective, Woods.evaluate(from).unwrap());
                restarts.push(*count);
            }
            _ => {}
        }
        None
    };

    let solution = minimize(
        &Woods,
        &Woods::START,
        &[1.0; 4],
        &Config::default(),
        observer,
    )
    .unwrap();

    assert_eq!(restarts, vec![1]);
    assert_eq!(solution.restarts, 1);
}

#[test]
fn observer_can_stop_early() {
    let mut moves = 0;
    let mut best_at_stop = None;
    let observer = |event: &Event<'_>| {
        if let Event::Moved { best, .. } = event {
            moves += 1;
            if moves == 5 {
                best_at_stop = Some((*best).clone());
                return Some(Action::StopEarly);
            }
        }
        None
    };

    let solution = minimize(
        &Rosenbrock,
        &Rosenbrock::START,
        &[1.0, 1.0],
        &Config::default(),
        observer,
    )
    .unwrap();

    let best = best_at_stop.expect("stopped after five moves");
    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.fault_code(), None);
    assert_eq!(solution.x, best.x);
    assert_relative_eq!(solution.objective, best.objective);
}

#[test]
fn passive_observer_does_not_change_result() {
    let step = [1.0; 4];
    let unobserved = minimize_unobserved(&Woods, &Woods::START, &step, &Config::default()).unwrap();
    let observed = minimize(
        &Woods,
        &Woods::START,
        &step,
        &Config::default(),
        |_: &Event<'_>| None,
    )
    .unwrap();

    assert_eq!(unobserved, observed);
}

#[test]
fn counts_every_objective_call() {
    let calls = Cell::new(0);
    let objective = |x: &[f64]| {
        calls.set(calls.get() + 1);
        Woods.evaluate(x).unwrap()
    };

    let solution =
        minimize_unobserved(&objective, &Woods::START, &[1.0; 4], &Config::default()).unwrap();

    assert_eq!(solution.evals, calls.get());
}

#[test]
fn rejects_invalid_input_without_evaluating() {
    let calls = Cell::new(0);
    let objective = |_: &[f64]| {
        calls.set(calls.get() + 1);
        0.0
    };
    let config = Config::default();

    let too_many = vec![0.0; MAX_VARS + 1];
    let cases: [(&[f64], &[f64], StartError); 5] = [
        (&[][..], &[][..], StartError::Empty),
        (too_many.as_slice(), too_many.as_slice(), StartError::TooManyVars(MAX_VARS + 1)),
        (&[f64::INFINITY][..], &[1.0][..], StartError::NonFinite(0)),
        (
            &[0.0, 0.0][..],
            &[1.0][..],
            StartError::StepLength {
                expected: 2,
                found: 1,
            },
        ),
        (&[0.0, 0.0][..], &[1.0, f64::NAN][..], StartError::NonFiniteStep(1)),
    ];

    for (start, step, expected) in cases {
        let error = minimize_unobserved(&objective, start, step, &config).unwrap_err();
        assert!(matches!(error, Error::InvalidStart(e) if e == expected));
        assert_eq!(error.fault_code(), Some(1));
    }
    assert_eq!(calls.get(), 0);
}

#[test]
fn config_errors_carry_fault_code_one() {
    let error = Error::from(Config::new(-1.0, 10, 500).unwrap_err());

    assert!(matches!(error, Error::InvalidConfig(ConfigError::Reqmin)));
    assert_eq!(error.fault_code(), Some(1));
}
