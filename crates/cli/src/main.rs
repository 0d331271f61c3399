//! `dfmin`: runs a minimizer on a canned test problem and reports the result.

mod args;
mod report;

use std::error::Error;

use dfmin_core::{
    Objective, Observer,
    functions::{Rosenbrock, Woods},
};
use dfmin_observers::StopAtObjective;
use dfmin_solvers::optimization::{hooke_jeeves, nelder_mead};
use tracing_subscriber::EnvFilter;

use args::{Args, Method, Problem, USAGE};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    tracing::debug!("Running {:?} on {:?}", args.method, args.problem);

    match args.problem {
        Problem::Rosenbrock => run(&Rosenbrock, "ROSENBROCK", &Rosenbrock::START, &args)?,
        Problem::Woods => {
            run(&Woods, "WOODS", &Woods::START, &args)?;
            if !args.json {
                println!("\nTrue answer: f(1, 1, 1, 1) = 0.");
            }
        }
    }

    Ok(())
}

fn run<F: Objective>(
    objective: &F,
    name: &str,
    start: &[f64],
    args: &Args,
) -> Result<(), Box<dyn Error>> {
    match args.method {
        Method::HookeJeeves => run_hooke_jeeves(objective, name, start, args),
        Method::NelderMead => run_nelder_mead(objective, name, start, args),
    }
}

fn run_hooke_jeeves<F: Objective>(
    objective: &F,
    name: &str,
    start: &[f64],
    args: &Args,
) -> Result<(), Box<dyn Error>> {
    let defaults = hooke_jeeves::Config::default();
    let config = hooke_jeeves::Config::new(
        args.rho.unwrap_or(defaults.rho()),
        args.epsilon.unwrap_or(defaults.epsilon()),
        args.max_iters.unwrap_or(defaults.max_iters()),
    )?;

    if !args.json {
        println!("\nApply HOOKE to {name} function.");
        report::starting_point(start, objective.evaluate(start)?);
    }

    let trace = args.trace && !args.json;
    let mut stop = args.target.map(StopAtObjective::new);
    let observer = |event: &hooke_jeeves::Event<'_>| -> Option<hooke_jeeves::Action> {
        if trace {
            report::iterate(event.evals, event.objective, event.x);
        }
        stop.as_mut().and_then(|stop| stop.observe(event))
    };

    let solution = hooke_jeeves::minimize(objective, start, &config, observer)?;

    if args.json {
        let record = serde_json::json!({
            "method": "hooke-jeeves",
            "problem": name.to_lowercase(),
            "config": config,
            "solution": solution,
        });
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!(
        "\n\n\nHOOKE USED {} ITERATIONS AND {} FUNCTION EVALUATIONS ({:?})",
        solution.iters, solution.evals, solution.status
    );
    report::estimate(&solution.x, solution.objective);

    Ok(())
}

fn run_nelder_mead<F: Objective>(
    objective: &F,
    name: &str,
    start: &[f64],
    args: &Args,
) -> Result<(), Box<dyn Error>> {
    let defaults = nelder_mead::Config::default();
    let config = nelder_mead::Config::new(
        args.reqmin.unwrap_or(defaults.reqmin()),
        args.konvge.unwrap_or(defaults.konvge()),
        args.kcount.unwrap_or(defaults.kcount()),
    )?;
    let step = vec![args.step.unwrap_or(1.0); start.len()];

    if !args.json {
        println!("\nApply NELMIN to {name} function.");
        report::starting_point(start, objective.evaluate(start)?);
    }

    let trace = args.trace && !args.json;
    let mut stop = args.target.map(StopAtObjective::new);
    let observer = |event: &nelder_mead::Event<'_>| -> Option<nelder_mead::Action> {
        if trace {
            print_event(event);
        }
        stop.as_mut().and_then(|stop| stop.observe(event))
    };

    let solution = nelder_mead::minimize(objective, start, &step, &config, observer)?;

    if args.json {
        let record = serde_json::json!({
            "method": "nelder-mead",
            "problem": name.to_lowercase(),
            "config": config,
            "step": step,
            "solution": solution,
            "ifault": solution.fault_code(),
        });
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    match solution.fault_code() {
        Some(code) => println!("\n  Return code IFAULT = {code:8}"),
        None => println!("\n  Stopped by observer"),
    }
    report::estimate(&solution.x, solution.objective);
    println!("\n  Number of iterations = {:8}", solution.evals);
    println!("  Number of restarts   = {:8}", solution.restarts);

    Ok(())
}

fn print_event(event: &nelder_mead::Event<'_>) {
    match event {
        nelder_mead::Event::Built { restarts, evals, best, .. } => {
            println!(
                "  [{evals:5}] simplex built (restart {restarts}), best f = {}",
                report::exp(best.objective, 6)
            );
        }
        nelder_mead::Event::Moved { kind, evals, best } => {
            println!("  [{evals:5}] {kind:?}, best f = {}", report::exp(best.objective, 6));
        }
        nelder_mead::Event::ConvergenceCheck {
            evals,
            spread,
            threshold,
            ..
        } => {
            println!(
                "  [{evals:5}] convergence check: spread {} vs {}",
                report::exp(*spread, 3),
                report::exp(*threshold, 3)
            );
        }
        nelder_mead::Event::Restart {
            restarts,
            evals,
            objective,
            ..
        } => {
            println!(
                "  [{evals:5}] not a local minimum, restart {restarts} from f = {}",
                report::exp(*objective, 6)
            );
        }
    }
}
