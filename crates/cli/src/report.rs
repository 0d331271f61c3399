//! Text output in the layout of the classic drivers.

/// Formats `value` as `±d.ddddddE±XX` with `precision` fraction digits.
pub fn exp(value: f64, precision: usize) -> String {
    let formatted = format!("{value:.precision$E}");
    match formatted.split_once('E') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}E{sign}{digits:0>2}")
        }
        // NaN and infinities have no exponent.
        None => formatted,
    }
}

pub fn starting_point(start: &[f64], value: f64) {
    println!("\n  Starting point X:\n");
    for x in start {
        println!("  {:>14}", exp(*x, 6));
    }
    println!("\n  F(X) = {:>14}", exp(value, 6));
}

pub fn estimate(x: &[f64], value: f64) {
    println!("\n  Estimate of minimizing value X*:\n");
    for xi in x {
        println!("  {:>14}", exp(*xi, 6));
    }
    println!("\n  F(X*) = {:>14}", exp(value, 6));
}

pub fn iterate(evals: usize, value: f64, x: &[f64]) {
    println!("\nAfter {evals:5} funevals, f(x) =  {} at", exp(value, 4));
    for (i, xi) in x.iter().enumerate() {
        println!("   x[{i:2}] = {}", exp(*xi, 4));
    }
}
