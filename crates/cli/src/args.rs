use thiserror::Error;

pub const USAGE: &str = "\
Usage: dfmin <hooke-jeeves|nelder-mead> <rosenbrock|woods> [options]

Hooke-Jeeves options:
  --rho <R>          step shrink factor, 0 < R < 1
  --epsilon <E>      minimum step length
  --max-iters <N>    iteration limit

Nelder-Mead options:
  --reqmin <R>       variance threshold for convergence
  --konvge <K>       moves between convergence checks
  --kcount <K>       evaluation budget
  --step <S>         initial simplex edge along every coordinate

Common options:
  --target <F>       stop once the best objective is at or below F

Output:
  --trace            print one line per solver event
  --json             print the result as JSON";

/// Which minimizer to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    HookeJeeves,
    NelderMead,
}

/// Which canned objective to minimize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    Rosenbrock,
    Woods,
}

/// Parsed command line.
///
/// Unset solver parameters fall back to the solver's default config.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub method: Method,
    pub problem: Problem,
    pub rho: Option<f64>,
    pub epsilon: Option<f64>,
    pub max_iters: Option<usize>,
    pub reqmin: Option<f64>,
    pub konvge: Option<usize>,
    pub kcount: Option<usize>,
    pub step: Option<f64>,
    pub target: Option<f64>,
    pub trace: bool,
    pub json: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("missing method")]
    MissingMethod,

    #[error("unknown method: {0}")]
    UnknownMethod(String),

    #[error("missing problem")]
    MissingProblem,

    #[error("unknown problem: {0}")]
    UnknownProblem(String),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("{0} expects a value")]
    MissingValue(String),

    #[error("invalid value for {option}: {value}")]
    InvalidValue { option: String, value: String },

    #[error("{option} does not apply to {method}")]
    NotApplicable { option: String, method: &'static str },
}

impl Method {
    fn name(self) -> &'static str {
        match self {
            Self::HookeJeeves => "hooke-jeeves",
            Self::NelderMead => "nelder-mead",
        }
    }
}

impl Args {
    /// Parses arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();

        let method = match args.next().as_deref() {
            Some("hooke-jeeves" | "hooke") => Method::HookeJeeves,
            Some("nelder-mead" | "nelmin") => Method::NelderMead,
            Some(other) => return Err(ArgsError::UnknownMethod(other.into())),
            None => return Err(ArgsError::MissingMethod),
        };

        let problem = match args.next().as_deref() {
            Some("rosenbrock") => Problem::Rosenbrock,
            Some("woods") => Problem::Woods,
            Some(other) => return Err(ArgsError::UnknownProblem(other.into())),
            None => return Err(ArgsError::MissingProblem),
        };

        let mut parsed = Self {
            method,
            problem,
            rho: None,
            epsilon: None,
            max_iters: None,
            reqmin: None,
            konvge: None,
            kcount: None,
            step: None,
            target: None,
            trace: false,
            json: false,
        };

        while let Some(option) = args.next() {
            match option.as_str() {
                "--trace" => parsed.trace = true,
                "--json" => parsed.json = true,
                "--target" => {
                    let value = value_of(&option, args.next())?;
                    parsed.target = Some(number(&option, &value)?);
                }
                "--rho" | "--epsilon" | "--max-iters" => {
                    parsed.expect_method(&option, Method::HookeJeeves)?;
                    let value = value_of(&option, args.next())?;
                    match option.as_str() {
                        "--rho" => parsed.rho = Some(number(&option, &value)?),
                        "--epsilon" => parsed.epsilon = Some(number(&option, &value)?),
                        _ => parsed.max_iters = Some(number(&option, &value)?),
                    }
                }
                "--reqmin" | "--konvge" | "--kcount" | "--step" => {
                    parsed.expect_method(&option, Method::NelderMead)?;
                    let value = value_of(&option, args.next())?;
                    match option.as_str() {
                        "--reqmin" => parsed.reqmin = Some(number(&option, &value)?),
                        "--konvge" => parsed.konvge = Some(number(&option, &value)?),
                        "--kcount" => parsed.kcount = Some(number(&option, &value)?),
                        _ => parsed.step = Some(number(&option, &value)?),
                    }
                }
                _ => return Err(ArgsError::UnknownOption(option)),
            }
        }

        Ok(parsed)
    }

    fn expect_method(&self, option: &str, method: Method) -> Result<(), ArgsError> {
        if self.method == method {
            Ok(())
        } else {
            Err(ArgsError::NotApplicable {
                option: option.into(),
                method: self.method.name(),
            })
        }
    }
}

fn value_of(option: &str, value: Option<String>) -> Result<String, ArgsError> {
    value.ok_or_else(|| ArgsError::MissingValue(option.into()))
}

fn number<T: std::str::FromStr>(option: &str, value: &str) -> Result<T, ArgsError> {
    value.parse().map_err(|_| ArgsError::InvalidValue {
        option: option.into(),
        value: value.into(),
    })
}
