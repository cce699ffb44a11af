use std::{fs, num::NonZeroU64, process::ExitCode};

use bigdecimal::RoundingMode;
use clap::{Parser, ValueEnum};
use decalc::{
    interpreter::{
        calculator::{Calculator, formula_lines},
        value::{context::DEFAULT_PRECISION, format::to_normalized_string},
    },
    MathContext,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// decalc evaluates decimal formulas with arbitrary precision.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells decalc to read formulas from a file, one per line, instead of
    /// evaluating CONTENTS directly.
    #[arg(short, long)]
    file: bool,

    /// Number of significant digits kept by every result.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: NonZeroU64,

    /// How results are rounded to the precision.
    #[arg(short, long, value_enum, default_value_t = RoundingArg::HalfUp)]
    rounding: RoundingArg,

    /// Defines a variable before evaluating, as NAME=FORMULA. Repeatable.
    #[arg(short = 'D', long = "define", value_name = "NAME=FORMULA")]
    defines: Vec<String>,

    /// Logs evaluation details to stderr.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

/// Rounding modes selectable from the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum RoundingArg {
    Up,
    Down,
    Ceiling,
    Floor,
    HalfUp,
    HalfDown,
    HalfEven,
}

impl From<RoundingArg> for RoundingMode {
    fn from(value: RoundingArg) -> Self {
        match value {
            RoundingArg::Up => Self::Up,
            RoundingArg::Down => Self::Down,
            RoundingArg::Ceiling => Self::Ceiling,
            RoundingArg::Floor => Self::Floor,
            RoundingArg::HalfUp => Self::HalfUp,
            RoundingArg::HalfDown => Self::HalfDown,
            RoundingArg::HalfEven => Self::HalfEven,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .with_target(false)
                             .init();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let context = MathContext::new(args.precision, args.rounding.into());
    let mut calculator = Calculator::with_context(context);

    for definition in &args.defines {
        let Some((name, formula)) = definition.split_once('=') else {
            eprintln!("Invalid definition '{definition}': expected NAME=FORMULA.");
            return ExitCode::FAILURE;
        };
        if let Err(e) = calculator.define(name.trim(), formula) {
            eprintln!("Invalid definition of '{}': {e}", name.trim());
            return ExitCode::FAILURE;
        }
    }

    let formulas: Vec<&str> = if args.file {
        formula_lines(&script).collect()
    } else {
        vec![script.as_str()]
    };
    debug!(count = formulas.len(), "evaluating formulas");

    let mut status = ExitCode::SUCCESS;
    for formula in formulas {
        match calculator.eval(formula) {
            Ok(value) => println!("{}", to_normalized_string(&value)),
            Err(e) => {
                eprintln!("{e}");
                status = ExitCode::FAILURE;
            },
        }
    }

    status
}
