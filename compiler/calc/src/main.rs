use clap::Parser;
use log::LevelFilter;

use calc::format_number;
use calc_eval::config::DEFAULT_MAX_DEPTH;
use calc_eval::{EvalConfig, Evaluator};

#[derive(Debug, Parser)]
#[command(
    name = "calc",
    version,
    about = "Evaluate a floating-point arithmetic expression",
    long_about = "calc evaluates f64 expressions on the command line.\n\n\
        The following operators are supported, from highest precedence to lowest:\n\
        \n  Operator | Description                         | Associativity\
        \n  ---------+-------------------------------------+--------------\
        \n  ^        | Exponentiation                      | Right to left\
        \n  + -      | Positive, negative                  | Right to left\
        \n  * / %    | Multiplication, division, remainder | Left to right\
        \n  + -      | Addition, subtraction               | Left to right\n\n\
        Parentheses group subexpressions as usual.",
    after_help = "EXAMPLES:\n\
        \n  calc '1+2*3'          7\
        \n  calc '(1+2) * 3'      9\
        \n  calc '0.5 + 0.25'     0.75\
        \n  calc '-2^2'           -4\
        \n  calc '-5 % 3'         -2"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Maximum nesting depth of parentheses, prefix operators and '^' chains
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// The expression to evaluate, e.g. '1+2*3'
    #[arg(value_name = "EXPRESSION", allow_hyphen_values = true)]
    expression: String,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .format_timestamp(None)
        .init();
}

/// Evaluate the expression, print the outcome and return the exit status.
fn run(cli: &Cli) -> i32 {
    let evaluator = Evaluator::new(EvalConfig::with_max_depth(cli.max_depth));

    match evaluator.evaluate(&cli.expression) {
        Ok(value) => {
            println!("{}", format_number(value));
            0
        }
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    std::process::exit(run(&cli));
}
