use std::env;

use clap::Parser;
use tracing::{debug, info};

use combi::calculator;
use combi::calculator::Formula;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// formula to evaluate: factorial (f), permutation (p) or combination (c)
    formula: Formula,

    /// total number of items
    #[clap(short = 'n', long)]
    n: String,

    /// number of items selected; required unless the formula is factorial, where it is ignored
    #[clap(short = 'r', long)]
    r: Option<String>,

    /// print the evaluation as JSON
    #[clap(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LIB_BACKTRACE").is_err() {
        env::set_var("RUST_LIB_BACKTRACE", "0")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    debug!("args: {args:?}");

    let evaluation = calculator::evaluate(args.formula, &args.n, args.r.as_deref())?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        info!("{evaluation}");
        if !evaluation.value.is_exact() {
            info!("(approximate; the exact value exceeds 128 bits)");
        }
    }
    Ok(())
}
