use std::env;

use anyhow::anyhow;
use clap::Parser;
use serde::Serialize;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use combi::print::tabulate_solutions;
use combi::problems::{find, problems, Problem, Solution};

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// show only the problem with this ID
    #[clap(short = 'p', long)]
    problem: Option<u8>,

    /// include worked explanations
    #[clap(short = 's', long)]
    solutions: bool,

    /// print the catalogue as JSON
    #[clap(long)]
    json: bool,
}
impl Args {
    fn selected(&self) -> anyhow::Result<Vec<&'static Problem>> {
        match self.problem {
            None => Ok(problems().iter().collect()),
            Some(id) => {
                let problem = find(id).ok_or(anyhow!("no problem with ID {id}"))?;
                Ok(vec![problem])
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct WorkedProblem {
    id: u8,
    question: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<&'static str>,
    solution: Solution,
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

    let selected = args.selected()?;
    let mut worked = Vec::with_capacity(selected.len());
    for problem in selected {
        let solution = problem.solve()?;
        worked.push((problem, solution));
    }

    if args.json {
        let report = worked
            .iter()
            .map(|(problem, solution)| WorkedProblem {
                id: problem.id,
                question: problem.question,
                explanation: args.solutions.then_some(problem.explanation),
                solution: solution.clone(),
            })
            .collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for (problem, solution) in &worked {
        info!("Problem {}: {}", problem.id, problem.question);
        if args.solutions {
            info!("Solution:\n{solution}");
            info!("Explanation:\n{}", problem.explanation);
        }
    }
    let table = tabulate_solutions(&worked);
    info!("\n{}", Console::default().render(&table));
    Ok(())
}
