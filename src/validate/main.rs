use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use die_puzzle::{format_moves, Level, SolveOptions};
use itertools::Itertools;

type Result<T> = std::result::Result<T, anyhow::Error>;

#[derive(Debug, Parser)]
#[command(name = "validate")]
#[command(about = "Check that every level is solvable in exactly its par")]
struct Args {
    #[arg(required = true)]
    files: Vec<PathBuf>,

    #[arg(long)]
    max_moves: Option<usize>,
}

fn check(path: &Path, options: &SolveOptions) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let level = Level::read(&text).with_context(|| format!("parsing {}", path.display()))?;
    let report = level.solve_with(options);

    let shortest = match report.shortest_length() {
        Some(n) => n,
        None => bail!("no solution"),
    };
    let par = match level.par() {
        Some(par) => par,
        None => bail!("no par line"),
    };
    if par != shortest {
        bail!(
            "par is {} but shortest solution takes {}: {}",
            par,
            shortest,
            report.solutions.iter().map(|s| format_moves(s)).join(", ")
        );
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let options = SolveOptions {
        max_moves: args.max_moves,
    };

    let mut failures = 0;
    for path in &args.files {
        match check(path, &options) {
            Ok(()) => println!("ok      {}", path.display()),
            Err(err) => {
                failures += 1;
                println!("FAILED  {}: {:#}", path.display(), err);
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} levels failed", failures, args.files.len());
    }

    Ok(())
}
