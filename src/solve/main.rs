use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use die_puzzle::{format_moves, Level, SolveOptions};

type Result<T> = std::result::Result<T, anyhow::Error>;

#[derive(Debug, Parser)]
#[command(name = "solve")]
#[command(about = "Print every shortest solution of a level")]
struct Args {
    /// Level file; read from stdin when omitted.
    file: Option<PathBuf>,

    /// Give up on any branch longer than this.
    #[arg(long)]
    max_moves: Option<usize>,
}

fn read_input(file: &Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let level = Level::read(&read_input(&args.file)?)?;
    let options = SolveOptions {
        max_moves: args.max_moves,
    };
    let report = level.solve_with(&options);

    if report.hit_ceiling {
        eprintln!(
            "Search was cut off at {} moves.",
            args.max_moves.unwrap_or_default()
        );
    }

    let shortest = match report.shortest_length() {
        Some(n) => n,
        None => {
            println!("No solution.");
            return Ok(());
        }
    };

    for solution in &report.solutions {
        println!("{}", format_moves(solution));
    }
    println!(
        "{} shortest solutions of {} moves ({} states explored)",
        report.solutions.len(),
        shortest,
        report.states_explored
    );

    match level.par() {
        Some(par) if par == shortest => println!("Par {} is correct.", par),
        Some(par) => println!("Par {} does not match shortest solution {}.", par, shortest),
        None => println!("Level has no par."),
    }

    Ok(())
}
