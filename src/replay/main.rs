use std::path::PathBuf;

use clap::Parser;
use die_puzzle::{parse_moves, Game, Level, Rating};

type Result<T> = std::result::Result<T, anyhow::Error>;

#[derive(Debug, Parser)]
#[command(name = "replay")]
#[command(about = "Roll the die through a level and report the outcome")]
struct Args {
    file: PathBuf,

    /// Moves such as "NNESW".
    moves: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let level = Level::read(&std::fs::read_to_string(&args.file)?)?;
    let moves = parse_moves(&args.moves)?;
    let (game, rolls) = Game::replay(level, &moves);

    for (d, roll) in moves.iter().zip(&rolls) {
        println!("{} {:?}", d.symbol(), roll);
    }
    if rolls.len() < moves.len() {
        println!("Stopped after {} of {} moves.", rolls.len(), moves.len());
    }

    println!("At {:?} with die {}", game.position(), game.die());

    match game.rating() {
        None => println!("Level not finished."),
        Some(Rating::Unrated) => println!("Won in {} moves.", game.moves().len()),
        Some(rating) => println!(
            "Won in {} moves (par {}): {:?}{}",
            game.moves().len(),
            game.level().par().unwrap_or_default(),
            rating,
            if rating.has_star() { ", star awarded" } else { "" }
        ),
    }

    Ok(())
}
