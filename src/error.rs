use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("level has no entrance tile")]
    MissingEntrance,

    #[error("unknown tile {symbol:?} at ({x}, {y})")]
    UnknownTile { symbol: char, x: i32, y: i32 },

    #[error("invalid die face {0}, expected 1-6")]
    InvalidFace(u8),

    #[error("invalid move {0:?}, expected one of N, E, S, W")]
    InvalidMove(char),
}

pub type Result<T> = std::result::Result<T, Error>;
