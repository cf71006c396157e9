//! Rolling-die puzzle core: die orientation, tile rules, level parsing, the
//! level traversal graph and a shortest-solution search.

mod die;
mod direction;
mod error;
mod game;
mod graph;
mod level;
mod map;
mod solver;
mod tile;

pub use die::Die;
pub use direction::{format_moves, parse_moves, Direction};
pub use error::{Error, Result};
pub use game::{Game, Rating, Roll};
pub use graph::{Cell, CellId, Graph};
pub use level::Level;
pub use map::Map;
pub use solver::{solve, solve_with, SolveOptions, SolveReport, Solver};
pub use tile::{is_passable, TileType};
