use std::cmp::Ordering;
use std::collections::BTreeSet;

use log::debug;

use crate::die::Die;
use crate::direction::Direction;
use crate::graph::{CellId, Graph};
use crate::level::Level;
use crate::solver::{SolveOptions, Solver};
use crate::tile::{is_passable, TileType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Roll {
    Blocked,
    Moved,
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    UnderPar,
    /// Exactly par; earns the star.
    Par,
    OverPar,
    Unrated,
}

impl Rating {
    pub fn has_star(&self) -> bool {
        matches!(self, Rating::UnderPar | Rating::Par)
    }
}

/// A level being played. Cracked tiles are removed from the level as the die
/// leaves them.
#[derive(Debug, Clone)]
pub struct Game {
    level: Level,
    graph: Graph,
    cell: CellId,
    die: Die,
    toggled: bool,
    moves: Vec<Direction>,
    won: bool,
}

impl Game {
    pub fn new(level: Level) -> Game {
        let graph = level.graph();
        let cell = graph.entrance();
        Game {
            level,
            graph,
            cell,
            die: Die::new(),
            toggled: false,
            moves: Vec::new(),
            won: false,
        }
    }

    pub fn replay(level: Level, moves: &[Direction]) -> (Game, Vec<Roll>) {
        let mut game = Game::new(level);
        let mut rv = Vec::new();

        for d in moves {
            let roll = game.roll(*d);
            rv.push(roll);
            if roll != Roll::Moved {
                break;
            }
        }

        (game, rv)
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn die(&self) -> Die {
        self.die
    }

    pub fn toggled(&self) -> bool {
        self.toggled
    }

    pub fn moves(&self) -> &[Direction] {
        &self.moves
    }

    pub fn position(&self) -> (i32, i32) {
        self.graph.cell(self.cell).position()
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn roll(&mut self, direction: Direction) -> Roll {
        if self.won {
            return Roll::Blocked;
        }

        let current = self.graph.cell(self.cell);
        let next = match current.neighbour(direction) {
            Some(next) => next,
            None => return Roll::Blocked,
        };

        let destination = self.graph.cell(next).position();
        let tile = self.level.tile_at(destination);
        let die = self.die.rolled(direction);
        if !is_passable(tile, die.bottom(), self.toggled) {
            return Roll::Blocked;
        }

        let (x, y) = current.position();
        if self.level.get_tile(x, y) == TileType::Cracked {
            debug!("tile at ({}, {}) crumbles", x, y);
            self.level.remove_tile(x, y);
        }

        self.cell = next;
        self.die = die;
        self.moves.push(direction);

        match tile {
            TileType::Button => {
                self.toggled = !self.toggled;
                Roll::Moved
            }
            TileType::Exit => {
                self.won = true;
                Roll::Won
            }
            _ => Roll::Moved,
        }
    }

    pub fn rating(&self) -> Option<Rating> {
        if !self.won {
            return None;
        }
        Some(match self.level.par() {
            None => Rating::Unrated,
            Some(par) => match self.moves.len().cmp(&par) {
                Ordering::Less => Rating::UnderPar,
                Ordering::Equal => Rating::Par,
                Ordering::Greater => Rating::OverPar,
            },
        })
    }

    /// First move of a shortest solution from the current state.
    pub fn hint(&self) -> Option<Direction> {
        if self.won {
            return None;
        }

        let collapsed: BTreeSet<CellId> = self
            .graph
            .cells()
            .filter(|(_, cell)| {
                cell.tile() == TileType::Cracked
                    && self.level.tile_at(cell.position()) == TileType::Void
            })
            .map(|(id, _)| id)
            .collect();

        // The search flips the toggle again on entering its start cell.
        let on_button = self.graph.cell(self.cell).tile() == TileType::Button;
        let report = Solver::new(&self.graph, SolveOptions::default()).run(
            self.cell,
            self.die,
            self.toggled != on_button,
            collapsed,
        );

        report.solutions.first().and_then(|s| s.first().cloned())
    }
}
