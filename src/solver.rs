use std::collections::BTreeSet;
use std::collections::HashMap;

use log::{debug, info, warn};

use crate::die::Die;
use crate::direction::Direction;
use crate::graph::{CellId, Graph};
use crate::tile::{is_passable, TileType};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveOptions {
    /// Abandon any branch longer than this many moves.
    pub max_moves: Option<usize>,
}

impl SolveOptions {
    pub fn with_max_moves(max_moves: usize) -> SolveOptions {
        SolveOptions {
            max_moves: Some(max_moves),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveReport {
    /// Every shortest move sequence found, in discovery order.
    pub solutions: Vec<Vec<Direction>>,
    pub states_explored: u64,
    /// True if some branch was cut by `max_moves`; a report that hit the
    /// ceiling may be missing solutions.
    pub hit_ceiling: bool,
}

impl SolveReport {
    pub fn shortest_length(&self) -> Option<usize> {
        self.solutions.first().map(|s| s.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct StateKey {
    cell: CellId,
    die: Die,
    toggled: bool,
    cracked: BTreeSet<CellId>,
}

struct StateMemo {
    memo: HashMap<StateKey, usize>,
}

impl StateMemo {
    fn new() -> StateMemo {
        StateMemo {
            memo: HashMap::new(),
        }
    }

    fn reached_within(&self, key: &StateKey, length: usize) -> bool {
        matches!(self.memo.get(key), Some(previous) if *previous <= length)
    }

    fn record(&mut self, key: StateKey, length: usize) {
        self.memo.insert(key, length);
    }
}

struct Frame {
    cell: CellId,
    die: Die,
    toggled: bool,
    cracked: BTreeSet<CellId>,
    path: Vec<Direction>,
}

pub struct Solver<'a> {
    graph: &'a Graph,
    options: SolveOptions,
    memo: StateMemo,
    best: Vec<Vec<Direction>>,
    iteration_count: u64,
    hit_ceiling: bool,
}

impl<'a> Solver<'a> {
    pub fn new(graph: &'a Graph, options: SolveOptions) -> Solver<'a> {
        Solver {
            graph,
            options,
            memo: StateMemo::new(),
            best: Vec::new(),
            iteration_count: 0,
            hit_ceiling: false,
        }
    }

    /// Depth-first search from `start`. Children are visited N, E, S, W so
    /// the first path to reach a state wins ties deterministically.
    pub fn run(
        mut self,
        start: CellId,
        die: Die,
        toggled: bool,
        cracked: BTreeSet<CellId>,
    ) -> SolveReport {
        let mut stack = vec![Frame {
            cell: start,
            die,
            toggled,
            cracked,
            path: Vec::new(),
        }];

        while let Some(frame) = stack.pop() {
            self.iteration_count += 1;
            if self.iteration_count % 100_000 == 0 {
                debug!(
                    "Iteration {}; stack size {}, path length {}, memo size {}, best {:?}",
                    self.iteration_count,
                    stack.len(),
                    frame.path.len(),
                    self.memo.memo.len(),
                    self.best_length(),
                );
            }

            self.expand(frame, &mut stack);
        }

        let report = SolveReport {
            solutions: self.best,
            states_explored: self.iteration_count,
            hit_ceiling: self.hit_ceiling,
        };

        if report.hit_ceiling {
            warn!(
                "search cut off at {:?} moves; results may be incomplete",
                self.options.max_moves
            );
        }
        info!(
            "explored {} states, {} shortest solutions of length {:?}",
            report.states_explored,
            report.solutions.len(),
            report.shortest_length()
        );

        report
    }

    fn best_length(&self) -> Option<usize> {
        self.best.first().map(|s| s.len())
    }

    fn expand(&mut self, frame: Frame, stack: &mut Vec<Frame>) {
        let length = frame.path.len();
        let key = StateKey {
            cell: frame.cell,
            die: frame.die,
            toggled: frame.toggled,
            cracked: frame.cracked,
        };

        if self.memo.reached_within(&key, length) {
            return;
        }

        if let Some(best) = self.best_length() {
            if length > best {
                return;
            }
        }

        if let Some(max_moves) = self.options.max_moves {
            if length > max_moves {
                self.hit_ceiling = true;
                return;
            }
        }

        let mut cracked = key.cracked.clone();
        self.memo.record(key, length);

        let graph = self.graph;
        let id = frame.cell;
        let cell = graph.cell(id);
        let tile = cell.tile();

        if tile == TileType::Cracked && !cracked.insert(id) {
            // Already crumbled on this path.
            return;
        }

        if !is_passable(tile, frame.die.bottom(), frame.toggled) {
            return;
        }

        if tile == TileType::Exit {
            self.record_solution(frame.path);
            return;
        }

        let toggled = if tile == TileType::Button {
            !frame.toggled
        } else {
            frame.toggled
        };

        for d in Direction::all().iter().rev() {
            if let Some(next) = cell.neighbour(*d) {
                let mut path = frame.path.clone();
                path.push(*d);
                stack.push(Frame {
                    cell: next,
                    die: frame.die.rolled(*d),
                    toggled,
                    cracked: cracked.clone(),
                    path,
                });
            }
        }
    }

    fn record_solution(&mut self, path: Vec<Direction>) {
        match self.best_length() {
            Some(best) if path.len() > best => {}
            Some(best) if path.len() == best => self.best.push(path),
            _ => {
                debug!("new best solution of length {}", path.len());
                self.best = vec![path];
            }
        }
    }
}

/// All shortest move sequences from `start` to an exit.
pub fn solve(graph: &Graph, start: CellId, die: Die) -> Vec<Vec<Direction>> {
    solve_with(graph, start, die, &SolveOptions::default()).solutions
}

pub fn solve_with(graph: &Graph, start: CellId, die: Die, options: &SolveOptions) -> SolveReport {
    Solver::new(graph, options.clone()).run(start, die, false, BTreeSet::new())
}
