use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::die::Die;
use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::map::Map;
use crate::solver::{self, SolveOptions, SolveReport};
use crate::tile::TileType;

fn par_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#\s*(?P<par>[+-]?[0-9]+)\s*$").expect("valid par regex"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    map: Map<TileType>,
    entrance: (i32, i32),
    teleporters: Vec<(i32, i32)>,
    par: Option<usize>,
}

impl Level {
    /// Parses level text: an optional `# <par>` line followed by grid rows,
    /// row 0 being the northernmost.
    pub fn read(text: &str) -> Result<Level> {
        let mut par: Option<usize> = None;
        let mut rows: Vec<&str> = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim_end();
            let line_number = index + 1;

            if rows.is_empty() && line.is_empty() {
                continue;
            }

            if line.starts_with('#') {
                if !rows.is_empty() {
                    return Err(Error::Parse {
                        line: line_number,
                        reason: "par line after grid rows".to_string(),
                    });
                }
                if par.is_some() {
                    return Err(Error::Parse {
                        line: line_number,
                        reason: "duplicate par line".to_string(),
                    });
                }
                par = Some(parse_par(line, line_number)?);
                continue;
            }

            rows.push(line);
        }

        while rows.last().map_or(false, |row| row.is_empty()) {
            rows.pop();
        }

        let mut tiles: Vec<Vec<TileType>> = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            let parsed = row
                .chars()
                .enumerate()
                .map(|(x, ch)| TileType::parse(ch, (x as i32, y as i32)))
                .collect::<Result<Vec<TileType>>>()?;
            tiles.push(parsed);
        }

        let map = Map::from_rows(tiles, &TileType::Void);
        let entrance = *map
            .find(&TileType::Entrance)
            .first()
            .ok_or(Error::MissingEntrance)?;
        let teleporters = map.find(&TileType::Teleporter);

        debug!(
            "read {}x{} level, entrance {:?}, {} teleporters, par {:?}",
            map.number_of_columns(),
            map.number_of_rows(),
            entrance,
            teleporters.len(),
            par
        );

        Ok(Level {
            map,
            entrance,
            teleporters,
            par,
        })
    }

    pub fn width(&self) -> i32 {
        self.map.number_of_columns()
    }

    pub fn height(&self) -> i32 {
        self.map.number_of_rows()
    }

    pub fn entrance(&self) -> (i32, i32) {
        self.entrance
    }

    pub fn exit(&self) -> Option<(i32, i32)> {
        self.map.find(&TileType::Exit).first().cloned()
    }

    /// Teleporter positions in discovery (row-major) order.
    pub fn teleporters(&self) -> &[(i32, i32)] {
        &self.teleporters
    }

    /// The teleporter a die arrives at when entering the one at `position`.
    pub fn teleport_destination(&self, position: (i32, i32)) -> Option<(i32, i32)> {
        if self.teleporters.len() < 2 {
            return None;
        }
        let index = self.teleporters.iter().position(|p| *p == position)?;
        Some(self.teleporters[(index + 1) % self.teleporters.len()])
    }

    pub fn par(&self) -> Option<usize> {
        self.par
    }

    /// Never fails; anything outside the grid is void.
    pub fn get_tile(&self, x: i32, y: i32) -> TileType {
        self.map.at((x, y)).cloned().unwrap_or(TileType::Void)
    }

    pub fn tile_at(&self, position: (i32, i32)) -> TileType {
        self.get_tile(position.0, position.1)
    }

    /// Replaces a tile with void, returning what was there.
    pub fn remove_tile(&mut self, x: i32, y: i32) -> TileType {
        match self.map.at_mut((x, y)) {
            Some(tile) => std::mem::replace(tile, TileType::Void),
            None => TileType::Void,
        }
    }

    /// Every non-void tile, row-major.
    pub fn tiles(&self) -> Vec<((i32, i32), TileType)> {
        let mut rv = Vec::new();
        self.map.indexed_for_each(|p, tile| {
            if *tile != TileType::Void {
                rv.push((p, *tile));
            }
        });
        rv
    }

    pub fn rows(&self) -> Vec<String> {
        self.map
            .show(|tile| tile.symbol())
            .into_iter()
            .map(|row| row.trim_end().to_string())
            .collect()
    }

    pub fn graph(&self) -> Graph {
        Graph::build(self)
    }

    /// All shortest solutions from the entrance with a canonical die.
    pub fn solve(&self) -> Vec<Vec<Direction>> {
        self.solve_with(&SolveOptions::default()).solutions
    }

    pub fn solve_with(&self, options: &SolveOptions) -> SolveReport {
        let graph = self.graph();
        solver::solve_with(&graph, graph.entrance(), Die::new(), options)
    }
}

impl std::str::FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Level> {
        Level::read(s)
    }
}

fn parse_par(line: &str, line_number: usize) -> Result<usize> {
    let captures = par_regex().captures(line).ok_or_else(|| Error::Parse {
        line: line_number,
        reason: format!("par is not an integer: {:?}", line[1..].trim()),
    })?;
    captures["par"].parse::<usize>().map_err(|err| Error::Parse {
        line: line_number,
        reason: format!("bad par value {:?}: {}", &captures["par"], err),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_par_and_grid() {
        let level = Level::read("\n\n# 7\n\nb..\n ,e\n\n").unwrap();
        assert_eq!(level.par(), Some(7));
        assert_eq!(level.width(), 3);
        assert_eq!(level.height(), 2);
        assert_eq!(level.entrance(), (0, 0));
        assert_eq!(level.exit(), Some((2, 1)));
        assert_eq!(level.get_tile(1, 1), TileType::BlankAlt);
        assert_eq!(level.get_tile(0, 1), TileType::Void);
    }

    #[test]
    fn par_is_optional() {
        let level = Level::read("be").unwrap();
        assert_eq!(level.par(), None);
    }

    #[test]
    fn ragged_rows_pad_with_void() {
        let level = Level::read("b\n...e").unwrap();
        assert_eq!(level.width(), 4);
        assert_eq!(level.get_tile(3, 0), TileType::Void);
        assert_eq!(level.get_tile(3, 1), TileType::Exit);
    }

    #[test]
    fn out_of_range_is_void() {
        let level = Level::read("be").unwrap();
        assert_eq!(level.get_tile(-1, 0), TileType::Void);
        assert_eq!(level.get_tile(2, 0), TileType::Void);
        assert_eq!(level.get_tile(0, 9), TileType::Void);
    }

    #[test]
    fn first_entrance_wins() {
        let level = Level::read("..b\nb.e").unwrap();
        assert_eq!(level.entrance(), (2, 0));
    }

    #[test]
    fn missing_entrance() {
        assert_eq!(Level::read("# 3\n..e"), Err(Error::MissingEntrance));
        assert_eq!(Level::read(""), Err(Error::MissingEntrance));
    }

    #[test]
    fn unknown_tile() {
        assert_eq!(
            Level::read("b.\n.+e"),
            Err(Error::UnknownTile {
                symbol: '+',
                x: 1,
                y: 1
            })
        );
    }

    #[test]
    fn malformed_par_lines() {
        assert!(matches!(
            Level::read("# seven\nbe"),
            Err(Error::Parse { line: 1, .. })
        ));
        assert!(matches!(
            Level::read("# -3\nbe"),
            Err(Error::Parse { line: 1, .. })
        ));
        assert!(matches!(
            Level::read("# 3\n# 4\nbe"),
            Err(Error::Parse { line: 2, .. })
        ));
        assert!(matches!(
            Level::read("be\n# 4"),
            Err(Error::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn teleporters_in_discovery_order() {
        let level = Level::read("bt.\n..t\nt.e").unwrap();
        assert_eq!(level.teleporters(), &[(1, 0), (2, 1), (0, 2)]);
        assert_eq!(level.teleport_destination((1, 0)), Some((2, 1)));
        assert_eq!(level.teleport_destination((0, 2)), Some((1, 0)));
        assert_eq!(level.teleport_destination((0, 0)), None);
    }

    #[test]
    fn lone_teleporter_goes_nowhere() {
        let level = Level::read("bte").unwrap();
        assert_eq!(level.teleport_destination((1, 0)), None);
    }

    #[test]
    fn remove_tile_leaves_void() {
        let mut level = Level::read("bxe").unwrap();
        assert_eq!(level.remove_tile(1, 0), TileType::Cracked);
        assert_eq!(level.get_tile(1, 0), TileType::Void);
        assert_eq!(level.remove_tile(5, 5), TileType::Void);
        assert_eq!(level.rows(), vec!["b e".to_string()]);
    }

    #[test]
    fn tiles_skip_void() {
        let level = Level::read("b e").unwrap();
        assert_eq!(
            level.tiles(),
            vec![((0, 0), TileType::Entrance), ((2, 0), TileType::Exit)]
        );
    }
}
