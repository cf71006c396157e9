use std::collections::HashMap;
use std::collections::VecDeque;

use log::debug;

use crate::direction::Direction;
use crate::level::Level;
use crate::tile::TileType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    tile: TileType,
    position: (i32, i32),
    neighbours: [Option<CellId>; 4],
}

impl Cell {
    pub fn tile(&self) -> TileType {
        self.tile
    }

    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    pub fn neighbour(&self, direction: Direction) -> Option<CellId> {
        self.neighbours[direction.index()]
    }
}

/// Traversal graph of a level: one cell per reachable coordinate, with ice
/// runs collapsed into single edges and teleporter entries relinked to their
/// destinations.
#[derive(Debug, Clone)]
pub struct Graph {
    cells: Vec<Cell>,
    index: HashMap<(i32, i32), CellId>,
    entrance: CellId,
}

impl Graph {
    pub fn build(level: &Level) -> Graph {
        let mut graph = Graph {
            cells: Vec::new(),
            index: HashMap::new(),
            entrance: CellId(0),
        };

        let mut q: VecDeque<CellId> = VecDeque::new();
        graph.entrance = graph.intern(level, level.entrance(), &mut q);

        while let Some(id) = q.pop_front() {
            let origin = graph.cells[id.0].position;
            let mut neighbours = [None; 4];
            for d in Direction::all() {
                neighbours[d.index()] = resolve_link(level, origin, d)
                    .map(|target| graph.intern(level, target, &mut q));
            }
            graph.cells[id.0].neighbours = neighbours;
        }

        debug!(
            "built graph with {} cells from {}x{} level",
            graph.cells.len(),
            level.width(),
            level.height()
        );

        graph
    }

    // Cells are registered before their links are resolved so loops in the
    // layout come back to the same cell.
    fn intern(&mut self, level: &Level, position: (i32, i32), q: &mut VecDeque<CellId>) -> CellId {
        if let Some(id) = self.index.get(&position) {
            return *id;
        }
        let id = CellId(self.cells.len());
        self.cells.push(Cell {
            tile: level.tile_at(position),
            position,
            neighbours: [None; 4],
        });
        self.index.insert(position, id);
        q.push_back(id);
        id
    }

    pub fn entrance(&self) -> CellId {
        self.entrance
    }

    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    pub fn cell_at(&self, position: (i32, i32)) -> Option<CellId> {
        self.index.get(&position).cloned()
    }

    pub fn cells(&self) -> impl Iterator<Item = (CellId, &Cell)> {
        self.cells.iter().enumerate().map(|(i, cell)| (CellId(i), cell))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Where a roll from `origin` toward `direction` ends up, if anywhere.
    pub fn destination(&self, origin: (i32, i32), direction: Direction) -> Option<(i32, i32)> {
        let id = self.cell_at(origin)?;
        let next = self.cell(id).neighbour(direction)?;
        Some(self.cell(next).position)
    }
}

/// Walks one step, slides across any ice, then follows a teleporter entry to
/// its destination.
fn resolve_link(level: &Level, origin: (i32, i32), direction: Direction) -> Option<(i32, i32)> {
    let mut p = direction.step(origin);
    while level.tile_at(p) == TileType::Ice {
        p = direction.step(p);
    }

    match level.tile_at(p) {
        TileType::Void => None,
        TileType::Teleporter => Some(level.teleport_destination(p).unwrap_or(p)),
        _ => Some(p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(text: &str) -> (Level, Graph) {
        let level = Level::read(text).unwrap();
        let graph = level.graph();
        (level, graph)
    }

    #[test]
    fn plain_grid_links_to_adjacent_cells() {
        let (level, graph) = graph_of("b..\n.,.\n..e");
        assert_eq!(graph.len(), 9);
        for (_, cell) in graph.cells() {
            let (x, y) = cell.position();
            for d in Direction::all() {
                let target = d.step((x, y));
                let expected = if level.tile_at(target) == TileType::Void {
                    None
                } else {
                    Some(target)
                };
                assert_eq!(graph.destination((x, y), d), expected);
            }
        }
    }

    #[test]
    fn two_by_two_loop_shares_cells() {
        let (_, graph) = graph_of("b.\n.e");
        assert_eq!(graph.len(), 4);
        let entrance = graph.entrance();
        let east = graph.cell(entrance).neighbour(Direction::East).unwrap();
        let south_east = graph.cell(east).neighbour(Direction::South).unwrap();
        let south_west = graph.cell(south_east).neighbour(Direction::West).unwrap();
        let back = graph.cell(south_west).neighbour(Direction::North).unwrap();
        assert_eq!(back, entrance);
    }

    #[test]
    fn unreachable_cells_are_not_built() {
        let (_, graph) = graph_of("b. .e");
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.cell_at((4, 0)), None);
    }

    #[test]
    fn ice_run_collapses_to_one_edge() {
        let (_, graph) = graph_of("bssss.\n");
        assert_eq!(graph.destination((0, 0), Direction::East), Some((5, 0)));
        assert_eq!(graph.destination((5, 0), Direction::West), Some((0, 0)));
        assert_eq!(graph.len(), 2);
        assert!(graph.cells().all(|(_, c)| c.tile() != TileType::Ice));
    }

    #[test]
    fn ice_into_void_is_a_wall() {
        let (_, graph) = graph_of("bss");
        assert_eq!(graph.destination((0, 0), Direction::East), None);
    }

    #[test]
    fn teleporters_link_to_cyclic_successor() {
        // Teleporters A=(2,0), B=(0,2), C=(4,2); each approached from an
        // adjacent blank tile.
        let (_, graph) = graph_of("b.t..\n.   .\nt.e.t");
        assert_eq!(graph.destination((1, 0), Direction::East), Some((0, 2)));
        assert_eq!(graph.destination((0, 1), Direction::South), Some((4, 2)));
        assert_eq!(graph.destination((3, 2), Direction::East), Some((2, 0)));
    }

    #[test]
    fn lone_teleporter_is_a_plain_tile() {
        let (_, graph) = graph_of("bte");
        assert_eq!(graph.destination((0, 0), Direction::East), Some((1, 0)));
    }

    #[test]
    fn ice_can_slide_into_teleporter() {
        let (_, graph) = graph_of("bsst\n   .\n  et");
        assert_eq!(graph.destination((0, 0), Direction::East), Some((3, 2)));
    }
}
