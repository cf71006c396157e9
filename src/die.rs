use rand::Rng;

use crate::direction::Direction;
use crate::error::{Error, Result};

// For each top face, the faces around its equator in order; east is taken at
// the twist offset and north is the next entry.
const EQUATORS: [[u8; 4]; 6] = [
    [2, 3, 5, 4],
    [1, 4, 6, 3],
    [1, 2, 6, 5],
    [1, 5, 6, 2],
    [1, 3, 6, 4],
    [2, 4, 5, 3],
];

/// Orientation of a six-sided die. Only top, east and north are stored; the
/// opposite faces always sum to 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Die {
    top: u8,
    east: u8,
    north: u8,
}

impl Default for Die {
    fn default() -> Self {
        Die::new()
    }
}

impl Die {
    pub fn new() -> Die {
        Die {
            top: 1,
            east: 2,
            north: 3,
        }
    }

    pub fn oriented(top: u8, twist: u32) -> Result<Die> {
        let mut die = Die::new();
        die.rotate_to(top, twist)?;
        Ok(die)
    }

    pub fn top(&self) -> u8 {
        self.top
    }

    pub fn east(&self) -> u8 {
        self.east
    }

    pub fn north(&self) -> u8 {
        self.north
    }

    pub fn south(&self) -> u8 {
        7 - self.north
    }

    pub fn west(&self) -> u8 {
        7 - self.east
    }

    pub fn bottom(&self) -> u8 {
        7 - self.top
    }

    /// The face pointing in `direction`, which becomes the bottom face after
    /// rolling that way.
    pub fn face(&self, direction: Direction) -> u8 {
        match direction {
            Direction::North => self.north(),
            Direction::East => self.east(),
            Direction::South => self.south(),
            Direction::West => self.west(),
        }
    }

    pub fn rotate_to(&mut self, top: u8, twist: u32) -> Result<()> {
        if !(1..=6).contains(&top) {
            return Err(Error::InvalidFace(top));
        }
        self.orient(top, twist);
        Ok(())
    }

    fn orient(&mut self, top: u8, twist: u32) {
        let equator = &EQUATORS[(top - 1) as usize];
        let twist = (twist % 4) as usize;
        self.top = top;
        self.east = equator[twist];
        self.north = equator[(twist + 1) % 4];
    }

    pub fn throw<R: Rng>(&mut self, rng: &mut R) {
        let top: u8 = rng.gen_range(1..=6);
        let twist: u32 = rng.gen_range(0..4);
        self.orient(top, twist);
    }

    pub fn rotate_north(&mut self) {
        (self.top, self.north) = (self.south(), self.top);
    }

    pub fn rotate_east(&mut self) {
        (self.top, self.east) = (self.west(), self.top);
    }

    pub fn rotate_south(&mut self) {
        (self.top, self.north) = (self.north, self.bottom());
    }

    pub fn rotate_west(&mut self) {
        (self.top, self.east) = (self.east, self.bottom());
    }

    pub fn roll(&mut self, direction: Direction) {
        match direction {
            Direction::North => self.rotate_north(),
            Direction::East => self.rotate_east(),
            Direction::South => self.rotate_south(),
            Direction::West => self.rotate_west(),
        }
    }

    pub fn rolled(&self, direction: Direction) -> Die {
        let mut rv = *self;
        rv.roll(direction);
        rv
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "top {} bottom {} north {} east {} south {} west {}",
            self.top(),
            self.bottom(),
            self.north(),
            self.east(),
            self.south(),
            self.west()
        )
    }
}
