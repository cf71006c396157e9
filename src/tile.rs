use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileType {
    Entrance,
    Exit,
    /// Passable only with the given face (1-6) down.
    Gate(u8),
    Blank,
    BlankAlt,
    Void,
    Cracked,
    Ice,
    Teleporter,
    Button,
    Active,
    Inactive,
}

impl TileType {
    pub fn from_symbol(symbol: char) -> Option<TileType> {
        Some(match symbol {
            'b' => TileType::Entrance,
            'e' => TileType::Exit,
            '1'..='6' => TileType::Gate(symbol as u8 - b'0'),
            '.' => TileType::Blank,
            ',' => TileType::BlankAlt,
            'x' => TileType::Cracked,
            's' => TileType::Ice,
            't' => TileType::Teleporter,
            'o' => TileType::Button,
            '/' => TileType::Active,
            '\\' => TileType::Inactive,
            ch if ch.is_whitespace() => TileType::Void,
            _ => return None,
        })
    }

    pub fn parse(symbol: char, (x, y): (i32, i32)) -> Result<TileType> {
        TileType::from_symbol(symbol).ok_or(Error::UnknownTile { symbol, x, y })
    }

    pub fn symbol(&self) -> char {
        match self {
            TileType::Entrance => 'b',
            TileType::Exit => 'e',
            TileType::Gate(n) => (b'0' + n) as char,
            TileType::Blank => '.',
            TileType::BlankAlt => ',',
            TileType::Void => ' ',
            TileType::Cracked => 'x',
            TileType::Ice => 's',
            TileType::Teleporter => 't',
            TileType::Button => 'o',
            TileType::Active => '/',
            TileType::Inactive => '\\',
        }
    }

    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            TileType::Entrance | TileType::Exit => (240, 240, 240),
            TileType::Gate(_) => (230, 200, 120),
            TileType::Blank => (110, 170, 80),
            TileType::BlankAlt => (220, 200, 150),
            TileType::Void => (0, 0, 0),
            TileType::Cracked => (150, 120, 90),
            TileType::Ice => (180, 220, 250),
            TileType::Teleporter => (160, 90, 220),
            TileType::Button => (220, 70, 60),
            TileType::Active => (70, 120, 220),
            TileType::Inactive => (60, 60, 90),
        }
    }

    pub fn model(&self) -> Option<String> {
        let name = match self {
            TileType::Void => return None,
            TileType::Entrance | TileType::Exit => "tile-d6-blank".to_string(),
            TileType::Gate(n) => format!("tile-d6-{}", n),
            TileType::Blank => "tile-grass-blank".to_string(),
            TileType::BlankAlt => "tile-sand-blank".to_string(),
            TileType::Cracked => "tile-cracked".to_string(),
            TileType::Ice => "tile-ice".to_string(),
            TileType::Teleporter => "tile-teleporter".to_string(),
            TileType::Button => "tile-button".to_string(),
            TileType::Active => "tile-gate-active".to_string(),
            TileType::Inactive => "tile-gate-inactive".to_string(),
        };
        Some(name)
    }

    pub fn is_passable(&self, bottom_face: u8, toggled: bool) -> bool {
        is_passable(*self, bottom_face, toggled)
    }
}

/// Whether a die with `bottom_face` down may enter a tile. Shared by live play
/// and the solver so that solved move counts are achievable in play.
pub fn is_passable(tile: TileType, bottom_face: u8, toggled: bool) -> bool {
    match tile {
        TileType::Void => false,
        TileType::Gate(n) => bottom_face == n,
        TileType::Active => !toggled,
        TileType::Inactive => toggled,
        TileType::Entrance
        | TileType::Exit
        | TileType::Blank
        | TileType::BlankAlt
        | TileType::Cracked
        | TileType::Ice
        | TileType::Teleporter
        | TileType::Button => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gates_need_matching_bottom_face() {
        for n in 1..=6 {
            for bottom in 1..=6 {
                for toggled in [false, true] {
                    assert_eq!(
                        is_passable(TileType::Gate(n), bottom, toggled),
                        bottom == n
                    );
                }
            }
        }
    }

    #[test]
    fn toggle_gates_are_inverses() {
        for toggled in [false, true] {
            for bottom in 1..=6 {
                assert_eq!(is_passable(TileType::Active, bottom, toggled), !toggled);
                assert_eq!(is_passable(TileType::Inactive, bottom, toggled), toggled);
            }
        }
    }

    #[test]
    fn void_is_never_passable() {
        for bottom in 1..=6 {
            assert!(!TileType::Void.is_passable(bottom, false));
            assert!(!TileType::Void.is_passable(bottom, true));
        }
    }

    #[test]
    fn plain_tiles_are_always_passable() {
        for tile in [
            TileType::Entrance,
            TileType::Exit,
            TileType::Blank,
            TileType::BlankAlt,
            TileType::Cracked,
            TileType::Ice,
            TileType::Teleporter,
            TileType::Button,
        ] {
            for bottom in 1..=6 {
                assert!(tile.is_passable(bottom, false));
                assert!(tile.is_passable(bottom, true));
            }
        }
    }

    #[test]
    fn symbols_map_back() {
        for ch in "be123456.,xsto/\\ ".chars() {
            let tile = TileType::from_symbol(ch).unwrap();
            assert_eq!(tile.symbol(), ch);
        }
        assert_eq!(TileType::from_symbol('\t'), Some(TileType::Void));
    }

    #[test]
    fn unknown_symbol_reports_position() {
        assert_eq!(
            TileType::parse('+', (3, 1)),
            Err(Error::UnknownTile {
                symbol: '+',
                x: 3,
                y: 1
            })
        );
    }

    #[test]
    fn only_void_has_no_model() {
        assert_eq!(TileType::Void.model(), None);
        assert_eq!(TileType::Gate(4).model().unwrap(), "tile-d6-4");
    }
}
