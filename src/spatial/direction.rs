//! Compass directions on the horizontal grid plane
//!
//! Directions are stored in clockwise order starting from north so that a
//! quarter turn is a shift of two positions. North points along +z and east
//! along +x; the vertical layer never changes between neighbours.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of compass directions surrounding a tile
pub const DIRECTION_COUNT: usize = 8;

/// One of the eight compass directions around a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// +z
    North,
    /// +x, +z
    NorthEast,
    /// +x
    East,
    /// +x, -z
    SouthEast,
    /// -z
    South,
    /// -x, -z
    SouthWest,
    /// -x
    West,
    /// -x, +z
    NorthWest,
}

impl Direction {
    /// All directions in clockwise order from north
    pub const ALL: [Self; DIRECTION_COUNT] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// The four cardinal directions in clockwise order from north
    pub const CARDINALS: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The four diagonal directions in clockwise order from north-east
    pub const DIAGONALS: [Self; 4] = [
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
        Self::NorthWest,
    ];

    /// Position of this direction in [`Direction::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction at a clockwise position, wrapping modulo eight
    pub const fn from_index(index: usize) -> Self {
        match index % DIRECTION_COUNT {
            0 => Self::North,
            1 => Self::NorthEast,
            2 => Self::East,
            3 => Self::SouthEast,
            4 => Self::South,
            5 => Self::SouthWest,
            6 => Self::West,
            _ => Self::NorthWest,
        }
    }

    /// Horizontal grid offset as `(dx, dz)`
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::NorthEast => (1, 1),
            Self::East => (1, 0),
            Self::SouthEast => (1, -1),
            Self::South => (0, -1),
            Self::SouthWest => (-1, -1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, 1),
        }
    }

    /// The direction pointing the other way
    pub const fn opposite(self) -> Self {
        self.rotated(2)
    }

    /// Rotate clockwise by a number of quarter turns
    pub const fn rotated(self, quarter_turns: usize) -> Self {
        Self::from_index(self.index() + 2 * (quarter_turns % 4))
    }

    /// True for north, east, south and west
    pub const fn is_cardinal(self) -> bool {
        self.index() % 2 == 0
    }

    /// The two cardinal directions flanking a diagonal, clockwise first
    ///
    /// For a cardinal direction both entries are the direction itself.
    pub const fn cardinals_of(self) -> [Self; 2] {
        if self.is_cardinal() {
            [self, self]
        } else {
            [Self::from_index(self.index() + 7), Self::from_index(self.index() + 1)]
        }
    }

    /// Short compass label such as `NE`
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
