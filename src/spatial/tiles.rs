//! Tile kinds and the records that carry them through the tiling pipeline
//!
//! User placements are the sparse input supplied by an editor. Internal tile
//! records are what the completion pass produces: one per user placement plus
//! one synthesized cladding tile per empty neighbouring cell, each knowing the
//! kinds of its eight neighbours and which segments it shows.

use crate::algorithm::classification::Neighbourhood;
use crate::algorithm::resolution::{ResolveOptions, resolve_into};
use crate::algorithm::segments::SegmentVisibility;
use crate::io::configuration::COORDINATE_LIMIT;
use crate::io::error::{Result, TilingError};
use crate::spatial::coordinate::GridCoordinate;
use crate::spatial::direction::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape occupying a grid cell
///
/// Prism orientations are named after the compass direction their right-angled
/// corner points toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileKind {
    /// No tile; what an absent neighbour classifies as
    #[default]
    Unassigned,
    /// Boundary filler synthesized by the completion pass
    CladdingTile,
    /// Full block
    Cuboid,
    /// Prism with its right angle in the north-west corner
    TriangularPrismNW,
    /// Prism with its right angle in the north-east corner
    TriangularPrismNE,
    /// Prism with its right angle in the south-east corner
    TriangularPrismSE,
    /// Prism with its right angle in the south-west corner
    TriangularPrismSW,
}

impl TileKind {
    /// The kinds a user is allowed to place
    pub const USER_KINDS: [Self; 5] = [
        Self::Cuboid,
        Self::TriangularPrismNW,
        Self::TriangularPrismNE,
        Self::TriangularPrismSE,
        Self::TriangularPrismSW,
    ];

    /// Prism whose right angle points toward a diagonal direction
    pub const fn prism(corner: Direction) -> Option<Self> {
        match corner {
            Direction::NorthWest => Some(Self::TriangularPrismNW),
            Direction::NorthEast => Some(Self::TriangularPrismNE),
            Direction::SouthEast => Some(Self::TriangularPrismSE),
            Direction::SouthWest => Some(Self::TriangularPrismSW),
            _ => None,
        }
    }

    /// Corner holding the right angle, for prisms only
    pub const fn right_angle(self) -> Option<Direction> {
        match self {
            Self::TriangularPrismNW => Some(Direction::NorthWest),
            Self::TriangularPrismNE => Some(Direction::NorthEast),
            Self::TriangularPrismSE => Some(Direction::SouthEast),
            Self::TriangularPrismSW => Some(Direction::SouthWest),
            _ => None,
        }
    }

    /// Quarter turns taking a north-west prism onto this orientation
    pub const fn quarter_turns_from_north_west(self) -> Option<usize> {
        match self {
            Self::TriangularPrismNW => Some(0),
            Self::TriangularPrismNE => Some(1),
            Self::TriangularPrismSE => Some(2),
            Self::TriangularPrismSW => Some(3),
            _ => None,
        }
    }

    /// Rotate clockwise; non-prism kinds are unchanged
    pub const fn rotated(self, quarter_turns: usize) -> Self {
        match self.right_angle() {
            Some(corner) => match Self::prism(corner.rotated(quarter_turns)) {
                Some(kind) => kind,
                None => self,
            },
            None => self,
        }
    }

    /// True for the kinds listed in [`TileKind::USER_KINDS`]
    pub const fn is_user_kind(self) -> bool {
        !matches!(self, Self::Unassigned | Self::CladdingTile)
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A shape placed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserPlacement {
    coordinate: GridCoordinate,
    kind: TileKind,
}

impl UserPlacement {
    /// Create a placement, rejecting kinds the user cannot place
    ///
    /// Horizontal components are bounded by [`COORDINATE_LIMIT`], so neighbour
    /// offsets and placement margins around a placement never overflow.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The kind is `Unassigned` or `CladdingTile`
    /// - `x` or `z` lies beyond [`COORDINATE_LIMIT`]
    pub fn new(coordinate: GridCoordinate, kind: TileKind) -> Result<Self> {
        if !kind.is_user_kind() {
            return Err(TilingError::InvalidPlacement { coordinate, kind });
        }
        if coordinate.x.unsigned_abs() > COORDINATE_LIMIT.unsigned_abs()
            || coordinate.z.unsigned_abs() > COORDINATE_LIMIT.unsigned_abs()
        {
            return Err(TilingError::CoordinateOutOfRange { coordinate });
        }
        Ok(Self { coordinate, kind })
    }

    /// Grid cell of the placement
    pub const fn coordinate(&self) -> GridCoordinate {
        self.coordinate
    }

    /// Shape of the placement
    pub const fn kind(&self) -> TileKind {
        self.kind
    }
}

/// Internal representation of one cell of a completed tile set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalTileRecord {
    coordinate: GridCoordinate,
    kind: TileKind,
    neighbours: Neighbourhood,
    segments: SegmentVisibility,
}

impl InternalTileRecord {
    /// Record with no known neighbours and nothing visible
    pub fn new(coordinate: GridCoordinate, kind: TileKind) -> Self {
        Self {
            coordinate,
            kind,
            neighbours: Neighbourhood::default(),
            segments: SegmentVisibility::default(),
        }
    }

    /// Record copied from a user placement
    pub fn from_placement(placement: &UserPlacement) -> Self {
        Self::new(placement.coordinate(), placement.kind())
    }

    /// Synthesized cladding record
    pub fn cladding(coordinate: GridCoordinate) -> Self {
        Self::new(coordinate, TileKind::CladdingTile)
    }

    /// Grid cell of the record
    pub const fn coordinate(&self) -> GridCoordinate {
        self.coordinate
    }

    /// Shape of the record
    pub const fn kind(&self) -> TileKind {
        self.kind
    }

    /// Kinds of the eight surrounding cells
    pub const fn neighbours(&self) -> &Neighbourhood {
        &self.neighbours
    }

    /// Currently visible segments per mesh group
    pub const fn segments(&self) -> &SegmentVisibility {
        &self.segments
    }

    /// Replace the neighbour kinds
    pub const fn set_neighbours(&mut self, neighbours: Neighbourhood) {
        self.neighbours = neighbours;
    }

    /// Clear every mesh group and resolve visibility from the current neighbours
    pub fn refresh_segments(&mut self, options: ResolveOptions) {
        resolve_into(self.kind, &self.neighbours, options, &mut self.segments);
    }
}
