//! Neighbour classification predicates
//!
//! A tile only ever looks at the kinds of its eight same-layer neighbours.
//! From those kinds it asks two questions: does the neighbour present a flush
//! face toward this tile ("solid"), and does a cardinal neighbour touch this
//! tile with nothing but the sharp end of a prism ("tip meets").

use crate::spatial::direction::{DIRECTION_COUNT, Direction};
use crate::spatial::tiles::TileKind;

/// Kinds of the eight cells surrounding a tile, indexed by [`Direction`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Neighbourhood {
    kinds: [TileKind; DIRECTION_COUNT],
}

impl Neighbourhood {
    /// Neighbourhood from kinds listed clockwise from north
    pub const fn new(kinds: [TileKind; DIRECTION_COUNT]) -> Self {
        Self { kinds }
    }

    /// Neighbourhood with every cell holding the same kind
    pub const fn uniform(kind: TileKind) -> Self {
        Self::new([kind; DIRECTION_COUNT])
    }

    /// Neighbourhood built by asking for the kind in each direction
    pub fn from_fn(mut kind_at: impl FnMut(Direction) -> TileKind) -> Self {
        Self::new(Direction::ALL.map(&mut kind_at))
    }

    /// Replace the kind in one direction
    #[must_use]
    pub fn with(mut self, direction: Direction, kind: TileKind) -> Self {
        if let Some(slot) = self.kinds.get_mut(direction.index()) {
            *slot = kind;
        }
        self
    }

    /// Kind of the neighbour in a direction
    pub fn kind(&self, direction: Direction) -> TileKind {
        self.kinds
            .get(direction.index())
            .copied()
            .unwrap_or(TileKind::Unassigned)
    }

    /// Kinds listed clockwise from north
    pub const fn kinds(&self) -> &[TileKind; DIRECTION_COUNT] {
        &self.kinds
    }

    /// The whole neighbourhood turned clockwise by a number of quarter turns
    ///
    /// Both the cells and the prism orientations inside them turn, so the
    /// neighbour that was east ends up south and faces the tile the same way.
    #[must_use]
    pub fn rotated(&self, quarter_turns: usize) -> Self {
        Self::from_fn(|direction| {
            self.kind(direction.rotated(4 - quarter_turns % 4))
                .rotated(quarter_turns)
        })
    }

    /// Whether the neighbour in a direction presents a flush face to this tile
    ///
    /// A cardinal neighbour is solid when it is a cuboid or a prism with a leg
    /// on the side facing back. A diagonal neighbour is solid when it is a
    /// cuboid or any prism whose right angle does not point straight away.
    pub fn is_solid(&self, direction: Direction) -> bool {
        let kind = self.kind(direction);
        match kind {
            TileKind::Cuboid => true,
            TileKind::Unassigned | TileKind::CladdingTile => false,
            _ => kind.right_angle().is_some_and(|corner| {
                if direction.is_cardinal() {
                    corner.cardinals_of().contains(&direction.opposite())
                } else {
                    corner != direction
                }
            }),
        }
    }

    /// Whether the cardinal neighbour in `direction` touches this tile only at `corner`
    ///
    /// That happens exactly when the neighbour is the prism whose right angle is
    /// the shared corner: its hypotenuse then ends on this tile's corner and
    /// the rest of the shared edge is open.
    pub fn tip_meets(&self, direction: Direction, corner: Direction) -> bool {
        direction.is_cardinal()
            && corner.cardinals_of().contains(&direction)
            && self.kind(direction).right_angle() == Some(corner)
    }

    /// North neighbour is solid
    pub fn is_northern_solid(&self) -> bool {
        self.is_solid(Direction::North)
    }

    /// East neighbour is solid
    pub fn is_eastern_solid(&self) -> bool {
        self.is_solid(Direction::East)
    }

    /// South neighbour is solid
    pub fn is_southern_solid(&self) -> bool {
        self.is_solid(Direction::South)
    }

    /// West neighbour is solid
    pub fn is_western_solid(&self) -> bool {
        self.is_solid(Direction::West)
    }

    /// North neighbour's tip meets this tile's north-west corner
    pub fn northern_tip_on_left(&self) -> bool {
        self.tip_meets(Direction::North, Direction::NorthWest)
    }

    /// North neighbour's tip meets this tile's north-east corner
    pub fn northern_tip_on_right(&self) -> bool {
        self.tip_meets(Direction::North, Direction::NorthEast)
    }

    /// East neighbour's tip meets this tile's north-east corner
    pub fn eastern_tip_on_top(&self) -> bool {
        self.tip_meets(Direction::East, Direction::NorthEast)
    }

    /// East neighbour's tip meets this tile's south-east corner
    pub fn eastern_tip_on_bottom(&self) -> bool {
        self.tip_meets(Direction::East, Direction::SouthEast)
    }

    /// South neighbour's tip meets this tile's south-west corner
    pub fn southern_tip_on_left(&self) -> bool {
        self.tip_meets(Direction::South, Direction::SouthWest)
    }

    /// South neighbour's tip meets this tile's south-east corner
    pub fn southern_tip_on_right(&self) -> bool {
        self.tip_meets(Direction::South, Direction::SouthEast)
    }

    /// West neighbour's tip meets this tile's north-west corner
    pub fn western_tip_on_top(&self) -> bool {
        self.tip_meets(Direction::West, Direction::NorthWest)
    }

    /// West neighbour's tip meets this tile's south-west corner
    pub fn western_tip_on_bottom(&self) -> bool {
        self.tip_meets(Direction::West, Direction::SouthWest)
    }
}
