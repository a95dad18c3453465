//! Segment rule tables
//!
//! Each tile kind is described by one table written for a single canonical
//! orientation. The other orientations are produced by turning every segment
//! and every direction in the table clockwise together, which is what keeps
//! the four prism orientations and the four cladding quadrants consistent.

use crate::algorithm::classification::Neighbourhood;
use crate::algorithm::resolution::ResolveOptions;
use crate::algorithm::segments::{MeshGroup, SegmentId, SegmentVisibility};
use crate::spatial::direction::Direction;

/// How one segment chooses its mesh group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentRule {
    /// Part of the shape itself, shown in `Core` with full detail only
    Core,
    /// End of a prism hypotenuse
    ///
    /// `Cladding5` when the neighbour just past it is solid, `Cladding2` otherwise.
    Flank {
        /// Cardinal neighbour beyond the end of the hypotenuse
        neighbour: Direction,
    },
    /// Middle of a prism hypotenuse
    ///
    /// Always `Cladding3`, plus `Cladding1` when the primary neighbour is solid
    /// or else `Cladding4` when the secondary neighbour is solid.
    Cap {
        /// Cardinal neighbour on the face the segment lies on
        primary: Direction,
        /// The other cardinal neighbour of the segment's quadrant
        secondary: Direction,
    },
    /// Boundary filler octant
    ///
    /// `Cladding1` when the primary neighbour is solid; otherwise `Cladding4`
    /// when the secondary or corner neighbour is solid or a prism tip meets the
    /// corner from either cardinal side. The first matching branch wins.
    Wrap {
        /// Cardinal neighbour on the face the segment lies on
        primary: Direction,
        /// The other cardinal neighbour of the segment's quadrant
        secondary: Direction,
        /// Diagonal neighbour at the segment's quadrant corner
        corner: Direction,
    },
}

/// North-east quadrant of a cladding tile
pub const CLADDING_QUADRANT: [(SegmentId, SegmentRule); 2] = [
    (
        SegmentId::Nne,
        SegmentRule::Wrap {
            primary: Direction::North,
            secondary: Direction::East,
            corner: Direction::NorthEast,
        },
    ),
    (
        SegmentId::Nee,
        SegmentRule::Wrap {
            primary: Direction::East,
            secondary: Direction::North,
            corner: Direction::NorthEast,
        },
    ),
];

/// Prism with its right angle to the north-west
///
/// The legs run along the north and west faces; the hypotenuse faces south-east.
pub const NORTH_WEST_PRISM: [(SegmentId, SegmentRule); 8] = [
    (SegmentId::Nne, SegmentRule::Core),
    (
        SegmentId::Nee,
        SegmentRule::Flank {
            neighbour: Direction::East,
        },
    ),
    (
        SegmentId::See,
        SegmentRule::Cap {
            primary: Direction::East,
            secondary: Direction::South,
        },
    ),
    (
        SegmentId::Sse,
        SegmentRule::Cap {
            primary: Direction::South,
            secondary: Direction::East,
        },
    ),
    (
        SegmentId::Ssw,
        SegmentRule::Flank {
            neighbour: Direction::South,
        },
    ),
    (SegmentId::Sww, SegmentRule::Core),
    (SegmentId::Nww, SegmentRule::Core),
    (SegmentId::Nnw, SegmentRule::Core),
];

impl SegmentRule {
    /// The same rule with every direction turned clockwise
    pub const fn rotated(self, quarter_turns: usize) -> Self {
        match self {
            Self::Core => Self::Core,
            Self::Flank { neighbour } => Self::Flank {
                neighbour: neighbour.rotated(quarter_turns),
            },
            Self::Cap { primary, secondary } => Self::Cap {
                primary: primary.rotated(quarter_turns),
                secondary: secondary.rotated(quarter_turns),
            },
            Self::Wrap {
                primary,
                secondary,
                corner,
            } => Self::Wrap {
                primary: primary.rotated(quarter_turns),
                secondary: secondary.rotated(quarter_turns),
                corner: corner.rotated(quarter_turns),
            },
        }
    }

    /// Show the segment in whichever groups the rule selects
    pub fn apply(
        self,
        segment: SegmentId,
        neighbours: &Neighbourhood,
        options: ResolveOptions,
        visibility: &mut SegmentVisibility,
    ) {
        match self {
            Self::Core => {
                if options.full_detail {
                    visibility.show(MeshGroup::Core, segment);
                }
            }
            Self::Flank { neighbour } => {
                if neighbours.is_solid(neighbour) {
                    visibility.show(MeshGroup::Cladding5, segment);
                } else {
                    visibility.show(MeshGroup::Cladding2, segment);
                }
            }
            Self::Cap { primary, secondary } => {
                visibility.show(MeshGroup::Cladding3, segment);
                if neighbours.is_solid(primary) {
                    visibility.show(MeshGroup::Cladding1, segment);
                } else if neighbours.is_solid(secondary) {
                    visibility.show(MeshGroup::Cladding4, segment);
                }
            }
            Self::Wrap {
                primary,
                secondary,
                corner,
            } => {
                if neighbours.is_solid(primary) {
                    visibility.show(MeshGroup::Cladding1, segment);
                } else if neighbours.is_solid(secondary)
                    || neighbours.is_solid(corner)
                    || neighbours.tip_meets(primary, corner)
                    || neighbours.tip_meets(secondary, corner)
                {
                    visibility.show(MeshGroup::Cladding4, segment);
                }
            }
        }
    }
}

/// Turn a table clockwise, moving segments and directions together
pub fn rotate_table(
    table: &[(SegmentId, SegmentRule)],
    quarter_turns: usize,
) -> impl Iterator<Item = (SegmentId, SegmentRule)> + '_ {
    table.iter().map(move |&(segment, rule)| {
        (
            segment.rotated(quarter_turns),
            rule.rotated(quarter_turns),
        )
    })
}

/// All eight cladding tile rules, clockwise from `NNE`
pub fn cladding_rules() -> impl Iterator<Item = (SegmentId, SegmentRule)> {
    (0..4).flat_map(|quarter_turns| rotate_table(&CLADDING_QUADRANT, quarter_turns))
}

/// All eight rules for a prism turned clockwise from the north-west orientation
pub fn prism_rules(quarter_turns: usize) -> impl Iterator<Item = (SegmentId, SegmentRule)> {
    rotate_table(&NORTH_WEST_PRISM, quarter_turns)
}
