//! Segment identifiers, mesh groups and per-tile visibility sets
//!
//! Every tile mesh is authored as eight compass octants ("segments") in six
//! alternative layers ("mesh groups"). Visibility is a bitset of segments per
//! group.

use crate::spatial::direction::Direction;
use bitvec::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of segments in a tile mesh
pub const SEGMENT_COUNT: usize = 8;

/// Number of mesh groups layered on a tile
pub const MESH_GROUP_COUNT: usize = 6;

/// Compass octant of a tile mesh, clockwise from north
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SegmentId {
    /// North face, east half
    #[serde(rename = "NNE")]
    Nne,
    /// East face, north half
    #[serde(rename = "NEE")]
    Nee,
    /// East face, south half
    #[serde(rename = "SEE")]
    See,
    /// South face, east half
    #[serde(rename = "SSE")]
    Sse,
    /// South face, west half
    #[serde(rename = "SSW")]
    Ssw,
    /// West face, south half
    #[serde(rename = "SWW")]
    Sww,
    /// West face, north half
    #[serde(rename = "NWW")]
    Nww,
    /// North face, west half
    #[serde(rename = "NNW")]
    Nnw,
}

impl SegmentId {
    /// All segments in clockwise order from north
    pub const ALL: [Self; SEGMENT_COUNT] = [
        Self::Nne,
        Self::Nee,
        Self::See,
        Self::Sse,
        Self::Ssw,
        Self::Sww,
        Self::Nww,
        Self::Nnw,
    ];

    /// Position of this segment in [`SegmentId::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Segment at a clockwise position, wrapping modulo eight
    pub const fn from_index(index: usize) -> Self {
        match index % SEGMENT_COUNT {
            0 => Self::Nne,
            1 => Self::Nee,
            2 => Self::See,
            3 => Self::Sse,
            4 => Self::Ssw,
            5 => Self::Sww,
            6 => Self::Nww,
            _ => Self::Nnw,
        }
    }

    /// Rotate clockwise by a number of quarter turns
    pub const fn rotated(self, quarter_turns: usize) -> Self {
        Self::from_index(self.index() + 2 * (quarter_turns % 4))
    }

    /// Cardinal face the segment lies on
    pub const fn face(self) -> Direction {
        match self {
            Self::Nne | Self::Nnw => Direction::North,
            Self::Nee | Self::See => Direction::East,
            Self::Sse | Self::Ssw => Direction::South,
            Self::Sww | Self::Nww => Direction::West,
        }
    }

    /// Tile corner whose quadrant contains the segment
    pub const fn corner(self) -> Direction {
        match self {
            Self::Nne | Self::Nee => Direction::NorthEast,
            Self::See | Self::Sse => Direction::SouthEast,
            Self::Ssw | Self::Sww => Direction::SouthWest,
            Self::Nww | Self::Nnw => Direction::NorthWest,
        }
    }

    /// Upper-case compass label such as `NNE`
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nne => "NNE",
            Self::Nee => "NEE",
            Self::See => "SEE",
            Self::Sse => "SSE",
            Self::Ssw => "SSW",
            Self::Sww => "SWW",
            Self::Nww => "NWW",
            Self::Nnw => "NNW",
        }
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Alternative visual treatment layered on a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MeshGroup {
    /// The shape itself, only shown with full detail
    Core,
    /// Flush face against a solid neighbour
    Cladding1,
    /// Exposed end of a prism hypotenuse
    Cladding2,
    /// Unconditional cap over the middle of a prism hypotenuse
    Cladding3,
    /// Wrap around a corner
    Cladding4,
    /// Hypotenuse end meeting a solid neighbour
    Cladding5,
}

impl MeshGroup {
    /// All groups in layer order
    pub const ALL: [Self; MESH_GROUP_COUNT] = [
        Self::Core,
        Self::Cladding1,
        Self::Cladding2,
        Self::Cladding3,
        Self::Cladding4,
        Self::Cladding5,
    ];

    /// Position of this group in [`MeshGroup::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MeshGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Set of visible segments within one mesh group
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentSet {
    bits: BitArray<[u8; 1], Lsb0>,
}

impl Default for SegmentSet {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentSet {
    /// Set with no segments
    pub fn new() -> Self {
        Self {
            bits: BitArray::new([0]),
        }
    }

    /// Set with every segment
    pub fn all() -> Self {
        Self {
            bits: BitArray::new([u8::MAX]),
        }
    }

    /// Add a segment, returning false if it was already present
    pub fn insert(&mut self, segment: SegmentId) -> bool {
        let present = self.contains(segment);
        self.bits.set(segment.index(), true);
        !present
    }

    /// Test segment membership
    pub fn contains(&self, segment: SegmentId) -> bool {
        self.bits.get(segment.index()).as_deref() == Some(&true)
    }

    /// Remove every segment
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Test if no segments are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count segments in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Segments in clockwise order
    pub fn iter(&self) -> impl Iterator<Item = SegmentId> + '_ {
        self.bits.iter_ones().map(SegmentId::from_index)
    }

    /// The same set turned clockwise by a number of quarter turns
    #[must_use]
    pub fn rotated(&self, quarter_turns: usize) -> Self {
        let mut rotated = Self::new();
        for segment in self.iter() {
            rotated.insert(segment.rotated(quarter_turns));
        }
        rotated
    }
}

impl FromIterator<SegmentId> for SegmentSet {
    fn from_iter<I: IntoIterator<Item = SegmentId>>(iter: I) -> Self {
        let mut set = Self::new();
        for segment in iter {
            set.insert(segment);
        }
        set
    }
}

impl fmt::Debug for SegmentSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Visible segments of one tile across all mesh groups
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SegmentVisibility {
    groups: [SegmentSet; MESH_GROUP_COUNT],
}

impl SegmentVisibility {
    /// Visibility with every group cleared
    pub fn new() -> Self {
        Self {
            groups: [SegmentSet::new(); MESH_GROUP_COUNT],
        }
    }

    /// Hide every segment of every group
    pub fn disable_all(&mut self) {
        for set in &mut self.groups {
            set.clear();
        }
    }

    /// Show a segment in a group
    ///
    /// Resolution never shows the same segment twice in one group between resets.
    pub fn show(&mut self, group: MeshGroup, segment: SegmentId) {
        if let Some(set) = self.groups.get_mut(group.index()) {
            let inserted = set.insert(segment);
            debug_assert!(inserted, "{segment} shown twice in {group}");
        }
    }

    /// Show all eight segments of a group
    pub fn enable_all(&mut self, group: MeshGroup) {
        if let Some(set) = self.groups.get_mut(group.index()) {
            *set = SegmentSet::all();
        }
    }

    /// Test whether a segment is shown in a group
    pub fn is_visible(&self, group: MeshGroup, segment: SegmentId) -> bool {
        self.group(group).contains(segment)
    }

    /// Visible segments of one group
    pub fn group(&self, group: MeshGroup) -> SegmentSet {
        self.groups.get(group.index()).copied().unwrap_or_default()
    }

    /// Groups with their visible segments, in layer order
    pub fn iter(&self) -> impl Iterator<Item = (MeshGroup, SegmentSet)> + '_ {
        MeshGroup::ALL.into_iter().zip(self.groups.iter().copied())
    }

    /// Groups showing a given segment, in layer order
    pub fn groups_showing(&self, segment: SegmentId) -> impl Iterator<Item = MeshGroup> + '_ {
        self.iter()
            .filter(move |(_, set)| set.contains(segment))
            .map(|(group, _)| group)
    }

    /// Test if nothing is visible in any group
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(SegmentSet::is_empty)
    }

    /// Total number of visible (group, segment) pairs
    pub fn total_visible(&self) -> usize {
        self.groups.iter().map(SegmentSet::count).sum()
    }

    /// The same visibility turned clockwise by a number of quarter turns
    #[must_use]
    pub fn rotated(&self, quarter_turns: usize) -> Self {
        let mut rotated = *self;
        for set in &mut rotated.groups {
            *set = set.rotated(quarter_turns);
        }
        rotated
    }
}

impl fmt::Debug for SegmentVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().filter(|(_, set)| !set.is_empty()))
            .finish()
    }
}
