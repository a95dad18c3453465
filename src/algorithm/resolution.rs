//! Segment resolution: from a tile and its neighbours to visible segments
//!
//! Resolution is a pure function of the tile's kind, its eight neighbour
//! kinds and the detail option. Every call starts by hiding everything, then
//! only ever shows segments.

use crate::algorithm::classification::Neighbourhood;
use crate::algorithm::rules::{cladding_rules, prism_rules};
use crate::algorithm::segments::{MeshGroup, SegmentVisibility};
use crate::spatial::direction::DIRECTION_COUNT;
use crate::spatial::tiles::TileKind;

/// Options threaded through resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ResolveOptions {
    /// Show the `Core` shape segments of user tiles
    ///
    /// Off while composing a scene so only the generated cladding is visible.
    pub full_detail: bool,
}

impl ResolveOptions {
    /// Options with the core shapes shown
    pub const fn detailed() -> Self {
        Self { full_detail: true }
    }

    /// Options with the core shapes hidden
    pub const fn simplified() -> Self {
        Self { full_detail: false }
    }
}

/// Resolve the visible segments of a tile
pub fn resolve(
    kind: TileKind,
    neighbours: &Neighbourhood,
    options: ResolveOptions,
) -> SegmentVisibility {
    let mut visibility = SegmentVisibility::new();
    resolve_into(kind, neighbours, options, &mut visibility);
    visibility
}

/// Resolve into an existing visibility, clearing it first
pub fn resolve_into(
    kind: TileKind,
    neighbours: &Neighbourhood,
    options: ResolveOptions,
    visibility: &mut SegmentVisibility,
) {
    visibility.disable_all();

    match kind {
        TileKind::CladdingTile => {
            for (segment, rule) in cladding_rules() {
                rule.apply(segment, neighbours, options, visibility);
            }
        }
        TileKind::Cuboid => {
            if options.full_detail {
                visibility.enable_all(MeshGroup::Core);
            }
        }
        TileKind::TriangularPrismNW
        | TileKind::TriangularPrismNE
        | TileKind::TriangularPrismSE
        | TileKind::TriangularPrismSW => {
            let quarter_turns = kind.quarter_turns_from_north_west().unwrap_or(0);
            for (segment, rule) in prism_rules(quarter_turns) {
                rule.apply(segment, neighbours, options, visibility);
            }
        }
        TileKind::Unassigned => {}
    }
}

/// Resolve a tile whose neighbour kinds are managed by the caller
///
/// `neighbour_kinds` lists the neighbours clockwise from north.
pub fn resolve_single(
    kind: TileKind,
    neighbour_kinds: [TileKind; DIRECTION_COUNT],
    full_detail: bool,
) -> SegmentVisibility {
    resolve(
        kind,
        &Neighbourhood::new(neighbour_kinds),
        ResolveOptions { full_detail },
    )
}
