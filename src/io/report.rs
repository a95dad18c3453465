//! Tiling reports handed to the instantiation layer
//!
//! A report lists every generated tile with its world position and, per mesh
//! group, the segments to enable. Groups with nothing visible are left out.

use crate::algorithm::completion::GeneratedTiles;
use crate::algorithm::segments::{MeshGroup, SegmentId};
use crate::spatial::coordinate::GridCoordinate;
use crate::spatial::direction::Direction;
use crate::spatial::tiles::{InternalTileRecord, TileKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One generated tile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileReport {
    /// Grid cell
    pub coordinate: GridCoordinate,
    /// Position of the cell in world units
    pub world_position: [f32; 3],
    /// Shape of the tile
    pub kind: TileKind,
    /// Kinds of the eight neighbours
    pub neighbours: BTreeMap<Direction, TileKind>,
    /// Visible segments per mesh group
    pub segments: BTreeMap<MeshGroup, Vec<SegmentId>>,
}

impl TileReport {
    /// Describe one record for a given block scale
    pub fn from_record(record: &InternalTileRecord, scale: [f32; 3]) -> Self {
        let neighbours = Direction::ALL
            .into_iter()
            .map(|direction| (direction, record.neighbours().kind(direction)))
            .collect();

        let segments = record
            .segments()
            .iter()
            .filter(|(_, set)| !set.is_empty())
            .map(|(group, set)| (group, set.iter().collect::<Vec<_>>()))
            .collect();

        Self {
            coordinate: record.coordinate(),
            world_position: record.coordinate().to_world(scale),
            kind: record.kind(),
            neighbours,
            segments,
        }
    }
}

/// Whole generated tile set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TilingReport {
    /// Whether core shape segments were resolved
    pub full_detail: bool,
    /// Number of tiles copied from user placements
    pub user_tiles: usize,
    /// Number of synthesized cladding tiles
    pub cladding_tiles: usize,
    /// Number of visible (group, segment) pairs across all tiles
    pub visible_segments: usize,
    /// Every tile in generation order
    pub tiles: Vec<TileReport>,
}

impl TilingReport {
    /// Describe a generated tile set
    pub fn new(generated: &GeneratedTiles, full_detail: bool, scale: [f32; 3]) -> Self {
        Self {
            full_detail,
            user_tiles: generated.user_tile_count(),
            cladding_tiles: generated.cladding_tile_count(),
            visible_segments: generated
                .iter()
                .map(|record| record.segments().total_visible())
                .sum(),
            tiles: generated
                .iter()
                .map(|record| TileReport::from_record(record, scale))
                .collect(),
        }
    }
}
