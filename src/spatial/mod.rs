//! Spatial data structures for the tile grid
//!
//! This module contains spatial-related functionality including:
//! - Grid coordinates and compass directions
//! - Tile kinds, user placements and internal tile records
//! - The user placement container and its bounds
//! - Seeded random placement generation

/// Integer grid coordinates
pub mod coordinate;
/// Compass directions and neighbour offsets
pub mod direction;
/// User placement container and bounding boxes
pub mod grid;
/// Seeded random placement generation
pub mod scatter;
/// Tile kinds and tile records
pub mod tiles;

pub use coordinate::GridCoordinate;
pub use direction::Direction;
pub use grid::Level;
pub use tiles::{InternalTileRecord, TileKind, UserPlacement};
