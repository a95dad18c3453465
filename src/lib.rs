//! Autotiling engine that wraps sparse block placements in cladding
//!
//! User placements are closed under a one-cell ring of cladding tiles, every
//! tile records the kinds of its eight horizontal neighbours, and a fixed
//! rule table decides which mesh segments each tile shows so that visible
//! surfaces appear only where solid geometry meets open space.

#![forbid(unsafe_code)]

/// Segment resolution rules and grid completion
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Grid coordinates, directions and tile records
pub mod spatial;

pub use algorithm::completion::{GeneratedTiles, complete_and_resolve};
pub use algorithm::resolution::{ResolveOptions, resolve_single};
pub use algorithm::segments::{MeshGroup, SegmentId, SegmentVisibility};
pub use io::error::{Result, TilingError};
pub use spatial::{Direction, GridCoordinate, TileKind, UserPlacement};
