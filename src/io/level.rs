//! JSON level files holding user placements
//!
//! ```json
//! { "placements": [ { "x": 0, "y": 0, "z": 0, "kind": "Cuboid" } ] }
//! ```

use crate::io::error::{Result, TilingError, file_system_error};
use crate::spatial::coordinate::GridCoordinate;
use crate::spatial::grid::Level;
use crate::spatial::tiles::{TileKind, UserPlacement};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One placement as stored on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementEntry {
    /// East-west position
    pub x: i32,
    /// Vertical layer
    pub y: i32,
    /// North-south position
    pub z: i32,
    /// Shape placed there
    pub kind: TileKind,
}

impl From<&UserPlacement> for PlacementEntry {
    fn from(placement: &UserPlacement) -> Self {
        let GridCoordinate { x, y, z } = placement.coordinate();
        Self {
            x,
            y,
            z,
            kind: placement.kind(),
        }
    }
}

/// Serialized form of a [`Level`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelFile {
    /// Placements in insertion order
    pub placements: Vec<PlacementEntry>,
}

impl LevelFile {
    /// Capture a level's placements
    pub fn from_level(level: &Level) -> Self {
        Self {
            placements: level.placements().iter().map(PlacementEntry::from).collect(),
        }
    }

    /// Rebuild a level, keeping the first of any duplicate coordinates
    ///
    /// Files may be sparse, so the placement-area margin is not enforced.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry holds a kind the user cannot place
    pub fn into_level(self) -> Result<Level> {
        let mut level = Level::new();
        for entry in self.placements {
            let coordinate = GridCoordinate::new(entry.x, entry.y, entry.z);
            if !level.place_unbounded(coordinate, entry.kind)? {
                warn!(
                    "Ignoring duplicate {} at {coordinate}: coordinate already occupied",
                    entry.kind
                );
            }
        }
        Ok(level)
    }
}

/// Read a level from a JSON file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The contents are not a valid level
/// - A placement holds a kind the user cannot place
pub fn load_level(path: &Path) -> Result<Level> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| file_system_error(path, "read level", source))?;
    let file: LevelFile =
        serde_json::from_str(&text).map_err(|source| TilingError::LevelLoad {
            path: path.to_path_buf(),
            source,
        })?;
    file.into_level()
}

/// Write a level to a JSON file, creating parent directories
///
/// # Errors
///
/// Returns an error if the level cannot be serialized or written
pub fn save_level(level: &Level, path: &Path) -> Result<()> {
    write_json(&LevelFile::from_level(level), path)
}

/// Pretty-print any serializable value to a file, creating parent directories
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(|source| TilingError::JsonExport {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|source| file_system_error(parent, "create directory", source))?;
    }

    std::fs::write(path, text).map_err(|source| file_system_error(path, "write", source))
}
