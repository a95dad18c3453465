//! User placement container and horizontal bounds
//!
//! A level holds the sparse shapes a user has placed, at most one per
//! coordinate. Placement is confined to a margin around the existing tiles so
//! that a level grows outward from where work already happened.

use crate::algorithm::completion::{GeneratedTiles, complete_and_resolve};
use crate::algorithm::resolution::ResolveOptions;
use crate::io::configuration::GRID_BOUNDARY;
use crate::io::error::{Result, TilingError};
use crate::spatial::coordinate::GridCoordinate;
use crate::spatial::tiles::{TileKind, UserPlacement};
use std::collections::{BTreeSet, HashMap};

/// Axis-aligned horizontal bounds over `[x, z]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum coordinates (inclusive)
    pub min: [i32; 2],
    /// Maximum coordinates (inclusive)
    pub max: [i32; 2],
}

impl BoundingBox {
    /// Smallest box holding every coordinate, `None` for no coordinates
    pub fn enclosing(coordinates: impl IntoIterator<Item = GridCoordinate>) -> Option<Self> {
        coordinates.into_iter().fold(None, |bounds, coordinate| {
            let point = [coordinate.x, coordinate.z];
            Some(match bounds {
                None => Self {
                    min: point,
                    max: point,
                },
                Some(Self { min, max }) => Self {
                    min: [min[0].min(point[0]), min[1].min(point[1])],
                    max: [max[0].max(point[0]), max[1].max(point[1])],
                },
            })
        })
    }

    /// Check if a position is within the bounds
    pub const fn contains(&self, pos: [i32; 2]) -> bool {
        pos[0] >= self.min[0]
            && pos[0] <= self.max[0]
            && pos[1] >= self.min[1]
            && pos[1] <= self.max[1]
    }

    /// The box grown by a margin on every side
    #[must_use]
    pub const fn grown(&self, margin: i32) -> Self {
        Self {
            min: [self.min[0] - margin, self.min[1] - margin],
            max: [self.max[0] + margin, self.max[1] + margin],
        }
    }

    /// Number of cells along x
    pub const fn width(&self) -> u32 {
        self.max[0].abs_diff(self.min[0]) + 1
    }

    /// Number of cells along z
    pub const fn depth(&self) -> u32 {
        self.max[1].abs_diff(self.min[1]) + 1
    }
}

/// Sparse set of user placements
#[derive(Debug, Clone, Default)]
pub struct Level {
    placements: Vec<UserPlacement>,
    index: HashMap<GridCoordinate, usize>,
}

impl Level {
    /// Create an empty level
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a shape inside the placement area
    ///
    /// Returns `Ok(false)` without changing anything when the coordinate is
    /// already occupied; the existing tile stays authoritative.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The kind is not one a user can place
    /// - The coordinate lies outside the placement area
    pub fn place(&mut self, coordinate: GridCoordinate, kind: TileKind) -> Result<bool> {
        let placement = UserPlacement::new(coordinate, kind)?;
        if !self.accepts(coordinate) {
            return Err(TilingError::OutsidePlacementArea { coordinate });
        }
        Ok(self.insert(placement))
    }

    /// Place a shape anywhere, as when loading a saved level
    ///
    /// Returns `Ok(false)` when the coordinate is already occupied.
    ///
    /// # Errors
    ///
    /// Returns an error if the kind is not one a user can place
    pub fn place_unbounded(&mut self, coordinate: GridCoordinate, kind: TileKind) -> Result<bool> {
        let placement = UserPlacement::new(coordinate, kind)?;
        Ok(self.insert(placement))
    }

    fn insert(&mut self, placement: UserPlacement) -> bool {
        let coordinate = placement.coordinate();
        if self.index.contains_key(&coordinate) {
            return false;
        }
        self.index.insert(coordinate, self.placements.len());
        self.placements.push(placement);
        true
    }

    /// Remove the shape at a coordinate
    pub fn remove(&mut self, coordinate: GridCoordinate) -> Option<UserPlacement> {
        let position = self.index.remove(&coordinate)?;
        let removed = self.placements.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    /// Shape at a coordinate
    pub fn get(&self, coordinate: GridCoordinate) -> Option<&UserPlacement> {
        self.index
            .get(&coordinate)
            .and_then(|&position| self.placements.get(position))
    }

    /// Whether a new shape may go at a coordinate
    ///
    /// Anything goes in an empty level. Otherwise the coordinate must lie
    /// strictly inside the placed tiles' bounds grown by `GRID_BOUNDARY + 1`,
    /// on any layer.
    pub fn accepts(&self, coordinate: GridCoordinate) -> bool {
        self.bounds().is_none_or(|bounds| {
            bounds
                .grown(GRID_BOUNDARY)
                .contains([coordinate.x, coordinate.z])
        })
    }

    /// Placements in insertion order
    pub fn placements(&self) -> &[UserPlacement] {
        &self.placements
    }

    /// Number of placements
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Test if nothing has been placed
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Horizontal extent of the placements
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::enclosing(self.placements.iter().map(UserPlacement::coordinate))
    }

    /// Distinct vertical layers in ascending order
    pub fn layers(&self) -> Vec<i32> {
        self.placements
            .iter()
            .map(|placement| placement.coordinate().y)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Regenerate the full tile set for this level
    pub fn complete_and_resolve(&self, options: ResolveOptions) -> GeneratedTiles {
        complete_and_resolve(&self.placements, options)
    }
}
