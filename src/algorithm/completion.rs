//! Grid completion: wrap user tiles in cladding and resolve every tile
//!
//! The pass is a full regeneration. It copies the user placements, adds one
//! cladding tile to every empty cell in the eight-neighbour ring around them,
//! records each tile's neighbour kinds from the finished set and finally
//! resolves segment visibility for all of them.

use crate::algorithm::classification::Neighbourhood;
use crate::algorithm::resolution::ResolveOptions;
use crate::spatial::coordinate::GridCoordinate;
use crate::spatial::grid::BoundingBox;
use crate::spatial::tiles::{InternalTileRecord, TileKind, UserPlacement};
use log::{debug, warn};
use std::collections::{BTreeSet, HashMap};

/// Completed and resolved tile set
///
/// Records are kept in a stable order: user tiles in placement order, then
/// cladding tiles in the order they were discovered. A coordinate index
/// backs neighbour lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedTiles {
    tiles: Vec<InternalTileRecord>,
    index: HashMap<GridCoordinate, usize>,
    user_tile_count: usize,
}

/// Run the whole pipeline over a set of user placements
///
/// When two placements share a coordinate the first one wins.
pub fn complete_and_resolve(
    placements: &[UserPlacement],
    options: ResolveOptions,
) -> GeneratedTiles {
    let mut generated = GeneratedTiles::from_placements(placements);
    generated.add_cladding_ring();
    generated.assign_neighbours();
    generated.resolve_all(options);

    debug!(
        "Completed {} user tiles with {} cladding tiles (full detail: {})",
        generated.user_tile_count(),
        generated.cladding_tile_count(),
        options.full_detail
    );

    generated
}

impl GeneratedTiles {
    fn from_placements(placements: &[UserPlacement]) -> Self {
        let mut generated = Self {
            tiles: Vec::with_capacity(placements.len() * 3),
            index: HashMap::with_capacity(placements.len() * 3),
            user_tile_count: 0,
        };

        for placement in placements {
            if generated.insert(InternalTileRecord::from_placement(placement)) {
                generated.user_tile_count += 1;
            } else {
                warn!(
                    "Dropping {} at {}: coordinate already occupied",
                    placement.kind(),
                    placement.coordinate()
                );
            }
        }

        generated
    }

    // Keeps the existing record when the coordinate is taken
    fn insert(&mut self, record: InternalTileRecord) -> bool {
        let coordinate = record.coordinate();
        if self.index.contains_key(&coordinate) {
            return false;
        }
        self.index.insert(coordinate, self.tiles.len());
        self.tiles.push(record);
        true
    }

    fn add_cladding_ring(&mut self) {
        let user_coordinates: Vec<GridCoordinate> = self
            .tiles
            .iter()
            .map(InternalTileRecord::coordinate)
            .collect();

        for coordinate in user_coordinates {
            for (_, neighbour) in coordinate.neighbours() {
                self.insert(InternalTileRecord::cladding(neighbour));
            }
        }
    }

    fn assign_neighbours(&mut self) {
        let neighbourhoods: Vec<Neighbourhood> = self
            .tiles
            .iter()
            .map(|tile| {
                Neighbourhood::from_fn(|direction| {
                    self.kind_at(tile.coordinate().offset(direction))
                })
            })
            .collect();

        for (tile, neighbourhood) in self.tiles.iter_mut().zip(neighbourhoods) {
            tile.set_neighbours(neighbourhood);
        }
    }

    fn resolve_all(&mut self, options: ResolveOptions) {
        for tile in &mut self.tiles {
            tile.refresh_segments(options);
        }
    }

    /// Record at a coordinate
    pub fn get(&self, coordinate: GridCoordinate) -> Option<&InternalTileRecord> {
        self.index
            .get(&coordinate)
            .and_then(|&position| self.tiles.get(position))
    }

    /// Kind at a coordinate, `Unassigned` when empty
    pub fn kind_at(&self, coordinate: GridCoordinate) -> TileKind {
        self.get(coordinate)
            .map_or(TileKind::Unassigned, InternalTileRecord::kind)
    }

    /// All records in generation order
    pub fn records(&self) -> &[InternalTileRecord] {
        &self.tiles
    }

    /// Iterate over all records in generation order
    pub fn iter(&self) -> impl Iterator<Item = &InternalTileRecord> + '_ {
        self.tiles.iter()
    }

    /// Records on one vertical layer
    pub fn layer(&self, y: i32) -> impl Iterator<Item = &InternalTileRecord> + '_ {
        self.tiles
            .iter()
            .filter(move |tile| tile.coordinate().y == y)
    }

    /// Distinct vertical layers in ascending order
    pub fn layers(&self) -> Vec<i32> {
        self.tiles
            .iter()
            .map(|tile| tile.coordinate().y)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Test if there are no records
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of records copied from user placements
    pub const fn user_tile_count(&self) -> usize {
        self.user_tile_count
    }

    /// Number of synthesized cladding records
    pub fn cladding_tile_count(&self) -> usize {
        self.tiles.len() - self.user_tile_count
    }

    /// Horizontal extent of all records, cladding included
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::enclosing(self.tiles.iter().map(InternalTileRecord::coordinate))
    }
}
