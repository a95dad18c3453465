//! Tests for the user placement container and bounding boxes

#[cfg(test)]
mod tests {
    use cladtile::TilingError;
    use cladtile::algorithm::resolution::ResolveOptions;
    use cladtile::io::configuration::GRID_BOUNDARY;
    use cladtile::spatial::coordinate::GridCoordinate;
    use cladtile::spatial::grid::{BoundingBox, Level};
    use cladtile::spatial::tiles::TileKind;

    // Tests bounds enclose every coordinate and ignore the layer
    // Verified by using y in place of z
    #[test]
    fn test_bounding_box_enclosing() {
        let bounds = BoundingBox::enclosing([
            GridCoordinate::new(2, 9, -1),
            GridCoordinate::new(-3, 0, 4),
        ]);
        assert_eq!(
            bounds,
            Some(BoundingBox {
                min: [-3, -1],
                max: [2, 4],
            })
        );
        assert_eq!(BoundingBox::enclosing([]), None);
    }

    // Tests inclusive containment and growth
    // Verified by making contains exclusive at max
    #[test]
    fn test_bounding_box_contains_and_grows() {
        let bounds = BoundingBox {
            min: [0, 0],
            max: [1, 2],
        };
        assert!(bounds.contains([1, 2]));
        assert!(!bounds.contains([2, 2]));
        assert_eq!((bounds.width(), bounds.depth()), (2, 3));

        let grown = bounds.grown(2);
        assert!(grown.contains([-2, 4]));
        assert!(!grown.contains([-3, 0]));
        assert_eq!((grown.width(), grown.depth()), (6, 7));
    }

    // Tests an empty level accepts any coordinate
    // Verified by rejecting everything when bounds are None
    #[test]
    fn test_empty_level_accepts_anywhere() {
        let level = Level::new();
        assert!(level.is_empty());
        assert!(level.accepts(GridCoordinate::new(1000, -4, -1000)));
    }

    // Tests the placement area margin around existing tiles
    // Verified by growing the bounds by one less cell
    #[test]
    fn test_placement_area_margin() -> cladtile::Result<()> {
        let mut level = Level::new();
        assert!(level.place(GridCoordinate::ZERO, TileKind::Cuboid)?);

        assert!(level.accepts(GridCoordinate::new(GRID_BOUNDARY, 0, -GRID_BOUNDARY)));
        assert!(level.accepts(GridCoordinate::new(0, 7, GRID_BOUNDARY)));
        assert!(!level.accepts(GridCoordinate::new(GRID_BOUNDARY + 1, 0, 0)));

        let outside = GridCoordinate::new(0, 0, GRID_BOUNDARY + 1);
        assert!(matches!(
            level.place(outside, TileKind::Cuboid),
            Err(TilingError::OutsidePlacementArea { coordinate }) if coordinate == outside
        ));
        Ok(())
    }

    // Tests the first placement at a coordinate stays authoritative
    // Verified by overwriting on duplicate insert
    #[test]
    fn test_duplicate_placement_is_ignored() -> cladtile::Result<()> {
        let mut level = Level::new();
        assert!(level.place(GridCoordinate::ZERO, TileKind::Cuboid)?);
        assert!(!level.place(GridCoordinate::ZERO, TileKind::TriangularPrismNE)?);

        assert_eq!(level.len(), 1);
        assert_eq!(
            level.get(GridCoordinate::ZERO).map(|p| p.kind()),
            Some(TileKind::Cuboid)
        );
        Ok(())
    }

    // Tests cladding cannot be placed by hand
    // Verified by skipping kind validation in place
    #[test]
    fn test_place_rejects_cladding() {
        let mut level = Level::new();
        assert!(matches!(
            level.place(GridCoordinate::ZERO, TileKind::CladdingTile),
            Err(TilingError::InvalidPlacement { .. })
        ));
        assert!(level.is_empty());
    }

    // Tests unbounded placement ignores the margin
    // Verified by calling accepts in place_unbounded
    #[test]
    fn test_place_unbounded() -> cladtile::Result<()> {
        let mut level = Level::new();
        level.place_unbounded(GridCoordinate::ZERO, TileKind::Cuboid)?;
        assert!(level.place_unbounded(GridCoordinate::new(50, 0, 50), TileKind::Cuboid)?);
        assert_eq!(level.len(), 2);
        Ok(())
    }

    // Tests removal keeps lookups of later placements valid
    // Verified by not shifting indices after removal
    #[test]
    fn test_remove_reindexes() -> cladtile::Result<()> {
        let mut level = Level::new();
        let a = GridCoordinate::ZERO;
        let b = GridCoordinate::UNIT_X;
        let c = GridCoordinate::UNIT_Z;
        level.place(a, TileKind::Cuboid)?;
        level.place(b, TileKind::TriangularPrismNW)?;
        level.place(c, TileKind::TriangularPrismSE)?;

        assert_eq!(level.remove(a).map(|p| p.kind()), Some(TileKind::Cuboid));
        assert_eq!(level.remove(a), None);
        assert_eq!(level.get(b).map(|p| p.kind()), Some(TileKind::TriangularPrismNW));
        assert_eq!(level.get(c).map(|p| p.kind()), Some(TileKind::TriangularPrismSE));
        assert_eq!(level.len(), 2);
        Ok(())
    }

    // Tests layers are distinct and ascending
    // Verified by returning layers in insertion order
    #[test]
    fn test_layers() -> cladtile::Result<()> {
        let mut level = Level::new();
        level.place(GridCoordinate::new(0, 3, 0), TileKind::Cuboid)?;
        level.place(GridCoordinate::new(1, -1, 0), TileKind::Cuboid)?;
        level.place(GridCoordinate::new(0, 3, 1), TileKind::Cuboid)?;
        assert_eq!(level.layers(), vec![-1, 3]);
        Ok(())
    }

    // Tests a level completes into user tiles plus cladding
    // Verified by completing with an empty placement list
    #[test]
    fn test_level_complete_and_resolve() -> cladtile::Result<()> {
        let mut level = Level::new();
        level.place(GridCoordinate::ZERO, TileKind::Cuboid)?;
        let generated = level.complete_and_resolve(ResolveOptions::detailed());
        assert_eq!(generated.user_tile_count(), 1);
        assert_eq!(generated.cladding_tile_count(), 8);
        Ok(())
    }
}
