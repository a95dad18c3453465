//! Tests for tiling constants

#[cfg(test)]
mod tests {
    use cladtile::algorithm::segments::MESH_GROUP_COUNT;
    use cladtile::io::configuration::{
        COORDINATE_LIMIT, DEFAULT_BLOCK_SCALE, DEFAULT_SCATTER_RADIUS, DEFAULT_SEED,
        GRID_BOUNDARY, LEVEL_EXTENSION, MAX_PREVIEW_PIXELS, MESH_GROUP_COLOURS, OUTPUT_SUFFIX,
        PREVIEW_CELL_SIZE, PREVIEW_SUFFIX, PROGRESS_BAR_WIDTH,
    };
    use std::collections::HashSet;

    // Tests the placement margin value
    // Verified by changing the margin
    #[test]
    fn test_grid_boundary() {
        assert_eq!(GRID_BOUNDARY, 2);
    }

    // Tests the coordinate limit leaves room for the widest placement margin
    // Verified by setting the limit to i32::MAX
    #[test]
    fn test_coordinate_limit_headroom() {
        assert_eq!(COORDINATE_LIMIT.checked_add(GRID_BOUNDARY + 1), Some(i32::MAX));
        assert!((-COORDINATE_LIMIT).checked_sub(GRID_BOUNDARY + 1).is_some());
    }

    // Tests the preview cap fits a typical level at the default cell size
    // Verified by capping below one 256-cell square
    #[test]
    fn test_preview_pixel_cap() {
        let side = 256 * u64::from(PREVIEW_CELL_SIZE);
        assert!(side * side <= MAX_PREVIEW_PIXELS);
        assert!(usize::try_from(MAX_PREVIEW_PIXELS).is_ok());
    }

    // Tests the default block is a unit cube
    // Verified by scaling one axis
    #[test]
    fn test_default_block_scale() {
        assert!(DEFAULT_BLOCK_SCALE
            .iter()
            .all(|v| (v - 1.0).abs() < f32::EPSILON));
    }

    // Tests output names derive from the report suffix
    // Verified by giving previews an unrelated suffix
    #[test]
    fn test_output_naming() {
        assert_eq!(OUTPUT_SUFFIX, "_tiled");
        assert!(PREVIEW_SUFFIX.starts_with(OUTPUT_SUFFIX));
        assert_eq!(LEVEL_EXTENSION, "json");
    }

    // Tests every mesh group has its own opaque colour
    // Verified by repeating a colour
    #[test]
    fn test_mesh_group_colours_are_distinct() {
        assert_eq!(MESH_GROUP_COLOURS.len(), MESH_GROUP_COUNT);
        let distinct: HashSet<_> = MESH_GROUP_COLOURS.iter().collect();
        assert_eq!(distinct.len(), MESH_GROUP_COUNT);
        assert!(MESH_GROUP_COLOURS.iter().all(|c| c[3] == u8::MAX));
    }

    // Tests display and generation defaults
    // Verified by zeroing the preview cell size
    #[test]
    fn test_defaults() {
        assert!(PREVIEW_CELL_SIZE >= 4);
        assert_eq!(DEFAULT_SEED, 42);
        assert!(DEFAULT_SCATTER_RADIUS > 0);
        assert_eq!(PROGRESS_BAR_WIDTH, 40);
    }
}
