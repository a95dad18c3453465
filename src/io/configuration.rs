//! Tiling constants and runtime configuration defaults

// Placement area margin, in cells, around the tiles already placed
/// Extra cells around the placed tiles where new tiles are accepted
pub const GRID_BOUNDARY: i32 = 2;

/// Largest absolute x or z a placement may use
///
/// The neighbour ring and the placement margin must stay inside `i32`.
pub const COORDINATE_LIMIT: i32 = i32::MAX - GRID_BOUNDARY - 1;

/// Size of one grid cell in world units (x, y, z)
pub const DEFAULT_BLOCK_SCALE: [f32; 3] = [1.0, 1.0, 1.0];

// Output settings
/// Suffix added to report filenames
pub const OUTPUT_SUFFIX: &str = "_tiled";
/// Extension of level and report files
pub const LEVEL_EXTENSION: &str = "json";
/// Suffix added to preview image filenames, before the layer number
pub const PREVIEW_SUFFIX: &str = "_tiled_y";

// Preview rendering
/// Edge length of one tile in preview images, in pixels
pub const PREVIEW_CELL_SIZE: u32 = 16;
/// Largest preview image, in pixels, that will be allocated
pub const MAX_PREVIEW_PIXELS: u64 = 1 << 26;

/// Preview colour of each mesh group, in `MeshGroup::ALL` order
pub const MESH_GROUP_COLOURS: [[u8; 4]; 6] = [
    [128, 128, 128, 255],
    [66, 135, 245, 255],
    [245, 166, 35, 255],
    [126, 211, 33, 255],
    [208, 2, 27, 255],
    [144, 19, 254, 255],
];

// Random level generation
/// Fixed seed for reproducible scattered levels
pub const DEFAULT_SEED: u64 = 42;
/// Half-width of the square scattered levels are drawn from
pub const DEFAULT_SCATTER_RADIUS: u32 = 8;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
