//! Top-down PNG previews of resolved segments
//!
//! Each tile becomes a square of `cell_size` pixels cut into eight wedges, one
//! per segment. A wedge takes the colour of the first mesh group showing that
//! segment and stays transparent when none does. North is at the top.

use crate::algorithm::completion::GeneratedTiles;
use crate::algorithm::segments::{MeshGroup, SegmentId};
use crate::io::configuration::{MAX_PREVIEW_PIXELS, MESH_GROUP_COLOURS};
use crate::io::error::{Result, TilingError, file_system_error, invalid_parameter};
use crate::spatial::grid::BoundingBox;
use image::{ImageBuffer, Rgba, RgbaImage};
use ndarray::Array2;
use std::path::Path;

// Raster value for pixels with no visible segment
const EMPTY: u8 = 0;

/// Segment wedge containing a pixel of a `cell_size` square
///
/// Pixel coordinates grow east and south from the top-left corner.
pub const fn segment_at_pixel(px: u32, py: u32, cell_size: u32) -> SegmentId {
    // Doubled offsets from the cell centre keep everything integral
    let dx = 2 * px as i64 + 1 - cell_size as i64;
    let dz = cell_size as i64 - 2 * py as i64 - 1;

    match (dx >= 0, dz >= 0) {
        (true, true) => {
            if dz >= dx {
                SegmentId::Nne
            } else {
                SegmentId::Nee
            }
        }
        (true, false) => {
            if dx >= -dz {
                SegmentId::See
            } else {
                SegmentId::Sse
            }
        }
        (false, false) => {
            if -dz >= -dx {
                SegmentId::Ssw
            } else {
                SegmentId::Sww
            }
        }
        (false, true) => {
            if -dx >= dz {
                SegmentId::Nww
            } else {
                SegmentId::Nnw
            }
        }
    }
}

/// Rasterize one layer into mesh group indices (0 = empty, 1 + group index)
///
/// # Errors
///
/// Returns an error if:
/// - The cell size is zero
/// - The layer holds no tiles
/// - The preview would exceed [`MAX_PREVIEW_PIXELS`]
pub fn rasterize_layer(
    generated: &GeneratedTiles,
    layer: i32,
    cell_size: u32,
) -> Result<(Array2<u8>, BoundingBox)> {
    if cell_size == 0 {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"must be at least one pixel",
        ));
    }

    let bounds = BoundingBox::enclosing(generated.layer(layer).map(|tile| tile.coordinate()))
        .ok_or(TilingError::EmptyLayer { layer })?;

    let (rows, cols) = preview_dimensions(&bounds, layer, cell_size)?;
    let mut raster = Array2::from_elem((rows, cols), EMPTY);

    for tile in generated.layer(layer) {
        let coordinate = tile.coordinate();
        let origin_row = (bounds.max[1].abs_diff(coordinate.z) * cell_size) as usize;
        let origin_col = (coordinate.x.abs_diff(bounds.min[0]) * cell_size) as usize;

        for py in 0..cell_size {
            for px in 0..cell_size {
                let segment = segment_at_pixel(px, py, cell_size);
                let Some(group) = tile.segments().groups_showing(segment).next() else {
                    continue;
                };
                if let Some(value) =
                    raster.get_mut([origin_row + py as usize, origin_col + px as usize])
                {
                    *value = group.index() as u8 + 1;
                }
            }
        }
    }

    Ok((raster, bounds))
}

// Pixel size of a layer's preview, refusing anything over MAX_PREVIEW_PIXELS
fn preview_dimensions(
    bounds: &BoundingBox,
    layer: i32,
    cell_size: u32,
) -> Result<(usize, usize)> {
    let height = u64::from(bounds.depth()) * u64::from(cell_size);
    let width = u64::from(bounds.width()) * u64::from(cell_size);
    let too_large = TilingError::PreviewTooLarge {
        layer,
        width,
        height,
    };

    if width
        .checked_mul(height)
        .is_none_or(|pixels| pixels > MAX_PREVIEW_PIXELS)
    {
        return Err(too_large);
    }

    match (usize::try_from(height), usize::try_from(width)) {
        (Ok(rows), Ok(cols)) => Ok((rows, cols)),
        _ => Err(too_large),
    }
}

/// Colour a rasterized layer
pub fn raster_to_image(raster: &Array2<u8>) -> RgbaImage {
    let (rows, cols) = raster.dim();
    ImageBuffer::from_fn(cols as u32, rows as u32, |x, y| {
        let value = raster
            .get([y as usize, x as usize])
            .copied()
            .unwrap_or(EMPTY);
        let colour = value
            .checked_sub(1)
            .and_then(|index| MeshGroup::ALL.get(usize::from(index)))
            .map_or([0, 0, 0, 0], |&group| group_colour(group));
        Rgba(colour)
    })
}

/// Colour assigned to a mesh group in previews
pub fn group_colour(group: MeshGroup) -> [u8; 4] {
    MESH_GROUP_COLOURS
        .get(group.index())
        .copied()
        .unwrap_or([0, 0, 0, 0])
}

/// Export one layer as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The layer holds no tiles, the cell size is zero or the preview is too large
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_layer_preview(
    generated: &GeneratedTiles,
    layer: i32,
    cell_size: u32,
    output_path: &Path,
) -> Result<()> {
    let (raster, _) = rasterize_layer(generated, layer, cell_size)?;
    let img = raster_to_image(&raster);

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|source| file_system_error(parent, "create directory", source))?;
    }

    img.save(output_path)
        .map_err(|source| TilingError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}
