//! Cropping and persistence of extracted icons

use crate::io::configuration::{ICON_EXTENSION, ICON_INDEX_WIDTH, ICON_PREFIX};
use crate::io::error::{ExtractError, Result};
use crate::io::index::next_icon_index;
use crate::segment::grid::GridCell;
use image::DynamicImage;
use std::path::{Path, PathBuf};

/// Build the output filename for an icon index
pub fn icon_file_name(index: u64) -> String {
    format!("{ICON_PREFIX}{index:0width$}.{ICON_EXTENSION}", width = ICON_INDEX_WIDTH)
}

/// Crop every grid cell from the sheet and persist each under the next free index
///
/// The crop is taken from the original sheet, not the binarized mask, so the
/// persisted pixels are byte-identical to the source rectangle (no
/// resampling). Indices start at [`next_icon_index`] for the output directory
/// and increment by one per cell in the grid's row-major order; the returned
/// pairs preserve that order. A failure partway through leaves the
/// already-written icons in place.
///
/// # Errors
///
/// Returns [`ExtractError::FileSystem`] if the output directory cannot be
/// created or listed, and [`ExtractError::IconExport`] if an icon cannot be
/// encoded to disk.
pub fn write_icons(
    sheet: &DynamicImage,
    cells: &[GridCell],
    output_dir: &Path,
) -> Result<Vec<(PathBuf, u64)>> {
    std::fs::create_dir_all(output_dir).map_err(|e| ExtractError::FileSystem {
        path: output_dir.to_path_buf(),
        operation: "create output directory",
        source: e,
    })?;

    let mut index = next_icon_index(output_dir)?;
    let mut written = Vec::with_capacity(cells.len());

    for cell in cells {
        let icon = sheet.crop_imm(cell.left, cell.top, cell.width(), cell.height());
        let path = output_dir.join(icon_file_name(index));
        icon.save(&path).map_err(|e| ExtractError::IconExport {
            path: path.clone(),
            source: e,
        })?;
        written.push((path, index));
        index += 1;
    }

    Ok(written)
}
