//! Grid assembly from detected row and column runs

use crate::segment::runs::Run;

/// One candidate icon's bounding rectangle in sheet pixel coordinates
///
/// `left..right` spans a column run, `top..bottom` a row run; both intervals
/// are half-open, matching [`Run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Leftmost pixel column of the cell
    pub left: u32,
    /// Topmost pixel row of the cell
    pub top: u32,
    /// First pixel column past the cell
    pub right: u32,
    /// First pixel row past the cell
    pub bottom: u32,
}

impl GridCell {
    /// Width of the crop rectangle in pixels
    pub const fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Height of the crop rectangle in pixels
    pub const fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Cross every row run with every column run into crop rectangles
///
/// Cells are emitted in row-major order (outer loop over row runs, inner
/// over column runs), which fixes the left-to-right, top-to-bottom numbering
/// of the resulting icons. For R row runs and C column runs the grid has
/// exactly R×C cells. Runs of differing lengths simply produce cells of
/// differing sizes; no uniformity is assumed.
pub fn assemble_grid(row_runs: &[Run], col_runs: &[Run]) -> Vec<GridCell> {
    let mut cells = Vec::with_capacity(row_runs.len() * col_runs.len());
    for row in row_runs {
        for col in col_runs {
            cells.push(GridCell {
                left: col.start as u32,
                top: row.start as u32,
                right: col.end as u32,
                bottom: row.end as u32,
            });
        }
    }
    cells
}
