//! Icon sheet segmentation: discovers the grid geometry of glyph icons printed
//! on a plain background and crops each icon into its own image.
//!
//! A sheet is binarized into a foreground mask, the mask is reduced to row and
//! column projection profiles, and each profile is scanned for contiguous
//! occupied runs. The cross product of row runs and column runs yields the
//! crop rectangles, which are persisted under collision-safe sequential names.

#![forbid(unsafe_code)]

/// Input/output operations, batch orchestration, and error handling
pub mod io;
/// Segmentation core: binarization, projection profiles, run detection, and grid assembly
pub mod segment;

pub use io::error::{ExtractError, Result};
