//! Segmentation core for icon sheets
//!
//! Data flows strictly left to right: sheet image → foreground mask →
//! projection profiles → runs → grid cells. Every stage is a pure function of
//! its input; the only side effects in the crate live in [`crate::io`].

/// Binarization of a sheet image into a boolean foreground mask
pub mod binarize;
/// Row-major cross product of detected runs into crop rectangles
pub mod grid;
/// Reduction of a 2-D mask to 1-D projection profiles
pub mod profile;
/// Detection of contiguous positive runs in a projection profile
pub mod runs;
