//! Sheet binarization into a boolean foreground mask

use image::DynamicImage;
use ndarray::Array2;

/// Threshold a sheet image into a foreground mask
///
/// The image is converted to 8-bit luminance with the standard perceptual
/// weighting, inverted so that dark ink on a light background becomes
/// high-valued, and thresholded with a strict greater-than comparison.
/// The mask has one row per image row and one column per image column;
/// `true` marks an ink pixel.
pub fn foreground_mask(sheet: &DynamicImage, threshold: u8) -> Array2<bool> {
    let luma = sheet.to_luma8();
    let (width, height) = luma.dimensions();

    Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        let image::Luma([intensity]) = *luma.get_pixel(x as u32, y as u32);
        255 - intensity > threshold
    })
}
