//! Brightness normalization by uniform scaling.

use crate::GrayscaleImage;

/// Average brightness produced by [`normalize`].
pub const NORMALIZED_BRIGHTNESS: f64 = 127.0;

/// Scale every sample by the same factor so the mean becomes
/// [`NORMALIZED_BRIGHTNESS`].
///
/// Relative contrast is preserved and nothing is clamped, so bright inputs
/// may produce samples above 255. An image whose average brightness is
/// exactly zero is returned unchanged (as a copy).
///
/// Due to floating-point rounding the resulting mean is very close to, but
/// not always exactly, 127.
pub fn normalize(image: &GrayscaleImage) -> GrayscaleImage {
    let mean = image.average_brightness();
    if mean == 0.0 {
        return image.clone();
    }

    let scale = NORMALIZED_BRIGHTNESS / mean;
    log::trace!(
        "normalizing {}x{} image: mean {} scale {}",
        image.width(),
        image.height(),
        mean,
        scale
    );

    let samples = image.samples().iter().map(|&s| s * scale).collect();
    GrayscaleImage::from_parts(image.width(), image.height(), samples)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
