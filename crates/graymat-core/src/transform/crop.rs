//! Rectangular cropping and center-square extraction.
//!
//! Crop rectangles are in whole pixels. Unlike a viewer-style crop nothing is
//! clamped: a rectangle that is empty or reaches past the image is an error.
//!
//! # Example
//!
//! ```ignore
//! // Take the 2x2 block starting at row 1, column 1
//! let cropped = crop(&image, 1, 1, 2, 2)?;
//! ```

use crate::error::{Result, ShapeError};
use crate::GrayscaleImage;

/// Extract the `width x height` rectangle whose top-left sample is at
/// (`start_row`, `start_col`).
///
/// # Errors
///
/// Returns `ShapeError::InvalidCrop` unless `start_row >= 0`,
/// `start_col >= 0`, `width >= 1`, `height >= 1`,
/// `start_col + width <= image.width()` and
/// `start_row + height <= image.height()`.
pub fn crop(
    image: &GrayscaleImage,
    start_row: i64,
    start_col: i64,
    width: i64,
    height: i64,
) -> Result<GrayscaleImage> {
    let invalid = || ShapeError::InvalidCrop {
        start_row,
        start_col,
        width,
        height,
        image_width: image.width(),
        image_height: image.height(),
    };

    if start_row < 0 || start_col < 0 || width < 1 || height < 1 {
        return Err(invalid().into());
    }

    let top = usize::try_from(start_row).map_err(|_| invalid())?;
    let left = usize::try_from(start_col).map_err(|_| invalid())?;
    let out_width = usize::try_from(width).map_err(|_| invalid())?;
    let out_height = usize::try_from(height).map_err(|_| invalid())?;

    let fits_horizontally = left
        .checked_add(out_width)
        .is_some_and(|right| right <= image.width());
    let fits_vertically = top
        .checked_add(out_height)
        .is_some_and(|bottom| bottom <= image.height());
    if !fits_horizontally || !fits_vertically {
        return Err(invalid().into());
    }

    // Fast path: full crop returns a clone
    if out_width == image.width() && out_height == image.height() {
        return Ok(image.clone());
    }

    log::trace!(
        "cropping {}x{} at ({}, {}) from {}x{} image",
        out_width,
        out_height,
        top,
        left,
        image.width(),
        image.height()
    );
    Ok(copy_region(image, top, left, out_width, out_height))
}

/// Extract the largest centered square, `min(width, height)` on a side.
///
/// When the excess along an axis is odd, one fewer row (column) is removed
/// from the top (left) than from the bottom (right). A square image yields
/// an equal copy.
pub fn squarify(image: &GrayscaleImage) -> GrayscaleImage {
    if image.is_square() {
        return image.clone();
    }
    let size = image.width().min(image.height());
    let top = (image.height() - size) / 2;
    let left = (image.width() - size) / 2;
    copy_region(image, top, left, size, size)
}

/// Copy a rectangle already known to lie inside `image`.
fn copy_region(
    image: &GrayscaleImage,
    top: usize,
    left: usize,
    width: usize,
    height: usize,
) -> GrayscaleImage {
    let mut samples = Vec::with_capacity(width * height);
    for row in image.rows().skip(top).take(height) {
        samples.extend_from_slice(&row[left..left + width]);
    }
    GrayscaleImage::from_parts(width, height, samples)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
