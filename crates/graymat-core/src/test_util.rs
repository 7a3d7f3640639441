//! Shared helpers and proptest strategies for unit tests.

use proptest::prelude::*;

use crate::GrayscaleImage;

/// An image whose sample at `(x, y)` is `y * width + x`.
pub(crate) fn gradient_image(width: usize, height: usize) -> GrayscaleImage {
    let samples = (0..width * height).map(|i| i as f64).collect();
    GrayscaleImage::from_raw(width, height, samples).unwrap()
}

/// Strategy for image dimensions (kept small for speed).
pub(crate) fn dimensions_strategy() -> impl Strategy<Value = (usize, usize)> {
    (1usize..=12, 1usize..=12)
}

/// Strategy for arbitrary images with samples in [0, 255].
pub(crate) fn image_strategy() -> impl Strategy<Value = GrayscaleImage> {
    dimensions_strategy().prop_flat_map(|(width, height)| {
        prop::collection::vec(0.0f64..=255.0, width * height)
            .prop_map(move |samples| GrayscaleImage::from_raw(width, height, samples).unwrap())
    })
}

/// Strategy for images whose samples are all strictly positive.
pub(crate) fn positive_image_strategy() -> impl Strategy<Value = GrayscaleImage> {
    dimensions_strategy().prop_flat_map(|(width, height)| {
        prop::collection::vec(1.0f64..=255.0, width * height)
            .prop_map(move |samples| GrayscaleImage::from_raw(width, height, samples).unwrap())
    })
}

/// Strategy for `(start_row, start_col, width, height)` rectangles inside a
/// `width x height` image.
pub(crate) fn rect_within(
    width: usize,
    height: usize,
) -> impl Strategy<Value = (usize, usize, usize, usize)> {
    (0..height, 0..width).prop_flat_map(move |(row, col)| {
        (Just(row), Just(col), 1..=width - col, 1..=height - row)
    })
}
