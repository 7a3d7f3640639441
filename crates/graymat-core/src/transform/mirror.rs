//! Horizontal mirroring.

use crate::GrayscaleImage;

/// Mirror across the vertical axis: `out[r][c] = in[r][width - 1 - c]`.
pub fn mirror(image: &GrayscaleImage) -> GrayscaleImage {
    let mut samples = Vec::with_capacity(image.pixel_count());
    for row in image.rows() {
        samples.extend(row.iter().rev());
    }
    GrayscaleImage::from_parts(image.width(), image.height(), samples)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::test_util::image_strategy;
    use proptest::prelude::*;

    proptest! {
        /// Property: Mirroring preserves dimensions.
        #[test]
        fn prop_mirror_preserves_shape(img in image_strategy()) {
            let mirrored = mirror(&img);
            prop_assert_eq!(mirrored.width(), img.width());
            prop_assert_eq!(mirrored.height(), img.height());
        }

        /// Property: Mirroring twice returns the original.
        #[test]
        fn prop_mirror_is_involution(img in image_strategy()) {
            prop_assert_eq!(mirror(&mirror(&img)), img);
        }

        /// Property: Each output pixel comes from the reflected column.
        #[test]
        fn prop_mirror_reflects_columns(img in image_strategy()) {
            let mirrored = mirror(&img);
            let (w, h) = img.dimensions();
            for y in 0..h {
                for x in 0..w {
                    prop_assert_eq!(mirrored.pixel(x, y), img.pixel(w - 1 - x, y));
                }
            }
        }

        /// Property: The source image is not modified.
        #[test]
        fn prop_mirror_leaves_source_intact(img in image_strategy()) {
            let before = img.clone();
            let _ = mirror(&img);
            prop_assert_eq!(img, before);
        }
    }
}
