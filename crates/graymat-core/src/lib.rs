//! Graymat Core - immutable grayscale images
//!
//! This crate provides a rectangular grayscale image value with `f64`
//! samples, pixel access, exact structural equality, and a fixed set of
//! transforms (normalization, mirroring, cropping, squarification), plus
//! adapters that decode from and encode to standard image containers.
//!
//! # Module Structure
//!
//! - `grayscale` - The [`GrayscaleImage`] value type
//! - `transform` - Normalize, mirror, crop and squarify
//! - `decode` - Encoded image bytes, files and URLs to grayscale samples
//! - `encode` - Grayscale samples to PNG
//! - `error` - Error types
//!
//! # Usage
//!
//! ```ignore
//! use graymat_core::GrayscaleImage;
//!
//! let image = GrayscaleImage::open("photo.jpg")?;
//! let thumb = image.squarified().normalized();
//! thumb.save_png("thumb.png")?;
//! ```

pub mod decode;
pub mod encode;
pub mod error;
pub mod grayscale;
pub mod transform;

#[cfg(test)]
pub(crate) mod test_util;

pub use error::{ImageError, ResourceError, Result, ShapeError};
pub use grayscale::GrayscaleImage;
pub use transform::{crop, mirror, normalize, squarify, NORMALIZED_BRIGHTNESS};


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::test_util::image_strategy;
    use proptest::prelude::*;

    proptest! {
        /// Property: Pixel reads on the source are unchanged by any transform.
        #[test]
        fn prop_transforms_do_not_mutate_source(img in image_strategy()) {
            let (w, h) = img.dimensions();
            let mut before = Vec::with_capacity(w * h);
            for y in 0..h as i64 {
                for x in 0..w as i64 {
                    before.push(img.get_pixel(x, y).unwrap());
                }
            }

            let _ = img.normalized();
            let _ = img.mirrored();
            let _ = img.squarified();
            let _ = img.cropped(0, 0, w as i64, h as i64).unwrap();

            let mut after = Vec::with_capacity(w * h);
            for y in 0..h as i64 {
                for x in 0..w as i64 {
                    after.push(img.get_pixel(x, y).unwrap());
                }
            }
            prop_assert_eq!(before, after);
        }

        /// Property: Equality is reflexive.
        #[test]
        fn prop_equality_reflexive(img in image_strategy()) {
            let same = &img;
            prop_assert!(img.eq(same));
            prop_assert_eq!(img.clone(), img);
        }

        /// Property: Equality is symmetric.
        #[test]
        fn prop_equality_symmetric(a in image_strategy(), b in image_strategy()) {
            prop_assert_eq!(a == b, b == a);
        }

        /// Property: Every in-range coordinate reads back its row-major sample.
        #[test]
        fn prop_get_pixel_in_range(img in image_strategy()) {
            let (w, h) = img.dimensions();
            for y in 0..h {
                for x in 0..w {
                    prop_assert_eq!(img.get_pixel(x as i64, y as i64).unwrap(), img.samples()[y * w + x]);
                }
            }
        }

        /// Property: Coordinates just outside the image are rejected.
        #[test]
        fn prop_get_pixel_out_of_range(img in image_strategy()) {
            let (w, h) = (img.width() as i64, img.height() as i64);
            for (x, y) in [(-1, 0), (w, 0), (0, -1), (0, h)] {
                prop_assert!(img.get_pixel(x, y).unwrap_err().is_out_of_bounds());
            }
        }
    }
}
