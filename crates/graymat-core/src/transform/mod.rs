//! Immutable bulk transforms: normalization, mirroring, cropping and
//! center-square extraction.
//!
//! Every transform reads its source through a shared reference and returns a
//! newly allocated [`GrayscaleImage`]; the source is never modified. Each
//! operation is available both as a free function and as a method on
//! `GrayscaleImage`.
//!
//! # Coordinate System
//!
//! - Crop rectangles are given in whole pixels as
//!   `(start_row, start_col, width, height)`
//! - Origin is top-left corner

mod crop;
mod mirror;
mod normalize;

pub use crop::{crop, squarify};
pub use mirror::mirror;
pub use normalize::{normalize, NORMALIZED_BRIGHTNESS};

use crate::error::Result;
use crate::GrayscaleImage;

impl GrayscaleImage {
    /// Uniformly rescale so the average brightness becomes
    /// [`NORMALIZED_BRIGHTNESS`]. See [`normalize`].
    pub fn normalized(&self) -> GrayscaleImage {
        normalize(self)
    }

    /// Reverse every row. See [`mirror`].
    pub fn mirrored(&self) -> GrayscaleImage {
        mirror(self)
    }

    /// Extract a `width x height` rectangle. See [`crop`].
    pub fn cropped(
        &self,
        start_row: i64,
        start_col: i64,
        width: i64,
        height: i64,
    ) -> Result<GrayscaleImage> {
        crop(self, start_row, start_col, width, height)
    }

    /// Extract the largest centered square. See [`squarify`].
    pub fn squarified(&self) -> GrayscaleImage {
        squarify(self)
    }
}
