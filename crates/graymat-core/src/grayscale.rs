//! The immutable grayscale image value.
//!
//! A [`GrayscaleImage`] is a rectangular `height x width` matrix of `f64`
//! brightness samples stored row-major in a single owned buffer.
//!
//! # Coordinate System
//!
//! - `(0, 0)` = top-left corner
//! - `x` is the column and grows to the right
//! - `y` is the row and grows downward
//!
//! # Invariants
//!
//! Every value has at least one row and one column, and the buffer always
//! holds exactly `width * height` samples. There are no mutators: all
//! transforms return a fresh image with its own storage.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{ImageError, Result, ShapeError};

/// A rectangular, immutable matrix of grayscale intensity samples.
///
/// Samples decoded from an image file are integers in `[0, 255]`, but
/// transforms such as [`GrayscaleImage::normalized`] may produce values
/// outside that range. Nothing is clamped until the image is encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ImageRepr", into = "ImageRepr")]
pub struct GrayscaleImage {
    width: usize,
    height: usize,
    samples: Vec<f64>,
}

/// Wire form used by serde; validated through [`GrayscaleImage::from_raw`].
#[derive(Serialize, Deserialize)]
struct ImageRepr {
    width: usize,
    height: usize,
    samples: Vec<f64>,
}

impl GrayscaleImage {
    /// Build an image from a matrix of rows, copying every sample.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::Empty` if there are no rows or the first row is
    /// empty, and `ShapeError::Jagged` if any row's length differs from the
    /// first row's.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if height == 0 || width == 0 {
            return Err(ShapeError::Empty { width, height }.into());
        }

        // Every row is checked before the buffer is sized from the first one
        if let Some((index, row)) = rows
            .iter()
            .map(|row| row.as_ref())
            .enumerate()
            .find(|(_, row)| row.len() != width)
        {
            return Err(ShapeError::Jagged {
                row: index,
                expected: width,
                actual: row.len(),
            }
            .into());
        }

        let mut samples = Vec::with_capacity(width * height);
        for row in rows {
            samples.extend_from_slice(row.as_ref());
        }

        Ok(Self::from_parts(width, height, samples))
    }

    /// Adopt a row-major sample buffer of `width * height` values.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::Empty` for a zero dimension and
    /// `ShapeError::BufferLength` if the buffer length does not match.
    pub fn from_raw(width: usize, height: usize, samples: Vec<f64>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ShapeError::Empty { width, height }.into());
        }
        let expected = width.checked_mul(height).ok_or(ShapeError::BufferLength {
            expected: usize::MAX,
            actual: samples.len(),
        })?;
        if samples.len() != expected {
            return Err(ShapeError::BufferLength {
                expected,
                actual: samples.len(),
            }
            .into());
        }
        Ok(Self::from_parts(width, height, samples))
    }

    /// Internal constructor for buffers already known to be well formed.
    pub(crate) fn from_parts(width: usize, height: usize, samples: Vec<f64>) -> Self {
        debug_assert!(width > 0 && height > 0, "Image must not be empty");
        debug_assert_eq!(samples.len(), width * height, "Sample buffer size mismatch");
        Self {
            width,
            height,
            samples,
        }
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Total number of samples.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.samples.len()
    }

    /// True when the image has as many rows as columns, i.e. when
    /// [`GrayscaleImage::squarified`] would return an equal copy.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Row-major view of every sample.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Borrow row `y`, or `None` past the last row.
    pub fn row(&self, y: usize) -> Option<&[f64]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.samples[start..start + self.width])
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.samples.chunks_exact(self.width)
    }

    /// Copy the samples out as a nested matrix.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// Get the brightness at column `x`, row `y`.
    ///
    /// Coordinates are signed so that reads left of or above the image are
    /// reported rather than unrepresentable.
    ///
    /// # Errors
    ///
    /// Returns `ImageError::OutOfBounds` unless `0 <= x < width` and
    /// `0 <= y < height`.
    pub fn get_pixel(&self, x: i64, y: i64) -> Result<f64> {
        let out_of_bounds = || ImageError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        };
        let col = usize::try_from(x).map_err(|_| out_of_bounds())?;
        let row = usize::try_from(y).map_err(|_| out_of_bounds())?;
        self.pixel(col, row).ok_or_else(out_of_bounds)
    }

    /// Unsigned pixel lookup returning `None` outside the image.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.samples[y * self.width + x])
    }

    /// Arithmetic mean of all samples, summed in row-major order.
    pub fn average_brightness(&self) -> f64 {
        let sum: f64 = self.samples.iter().sum();
        sum / self.samples.len() as f64
    }
}

impl PartialEq for GrayscaleImage {
    /// Same dimensions and every sample exactly equal (no tolerance).
    fn eq(&self, other: &Self) -> bool {
        if self.width != other.width || self.height != other.height {
            return false;
        }
        self.samples == other.samples
    }
}

// Samples are assumed finite; a NaN sample is never equal to itself.
impl Eq for GrayscaleImage {}

impl Hash for GrayscaleImage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        self.height.hash(state);
        for &sample in &self.samples {
            // -0.0 == 0.0, so both must hash alike
            let bits = if sample == 0.0 { 0 } else { sample.to_bits() };
            bits.hash(state);
        }
    }
}

impl TryFrom<Vec<Vec<f64>>> for GrayscaleImage {
    type Error = ImageError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl TryFrom<&[Vec<f64>]> for GrayscaleImage {
    type Error = ImageError;

    fn try_from(rows: &[Vec<f64>]) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl TryFrom<ImageRepr> for GrayscaleImage {
    type Error = ImageError;

    fn try_from(repr: ImageRepr) -> Result<Self> {
        Self::from_raw(repr.width, repr.height, repr.samples)
    }
}

impl From<GrayscaleImage> for ImageRepr {
    fn from(image: GrayscaleImage) -> Self {
        Self {
            width: image.width,
            height: image.height,
            samples: image.samples,
        }
    }
}
