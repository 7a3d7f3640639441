//! Decoding to a single luminance channel.

use std::io::{BufRead, Cursor, Seek};
use std::path::Path;

use image::{GrayImage, ImageReader};

use crate::error::{ResourceError, Result};
use crate::GrayscaleImage;

/// Decode an in-memory image.
///
/// # Errors
///
/// Returns `ResourceError::UnsupportedFormat` if the container is not
/// recognized and `ResourceError::DecodeFailed` if the data is corrupt.
pub fn decode_bytes(bytes: &[u8]) -> Result<GrayscaleImage> {
    decode_reader(Cursor::new(bytes))
}

/// Decode an image from a seekable reader.
///
/// The container format is guessed from the leading bytes.
pub fn decode_reader<R: BufRead + Seek>(reader: R) -> Result<GrayscaleImage> {
    let reader = ImageReader::new(reader)
        .with_guessed_format()
        .map_err(|e| ResourceError::Io(e.to_string()))?;
    let format = reader.format().ok_or(ResourceError::UnsupportedFormat)?;

    let decoded = reader.decode().map_err(decode_error)?;
    log::debug!(
        "decoded {:?} image {}x{} ({:?})",
        format,
        decoded.width(),
        decoded.height(),
        decoded.color()
    );

    GrayscaleImage::from_luma8(&decoded.into_luma8())
}

/// Decode an image file.
///
/// # Errors
///
/// Returns `ResourceError::Io` if the file cannot be opened or read, plus
/// the errors of [`decode_reader`].
pub fn decode_file(path: impl AsRef<Path>) -> Result<GrayscaleImage> {
    let path = path.as_ref();
    log::debug!("opening {}", path.display());
    let reader = ImageReader::open(path)
        .map_err(|e| ResourceError::Io(format!("{}: {e}", path.display())))?;
    decode_reader(reader.into_inner())
}

/// Map an `image` decoding error onto the crate's resource errors.
fn decode_error(err: image::ImageError) -> ResourceError {
    match err {
        image::ImageError::IoError(e) => ResourceError::Io(e.to_string()),
        image::ImageError::Unsupported(_) => ResourceError::UnsupportedFormat,
        other => ResourceError::DecodeFailed(other.to_string()),
    }
}

impl GrayscaleImage {
    /// Decode an image file. See [`decode_file`].
    pub fn open(path: impl AsRef<Path>) -> Result<GrayscaleImage> {
        decode_file(path)
    }

    /// Convert an 8-bit grayscale buffer, one `f64` sample per pixel.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::Empty` for a buffer with a zero dimension.
    pub fn from_luma8(gray: &GrayImage) -> Result<GrayscaleImage> {
        let (width, height) = gray.dimensions();
        let samples = gray.as_raw().iter().map(|&v| f64::from(v)).collect();
        GrayscaleImage::from_raw(width as usize, height as usize, samples)
    }
}
