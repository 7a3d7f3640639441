//! PNG encoding for export.
//!
//! This module provides PNG encoding using the `image` crate's PNG encoder
//! with a single 8-bit luminance channel.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, GrayImage, ImageEncoder};

use crate::error::{ResourceError, Result};
use crate::GrayscaleImage;

/// Encode an image to PNG bytes.
///
/// # Example
///
/// ```ignore
/// let png = encode_png(&image)?;
///
/// // Verify PNG signature
/// assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
/// ```
pub fn encode_png(image: &GrayscaleImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_png(image, &mut buffer)?;
    Ok(buffer)
}

/// Encode an image as PNG into `writer`.
///
/// # Errors
///
/// Returns `ResourceError::Io` if writing fails and
/// `ResourceError::EncodeFailed` if the encoder rejects the image.
pub fn write_png<W: Write>(image: &GrayscaleImage, writer: W) -> Result<()> {
    let gray = image.to_luma8()?;
    let (width, height) = gray.dimensions();

    PngEncoder::new(writer)
        .write_image(gray.as_raw(), width, height, ExtendedColorType::L8)
        .map_err(encode_error)?;

    log::debug!("encoded {}x{} grayscale PNG", width, height);
    Ok(())
}

/// Encode an image as PNG into a new file at `path`, replacing any
/// existing file.
pub fn save_png(image: &GrayscaleImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let io_error = |e: std::io::Error| ResourceError::Io(format!("{}: {e}", path.display()));

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    write_png(image, &mut writer)?;
    writer.flush().map_err(io_error)?;

    log::debug!("saved {}", path.display());
    Ok(())
}

/// Map an `image` encoding error onto the crate's resource errors.
fn encode_error(err: image::ImageError) -> ResourceError {
    match err {
        image::ImageError::IoError(e) => ResourceError::Io(e.to_string()),
        other => ResourceError::EncodeFailed(other.to_string()),
    }
}

impl GrayscaleImage {
    /// Write as PNG to a file. See [`save_png`].
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        save_png(self, path)
    }

    /// Write as PNG to any sink. See [`write_png`].
    pub fn write_png<W: Write>(&self, writer: W) -> Result<()> {
        write_png(self, writer)
    }

    /// Convert to an 8-bit grayscale buffer using a saturating cast per
    /// sample.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::EncodeFailed` if a dimension does not fit in
    /// the `image` crate's `u32` sizes.
    pub fn to_luma8(&self) -> Result<GrayImage> {
        let too_large = || {
            ResourceError::EncodeFailed(format!(
                "{}x{} image exceeds encoder limits",
                self.width(),
                self.height()
            ))
        };
        let width = u32::try_from(self.width()).map_err(|_| too_large())?;
        let height = u32::try_from(self.height()).map_err(|_| too_large())?;

        // `as` saturates at the u8 bounds and maps NaN to 0
        let bytes = self.samples().iter().map(|&s| s as u8).collect();
        GrayImage::from_raw(width, height, bytes).ok_or_else(|| too_large().into())
    }
}
