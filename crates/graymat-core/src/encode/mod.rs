//! Encoder adapter: [`GrayscaleImage`] to a lossless grayscale container.
//!
//! This module provides functionality for:
//! - Encoding images as 8-bit single-channel PNG
//! - Writing to memory, any `Write` sink, or a file path
//!
//! # Sample Conversion
//!
//! Samples are real-valued but the container holds bytes. Each sample is
//! converted with a saturating cast: the fractional part is dropped, values
//! below 0 become 0, values above 255 become 255 and NaN becomes 0. Keep
//! samples integral and in `[0, 255]` for an exact round-trip.
//!
//! Raster APIs that store `(int) sample` into an 8-bit band (Java's
//! `WritableRaster::setSample`, for one) wrap modulo 256 instead, so 300
//! becomes 44 there but 255 here. Out-of-range images will not match such
//! output byte for byte.
//!
//! # Examples
//!
//! ```ignore
//! use graymat_core::encode::encode_png;
//!
//! let png_bytes = encode_png(&image.normalized())?;
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;

pub use png::{encode_png, save_png, write_png};
