//! Decoder adapter: encoded image resource to [`GrayscaleImage`].
//!
//! This module provides functionality for:
//! - Decoding PNG, JPEG and BMP data from bytes, a reader or a file path
//! - Loading `file:`, `http:` and `https:` URLs (`remote` feature, on by
//!   default)
//! - Converting color data to a single luminance channel
//!
//! # Architecture
//!
//! The container is detected from the data itself, decoded with the `image`
//! crate and converted with its standard luma conversion (ITU-R BT.709
//! weights). A pure gray pixel (R = G = B = v) therefore yields sample `v`.
//! Alpha is discarded. The resulting 8-bit samples become `f64` values in
//! `[0, 255]`.
//!
//! # Examples
//!
//! ```ignore
//! use graymat_core::decode::decode_file;
//!
//! let image = decode_file("photo.png")?;
//! println!("Decoded {}x{} image", image.width(), image.height());
//! ```

mod luma;
#[cfg(feature = "remote")]
mod remote;

pub use luma::{decode_bytes, decode_file, decode_reader};
#[cfg(feature = "remote")]
pub use remote::{decode_url, decode_url_with, MAX_RESPONSE_BYTES};
