//! Image decoding WASM bindings.
//!
//! This module exposes the graymat-core decoder to JavaScript.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@graymat/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use crate::types::JsGrayscaleImage;
use graymat_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a PNG, JPEG or BMP image to grayscale.
///
/// Color images are converted to luminance; samples are in `[0, 255]`.
///
/// # Errors
///
/// Returns an error if the bytes are not a recognized image or the data is
/// corrupted or truncated.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsGrayscaleImage, JsValue> {
    decode::decode_bytes(bytes)
        .map(JsGrayscaleImage::from_core)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
