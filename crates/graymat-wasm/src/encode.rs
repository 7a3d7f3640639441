//! Image encoding WASM bindings.
//!
//! This module exposes the graymat-core PNG encoder to JavaScript, enabling
//! export of processed images.
//!
//! # Example
//!
//! ```typescript
//! import { encode_png } from '@graymat/wasm';
//!
//! const png = encode_png(image);
//! await writable.write(new Blob([png], { type: 'image/png' }));
//! ```

use crate::types::JsGrayscaleImage;
use graymat_core::encode;
use wasm_bindgen::prelude::*;

/// Encode an image as an 8-bit grayscale PNG.
///
/// Samples are truncated toward zero and saturated to `[0, 255]`.
#[wasm_bindgen]
pub fn encode_png(image: &JsGrayscaleImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(image.inner()).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png_creates_valid_png() {
        let img = JsGrayscaleImage::new(4, 4, vec![128.0; 16]).unwrap();
        let png = encode_png(&img).unwrap();
        assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_encode_roundtrip_through_decode() {
        let img = JsGrayscaleImage::new(3, 1, vec![1.0, 2.0, 3.0]).unwrap();
        let png = encode_png(&img).unwrap();
        let back = crate::decode::decode_image(&png).unwrap();
        assert!(img.equals(&back));
    }
}
