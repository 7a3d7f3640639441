//! Graymat WASM - WebAssembly bindings for Graymat
//!
//! This crate provides WASM bindings to expose the graymat-core functionality
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - `JsGrayscaleImage`, the JavaScript-facing image wrapper
//! - `decode` - Image decoding bindings (PNG, JPEG, BMP to grayscale)
//! - `encode` - Image encoding bindings (grayscale PNG export)
//! - `transform` - Normalize, mirror, crop and squarify
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, normalized, encode_png } from '@graymat/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const png = encode_png(normalized(image));
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod transform;
mod types;

// Re-export public types
pub use decode::decode_image;
pub use encode::encode_png;
pub use transform::{cropped, mirrored, normalized, squarified};
pub use types::JsGrayscaleImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
