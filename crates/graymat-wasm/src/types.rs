//! WASM-compatible wrapper types for grayscale images.
//!
//! This module provides a JavaScript-friendly type that wraps the core
//! `GrayscaleImage`, handling conversion between Rust and JavaScript data
//! representations.

use graymat_core::GrayscaleImage;
use wasm_bindgen::prelude::*;

/// A grayscale image wrapper for JavaScript.
///
/// The wrapped image is immutable; every transform returns a new
/// `JsGrayscaleImage`.
///
/// # Memory Management
///
/// Samples are stored in WASM memory. When you call `samples()`, a copy is
/// made to JavaScript memory as a `Float64Array`.
///
/// The `free()` method can be called to explicitly release WASM memory, but
/// this is optional as wasm-bindgen's finalizer will handle cleanup
/// automatically.
#[wasm_bindgen]
pub struct JsGrayscaleImage {
    inner: GrayscaleImage,
}

#[wasm_bindgen]
impl JsGrayscaleImage {
    /// Create an image from row-major samples.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `samples` - One brightness value per pixel (`width * height` values)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, samples: Vec<f64>) -> Result<JsGrayscaleImage, JsValue> {
        GrayscaleImage::from_raw(width as usize, height as usize, samples)
            .map(Self::from_core)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Create an image from a nested `number[][]` matrix (copied).
    #[wasm_bindgen(js_name = fromRows)]
    pub fn from_rows(rows: JsValue) -> Result<JsGrayscaleImage, JsValue> {
        let rows: Vec<Vec<f64>> =
            serde_wasm_bindgen::from_value(rows).map_err(|e| JsValue::from_str(&e.to_string()))?;
        GrayscaleImage::from_rows(&rows)
            .map(Self::from_core)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width() as u32
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height() as u32
    }

    /// Returns row-major samples as a Float64Array (copied).
    pub fn samples(&self) -> Vec<f64> {
        self.inner.samples().to_vec()
    }

    /// Get the brightness at column `x`, row `y`.
    ///
    /// Throws if the coordinates are outside the image.
    #[wasm_bindgen(js_name = getPixel)]
    pub fn get_pixel(&self, x: i32, y: i32) -> Result<f64, JsValue> {
        self.inner
            .get_pixel(i64::from(x), i64::from(y))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Mean of all samples.
    #[wasm_bindgen(js_name = averageBrightness)]
    pub fn average_brightness(&self) -> f64 {
        self.inner.average_brightness()
    }

    /// Same dimensions and exactly equal samples.
    pub fn equals(&self, other: &JsGrayscaleImage) -> bool {
        self.inner == other.inner
    }

    /// Serialize to `{ width, height, samples }` for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from `{ width, height, samples }`, validating the shape
    pub fn from_json(value: JsValue) -> Result<JsGrayscaleImage, JsValue> {
        let inner: GrayscaleImage =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsGrayscaleImage {
    /// Wrap a core image.
    pub(crate) fn from_core(inner: GrayscaleImage) -> Self {
        Self { inner }
    }

    /// Borrow the core image for use in the transform and encode bindings.
    pub(crate) fn inner(&self) -> &GrayscaleImage {
        &self.inner
    }
}
