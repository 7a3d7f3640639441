//! WASM bindings for image transformation operations.
//!
//! Each function leaves its input untouched and returns a new
//! `JsGrayscaleImage`.

use crate::types::JsGrayscaleImage;
use graymat_core::transform;
use wasm_bindgen::prelude::*;

/// Uniformly rescale so the average brightness becomes 127.
///
/// An all-zero image is returned unchanged. Samples are not clamped.
#[wasm_bindgen]
pub fn normalized(image: &JsGrayscaleImage) -> JsGrayscaleImage {
    JsGrayscaleImage::from_core(transform::normalize(image.inner()))
}

/// Reverse every row (mirror across the vertical axis).
#[wasm_bindgen]
pub fn mirrored(image: &JsGrayscaleImage) -> JsGrayscaleImage {
    JsGrayscaleImage::from_core(transform::mirror(image.inner()))
}

/// Crop a `width x height` rectangle starting at (`start_row`, `start_col`).
///
/// # Example (TypeScript)
///
/// ```typescript
/// // 2x2 block starting at row 1, column 1
/// const block = cropped(image, 1, 1, 2, 2);
/// ```
///
/// # Errors
///
/// Throws if the rectangle is empty or extends past the image.
#[wasm_bindgen]
pub fn cropped(
    image: &JsGrayscaleImage,
    start_row: i32,
    start_col: i32,
    width: i32,
    height: i32,
) -> Result<JsGrayscaleImage, JsValue> {
    transform::crop(
        image.inner(),
        i64::from(start_row),
        i64::from(start_col),
        i64::from(width),
        i64::from(height),
    )
    .map(JsGrayscaleImage::from_core)
    .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract the largest centered square.
#[wasm_bindgen]
pub fn squarified(image: &JsGrayscaleImage) -> JsGrayscaleImage {
    JsGrayscaleImage::from_core(transform::squarify(image.inner()))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_cropped_rejects_out_of_bounds() {
        let img = JsGrayscaleImage::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!(cropped(&img, 0, 0, 3, 2).is_err());
        assert!(cropped(&img, -1, 0, 1, 1).is_err());
        assert!(cropped(&img, 0, 0, 0, 1).is_err());
    }
}
