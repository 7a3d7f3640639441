//! Error types for image construction, pixel access and I/O.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = ImageError> = std::result::Result<T, E>;

/// Top-level error returned by every fallible image operation.
#[derive(Debug, Error)]
pub enum ImageError {
    /// A matrix or crop rectangle does not describe a valid image shape.
    #[error("Invalid shape: {0}")]
    InvalidShape(#[from] ShapeError),

    /// A pixel was requested outside the image.
    #[error("Coordinates ({x}, {y}) are out of bounds for a {width}x{height} image")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    /// Reading or writing an encoded image failed.
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),
}

/// Reasons a matrix, buffer or rectangle is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Zero rows or zero columns.
    #[error("image is empty ({width}x{height})")]
    Empty { width: usize, height: usize },

    /// A row's length differs from the first row's.
    #[error("row {row} has {actual} samples, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A flat sample buffer does not match `width * height`.
    #[error("sample buffer has {actual} samples, expected {expected}")]
    BufferLength { expected: usize, actual: usize },

    /// A crop rectangle is empty or extends past the image.
    #[error(
        "cannot crop {width}x{height} at row {start_row}, column {start_col} \
         from a {image_width}x{image_height} image"
    )]
    InvalidCrop {
        start_row: i64,
        start_col: i64,
        width: i64,
        height: i64,
        image_width: usize,
        image_height: usize,
    },
}

/// Failures at the decode/encode boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// The resource could not be opened, read or written.
    #[error("I/O error: {0}")]
    Io(String),

    /// The container format is not recognized or not enabled.
    #[error("Invalid or unsupported image format")]
    UnsupportedFormat,

    /// The container was recognized but its data is corrupt or truncated.
    #[error("Failed to decode image: {0}")]
    DecodeFailed(String),

    /// The encoder rejected the image or failed while writing.
    #[error("Failed to encode image: {0}")]
    EncodeFailed(String),
}

impl ImageError {
    /// True for `InvalidShape` errors.
    pub fn is_invalid_shape(&self) -> bool {
        matches!(self, ImageError::InvalidShape(_))
    }

    /// True for `OutOfBounds` errors.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, ImageError::OutOfBounds { .. })
    }

    /// True for `Resource` errors.
    pub fn is_resource(&self) -> bool {
        matches!(self, ImageError::Resource(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = ImageError::OutOfBounds {
            x: -1,
            y: 0,
            width: 4,
            height: 3,
        };
        assert_eq!(
            err.to_string(),
            "Coordinates (-1, 0) are out of bounds for a 4x3 image"
        );
        assert!(err.is_out_of_bounds());
        assert!(!err.is_invalid_shape());
    }

    #[test]
    fn test_jagged_display() {
        let err = ImageError::from(ShapeError::Jagged {
            row: 2,
            expected: 5,
            actual: 4,
        });
        assert_eq!(
            err.to_string(),
            "Invalid shape: row 2 has 4 samples, expected 5"
        );
        assert!(err.is_invalid_shape());
    }

    #[test]
    fn test_invalid_crop_display_names_rectangle_and_shape() {
        let err = ShapeError::InvalidCrop {
            start_row: 1,
            start_col: 3,
            width: 2,
            height: 2,
            image_width: 4,
            image_height: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("2x2"));
        assert!(msg.contains("row 1, column 3"));
        assert!(msg.contains("4x4 image"));
    }

    #[test]
    fn test_resource_display() {
        let err = ImageError::from(ResourceError::UnsupportedFormat);
        assert_eq!(
            err.to_string(),
            "Resource error: Invalid or unsupported image format"
        );
        assert!(err.is_resource());
    }
}
