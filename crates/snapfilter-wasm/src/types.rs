//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core SnapFilter
//! types, handling the conversion between Rust and JavaScript data representations.

use std::fmt::Display;

use snapfilter_core::{RasterImage, ResizeFilter};
use wasm_bindgen::prelude::*;

/// An RGBA image wrapper for JavaScript.
///
/// Pixel data is tightly packed RGBA, 4 bytes per pixel in row-major order,
/// which is the layout of `ImageData.data` on a canvas.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is
/// made to JavaScript memory as a `Uint8Array`. Chain operations on the
/// `JsRasterImage` itself and only extract pixels for display.
#[wasm_bindgen]
pub struct JsRasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsRasterImage {
    /// Create a new JsRasterImage from dimensions and pixel data.
    ///
    /// The buffer is checked when the image is first used by an operation.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsRasterImage {
        JsRasterImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// Optional; wasm-bindgen's finalizer releases the memory otherwise.
    pub fn free(self) {}
}

impl JsRasterImage {
    /// Wrap a core image without copying.
    pub(crate) fn from_raster(img: RasterImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert to a core image for processing.
    ///
    /// Note: This clones the pixel data.
    pub(crate) fn to_raster(&self) -> RasterImage {
        RasterImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// Convert a u8 filter value to the core ResizeFilter.
///
/// Values:
/// - 0 = Nearest
/// - 1 = Bilinear
///
/// Any other value falls back to Bilinear.
pub(crate) fn filter_from_u8(value: u8) -> ResizeFilter {
    match value {
        0 => ResizeFilter::Nearest,
        _ => ResizeFilter::Bilinear,
    }
}

/// Turn a core error into a JavaScript exception value.
pub(crate) fn to_js_error(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_raster_image_creation() {
        let img = JsRasterImage::new(100, 50, vec![0u8; 100 * 50 * 4]);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.byte_length(), 20000);
    }

    #[test]
    fn test_js_raster_image_pixels() {
        let pixels = vec![255u8, 128, 64, 255, 32, 16, 8, 0];
        let img = JsRasterImage::new(2, 1, pixels.clone());
        assert_eq!(img.pixels(), pixels);
    }

    #[test]
    fn test_from_raster() {
        let raster = RasterImage::filled(20, 10, [1, 2, 3, 4]).unwrap();
        let js_img = JsRasterImage::from_raster(raster);
        assert_eq!(js_img.width(), 20);
        assert_eq!(js_img.height(), 10);
        assert_eq!(js_img.byte_length(), 800);
    }

    #[test]
    fn test_to_raster_keeps_source() {
        let js_img = JsRasterImage::new(5, 5, vec![128u8; 5 * 5 * 4]);
        let raster = js_img.to_raster();
        assert!(raster.validate().is_ok());
        assert_eq!(raster.pixels, js_img.pixels());
    }

    #[test]
    fn test_filter_from_u8() {
        assert_eq!(filter_from_u8(0), ResizeFilter::Nearest);
        assert_eq!(filter_from_u8(1), ResizeFilter::Bilinear);
        // Unknown values fall back to Bilinear
        assert_eq!(filter_from_u8(7), ResizeFilter::Bilinear);
    }
}
