//! WASM bindings for geometry operations.
//!
//! Rotation is clockwise in quarter turns only. Resize keeps the aspect
//! ratio: callers pick the width and the height follows.

use crate::types::{filter_from_u8, to_js_error, JsRasterImage};
use snapfilter_core::transform::{self, QuarterTurn};
use wasm_bindgen::prelude::*;

/// Rotate an image clockwise.
///
/// # Arguments
///
/// * `image` - Source image
/// * `degrees` - 90, 180 or 270
///
/// # Errors
///
/// Throws for any other angle or an inconsistent pixel buffer.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const upright = rotate(sourceImage, 90);
/// ```
#[wasm_bindgen]
pub fn rotate(image: &JsRasterImage, degrees: i32) -> Result<JsRasterImage, JsValue> {
    let turn = QuarterTurn::from_degrees(degrees).map_err(to_js_error)?;
    transform::rotate(&image.to_raster(), turn)
        .map(JsRasterImage::from_raster)
        .map_err(to_js_error)
}

/// Mirror an image left-to-right.
#[wasm_bindgen]
pub fn flip_horizontal(image: &JsRasterImage) -> Result<JsRasterImage, JsValue> {
    transform::flip_horizontal(&image.to_raster())
        .map(JsRasterImage::from_raster)
        .map_err(to_js_error)
}

/// Mirror an image top-to-bottom.
#[wasm_bindgen]
pub fn flip_vertical(image: &JsRasterImage) -> Result<JsRasterImage, JsValue> {
    transform::flip_vertical(&image.to_raster())
        .map(JsRasterImage::from_raster)
        .map_err(to_js_error)
}

/// Resize an image to a target width, preserving the aspect ratio.
///
/// # Arguments
///
/// * `image` - Source image
/// * `width` - Target width in pixels
/// * `filter` - 0 = Nearest, 1 = Bilinear
///
/// # Example (TypeScript)
///
/// ```typescript
/// // 4000x3000 -> 1000x750
/// const preview = resize(sourceImage, 1000, 1);
/// ```
#[wasm_bindgen]
pub fn resize(image: &JsRasterImage, width: u32, filter: u8) -> Result<JsRasterImage, JsValue> {
    transform::resize(&image.to_raster(), width, filter_from_u8(filter))
        .map(JsRasterImage::from_raster)
        .map_err(to_js_error)
}

/// Height a resize to `target_width` would produce, or 0 if invalid.
#[wasm_bindgen]
pub fn resized_height(width: u32, height: u32, target_width: u32) -> u32 {
    if width == 0 {
        return 0;
    }
    transform::target_height(width, height, target_width)
}
