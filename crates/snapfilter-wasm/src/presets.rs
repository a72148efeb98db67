//! Filter preset and color matrix WASM bindings.
//!
//! # Functions
//!
//! - [`list_presets`] - Preset names in display order
//! - [`preset_matrix`] - The 20 coefficients of a preset, if it has any
//! - [`apply_preset`] - Apply a preset by name
//! - [`apply_color_matrix`] - Apply caller-supplied coefficients
//!
//! # Example
//!
//! ```typescript
//! import { list_presets, apply_preset } from '@snapfilter/wasm';
//!
//! for (const name of list_presets()) {
//!   thumbnails.set(name, apply_preset(thumb, name));
//! }
//! ```

use crate::types::{to_js_error, JsRasterImage};
use snapfilter_core::{preset_by_name, presets, ColorMatrix};
use wasm_bindgen::prelude::*;

/// Preset names in display order.
#[wasm_bindgen]
pub fn list_presets() -> js_sys::Array {
    presets()
        .iter()
        .map(|p| JsValue::from_str(p.name))
        .collect()
}

/// Row-major coefficients for a preset.
///
/// Returns `undefined` for unknown names and for `Original`, which has no
/// matrix.
#[wasm_bindgen]
pub fn preset_matrix(name: &str) -> Option<Vec<f32>> {
    preset_by_name(name)
        .and_then(|p| p.matrix)
        .map(|m| m.coefficients().to_vec())
}

/// Apply a named preset to an image.
///
/// # Errors
///
/// Throws if the name is not in the catalog or the pixel buffer is
/// inconsistent.
#[wasm_bindgen]
pub fn apply_preset(image: &JsRasterImage, name: &str) -> Result<JsRasterImage, JsValue> {
    let preset = preset_by_name(name)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown preset: {}", name)))?;
    let src = image.to_raster();
    let out = match preset.operation() {
        Some(op) => op.apply(&src).map_err(to_js_error)?,
        None => {
            src.validate().map_err(to_js_error)?;
            src
        }
    };
    Ok(JsRasterImage::from_raster(out))
}

/// Apply a 4x5 color matrix to an image.
///
/// # Arguments
///
/// * `image` - Source image
/// * `coefficients` - 20 row-major values as a `Float32Array`; offsets are
///   on the normalized 0-1 scale
#[wasm_bindgen]
pub fn apply_color_matrix(
    image: &JsRasterImage,
    coefficients: &[f32],
) -> Result<JsRasterImage, JsValue> {
    let matrix = ColorMatrix::from_slice(coefficients).map_err(to_js_error)?;
    snapfilter_core::apply_color_matrix(&image.to_raster(), &matrix)
        .map(JsRasterImage::from_raster)
        .map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_matrix() {
        let bw = preset_matrix("B&W").unwrap();
        assert_eq!(bw.len(), 20);
        assert_eq!(&bw[0..3], &[0.299, 0.587, 0.114]);
        assert!(preset_matrix("Original").is_none());
        assert!(preset_matrix("Nope").is_none());
    }

    #[test]
    fn test_apply_preset_bw() {
        let image = JsRasterImage::new(1, 1, vec![255, 0, 0, 255]);
        let out = apply_preset(&image, "B&W").unwrap();
        assert_eq!(out.pixels(), vec![76, 76, 76, 255]);
    }

    #[test]
    fn test_apply_preset_original_is_copy() {
        let pixels = vec![9, 8, 7, 6, 5, 4, 3, 2];
        let image = JsRasterImage::new(2, 1, pixels.clone());
        let out = apply_preset(&image, "Original").unwrap();
        assert_eq!(out.pixels(), pixels);
    }

    #[test]
    fn test_apply_color_matrix_identity() {
        let pixels = vec![10, 20, 30, 40];
        let image = JsRasterImage::new(1, 1, pixels.clone());
        let identity = ColorMatrix::IDENTITY.coefficients().to_vec();
        let out = apply_color_matrix(&image, &identity).unwrap();
        assert_eq!(out.pixels(), pixels);
    }
}
