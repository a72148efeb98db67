//! Slider adjustment WASM bindings.
//!
//! Exposes `AdjustmentParams` as a mutable JavaScript class so the editor
//! sliders can write straight into it.

use crate::types::{to_js_error, JsRasterImage};
use snapfilter_core::AdjustmentParams;
use wasm_bindgen::prelude::*;

/// Slider adjustments wrapper for JavaScript
#[wasm_bindgen]
pub struct Adjustments {
    inner: AdjustmentParams,
}

#[wasm_bindgen]
impl Adjustments {
    /// Create adjustments with neutral values
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: AdjustmentParams::new(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> f32 {
        self.inner.brightness
    }

    #[wasm_bindgen(setter)]
    pub fn set_brightness(&mut self, value: f32) {
        self.inner.brightness = value;
    }

    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> f32 {
        self.inner.contrast
    }

    #[wasm_bindgen(setter)]
    pub fn set_contrast(&mut self, value: f32) {
        self.inner.contrast = value;
    }

    #[wasm_bindgen(getter)]
    pub fn saturation(&self) -> f32 {
        self.inner.saturation
    }

    #[wasm_bindgen(setter)]
    pub fn set_saturation(&mut self, value: f32) {
        self.inner.saturation = value;
    }

    /// White balance in Kelvin
    #[wasm_bindgen(getter)]
    pub fn temperature(&self) -> f32 {
        self.inner.temperature
    }

    #[wasm_bindgen(setter)]
    pub fn set_temperature(&mut self, value: f32) {
        self.inner.temperature = value;
    }

    /// Check if all values are neutral
    pub fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }

    /// Check if all values are within the editor's slider ranges
    pub fn in_slider_range(&self) -> bool {
        self.inner.in_slider_range()
    }

    /// Serialize to a plain object for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(to_js_error)
    }

    /// Deserialize from a plain object; missing fields are neutral
    pub fn from_json(value: JsValue) -> Result<Adjustments, JsValue> {
        let inner: AdjustmentParams = serde_wasm_bindgen::from_value(value).map_err(to_js_error)?;
        Ok(Self { inner })
    }
}

impl Default for Adjustments {
    fn default() -> Self {
        Self::new()
    }
}

impl Adjustments {
    pub(crate) fn from_params(inner: AdjustmentParams) -> Self {
        Self { inner }
    }

    pub(crate) fn params(&self) -> AdjustmentParams {
        self.inner
    }
}

/// Apply slider adjustments to an image.
///
/// # Arguments
/// * `image` - The source image; it is not modified
/// * `adjustments` - The slider values to apply
///
/// # Returns
/// A new JsRasterImage with the adjustments applied
///
/// # Example (TypeScript)
/// ```typescript
/// const adj = new Adjustments();
/// adj.brightness = 1.2;
/// adj.temperature = 7500;
///
/// const adjusted = apply_adjustments(sourceImage, adj);
/// ```
#[wasm_bindgen]
pub fn apply_adjustments(
    image: &JsRasterImage,
    adjustments: &Adjustments,
) -> Result<JsRasterImage, JsValue> {
    snapfilter_core::apply_adjustments(&image.to_raster(), &adjustments.inner)
        .map(JsRasterImage::from_raster)
        .map_err(to_js_error)
}
