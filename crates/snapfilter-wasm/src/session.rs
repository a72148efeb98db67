//! Edit session WASM bindings.
//!
//! `JsEditSession` keeps the source photo in WASM memory together with the
//! current edits, so the editor only sends slider values and button presses
//! across the boundary and pulls back a rendered preview.
//!
//! # Example
//!
//! ```typescript
//! const session = new JsEditSession();
//! session.load_bytes(new Uint8Array(await file.arrayBuffer()));
//!
//! session.select_preset('Vintage');
//! const adj = session.adjustments();
//! adj.brightness = 1.2;
//! session.set_adjustments(adj);
//! session.rotate();
//!
//! const preview = session.render_preview();
//! const jpeg = session.export();
//! ```

use crate::adjustments::Adjustments;
use crate::types::{to_js_error, JsRasterImage};
use snapfilter_core::{decode_image, EditSession, GeometryOp, SessionConfig};
use wasm_bindgen::prelude::*;

/// Editing session for one photo at a time.
#[wasm_bindgen]
pub struct JsEditSession {
    inner: EditSession,
}

#[wasm_bindgen]
impl JsEditSession {
    /// Create a session with the default configuration
    /// (1000 px previews, JPEG export at quality 90).
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: EditSession::new(SessionConfig::default()),
        }
    }

    /// Create a session from a config object; missing fields use defaults.
    ///
    /// ```typescript
    /// JsEditSession.with_config({ preview_width: 600, export_format: { format: 'png' } });
    /// ```
    pub fn with_config(config: JsValue) -> Result<JsEditSession, JsValue> {
        let config: SessionConfig = serde_wasm_bindgen::from_value(config).map_err(to_js_error)?;
        Ok(Self {
            inner: EditSession::new(config),
        })
    }

    /// Load a decoded image, resetting every edit.
    pub fn load(&mut self, image: &JsRasterImage) -> Result<(), JsValue> {
        self.inner.load(image.to_raster()).map_err(to_js_error)
    }

    /// Decode JPEG or PNG bytes and load the result.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        let image = decode_image(bytes).map_err(to_js_error)?;
        self.inner.load(image).map_err(to_js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn has_image(&self) -> bool {
        self.inner.has_image()
    }

    /// Name of the selected preset, or `undefined`
    #[wasm_bindgen(getter)]
    pub fn preset_name(&self) -> Option<String> {
        self.inner.preset_name().map(str::to_string)
    }

    pub fn select_preset(&mut self, name: &str) -> Result<(), JsValue> {
        self.inner.select_preset(name).map_err(to_js_error)
    }

    pub fn clear_preset(&mut self) {
        self.inner.clear_preset();
    }

    /// A copy of the current slider values
    pub fn adjustments(&self) -> Adjustments {
        Adjustments::from_params(self.inner.adjustments())
    }

    pub fn set_adjustments(&mut self, adjustments: &Adjustments) -> Result<(), JsValue> {
        self.inner
            .set_adjustments(adjustments.params())
            .map_err(to_js_error)
    }

    pub fn reset_adjustments(&mut self) {
        self.inner.reset_adjustments();
    }

    /// Rotate 90 degrees clockwise
    pub fn rotate(&mut self) -> Result<(), JsValue> {
        self.inner.rotate().map_err(to_js_error)
    }

    /// Mirror left-to-right
    pub fn flip(&mut self) -> Result<(), JsValue> {
        self.inner.flip().map_err(to_js_error)
    }

    /// Mirror top-to-bottom
    pub fn flip_vertical(&mut self) -> Result<(), JsValue> {
        self.inner
            .push_geometry(GeometryOp::FlipVertical)
            .map_err(to_js_error)
    }

    /// Number of geometry edits made since the image was loaded
    #[wasm_bindgen(getter)]
    pub fn geometry_count(&self) -> usize {
        self.inner.geometry().len()
    }

    /// Drop the preset, reset sliders and clear geometry edits
    pub fn reset_edits(&mut self) {
        self.inner.reset_edits();
    }

    /// The operation list the next render will run, as plain objects
    pub fn operations(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.operations()).map_err(to_js_error)
    }

    /// Render at full resolution
    pub fn render(&self) -> Result<JsRasterImage, JsValue> {
        self.inner
            .render()
            .map(JsRasterImage::from_raster)
            .map_err(to_js_error)
    }

    /// Render scaled down to the configured preview width
    pub fn render_preview(&self) -> Result<JsRasterImage, JsValue> {
        self.inner
            .render_preview()
            .map(JsRasterImage::from_raster)
            .map_err(to_js_error)
    }

    /// Render at full resolution and encode in the configured format
    pub fn export(&self) -> Result<Vec<u8>, JsValue> {
        self.inner.export().map_err(to_js_error)
    }
}

impl Default for JsEditSession {
    fn default() -> Self {
        Self::new()
    }
}
