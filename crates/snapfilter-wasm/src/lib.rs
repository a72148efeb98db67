//! SnapFilter WASM - WebAssembly bindings for SnapFilter
//!
//! This crate exposes the snapfilter-core pipeline to JavaScript/TypeScript
//! applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for RGBA image data
//! - `adjustments` - Slider adjustments (brightness, contrast, saturation, temperature)
//! - `presets` - Filter preset catalog and raw color matrices
//! - `transform` - Rotation, flips and resize
//! - `pipeline` - Running a serialized operation list
//! - `codec` - JPEG/PNG decoding and encoding
//! - `session` - Non-destructive edit session
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, apply_preset, encode_jpeg } from '@snapfilter/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const sepia = apply_preset(image, 'Sepia');
//! const jpeg = encode_jpeg(sepia, 90);
//! ```

use wasm_bindgen::prelude::*;

mod adjustments;
mod codec;
mod pipeline;
mod presets;
mod session;
mod transform;
mod types;

// Re-export public types
pub use adjustments::{apply_adjustments, Adjustments};
pub use codec::{decode_image, encode_jpeg, encode_png, read_orientation};
pub use pipeline::run_pipeline;
pub use presets::{apply_color_matrix, apply_preset, list_presets, preset_matrix};
pub use session::JsEditSession;
pub use transform::{flip_horizontal, flip_vertical, resize, resized_height, rotate};
pub use types::JsRasterImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::debug_1(&JsValue::from_str(&format!(
        "snapfilter-wasm {} loaded",
        version()
    )));
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
