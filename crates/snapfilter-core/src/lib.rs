//! SnapFilter Core - Image transform pipeline
//!
//! This crate provides the deterministic pixel pipeline behind SnapFilter:
//! 4x5 color-matrix filters, slider adjustments, quarter-turn rotation,
//! flips and aspect-preserving resize over RGBA images, plus JPEG/PNG
//! decode and encode at the boundaries and an editing session that replays
//! edits non-destructively.
//!
//! All operations are pure: they borrow an input image and return a new
//! one. Identical inputs always produce byte-identical outputs.

pub mod adjustments;
pub mod color;
pub mod color_matrix;
pub mod decode;
pub mod encode;
pub mod error;
mod parallel;
pub mod pipeline;
pub mod presets;
pub mod raster;
pub mod session;
pub mod transform;

pub use adjustments::apply_adjustments;
pub use color::{apply_color_transform, ColorTransform};
pub use color_matrix::{apply_color_matrix, ColorMatrix};
pub use decode::decode_image;
pub use encode::{encode_jpeg, encode_png, OutputFormat};
pub use error::{PipelineError, PipelineResult};
pub use pipeline::{run, validate_operations, Operation};
pub use presets::{preset_by_name, presets, FilterPreset};
pub use raster::RasterImage;
pub use session::{EditSession, SessionConfig};
pub use transform::{apply_geometry, GeometryOp, ResizeFilter};

use std::ops::RangeInclusive;

/// Slider adjustments for image editing
///
/// Every field is a plain multiplier except `temperature`, which is in
/// Kelvin. Missing fields deserialize to their neutral value.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AdjustmentParams {
    /// Brightness multiplier (1.0 = unchanged)
    pub brightness: f32,
    /// Contrast around mid-gray (1.0 = unchanged)
    pub contrast: f32,
    /// Saturation relative to luminance (0.0 = grayscale, 1.0 = unchanged)
    pub saturation: f32,
    /// White balance in Kelvin (6500 = neutral)
    pub temperature: f32,
}

impl Default for AdjustmentParams {
    fn default() -> Self {
        Self {
            brightness: 1.0,
            contrast: 1.0,
            saturation: 1.0,
            temperature: adjustments::NEUTRAL_TEMPERATURE,
        }
    }
}

impl AdjustmentParams {
    /// Slider range for brightness.
    pub const BRIGHTNESS_RANGE: RangeInclusive<f32> = 0.5..=2.0;
    /// Slider range for contrast.
    pub const CONTRAST_RANGE: RangeInclusive<f32> = 0.5..=2.0;
    /// Slider range for saturation.
    pub const SATURATION_RANGE: RangeInclusive<f32> = 0.0..=3.0;
    /// Slider range for temperature.
    pub const TEMPERATURE_RANGE: RangeInclusive<f32> = 3000.0..=9000.0;

    /// Create a new AdjustmentParams with neutral values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are neutral
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Check that every value is within its slider range.
    ///
    /// The pipeline accepts any finite value; this is for UIs that want to
    /// enforce the editor's limits.
    pub fn in_slider_range(&self) -> bool {
        Self::BRIGHTNESS_RANGE.contains(&self.brightness)
            && Self::CONTRAST_RANGE.contains(&self.contrast)
            && Self::SATURATION_RANGE.contains(&self.saturation)
            && Self::TEMPERATURE_RANGE.contains(&self.temperature)
    }
}

/// Route `tracing` output to the test harness. Safe to call repeatedly.
#[cfg(test)]
pub(crate) fn init_test_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
