//! Editing session state.
//!
//! An [`EditSession`] owns everything the editor screen needs to render the
//! current photo: the source image, the selected filter preset, one
//! [`AdjustmentParams`] value and the ordered list of geometry edits. The
//! edits are never baked into the source; every render replays them through
//! the pipeline in a fixed order:
//!
//! 1. Preset color matrix
//! 2. Slider adjustments
//! 3. Geometry edits, in the order they were made
//!
//! Loading a new image resets the preset, sliders and geometry.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::encode::{encode, OutputFormat};
use crate::error::{PipelineError, PipelineResult};
use crate::pipeline::{run, validate_operations, Operation};
use crate::presets::{preset_by_name, FilterPreset};
use crate::raster::RasterImage;
use crate::transform::{GeometryOp, ResizeFilter};
use crate::AdjustmentParams;

/// Preview width used by the editor screen.
pub const DEFAULT_PREVIEW_WIDTH: u32 = 1000;

/// Session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Previews wider than this are scaled down; `None` disables scaling.
    pub preview_width: Option<u32>,
    /// Format used by [`EditSession::export`].
    pub export_format: OutputFormat,
    /// Filter used when scaling previews.
    pub resize_filter: ResizeFilter,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            preview_width: Some(DEFAULT_PREVIEW_WIDTH),
            export_format: OutputFormat::default(),
            resize_filter: ResizeFilter::default(),
        }
    }
}

/// Editing state for one photo at a time.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    config: SessionConfig,
    source: Option<RasterImage>,
    preset: Option<&'static FilterPreset>,
    adjustments: AdjustmentParams,
    geometry: Vec<GeometryOp>,
}

impl EditSession {
    /// Create an empty session.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Replace the current photo and reset every edit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if the image buffer is inconsistent; the
    /// session is left unchanged in that case.
    pub fn load(&mut self, image: RasterImage) -> PipelineResult<()> {
        image.validate()?;
        debug!(width = image.width, height = image.height, "loading image");
        self.source = Some(image);
        self.reset_edits();
        Ok(())
    }

    /// True once an image has been loaded.
    pub fn has_image(&self) -> bool {
        self.source.is_some()
    }

    /// The unedited source image.
    pub fn source(&self) -> Option<&RasterImage> {
        self.source.as_ref()
    }

    /// Drop the preset, reset sliders and clear geometry edits.
    pub fn reset_edits(&mut self) {
        self.preset = None;
        self.adjustments = AdjustmentParams::default();
        self.geometry.clear();
    }

    /// Name of the selected preset, if any.
    pub fn preset_name(&self) -> Option<&'static str> {
        self.preset.map(|p| p.name)
    }

    /// Select a filter preset by name.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperation` if no image is loaded or the name is
    /// not in the catalog.
    pub fn select_preset(&mut self, name: &str) -> PipelineResult<()> {
        self.require_image()?;
        let preset = preset_by_name(name)
            .ok_or_else(|| PipelineError::unsupported(format!("unknown preset '{}'", name)))?;
        debug!(preset = preset.name, "selected preset");
        self.preset = Some(preset);
        Ok(())
    }

    pub fn clear_preset(&mut self) {
        self.preset = None;
    }

    pub fn adjustments(&self) -> AdjustmentParams {
        self.adjustments
    }

    /// Replace the slider values.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperation` if no image is loaded or a value is
    /// not finite.
    pub fn set_adjustments(&mut self, params: AdjustmentParams) -> PipelineResult<()> {
        self.require_image()?;
        Operation::from(params).output_dimensions(1, 1)?;
        self.adjustments = params;
        Ok(())
    }

    pub fn reset_adjustments(&mut self) {
        self.adjustments = AdjustmentParams::default();
    }

    /// Geometry edits in the order they were made.
    pub fn geometry(&self) -> &[GeometryOp] {
        &self.geometry
    }

    /// Rotate the photo 90 degrees clockwise.
    pub fn rotate(&mut self) -> PipelineResult<()> {
        self.push_geometry(GeometryOp::Rotate { degrees: 90 })
    }

    /// Mirror the photo left-to-right.
    pub fn flip(&mut self) -> PipelineResult<()> {
        self.push_geometry(GeometryOp::FlipHorizontal)
    }

    /// Append a geometry edit.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperation` if no image is loaded or the edit is
    /// invalid for the current output size; the edit is not recorded then.
    pub fn push_geometry(&mut self, op: GeometryOp) -> PipelineResult<()> {
        let source = self.require_image()?;
        let (w, h) = validate_operations(source.width, source.height, &self.operations())?;
        op.output_dimensions(w, h)?;
        self.geometry.push(op);
        Ok(())
    }

    /// The full operation list for the current edits.
    pub fn operations(&self) -> Vec<Operation> {
        let mut ops = Vec::with_capacity(self.geometry.len() + 2);
        if let Some(op) = self.preset.and_then(|p| p.operation()) {
            ops.push(op);
        }
        if !self.adjustments.is_identity() {
            ops.push(Operation::Adjustments(self.adjustments));
        }
        ops.extend(self.geometry.iter().copied().map(Operation::Geometry));
        ops
    }

    /// Render the edited photo at full resolution.
    pub fn render(&self) -> PipelineResult<RasterImage> {
        run(self.require_image()?, &self.operations())
    }

    /// Render the edited photo, scaled down to the preview width if wider.
    pub fn render_preview(&self) -> PipelineResult<RasterImage> {
        let source = self.require_image()?;
        let mut ops = self.operations();

        if let Some(preview_width) = self.config.preview_width {
            let (w, _) = validate_operations(source.width, source.height, &ops)?;
            if w > preview_width {
                ops.push(Operation::Geometry(GeometryOp::Resize {
                    width: preview_width,
                    filter: self.config.resize_filter,
                }));
            }
        }

        run(source, &ops)
    }

    /// Render at full resolution and encode in the configured format.
    pub fn export(&self) -> PipelineResult<Vec<u8>> {
        let rendered = self.render()?;
        encode(&rendered, self.config.export_format)
    }

    fn require_image(&self) -> PipelineResult<&RasterImage> {
        self.source
            .as_ref()
            .ok_or_else(|| PipelineError::unsupported("no image loaded"))
    }
}
