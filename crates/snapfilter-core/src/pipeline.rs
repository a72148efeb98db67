//! Ordered execution of color and geometry operations.
//!
//! ```text
//! source -> op[0] -> op[1] -> ... -> op[n-1] -> result
//! ```
//!
//! [`run`] folds the operation list left to right. The whole list is
//! validated against the evolving image dimensions before any pixel is
//! touched, so a bad parameter anywhere in the list fails the call without
//! doing partial work. The caller's image is only ever borrowed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adjustments::apply_adjustments;
use crate::color::ColorTransform;
use crate::color_matrix::{apply_color_matrix, ColorMatrix};
use crate::error::PipelineResult;
use crate::raster::RasterImage;
use crate::transform::{apply_geometry, GeometryOp};
use crate::AdjustmentParams;

/// One step in a pipeline run.
///
/// Serialized adjacently tagged, e.g.
/// `{"kind": "geometry", "value": {"type": "rotate", "degrees": 90}}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Operation {
    /// Apply a 4x5 color matrix.
    ColorMatrix(ColorMatrix),
    /// Apply brightness, contrast, saturation and temperature.
    Adjustments(AdjustmentParams),
    /// Apply a rotation, flip or resize.
    Geometry(GeometryOp),
}

impl Operation {
    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::ColorMatrix(m) => m.name(),
            Operation::Adjustments(p) => p.name(),
            Operation::Geometry(g) => g.name(),
        }
    }

    /// Output dimensions for an input of `width x height`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperation` if the op's parameters are invalid.
    pub fn output_dimensions(&self, width: u32, height: u32) -> PipelineResult<(u32, u32)> {
        match self {
            Operation::ColorMatrix(m) => m.validate().map(|_| (width, height)),
            Operation::Adjustments(p) => p.validate().map(|_| (width, height)),
            Operation::Geometry(g) => g.output_dimensions(width, height),
        }
    }

    /// Apply this operation to an image.
    pub fn apply(&self, image: &RasterImage) -> PipelineResult<RasterImage> {
        match self {
            Operation::ColorMatrix(m) => apply_color_matrix(image, m),
            Operation::Adjustments(p) => apply_adjustments(image, p),
            Operation::Geometry(g) => apply_geometry(image, g),
        }
    }
}

impl From<ColorMatrix> for Operation {
    fn from(matrix: ColorMatrix) -> Self {
        Operation::ColorMatrix(matrix)
    }
}

impl From<AdjustmentParams> for Operation {
    fn from(params: AdjustmentParams) -> Self {
        Operation::Adjustments(params)
    }
}

impl From<GeometryOp> for Operation {
    fn from(op: GeometryOp) -> Self {
        Operation::Geometry(op)
    }
}

/// Validate an operation list against a starting size.
///
/// Returns the dimensions the list would produce.
///
/// # Errors
///
/// Returns the first `UnsupportedOperation` found in list order.
pub fn validate_operations(
    width: u32,
    height: u32,
    ops: &[Operation],
) -> PipelineResult<(u32, u32)> {
    ops.iter()
        .try_fold((width, height), |(w, h), op| op.output_dimensions(w, h))
}

/// Run an ordered list of operations over an image.
///
/// Each operation's output becomes the next one's input. An empty list
/// returns a copy of the input.
///
/// # Errors
///
/// - `InvalidDimensions` if `image.pixels.len() != width * height * 4`
/// - `UnsupportedOperation` if any op has out-of-domain parameters,
///   e.g. a rotation other than 90/180/270
///
/// # Example
/// ```
/// use snapfilter_core::{run, GeometryOp, Operation, RasterImage};
///
/// let image = RasterImage::filled(4, 2, [255, 0, 0, 255]).unwrap();
/// let ops = [Operation::Geometry(GeometryOp::Rotate { degrees: 90 })];
/// let rotated = run(&image, &ops).unwrap();
/// assert_eq!((rotated.width, rotated.height), (2, 4));
/// ```
pub fn run(image: &RasterImage, ops: &[Operation]) -> PipelineResult<RasterImage> {
    image.validate()?;
    let (out_w, out_h) = validate_operations(image.width, image.height, ops)?;
    debug!(
        ops = ops.len(),
        width = image.width,
        height = image.height,
        out_width = out_w,
        out_height = out_h,
        "running pipeline"
    );

    let mut current: Option<RasterImage> = None;
    for (index, op) in ops.iter().enumerate() {
        let input = current.as_ref().unwrap_or(image);
        let output = op.apply(input)?;
        debug!(
            index,
            op = op.name(),
            width = output.width,
            height = output.height,
            "applied operation"
        );
        current = Some(output);
    }

    Ok(current.unwrap_or_else(|| image.clone()))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
