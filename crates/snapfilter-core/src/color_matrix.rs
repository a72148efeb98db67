//! 4x5 affine color matrices.
//!
//! A matrix holds 20 coefficients in row-major order. Rows produce the
//! output R, G, B and A channels; columns weight the input R, G, B, A and a
//! constant offset:
//!
//! ```text
//! | R' |   | m0  m1  m2  m3  m4  |   | R |
//! | G' | = | m5  m6  m7  m8  m9  | * | G |
//! | B' |   | m10 m11 m12 m13 m14 |   | B |
//! | A' |   | m15 m16 m17 m18 m19 |   | A |
//!                                     | 1 |
//! ```
//!
//! Channels are normalized to `[0, 1]` before the multiply, so offsets are
//! expressed on the same scale (an offset of `20.0 / 255.0` lifts a channel
//! by 20 byte levels).

use serde::{Deserialize, Serialize};

use crate::color::{apply_color_transform, quantize, ColorTransform};
use crate::error::{PipelineError, PipelineResult};
use crate::raster::RasterImage;

/// Number of coefficients in a color matrix.
pub const MATRIX_LEN: usize = 20;

/// A 4x5 affine transform over normalized RGBA.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorMatrix {
    coefficients: [f32; MATRIX_LEN],
}

impl ColorMatrix {
    /// The identity matrix.
    pub const IDENTITY: ColorMatrix = ColorMatrix::new([
        1.0, 0.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 1.0, 0.0,
    ]);

    /// Create a matrix from 20 row-major coefficients.
    pub const fn new(coefficients: [f32; MATRIX_LEN]) -> Self {
        Self { coefficients }
    }

    /// Create a matrix from a slice, which must hold exactly 20 values.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperation` if the slice has the wrong length.
    pub fn from_slice(values: &[f32]) -> PipelineResult<Self> {
        let coefficients: [f32; MATRIX_LEN] = values.try_into().map_err(|_| {
            PipelineError::unsupported(format!(
                "color matrix needs {} coefficients, got {}",
                MATRIX_LEN,
                values.len()
            ))
        })?;
        Ok(Self { coefficients })
    }

    /// The raw row-major coefficients.
    pub fn coefficients(&self) -> &[f32; MATRIX_LEN] {
        &self.coefficients
    }

    /// One row of the matrix (0 = R, 1 = G, 2 = B, 3 = A).
    fn row(&self, channel: usize) -> &[f32] {
        &self.coefficients[channel * 5..channel * 5 + 5]
    }

    /// True if the alpha row is `[0, 0, 0, 1, 0]`.
    pub fn preserves_alpha(&self) -> bool {
        self.row(3) == [0.0, 0.0, 0.0, 1.0, 0.0]
    }
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ColorTransform for ColorMatrix {
    fn name(&self) -> &'static str {
        "color_matrix"
    }

    fn validate(&self) -> PipelineResult<()> {
        if let Some(pos) = self.coefficients.iter().position(|c| !c.is_finite()) {
            return Err(PipelineError::unsupported(format!(
                "color matrix coefficient {} is not finite",
                pos
            )));
        }
        Ok(())
    }

    fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    #[inline]
    fn transform_pixel(&self, rgba: [u8; 4]) -> [u8; 4] {
        let input = [
            rgba[0] as f32 / 255.0,
            rgba[1] as f32 / 255.0,
            rgba[2] as f32 / 255.0,
            rgba[3] as f32 / 255.0,
            1.0,
        ];

        let mut out = [0u8; 4];
        for (channel, value) in out.iter_mut().enumerate() {
            let dot: f32 = self
                .row(channel)
                .iter()
                .zip(input.iter())
                .map(|(m, v)| m * v)
                .sum();
            *value = quantize(dot.clamp(0.0, 1.0) * 255.0);
        }
        out
    }
}

/// Apply a color matrix to every pixel of an image.
///
/// Each channel is normalized to `[0, 1]`, multiplied through the matrix row
/// for that output channel (with a trailing 1 for the offset column), clamped
/// to `[0, 1]`, scaled back to `[0, 255]` and rounded half-up. Alpha goes
/// through the fourth row like any other channel.
///
/// # Errors
///
/// Returns `InvalidDimensions` for an inconsistent image and
/// `UnsupportedOperation` if any coefficient is NaN or infinite.
pub fn apply_color_matrix(image: &RasterImage, matrix: &ColorMatrix) -> PipelineResult<RasterImage> {
    apply_color_transform(image, matrix)
}
