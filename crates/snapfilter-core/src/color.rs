//! Shared per-pixel execution path for color operations.
//!
//! Filter presets ([`ColorMatrix`](crate::ColorMatrix)) and slider
//! adjustments ([`AdjustmentParams`](crate::AdjustmentParams)) both implement
//! [`ColorTransform`], so they run through the same executor: every pixel is
//! mapped independently, rows are processed in parallel when the `parallel`
//! feature is enabled, and the input image is never modified.
//!
//! ## Rounding
//!
//! Intermediate values are `f32`. Conversion back to a byte clamps to
//! `[0, 255]` and rounds half-up (`floor(v + 0.5)`).

use crate::error::PipelineResult;
use crate::parallel::build_rows;
use crate::raster::{RasterImage, CHANNELS};

/// ITU-R BT.601 coefficient for red channel in luminance calculation.
pub const LUMA_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for green channel in luminance calculation.
pub const LUMA_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for blue channel in luminance calculation.
pub const LUMA_B: f32 = 0.114;

/// A pixel-local color operation.
///
/// Implementors must be pure: the output for a pixel depends only on that
/// pixel's value and the transform's parameters.
pub trait ColorTransform: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Reject parameters that would make the output undefined.
    fn validate(&self) -> PipelineResult<()>;

    /// True when the transform leaves every pixel unchanged.
    fn is_identity(&self) -> bool;

    /// Map a single RGBA pixel.
    fn transform_pixel(&self, rgba: [u8; 4]) -> [u8; 4];
}

/// Apply a color transform to every pixel of an image.
///
/// # Errors
///
/// Returns `InvalidDimensions` if the image buffer is inconsistent and
/// `UnsupportedOperation` if the transform's parameters are invalid.
pub fn apply_color_transform<T>(image: &RasterImage, transform: &T) -> PipelineResult<RasterImage>
where
    T: ColorTransform + ?Sized,
{
    image.validate()?;
    transform.validate()?;

    if transform.is_identity() {
        return Ok(image.clone());
    }

    let row_len = image.row_len();
    let pixels = build_rows(image.width, image.height, |y, row| {
        let src = &image.pixels[y * row_len..(y + 1) * row_len];
        for (dst, px) in row
            .chunks_exact_mut(CHANNELS)
            .zip(src.chunks_exact(CHANNELS))
        {
            let out = transform.transform_pixel([px[0], px[1], px[2], px[3]]);
            dst.copy_from_slice(&out);
        }
    });

    Ok(RasterImage {
        width: image.width,
        height: image.height,
        pixels,
    })
}

/// Clamp to `[0, 255]` and round half-up to a byte.
#[inline]
pub(crate) fn quantize(value: f32) -> u8 {
    (value.clamp(0.0, 255.0) + 0.5).floor() as u8
}

/// Calculate luminance from RGB values on the 0-255 scale.
#[inline]
pub fn luminance(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}
