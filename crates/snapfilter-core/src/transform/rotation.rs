//! Lossless right-angle rotation and mirroring.
//!
//! These operations are pure permutations of pixel positions: no pixel
//! value is ever interpolated or altered.
//!
//! Rotation angles are clockwise. For a source image of size `w x h`, the
//! inverse mapping from a destination pixel `(x, y)` to its source is:
//!
//! ```text
//! 90:  (y,         h - 1 - x)     output is h x w
//! 180: (w - 1 - x, h - 1 - y)     output is w x h
//! 270: (w - 1 - y, x)             output is h x w
//! ```

use crate::error::{PipelineError, PipelineResult};
use crate::parallel::build_rows;
use crate::raster::{RasterImage, CHANNELS};

/// A clockwise right-angle rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuarterTurn {
    Cw90,
    Cw180,
    Cw270,
}

impl QuarterTurn {
    /// Parse a rotation angle in degrees.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperation` for anything other than 90, 180 or 270.
    pub fn from_degrees(degrees: i32) -> PipelineResult<Self> {
        match degrees {
            90 => Ok(QuarterTurn::Cw90),
            180 => Ok(QuarterTurn::Cw180),
            270 => Ok(QuarterTurn::Cw270),
            other => Err(PipelineError::unsupported(format!(
                "rotation by {} degrees (expected 90, 180 or 270)",
                other
            ))),
        }
    }

    /// Returns true if this rotation swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, QuarterTurn::Cw90 | QuarterTurn::Cw270)
    }
}

/// Rotate an image clockwise by a right angle.
///
/// # Errors
///
/// Returns `InvalidDimensions` if the image buffer is inconsistent.
pub fn rotate(image: &RasterImage, turn: QuarterTurn) -> PipelineResult<RasterImage> {
    image.validate()?;
    let (w, h) = (image.width as usize, image.height as usize);
    let (out_w, out_h) = if turn.swaps_dimensions() {
        (image.height, image.width)
    } else {
        (image.width, image.height)
    };

    Ok(remap(image, out_w, out_h, |x, y| match turn {
        QuarterTurn::Cw90 => (y, h - 1 - x),
        QuarterTurn::Cw180 => (w - 1 - x, h - 1 - y),
        QuarterTurn::Cw270 => (w - 1 - y, x),
    }))
}

/// Mirror an image left-to-right.
///
/// # Errors
///
/// Returns `InvalidDimensions` if the image buffer is inconsistent.
pub fn flip_horizontal(image: &RasterImage) -> PipelineResult<RasterImage> {
    image.validate()?;
    let w = image.width as usize;
    Ok(remap(image, image.width, image.height, |x, y| (w - 1 - x, y)))
}

/// Mirror an image top-to-bottom.
///
/// # Errors
///
/// Returns `InvalidDimensions` if the image buffer is inconsistent.
pub fn flip_vertical(image: &RasterImage) -> PipelineResult<RasterImage> {
    image.validate()?;
    let h = image.height as usize;
    Ok(remap(image, image.width, image.height, |x, y| (x, h - 1 - y)))
}

/// Build a new image by copying, for each destination pixel, the source
/// pixel chosen by `source_of`.
fn remap<F>(image: &RasterImage, out_w: u32, out_h: u32, source_of: F) -> RasterImage
where
    F: Fn(usize, usize) -> (usize, usize) + Send + Sync,
{
    let src_w = image.width as usize;
    let pixels = build_rows(out_w, out_h, |y, row| {
        for (x, dst) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let (sx, sy) = source_of(x, y);
            let idx = (sy * src_w + sx) * CHANNELS;
            dst.copy_from_slice(&image.pixels[idx..idx + CHANNELS]);
        }
    });

    RasterImage {
        width: out_w,
        height: out_h,
        pixels,
    }
}
