//! Aspect-preserving resize with bilinear or nearest-neighbor sampling.
//!
//! # Algorithm
//!
//! The output height is derived from the requested width:
//!
//! ```text
//! target_height = round_half_up(target_width * height / width)
//! ```
//!
//! Sampling uses inverse mapping with pixel centers aligned:
//!
//! ```text
//! src_x = (dst_x + 0.5) * (width / target_width) - 0.5
//! ```
//!
//! Coordinates are clamped to the source edges. One filter is used for every
//! output pixel of a given resize; the two are never mixed. All four
//! channels, including alpha, are interpolated independently.

use serde::{Deserialize, Serialize};

use crate::color::quantize;
use crate::error::{PipelineError, PipelineResult};
use crate::parallel::build_rows;
use crate::raster::{RasterImage, CHANNELS};

/// Sampling filter for resize operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeFilter {
    /// Nearest neighbor sampling (fastest, lower fidelity).
    Nearest,
    /// Bilinear interpolation over the 2x2 neighborhood.
    #[default]
    Bilinear,
}

/// Compute the output height for a resize to `target_width`.
///
/// Rounds half-up using integer arithmetic, so the result is exact.
pub fn target_height(width: u32, height: u32, target_width: u32) -> u32 {
    if width == 0 {
        return 0;
    }
    let num = 2 * target_width as u64 * height as u64 + width as u64;
    let den = 2 * width as u64;
    (num / den).min(u32::MAX as u64) as u32
}

/// Check that a resize to `target_width` yields a non-empty image.
pub(crate) fn check_target(width: u32, height: u32, target_width: u32) -> PipelineResult<u32> {
    if target_width == 0 {
        return Err(PipelineError::unsupported("resize to width 0"));
    }
    let out_h = target_height(width, height, target_width);
    if out_h == 0 {
        return Err(PipelineError::unsupported(format!(
            "resize of {}x{} to width {} yields height 0",
            width, height, target_width
        )));
    }
    Ok(out_h)
}

/// Resize an image to `target_width`, preserving its aspect ratio.
///
/// # Errors
///
/// Returns `InvalidDimensions` if the image buffer is inconsistent and
/// `UnsupportedOperation` if `target_width` is 0 or the computed height
/// would be 0.
pub fn resize(
    image: &RasterImage,
    target_width: u32,
    filter: ResizeFilter,
) -> PipelineResult<RasterImage> {
    image.validate()?;
    let out_h = check_target(image.width, image.height, target_width)?;

    // Fast path: dimensions already match
    if target_width == image.width && out_h == image.height {
        return Ok(image.clone());
    }

    let xs = axis_samples(image.width, target_width);
    let ys = axis_samples(image.height, out_h);

    let src_row = image.row_len();
    let pixels = build_rows(target_width, out_h, |y, row| {
        let sy = ys[y];
        for (dst, sx) in row.chunks_exact_mut(CHANNELS).zip(xs.iter()) {
            match filter {
                ResizeFilter::Nearest => {
                    let idx = sy.nearest() * src_row + sx.nearest() * CHANNELS;
                    dst.copy_from_slice(&image.pixels[idx..idx + CHANNELS]);
                }
                ResizeFilter::Bilinear => {
                    let p00 = sy.i0 * src_row + sx.i0 * CHANNELS;
                    let p10 = sy.i0 * src_row + sx.i1 * CHANNELS;
                    let p01 = sy.i1 * src_row + sx.i0 * CHANNELS;
                    let p11 = sy.i1 * src_row + sx.i1 * CHANNELS;
                    for c in 0..CHANNELS {
                        let top = lerp(image.pixels[p00 + c], image.pixels[p10 + c], sx.frac);
                        let bottom = lerp(image.pixels[p01 + c], image.pixels[p11 + c], sx.frac);
                        dst[c] = quantize(top + (bottom - top) * sy.frac);
                    }
                }
            }
        }
    });

    Ok(RasterImage {
        width: target_width,
        height: out_h,
        pixels,
    })
}

/// Precomputed sampling position along one axis.
#[derive(Debug, Clone, Copy)]
struct AxisSample {
    /// Lower neighbor index.
    i0: usize,
    /// Upper neighbor index (clamped to the edge).
    i1: usize,
    /// Weight of the upper neighbor.
    frac: f32,
}

impl AxisSample {
    #[inline]
    fn nearest(&self) -> usize {
        if self.frac >= 0.5 {
            self.i1
        } else {
            self.i0
        }
    }
}

/// Sampling positions for every destination index along an axis.
fn axis_samples(src_len: u32, dst_len: u32) -> Vec<AxisSample> {
    let scale = src_len as f64 / dst_len as f64;
    let max = (src_len - 1) as f64;
    (0..dst_len)
        .map(|d| {
            let pos = ((d as f64 + 0.5) * scale - 0.5).clamp(0.0, max);
            let i0 = pos.floor() as usize;
            let i1 = (i0 + 1).min(src_len as usize - 1);
            AxisSample {
                i0,
                i1,
                frac: (pos - i0 as f64) as f32,
            }
        })
        .collect()
}

#[inline]
fn lerp(a: u8, b: u8, t: f32) -> f32 {
    a as f32 + (b as f32 - a as f32) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(width: u32, height: u32) -> RasterImage {
        // Horizontal gradient in R, vertical in G
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8);
                pixels.push(((y * 255) / height.max(1)) as u8);
                pixels.push(128);
                pixels.push(255);
            }
        }
        RasterImage::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_resize_downscale_dimensions() {
        let img = create_test_image(100, 50);
        let out = resize(&img, 50, ResizeFilter::Bilinear).unwrap();
        assert_eq!((out.width, out.height), (50, 25));
        assert_eq!(out.pixels.len(), 50 * 25 * 4);
    }

    #[test]
    fn test_resize_upscale_dimensions() {
        let img = create_test_image(30, 20);
        let out = resize(&img, 45, ResizeFilter::Bilinear).unwrap();
        assert_eq!((out.width, out.height), (45, 30));
    }

    #[test]
    fn test_target_height_rounds_half_up() {
        // 1000 * 4000 / 6000 = 666.67
        assert_eq!(target_height(6000, 4000, 1000), 667);
        // 3 * 1 / 2 = 1.5 -> 2
        assert_eq!(target_height(2, 1, 3), 2);
        // 1 * 1 / 4 = 0.25 -> 0
        assert_eq!(target_height(4, 1, 1), 0);
    }

    #[test]
    fn test_same_dimensions_is_copy() {
        let img = create_test_image(20, 10);
        let out = resize(&img, 20, ResizeFilter::Bilinear).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_uniform_image_stays_uniform() {
        let img = RasterImage::filled(17, 9, [10, 200, 33, 128]).unwrap();
        for filter in [ResizeFilter::Nearest, ResizeFilter::Bilinear] {
            let out = resize(&img, 40, filter).unwrap();
            assert!(out.pixels.chunks_exact(4).all(|p| p == [10, 200, 33, 128]));
        }
    }

    #[test]
    fn test_bilinear_halving_averages_pairs() {
        // 4x2 -> 2x1: each output sits between two columns and two rows
        let pixels = vec![
            0, 0, 0, 255, 100, 0, 0, 255, 200, 0, 0, 255, 250, 0, 0, 255, //
            0, 0, 0, 255, 100, 0, 0, 255, 200, 0, 0, 255, 250, 0, 0, 255,
        ];
        let img = RasterImage::new(4, 2, pixels).unwrap();
        let out = resize(&img, 2, ResizeFilter::Bilinear).unwrap();
        assert_eq!((out.width, out.height), (2, 1));
        assert_eq!(out.pixel(0, 0).unwrap()[0], 50);
        assert_eq!(out.pixel(1, 0).unwrap()[0], 225);
    }

    #[test]
    fn test_nearest_upscale_duplicates() {
        let img = RasterImage::new(2, 1, vec![10, 0, 0, 255, 90, 0, 0, 255]).unwrap();
        let out = resize(&img, 4, ResizeFilter::Nearest).unwrap();
        assert_eq!((out.width, out.height), (4, 2));
        let reds: Vec<u8> = out.pixels.chunks_exact(4).take(4).map(|p| p[0]).collect();
        assert_eq!(reds, vec![10, 10, 90, 90]);
    }

    #[test]
    fn test_zero_width_rejected() {
        let img = create_test_image(10, 10);
        assert!(matches!(
            resize(&img, 0, ResizeFilter::Bilinear),
            Err(PipelineError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn test_zero_height_rejected() {
        let img = create_test_image(100, 1);
        assert!(matches!(
            resize(&img, 10, ResizeFilter::Bilinear),
            Err(PipelineError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn test_filter_serde_names() {
        assert_eq!(serde_json::to_string(&ResizeFilter::Nearest).unwrap(), "\"nearest\"");
        let f: ResizeFilter = serde_json::from_str("\"bilinear\"").unwrap();
        assert_eq!(f, ResizeFilter::Bilinear);
    }
}
