//! Slider adjustment algorithms
//!
//! Applies brightness, contrast, saturation and temperature to RGBA pixel
//! data. Alpha is never touched.
//!
//! ## Adjustment Order
//! 1. Brightness
//! 2. Contrast
//! 3. Saturation
//! 4. Temperature
//!
//! The order is fixed; each stage feeds the next. Values stay on the 0-255
//! scale as `f32`, are clamped to `[0, 255]` after every stage and rounded
//! half-up once at the end, so identity parameters reproduce the input
//! byte-for-byte.

use crate::color::{apply_color_transform, luminance, quantize, ColorTransform};
use crate::error::{PipelineError, PipelineResult};
use crate::raster::RasterImage;
use crate::AdjustmentParams;

/// Temperature value that produces no color shift.
pub const NEUTRAL_TEMPERATURE: f32 = 6500.0;

/// Byte levels of red/blue shift per temperature unit away from neutral.
///
/// 9000 shifts by +50, 3000 by -70.
pub const TEMPERATURE_SHIFT_PER_UNIT: f32 = 0.02;

/// Mid-gray pivot for contrast.
const CONTRAST_PIVOT: f32 = 128.0;

/// Apply slider adjustments to every pixel of an image.
///
/// # Errors
///
/// Returns `InvalidDimensions` for an inconsistent image and
/// `UnsupportedOperation` if any parameter is NaN or infinite.
///
/// # Example
/// ```
/// use snapfilter_core::{AdjustmentParams, RasterImage, adjustments::apply_adjustments};
///
/// let image = RasterImage::filled(1, 1, [64, 64, 64, 255]).unwrap();
/// let params = AdjustmentParams { brightness: 2.0, ..Default::default() };
/// let brighter = apply_adjustments(&image, &params).unwrap();
/// assert_eq!(brighter.pixels, vec![128, 128, 128, 255]);
/// ```
pub fn apply_adjustments(image: &RasterImage, params: &AdjustmentParams) -> PipelineResult<RasterImage> {
    apply_color_transform(image, params)
}

impl ColorTransform for AdjustmentParams {
    fn name(&self) -> &'static str {
        "adjustments"
    }

    fn validate(&self) -> PipelineResult<()> {
        let fields = [
            ("brightness", self.brightness),
            ("contrast", self.contrast),
            ("saturation", self.saturation),
            ("temperature", self.temperature),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(PipelineError::unsupported(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    fn is_identity(&self) -> bool {
        AdjustmentParams::is_identity(self)
    }

    #[inline]
    fn transform_pixel(&self, rgba: [u8; 4]) -> [u8; 4] {
        let mut r = rgba[0] as f32;
        let mut g = rgba[1] as f32;
        let mut b = rgba[2] as f32;

        (r, g, b) = apply_brightness(r, g, b, self.brightness);
        (r, g, b) = apply_contrast(r, g, b, self.contrast);
        (r, g, b) = apply_saturation(r, g, b, self.saturation);
        (r, g, b) = apply_temperature(r, g, b, self.temperature);

        [quantize(r), quantize(g), quantize(b), rgba[3]]
    }
}

#[inline]
fn clamp3(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    (r.clamp(0.0, 255.0), g.clamp(0.0, 255.0), b.clamp(0.0, 255.0))
}

/// Apply brightness adjustment.
///
/// Formula: `output = input * brightness`
#[inline]
fn apply_brightness(r: f32, g: f32, b: f32, brightness: f32) -> (f32, f32, f32) {
    if brightness == 1.0 {
        return (r, g, b);
    }
    clamp3(r * brightness, g * brightness, b * brightness)
}

/// Apply contrast adjustment around mid-gray.
///
/// Formula: `output = (input - 128) * contrast + 128`
#[inline]
fn apply_contrast(r: f32, g: f32, b: f32, contrast: f32) -> (f32, f32, f32) {
    if contrast == 1.0 {
        return (r, g, b);
    }
    clamp3(
        (r - CONTRAST_PIVOT) * contrast + CONTRAST_PIVOT,
        (g - CONTRAST_PIVOT) * contrast + CONTRAST_PIVOT,
        (b - CONTRAST_PIVOT) * contrast + CONTRAST_PIVOT,
    )
}

/// Apply saturation adjustment.
///
/// Each channel is pushed away from (or pulled toward) the pixel's BT.601
/// luminance. 0 = grayscale, 1 = unchanged.
#[inline]
fn apply_saturation(r: f32, g: f32, b: f32, saturation: f32) -> (f32, f32, f32) {
    if saturation == 1.0 {
        return (r, g, b);
    }
    let gray = luminance(r, g, b);
    clamp3(
        gray + (r - gray) * saturation,
        gray + (g - gray) * saturation,
        gray + (b - gray) * saturation,
    )
}

/// Apply temperature adjustment.
///
/// Above neutral (warmer): red up, blue down. Below neutral (cooler): the
/// reverse. The shift is linear in the deviation from 6500.
#[inline]
fn apply_temperature(r: f32, g: f32, b: f32, temperature: f32) -> (f32, f32, f32) {
    let shift = temperature_shift(temperature);
    if shift == 0.0 {
        return (r, g, b);
    }
    clamp3(r + shift, g, b - shift)
}

/// Signed red/blue shift, in byte levels, for a temperature value.
#[inline]
pub fn temperature_shift(temperature: f32) -> f32 {
    (temperature - NEUTRAL_TEMPERATURE) * TEMPERATURE_SHIFT_PER_UNIT
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to create a one-pixel image from RGBA values
    fn pixel(r: u8, g: u8, b: u8, a: u8) -> RasterImage {
        RasterImage::new(1, 1, vec![r, g, b, a]).unwrap()
    }

    /// Helper to apply adjustments and return the resulting pixel bytes
    fn apply(image: &RasterImage, params: &AdjustmentParams) -> Vec<u8> {
        apply_adjustments(image, params).unwrap().pixels
    }

    // ===== Identity Tests =====

    #[test]
    fn test_identity_all_values() {
        let pixels: Vec<u8> = (0..=255u8).flat_map(|v| [v, 255 - v, v / 3, v]).collect();
        let img = RasterImage::new(16, 16, pixels).unwrap();
        let out = apply_adjustments(&img, &AdjustmentParams::default()).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_identity_transform_pixel_without_fast_path() {
        let params = AdjustmentParams::default();
        for v in 0..=255u8 {
            let px = [v, 255 - v, v / 2, 7];
            assert_eq!(params.transform_pixel(px), px);
        }
    }

    // ===== Brightness Tests =====

    #[test]
    fn test_brightness_doubles() {
        let mut params = AdjustmentParams::default();
        params.brightness = 2.0;
        assert_eq!(apply(&pixel(64, 100, 200, 255), &params), vec![128, 200, 255, 255]);
    }

    #[test]
    fn test_brightness_halves() {
        let mut params = AdjustmentParams::default();
        params.brightness = 0.5;
        // 101 * 0.5 = 50.5 rounds half-up to 51
        assert_eq!(apply(&pixel(128, 101, 0, 9), &params), vec![64, 51, 0, 9]);
    }

    #[test]
    fn test_brightness_leaves_alpha() {
        let mut params = AdjustmentParams::default();
        params.brightness = 2.0;
        assert_eq!(apply(&pixel(10, 10, 10, 77), &params)[3], 77);
    }

    // ===== Contrast Tests =====

    #[test]
    fn test_contrast_increase() {
        let mut params = AdjustmentParams::default();
        params.contrast = 2.0;
        // (64-128)*2+128 = 0, (128-128)*2+128 = 128, (192-128)*2+128 = 256 -> 255
        assert_eq!(apply(&pixel(64, 128, 192, 255), &params), vec![0, 128, 255, 255]);
    }

    #[test]
    fn test_contrast_decrease() {
        let mut params = AdjustmentParams::default();
        params.contrast = 0.5;
        // (0-128)*0.5+128 = 64, (255-128)*0.5+128 = 191.5 -> 192
        assert_eq!(apply(&pixel(0, 128, 255, 255), &params), vec![64, 128, 192, 255]);
    }

    // ===== Saturation Tests =====

    #[test]
    fn test_saturation_zero_is_grayscale() {
        let mut params = AdjustmentParams::default();
        params.saturation = 0.0;
        let out = apply(&pixel(200, 128, 100, 255), &params);
        assert_eq!(out[0], out[1]);
        assert_eq!(out[1], out[2]);
        // 0.299*200 + 0.587*128 + 0.114*100 = 146.336
        assert_eq!(out[0], 146);
    }

    #[test]
    fn test_saturation_increase() {
        let mut params = AdjustmentParams::default();
        params.saturation = 2.0;
        let out = apply(&pixel(200, 128, 100, 255), &params);
        let orig_diff = 200 - 100;
        let new_diff = out[0] as i32 - out[2] as i32;
        assert!(new_diff > orig_diff, "Color difference should increase");
    }

    #[test]
    fn test_saturation_gray_unchanged() {
        let mut params = AdjustmentParams::default();
        params.saturation = 3.0;
        assert_eq!(apply(&pixel(90, 90, 90, 255), &params), vec![90, 90, 90, 255]);
    }

    // ===== Temperature Tests =====

    #[test]
    fn test_temperature_warm() {
        let mut params = AdjustmentParams::default();
        params.temperature = 9000.0;
        // shift = 2500 * 0.02 = 50
        assert_eq!(apply(&pixel(128, 128, 128, 255), &params), vec![178, 128, 78, 255]);
    }

    #[test]
    fn test_temperature_cool() {
        let mut params = AdjustmentParams::default();
        params.temperature = 4000.0;
        // shift = -2500 * 0.02 = -50
        assert_eq!(apply(&pixel(128, 128, 128, 255), &params), vec![78, 128, 178, 255]);
    }

    #[test]
    fn test_temperature_clamps() {
        let mut params = AdjustmentParams::default();
        params.temperature = 3000.0;
        assert_eq!(apply(&pixel(20, 5, 240, 255), &params), vec![0, 5, 255, 255]);
    }

    #[test]
    fn test_temperature_shift_monotonic_and_symmetric() {
        let mut last = f32::NEG_INFINITY;
        for t in (3000..=9000).step_by(250) {
            let shift = temperature_shift(t as f32);
            assert!(shift > last);
            last = shift;
        }
        for delta in [100.0f32, 1000.0, 2500.0] {
            let up = temperature_shift(NEUTRAL_TEMPERATURE + delta);
            let down = temperature_shift(NEUTRAL_TEMPERATURE - delta);
            assert!((up + down).abs() < 1e-4);
        }
    }

    // ===== Ordering Tests =====

    #[test]
    fn test_brightness_before_contrast() {
        let mut params = AdjustmentParams::default();
        params.brightness = 2.0;
        params.contrast = 2.0;
        // brightness: 100 -> 200, contrast: (200-128)*2+128 = 272 -> 255
        // The reverse order would give 72 * 2 = 144
        assert_eq!(apply(&pixel(100, 100, 100, 255), &params)[0], 255);
    }

    // ===== Validation Tests =====

    #[test]
    fn test_non_finite_rejected() {
        let mut params = AdjustmentParams::default();
        params.saturation = f32::INFINITY;
        let err = apply_adjustments(&pixel(1, 2, 3, 4), &params).unwrap_err();
        assert!(matches!(err, PipelineError::UnsupportedOperation(_)));
    }

    #[test]
    fn test_out_of_domain_finite_processed() {
        let mut params = AdjustmentParams::default();
        params.brightness = 10.0;
        assert_eq!(apply(&pixel(30, 0, 1, 255), &params), vec![255, 0, 10, 255]);
    }

    #[test]
    fn test_multiple_pixels() {
        let img = RasterImage::new(
            4,
            1,
            vec![
                255, 0, 0, 255, // Red
                0, 255, 0, 255, // Green
                0, 0, 255, 255, // Blue
                128, 128, 128, 255, // Gray
            ],
        )
        .unwrap();
        let mut params = AdjustmentParams::default();
        params.saturation = 0.0;
        let out = apply_adjustments(&img, &params).unwrap();
        for px in out.pixels.chunks_exact(4) {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
        }
        assert_eq!(&out.pixels[0..3], &[76, 76, 76]);
        assert_eq!(&out.pixels[4..7], &[150, 150, 150]);
        assert_eq!(&out.pixels[8..11], &[29, 29, 29]);
    }
}
