//! JPEG encoding for export.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};
use tracing::debug;

use crate::error::{PipelineError, PipelineResult};
use crate::raster::RasterImage;

/// Export quality used when none is configured.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Encode an image to JPEG bytes.
///
/// The alpha channel is dropped. `quality` is clamped to 1-100.
///
/// # Errors
///
/// Returns `InvalidDimensions` if the image buffer is inconsistent and
/// `EncodingError` if the encoder fails.
pub fn encode_jpeg(image: &RasterImage, quality: u8) -> PipelineResult<Vec<u8>> {
    image.validate()?;
    let quality = quality.clamp(1, 100);
    let rgb = image.to_rgb_bytes();

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(&rgb, image.width, image.height, ExtendedColorType::Rgb8)
        .map_err(PipelineError::encoding)?;

    let bytes = buffer.into_inner();
    debug!(quality, size = bytes.len(), "encoded jpeg");
    Ok(bytes)
}
