//! Lossless PNG encoding.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use tracing::debug;

use crate::error::{PipelineError, PipelineResult};
use crate::raster::RasterImage;

/// Encode an image to PNG bytes, keeping the alpha channel.
///
/// # Errors
///
/// Returns `InvalidDimensions` if the image buffer is inconsistent and
/// `EncodingError` if the encoder fails.
pub fn encode_png(image: &RasterImage) -> PipelineResult<Vec<u8>> {
    image.validate()?;

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(PipelineError::encoding)?;

    let bytes = buffer.into_inner();
    debug!(size = bytes.len(), "encoded png");
    Ok(bytes)
}
