//! Image decoding boundary.
//!
//! The camera and gallery collaborators hand over encoded bytes (JPEG or
//! PNG). This module turns them into an upright RGBA [`RasterImage`]:
//!
//! 1. Read the EXIF orientation tag, if any
//! 2. Decode with the `image` crate and expand to RGBA8
//! 3. Apply the orientation correction through the regular pipeline
//!
//! Decoding failures are reported as `PipelineError::EncodingError`.

mod orientation;

use std::io::Cursor;

use image::ImageReader;
use tracing::debug;

use crate::error::{PipelineError, PipelineResult};
use crate::pipeline::{run, Operation};
use crate::raster::RasterImage;

pub use orientation::{read_orientation, Orientation};

/// Decode JPEG or PNG bytes, applying EXIF orientation correction.
///
/// # Errors
///
/// Returns `EncodingError` if the format is not recognized or the data is
/// corrupted.
pub fn decode_image(bytes: &[u8]) -> PipelineResult<RasterImage> {
    let orientation = read_orientation(bytes);
    let image = decode_image_no_orientation(bytes)?;

    let ops: Vec<Operation> = orientation
        .correction()
        .into_iter()
        .map(Operation::from)
        .collect();
    if ops.is_empty() {
        return Ok(image);
    }

    debug!(?orientation, "correcting orientation");
    run(&image, &ops)
}

/// Decode JPEG or PNG bytes without applying EXIF orientation.
///
/// # Errors
///
/// Returns `EncodingError` if the format is not recognized or the data is
/// corrupted.
pub fn decode_image_no_orientation(bytes: &[u8]) -> PipelineResult<RasterImage> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(PipelineError::encoding)?;

    let img = reader.decode().map_err(PipelineError::encoding)?;
    debug!(width = img.width(), height = img.height(), "decoded image");

    let image = RasterImage::from_rgba_image(img.into_rgba8());
    image.validate()?;
    Ok(image)
}
