//! Image encoding boundary.
//!
//! After the pipeline runs, the result is handed back to the application
//! as encoded bytes for saving to the photo library or sharing:
//! - JPEG with configurable quality (alpha is discarded)
//! - PNG, lossless, alpha preserved
//!
//! Encoding failures are reported as `PipelineError::EncodingError`.

mod jpeg;
mod png;

use serde::{Deserialize, Serialize};

use crate::error::PipelineResult;
use crate::raster::RasterImage;

pub use jpeg::{encode_jpeg, DEFAULT_JPEG_QUALITY};
pub use png::encode_png;

/// Target file format for export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum OutputFormat {
    /// JPEG at the given quality (1-100).
    Jpeg { quality: u8 },
    /// Lossless PNG.
    Png,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Jpeg {
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Encode an image in the requested format.
pub fn encode(image: &RasterImage, format: OutputFormat) -> PipelineResult<Vec<u8>> {
    match format {
        OutputFormat::Jpeg { quality } => encode_jpeg(image, quality),
        OutputFormat::Png => encode_png(image),
    }
}
