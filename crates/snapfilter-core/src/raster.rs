//! RGBA raster image type shared by every pipeline stage.

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, PipelineResult};

/// Bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// A decoded image with RGBA pixel data.
///
/// Pixels are stored row-major, top-to-bottom, left-to-right, one byte per
/// channel. Each pipeline stage consumes a `&RasterImage` and returns a new,
/// independently owned image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length must be width * height * 4.
    pub pixels: Vec<u8>,
}

impl RasterImage {
    /// Create a new image, checking that the buffer matches the dimensions.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::InvalidDimensions` if either dimension is zero
    /// or `pixels.len() != width * height * 4`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> PipelineResult<Self> {
        let image = Self {
            width,
            height,
            pixels,
        };
        image.validate()?;
        Ok(image)
    }

    /// Create an image where every pixel has the same RGBA value.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::InvalidDimensions` if either dimension is zero.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> PipelineResult<Self> {
        let count = (width as usize) * (height as usize);
        let pixels = rgba.iter().copied().cycle().take(count * CHANNELS).collect();
        Self::new(width, height, pixels)
    }

    /// Check the buffer-length invariant.
    pub fn validate(&self) -> PipelineResult<()> {
        let expected = expected_len(self.width, self.height);
        if self.width == 0 || self.height == 0 || self.pixels.len() != expected {
            return Err(PipelineError::InvalidDimensions {
                width: self.width,
                height: self.height,
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Length of one row in bytes.
    pub fn row_len(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Read the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let px = self.pixels.get(idx..idx + CHANNELS)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Create a RasterImage from an `image::RgbaImage`.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an `image::RgbaImage` for encoding.
    ///
    /// Returns `None` if the buffer does not match the dimensions.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Drop the alpha channel, producing packed RGB bytes.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .chunks_exact(CHANNELS)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect()
    }
}

/// Expected buffer length for the given dimensions.
#[inline]
pub(crate) fn expected_len(width: u32, height: u32) -> usize {
    (width as usize) * (height as usize) * CHANNELS
}
