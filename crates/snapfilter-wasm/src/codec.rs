//! Image decode and encode WASM bindings.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode JPEG or PNG bytes with EXIF orientation applied
//! - [`encode_jpeg`] - Encode an image to JPEG bytes
//! - [`encode_png`] - Encode an image to PNG bytes
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, encode_jpeg } from '@snapfilter/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const jpeg = encode_jpeg(image, 90);
//! await writable.write(new Blob([jpeg], { type: 'image/jpeg' }));
//! ```

use crate::types::{to_js_error, JsRasterImage};
use snapfilter_core::{decode, encode};
use wasm_bindgen::prelude::*;

/// Decode JPEG or PNG bytes into an upright RGBA image.
///
/// # Errors
///
/// Throws if the format is not recognized or the data is corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRasterImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsRasterImage::from_raster)
        .map_err(to_js_error)
}

/// EXIF orientation tag value (1-8); 1 when the tag is missing.
#[wasm_bindgen]
pub fn read_orientation(bytes: &[u8]) -> u8 {
    decode::read_orientation(bytes) as u8
}

/// Encode an image to JPEG bytes. Alpha is dropped.
///
/// # Arguments
///
/// * `image` - The image to encode
/// * `quality` - JPEG quality, clamped to 1-100 (the editor exports at 90)
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsRasterImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(&image.to_raster(), quality).map_err(to_js_error)
}

/// Encode an image to lossless PNG bytes, keeping alpha.
#[wasm_bindgen]
pub fn encode_png(image: &JsRasterImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(&image.to_raster()).map_err(to_js_error)
}

/// Tests for codec bindings.
///
/// Failure paths return `JsValue` errors and only run on wasm32; see the
/// `wasm_tests` module below.
#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32) -> JsRasterImage {
        let pixels = [200u8, 120, 40, 255].repeat((width * height) as usize);
        JsRasterImage::new(width, height, pixels)
    }

    #[test]
    fn test_encode_jpeg_magic() {
        let jpeg = encode_jpeg(&solid(10, 10), 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_png_roundtrip() {
        let img = solid(6, 4);
        let png = encode_png(&img).unwrap();
        let decoded = decode_image(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (6, 4));
        assert_eq!(decoded.pixels(), img.pixels());
    }

    #[test]
    fn test_read_orientation_without_exif() {
        let jpeg = encode_jpeg(&solid(4, 4), 80).unwrap();
        assert_eq!(read_orientation(&jpeg), 1);
    }
}
