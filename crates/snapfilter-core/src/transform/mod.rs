//! Geometric operations: right-angle rotation, mirroring and resize.
//!
//! Geometry ops are order-sensitive relative to each other, but every color
//! operation in this crate is pixel-local, so color and geometry ops commute
//! (up to resize interpolation).
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, clockwise, one of 90/180/270
//! - Origin is the top-left corner

mod resize;
mod rotation;

use serde::{Deserialize, Serialize};

use crate::error::PipelineResult;
use crate::raster::RasterImage;

pub use resize::{resize, target_height, ResizeFilter};
pub use rotation::{flip_horizontal, flip_vertical, rotate, QuarterTurn};

/// A single geometric operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeometryOp {
    /// Clockwise rotation; only 90, 180 and 270 are accepted.
    Rotate { degrees: i32 },
    /// Mirror left-to-right.
    FlipHorizontal,
    /// Mirror top-to-bottom.
    FlipVertical,
    /// Resize to `width`, deriving the height from the aspect ratio.
    Resize {
        width: u32,
        #[serde(default)]
        filter: ResizeFilter,
    },
}

impl GeometryOp {
    /// Resize with the default (bilinear) filter.
    pub fn resize(width: u32) -> Self {
        GeometryOp::Resize {
            width,
            filter: ResizeFilter::default(),
        }
    }

    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryOp::Rotate { .. } => "rotate",
            GeometryOp::FlipHorizontal => "flip_horizontal",
            GeometryOp::FlipVertical => "flip_vertical",
            GeometryOp::Resize { .. } => "resize",
        }
    }

    /// Output dimensions for an input of `width x height`, validating the
    /// op's parameters along the way.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperation` for a rotation outside 90/180/270 or a
    /// resize that would produce an empty image.
    pub fn output_dimensions(&self, width: u32, height: u32) -> PipelineResult<(u32, u32)> {
        match *self {
            GeometryOp::Rotate { degrees } => {
                if QuarterTurn::from_degrees(degrees)?.swaps_dimensions() {
                    Ok((height, width))
                } else {
                    Ok((width, height))
                }
            }
            GeometryOp::FlipHorizontal | GeometryOp::FlipVertical => Ok((width, height)),
            GeometryOp::Resize { width: target, .. } => {
                let out_h = resize::check_target(width, height, target)?;
                Ok((target, out_h))
            }
        }
    }
}

/// Apply a single geometric operation.
///
/// # Errors
///
/// Returns `InvalidDimensions` for an inconsistent image and
/// `UnsupportedOperation` for out-of-domain parameters.
pub fn apply_geometry(image: &RasterImage, op: &GeometryOp) -> PipelineResult<RasterImage> {
    match *op {
        GeometryOp::Rotate { degrees } => rotate(image, QuarterTurn::from_degrees(degrees)?),
        GeometryOp::FlipHorizontal => flip_horizontal(image),
        GeometryOp::FlipVertical => flip_vertical(image),
        GeometryOp::Resize { width, filter } => resize(image, width, filter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;

    fn test_image(width: u32, height: u32) -> RasterImage {
        let pixels = (0..width * height)
            .flat_map(|i| [(i % 256) as u8, (i / 256) as u8, 7, 255])
            .collect();
        RasterImage::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_output_dimensions_match_apply() {
        let img = test_image(12, 7);
        let ops = [
            GeometryOp::Rotate { degrees: 90 },
            GeometryOp::Rotate { degrees: 180 },
            GeometryOp::Rotate { degrees: 270 },
            GeometryOp::FlipHorizontal,
            GeometryOp::FlipVertical,
            GeometryOp::resize(5),
            GeometryOp::Resize {
                width: 30,
                filter: ResizeFilter::Nearest,
            },
        ];
        for op in ops {
            let out = apply_geometry(&img, &op).unwrap();
            assert_eq!(
                op.output_dimensions(img.width, img.height).unwrap(),
                (out.width, out.height),
                "{:?}",
                op
            );
        }
    }

    #[test]
    fn test_bad_rotation_rejected() {
        let img = test_image(4, 4);
        let op = GeometryOp::Rotate { degrees: 45 };
        assert!(matches!(
            apply_geometry(&img, &op),
            Err(PipelineError::UnsupportedOperation(_))
        ));
        assert!(op.output_dimensions(4, 4).is_err());
    }

    #[test]
    fn test_serde_tagged() {
        let op: GeometryOp = serde_json::from_str(r#"{"type":"rotate","degrees":270}"#).unwrap();
        assert_eq!(op, GeometryOp::Rotate { degrees: 270 });

        let op: GeometryOp = serde_json::from_str(r#"{"type":"resize","width":640}"#).unwrap();
        assert_eq!(op, GeometryOp::resize(640));

        let json = serde_json::to_string(&GeometryOp::FlipVertical).unwrap();
        assert_eq!(json, r#"{"type":"flip_vertical"}"#);
    }

    #[test]
    fn test_names() {
        assert_eq!(GeometryOp::FlipHorizontal.name(), "flip_horizontal");
        assert_eq!(GeometryOp::resize(1).name(), "resize");
    }
}
