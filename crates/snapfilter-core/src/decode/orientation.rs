//! EXIF orientation tags and their geometry equivalents.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::transform::GeometryOp;

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Stored upright.
    #[default]
    Normal = 1,
    FlipHorizontal = 2,
    Rotate180 = 3,
    FlipVertical = 4,
    /// Mirrored across the main diagonal.
    Transpose = 5,
    Rotate90CW = 6,
    /// Mirrored across the anti-diagonal.
    Transverse = 7,
    Rotate270CW = 8,
}

impl Orientation {
    /// Geometry ops that bring an image stored with this orientation upright.
    pub fn correction(self) -> Vec<GeometryOp> {
        match self {
            Orientation::Normal => vec![],
            Orientation::FlipHorizontal => vec![GeometryOp::FlipHorizontal],
            Orientation::Rotate180 => vec![GeometryOp::Rotate { degrees: 180 }],
            Orientation::FlipVertical => vec![GeometryOp::FlipVertical],
            Orientation::Transpose => vec![
                GeometryOp::Rotate { degrees: 90 },
                GeometryOp::FlipHorizontal,
            ],
            Orientation::Rotate90CW => vec![GeometryOp::Rotate { degrees: 90 }],
            Orientation::Transverse => vec![
                GeometryOp::Rotate { degrees: 270 },
                GeometryOp::FlipHorizontal,
            ],
            Orientation::Rotate270CW => vec![GeometryOp::Rotate { degrees: 270 }],
        }
    }
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// Read the EXIF orientation from encoded image bytes.
///
/// Returns `Orientation::Normal` when there is no EXIF block or it has no
/// orientation tag.
pub fn read_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(exif::Error::NotFound(_)) => Orientation::Normal,
        Err(e) => {
            warn!(error = %e, "ignoring unreadable EXIF data");
            Orientation::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{run, Operation};
    use crate::raster::RasterImage;

    #[test]
    fn test_orientation_from_u32() {
        assert_eq!(Orientation::from(1), Orientation::Normal);
        assert_eq!(Orientation::from(6), Orientation::Rotate90CW);
        assert_eq!(Orientation::from(99), Orientation::Normal);
    }

    #[test]
    fn test_correction_dimensions() {
        let img = RasterImage::filled(6, 4, [0, 0, 0, 255]).unwrap();
        for (tag, dims) in [
            (1, (6, 4)),
            (2, (6, 4)),
            (3, (6, 4)),
            (4, (6, 4)),
            (5, (4, 6)),
            (6, (4, 6)),
            (7, (4, 6)),
            (8, (4, 6)),
        ] {
            let ops: Vec<Operation> = Orientation::from(tag)
                .correction()
                .into_iter()
                .map(Operation::from)
                .collect();
            let out = run(&img, &ops).unwrap();
            assert_eq!((out.width, out.height), dims, "orientation {}", tag);
        }
    }

    #[test]
    fn test_transpose_mirrors_diagonal() {
        // 2x1: [a b] transposed is the column [a; b]
        let img = RasterImage::new(2, 1, vec![1, 0, 0, 255, 2, 0, 0, 255]).unwrap();
        let ops: Vec<Operation> = Orientation::Transpose
            .correction()
            .into_iter()
            .map(Operation::from)
            .collect();
        let out = run(&img, &ops).unwrap();
        assert_eq!((out.width, out.height), (1, 2));
        assert_eq!(out.pixel(0, 0).unwrap()[0], 1);
        assert_eq!(out.pixel(0, 1).unwrap()[0], 2);
    }

    #[test]
    fn test_read_orientation_garbage() {
        assert_eq!(read_orientation(&[0x00, 0x01, 0x02]), Orientation::Normal);
        assert_eq!(read_orientation(&[]), Orientation::Normal);
    }
}
