//! Built-in filter preset catalog.
//!
//! The catalog is fixed and not user-editable. Each preset pairs a unique
//! name with an optional [`ColorMatrix`]; `Original` has no matrix and is a
//! no-op. Every matrix leaves alpha untouched.

use serde::Serialize;

use crate::color_matrix::ColorMatrix;
use crate::pipeline::Operation;

/// A named filter preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilterPreset {
    /// Unique preset name shown to the user.
    pub name: &'static str,
    /// Color matrix, or `None` for the unfiltered original.
    pub matrix: Option<ColorMatrix>,
}

impl FilterPreset {
    /// The pipeline operation for this preset, if it changes anything.
    pub fn operation(&self) -> Option<Operation> {
        self.matrix.map(Operation::ColorMatrix)
    }
}

/// Lift applied by the Fade preset: 20 byte levels, on the normalized scale.
const FADE_LIFT: f32 = 20.0 / 255.0;

/// Every preset, in display order.
pub const PRESETS: [FilterPreset; 8] = [
    FilterPreset {
        name: "Original",
        matrix: None,
    },
    FilterPreset {
        name: "B&W",
        matrix: Some(ColorMatrix::new([
            0.299, 0.587, 0.114, 0.0, 0.0, //
            0.299, 0.587, 0.114, 0.0, 0.0, //
            0.299, 0.587, 0.114, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, 0.0,
        ])),
    },
    FilterPreset {
        name: "Sepia",
        matrix: Some(ColorMatrix::new([
            0.393, 0.769, 0.189, 0.0, 0.0, //
            0.349, 0.686, 0.168, 0.0, 0.0, //
            0.272, 0.534, 0.131, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, 0.0,
        ])),
    },
    FilterPreset {
        name: "Vintage",
        matrix: Some(ColorMatrix::new([
            0.6, 0.3, 0.1, 0.0, 0.0, //
            0.2, 0.5, 0.3, 0.0, 0.0, //
            0.2, 0.3, 0.5, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, 0.0,
        ])),
    },
    FilterPreset {
        name: "Cool",
        matrix: Some(ColorMatrix::new([
            0.9, 0.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 1.1, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, 0.0,
        ])),
    },
    FilterPreset {
        name: "Warm",
        matrix: Some(ColorMatrix::new([
            1.1, 0.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 0.9, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, 0.0,
        ])),
    },
    FilterPreset {
        name: "Vibrant",
        matrix: Some(ColorMatrix::new([
            1.2, 0.0, 0.0, 0.0, 0.0, //
            0.0, 1.2, 0.0, 0.0, 0.0, //
            0.0, 0.0, 1.2, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, 0.0,
        ])),
    },
    FilterPreset {
        name: "Fade",
        matrix: Some(ColorMatrix::new([
            0.8, 0.0, 0.0, 0.0, FADE_LIFT, //
            0.0, 0.8, 0.0, 0.0, FADE_LIFT, //
            0.0, 0.0, 0.8, 0.0, FADE_LIFT, //
            0.0, 0.0, 0.0, 1.0, 0.0,
        ])),
    },
];

/// All presets in display order.
pub fn presets() -> &'static [FilterPreset] {
    &PRESETS
}

/// Look up a preset by its exact name.
pub fn preset_by_name(name: &str) -> Option<&'static FilterPreset> {
    PRESETS.iter().find(|p| p.name == name)
}
