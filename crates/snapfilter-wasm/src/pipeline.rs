//! Pipeline WASM bindings.
//!
//! Operation lists cross the boundary as plain JavaScript objects, using the
//! same shape as the core crate's serde representation:
//!
//! ```typescript
//! const ops = [
//!   { kind: 'color_matrix', value: presetCoefficients },
//!   { kind: 'adjustments', value: { brightness: 1.2, temperature: 7200 } },
//!   { kind: 'geometry', value: { type: 'rotate', degrees: 90 } },
//!   { kind: 'geometry', value: { type: 'resize', width: 1000 } },
//! ];
//! const out = run_pipeline(image, ops);
//! ```

use crate::types::{to_js_error, JsRasterImage};
use serde::Deserialize;
use snapfilter_core::{run, Operation};
use wasm_bindgen::prelude::*;

/// A single operation or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum OperationInput {
    List(Vec<Operation>),
    Single(Operation),
}

impl OperationInput {
    fn into_vec(self) -> Vec<Operation> {
        match self {
            OperationInput::List(ops) => ops,
            OperationInput::Single(op) => vec![op],
        }
    }
}

/// Run an ordered list of operations over an image.
///
/// # Arguments
///
/// * `image` - Source image; it is not modified
/// * `ops` - An operation object or an array of them
///
/// # Errors
///
/// Throws if `ops` does not describe valid operations, or if the pipeline
/// rejects the image or an operation. Nothing is processed in that case.
#[wasm_bindgen]
pub fn run_pipeline(image: &JsRasterImage, ops: JsValue) -> Result<JsRasterImage, JsValue> {
    let ops = serde_wasm_bindgen::from_value::<OperationInput>(ops)
        .map_err(to_js_error)?
        .into_vec();
    run_operations(image, &ops).map_err(to_js_error)
}

pub(crate) fn run_operations(
    image: &JsRasterImage,
    ops: &[Operation],
) -> snapfilter_core::PipelineResult<JsRasterImage> {
    run(&image.to_raster(), ops).map(JsRasterImage::from_raster)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn ops_value(json: &str) -> JsValue {
        js_sys::JSON::parse(json).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_run_pipeline_rotate() {
        let image = JsRasterImage::new(4, 2, vec![0u8; 32]);
        let ops = ops_value(r#"[{"kind":"geometry","value":{"type":"rotate","degrees":90}}]"#);
        let out = run_pipeline(&image, ops).unwrap();
        assert_eq!((out.width(), out.height()), (2, 4));
    }

    #[wasm_bindgen_test]
    fn test_run_pipeline_rejects_bad_angle() {
        let image = JsRasterImage::new(2, 2, vec![0u8; 16]);
        let ops = ops_value(r#"[{"kind":"geometry","value":{"type":"rotate","degrees":45}}]"#);
        assert!(run_pipeline(&image, ops).is_err());
    }

    #[wasm_bindgen_test]
    fn test_run_pipeline_rejects_garbage() {
        let image = JsRasterImage::new(2, 2, vec![0u8; 16]);
        assert!(run_pipeline(&image, ops_value(r#"{"kind":"sharpen"}"#)).is_err());
    }
}
