//! Transform pipeline WASM bindings.
//!
//! The host shell's sliders and checkboxes map 1:1 onto a plain JSON
//! object: one key per enabled transform, e.g.
//!
//! ```json
//! { "translate": { "shift_x": 40, "shift_y": 0 },
//!   "blur": { "level": 5 } }
//! ```
//!
//! The object is parsed into a `TransformPlan` via serde and every
//! parameter is clamped to its documented range *here*, at the host
//! shell boundary - the core pipeline trusts its inputs and does not
//! re-validate.

use crate::types::JsImage;
use warplab_core::{apply_pipeline as core_apply, TransformPlan};
use wasm_bindgen::prelude::*;

/// Parameter ranges the host shell UI promises the pipeline.
const SHIFT_RANGE: (i32, i32) = (-200, 200);
const FACTOR_RANGE: (f64, f64) = (0.1, 3.0);
const ANGLE_RANGE: (f64, f64) = (0.0, 360.0);
const SHEAR_RANGE: (f64, f64) = (-1.0, 1.0);
const BLUR_RANGE: (u32, u32) = (1, 25);
const SHARPEN_RANGE: (u8, u8) = (1, 10);

/// Apply the transform pipeline to an image.
///
/// `plan` is a JSON object with one optional key per transform kind (see
/// the module docs). Missing keys are disabled stages; an empty object
/// returns an identical copy of the input.
///
/// # Errors
///
/// Returns an error if `plan` is not a valid plan object. Parameter
/// values outside the documented ranges are clamped, not rejected.
#[wasm_bindgen]
pub fn apply_pipeline(image: &JsImage, plan: JsValue) -> Result<JsImage, JsValue> {
    let mut plan: TransformPlan = serde_wasm_bindgen::from_value(plan)
        .map_err(|e| JsValue::from_str(&format!("Invalid transform plan: {e}")))?;
    clamp_plan(&mut plan);

    let result = core_apply(&image.to_decoded(), &plan);
    Ok(JsImage::from_decoded(result))
}

/// Clamp every enabled parameter to its documented range.
///
/// The blur level additionally snaps down to the nearest odd value,
/// matching the UI slider's step of 2.
pub(crate) fn clamp_plan(plan: &mut TransformPlan) {
    if let Some(t) = plan.translate.as_mut() {
        t.shift_x = t.shift_x.clamp(SHIFT_RANGE.0, SHIFT_RANGE.1);
        t.shift_y = t.shift_y.clamp(SHIFT_RANGE.0, SHIFT_RANGE.1);
    }
    if let Some(s) = plan.scale.as_mut() {
        s.factor = clamp_finite(s.factor, FACTOR_RANGE);
    }
    if let Some(r) = plan.rotate.as_mut() {
        r.angle = clamp_finite(r.angle, ANGLE_RANGE);
    }
    if let Some(s) = plan.shear.as_mut() {
        s.shear_x = clamp_finite(s.shear_x, SHEAR_RANGE);
        s.shear_y = clamp_finite(s.shear_y, SHEAR_RANGE);
    }
    if let Some(b) = plan.blur.as_mut() {
        let level = b.level.clamp(BLUR_RANGE.0, BLUR_RANGE.1);
        b.level = if level % 2 == 0 { level - 1 } else { level };
    }
    if let Some(s) = plan.sharpen.as_mut() {
        s.level = s.level.clamp(SHARPEN_RANGE.0, SHARPEN_RANGE.1);
    }
}

/// Clamp a float, mapping NaN to the range minimum.
fn clamp_finite(v: f64, (lo, hi): (f64, f64)) -> f64 {
    if v.is_nan() {
        lo
    } else {
        v.clamp(lo, hi)
    }
}
