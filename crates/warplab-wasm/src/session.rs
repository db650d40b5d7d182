//! Per-session edit state.
//!
//! The browser session owns exactly one `EditSession` per upload: the
//! pristine decoded source and the most recent pipeline result. Both are
//! plain values behind the JS handle - there is no process-wide state,
//! and every parameter change recomputes from the source rather than
//! resuming a previous evaluation.

use crate::pipeline::clamp_plan;
use crate::types::JsImage;
use warplab_core::decode::DecodedImage;
use warplab_core::{apply_pipeline, encode, TransformPlan};
use wasm_bindgen::prelude::*;

/// One upload's editing state: the untouched source image and the
/// latest pipeline result.
#[wasm_bindgen]
pub struct EditSession {
    source: DecodedImage,
    result: DecodedImage,
}

#[wasm_bindgen]
impl EditSession {
    /// Start a session from an already-decoded image.
    ///
    /// The initial result is the unmodified source.
    #[wasm_bindgen(constructor)]
    pub fn new(image: &JsImage) -> EditSession {
        let source = image.to_decoded();
        let result = source.clone();
        EditSession { source, result }
    }

    /// Start a session directly from uploaded JPEG or PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error for unrecognized or corrupted uploads; no
    /// session is created and the host shell should prompt for a new
    /// file.
    pub fn from_bytes(bytes: &[u8]) -> Result<EditSession, JsValue> {
        let source = warplab_core::decode::decode_image(bytes)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let result = source.clone();
        Ok(EditSession { source, result })
    }

    /// Recompute the result from the pristine source with a new plan.
    ///
    /// `plan` is the same JSON object shape as
    /// [`crate::pipeline::apply_pipeline`]; parameters are clamped to
    /// their documented ranges. Called once per UI trigger.
    ///
    /// # Errors
    ///
    /// Returns an error if `plan` is not a valid plan object; the
    /// previous result is kept in that case.
    pub fn set_plan(&mut self, plan: JsValue) -> Result<(), JsValue> {
        let plan: TransformPlan = serde_wasm_bindgen::from_value(plan)
            .map_err(|e| JsValue::from_str(&format!("Invalid transform plan: {e}")))?;
        self.recompute(plan);
        Ok(())
    }

    /// Discard all transforms: the result becomes the source again.
    pub fn reset(&mut self) {
        self.result = self.source.clone();
    }

    /// The unmodified source image (for the side-by-side view).
    pub fn source(&self) -> JsImage {
        JsImage::from_decoded(self.source.clone())
    }

    /// The most recent pipeline result.
    pub fn result(&self) -> JsImage {
        JsImage::from_decoded(self.result.clone())
    }

    /// Width of the current result in pixels.
    #[wasm_bindgen(getter)]
    pub fn result_width(&self) -> u32 {
        self.result.width
    }

    /// Height of the current result in pixels.
    #[wasm_bindgen(getter)]
    pub fn result_height(&self) -> u32 {
        self.result.height
    }

    /// Encode the current result as PNG bytes for the download action.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    pub fn export_png(&self) -> Result<Vec<u8>, JsValue> {
        encode::encode_png(&self.result.pixels, self.result.width, self.result.height)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl EditSession {
    /// Clamp and run the pipeline against the pristine source.
    fn recompute(&mut self, mut plan: TransformPlan) {
        clamp_plan(&mut plan);
        self.result = apply_pipeline(&self.source, &plan);
    }
}
