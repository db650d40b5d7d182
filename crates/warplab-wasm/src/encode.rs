//! Image encoding WASM bindings.
//!
//! The export workflow encodes the current pipeline result as PNG bytes
//! and hands them to the browser's download action under a fixed
//! filename and MIME type.
//!
//! # Example
//!
//! ```typescript
//! import { encode_png_from_image, export_file_name, export_mime_type } from '@warplab/wasm';
//!
//! const bytes = encode_png_from_image(result);
//! const blob = new Blob([bytes], { type: export_mime_type() });
//! download(blob, export_file_name());
//! ```

use crate::types::JsImage;
use warplab_core::encode;
use wasm_bindgen::prelude::*;

/// Fixed filename for the download action.
pub const EXPORT_FILE_NAME: &str = "hasil_edit.png";

/// MIME type of the exported bytes.
pub const EXPORT_MIME_TYPE: &str = "image/png";

/// Encode RGB pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data as a `Uint8Array` (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Errors
///
/// Returns an error if the pixel data length doesn't match
/// `width * height * 3`, either dimension is zero, or encoding fails.
#[wasm_bindgen]
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(pixels, width, height).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a JsImage to PNG bytes.
///
/// Convenience wrapper for encoding a pipeline result directly.
#[wasm_bindgen]
pub fn encode_png_from_image(image: &JsImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(&image.pixels(), image.width(), image.height())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The fixed filename the host shell offers for the download.
#[wasm_bindgen]
pub fn export_file_name() -> String {
    EXPORT_FILE_NAME.to_string()
}

/// The MIME type for the downloaded file.
#[wasm_bindgen]
pub fn export_mime_type() -> String {
    EXPORT_MIME_TYPE.to_string()
}
