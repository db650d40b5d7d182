//! Image decoding WASM bindings.
//!
//! Decodes the host shell's uploads (JPEG or PNG) and produces display
//! previews.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, resize_to_fit } from '@warplab/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const preview = resize_to_fit(image, 1280, 1); // bilinear filter
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use crate::types::{filter_from_u8, JsImage};
use warplab_core::{decode, transform};
use wasm_bindgen::prelude::*;

/// Decode an uploaded image (JPEG or PNG) from bytes.
///
/// The container format is sniffed from the bytes. JPEG data gets EXIF
/// orientation correction automatically; PNG alpha is dropped.
///
/// # Errors
///
/// Returns an error if the bytes are not a JPEG or PNG, or the file is
/// corrupted. The host shell should show the message and skip the
/// pipeline entirely.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resize an image to fit within a maximum edge, preserving aspect ratio.
///
/// Used for the side-by-side original/result view; images already small
/// enough come back unchanged.
///
/// # Arguments
///
/// * `image` - The source image
/// * `max_edge` - Maximum length of the longest edge in pixels
/// * `filter` - Filter type: 0 = Nearest, 1 = Bilinear, 2 = Lanczos3
#[wasm_bindgen]
pub fn resize_to_fit(image: &JsImage, max_edge: u32, filter: u8) -> Result<JsImage, JsValue> {
    transform::resize_to_fit(&image.to_decoded(), max_edge, filter_from_u8(filter))
        .map(JsImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
