//! Warplab WASM - WebAssembly bindings for Warplab
//!
//! This crate exposes the warplab-core transform pipeline to
//! JavaScript/TypeScript applications and carries the host-shell duties
//! the core deliberately refuses: parameter clamping, per-session state,
//! and the fixed export contract.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Upload decoding bindings (JPEG/PNG, preview resize)
//! - `pipeline` - Transform pipeline binding with range clamping
//! - `session` - Per-upload edit state (source + latest result)
//! - `encode` - PNG export bindings and the download contract
//!
//! # Usage
//!
//! ```typescript
//! import init, { EditSession, export_file_name } from '@warplab/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const session = EditSession.from_bytes(bytes);
//!
//! // On every slider/checkbox change:
//! session.set_plan({ rotate: { angle: 90 }, blur: { level: 5 } });
//! draw(session.result());
//!
//! // Download button:
//! const png = session.export_png();
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod pipeline;
mod session;
mod types;

// Re-export public types
pub use decode::{decode_image, resize_to_fit};
pub use encode::{
    encode_png, encode_png_from_image, export_file_name, export_mime_type, EXPORT_FILE_NAME,
    EXPORT_MIME_TYPE,
};
pub use pipeline::apply_pipeline;
pub use session::EditSession;
pub use types::JsImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
