//! Image encoding for Warplab.
//!
//! The export path re-encodes the pipeline result as PNG bytes for
//! display and download. PNG is lossless, so the exported file carries
//! exactly the pixels the pipeline produced.

mod png;

pub use png::{encode_png, EncodeError};
