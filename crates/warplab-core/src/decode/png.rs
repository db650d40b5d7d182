//! PNG image decoding.
//!
//! PNG uploads may carry an alpha channel or a palette; everything is
//! converted to the pipeline's 3-channel RGB model on decode. Alpha is
//! dropped, not composited.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};

use super::{DecodeError, DecodedImage};

/// Decode a PNG image from bytes into RGB pixel data.
///
/// # Errors
///
/// Returns `DecodeError::CorruptedFile` if the bytes cannot be decoded.
pub fn decode_png(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let mut reader = ImageReader::new(Cursor::new(bytes));
    reader.set_format(ImageFormat::Png);

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(DecodedImage::from_rgb_image(img.into_rgb8()))
}
