//! Mirror reflection across the image center lines.

use crate::decode::DecodedImage;
use crate::ReflectAxis;

/// Mirror an image across one center line.
///
/// `Horizontal` mirrors top-to-bottom (rows swap), `Vertical` mirrors
/// left-to-right (pixels reverse within each row). Applying the same
/// axis twice restores the original image exactly.
pub fn reflect(image: &DecodedImage, axis: ReflectAxis) -> DecodedImage {
    let row_bytes = (image.width * 3) as usize;
    let mut pixels = Vec::with_capacity(image.pixels.len());

    match axis {
        ReflectAxis::Horizontal => {
            for row in image.pixels.chunks_exact(row_bytes).rev() {
                pixels.extend_from_slice(row);
            }
        }
        ReflectAxis::Vertical => {
            for row in image.pixels.chunks_exact(row_bytes) {
                for px in row.chunks_exact(3).rev() {
                    pixels.extend_from_slice(px);
                }
            }
        }
    }

    DecodedImage {
        width: image.width,
        height: image.height,
        pixels,
    }
}
