//! Image resizing: the scale stage and preview fitting.
//!
//! Resampling goes through the `image` crate. The scale stage uses the
//! primitive's default bilinear (triangle) filter; preview fitting lets
//! the host shell pick a filter.

use crate::decode::{DecodeError, DecodedImage, FilterType};

/// Scale an image uniformly by `factor`.
///
/// Output dimensions are `round(dim * factor)`, at least 1x1; there is
/// no fixed canvas, the image grows or shrinks. A factor that rounds to
/// the input dimensions (including exactly 1.0) returns a byte-identical
/// copy.
pub fn scale(image: &DecodedImage, factor: f64) -> DecodedImage {
    let dst_w = ((image.width as f64 * factor).round() as u32).max(1);
    let dst_h = ((image.height as f64 * factor).round() as u32).max(1);

    // resize only fails on zero dimensions or a buffer/dimension
    // mismatch, neither of which a well-formed image can produce
    resize(image, dst_w, dst_h, FilterType::Bilinear).unwrap_or_else(|_| image.clone())
}

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` for zero target dimensions and
/// `DecodeError::CorruptedFile` when the pixel buffer does not match the
/// source dimensions.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image
        .to_rgb_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Pixel buffer size mismatch".to_string()))?;

    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(DecodedImage::from_rgb_image(resized))
}

/// Resize an image to fit within a maximum edge length, preserving
/// aspect ratio. Images that already fit are returned unchanged.
///
/// The host shell uses this to keep the side-by-side original/result
/// view at display size without touching the pipeline's full-resolution
/// buffers.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if `max_edge` is zero.
pub fn resize_to_fit(
    image: &DecodedImage,
    max_edge: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if max_edge == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    let (src_width, src_height) = (image.width, image.height);

    // If already fits, just clone
    if src_width <= max_edge && src_height <= max_edge {
        return Ok(image.clone());
    }

    let (new_width, new_height) = fit_dimensions(src_width, src_height, max_edge);

    resize(image, new_width, new_height, filter)
}

/// Calculate dimensions to fit within max_edge while preserving aspect ratio.
fn fit_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let ratio = width as f64 / height as f64;

    if width >= height {
        // Landscape or square: constrain by width
        let new_height = (max_edge as f64 / ratio).round() as u32;
        (max_edge, new_height.max(1))
    } else {
        // Portrait: constrain by height
        let new_width = (max_edge as f64 * ratio).round() as u32;
        (new_width.max(1), max_edge)
    }
}
