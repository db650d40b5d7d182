//! Image decoding for Warplab.
//!
//! Uploads arrive as JPEG or PNG byte streams and are decoded to the
//! [`DecodedImage`] RGB buffer the transform pipeline operates on.
//! JPEG decoding applies EXIF orientation correction so the pipeline
//! always sees pixels in display orientation.
//!
//! All operations are synchronous and single-threaded; the host shell
//! invokes them once per upload.

mod jpeg;
mod png;
mod types;

pub use jpeg::{decode_jpeg, decode_jpeg_no_orientation, get_orientation};
pub use png::decode_png;
pub use types::{DecodeError, DecodedImage, FilterType, Orientation};

use image::ImageFormat;

/// Decode an uploaded image, sniffing the container format from the bytes.
///
/// Only the upload formats the host shell accepts are decoded here: JPEG
/// (with orientation correction) and PNG. Other recognized containers are
/// rejected as unsupported rather than decoded to surprise dimensions.
///
/// # Errors
///
/// * `DecodeError::InvalidFormat` - the bytes match no known container
/// * `DecodeError::UnsupportedFormat` - recognized but not JPEG/PNG
/// * `DecodeError::CorruptedFile` - recognized but undecodable
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let format = image::guess_format(bytes).map_err(|_| DecodeError::InvalidFormat)?;

    match format {
        ImageFormat::Jpeg => decode_jpeg(bytes),
        ImageFormat::Png => decode_png(bytes),
        other => Err(DecodeError::UnsupportedFormat(format!("{other:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};
    use std::io::Cursor;

    #[test]
    fn test_decode_image_png() {
        let mut buffer = Cursor::new(Vec::new());
        PngEncoder::new(&mut buffer)
            .write_image(&[1, 2, 3, 4, 5, 6], 2, 1, ExtendedColorType::Rgb8)
            .unwrap();

        let img = decode_image(&buffer.into_inner()).unwrap();
        assert_eq!((img.width, img.height), (2, 1));
        assert_eq!(img.pixels, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_decode_image_unknown_bytes() {
        let result = decode_image(b"definitely not an image");
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_image_unsupported_container() {
        // A valid GIF header is recognized but rejected
        let result = decode_image(b"GIF89a\x01\x00\x01\x00");
        assert!(matches!(result, Err(DecodeError::UnsupportedFormat(_))));
    }
}
