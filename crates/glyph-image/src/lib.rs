//! Image decoding and deterministic frame preprocessing.
//!
//! Decoding wraps the `image` crate and produces `Tensor<u8>` from
//! `glyph-base` in HWC layout `[height, width, channels]`. The ops module
//! holds the crop/resize/grayscale pipeline that turns a camera frame into
//! a model-ready 28x28 single-channel tensor.

pub mod error;
pub mod ops;

pub use error::ImageError;
pub use ops::{crop, encode_png, grayscale, preprocess_frame, resize_nearest};

use glyph_base::Tensor;
use image::DynamicImage;

/// Decodes an image from raw bytes into an HWC u8 tensor.
///
/// The format is auto-detected by the `image` crate. Grayscale and RGB
/// images keep their channel count (1 or 3); everything else, including
/// 16-bit and float pixel formats, is converted to RGB8. Camera frames are
/// 8-bit JPEG in practice, so the conversion path is a safety net rather
/// than a precision concern.
///
/// # Errors
///
/// Returns `ImageError::Decode` if the data is invalid or the format is
/// unsupported, `ImageError::Tensor` if tensor construction fails.
pub fn decode_image(data: &[u8]) -> Result<Tensor<u8>, ImageError> {
    let img = image::load_from_memory(data)?;

    match img {
        DynamicImage::ImageLuma8(buf) => {
            let (width, height) = buf.dimensions();
            let shape = vec![height as usize, width as usize, 1];
            Ok(Tensor::new(shape, buf.into_raw())?)
        }
        DynamicImage::ImageRgb8(buf) => {
            let (width, height) = buf.dimensions();
            let shape = vec![height as usize, width as usize, 3];
            Ok(Tensor::new(shape, buf.into_raw())?)
        }
        other => {
            let rgb = other.to_rgb8();
            let (width, height) = rgb.dimensions();
            let shape = vec![height as usize, width as usize, 3];
            Ok(Tensor::new(shape, rgb.into_raw())?)
        }
    }
}
