use crate::ImageError;

use glyph_base::{Rect, Tensor};
use image::ImageEncoder;

/// Validate an HWC tensor and return (height, width, channels).
fn hwc_dims(frame: &Tensor<u8>) -> Result<(usize, usize, usize), ImageError> {
    if frame.shape.len() != 3 {
        return Err(ImageError::Shape(format!(
            "expected [H, W, C] tensor, got {:?}",
            frame.shape
        )));
    }
    Ok((frame.shape[0], frame.shape[1], frame.shape[2]))
}

/// Extract a rectangular region from an HWC frame.
///
/// # Errors
///
/// Returns `ImageError::Roi` if the region is not fully contained in the
/// frame.
pub fn crop(frame: &Tensor<u8>, roi: Rect) -> Result<Tensor<u8>, ImageError> {
    let (h, w, c) = hwc_dims(frame)?;
    if !roi.fits_within(w, h) {
        return Err(ImageError::Roi {
            roi,
            width: w,
            height: h,
        });
    }

    let mut data = Vec::with_capacity(roi.area() * c);
    for y in roi.y..roi.bottom() {
        let row_start = (y * w + roi.x) * c;
        let row_end = row_start + roi.width * c;
        data.extend_from_slice(&frame.data[row_start..row_end]);
    }

    Ok(Tensor::new(vec![roi.height, roi.width, c], data)?)
}

/// Resample an HWC frame to `target_width` x `target_height` using
/// nearest-neighbor interpolation.
///
/// The horizontal and vertical scale factors are independent, so aspect
/// ratio is not preserved; the digit pipeline maps a 112x224 crop onto
/// 28x28.
pub fn resize_nearest(
    frame: &Tensor<u8>,
    target_width: usize,
    target_height: usize,
) -> Result<Tensor<u8>, ImageError> {
    let (h, w, c) = hwc_dims(frame)?;
    if w == 0 || h == 0 || target_width == 0 || target_height == 0 {
        return Err(ImageError::Shape(
            "resize requires non-zero dimensions".to_string(),
        ));
    }

    let scale_x = w as f32 / target_width as f32;
    let scale_y = h as f32 / target_height as f32;

    let mut data = vec![0u8; target_height * target_width * c];
    for out_y in 0..target_height {
        let src_y = ((out_y as f32 * scale_y) as usize).min(h - 1);
        for out_x in 0..target_width {
            let src_x = ((out_x as f32 * scale_x) as usize).min(w - 1);
            let src_idx = (src_y * w + src_x) * c;
            let dst_idx = (out_y * target_width + out_x) * c;
            data[dst_idx..dst_idx + c].copy_from_slice(&frame.data[src_idx..src_idx + c]);
        }
    }

    Ok(Tensor::new(vec![target_height, target_width, c], data)?)
}

/// Convert an RGB frame to single-channel grayscale using BT.601 luma
/// (0.299 R + 0.587 G + 0.114 B, rounded to nearest).
///
/// Single-channel input passes through unchanged. Any other channel count
/// is a shape error.
pub fn grayscale(frame: &Tensor<u8>) -> Result<Tensor<u8>, ImageError> {
    let (h, w, c) = hwc_dims(frame)?;
    match c {
        1 => Ok(frame.clone()),
        3 => {
            let mut data = Vec::with_capacity(h * w);
            for px in frame.data.chunks_exact(3) {
                let r = px[0] as u32;
                let g = px[1] as u32;
                let b = px[2] as u32;
                let luma = (299 * r + 587 * g + 114 * b + 500) / 1000;
                data.push(luma as u8);
            }
            Ok(Tensor::new(vec![h, w, 1], data)?)
        }
        _ => Err(ImageError::Shape(format!(
            "grayscale requires 1 or 3 channels, got {c}"
        ))),
    }
}

/// Fixed crop -> resize -> grayscale pipeline for classifier input.
///
/// Output shape is `[target_height, target_width, 1]`. Deterministic: the
/// same frame and parameters always produce the same tensor.
pub fn preprocess_frame(
    frame: &Tensor<u8>,
    roi: Rect,
    target: (usize, usize),
) -> Result<Tensor<u8>, ImageError> {
    let cropped = crop(frame, roi)?;
    let resized = resize_nearest(&cropped, target.0, target.1)?;
    grayscale(&resized)
}

/// Encode a 1- or 3-channel HWC tensor as PNG, for debug frame dumps.
pub fn encode_png(frame: &Tensor<u8>) -> Result<Vec<u8>, ImageError> {
    let (h, w, c) = hwc_dims(frame)?;
    let color = match c {
        1 => image::ExtendedColorType::L8,
        3 => image::ExtendedColorType::Rgb8,
        _ => {
            return Err(ImageError::Encode(format!(
                "png encoding requires 1 or 3 channels, got {c}"
            )));
        }
    };

    let mut buffer = Vec::new();
    image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(&frame.data, w as u32, h as u32, color)
        .map_err(|e| ImageError::Encode(e.to_string()))?;

    Ok(buffer)
}
