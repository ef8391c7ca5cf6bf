/// Converts YUYV (YUV 4:2:2) pixel data to RGB.
///
/// YUYV packs as `[Y0, U, Y1, V, ...]`; each pair of pixels shares U and V.
/// Conversion uses BT.601 coefficients:
/// - R = Y + 1.402 * (V - 128)
/// - G = Y - 0.344 * (U - 128) - 0.714 * (V - 128)
/// - B = Y + 1.772 * (U - 128)
///
/// Returns RGB data with 3 bytes per pixel.
///
/// # Errors
///
/// Returns `None` if the input is shorter than `width * height * 2` bytes.
pub fn yuyv_to_rgb(data: &[u8], width: u32, height: u32) -> Option<Vec<u8>> {
    let pixel_count = (width as usize) * (height as usize);
    let expected_len = pixel_count * 2;
    if data.len() < expected_len {
        return None;
    }

    fn ycbcr_to_rgb(y: f32, u: f32, v: f32) -> [u8; 3] {
        let r = (y + 1.402 * (v - 128.0)).clamp(0.0, 255.0) as u8;
        let g = (y - 0.344 * (u - 128.0) - 0.714 * (v - 128.0)).clamp(0.0, 255.0) as u8;
        let b = (y + 1.772 * (u - 128.0)).clamp(0.0, 255.0) as u8;
        [r, g, b]
    }

    let mut rgb = Vec::with_capacity(pixel_count * 3);

    // 4 bytes cover 2 pixels: Y0 U Y1 V
    for chunk in data[..expected_len].chunks_exact(4) {
        let u = chunk[1] as f32;
        let v = chunk[3] as f32;
        rgb.extend_from_slice(&ycbcr_to_rgb(chunk[0] as f32, u, v));
        rgb.extend_from_slice(&ycbcr_to_rgb(chunk[2] as f32, u, v));
    }

    Some(rgb)
}
