use glyph_camera::convert::yuyv_to_rgb;

#[test]
fn test_yuyv_neutral_gray() {
    // Y=128, U=V=128 is mid gray: chroma terms cancel
    let data = vec![128u8, 128, 128, 128];
    let rgb = yuyv_to_rgb(&data, 2, 1).unwrap();
    assert_eq!(rgb, vec![128, 128, 128, 128, 128, 128]);
}

#[test]
fn test_yuyv_black_and_white() {
    // Y=0 and Y=255 with neutral chroma
    let data = vec![0u8, 128, 255, 128];
    let rgb = yuyv_to_rgb(&data, 2, 1).unwrap();
    assert_eq!(&rgb[0..3], &[0, 0, 0]);
    assert_eq!(&rgb[3..6], &[255, 255, 255]);
}

#[test]
fn test_yuyv_shared_chroma() {
    // Both pixels in a pair see the same U/V, so equal Y gives equal RGB
    let data = vec![90u8, 200, 90, 60];
    let rgb = yuyv_to_rgb(&data, 2, 1).unwrap();
    assert_eq!(&rgb[0..3], &rgb[3..6]);
}

#[test]
fn test_yuyv_output_length() {
    let data = vec![128u8; 320 * 240 * 2];
    let rgb = yuyv_to_rgb(&data, 320, 240).unwrap();
    assert_eq!(rgb.len(), 320 * 240 * 3);
}

#[test]
fn test_yuyv_short_buffer() {
    let data = vec![128u8; 10];
    assert!(yuyv_to_rgb(&data, 320, 240).is_none());
}
