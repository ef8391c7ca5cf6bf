use glyph_base::Tensor;
use glyph_infer::{encode, InferError, InputEncoding, ModelInput};

fn gradient_frame() -> Tensor<u8> {
    let data: Vec<u8> = (0..28 * 28).map(|i| (i % 256) as u8).collect();
    Tensor::new(vec![28, 28, 1], data).unwrap()
}

#[test]
fn test_encode_bytes_layout() {
    let frame = gradient_frame();
    let input = encode(&frame, InputEncoding::Bytes).unwrap();

    match input {
        ModelInput::U8(t) => {
            assert_eq!(t.shape, vec![1, 1, 28, 28]);
            // Pixel order is unchanged by the reshape
            assert_eq!(t.data, frame.data);
        }
        _ => panic!("Expected U8 input"),
    }
}

#[test]
fn test_encode_normalized_layout() {
    let frame = gradient_frame();
    let input = encode(&frame, InputEncoding::Normalized).unwrap();

    match input {
        ModelInput::F32(t) => {
            assert_eq!(t.shape, vec![1, 1, 28, 28]);
            assert_eq!(t.data[0], 0.0);
            assert_eq!(t.data[255], 1.0);
        }
        _ => panic!("Expected F32 input"),
    }
}

#[test]
fn test_encodings_numerically_consistent() {
    // float = byte / 255 at every position, same pixel order
    let frame = gradient_frame();

    let bytes = match encode(&frame, InputEncoding::Bytes).unwrap() {
        ModelInput::U8(t) => t,
        _ => unreachable!(),
    };
    let floats = match encode(&frame, InputEncoding::Normalized).unwrap() {
        ModelInput::F32(t) => t,
        _ => unreachable!(),
    };

    assert_eq!(bytes.len(), floats.len());
    for (b, f) in bytes.data.iter().zip(floats.data.iter()) {
        assert_eq!(*f, *b as f32 / 255.0);
    }
}

#[test]
fn test_encode_rejects_multichannel() {
    let frame = Tensor::new(vec![28, 28, 3], vec![0u8; 28 * 28 * 3]).unwrap();
    let result = encode(&frame, InputEncoding::Bytes);
    assert!(matches!(result, Err(InferError::Shape { .. })));
}

#[test]
fn test_encode_rejects_flat_tensor() {
    let frame = Tensor::new(vec![784], vec![0u8; 784]).unwrap();
    let result = encode(&frame, InputEncoding::Normalized);
    assert!(matches!(result, Err(InferError::Shape { .. })));
}
