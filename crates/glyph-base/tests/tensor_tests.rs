use glyph_base::{Tensor, TensorError};

#[test]
fn test_tensor_new_valid() {
    let tensor = Tensor::new(vec![2, 3], vec![1u8, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(tensor.shape, vec![2, 3]);
    assert_eq!(tensor.data, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_tensor_new_shape_mismatch() {
    let result = Tensor::new(vec![2, 3], vec![1.0, 2.0, 3.0]);
    assert!(matches!(
        result,
        Err(TensorError::ShapeMismatch {
            expected: 6,
            got: 3
        })
    ));
}

#[test]
fn test_tensor_new_overflow() {
    let result = Tensor::<f32>::new(vec![usize::MAX, 2], vec![]);
    assert!(matches!(result, Err(TensorError::ShapeOverflow)));
}

#[test]
fn test_tensor_zeros() {
    let tensor = Tensor::<u8>::zeros(vec![28, 28, 1]).unwrap();
    assert_eq!(tensor.shape, vec![28, 28, 1]);
    assert_eq!(tensor.data, vec![0u8; 784]);
}

#[test]
fn test_tensor_reshape_valid() {
    let tensor = Tensor::new(vec![28, 28, 1], vec![0u8; 784]).unwrap();
    let reshaped = tensor.reshape(vec![1, 1, 28, 28]).unwrap();
    assert_eq!(reshaped.shape, vec![1, 1, 28, 28]);
    assert_eq!(reshaped.len(), 784);
}

#[test]
fn test_tensor_reshape_wrong_count() {
    let tensor = Tensor::new(vec![2, 2], vec![0u8; 4]).unwrap();
    assert!(tensor.reshape(vec![3, 2]).is_err());
}

#[test]
fn test_tensor_map_preserves_shape() {
    let tensor = Tensor::new(vec![2, 2], vec![0u8, 51, 102, 255]).unwrap();
    let floats = tensor.map(|v| v as f32 / 255.0);
    assert_eq!(floats.shape, vec![2, 2]);
    assert_eq!(floats.data, vec![0.0, 0.2, 0.4, 1.0]);
}

#[test]
fn test_tensor_ndim_len() {
    let tensor = Tensor::new(vec![2, 3, 4], vec![0.0f32; 24]).unwrap();
    assert_eq!(tensor.ndim(), 3);
    assert_eq!(tensor.len(), 24);
    assert!(!tensor.is_empty());
}

#[test]
fn test_tensor_is_empty() {
    let tensor = Tensor::<f32>::new(vec![0], vec![]).unwrap();
    assert!(tensor.is_empty());
}
