use crate::{InferError, ModelInput};
use glyph_base::Tensor;

pub const MODEL_WIDTH: usize = 28;
pub const MODEL_HEIGHT: usize = 28;

/// How the 28x28 grayscale frame is laid into the model input buffer.
///
/// Digit models exported with a uint8 input take the pixels as-is;
/// float-input models take the same pixels scaled to [0, 1]. The two are
/// numerically consistent: float value = byte value / 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEncoding {
    Bytes,
    Normalized,
}

/// Encode a `[H, W, 1]` grayscale tensor into the model's NCHW
/// `[1, 1, H, W]` input layout.
///
/// The pixel order is unchanged (row-major HW equals CHW for one
/// channel), only the element type differs between encodings.
///
/// # Errors
///
/// Returns `InferError::Shape` if the input is not a single-channel HWC
/// tensor.
pub fn encode(frame: &Tensor<u8>, encoding: InputEncoding) -> Result<ModelInput, InferError> {
    if frame.shape.len() != 3 || frame.shape[2] != 1 {
        return Err(InferError::Shape {
            expected: "[H, W, 1]".to_string(),
            got: format!("{:?}", frame.shape),
        });
    }
    let (h, w) = (frame.shape[0], frame.shape[1]);
    let nchw = vec![1, 1, h, w];

    match encoding {
        InputEncoding::Bytes => Ok(ModelInput::U8(frame.clone().reshape(nchw)?)),
        InputEncoding::Normalized => {
            let floats = frame.map(|v| v as f32 / 255.0);
            Ok(ModelInput::F32(floats.reshape(nchw)?))
        }
    }
}
