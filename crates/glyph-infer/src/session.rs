use crate::InferError;
use glyph_base::Tensor;
use std::collections::HashMap;

/// Input tensor handed to a session, in whichever element type the model
/// was exported with.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelInput {
    U8(Tensor<u8>),
    F32(Tensor<f32>),
}

impl ModelInput {
    pub fn shape(&self) -> &[usize] {
        match self {
            ModelInput::U8(t) => &t.shape,
            ModelInput::F32(t) => &t.shape,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ModelInput::U8(t) => t.len(),
            ModelInput::F32(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A loaded inference graph.
///
/// The contract mirrors the usual runtime shape: look up the input and
/// output names, feed named input buffers, get named f32 output tensors
/// back.
pub trait Session {
    fn run(
        &mut self,
        inputs: &[(&str, ModelInput)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError>;
    fn input_names(&self) -> &[String];
    fn output_names(&self) -> &[String];
}
