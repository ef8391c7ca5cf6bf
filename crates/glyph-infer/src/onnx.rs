use crate::{InferError, ModelInput, ModelSource, Session};
use glyph_base::Tensor;
use ndarray::ArrayD;
use ort::{inputs, session::Session as OrtSession, value::TensorRef};
use std::collections::HashMap;
use std::sync::OnceLock;

static ORT_INIT: OnceLock<()> = OnceLock::new();

fn ensure_ort_init() {
    ORT_INIT.get_or_init(|| {
        let _ = ort::init().commit();
    });
}

/// ONNX Runtime session on the CPU execution provider.
pub struct OnnxSession {
    session: OrtSession,
    input_names: Vec<String>,
    output_names: Vec<String>,
}

impl OnnxSession {
    /// Load a model from a file or from memory.
    ///
    /// # Errors
    ///
    /// Returns `InferError::ModelLoad` if the session cannot be built or
    /// the model fails to load.
    pub fn load(model: ModelSource) -> Result<Self, InferError> {
        ensure_ort_init();

        let builder = OrtSession::builder()
            .map_err(|e| InferError::ModelLoad(format!("failed to create session builder: {e}")))?
            .with_execution_providers([
                ort::execution_providers::CPUExecutionProvider::default().build(),
            ])
            .map_err(|e| InferError::ModelLoad(format!("failed to set execution provider: {e}")))?;

        let session = match model {
            ModelSource::File(path) => builder.commit_from_file(&path).map_err(|e| {
                InferError::ModelLoad(format!("failed to load model from {}: {e}", path.display()))
            })?,
            ModelSource::Memory(bytes) => builder.commit_from_memory(&bytes).map_err(|e| {
                InferError::ModelLoad(format!("failed to load model from memory: {e}"))
            })?,
        };

        let input_names: Vec<String> = session
            .inputs
            .iter()
            .map(|input| input.name.to_string())
            .collect();
        let output_names: Vec<String> = session
            .outputs
            .iter()
            .map(|output| output.name.to_string())
            .collect();

        log::debug!(
            "model loaded, inputs: {:?}, outputs: {:?}",
            input_names,
            output_names
        );

        Ok(Self {
            session,
            input_names,
            output_names,
        })
    }
}

impl Session for OnnxSession {
    fn run(
        &mut self,
        inputs: &[(&str, ModelInput)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError> {
        // Validate input names before touching the runtime
        for (name, _) in inputs {
            if !self.input_names.iter().any(|n| n == name) {
                return Err(InferError::InvalidInput {
                    name: name.to_string(),
                    expected: self.input_names.clone(),
                });
            }
        }

        // Classifier graphs take a single input tensor
        let outputs = match inputs {
            [(name, input)] => match input {
                ModelInput::F32(tensor) => {
                    let array = tensor_to_ndarray(tensor)?;
                    let tensor_ref = TensorRef::from_array_view(array.view()).map_err(|e| {
                        InferError::Backend(format!("failed to create tensor ref: {e}"))
                    })?;
                    self.session
                        .run(inputs![*name => tensor_ref])
                        .map_err(|e| InferError::Backend(format!("inference failed: {e}")))?
                }
                ModelInput::U8(tensor) => {
                    let array = tensor_to_ndarray(tensor)?;
                    let tensor_ref = TensorRef::from_array_view(array.view()).map_err(|e| {
                        InferError::Backend(format!("failed to create tensor ref: {e}"))
                    })?;
                    self.session
                        .run(inputs![*name => tensor_ref])
                        .map_err(|e| InferError::Backend(format!("inference failed: {e}")))?
                }
            },
            _ => {
                return Err(InferError::Backend(format!(
                    "expected exactly one input, got {}",
                    inputs.len()
                )));
            }
        };

        // Collect all outputs as f32 tensors
        let mut result = HashMap::new();
        for output_name in &self.output_names {
            let value = &outputs[output_name.as_str()];

            let array = value.try_extract_array::<f32>().map_err(|e| {
                InferError::Backend(format!("output '{output_name}' is not f32: {e}"))
            })?;

            let shape = array.shape().to_vec();
            let data = array.iter().copied().collect();
            let tensor = Tensor::new(shape, data)?;
            result.insert(output_name.clone(), tensor);
        }

        Ok(result)
    }

    fn input_names(&self) -> &[String] {
        &self.input_names
    }

    fn output_names(&self) -> &[String] {
        &self.output_names
    }
}

// Helper to view a Tensor<T> as an ndarray without giving up ownership
fn tensor_to_ndarray<T: Clone>(tensor: &Tensor<T>) -> Result<ArrayD<T>, InferError> {
    ArrayD::from_shape_vec(tensor.shape.clone(), tensor.data.clone())
        .map_err(|e| InferError::Backend(format!("failed to create ndarray from tensor: {e}")))
}
