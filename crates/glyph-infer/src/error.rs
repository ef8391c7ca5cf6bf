use std::fmt;

#[derive(Debug)]
pub enum InferError {
    ModelLoad(String),
    Shape { expected: String, got: String },
    InvalidInput { name: String, expected: Vec<String> },
    Backend(String),
    Io(String),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::ModelLoad(msg) => write!(f, "model load error: {msg}"),
            InferError::Shape { expected, got } => {
                write!(f, "shape error: expected {expected}, got {got}")
            }
            InferError::InvalidInput { name, expected } => {
                write!(f, "invalid input name '{name}', model inputs are {expected:?}")
            }
            InferError::Backend(msg) => write!(f, "backend error: {msg}"),
            InferError::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for InferError {}

impl From<std::io::Error> for InferError {
    fn from(err: std::io::Error) -> Self {
        InferError::Io(err.to_string())
    }
}

impl From<glyph_base::TensorError> for InferError {
    fn from(err: glyph_base::TensorError) -> Self {
        InferError::Shape {
            expected: "matching shape and data length".to_string(),
            got: err.to_string(),
        }
    }
}
