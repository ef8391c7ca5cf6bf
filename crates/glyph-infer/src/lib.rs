//! ONNX inference and digit classification for the glyph pipeline.
//!
//! `OnnxSession` wraps an `ort` session behind the `Session` trait;
//! `DigitClassifier` ties encoding, inference and score extraction into a
//! single `classify()` call over a 28x28 grayscale tensor.

pub mod classifier;
pub mod encoding;
pub mod error;
pub mod modelsource;
pub mod onnx;
pub mod scores;
pub mod session;

pub use classifier::DigitClassifier;
pub use encoding::{encode, InputEncoding, MODEL_HEIGHT, MODEL_WIDTH};
pub use error::InferError;
pub use modelsource::ModelSource;
pub use onnx::OnnxSession;
pub use scores::{Scores, CLASS_COUNT};
pub use session::{ModelInput, Session};
