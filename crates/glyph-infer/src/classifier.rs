use crate::encoding::{encode, InputEncoding, MODEL_HEIGHT, MODEL_WIDTH};
use crate::{InferError, Scores, Session};
use glyph_base::Tensor;

/// Digit classification over a loaded session.
///
/// Owns the session, the input encoding, and an optional input-name
/// override for models whose graph input is not the first listed one.
pub struct DigitClassifier {
    session: Box<dyn Session>,
    encoding: InputEncoding,
    input_name: Option<String>,
}

impl DigitClassifier {
    pub fn new(session: Box<dyn Session>, encoding: InputEncoding) -> Self {
        Self {
            session,
            encoding,
            input_name: None,
        }
    }

    /// Override the graph input name (defaults to the model's first input).
    pub fn with_input_name(mut self, name: String) -> Self {
        self.input_name = Some(name);
        self
    }

    pub fn encoding(&self) -> InputEncoding {
        self.encoding
    }

    /// Classify one preprocessed frame.
    ///
    /// The frame must be `[28, 28, 1]`. Returns the 10 class scores; the
    /// model's first output must hold exactly 10 elements.
    pub fn classify(&mut self, frame: &Tensor<u8>) -> Result<Scores, InferError> {
        if frame.shape != [MODEL_HEIGHT, MODEL_WIDTH, 1] {
            return Err(InferError::Shape {
                expected: format!("[{MODEL_HEIGHT}, {MODEL_WIDTH}, 1]"),
                got: format!("{:?}", frame.shape),
            });
        }

        let input = encode(frame, self.encoding)?;

        let input_name = match &self.input_name {
            Some(name) => {
                if !self.session.input_names().iter().any(|n| n == name) {
                    return Err(InferError::InvalidInput {
                        name: name.clone(),
                        expected: self.session.input_names().to_vec(),
                    });
                }
                name.clone()
            }
            None => self
                .session
                .input_names()
                .first()
                .ok_or_else(|| InferError::Backend("model has no inputs".to_string()))?
                .clone(),
        };

        let outputs = self.session.run(&[(input_name.as_str(), input)])?;

        let output_name = self
            .session
            .output_names()
            .first()
            .ok_or_else(|| InferError::Backend("model has no outputs".to_string()))?;
        let output = outputs
            .get(output_name)
            .ok_or_else(|| InferError::Backend(format!("missing output '{output_name}'")))?;

        Scores::from_tensor(output)
    }
}
