use glyph_base::Tensor;
use glyph_infer::{DigitClassifier, InferError, InputEncoding, ModelInput, Session};
use std::collections::HashMap;

/// Mock session that records what it was fed and returns a fixed score
/// vector.
struct MockSession {
    input_names: Vec<String>,
    output_names: Vec<String>,
    scores: Vec<f32>,
    last_input: Option<(String, ModelInput)>,
}

impl MockSession {
    fn new(scores: Vec<f32>) -> Self {
        Self {
            input_names: vec!["input.1".to_string()],
            output_names: vec!["output".to_string()],
            scores,
            last_input: None,
        }
    }
}

impl Session for MockSession {
    fn run(
        &mut self,
        inputs: &[(&str, ModelInput)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError> {
        let (name, input) = &inputs[0];
        self.last_input = Some((name.to_string(), input.clone()));

        let mut outputs = HashMap::new();
        outputs.insert(
            self.output_names[0].clone(),
            Tensor::new(vec![1, self.scores.len()], self.scores.clone())?,
        );
        Ok(outputs)
    }

    fn input_names(&self) -> &[String] {
        &self.input_names
    }

    fn output_names(&self) -> &[String] {
        &self.output_names
    }
}

fn blank_frame() -> Tensor<u8> {
    Tensor::zeros(vec![28, 28, 1]).unwrap()
}

#[test]
fn test_classify_returns_scores() {
    let session = MockSession::new(vec![0.0, 0.0, 0.0, 0.8, 0.0, 0.0, 0.0, 0.0, 0.2, 0.0]);
    let mut classifier = DigitClassifier::new(Box::new(session), InputEncoding::Bytes);

    let scores = classifier.classify(&blank_frame()).unwrap();
    assert_eq!(scores.prediction(), 3);
}

#[test]
fn test_classify_uses_first_input_name_by_default() {
    let session = MockSession::new(vec![0.1; 10]);
    let mut classifier = DigitClassifier::new(Box::new(session), InputEncoding::Bytes);

    // The mock accepts whatever name it is given, so a successful run
    // means the default name resolution found "input.1".
    classifier.classify(&blank_frame()).unwrap();
}

#[test]
fn test_classify_rejects_unknown_input_override() {
    let session = MockSession::new(vec![0.1; 10]);
    let mut classifier = DigitClassifier::new(Box::new(session), InputEncoding::Bytes)
        .with_input_name("no_such_input".to_string());

    let result = classifier.classify(&blank_frame());
    match result {
        Err(InferError::InvalidInput { name, expected }) => {
            assert_eq!(name, "no_such_input");
            assert_eq!(expected, vec!["input.1".to_string()]);
        }
        other => panic!("Expected InvalidInput, got {:?}", other.map(|s| s.prediction())),
    }
}

#[test]
fn test_classify_accepts_matching_input_override() {
    let session = MockSession::new(vec![0.1; 10]);
    let mut classifier = DigitClassifier::new(Box::new(session), InputEncoding::Bytes)
        .with_input_name("input.1".to_string());

    classifier.classify(&blank_frame()).unwrap();
}

#[test]
fn test_classify_rejects_wrong_frame_shape() {
    let session = MockSession::new(vec![0.1; 10]);
    let mut classifier = DigitClassifier::new(Box::new(session), InputEncoding::Bytes);

    let frame = Tensor::zeros(vec![32, 32, 1]).unwrap();
    let result = classifier.classify(&frame);
    assert!(matches!(result, Err(InferError::Shape { .. })));
}

#[test]
fn test_classify_rejects_short_score_vector() {
    let session = MockSession::new(vec![0.1; 7]);
    let mut classifier = DigitClassifier::new(Box::new(session), InputEncoding::Bytes);

    let result = classifier.classify(&blank_frame());
    assert!(matches!(result, Err(InferError::Shape { .. })));
}

#[test]
fn test_session_receives_encoded_nchw_input() {
    let mut session = MockSession::new(vec![0.1; 10]);
    let input = glyph_infer::encode(&blank_frame(), InputEncoding::Normalized).unwrap();
    session.run(&[("input.1", input)]).unwrap();

    let (name, input) = session.last_input.unwrap();
    assert_eq!(name, "input.1");
    match input {
        ModelInput::F32(t) => assert_eq!(t.shape, vec![1, 1, 28, 28]),
        _ => panic!("Expected F32 input"),
    }
}
