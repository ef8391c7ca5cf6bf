use crate::InferError;
use glyph_base::Tensor;
use std::fmt;

pub const CLASS_COUNT: usize = 10;

/// Per-digit class scores from one inference pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    values: [f32; CLASS_COUNT],
}

impl Scores {
    pub fn from_values(values: [f32; CLASS_COUNT]) -> Self {
        Self { values }
    }

    /// Build from a model output tensor. Any shape is accepted as long as
    /// it holds exactly 10 elements (`[10]` and `[1, 10]` in practice).
    pub fn from_tensor(tensor: &Tensor<f32>) -> Result<Self, InferError> {
        if tensor.len() != CLASS_COUNT {
            return Err(InferError::Shape {
                expected: format!("{CLASS_COUNT} class scores"),
                got: format!("{} elements with shape {:?}", tensor.len(), tensor.shape),
            });
        }
        let mut values = [0.0f32; CLASS_COUNT];
        values.copy_from_slice(&tensor.data);
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f32; CLASS_COUNT] {
        &self.values
    }

    /// Arg-max digit. Ties resolve to the first occurrence.
    pub fn prediction(&self) -> usize {
        let mut best = 0;
        for (i, &score) in self.values.iter().enumerate() {
            if score > self.values[best] {
                best = i;
            }
        }
        best
    }

    /// Score of the predicted digit.
    pub fn best_score(&self) -> f32 {
        self.values[self.prediction()]
    }

    /// True if the best score reaches the threshold.
    pub fn confident(&self, threshold: f32) -> bool {
        self.best_score() >= threshold
    }
}

impl fmt::Display for Scores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scores:")?;
        for score in &self.values {
            write!(f, " {score}")?;
        }
        write!(f, " | prediction: {}", self.prediction())
    }
}
