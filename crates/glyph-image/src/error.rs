use glyph_base::Rect;
use std::fmt;

#[derive(Debug)]
pub enum ImageError {
    Decode(String),
    Encode(String),
    Shape(String),
    Roi {
        roi: Rect,
        width: usize,
        height: usize,
    },
    Tensor(glyph_base::TensorError),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Decode(msg) => write!(f, "decode error: {msg}"),
            ImageError::Encode(msg) => write!(f, "encode error: {msg}"),
            ImageError::Shape(msg) => write!(f, "shape error: {msg}"),
            ImageError::Roi { roi, width, height } => write!(
                f,
                "roi {}x{}+{}+{} does not fit a {}x{} frame",
                roi.width, roi.height, roi.x, roi.y, width, height
            ),
            ImageError::Tensor(err) => write!(f, "tensor error: {err}"),
        }
    }
}

impl std::error::Error for ImageError {}

impl From<image::ImageError> for ImageError {
    fn from(err: image::ImageError) -> Self {
        ImageError::Decode(err.to_string())
    }
}

impl From<glyph_base::TensorError> for ImageError {
    fn from(err: glyph_base::TensorError) -> Self {
        ImageError::Tensor(err)
    }
}
