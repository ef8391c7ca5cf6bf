use std::fmt;

#[derive(Debug)]
pub enum CameraError {
    /// Device could not be opened or configured.
    Device(String),
    /// Streaming failed after the device was opened.
    Stream(String),
    /// The capture thread channel was closed or not started.
    Channel(String),
    /// A captured frame could not be decoded.
    Decode(glyph_image::ImageError),
    /// The external capture tool failed or produced no usable file.
    Capture(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::Device(msg) => write!(f, "device error: {msg}"),
            CameraError::Stream(msg) => write!(f, "stream error: {msg}"),
            CameraError::Channel(msg) => write!(f, "channel error: {msg}"),
            CameraError::Decode(err) => write!(f, "decode error: {err}"),
            CameraError::Capture(msg) => write!(f, "capture error: {msg}"),
        }
    }
}

impl std::error::Error for CameraError {}

impl From<std::io::Error> for CameraError {
    fn from(err: std::io::Error) -> Self {
        CameraError::Device(err.to_string())
    }
}

impl From<glyph_image::ImageError> for CameraError {
    fn from(err: glyph_image::ImageError) -> Self {
        CameraError::Decode(err)
    }
}
