use crate::CameraError;
use glyph_base::Tensor;

/// Async frame capture.
///
/// Implementations return decoded frames as `Tensor<u8>` in HWC layout
/// `[height, width, channels]`; channels is 3 for color sources.
#[allow(async_fn_in_trait)]
pub trait FrameSource {
    /// Receive the next frame. Blocks (cooperatively) until a frame is
    /// available or capture fails.
    async fn recv(&mut self) -> Result<Tensor<u8>, CameraError>;
}
