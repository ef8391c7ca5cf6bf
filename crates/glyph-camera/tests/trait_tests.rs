use glyph_base::Tensor;
use glyph_camera::{CameraError, FrameSource};

// Mock implementation for testing
struct MockSource {
    frame_count: usize,
}

impl MockSource {
    fn new() -> Self {
        Self { frame_count: 0 }
    }
}

impl FrameSource for MockSource {
    async fn recv(&mut self) -> Result<Tensor<u8>, CameraError> {
        self.frame_count += 1;
        // Dummy 240x320 RGB tensor
        Tensor::new(vec![240, 320, 3], vec![0u8; 240 * 320 * 3])
            .map_err(|e| CameraError::Stream(e.to_string()))
    }
}

#[tokio::test]
async fn test_frame_source_mock_implementation() {
    let mut source = MockSource::new();

    let frame1 = source.recv().await.unwrap();
    assert_eq!(frame1.shape, vec![240, 320, 3]);
    assert_eq!(source.frame_count, 1);

    let frame2 = source.recv().await.unwrap();
    assert_eq!(frame2.shape, vec![240, 320, 3]);
    assert_eq!(source.frame_count, 2);
}

#[tokio::test]
async fn test_frame_source_polymorphism() {
    async fn capture_frames(
        source: &mut impl FrameSource,
        count: usize,
    ) -> Result<Vec<Tensor<u8>>, CameraError> {
        let mut frames = Vec::new();
        for _ in 0..count {
            frames.push(source.recv().await?);
        }
        Ok(frames)
    }

    let mut source = MockSource::new();
    let frames = capture_frames(&mut source, 3).await.unwrap();
    assert_eq!(frames.len(), 3);
    assert_eq!(source.frame_count, 3);
}
