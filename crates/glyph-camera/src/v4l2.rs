use crate::convert::yuyv_to_rgb;
use crate::{CameraConfig, CameraError, FrameSource};
use glyph_base::Tensor;
use log::{info, warn};
use std::thread::{self, JoinHandle};
use tokio::sync::mpsc;
use v4l::buffer::Type;
use v4l::io::mmap::Stream as MmapStream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};

type FrameResult = Result<Tensor<u8>, CameraError>;

/// Pixel format negotiated with the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PixelLayout {
    /// Motion JPEG; every buffer is a standalone JPEG image.
    Mjpg,
    /// Packed YUV 4:2:2, converted to RGB in-process.
    Yuyv { width: u32, height: u32 },
}

/// V4L2 camera frame source.
///
/// Negotiates MJPG and falls back to YUYV when the device refuses it.
/// Frames are captured on a background thread and handed over through a
/// bounded channel.
pub struct V4l2Camera {
    config: CameraConfig,
    device: Option<Device>,
    layout: PixelLayout,
    receiver: Option<mpsc::Receiver<FrameResult>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for V4l2Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Camera")
            .field("config", &self.config)
            .field("layout", &self.layout)
            .field("receiver", &self.receiver.is_some())
            .field("thread_handle", &self.thread_handle.is_some())
            .finish()
    }
}

impl FrameSource for V4l2Camera {
    async fn recv(&mut self) -> Result<Tensor<u8>, CameraError> {
        // Ensure capture thread is running
        self.ensure_started()?;

        let receiver = self
            .receiver
            .as_mut()
            .ok_or_else(|| CameraError::Channel("Receiver not initialized".to_string()))?;

        receiver
            .recv()
            .await
            .ok_or_else(|| CameraError::Channel("Channel closed".to_string()))?
    }
}

impl Drop for V4l2Camera {
    fn drop(&mut self) {
        // Drop the receiver to signal the thread to stop
        drop(self.receiver.take());

        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl V4l2Camera {
    /// Open the device at `config.device()` and negotiate a pixel format
    /// at the requested resolution.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Device` if the device cannot be opened, or if
    /// it accepts neither MJPG nor YUYV.
    pub fn new(config: CameraConfig) -> Result<Self, CameraError> {
        let device = Device::with_path(config.device())?;

        let layout = Self::negotiate_format(&device, &config)?;

        let params = v4l::video::capture::Parameters::with_fps(config.fps());
        v4l::video::Capture::set_params(&device, &params)?;

        Ok(Self {
            config,
            device: Some(device),
            layout,
            receiver: None,
            thread_handle: None,
        })
    }

    fn negotiate_format(device: &Device, config: &CameraConfig) -> Result<PixelLayout, CameraError> {
        let requested = Format::new(config.width(), config.height(), FourCC::new(b"MJPG"));
        let accepted = Capture::set_format(device, &requested)?;
        if accepted.fourcc == FourCC::new(b"MJPG") {
            info!("camera negotiated MJPG at {}x{}", accepted.width, accepted.height);
            return Ok(PixelLayout::Mjpg);
        }

        warn!("device refused MJPG, trying YUYV");
        let requested = Format::new(config.width(), config.height(), FourCC::new(b"YUYV"));
        let accepted = Capture::set_format(device, &requested)?;
        if accepted.fourcc == FourCC::new(b"YUYV") {
            info!("camera negotiated YUYV at {}x{}", accepted.width, accepted.height);
            return Ok(PixelLayout::Yuyv {
                width: accepted.width,
                height: accepted.height,
            });
        }

        Err(CameraError::Device(
            "device supports neither MJPG nor YUYV".to_string(),
        ))
    }

    /// Start the capture thread if not already running.
    ///
    /// Called automatically on the first `recv()`.
    fn ensure_started(&mut self) -> Result<(), CameraError> {
        if self.receiver.is_some() {
            return Ok(());
        }

        let device = self
            .device
            .take()
            .ok_or_else(|| CameraError::Device("Device already consumed".to_string()))?;

        let buffer_count = self.config.buffer_count() as usize;
        let layout = self.layout;
        let (tx, rx) = mpsc::channel(buffer_count);

        let handle = thread::spawn(move || {
            if let Err(e) = Self::capture_loop(device, layout, tx, buffer_count) {
                warn!("capture thread error: {}", e);
            }
        });

        self.receiver = Some(rx);
        self.thread_handle = Some(handle);

        Ok(())
    }

    /// Background thread capture loop: read buffers from V4L2, decode or
    /// convert them, send tensors through the channel.
    fn capture_loop(
        device: Device,
        layout: PixelLayout,
        tx: mpsc::Sender<FrameResult>,
        buffer_count: usize,
    ) -> Result<(), CameraError> {
        let mut stream =
            MmapStream::with_buffers(&device, Type::VideoCapture, buffer_count as u32)?;

        loop {
            let (buf, _metadata) = CaptureStream::next(&mut stream)?;

            // The buffer is only valid until the next call, decode from a copy
            let frame = Self::decode_buffer(buf.to_vec(), layout);

            if tx.blocking_send(frame).is_err() {
                // Receiver dropped, exit thread
                break;
            }
        }

        Ok(())
    }

    fn decode_buffer(data: Vec<u8>, layout: PixelLayout) -> FrameResult {
        match layout {
            PixelLayout::Mjpg => Ok(glyph_image::decode_image(&data)?),
            PixelLayout::Yuyv { width, height } => {
                let rgb = yuyv_to_rgb(&data, width, height).ok_or_else(|| {
                    CameraError::Stream(format!(
                        "YUYV buffer too short for {}x{} frame",
                        width, height
                    ))
                })?;
                Tensor::new(vec![height as usize, width as usize, 3], rgb)
                    .map_err(|e| CameraError::Stream(e.to_string()))
            }
        }
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }
}
