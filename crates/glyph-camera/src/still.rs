use crate::{CameraConfig, CameraError, FrameSource};
use glyph_base::Tensor;
use log::debug;
use std::path::PathBuf;
use std::process::Command;

const DEFAULT_TOOL: &str = "libcamera-jpeg";
const DEFAULT_TEMP_FILE: &str = "camera_frame.jpg";

/// Still-image frame source backed by an external capture tool.
///
/// Each `recv` runs the tool (default `libcamera-jpeg`) with the configured
/// resolution, writing a JPEG to a temp path, then reads the file back and
/// decodes it. The tool invocation is blocking and runs on the tokio
/// blocking pool so the runtime is not stalled for the capture duration.
pub struct StillCapture {
    config: CameraConfig,
    tool: String,
    temp_path: PathBuf,
}

impl StillCapture {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            config,
            tool: DEFAULT_TOOL.to_string(),
            temp_path: PathBuf::from(DEFAULT_TEMP_FILE),
        }
    }

    /// Override the capture tool binary.
    pub fn with_tool(mut self, tool: String) -> Self {
        self.tool = tool;
        self
    }

    /// Override the temp file the tool writes to.
    pub fn with_temp_path(mut self, path: PathBuf) -> Self {
        self.temp_path = path;
        self
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Arguments passed to the capture tool.
    pub fn tool_args(&self) -> Vec<String> {
        vec![
            "-o".to_string(),
            self.temp_path.display().to_string(),
            "--width".to_string(),
            self.config.width().to_string(),
            "--height".to_string(),
            self.config.height().to_string(),
            "--nopreview".to_string(),
        ]
    }

    fn capture_file(tool: String, args: Vec<String>, path: PathBuf) -> Result<Vec<u8>, CameraError> {
        let status = Command::new(&tool)
            .args(&args)
            .status()
            .map_err(|e| CameraError::Capture(format!("failed to run {tool}: {e}")))?;

        if !status.success() {
            return Err(CameraError::Capture(format!(
                "{tool} exited with status {status}"
            )));
        }

        let bytes = std::fs::read(&path)
            .map_err(|e| CameraError::Capture(format!("failed to read {}: {e}", path.display())))?;
        if bytes.is_empty() {
            return Err(CameraError::Capture(format!(
                "{} is empty",
                path.display()
            )));
        }

        Ok(bytes)
    }
}

impl FrameSource for StillCapture {
    async fn recv(&mut self) -> Result<Tensor<u8>, CameraError> {
        let tool = self.tool.clone();
        let args = self.tool_args();
        let path = self.temp_path.clone();

        debug!("capturing still frame via {}", tool);

        let bytes = tokio::task::spawn_blocking(move || Self::capture_file(tool, args, path))
            .await
            .map_err(|e| CameraError::Capture(format!("capture task panicked: {e}")))??;

        Ok(glyph_image::decode_image(&bytes)?)
    }
}
