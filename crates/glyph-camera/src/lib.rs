//! Frame capture for the glyph digit pipeline.
//!
//! Two frame sources implement the same `FrameSource` trait: `StillCapture`
//! shells out to a still-image capture tool and decodes the file it writes,
//! `V4l2Camera` (feature `v4l2`) streams frames from a V4L2 device on a
//! background thread.

pub mod config;
pub mod convert;
pub mod error;
pub mod still;
pub mod traits;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use config::CameraConfig;
pub use error::CameraError;
pub use still::StillCapture;
pub use traits::FrameSource;

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Camera;
