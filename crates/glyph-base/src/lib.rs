pub mod logging;
pub mod rect;
pub mod tensor;

pub use logging::{init_stdout_logger, StdoutLogger};
pub use rect::Rect;
pub use tensor::{Tensor, TensorError};

// Re-export log crate so downstream crates can use glyph_base::log::*
pub use log;
