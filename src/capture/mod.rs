pub mod config;
pub mod model;
pub mod taker;

pub use model::Screenshot;
pub use taker::take_screenshot;

use std::path::PathBuf;

/// Configuration for a single screenshot capture
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// External screenshot utility to invoke
    pub program: String,

    /// Path the utility must write the image to
    pub output: PathBuf,

    /// Restrict the capture to the active window instead of the full screen
    pub active_only: bool,
}
