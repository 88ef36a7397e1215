use clap::{ArgAction, Parser};
use std::path::PathBuf;
use url::Url;

use crate::capture::config::DEFAULT_CAPTURE_PROGRAM;

/// Configuration for a single snapsight run
///
/// Parsed once from the command line and passed immutably to every stage.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "snapsight",
    about = "Screenshot tool with vision-model support for agents"
)]
pub struct SnapConfig {
    /// Shell command to launch before taking the screenshot
    #[arg(long)]
    pub launch: Option<String>,

    /// Delay in seconds before capture (after launch, or standalone)
    #[arg(long, default_value_t = 2.0)]
    pub delay: f64,

    /// Screenshot destination path
    #[arg(long, default_value = "snap.png")]
    pub output: PathBuf,

    /// Ask the vision model to describe the captured image
    #[arg(long)]
    pub describe: bool,

    /// Vision model identifier
    #[arg(long, default_value = "llama3.2-vision:11b")]
    pub model: String,

    /// Base URL of the Ollama API
    #[arg(long, default_value = "http://localhost:11434")]
    pub ollama_url: Url,

    /// Capture only the active window instead of the full screen
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub active_only: bool,

    /// Custom question for the vision model (implies description)
    #[arg(long)]
    pub prompt: Option<String>,

    /// Title or substring the captured window must contain, verified
    /// through the vision model before proceeding
    #[arg(long)]
    pub expect_title: Option<String>,

    /// Override for the external screenshot utility
    #[arg(long, default_value = DEFAULT_CAPTURE_PROGRAM, hide = true)]
    pub capture_cmd: String,
}

impl SnapConfig {
    /// Whether a vision description was requested, explicitly or by
    /// supplying a custom prompt
    pub fn wants_description(&self) -> bool {
        self.describe || self.prompt.is_some()
    }
}
