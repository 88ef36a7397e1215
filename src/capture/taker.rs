use anyhow::{bail, Context, Result};
use tokio::process::Command;
use tracing::{debug, error, info};

use crate::capture::config::capture_arguments;
use crate::capture::model::Screenshot;
use crate::capture::CaptureConfig;

/// Invokes the external screenshot utility and loads the result.
///
/// Success requires both a zero exit status and the output file existing
/// afterwards; a clean exit with no file is still a failure. Retries are
/// the caller's concern.
pub async fn take_screenshot(config: &CaptureConfig) -> Result<Screenshot> {
    let args = capture_arguments(&config.output, config.active_only);
    debug!("running {} {:?}", config.program, args);
    println!("[*] Taking screenshot: {}", config.output.display());

    let status = Command::new(&config.program)
        .args(&args)
        .status()
        .await
        .with_context(|| format!("Failed to run screenshot utility '{}'", config.program))?;

    if !status.success() {
        error!("{} exited with {}", config.program, status);
        bail!("Screenshot utility '{}' failed: {}", config.program, status);
    }

    if !config.output.exists() {
        error!("capture output file missing: {}", config.output.display());
        bail!(
            "Screenshot utility exited cleanly but did not create {}",
            config.output.display()
        );
    }

    info!("screenshot saved to {}", config.output.display());
    println!("[+] Screenshot saved: {}", config.output.display());

    Screenshot::from_file(&config.output)
}
