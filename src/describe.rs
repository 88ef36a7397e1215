use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::capture::Screenshot;
use crate::vision::VisionClient;

/// Default analysis question when the user gives no custom prompt
pub const DEFAULT_ANALYSIS_PROMPT: &str = "Analyze this application window screenshot. \
     Identify the application name, its main purpose, visible text, buttons, \
     and the current state of any displayed data.";

/// Asks the vision model for a description, prints it between banners, and
/// writes it verbatim to the screenshot's sibling `.txt` file.
///
/// The description may be a folded error message from the client; it is
/// written and printed the same way.
pub async fn describe_and_save(
    client: &VisionClient,
    screenshot: &Screenshot,
    prompt: &str,
) -> Result<PathBuf> {
    let description = client.describe(screenshot, prompt).await;

    println!("\n=== Vision Description ===");
    println!("{}", description);
    println!("==========================\n");

    let description_path = screenshot.description_path();
    fs::write(&description_path, &description).with_context(|| {
        format!(
            "Failed to write description to {}",
            description_path.display()
        )
    })?;

    info!("description saved to {}", description_path.display());
    println!("[+] Description saved: {}", description_path.display());

    Ok(description_path)
}
