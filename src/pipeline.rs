use anyhow::{bail, Result};
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::capture::config::{VERIFY_MAX_ATTEMPTS, VERIFY_RETRY_DELAY};
use crate::capture::{take_screenshot, CaptureConfig, Screenshot};
use crate::config::SnapConfig;
use crate::describe::{describe_and_save, DEFAULT_ANALYSIS_PROMPT};
use crate::launcher::launch_and_wait;
use crate::vision::{verify_title, VisionClient};

/// Runs the full launch / capture / verify / describe sequence.
pub async fn run(config: &SnapConfig) -> Result<()> {
    launch_and_wait(config.launch.as_deref(), config.delay).await;

    let client = VisionClient::new(config.ollama_url.clone(), config.model.clone());
    let capture = CaptureConfig {
        program: config.capture_cmd.clone(),
        output: config.output.clone(),
        active_only: config.active_only,
    };

    let screenshot = capture_verified(&capture, config.expect_title.as_deref(), &client).await?;

    if config.wants_description() {
        let prompt = config.prompt.as_deref().unwrap_or(DEFAULT_ANALYSIS_PROMPT);
        describe_and_save(&client, &screenshot, prompt).await?;
    }

    Ok(())
}

/// Captures the screenshot and, when an expected title was given, verifies
/// it through the vision model.
///
/// A failed verification retries the whole capture+verify step once after a
/// fixed delay; a second failure is fatal. Capture failures are fatal
/// immediately, on any attempt. Without an expected title no vision call is
/// made.
async fn capture_verified(
    capture: &CaptureConfig,
    expected: Option<&str>,
    client: &VisionClient,
) -> Result<Screenshot> {
    let Some(expected) = expected else {
        return take_screenshot(capture).await;
    };

    for attempt in 1..=VERIFY_MAX_ATTEMPTS {
        let screenshot = take_screenshot(capture).await?;

        debug!("verification attempt {}/{}", attempt, VERIFY_MAX_ATTEMPTS);
        let outcome = verify_title(client, &screenshot, expected).await;
        if outcome.ok {
            println!("[+] Window verified: '{}'", expected);
            return Ok(screenshot);
        }

        warn!(
            "verification attempt {}/{} failed for '{}'",
            attempt, VERIFY_MAX_ATTEMPTS, expected
        );
        println!("[!] Verification failed, model answered: {}", outcome.response);

        if attempt < VERIFY_MAX_ATTEMPTS {
            println!(
                "[*] Retrying capture in {} seconds...",
                VERIFY_RETRY_DELAY.as_secs()
            );
            sleep(VERIFY_RETRY_DELAY).await;
        }
    }

    bail!(
        "Window verification failed for '{}' after {} attempts",
        expected,
        VERIFY_MAX_ATTEMPTS
    )
}
