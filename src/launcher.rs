use std::process::{Command, Stdio};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Optionally starts the target application, then waits for its window.
///
/// The child is spawned through `sh -c` fully detached: its streams are
/// discarded and the handle is dropped without waiting, so its lifetime is
/// decoupled from ours. A command that does not exist or exits immediately
/// is not an error here; the missing window surfaces later as a capture or
/// verification failure.
pub async fn launch_and_wait(command: Option<&str>, delay_secs: f64) {
    let delay = Duration::from_secs_f64(delay_secs.max(0.0));

    match command {
        Some(command) => {
            println!("[*] Launching: {}", command);
            debug!("spawning detached: sh -c {:?}", command);
            let spawned = Command::new("sh")
                .arg("-c")
                .arg(command)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();
            match spawned {
                // Fire and forget; dropping the handle leaves the child running.
                Ok(child) => drop(child),
                Err(e) => warn!("failed to launch '{}': {}", command, e),
            }
            sleep(delay).await;
        }
        None => {
            if delay_secs > 0.0 {
                println!("[*] Waiting {} seconds before screenshot...", delay_secs);
                sleep(delay).await;
            }
        }
    }
}
