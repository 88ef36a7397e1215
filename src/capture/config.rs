use std::ffi::OsString;
use std::path::Path;
use std::time::Duration;

// Constants for capture and verification behavior
pub const DEFAULT_CAPTURE_PROGRAM: &str = "spectacle"; // KDE screenshot utility
pub const VERIFY_MAX_ATTEMPTS: u32 = 2; // Initial capture plus one retry
pub const VERIFY_RETRY_DELAY: Duration = Duration::from_secs(3); // Delay before the retry

/// Builds the argument list for the screenshot utility.
///
/// Spectacle flags: -b (background), -n (no notification), -o (output path),
/// -a (active window only).
pub fn capture_arguments(output: &Path, active_only: bool) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-b".into(), "-n".into(), "-o".into(), output.into()];
    if active_only {
        args.push("-a".into());
    }
    args
}
