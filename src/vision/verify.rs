use crate::capture::Screenshot;
use crate::vision::VisionClient;

/// Result of a window-title verification query
#[derive(Debug, Clone)]
pub struct VerificationOutcome {
    /// Whether the model confirmed the expected title
    pub ok: bool,
    /// Raw model response, kept for diagnostics on failure
    pub response: String,
}

/// Builds the yes/no question sent to the vision model
pub fn verification_prompt(expected: &str) -> String {
    format!(
        "Does this window have the title or contain the text '{}'? \
         Answer with 'YES' or 'NO' followed by the actual window title you see.",
        expected
    )
}

/// Whether a model response counts as confirmation.
///
/// A case-insensitive "YES" anywhere in the response passes, not just at
/// the start. Known looseness: a stray "yes" elsewhere in the free-text
/// answer also passes. Kept as-is to match established behavior.
pub fn confirms(response: &str) -> bool {
    response.to_uppercase().contains("YES")
}

/// Asks the vision model whether the captured window matches the expected
/// title. Vision failures surface as non-confirming response text, so they
/// count as verification failures.
pub async fn verify_title(
    client: &VisionClient,
    screenshot: &Screenshot,
    expected: &str,
) -> VerificationOutcome {
    let prompt = verification_prompt(expected);
    let response = client.describe(screenshot, &prompt).await;
    VerificationOutcome {
        ok: confirms(&response),
        response,
    }
}
