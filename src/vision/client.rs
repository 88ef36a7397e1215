use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::capture::Screenshot;

/// Substituted when the service answers without a `response` field
pub const NO_DESCRIPTION_PLACEHOLDER: &str = "No description was generated.";

/// Prefix for vision failures that are folded into the description text
pub const VISION_ERROR_PREFIX: &str = "Error calling Ollama:";

/// Client for an Ollama-compatible vision inference service
#[derive(Debug, Clone)]
pub struct VisionClient {
    http: reqwest::Client,
    base_url: Url,
    model: String,
}

/// Request body for the `/api/generate` endpoint
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    images: [&'a str; 1],
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

impl VisionClient {
    pub fn new(base_url: Url, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            model: model.into(),
        }
    }

    /// Full URL of the generate endpoint. The base URL's own path is kept,
    /// so a reverse-proxied service like `http://host/ollama` still reaches
    /// `http://host/ollama/api/generate`.
    fn endpoint(&self) -> String {
        format!(
            "{}/api/generate",
            self.base_url.as_str().trim_end_matches('/')
        )
    }

    /// Sends one non-streaming generate request with the base64 image.
    ///
    /// A body without a `response` field is still `Ok`, carrying the fixed
    /// placeholder text.
    pub async fn generate(&self, image_b64: &str, prompt: &str) -> Result<String> {
        let url = self.endpoint();
        debug!("posting generate request to {} (model {})", url, self.model);

        let payload = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            images: [image_b64],
        };

        let response = self
            .http
            .post(url)
            .json(&payload)
            .send()
            .await
            .context("Request to Ollama failed")?
            .error_for_status()
            .context("Ollama returned an error status")?;

        let body: GenerateResponse = response
            .json()
            .await
            .context("Invalid JSON from Ollama")?;

        Ok(body
            .response
            .unwrap_or_else(|| NO_DESCRIPTION_PLACEHOLDER.to_string()))
    }

    /// Generates a description, folding any failure into the returned text.
    ///
    /// Downstream stages treat the result as model output either way, so a
    /// failed call comes back as a message with a fixed prefix instead of
    /// an error.
    pub async fn describe(&self, screenshot: &Screenshot, prompt: &str) -> String {
        println!("[*] Asking {} to analyze the image...", self.model);
        match self.generate(&screenshot.image_data, prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("vision call failed: {:#}", e);
                format!("{} {:#}", VISION_ERROR_PREFIX, e)
            }
        }
    }
}
