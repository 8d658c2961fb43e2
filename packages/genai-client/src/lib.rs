//! Pure Google Gemini REST API client
//!
//! A minimal client for the `generateContent` endpoint with no domain-specific
//! logic. Prompts go in, text comes out.
//!
//! # Example
//!
//! ```rust,ignore
//! use genai_client::{GenAIClient, GenerateContentRequest};
//!
//! let client = GenAIClient::from_env()?;
//!
//! let response = client
//!     .generate_content(GenerateContentRequest::prompt("gemini-2.5-flash", "Hello!"))
//!     .await?;
//! println!("{}", response.text);
//! ```

pub mod error;
pub mod types;

pub use error::{GenAIError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "API_KEY";

/// Pure Gemini API client.
#[derive(Clone)]
pub struct GenAIClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl GenAIClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from environment variable `API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| GenAIError::Config(format!("{} not set", API_KEY_VAR)))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies, regional endpoints, test stubs).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Single-shot text generation.
    ///
    /// Sends the request to `models/{model}:generateContent` and returns the
    /// concatenated text of the first candidate.
    pub async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, request.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gemini request failed");
                GenAIError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Gemini API error");
            return Err(GenAIError::Api {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let raw: types::GenerateContentResponseRaw = response
            .json()
            .await
            .map_err(|e| GenAIError::Parse(e.to_string()))?;

        let parsed = parse_response(raw)?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            response_length = parsed.text.len(),
            "Gemini generateContent"
        );

        Ok(parsed)
    }
}

fn parse_response(raw: types::GenerateContentResponseRaw) -> Result<GenerateContentResponse> {
    let usage = raw.usage_metadata;

    let Some(candidate) = raw.candidates.into_iter().next() else {
        return Err(match raw.prompt_feedback.and_then(|f| f.block_reason) {
            Some(reason) => GenAIError::Blocked(reason),
            None => GenAIError::EmptyResponse("no candidates".to_string()),
        });
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(GenAIError::EmptyResponse(
            candidate
                .finish_reason
                .unwrap_or_else(|| "unknown".to_string()),
        ));
    }

    Ok(GenerateContentResponse {
        text,
        finish_reason: candidate.finish_reason,
        usage,
    })
}
