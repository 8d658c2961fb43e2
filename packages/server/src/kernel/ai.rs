// AI implementation using Google Gemini
//
// This is the infrastructure implementation of BaseAI.
// Business logic (what to prompt for) lives in domain layers.
//
// The REST client is built on first use, never at startup: a missing
// credential only surfaces when a completion is actually requested.

use std::sync::OnceLock;

use anyhow::{Context, Result};
use async_trait::async_trait;
use genai_client::{GenAIClient, GenAIError, GenerateContentRequest, API_KEY_VAR};

use super::BaseAI;
use crate::config::Config;

/// Gemini Flash - fast, cheap model used for listing copy.
pub const GEMINI_2_5_FLASH: &str = "gemini-2.5-flash";

/// Lazily-initialized Gemini implementation of AI capabilities
pub struct LazyGenAI {
    api_key: Option<String>,
    base_url: String,
    default_model: String,
    client: OnceLock<GenAIClient>,
}

impl LazyGenAI {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: genai_client::DEFAULT_BASE_URL.to_string(),
            default_model: GEMINI_2_5_FLASH.to_string(),
            client: OnceLock::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_key.clone())
            .with_base_url(config.genai_base_url.clone())
            .with_default_model(config.genai_model.clone())
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Whether the underlying REST client has been built yet
    pub fn is_initialized(&self) -> bool {
        self.client.get().is_some()
    }

    /// Guarded accessor: builds the client once, on first use.
    fn client(&self) -> std::result::Result<&GenAIClient, GenAIError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }

        let api_key = self.api_key.as_deref().ok_or_else(|| {
            GenAIError::Config(format!("{} environment variable not set", API_KEY_VAR))
        })?;

        Ok(self.client.get_or_init(|| {
            tracing::info!(base_url = %self.base_url, "Initializing Gemini client");
            GenAIClient::new(api_key).with_base_url(self.base_url.clone())
        }))
    }
}

#[async_trait]
impl BaseAI for LazyGenAI {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        self.complete_with_model(prompt, None).await
    }

    async fn complete_with_model(&self, prompt: &str, model: Option<&str>) -> Result<String> {
        let model_id = model.unwrap_or(&self.default_model);
        let client = self.client()?;

        tracing::info!(
            model = model_id,
            prompt_length = prompt.len(),
            "Calling Gemini API"
        );

        let response = client
            .generate_content(GenerateContentRequest::prompt(model_id, prompt))
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    model = model_id,
                    prompt_preview = %prompt.chars().take(200).collect::<String>(),
                    "Gemini API call failed"
                );
                e
            })
            .context("Failed to call Gemini API")?;

        tracing::info!(
            response_length = response.text.len(),
            model = model_id,
            "Gemini API response received"
        );

        Ok(response.text)
    }
}
