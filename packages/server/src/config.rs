use anyhow::Result;
use dotenvy::dotenv;
use std::env;

use crate::kernel::ai::GEMINI_2_5_FLASH;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini credential. Optional here: a missing key is reported when a
    /// description is first requested, never at startup.
    pub api_key: Option<String>,
    pub genai_model: String,
    pub genai_base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            api_key: env::var(genai_client::API_KEY_VAR)
                .ok()
                .filter(|k| !k.trim().is_empty()),
            genai_model: env::var("GENAI_MODEL")
                .unwrap_or_else(|_| GEMINI_2_5_FLASH.to_string()),
            genai_base_url: env::var("GENAI_BASE_URL")
                .unwrap_or_else(|_| genai_client::DEFAULT_BASE_URL.to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            genai_model: GEMINI_2_5_FLASH.to_string(),
            genai_base_url: genai_client::DEFAULT_BASE_URL.to_string(),
        }
    }
}
