//! Gemini client errors.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenAIError>;

#[derive(Debug, Error)]
pub enum GenAIError {
    /// Missing API key or unusable settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request never got an HTTP response
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx status; `body` is Gemini's error document as returned
    #[error("Gemini API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Prompt rejected by safety filters; no candidates returned
    #[error("Prompt blocked by Gemini: {0}")]
    Blocked(String),

    /// A candidate came back without any text
    #[error("Empty response from Gemini (finish reason: {0})")]
    EmptyResponse(String),

    /// Response body was not the expected JSON
    #[error("Parse error: {0}")]
    Parse(String),
}
