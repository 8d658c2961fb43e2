use thiserror::Error;

/// Description generation failures, worded for the end user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptionError {
    #[error("AI functionality is not configured.")]
    Configuration,

    #[error("Failed to generate description. Please try again later.")]
    Generation,
}

/// Listing form submission failures
#[derive(Error, Debug)]
pub enum FormError {
    #[error("{0}")]
    Validation(String),

    #[error("Failed to save listing: {0}")]
    Store(#[from] anyhow::Error),
}
