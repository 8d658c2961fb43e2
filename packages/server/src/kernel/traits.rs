// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (what to prompt for, when to persist) lives in domain activities.
//
// Naming convention: Base* for trait names (e.g., BaseAI, BaseListingStore)

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domains::listings::models::{Listing, NewListing};

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Whether a credential is available. Checked before any network call.
    fn is_configured(&self) -> bool {
        true
    }

    /// Complete a prompt with an LLM (returns raw text response)
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Complete a prompt with a specific model (returns raw text response)
    /// If model is None, uses the default model
    async fn complete_with_model(&self, prompt: &str, model: Option<&str>) -> Result<String> {
        // Default implementation ignores model and calls complete
        let _ = model;
        self.complete(prompt).await
    }
}

// =============================================================================
// Listing Store Trait (Infrastructure - persistence lives elsewhere)
// =============================================================================

#[async_trait]
pub trait BaseListingStore: Send + Sync {
    /// Listings already loaded for the current session
    async fn products(&self) -> Result<Vec<Listing>>;

    /// Create a listing; the store assigns the id
    async fn add_product(&self, listing: NewListing) -> Result<Listing>;

    /// Replace an existing listing wholesale
    async fn update_product(&self, listing: Listing) -> Result<Listing>;
}

// =============================================================================
// Notification Trait (Infrastructure - transient user feedback)
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

pub trait BaseNotifier: Send + Sync {
    fn show_toast(&self, message: &str, kind: ToastKind);
}

// =============================================================================
// Navigation Trait (Infrastructure - redirect after submit)
// =============================================================================

pub trait BaseNavigator: Send + Sync {
    fn navigate(&self, path: &str);
}
