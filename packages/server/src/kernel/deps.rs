//! Server dependencies for domain activities (using traits for testability)
//!
//! This module provides the central dependency container used by the listing
//! activities. All external collaborators use trait abstractions so tests can
//! swap in the doubles from `test_dependencies`.

use std::sync::Arc;

use crate::config::Config;
use crate::kernel::{
    ai::LazyGenAI, BaseAI, BaseListingStore, BaseNavigator, BaseNotifier,
};

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to activities (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    /// AI client for description generation. In production this is a
    /// `LazyGenAI`, shared by every form in the process.
    pub ai: Arc<dyn BaseAI>,
    /// Model passed to every description request
    pub genai_model: String,
    pub listings: Arc<dyn BaseListingStore>,
    pub notifier: Arc<dyn BaseNotifier>,
    pub navigator: Arc<dyn BaseNavigator>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        ai: Arc<dyn BaseAI>,
        genai_model: impl Into<String>,
        listings: Arc<dyn BaseListingStore>,
        notifier: Arc<dyn BaseNotifier>,
        navigator: Arc<dyn BaseNavigator>,
    ) -> Self {
        Self {
            ai,
            genai_model: genai_model.into(),
            listings,
            notifier,
            navigator,
        }
    }

    /// Wire the Gemini adapter from configuration; the other collaborators
    /// belong to the embedding application.
    pub fn from_config(
        config: &Config,
        listings: Arc<dyn BaseListingStore>,
        notifier: Arc<dyn BaseNotifier>,
        navigator: Arc<dyn BaseNavigator>,
    ) -> Self {
        Self::new(
            Arc::new(LazyGenAI::from_config(config)),
            config.genai_model.clone(),
            listings,
            notifier,
            navigator,
        )
    }
}
