// TestDependencies - mock implementations for testing
//
// Provides mock collaborators that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use super::{BaseAI, BaseListingStore, BaseNavigator, BaseNotifier, ServerDeps, ToastKind};
use crate::common::ListingId;
use crate::domains::listings::models::{Listing, NewListing};

// =============================================================================
// Mock AI (Generic LLM capabilities)
// =============================================================================

pub struct MockAI {
    configured: bool,
    responses: Arc<Mutex<Vec<Result<String, String>>>>,
    calls: Arc<Mutex<Vec<String>>>,
    models: Arc<Mutex<Vec<Option<String>>>>,
    gate: Option<Arc<Notify>>,
}

impl MockAI {
    pub fn new() -> Self {
        Self {
            configured: true,
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            models: Arc::new(Mutex::new(Vec::new())),
            gate: None,
        }
    }

    /// A mock with no credential: `is_configured()` reports false
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new()
        }
    }

    /// Add a text response to the queue
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Ok(response.into()));
        self
    }

    /// Add a failure to the queue; its message becomes the error text
    pub fn with_error(self, message: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Err(message.into()));
        self
    }

    /// Hold every call until the returned handle is notified
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(gate.clone());
        (self, gate)
    }

    /// Get all prompts that were sent to the AI
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the last prompt sent to the AI
    pub fn last_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last().cloned()
    }

    /// Get the model requested by the last call
    pub fn last_model(&self) -> Option<String> {
        self.models.lock().unwrap().last().cloned().flatten()
    }

    /// Check if a prompt containing the given text was sent
    pub fn was_called_with(&self, text: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.contains(text))
    }

    /// Get the number of times the AI was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockAI {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        self.complete_with_model(prompt, None).await
    }

    async fn complete_with_model(&self, prompt: &str, model: Option<&str>) -> Result<String> {
        // Record the call
        self.calls.lock().unwrap().push(prompt.to_string());
        self.models
            .lock()
            .unwrap()
            .push(model.map(str::to_string));

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let next = {
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                None
            } else {
                Some(responses.remove(0))
            }
        };

        match next {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(anyhow::anyhow!(message)),
            // Return default mock response
            None => Ok("Mock AI response".to_string()),
        }
    }
}

// =============================================================================
// Mock Listing Store
// =============================================================================

pub struct MockListingStore {
    listings: Arc<Mutex<Vec<Listing>>>,
    added: Arc<Mutex<Vec<NewListing>>>,
    updated: Arc<Mutex<Vec<Listing>>>,
    fail_writes: bool,
}

impl MockListingStore {
    pub fn new() -> Self {
        Self {
            listings: Arc::new(Mutex::new(Vec::new())),
            added: Arc::new(Mutex::new(Vec::new())),
            updated: Arc::new(Mutex::new(Vec::new())),
            fail_writes: false,
        }
    }

    /// Seed an existing listing
    pub fn with_listing(self, listing: Listing) -> Self {
        self.listings.lock().unwrap().push(listing);
        self
    }

    /// Make add/update return an error
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Records passed to `add_product`
    pub fn added(&self) -> Vec<NewListing> {
        self.added.lock().unwrap().clone()
    }

    /// Records passed to `update_product`
    pub fn updated(&self) -> Vec<Listing> {
        self.updated.lock().unwrap().clone()
    }
}

impl Default for MockListingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseListingStore for MockListingStore {
    async fn products(&self) -> Result<Vec<Listing>> {
        Ok(self.listings.lock().unwrap().clone())
    }

    async fn add_product(&self, listing: NewListing) -> Result<Listing> {
        self.added.lock().unwrap().push(listing.clone());
        if self.fail_writes {
            anyhow::bail!("Mock store rejected add");
        }

        let created = listing.with_id(ListingId::generate());
        self.listings.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_product(&self, listing: Listing) -> Result<Listing> {
        self.updated.lock().unwrap().push(listing.clone());
        if self.fail_writes {
            anyhow::bail!("Mock store rejected update");
        }

        let mut listings = self.listings.lock().unwrap();
        match listings.iter_mut().find(|l| l.id == listing.id) {
            Some(existing) => *existing = listing.clone(),
            None => listings.push(listing.clone()),
        }
        Ok(listing)
    }
}

// =============================================================================
// Mock Notifier
// =============================================================================

pub struct MockNotifier {
    toasts: Arc<Mutex<Vec<(String, ToastKind)>>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            toasts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// All toasts shown, in order
    pub fn toasts(&self) -> Vec<(String, ToastKind)> {
        self.toasts.lock().unwrap().clone()
    }

    pub fn last_toast(&self) -> Option<(String, ToastKind)> {
        self.toasts.lock().unwrap().last().cloned()
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseNotifier for MockNotifier {
    fn show_toast(&self, message: &str, kind: ToastKind) {
        self.toasts.lock().unwrap().push((message.to_string(), kind));
    }
}

// =============================================================================
// Mock Navigator
// =============================================================================

pub struct MockNavigator {
    visits: Arc<Mutex<Vec<String>>>,
}

impl MockNavigator {
    pub fn new() -> Self {
        Self {
            visits: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Paths navigated to, in order
    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl Default for MockNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseNavigator for MockNavigator {
    fn navigate(&self, path: &str) {
        self.visits.lock().unwrap().push(path.to_string());
    }
}

// =============================================================================
// TestDependencies - Builder for test dependencies
// =============================================================================

#[derive(Clone)]
pub struct TestDependencies {
    pub ai: Arc<MockAI>,
    pub listings: Arc<MockListingStore>,
    pub notifier: Arc<MockNotifier>,
    pub navigator: Arc<MockNavigator>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            ai: Arc::new(MockAI::new()),
            listings: Arc::new(MockListingStore::new()),
            notifier: Arc::new(MockNotifier::new()),
            navigator: Arc::new(MockNavigator::new()),
        }
    }

    /// Set a mock AI
    pub fn mock_ai(mut self, ai: MockAI) -> Self {
        self.ai = Arc::new(ai);
        self
    }

    /// Set a mock listing store
    pub fn mock_listings(mut self, store: MockListingStore) -> Self {
        self.listings = Arc::new(store);
        self
    }

    /// Convert into ServerDeps for testing
    pub fn to_deps(&self) -> Arc<ServerDeps> {
        Arc::new(ServerDeps::new(
            self.ai.clone(),
            super::ai::GEMINI_2_5_FLASH,
            self.listings.clone(),
            self.notifier.clone(),
            self.navigator.clone(),
        ))
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
