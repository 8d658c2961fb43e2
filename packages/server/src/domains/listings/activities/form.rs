//! Create/edit listing form.
//!
//! `ListingForm` owns the editable fields of one form instance. Field edits go
//! through `&self`, so the form stays editable while a description is being
//! generated; at most one generation runs per form at a time.

use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::common::{AuthUser, ListingId};
use crate::domains::listings::activities::description::generate_description;
use crate::domains::listings::errors::{DescriptionError, FormError};
use crate::domains::listings::models::{Category, Listing, NewListing};
use crate::kernel::{ServerDeps, ToastKind};

/// Where the seller lands after saving
pub const MY_LISTINGS_PATH: &str = "/my-listings";

const MISSING_TITLE_MESSAGE: &str = "Please enter a product title first.";
const GENERATED_MESSAGE: &str = "Description generated successfully!";
const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// Current values of the editable fields. Price is kept as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFields {
    pub title: String,
    pub description: String,
    pub price: String,
    pub category: Category,
}

impl From<&Listing> for ListingFields {
    fn from(listing: &Listing) -> Self {
        Self {
            title: listing.title.clone(),
            description: listing.description.clone(),
            price: listing.price.to_string(),
            category: listing.category,
        }
    }
}

/// Result of pressing "generate with AI"
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    Generated(String),
    MissingTitle,
    AlreadyGenerating,
    Failed(DescriptionError),
}

/// Result of submitting the form
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(Listing),
    Updated(Listing),
    /// No signed-in user; nothing was saved
    Unauthenticated,
}

#[derive(Debug, Default)]
struct FormState {
    fields: ListingFields,
    /// Image of the listing being edited, kept across re-submits
    loaded_image_url: Option<String>,
}

pub struct ListingForm {
    deps: Arc<ServerDeps>,
    listing_id: Option<ListingId>,
    state: RwLock<FormState>,
    generating: AtomicBool,
}

impl ListingForm {
    /// Edit mode iff `listing_id` is present.
    pub fn new(deps: Arc<ServerDeps>, listing_id: Option<ListingId>) -> Self {
        Self {
            deps,
            listing_id,
            state: RwLock::new(FormState::default()),
            generating: AtomicBool::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.listing_id.is_some()
    }

    pub fn listing_id(&self) -> Option<&ListingId> {
        self.listing_id.as_ref()
    }

    /// Populate the fields from the listing being edited.
    ///
    /// Unknown ids (or a store that cannot list) leave the defaults in place.
    pub async fn load_for_edit(&self) {
        let Some(id) = &self.listing_id else {
            return;
        };

        let products = match self.deps.listings.products().await {
            Ok(products) => products,
            Err(e) => {
                warn!(listing_id = %id, error = %e, "Failed to read listings for edit");
                return;
            }
        };

        match products.iter().find(|p| &p.id == id) {
            Some(listing) => {
                let mut state = self.write_state();
                state.fields = ListingFields::from(listing);
                state.loaded_image_url = Some(listing.image_url.clone());
                debug!(listing_id = %id, "Loaded listing into form");
            }
            None => debug!(listing_id = %id, "Listing not found; form left at defaults"),
        }
    }

    // =========================================================================
    // Fields
    // =========================================================================

    /// Snapshot of the current field values
    pub fn fields(&self) -> ListingFields {
        self.read_state().fields.clone()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.write_state().fields.title = title.into();
    }

    pub fn set_description(&self, description: impl Into<String>) {
        self.write_state().fields.description = description.into();
    }

    pub fn set_price(&self, price: impl Into<String>) {
        self.write_state().fields.price = price.into();
    }

    pub fn set_category(&self, category: Category) {
        self.write_state().fields.category = category;
    }

    /// Drives the loading indicator
    pub fn is_generating(&self) -> bool {
        self.generating.load(Ordering::Acquire)
    }

    /// Whether the "generate with AI" trigger is enabled
    pub fn can_generate(&self) -> bool {
        !self.read_state().fields.title.trim().is_empty() && !self.is_generating()
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Fill the description from the AI, reporting the result as a toast.
    pub async fn generate_description(&self) -> GenerateOutcome {
        let (title, category) = {
            let state = self.read_state();
            (state.fields.title.clone(), state.fields.category)
        };

        if title.trim().is_empty() {
            self.deps
                .notifier
                .show_toast(MISSING_TITLE_MESSAGE, ToastKind::Error);
            return GenerateOutcome::MissingTitle;
        }

        if self
            .generating
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Description generation already in flight for this form");
            return GenerateOutcome::AlreadyGenerating;
        }
        let _in_flight = InFlight(&self.generating);

        match generate_description(&title, category, &self.deps).await {
            Ok(text) => {
                self.write_state().fields.description = text.clone();
                self.deps
                    .notifier
                    .show_toast(GENERATED_MESSAGE, ToastKind::Success);
                GenerateOutcome::Generated(text)
            }
            Err(e) => {
                self.deps
                    .notifier
                    .show_toast(&user_message(&e), ToastKind::Error);
                GenerateOutcome::Failed(e)
            }
        }
    }

    /// Save the listing and leave the form.
    pub async fn submit(&self, user: Option<&AuthUser>) -> Result<SubmitOutcome, FormError> {
        let user = match AuthUser::require(user) {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "Ignoring listing submit without a signed-in user");
                return Ok(SubmitOutcome::Unauthenticated);
            }
        };

        let (fields, loaded_image_url) = {
            let state = self.read_state();
            (state.fields.clone(), state.loaded_image_url.clone())
        };

        let price = validate_fields(&fields)?;

        let record = NewListing {
            title: fields.title,
            description: fields.description,
            price,
            category: fields.category,
            image_url: match &self.listing_id {
                Some(_) => loaded_image_url.unwrap_or_else(placeholder_image_url),
                None => placeholder_image_url(),
            },
            seller_id: user.member_id.clone(),
        };

        let outcome = match &self.listing_id {
            Some(id) => {
                let updated = self
                    .deps
                    .listings
                    .update_product(record.with_id(id.clone()))
                    .await?;
                info!(listing_id = %updated.id, seller_id = %updated.seller_id, "Listing updated");
                SubmitOutcome::Updated(updated)
            }
            None => {
                let created = self.deps.listings.add_product(record).await?;
                info!(listing_id = %created.id, seller_id = %created.seller_id, "Listing created");
                SubmitOutcome::Created(created)
            }
        };

        self.deps.navigator.navigate(MY_LISTINGS_PATH);
        Ok(outcome)
    }

    fn read_state(&self) -> RwLockReadGuard<'_, FormState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, FormState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}

/// Clears the in-flight flag on every exit path.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Required fields, plus price: numeric, `min = 0`, `step = 0.01`.
fn validate_fields(fields: &ListingFields) -> Result<Decimal, FormError> {
    if fields.title.trim().is_empty() {
        return Err(FormError::Validation("Title is required.".into()));
    }
    if fields.description.trim().is_empty() {
        return Err(FormError::Validation("Description is required.".into()));
    }
    parse_price(&fields.price)
}

fn parse_price(raw: &str) -> Result<Decimal, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FormError::Validation("Price is required.".into()));
    }

    let price = Decimal::from_str(raw)
        .map_err(|_| FormError::Validation(format!("Price must be a number, got '{}'.", raw)))?;

    if price.is_sign_negative() && !price.is_zero() {
        return Err(FormError::Validation("Price cannot be negative.".into()));
    }
    if price.normalize().scale() > 2 {
        return Err(FormError::Validation(
            "Price must use at most two decimal places.".into(),
        ));
    }

    Ok(price)
}

/// Placeholder image, unique per call
fn placeholder_image_url() -> String {
    format!(
        "https://picsum.photos/seed/{}/800/600",
        Uuid::new_v4().simple()
    )
}

fn user_message(err: &dyn std::error::Error) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        UNKNOWN_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str, description: &str, price: &str) -> ListingFields {
        ListingFields {
            title: title.into(),
            description: description.into(),
            price: price.into(),
            category: Category::Other,
        }
    }

    #[test]
    fn price_accepts_cents_and_whole_numbers() {
        assert_eq!(parse_price("19.99").unwrap(), Decimal::new(1999, 2));
        assert_eq!(parse_price(" 5 ").unwrap(), Decimal::new(5, 0));
        assert_eq!(parse_price("0").unwrap(), Decimal::ZERO);
        assert_eq!(parse_price("3.500").unwrap(), Decimal::new(3500, 3));
    }

    #[test]
    fn price_rejects_native_constraint_violations() {
        for raw in ["", "   ", "abc", "-1", "-0.01", "1.999"] {
            assert!(
                matches!(parse_price(raw), Err(FormError::Validation(_))),
                "expected rejection for {raw:?}"
            );
        }
    }

    #[test]
    fn required_text_fields() {
        assert!(matches!(
            validate_fields(&fields("", "desc", "1")),
            Err(FormError::Validation(m)) if m.contains("Title")
        ));
        assert!(matches!(
            validate_fields(&fields("Lamp", "  ", "1")),
            Err(FormError::Validation(m)) if m.contains("Description")
        ));
        assert!(validate_fields(&fields("Lamp", "Bright", "1")).is_ok());
    }

    #[test]
    fn placeholder_images_are_distinct() {
        let a = placeholder_image_url();
        let b = placeholder_image_url();
        assert_ne!(a, b);
        assert!(a.starts_with("https://picsum.photos/seed/"));
        assert!(a.ends_with("/800/600"));
    }

    #[test]
    fn empty_error_message_falls_back() {
        let err = FormError::Validation(String::new());
        assert_eq!(user_message(&err), UNKNOWN_ERROR_MESSAGE);
        assert_eq!(
            user_message(&DescriptionError::Generation),
            "Failed to generate description. Please try again later."
        );
    }
}
