pub mod activities;
pub mod errors;
pub mod models;

// Re-export errors
pub use errors::{DescriptionError, FormError};

// Re-export models (domain models)
pub use models::listing::{Category, Listing, NewListing};

// Re-export the form controller
pub use activities::{GenerateOutcome, ListingFields, ListingForm, SubmitOutcome};
