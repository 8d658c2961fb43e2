//! Listing activities - the operations a seller performs on the listing form

pub mod description;
pub mod form;

pub use description::{build_description_prompt, generate_description};
pub use form::{
    GenerateOutcome, ListingFields, ListingForm, SubmitOutcome, MY_LISTINGS_PATH,
};
