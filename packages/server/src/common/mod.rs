// Common types and utilities shared across the application

pub mod auth;
pub mod entity_ids;
pub mod id;

pub use auth::{AuthError, AuthUser};
pub use entity_ids::{ListingId, MemberId};
pub use id::Id;
