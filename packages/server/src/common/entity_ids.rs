//! Typed ID definitions for marketplace entities.
//!
//! ```rust
//! use ecofinds_core::common::{ListingId, MemberId};
//!
//! let listing_id = ListingId::from("p1");
//! let seller_id = MemberId::from("u1");
//!
//! // This would be a compile error:
//! // let wrong: ListingId = seller_id;
//! # let _ = (listing_id, seller_id);
//! ```

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Member entities (buyers and sellers).
pub struct Member;

/// Marker type for Listing entities (products offered for sale).
pub struct Listing;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Member entities.
pub type MemberId = Id<Member>;

/// Typed ID for Listing entities.
pub type ListingId = Id<Listing>;
