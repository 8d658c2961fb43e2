//! Typed string identifiers for compile-time type safety.
//!
//! `Id<T>` wraps the opaque string key a collaborator hands out (`"p1"`, a
//! UUID, whatever the store uses) and tags it with the entity it belongs to,
//! so a `MemberId` can never be passed where a `ListingId` was expected.
//!
//! # Example
//!
//! ```rust
//! use ecofinds_core::common::id::Id;
//!
//! pub struct Listing;
//! pub struct Member;
//!
//! let listing_id: Id<Listing> = Id::from("p1");
//! let member_id: Id<Member> = Id::generate();
//!
//! // This would be a compile error:
//! // let wrong: Id<Listing> = member_id;
//! # let _ = (listing_id, member_id);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use uuid::Uuid;

/// A typed wrapper around an opaque string key.
#[repr(transparent)]
pub struct Id<T>(String, PhantomData<fn() -> T>);

// ============================================================================
// Core implementations
// ============================================================================

impl<T> Id<T> {
    /// Wraps an existing key.
    #[inline]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into(), PhantomData)
    }

    /// Creates a fresh time-ordered key (UUID v7 text).
    #[inline]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string(), PhantomData)
    }

    /// Returns the key as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the inner key.
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns `true` for the empty key.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// Standard trait implementations
// ============================================================================

impl<T> Clone for Id<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(&format!("Id<{}>", std::any::type_name::<T>()))
            .field(&self.0)
            .finish()
    }
}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<T> PartialEq for Id<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> Hash for Id<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> AsRef<str> for Id<T> {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<T> From<&str> for Id<T> {
    #[inline]
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T> From<String> for Id<T> {
    #[inline]
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// Serde support
// ============================================================================

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

// ============================================================================
// Tests
// ============================================================================
