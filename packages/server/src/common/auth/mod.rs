//! Authentication context for marketplace actions
//!
//! Sessions are established elsewhere; domain code only receives the
//! already-authenticated user (or nothing) and asks for it explicitly:
//!
//! ```rust
//! use ecofinds_core::common::auth::AuthUser;
//!
//! let session: Option<AuthUser> = None;
//! assert!(AuthUser::require(session.as_ref()).is_err());
//! ```

mod errors;
mod user;

pub use errors::AuthError;
pub use user::AuthUser;
