use serde::{Deserialize, Serialize};

use super::AuthError;
use crate::common::entity_ids::MemberId;

/// The signed-in member acting on the marketplace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub member_id: MemberId,
    pub display_name: String,
}

impl AuthUser {
    pub fn new(member_id: impl Into<MemberId>, display_name: impl Into<String>) -> Self {
        Self {
            member_id: member_id.into(),
            display_name: display_name.into(),
        }
    }

    /// Unwrap an optional session into the acting user
    pub fn require(user: Option<&AuthUser>) -> Result<&AuthUser, AuthError> {
        user.ok_or(AuthError::AuthenticationRequired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_missing_session() {
        let err = AuthUser::require(None).unwrap_err();
        assert!(matches!(err, AuthError::AuthenticationRequired));
    }

    #[test]
    fn require_returns_present_user() {
        let user = AuthUser::new("u1", "Sam");
        let acting = AuthUser::require(Some(&user)).unwrap();
        assert_eq!(acting.member_id.as_str(), "u1");
    }
}
