//! User account models.

use serde::{Deserialize, Serialize};

/// Username the backend treats as the back-office administrator.
pub const ADMIN_USERNAME: &str = "admin";

/// A user record as returned by `/users/me` and the admin surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl User {
    /// Whether this account has back-office privileges.
    pub fn is_admin(&self) -> bool {
        self.username == ADMIN_USERNAME
    }
}

/// Registration payload.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Partial update payload for `PUT /users/{id}`.
///
/// Only set fields are serialized, so a password change does not
/// accidentally rewrite the username.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserPatch {
    pub fn username(name: impl Into<String>) -> Self {
        Self {
            username: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn password(password: impl Into<String>) -> Self {
        Self {
            password: Some(password.into()),
            ..Self::default()
        }
    }
}
