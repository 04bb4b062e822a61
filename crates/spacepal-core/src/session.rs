//! Persisted session state: auth credentials and the space/style selection.
//!
//! Mirrors the browser-storage keys of the original client: a flat keyset
//! with no versioning or expiry metadata. The store is the single holder of
//! session-scoped mutable state; everything else reads through it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The user's chosen space and style identifiers.
///
/// Empty strings mean "not chosen yet". Created empty at session start,
/// restored from persisted storage on load, mutated only by the selection
/// screen, and read (never mutated) by the catalogue.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Selection {
    #[serde(default)]
    pub space_id: String,
    #[serde(default)]
    pub style_id: String,
}

impl Selection {
    /// Both a space and a style have been chosen.
    pub fn is_complete(&self) -> bool {
        !self.space_id.is_empty() && !self.style_id.is_empty()
    }
}

/// Session state that persists across client restarts.
///
/// # Fields
///
/// * `access_token` - Bearer token issued by `/auth/token`.
/// * `username` / `user_id` - Identity of the logged-in user.
/// * `is_admin` - Back-office flag, derived at login time.
/// * `selection` - The persisted space/style choice.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionState {
    pub access_token: Option<String>,
    pub username: Option<String>,
    pub user_id: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub selection: Selection,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session is authenticated when it carries a token.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Records a successful login.
    pub fn set_credentials(
        &mut self,
        token: impl Into<String>,
        username: impl Into<String>,
        user_id: impl Into<String>,
        is_admin: bool,
    ) {
        self.access_token = Some(token.into());
        self.username = Some(username.into());
        self.user_id = Some(user_id.into());
        self.is_admin = is_admin;
    }

    /// Clears every auth key, leaving the selection untouched.
    pub fn clear_credentials(&mut self) {
        self.access_token = None;
        self.username = None;
        self.user_id = None;
        self.is_admin = false;
    }
}

/// Store for the authenticated part of the session.
///
/// Every setter persists immediately; getters read the restored state.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn state(&self) -> Result<SessionState>;

    async fn set_credentials(
        &self,
        token: String,
        username: String,
        user_id: String,
        is_admin: bool,
    ) -> Result<()>;

    async fn clear_credentials(&self) -> Result<()>;

    async fn access_token(&self) -> Option<String>;

    async fn is_admin(&self) -> bool;
}

/// Store for the space/style selection.
///
/// No validation of id existence happens here: resolving ids to
/// human-readable names is deferred to the catalogue loader.
#[async_trait]
pub trait SelectionStore: Send + Sync {
    async fn selection(&self) -> Result<Selection>;

    async fn set_space(&self, space_id: String) -> Result<()>;

    async fn set_style(&self, style_id: String) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_is_logged_out() {
        let state = SessionState::new();
        assert!(!state.is_authenticated());
        assert!(!state.is_admin);
        assert!(!state.selection.is_complete());
    }

    #[test]
    fn test_clear_credentials_keeps_selection() {
        let mut state = SessionState::new();
        state.selection = Selection {
            space_id: "sp1".into(),
            style_id: "st1".into(),
        };
        state.set_credentials("tok", "ana", "u1", false);
        assert!(state.is_authenticated());

        state.clear_credentials();
        assert!(!state.is_authenticated());
        assert!(state.selection.is_complete());
    }
}
