//! Profile editing for the logged-in user.

use std::sync::Arc;

use spacepal_core::error::Result;
use spacepal_core::gateway::AccountGateway;
use spacepal_core::session::SessionStore;
use spacepal_core::user::{User, UserPatch};
use spacepal_core::SpacePalError;

pub struct ProfileService {
    account: Arc<dyn AccountGateway>,
    session: Arc<dyn SessionStore>,
}

impl ProfileService {
    pub fn new(account: Arc<dyn AccountGateway>, session: Arc<dyn SessionStore>) -> Self {
        Self { account, session }
    }

    /// The current user record, straight from the backend.
    pub async fn load(&self) -> Result<User> {
        let token = self.authenticated().await?;
        self.account.current_user(&token).await
    }

    /// Renames the account, then re-fetches and re-persists the identity.
    /// The token itself stays valid across a rename.
    pub async fn update_username(&self, username: &str) -> Result<User> {
        if username.trim().is_empty() {
            return Err(SpacePalError::validation("username must not be empty"));
        }

        let token = self.authenticated().await?;
        let user_id = self.user_id().await?;

        self.account
            .update_user(&token, &user_id, &UserPatch::username(username))
            .await?;

        let refreshed = self.account.current_user(&token).await?;
        self.session
            .set_credentials(
                token,
                refreshed.username.clone(),
                refreshed.id.clone(),
                refreshed.is_admin(),
            )
            .await?;
        Ok(refreshed)
    }

    /// Sends only the password field, leaving the rest of the record alone.
    pub async fn change_password(&self, password: &str) -> Result<()> {
        if password.is_empty() {
            return Err(SpacePalError::validation("password must not be empty"));
        }

        let token = self.authenticated().await?;
        let user_id = self.user_id().await?;

        self.account
            .update_user(&token, &user_id, &UserPatch::password(password))
            .await?;
        Ok(())
    }

    async fn authenticated(&self) -> Result<String> {
        self.session
            .access_token()
            .await
            .ok_or_else(|| SpacePalError::auth("login required"))
    }

    async fn user_id(&self) -> Result<String> {
        self.session
            .state()
            .await?
            .user_id
            .ok_or_else(|| SpacePalError::auth("no user id in session"))
    }
}
