//! Login, logout, and session restore.

use std::sync::Arc;

use spacepal_core::error::Result;
use spacepal_core::gateway::AccountGateway;
use spacepal_core::session::SessionStore;
use spacepal_core::user::{NewUser, User};

/// Orchestrates the auth flows against the account gateway and persists
/// the outcome in the session store.
pub struct AuthService {
    account: Arc<dyn AccountGateway>,
    session: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(account: Arc<dyn AccountGateway>, session: Arc<dyn SessionStore>) -> Self {
        Self { account, session }
    }

    /// Exchanges credentials for a token, fetches the user record, and
    /// persists token, identity, and the admin flag.
    pub async fn login(&self, username: &str, password: &str) -> Result<User> {
        let token = self.account.login(username, password).await?;
        let user = self.account.current_user(&token).await?;

        self.session
            .set_credentials(token, user.username.clone(), user.id.clone(), user.is_admin())
            .await?;

        tracing::info!(username = %user.username, "logged in");
        Ok(user)
    }

    /// Validates a persisted token against the backend.
    ///
    /// An invalid or expired token logs the session out silently; the
    /// caller just sees `None`.
    pub async fn restore(&self) -> Result<Option<User>> {
        let Some(token) = self.session.access_token().await else {
            return Ok(None);
        };

        match self.account.current_user(&token).await {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::debug!(error = %e, "persisted token rejected, logging out");
                self.session.clear_credentials().await?;
                Ok(None)
            }
        }
    }

    /// Clears every persisted auth key. The space/style selection stays.
    pub async fn logout(&self) -> Result<()> {
        self.session.clear_credentials().await
    }

    pub async fn register(&self, user: &NewUser) -> Result<User> {
        self.account.register(user).await
    }
}
