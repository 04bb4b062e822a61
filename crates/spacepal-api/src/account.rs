//! Authentication and account endpoints.

use async_trait::async_trait;
use serde::Deserialize;
use spacepal_core::error::Result;
use spacepal_core::gateway::AccountGateway;
use spacepal_core::user::{NewUser, User, UserPatch};
use spacepal_core::SpacePalError;

use crate::client::SpacePalClient;

/// Response of `POST /auth/token`.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[allow(dead_code)]
    #[serde(default)]
    token_type: String,
}

#[async_trait]
impl AccountGateway for SpacePalClient {
    async fn login(&self, username: &str, password: &str) -> Result<String> {
        // OAuth2 password flow: the token endpoint takes a form body, not JSON.
        let form = [("username", username), ("password", password)];
        let request = self.post("/auth/token").form(&form);

        // The token endpoint signals bad credentials with 400, not 401.
        let token: TokenResponse = match Self::send(request).await {
            Ok(response) => Self::decode(response).await?,
            Err(SpacePalError::Api { status: 400, message }) => {
                return Err(SpacePalError::auth(message));
            }
            Err(e) => return Err(e),
        };

        Ok(token.access_token)
    }

    async fn register(&self, user: &NewUser) -> Result<User> {
        let request = self.post("/users/").json(user);
        let response = Self::send(request).await?;
        Self::decode(response).await
    }

    async fn current_user(&self, token: &str) -> Result<User> {
        let request = Self::bearer(self.get("/users/me"), token);
        let response = Self::send(request).await?;
        Self::decode(response).await
    }

    async fn update_user(&self, token: &str, user_id: &str, patch: &UserPatch) -> Result<User> {
        let path = format!("/users/{}", user_id);
        let request = Self::bearer(self.put(&path), token).json(patch);
        let response = Self::send(request).await?;
        Self::decode(response).await
    }
}
