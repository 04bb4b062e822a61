//! Back-office operations, gated on the persisted admin flag.

use std::sync::Arc;

use serde_json::Value;
use spacepal_core::error::Result;
use spacepal_core::gateway::{AdminGateway, AdminResource};
use spacepal_core::session::SessionStore;
use spacepal_core::SpacePalError;

/// CRUD over the back-office collections.
///
/// Every operation re-checks the session: a token alone is not enough,
/// the admin flag must be set too.
pub struct AdminService {
    admin: Arc<dyn AdminGateway>,
    session: Arc<dyn SessionStore>,
}

impl AdminService {
    pub fn new(admin: Arc<dyn AdminGateway>, session: Arc<dyn SessionStore>) -> Self {
        Self { admin, session }
    }

    pub async fn list(&self, resource: AdminResource) -> Result<Vec<Value>> {
        let token = self.authorize().await?;
        self.admin.list(&token, resource).await
    }

    pub async fn create(&self, resource: AdminResource, record: &Value) -> Result<Value> {
        let token = self.authorize().await?;
        self.admin.create(&token, resource, record).await
    }

    pub async fn update(&self, resource: AdminResource, id: &str, record: &Value) -> Result<Value> {
        let token = self.authorize().await?;
        self.admin.update(&token, resource, id, record).await
    }

    pub async fn delete(&self, resource: AdminResource, id: &str) -> Result<()> {
        let token = self.authorize().await?;
        self.admin.delete(&token, resource, id).await
    }

    async fn authorize(&self) -> Result<String> {
        let state = self.session.state().await?;
        let token = state
            .access_token
            .ok_or_else(|| SpacePalError::auth("login required"))?;
        if !state.is_admin {
            return Err(SpacePalError::forbidden(
                "administrator privileges required",
            ));
        }
        Ok(token)
    }
}
