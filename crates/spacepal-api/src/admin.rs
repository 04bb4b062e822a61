//! Back-office CRUD over the admin resource collections.
//!
//! Rows travel as raw JSON values so the client never has to chase the
//! backend's admin schema.

use async_trait::async_trait;
use serde_json::Value;
use spacepal_core::error::Result;
use spacepal_core::gateway::{AdminGateway, AdminResource};

use crate::client::SpacePalClient;

fn collection_path(resource: AdminResource) -> String {
    format!("/{}/", resource.path_segment())
}

fn record_path(resource: AdminResource, id: &str) -> String {
    format!("/{}/{}", resource.path_segment(), id)
}

#[async_trait]
impl AdminGateway for SpacePalClient {
    async fn list(&self, token: &str, resource: AdminResource) -> Result<Vec<Value>> {
        let request = Self::bearer(self.get(&collection_path(resource)), token);
        let response = Self::send(request).await?;
        Self::decode(response).await
    }

    async fn create(&self, token: &str, resource: AdminResource, record: &Value) -> Result<Value> {
        let request = Self::bearer(self.post(&collection_path(resource)), token).json(record);
        let response = Self::send(request).await?;
        Self::decode(response).await
    }

    async fn update(
        &self,
        token: &str,
        resource: AdminResource,
        id: &str,
        record: &Value,
    ) -> Result<Value> {
        let request = Self::bearer(self.put(&record_path(resource, id)), token).json(record);
        let response = Self::send(request).await?;
        Self::decode(response).await
    }

    async fn delete(&self, token: &str, resource: AdminResource, id: &str) -> Result<()> {
        let request = Self::bearer(self.delete(&record_path(resource, id)), token);
        Self::send(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_paths() {
        assert_eq!(collection_path(AdminResource::Users), "/users/");
        assert_eq!(
            record_path(AdminResource::UserHistory, "7"),
            "/user_history/7"
        );
    }
}
