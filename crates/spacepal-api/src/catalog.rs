//! Catalogue endpoints: spaces, styles, product detail.

use async_trait::async_trait;
use spacepal_core::catalog::{Product, Space, Style};
use spacepal_core::error::Result;
use spacepal_core::gateway::CatalogGateway;
use spacepal_core::SpacePalError;

use crate::client::SpacePalClient;

#[async_trait]
impl CatalogGateway for SpacePalClient {
    async fn spaces(&self) -> Result<Vec<Space>> {
        let response = Self::send(self.get("/spaces/")).await?;
        Self::decode(response).await
    }

    async fn styles(&self) -> Result<Vec<Style>> {
        let response = Self::send(self.get("/styles/")).await?;
        Self::decode(response).await
    }

    async fn product(&self, product_id: &str) -> Result<Product> {
        let path = format!("/products/{}", product_id);
        match Self::send(self.get(&path)).await {
            Ok(response) => Self::decode(response).await,
            Err(SpacePalError::Api { status: 404, .. }) => {
                Err(SpacePalError::not_found("product", product_id))
            }
            Err(e) => Err(e),
        }
    }
}
