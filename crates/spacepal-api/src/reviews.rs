//! Product review endpoints.

use async_trait::async_trait;
use spacepal_core::error::Result;
use spacepal_core::gateway::ReviewGateway;
use spacepal_core::review::{Review, ReviewDraft};

use crate::client::SpacePalClient;

#[async_trait]
impl ReviewGateway for SpacePalClient {
    async fn submit_review(
        &self,
        token: &str,
        product_id: &str,
        draft: &ReviewDraft,
    ) -> Result<Review> {
        let path = format!("/products/{}/reviews", product_id);
        let request = Self::bearer(self.post(&path), token).json(draft);
        let response = Self::send(request).await?;
        Self::decode(response).await
    }

    async fn delete_review(&self, token: &str, product_id: &str, review_id: &str) -> Result<()> {
        let path = format!("/products/{}/reviews/{}", product_id, review_id);
        let request = Self::bearer(self.delete(&path), token);
        Self::send(request).await?;
        Ok(())
    }
}
