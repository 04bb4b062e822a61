//! Interaction history endpoint.

use async_trait::async_trait;
use spacepal_core::error::Result;
use spacepal_core::gateway::HistoryGateway;
use spacepal_core::history::HistoryEvent;

use crate::client::SpacePalClient;

#[async_trait]
impl HistoryGateway for SpacePalClient {
    async fn record(&self, token: &str, event: &HistoryEvent) -> Result<()> {
        let request = Self::bearer(self.post("/user_history/"), token).json(event);
        Self::send(request).await?;
        Ok(())
    }
}
