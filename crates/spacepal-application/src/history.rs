//! Best-effort interaction recording.
//!
//! Recording feeds the recommendation model; it must never block or fail
//! the interaction it describes.

use std::sync::Arc;

use spacepal_core::gateway::HistoryGateway;
use spacepal_core::history::{HistoryAction, HistoryEvent};
use spacepal_core::session::SessionStore;

pub struct HistoryRecorder {
    history: Arc<dyn HistoryGateway>,
    session: Arc<dyn SessionStore>,
}

impl HistoryRecorder {
    pub fn new(history: Arc<dyn HistoryGateway>, session: Arc<dyn SessionStore>) -> Self {
        Self { history, session }
    }

    /// Records a product click before navigation. Anonymous sessions and
    /// failed posts are both silently skipped.
    pub async fn record_click(&self, product_id: &str) {
        self.record(HistoryEvent::click(product_id)).await;
    }

    /// Records an add-to-cart interaction.
    pub async fn record_add_to_cart(&self, product_id: &str) {
        self.record(HistoryEvent {
            product_id: product_id.to_string(),
            action: HistoryAction::AddToCart,
        })
        .await;
    }

    async fn record(&self, event: HistoryEvent) {
        let Some(token) = self.session.access_token().await else {
            return;
        };

        if let Err(e) = self.history.record(&token, &event).await {
            tracing::warn!(error = %e, product_id = %event.product_id, action = %event.action, "history recording failed");
        }
    }
}
