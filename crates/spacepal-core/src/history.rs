//! User interaction history models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Interaction kinds the backend records for recommendation feedback.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HistoryAction {
    Click,
    AddToCart,
}

/// Payload for `POST /user_history/`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HistoryEvent {
    pub product_id: String,
    pub action: HistoryAction,
}

impl HistoryEvent {
    pub fn click(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            action: HistoryAction::Click,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wire_format() {
        let event = HistoryEvent::click("p1");
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"product_id":"p1","action":"click"}"#);
        assert_eq!(HistoryAction::AddToCart.to_string(), "add_to_cart");
    }
}
