//! Product review models and form-level validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpacePalError};

/// A review as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// A review about to be submitted.
///
/// The star widget emits half-star steps, so any value in 1.0..=5.0 is valid.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReviewDraft {
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ReviewDraft {
    pub fn new(rating: f64, comment: Option<String>) -> Self {
        Self { rating, comment }
    }

    /// Validates the draft before any network call is made.
    pub fn validate(&self) -> Result<()> {
        if !(1.0..=5.0).contains(&self.rating) {
            return Err(SpacePalError::validation(
                "rating must be between 1 and 5",
            ));
        }
        Ok(())
    }
}
