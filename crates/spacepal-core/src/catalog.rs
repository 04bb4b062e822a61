//! Catalogue domain models.
//!
//! Products, spaces, and styles as served by the SpacePal backend. Field
//! names follow the backend's snake_case JSON verbatim so these types
//! validate the wire shape at the boundary.

use serde::{Deserialize, Serialize};

use crate::review::Review;

/// Number of products requested per catalogue page.
pub const PAGE_SIZE: u32 = 12;

/// Category labels the backend understands as recommendation filters.
pub const CATEGORY_LABELS: &[&str] = &[
    "lighting",
    "home decor and accessories",
    "storage and organization",
    "tables and chairs",
    "desks and desk chairs",
    "home textiles",
    "sofas and armchairs",
    "flooring, rugs and mats",
    "outdoor",
    "plants and gardening",
    "beds and mattresses",
    "smart home and technology",
    "kitchen and tableware",
];

/// A product record.
///
/// The catalogue view only renders id/name/price/image/rating/category;
/// the detail view uses the full record including reviews.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub purchase_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
}

/// A room/usage category (e.g., "living room").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Space {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

/// A decor aesthetic (e.g., "modern").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Style {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

/// Pagination cursor for the recommendation endpoint.
///
/// `offset` resets to 0 whenever space, style, or the category set change;
/// it advances by [`PAGE_SIZE`] on each scroll-triggered load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationQuery {
    /// Human-readable space name (the endpoint takes names, not ids).
    pub space: String,
    /// Human-readable style name.
    pub style: String,
    pub limit: u32,
    pub offset: u32,
    pub categories: Vec<String>,
}

impl RecommendationQuery {
    pub fn new(space: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            space: space.into(),
            style: style.into(),
            limit: PAGE_SIZE,
            offset: 0,
            categories: Vec::new(),
        }
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }
}
