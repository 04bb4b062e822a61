//! Backend gateway traits.
//!
//! Each trait covers one backend surface. Implementations live in the API
//! crate; application services hold them as `Arc<dyn Trait>` so tests can
//! substitute in-memory fakes.

use async_trait::async_trait;
use serde_json::Value;
use strum::{Display, EnumString};

use crate::cart::CartItem;
use crate::catalog::{Product, RecommendationQuery, Space, Style};
use crate::error::Result;
use crate::history::HistoryEvent;
use crate::review::{Review, ReviewDraft};
use crate::user::{NewUser, User, UserPatch};

/// Static catalogue entities: spaces, styles, individual products.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn spaces(&self) -> Result<Vec<Space>>;

    async fn styles(&self) -> Result<Vec<Style>>;

    async fn product(&self, product_id: &str) -> Result<Product>;
}

/// Personalised product feeds.
#[async_trait]
pub trait RecommendationGateway: Send + Sync {
    /// One page of the recommendation feed.
    async fn recommendations(&self, query: &RecommendationQuery) -> Result<Vec<Product>>;

    /// Products similar to the given one, at most `top_n` of them.
    async fn similar_products(&self, product_id: &str, top_n: u32) -> Result<Vec<Product>>;
}

/// The authenticated user's cart.
#[async_trait]
pub trait CartGateway: Send + Sync {
    async fn cart(&self, token: &str) -> Result<Vec<CartItem>>;

    async fn add_to_cart(&self, token: &str, product_id: &str, quantity: u32) -> Result<()>;

    async fn set_quantity(&self, token: &str, product_id: &str, quantity: u32) -> Result<()>;

    async fn remove_from_cart(&self, token: &str, product_id: &str) -> Result<()>;

    async fn clear_cart(&self, token: &str) -> Result<()>;
}

/// Reviews attached to a product.
#[async_trait]
pub trait ReviewGateway: Send + Sync {
    async fn submit_review(
        &self,
        token: &str,
        product_id: &str,
        draft: &ReviewDraft,
    ) -> Result<Review>;

    async fn delete_review(&self, token: &str, product_id: &str, review_id: &str) -> Result<()>;
}

/// Interaction history recording.
#[async_trait]
pub trait HistoryGateway: Send + Sync {
    async fn record(&self, token: &str, event: &HistoryEvent) -> Result<()>;
}

/// Authentication and account management.
#[async_trait]
pub trait AccountGateway: Send + Sync {
    /// Exchanges credentials for a bearer token.
    async fn login(&self, username: &str, password: &str) -> Result<String>;

    async fn register(&self, user: &NewUser) -> Result<User>;

    async fn current_user(&self, token: &str) -> Result<User>;

    async fn update_user(&self, token: &str, user_id: &str, patch: &UserPatch) -> Result<User>;
}

/// Back-office resource collections.
///
/// The admin surface is schemaless on purpose: rows travel as raw JSON so
/// new backend columns show up without a client release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum AdminResource {
    Users,
    Spaces,
    Products,
    Styles,
    UserHistory,
}

impl AdminResource {
    pub const ALL: [AdminResource; 5] = [
        AdminResource::Users,
        AdminResource::Spaces,
        AdminResource::Products,
        AdminResource::Styles,
        AdminResource::UserHistory,
    ];

    /// URL path segment for this resource.
    pub fn path_segment(&self) -> String {
        self.to_string()
    }
}

/// Generic CRUD over the back-office collections.
#[async_trait]
pub trait AdminGateway: Send + Sync {
    async fn list(&self, token: &str, resource: AdminResource) -> Result<Vec<Value>>;

    async fn create(&self, token: &str, resource: AdminResource, record: &Value) -> Result<Value>;

    async fn update(
        &self,
        token: &str,
        resource: AdminResource,
        id: &str,
        record: &Value,
    ) -> Result<Value>;

    async fn delete(&self, token: &str, resource: AdminResource, id: &str) -> Result<()>;
}
