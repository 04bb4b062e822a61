//! Recommendation feed endpoints.

use async_trait::async_trait;
use spacepal_core::catalog::{Product, RecommendationQuery};
use spacepal_core::error::Result;
use spacepal_core::gateway::RecommendationGateway;

use crate::client::SpacePalClient;

#[async_trait]
impl RecommendationGateway for SpacePalClient {
    async fn recommendations(&self, query: &RecommendationQuery) -> Result<Vec<Product>> {
        // `categories` is a repeated query parameter, one pair per label.
        let mut params: Vec<(&str, String)> = vec![
            ("space", query.space.clone()),
            ("style", query.style.clone()),
            ("limit", query.limit.to_string()),
            ("offset", query.offset.to_string()),
        ];
        for category in &query.categories {
            params.push(("categories", category.clone()));
        }

        let request = self.get("/recommendations/user").query(&params);
        let response = Self::send(request).await?;
        Self::decode(response).await
    }

    async fn similar_products(&self, product_id: &str, top_n: u32) -> Result<Vec<Product>> {
        // The backend route spells the segment without the double "m".
        let path = format!("/products/{}/recomendations", product_id);
        let request = self.get(&path).query(&[("top_n", top_n.to_string())]);
        let response = Self::send(request).await?;
        Self::decode(response).await
    }
}
