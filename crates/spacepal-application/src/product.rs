//! Product detail view: one product, its reviews, and related items.

use std::sync::Arc;

use spacepal_core::catalog::Product;
use spacepal_core::error::Result;
use spacepal_core::gateway::{CatalogGateway, RecommendationGateway, ReviewGateway};
use spacepal_core::review::ReviewDraft;
use spacepal_core::session::SessionStore;
use spacepal_core::SpacePalError;

/// How many related products the detail view shows.
pub const RELATED_TOP_N: u32 = 4;

/// A loaded product page: the product itself plus its related strip.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub product: Product,
    pub related: Vec<Product>,
}

pub struct ProductService {
    catalog: Arc<dyn CatalogGateway>,
    recommendations: Arc<dyn RecommendationGateway>,
    reviews: Arc<dyn ReviewGateway>,
    session: Arc<dyn SessionStore>,
}

impl ProductService {
    pub fn new(
        catalog: Arc<dyn CatalogGateway>,
        recommendations: Arc<dyn RecommendationGateway>,
        reviews: Arc<dyn ReviewGateway>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            catalog,
            recommendations,
            reviews,
            session,
        }
    }

    /// Loads the detail view.
    ///
    /// A missing product is an error; a failed related-products fetch just
    /// leaves the strip empty.
    pub async fn load(&self, product_id: &str) -> Result<ProductDetail> {
        let product = self.catalog.product(product_id).await?;

        let related = match self
            .recommendations
            .similar_products(product_id, RELATED_TOP_N)
            .await
        {
            Ok(related) => related,
            Err(e) => {
                tracing::warn!(error = %e, product_id, "related products unavailable");
                Vec::new()
            }
        };

        Ok(ProductDetail { product, related })
    }

    /// Validates and submits a review, then prepends it to the loaded
    /// product so the view updates without a refetch.
    pub async fn submit_review(&self, detail: &mut ProductDetail, draft: &ReviewDraft) -> Result<()> {
        draft.validate()?;
        let token = self.authenticated().await?;

        let review = self
            .reviews
            .submit_review(&token, &detail.product.id, draft)
            .await?;

        detail
            .product
            .reviews
            .get_or_insert_with(Vec::new)
            .insert(0, review);
        Ok(())
    }

    /// Deletes a review and drops it from the loaded product.
    pub async fn delete_review(&self, detail: &mut ProductDetail, review_id: &str) -> Result<()> {
        let token = self.authenticated().await?;

        self.reviews
            .delete_review(&token, &detail.product.id, review_id)
            .await?;

        if let Some(reviews) = detail.product.reviews.as_mut() {
            reviews.retain(|r| r.id != review_id);
        }
        Ok(())
    }

    async fn authenticated(&self) -> Result<String> {
        self.session
            .access_token()
            .await
            .ok_or_else(|| SpacePalError::auth("login required"))
    }
}
