//! Cart orchestration: add with confirmation flags, detailed cart view.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::join_all;
use spacepal_core::cart::CartEntry;
use spacepal_core::error::Result;
use spacepal_core::gateway::{CartGateway, CatalogGateway};
use spacepal_core::session::SessionStore;
use spacepal_core::SpacePalError;

/// How long the per-item "added" confirmation stays armed.
pub const CONFIRMATION_TTL: Duration = Duration::from_millis(1500);

/// Result of an add-to-cart attempt.
///
/// Failures are reported, not retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    NotAuthenticated,
    Failed,
}

/// Cart operations for the logged-in user.
pub struct CartService {
    cart: Arc<dyn CartGateway>,
    catalog: Arc<dyn CatalogGateway>,
    session: Arc<dyn SessionStore>,
    recently_added: Mutex<HashMap<String, Instant>>,
}

impl CartService {
    pub fn new(
        cart: Arc<dyn CartGateway>,
        catalog: Arc<dyn CatalogGateway>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            cart,
            catalog,
            session,
            recently_added: Mutex::new(HashMap::new()),
        }
    }

    /// Adds one unit of the product to the cart.
    ///
    /// An unauthenticated session performs no network call at all. On
    /// success the per-item confirmation flag is armed for
    /// [`CONFIRMATION_TTL`].
    pub async fn add_to_cart(&self, product_id: &str) -> AddOutcome {
        let Some(token) = self.session.access_token().await else {
            return AddOutcome::NotAuthenticated;
        };

        match self.cart.add_to_cart(&token, product_id, 1).await {
            Ok(()) => {
                self.arm_confirmation(product_id);
                AddOutcome::Added
            }
            Err(e) => {
                tracing::warn!(error = %e, product_id, "add to cart failed");
                AddOutcome::Failed
            }
        }
    }

    /// Whether the "added" confirmation for this product is still armed.
    pub fn recently_added(&self, product_id: &str) -> bool {
        let mut flags = self.recently_added.lock().unwrap_or_else(|e| e.into_inner());
        flags.retain(|_, armed_at| armed_at.elapsed() < CONFIRMATION_TTL);
        flags.contains_key(product_id)
    }

    fn arm_confirmation(&self, product_id: &str) {
        let mut flags = self.recently_added.lock().unwrap_or_else(|e| e.into_inner());
        flags.insert(product_id.to_string(), Instant::now());
    }

    /// The cart with product records resolved, one concurrent lookup per
    /// line. A product that cannot be fetched yields an entry without
    /// detail instead of failing the whole view.
    pub async fn detailed_cart(&self) -> Result<Vec<CartEntry>> {
        let token = self.authenticated().await?;
        let items = self.cart.cart(&token).await?;

        let lookups = items
            .iter()
            .map(|item| self.catalog.product(&item.product_id));
        let resolved = join_all(lookups).await;

        Ok(items
            .into_iter()
            .zip(resolved)
            .map(|(item, product)| CartEntry {
                product_id: item.product_id,
                quantity: item.quantity,
                product: product.ok(),
            })
            .collect())
    }

    pub async fn set_quantity(&self, product_id: &str, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return self.remove(product_id).await;
        }
        let token = self.authenticated().await?;
        self.cart.set_quantity(&token, product_id, quantity).await
    }

    pub async fn remove(&self, product_id: &str) -> Result<()> {
        let token = self.authenticated().await?;
        self.cart.remove_from_cart(&token, product_id).await
    }

    pub async fn clear(&self) -> Result<()> {
        let token = self.authenticated().await?;
        self.cart.clear_cart(&token).await
    }

    async fn authenticated(&self) -> Result<String> {
        self.session
            .access_token()
            .await
            .ok_or_else(|| SpacePalError::auth("login required"))
    }
}

/// Cart total over the resolved entries.
pub fn total_price(entries: &[CartEntry]) -> f64 {
    entries.iter().map(CartEntry::line_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacepal_core::catalog::Product;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.into(),
            name: id.to_uppercase(),
            description: String::new(),
            price,
            image_url: String::new(),
            rating: 0.0,
            category: String::new(),
            purchase_link: String::new(),
            reviews: None,
        }
    }

    #[test]
    fn test_total_skips_unresolved_products() {
        let entries = vec![
            CartEntry {
                product_id: "p1".into(),
                quantity: 2,
                product: Some(product("p1", 10.0)),
            },
            CartEntry {
                product_id: "gone".into(),
                quantity: 5,
                product: None,
            },
        ];
        assert_eq!(total_price(&entries), 20.0);
    }
}
