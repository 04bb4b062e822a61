//! Cart endpoints, all scoped to the authenticated user.

use async_trait::async_trait;
use serde::Serialize;
use spacepal_core::cart::CartItem;
use spacepal_core::error::Result;
use spacepal_core::gateway::CartGateway;

use crate::client::SpacePalClient;

#[derive(Debug, Serialize)]
struct AddToCartRequest<'a> {
    product_id: &'a str,
    quantity: u32,
}

#[derive(Debug, Serialize)]
struct QuantityPatch {
    quantity: u32,
}

#[async_trait]
impl CartGateway for SpacePalClient {
    async fn cart(&self, token: &str) -> Result<Vec<CartItem>> {
        let request = Self::bearer(self.get("/users/me/cart"), token);
        let response = Self::send(request).await?;
        Self::decode(response).await
    }

    async fn add_to_cart(&self, token: &str, product_id: &str, quantity: u32) -> Result<()> {
        let body = AddToCartRequest {
            product_id,
            quantity,
        };
        let request = Self::bearer(self.post("/users/me/cart"), token).json(&body);
        Self::send(request).await?;
        Ok(())
    }

    async fn set_quantity(&self, token: &str, product_id: &str, quantity: u32) -> Result<()> {
        let path = format!("/users/me/cart/{}", product_id);
        let request = Self::bearer(self.patch(&path), token).json(&QuantityPatch { quantity });
        Self::send(request).await?;
        Ok(())
    }

    async fn remove_from_cart(&self, token: &str, product_id: &str) -> Result<()> {
        let path = format!("/users/me/cart/{}", product_id);
        let request = Self::bearer(self.delete(&path), token);
        Self::send(request).await?;
        Ok(())
    }

    async fn clear_cart(&self, token: &str) -> Result<()> {
        let request = Self::bearer(self.delete("/users/me/cart/clear"), token);
        Self::send(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_to_cart_body_shape() {
        let body = AddToCartRequest {
            product_id: "p1",
            quantity: 1,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"product_id":"p1","quantity":1}"#);
    }
}
