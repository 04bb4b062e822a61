//! Shopping cart models.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// A cart line as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: String,
    pub quantity: u32,
}

/// A cart line with its product record resolved.
///
/// Resolution is best-effort: a product that can no longer be fetched
/// leaves `product` empty instead of failing the whole cart view.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub product_id: String,
    pub quantity: u32,
    pub product: Option<Product>,
}

impl CartEntry {
    /// Line total, zero when the product could not be resolved.
    pub fn line_total(&self) -> f64 {
        self.product
            .as_ref()
            .map(|p| p.price * f64::from(self.quantity))
            .unwrap_or(0.0)
    }
}
