use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Product;

/// One product plus the quantity a buyer intends to purchase.
///
/// Quantity is always >= 1: removal is a separate explicit action, never a
/// decrement to zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Full product snapshot as the server returned it.
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal in exact decimal arithmetic.
    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Response to `GET /cart`: the server-side cart snapshot for one buyer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub user_id: String,
    pub items: Vec<CartLine>,
}
