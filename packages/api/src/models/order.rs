use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::CartLine;

/// A line snapshot frozen at checkout time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl OrderItem {
    /// Snapshot a cart line for submission.
    pub fn from_line(line: &CartLine) -> Self {
        Self {
            product_id: line.product.id.clone(),
            product_name: line.product.name.clone(),
            price: line.product.price,
            quantity: line.quantity,
        }
    }
}

/// A placed order. Never mutated by the client after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub buyer_id: String,
    pub buyer_name: String,
    pub items: Vec<OrderItem>,
    /// Total as submitted at checkout. The server records it as-is; it is
    /// not recomputed from the line items.
    pub total: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
