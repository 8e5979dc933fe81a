use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product listing. Owned by exactly one farmer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price in rupiah. Always > 0.
    pub price: Decimal,
    pub location: String,
    /// Raster image payload, base64-encoded and embedded in JSON. There is
    /// no separate binary upload channel.
    pub image_base64: String,
    pub farmer_id: String,
    pub farmer_name: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /products`. The server stamps ownership and timestamps.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub location: String,
    pub image_base64: String,
}

/// Partial update for `PUT /products/{id}`; `None` fields are left untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
}
