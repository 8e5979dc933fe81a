//! # User model and authentication payloads
//!
//! [`User`] is the record the server returns on login/registration and from
//! `GET /me`. The `role` is fixed at registration and decides which screens
//! and actions a shell offers: farmers list and manage products, buyers
//! hold a cart and place orders. The client only *hides* actions by role;
//! enforcement lives server-side.
//!
//! [`AuthResponse`] pairs the bearer credential with the user it authorizes;
//! the two are persisted and cleared together by the session layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marketplace role, fixed at registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Farmer,
    Buyer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Farmer => "farmer",
            Role::Buyer => "buyer",
        }
    }
}

/// An authenticated marketplace user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    pub phone: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Whether this user lists and manages products.
    pub fn is_farmer(&self) -> bool {
        self.role == Role::Farmer
    }

    /// Whether this user holds a cart and places orders.
    pub fn is_buyer(&self) -> bool {
        self.role == Role::Buyer
    }
}

/// Response to `POST /login` and `POST /register`: the bearer credential
/// plus the user it authorizes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

/// Payload for `POST /register`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    pub role: Role,
}
