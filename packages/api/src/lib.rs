//! # api — typed client for the marketplace REST backend
//!
//! Everything the application layer knows about the server lives here: the
//! wire models, the error taxonomy, and the request dispatcher.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`MarketApi`] trait (one method per server resource) and its [`HttpClient`] implementation over `reqwest` |
//! | [`error`] | [`ApiError`] — authentication rejections vs. everything else |
//! | [`models`] | Users, products, cart lines, and orders as they appear on the wire |
//!
//! The server is an external collaborator reached only through the REST
//! endpoints [`MarketApi`] names; there is no offline queue, no retry, and
//! no push channel.

pub mod client;
pub mod error;
pub mod models;

pub use client::{HttpClient, MarketApi};
pub use error::ApiError;
pub use models::{
    AuthResponse, Cart, CartLine, NewProduct, Order, OrderItem, Product, ProductUpdate,
    RegisterRequest, Role, User,
};
