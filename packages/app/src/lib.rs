//! # app — headless application state for the marketplace client
//!
//! The layer a GUI shell binds its screens to. No widgets, no styling, no
//! string tables live here, only the state machines and the data flow:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`session`] | The owned session object: restore on startup, login/register/logout, current user |
//! | [`screen`] | Shared fetch lifecycle: loading/refreshing flags, stale-response and unmount guards |
//! | [`screens`] | Per-screen controllers: product list and detail, cart, my-products, orders |
//!
//! Everything is generic over [`api::MarketApi`] and [`store::KeyValueStore`],
//! so tests run against in-memory fakes and a shell runs against
//! [`api::HttpClient`] and [`store::FileStore`].

pub mod screen;
pub mod screens;
pub mod session;

#[cfg(test)]
pub(crate) mod test_api;

pub use screen::{Applied, Fetch, FetchKind, ScreenState};
pub use screens::{
    CartScreen, CheckoutError, CreateProductError, MyProductsScreen, OrdersScreen,
    ProductDetailScreen, ProductListScreen,
};
pub use session::{SessionManager, SessionState};
