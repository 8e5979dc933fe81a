//! Per-screen controllers. Each pairs a [`crate::screen::ScreenState`] with
//! the domain mutations that screen offers; a shell renders from the state
//! and forwards user actions to the async methods.

pub mod cart;
pub mod my_products;
pub mod orders;
pub mod product_detail;
pub mod products;

pub use cart::{CartScreen, CheckoutError};
pub use my_products::{CreateProductError, MyProductsScreen};
pub use orders::OrdersScreen;
pub use product_detail::ProductDetailScreen;
pub use products::ProductListScreen;
