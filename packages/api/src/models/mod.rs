pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use cart::{Cart, CartLine};
pub use order::{Order, OrderItem};
pub use product::{NewProduct, Product, ProductUpdate};
pub use user::{AuthResponse, RegisterRequest, Role, User};
