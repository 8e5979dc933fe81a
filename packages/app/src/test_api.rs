//! In-memory [`MarketApi`] used by the tests in this crate, plus a few
//! sample-model builders. Mirrors the backend's observable behavior closely
//! enough for session and screen tests: credential handling, auth
//! rejections, and the cart/product/order resources.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use api::{
    ApiError, AuthResponse, Cart, CartLine, MarketApi, NewProduct, Order, OrderItem, Product,
    ProductUpdate, RegisterRequest, Role, User,
};
use chrono::Utc;
use rust_decimal::Decimal;

pub(crate) fn sample_user(id: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        username: format!("user-{id}"),
        name: "Budi".into(),
        phone: "081234567890".into(),
        role,
        created_at: Utc::now(),
    }
}

pub(crate) fn sample_product(id: &str, price: i64) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Produk {id}"),
        description: "Segar dari kebun".into(),
        price: Decimal::from(price),
        location: "Bandung".into(),
        image_base64: "aGVsbG8=".into(),
        farmer_id: "u-farmer".into(),
        farmer_name: "Budi".into(),
        created_at: Utc::now(),
    }
}

pub(crate) fn sample_line(product_id: &str, price: i64, quantity: u32) -> CartLine {
    CartLine {
        product: sample_product(product_id, price),
        quantity,
    }
}

#[derive(Default)]
struct Inner {
    token: Option<String>,
    users: HashMap<String, (String, User)>,
    products: Vec<Product>,
    mine: Vec<Product>,
    cart: Vec<CartLine>,
    orders: Vec<Order>,
    failing: bool,
    calls: Vec<String>,
    next_id: u32,
}

impl Inner {
    fn gate(&mut self, call: &str) -> Result<(), ApiError> {
        self.calls.push(call.to_string());
        if self.failing {
            Err(ApiError::Request {
                status: Some(500),
                message: "server error".into(),
            })
        } else {
            Ok(())
        }
    }
}

/// Fake backend. Clones share state, like [`api::HttpClient`] clones share
/// their credential cell.
#[derive(Clone, Default)]
pub(crate) struct FakeMarket {
    inner: Arc<Mutex<Inner>>,
}

impl FakeMarket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, username: &str, password: &str, user: User) -> Self {
        self.inner
            .lock()
            .unwrap()
            .users
            .insert(username.to_string(), (password.to_string(), user));
        self
    }

    pub fn with_products(self, products: Vec<Product>) -> Self {
        self.inner.lock().unwrap().products = products;
        self
    }

    pub fn with_my_products(self, products: Vec<Product>) -> Self {
        self.inner.lock().unwrap().mine = products;
        self
    }

    pub fn with_cart(self, lines: Vec<CartLine>) -> Self {
        self.inner.lock().unwrap().cart = lines;
        self
    }

    pub fn set_failing(&self, failing: bool) {
        self.inner.lock().unwrap().failing = failing;
    }

    pub fn token(&self) -> Option<String> {
        self.inner.lock().unwrap().token.clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn server_cart(&self) -> Vec<CartLine> {
        self.inner.lock().unwrap().cart.clone()
    }
}

impl MarketApi for FakeMarket {
    fn set_token(&self, token: Option<String>) {
        self.inner.lock().unwrap().token = token;
    }

    async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(format!("login {username}"));
        match inner.users.get(username) {
            Some((stored, user)) if stored == password => Ok(AuthResponse {
                access_token: format!("tok-{username}"),
                token_type: "bearer".into(),
                user: user.clone(),
            }),
            _ => Err(ApiError::Auth {
                message: "Incorrect username or password".into(),
            }),
        }
    }

    async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(format!("register {}", req.username));
        if inner.users.contains_key(&req.username) {
            return Err(ApiError::Auth {
                message: "Username already exists".into(),
            });
        }
        let user = User {
            id: format!("u-{}", req.username),
            username: req.username.clone(),
            name: req.name.clone(),
            phone: req.phone.clone(),
            role: req.role,
            created_at: Utc::now(),
        };
        inner.users.insert(
            req.username.clone(),
            (req.password.clone(), user.clone()),
        );
        Ok(AuthResponse {
            access_token: format!("tok-{}", req.username),
            token_type: "bearer".into(),
            user,
        })
    }

    async fn me(&self) -> Result<User, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.gate("me")?;
        let token = inner.token.clone();
        inner
            .users
            .values()
            .map(|(_, user)| user)
            .find(|user| token.as_deref() == Some(format!("tok-{}", user.username).as_str()))
            .cloned()
            .ok_or(ApiError::Request {
                status: Some(401),
                message: "Invalid authentication credentials".into(),
            })
    }

    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.gate("list_products")?;
        Ok(inner.products.clone())
    }

    async fn get_product(&self, id: &str) -> Result<Product, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.gate(&format!("get_product {id}"))?;
        inner
            .products
            .iter()
            .chain(inner.mine.iter())
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ApiError::Request {
                status: Some(404),
                message: "Product not found".into(),
            })
    }

    async fn create_product(&self, new: &NewProduct) -> Result<Product, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.gate("create_product")?;
        inner.next_id += 1;
        let product = Product {
            id: format!("p-{}", inner.next_id),
            name: new.name.clone(),
            description: new.description.clone(),
            price: new.price,
            location: new.location.clone(),
            image_base64: new.image_base64.clone(),
            farmer_id: "u-farmer".into(),
            farmer_name: "Budi".into(),
            created_at: Utc::now(),
        };
        inner.mine.push(product.clone());
        Ok(product)
    }

    async fn update_product(&self, id: &str, update: &ProductUpdate) -> Result<Product, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.gate(&format!("update_product {id}"))?;
        let product = inner
            .mine
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ApiError::Request {
                status: Some(404),
                message: "Product not found".into(),
            })?;
        if let Some(name) = &update.name {
            product.name = name.clone();
        }
        if let Some(price) = update.price {
            product.price = price;
        }
        if let Some(location) = &update.location {
            product.location = location.clone();
        }
        Ok(product.clone())
    }

    async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.gate(&format!("delete_product {id}"))?;
        inner.mine.retain(|p| p.id != id);
        Ok(())
    }

    async fn my_products(&self) -> Result<Vec<Product>, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.gate("my_products")?;
        Ok(inner.mine.clone())
    }

    async fn get_cart(&self) -> Result<Cart, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.gate("get_cart")?;
        Ok(Cart {
            user_id: "u-buyer".into(),
            items: inner.cart.clone(),
        })
    }

    async fn add_to_cart(&self, product_id: &str, quantity: u32) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.gate(&format!("add_to_cart {product_id} x{quantity}"))?;
        if let Some(line) = inner.cart.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity += quantity;
        }
        Ok(())
    }

    async fn remove_from_cart(&self, product_id: &str) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.gate(&format!("remove_from_cart {product_id}"))?;
        inner.cart.retain(|l| l.product.id != product_id);
        Ok(())
    }

    async fn clear_cart(&self) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.gate("clear_cart")?;
        inner.cart.clear();
        Ok(())
    }

    async fn create_order(&self, items: &[OrderItem], total: Decimal) -> Result<Order, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.gate("create_order")?;
        inner.next_id += 1;
        let order = Order {
            id: format!("o-{}", inner.next_id),
            buyer_id: "u-buyer".into(),
            buyer_name: "Pembeli".into(),
            items: items.to_vec(),
            total,
            status: "completed".into(),
            created_at: Utc::now(),
        };
        inner.orders.push(order.clone());
        // The server clears its cart as a side effect of order creation.
        inner.cart.clear();
        Ok(order)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.gate("list_orders")?;
        Ok(inner.orders.clone())
    }
}
