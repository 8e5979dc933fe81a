//! # Remote market client
//!
//! [`MarketApi`] is the seam between the application layer and the REST
//! backend: one method per server resource, plus
//! [`set_token`](MarketApi::set_token) for the bearer credential attached to
//! every authenticated call. Screen controllers and the session manager are
//! generic over this trait, so tests substitute an in-memory fake the same
//! way the store layer swaps its backends.
//!
//! [`HttpClient`] is the production implementation: a single shared
//! `reqwest::Client` plus a credential cell. Requests carry no retry, no
//! backoff, and no client-set timeout (the transport default applies), and
//! failures propagate as [`ApiError`] to the action that triggered them.
//! Mutations are fire-and-confirm; there is no idempotency key, so a retried
//! mutation after a timeout may duplicate its effect. Known limitation.

use std::sync::{Arc, RwLock};

use reqwest::Method;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::{
    AuthResponse, Cart, NewProduct, Order, OrderItem, Product, ProductUpdate, RegisterRequest,
    User,
};

/// Async interface to the marketplace backend.
pub trait MarketApi {
    /// Set or clear the bearer credential attached to all future requests.
    /// Requests already in flight are unaffected.
    fn set_token(&self, token: Option<String>);

    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<AuthResponse, ApiError>>;
    fn register(
        &self,
        req: &RegisterRequest,
    ) -> impl std::future::Future<Output = Result<AuthResponse, ApiError>>;
    /// Re-validate the attached credential against the server.
    fn me(&self) -> impl std::future::Future<Output = Result<User, ApiError>>;

    fn list_products(&self)
        -> impl std::future::Future<Output = Result<Vec<Product>, ApiError>>;
    fn get_product(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Product, ApiError>>;
    fn create_product(
        &self,
        new: &NewProduct,
    ) -> impl std::future::Future<Output = Result<Product, ApiError>>;
    fn update_product(
        &self,
        id: &str,
        update: &ProductUpdate,
    ) -> impl std::future::Future<Output = Result<Product, ApiError>>;
    fn delete_product(&self, id: &str) -> impl std::future::Future<Output = Result<(), ApiError>>;
    /// Products owned by the authenticated farmer.
    fn my_products(&self) -> impl std::future::Future<Output = Result<Vec<Product>, ApiError>>;

    fn get_cart(&self) -> impl std::future::Future<Output = Result<Cart, ApiError>>;
    fn add_to_cart(
        &self,
        product_id: &str,
        quantity: u32,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
    fn remove_from_cart(
        &self,
        product_id: &str,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
    fn clear_cart(&self) -> impl std::future::Future<Output = Result<(), ApiError>>;

    fn create_order(
        &self,
        items: &[OrderItem],
        total: Decimal,
    ) -> impl std::future::Future<Output = Result<Order, ApiError>>;
    fn list_orders(&self) -> impl std::future::Future<Output = Result<Vec<Order>, ApiError>>;
}

/// REST implementation of [`MarketApi`].
///
/// Clones share the same credential cell, so a login observed through one
/// clone is observed by all of them. A login or logout racing an in-flight
/// request leaves that request on the credential it was dispatched with.
#[derive(Clone, Debug)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl HttpClient {
    /// `base_url` is the server root, e.g. `https://market.example.com`;
    /// the `/api` prefix is appended here.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base = base_url.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url: format!("{base}/api"),
            token: Arc::new(RwLock::new(None)),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.http.request(method, self.url(path));
        if let Some(token) = self.token.read().unwrap().as_deref() {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn send<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let resp = req.send().await?;
        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            Err(response_error(resp).await)
        }
    }

    async fn send_unit(&self, req: reqwest::RequestBuilder) -> Result<(), ApiError> {
        let resp = req.send().await?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(response_error(resp).await)
        }
    }

    /// Login and registration fail as [`ApiError::Auth`], carrying the
    /// server's message when it sent one and `fallback` otherwise.
    async fn authenticate<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<AuthResponse, ApiError> {
        let resp = match self.request(Method::POST, path).json(body).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!("auth request did not reach the server: {e}");
                return Err(ApiError::Auth {
                    message: fallback.to_string(),
                });
            }
        };
        if resp.status().is_success() {
            resp.json().await.map_err(|_| ApiError::Auth {
                message: fallback.to_string(),
            })
        } else {
            let message = read_detail(resp)
                .await
                .unwrap_or_else(|| fallback.to_string());
            Err(ApiError::Auth { message })
        }
    }
}

async fn response_error(resp: reqwest::Response) -> ApiError {
    let status = resp.status().as_u16();
    let message =
        read_detail(resp)
            .await
            .unwrap_or_else(|| format!("server returned status {status}"));
    ApiError::Request {
        status: Some(status),
        message,
    }
}

async fn read_detail(resp: reqwest::Response) -> Option<String> {
    let raw = resp.text().await.ok()?;
    detail_from_body(&raw)
}

/// Extract the `detail` field from the backend's JSON error body.
fn detail_from_body(raw: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: Option<String>,
    }
    serde_json::from_str::<ErrorBody>(raw)
        .ok()
        .and_then(|body| body.detail)
}

impl MarketApi for HttpClient {
    fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap() = token;
    }

    async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = serde_json::json!({ "username": username, "password": password });
        self.authenticate("/login", &body, "Login failed").await
    }

    async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.authenticate("/register", req, "Registration failed")
            .await
    }

    async fn me(&self) -> Result<User, ApiError> {
        self.send(self.request(Method::GET, "/me")).await
    }

    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.send(self.request(Method::GET, "/products")).await
    }

    async fn get_product(&self, id: &str) -> Result<Product, ApiError> {
        self.send(self.request(Method::GET, &format!("/products/{id}")))
            .await
    }

    async fn create_product(&self, new: &NewProduct) -> Result<Product, ApiError> {
        self.send(self.request(Method::POST, "/products").json(new))
            .await
    }

    async fn update_product(&self, id: &str, update: &ProductUpdate) -> Result<Product, ApiError> {
        self.send(
            self.request(Method::PUT, &format!("/products/{id}"))
                .json(update),
        )
        .await
    }

    async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        self.send_unit(self.request(Method::DELETE, &format!("/products/{id}")))
            .await
    }

    async fn my_products(&self) -> Result<Vec<Product>, ApiError> {
        self.send(self.request(Method::GET, "/my-products")).await
    }

    async fn get_cart(&self) -> Result<Cart, ApiError> {
        self.send(self.request(Method::GET, "/cart")).await
    }

    async fn add_to_cart(&self, product_id: &str, quantity: u32) -> Result<(), ApiError> {
        let body = serde_json::json!({ "product_id": product_id, "quantity": quantity });
        self.send_unit(self.request(Method::POST, "/cart/add").json(&body))
            .await
    }

    async fn remove_from_cart(&self, product_id: &str) -> Result<(), ApiError> {
        self.send_unit(self.request(Method::DELETE, &format!("/cart/remove/{product_id}")))
            .await
    }

    async fn clear_cart(&self) -> Result<(), ApiError> {
        self.send_unit(self.request(Method::POST, "/cart/clear"))
            .await
    }

    async fn create_order(&self, items: &[OrderItem], total: Decimal) -> Result<Order, ApiError> {
        let body = serde_json::json!({ "items": items, "total": total });
        self.send(self.request(Method::POST, "/orders").json(&body))
            .await
    }

    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.send(self.request(Method::GET, "/orders")).await
    }
}
