use api::{ApiError, MarketApi, NewProduct, Product, ProductUpdate};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::screen::{Applied, FetchKind, ScreenState};

/// A new listing that could not be submitted.
#[derive(Debug, Error)]
pub enum CreateProductError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("price must be greater than zero")]
    InvalidPrice,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// The farmer's own listings. Shells mount this for farmer sessions only;
/// ownership of each mutation is checked server-side.
pub struct MyProductsScreen<A: MarketApi> {
    api: A,
    state: ScreenState<Vec<Product>>,
}

impl<A: MarketApi> MyProductsScreen<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ScreenState::new(Vec::new()),
        }
    }

    pub fn products(&self) -> &[Product] {
        self.state.data()
    }

    pub fn state(&self) -> &ScreenState<Vec<Product>> {
        &self.state
    }

    pub async fn load(&mut self) -> Applied {
        self.fetch(FetchKind::Load).await
    }

    pub async fn refresh(&mut self) -> Applied {
        self.fetch(FetchKind::Refresh).await
    }

    async fn fetch(&mut self, kind: FetchKind) -> Applied {
        let fetch = self.state.begin(kind);
        let result = self.api.my_products().await;
        self.state.complete(fetch, result)
    }

    /// Delete a listing, filtering it out of the local snapshot once the
    /// server confirms.
    pub async fn delete(&mut self, product_id: &str) -> Result<(), ApiError> {
        self.api.delete_product(product_id).await?;
        self.state.data_mut().retain(|p| p.id != product_id);
        Ok(())
    }

    /// Validate and submit a new listing, appending the server's copy to
    /// the local snapshot.
    pub async fn create(&mut self, new: NewProduct) -> Result<(), CreateProductError> {
        validate(&new)?;
        let product = self.api.create_product(&new).await?;
        self.state.data_mut().push(product);
        Ok(())
    }

    /// Apply a partial edit, replacing the local copy with the server's.
    pub async fn update(
        &mut self,
        product_id: &str,
        update: &ProductUpdate,
    ) -> Result<(), ApiError> {
        let updated = self.api.update_product(product_id, update).await?;
        if let Some(existing) = self
            .state
            .data_mut()
            .iter_mut()
            .find(|p| p.id == product_id)
        {
            *existing = updated;
        }
        Ok(())
    }

    pub fn detach(&mut self) {
        self.state.detach();
    }
}

fn validate(new: &NewProduct) -> Result<(), CreateProductError> {
    if new.name.trim().is_empty() {
        return Err(CreateProductError::MissingField("name"));
    }
    if new.description.trim().is_empty() {
        return Err(CreateProductError::MissingField("description"));
    }
    if new.location.trim().is_empty() {
        return Err(CreateProductError::MissingField("location"));
    }
    if new.image_base64.is_empty() {
        return Err(CreateProductError::MissingField("image"));
    }
    if new.price <= Decimal::ZERO {
        return Err(CreateProductError::InvalidPrice);
    }
    Ok(())
}
