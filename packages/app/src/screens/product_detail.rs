use api::{ApiError, MarketApi, Product};

use crate::screen::{Applied, FetchKind, ScreenState};

/// Detail screen for one product, opened from the catalog.
pub struct ProductDetailScreen<A: MarketApi> {
    api: A,
    product_id: String,
    state: ScreenState<Option<Product>>,
    adding: bool,
}

impl<A: MarketApi> ProductDetailScreen<A> {
    pub fn new(api: A, product_id: impl Into<String>) -> Self {
        Self {
            api,
            product_id: product_id.into(),
            state: ScreenState::new(None),
            adding: false,
        }
    }

    pub fn product(&self) -> Option<&Product> {
        self.state.data().as_ref()
    }

    /// Busy flag for the add-to-cart button; disabling off this flag is the
    /// only duplicate-submission prevention.
    pub fn is_adding(&self) -> bool {
        self.adding
    }

    pub fn state(&self) -> &ScreenState<Option<Product>> {
        &self.state
    }

    pub async fn load(&mut self) -> Applied {
        let fetch = self.state.begin(FetchKind::Load);
        let result = self.api.get_product(&self.product_id).await.map(Some);
        self.state.complete(fetch, result)
    }

    /// Add this product to the cart. Offered to buyer sessions only; the
    /// server enforces the role either way.
    pub async fn add_to_cart(&mut self, quantity: u32) -> Result<(), ApiError> {
        self.adding = true;
        let result = self.api.add_to_cart(&self.product_id, quantity).await;
        self.adding = false;
        result
    }

    pub fn detach(&mut self) {
        self.state.detach();
    }
}
