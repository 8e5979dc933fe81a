use api::{MarketApi, Product};

use crate::screen::{Applied, FetchKind, ScreenState};

/// Browsing screen over the full product catalog.
pub struct ProductListScreen<A: MarketApi> {
    api: A,
    state: ScreenState<Vec<Product>>,
}

impl<A: MarketApi> ProductListScreen<A> {
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
        let result = self.api.list_products().await;
        self.state.complete(fetch, result)
    }

    pub fn detach(&mut self) {
        self.state.detach();
    }
}
