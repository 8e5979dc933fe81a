use api::{MarketApi, Order};

use crate::screen::{Applied, FetchKind, ScreenState};

/// The buyer's order history. Orders are never mutated client-side after
/// creation.
pub struct OrdersScreen<A: MarketApi> {
    api: A,
    state: ScreenState<Vec<Order>>,
}

impl<A: MarketApi> OrdersScreen<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ScreenState::new(Vec::new()),
        }
    }

    pub fn orders(&self) -> &[Order] {
        self.state.data()
    }

    pub fn state(&self) -> &ScreenState<Vec<Order>> {
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
        let result = self.api.list_orders().await;
        self.state.complete(fetch, result)
    }

    pub fn detach(&mut self) {
        self.state.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_api::{sample_line, FakeMarket};

    #[tokio::test]
    async fn test_orders_appear_after_checkout() {
        let api = FakeMarket::new().with_cart(vec![sample_line("p-1", 10000, 1)]);

        let mut cart = crate::screens::CartScreen::new(api.clone());
        cart.load().await;
        cart.checkout().await.unwrap();

        let mut screen = OrdersScreen::new(api);
        assert_eq!(screen.load().await, Applied::Replaced);
        assert_eq!(screen.orders().len(), 1);
        assert_eq!(screen.orders()[0].status, "completed");
    }
}
