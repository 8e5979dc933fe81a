use api::{ApiError, CartLine, MarketApi, Order, OrderItem};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::screen::{Applied, FetchKind, ScreenState};

/// Checkout can fail locally, before any request is made.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// The buyer's cart: a locally mirrored server snapshot, mutated
/// optimistically and reconciled on the next load or refresh.
pub struct CartScreen<A: MarketApi> {
    api: A,
    state: ScreenState<Vec<CartLine>>,
    checking_out: bool,
}

impl<A: MarketApi> CartScreen<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ScreenState::new(Vec::new()),
            checking_out: false,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        self.state.data()
    }

    pub fn is_checking_out(&self) -> bool {
        self.checking_out
    }

    pub fn state(&self) -> &ScreenState<Vec<CartLine>> {
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
        let result = self.api.get_cart().await.map(|cart| cart.items);
        self.state.complete(fetch, result)
    }

    /// Σ(price × quantity) over the local snapshot, in exact decimal
    /// arithmetic.
    pub fn total(&self) -> Decimal {
        self.lines().iter().map(CartLine::subtotal).sum()
    }

    /// Remove a line, filtering the local snapshot once the server
    /// confirms. Removing an id that is not in the cart leaves the snapshot
    /// unchanged.
    pub async fn remove_line(&mut self, product_id: &str) -> Result<(), ApiError> {
        self.api.remove_from_cart(product_id).await?;
        self.state
            .data_mut()
            .retain(|line| line.product.id != product_id);
        Ok(())
    }

    /// Snapshot the lines, submit the order with the locally computed
    /// total, and clear the local cart on success. The server records the
    /// submitted total without recomputing it from the items.
    pub async fn checkout(&mut self) -> Result<Order, CheckoutError> {
        if self.lines().is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        self.checking_out = true;
        let items: Vec<OrderItem> = self.lines().iter().map(OrderItem::from_line).collect();
        let total = self.total();
        let result = self.api.create_order(&items, total).await;
        self.checking_out = false;

        let order = result?;
        self.state.data_mut().clear();
        Ok(order)
    }

    pub fn detach(&mut self) {
        self.state.detach();
    }
}
