use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::OrderPlacer;
use crate::core::types::{OrderIntent, OrderSide, Price, Quantity, Symbol};
use crate::exchanges::btcturk::rest::BtcturkRest;
use async_trait::async_trait;
use serde_json::Value;

/// Order submission and cancellation
pub struct Trading<R: RestClient> {
    rest: BtcturkRest<R>,
}

impl<R: RestClient + Clone> Trading<R> {
    pub fn new(rest: &R) -> Self {
        Self {
            rest: BtcturkRest::new(rest.clone()),
        }
    }
}

impl<R: RestClient> Trading<R> {
    pub async fn submit_market_order(
        &self,
        pair: &str,
        side: OrderSide,
        quantity: Quantity,
    ) -> Result<Value, ExchangeError> {
        let symbol = Symbol::parse(pair)?;
        self.place_order(OrderIntent::market(&symbol, side, quantity))
            .await
    }

    pub async fn submit_limit_order(
        &self,
        pair: &str,
        side: OrderSide,
        price: Price,
        quantity: Quantity,
    ) -> Result<Value, ExchangeError> {
        let symbol = Symbol::parse(pair)?;
        self.place_order(OrderIntent::limit(&symbol, side, price, quantity))
            .await
    }

    pub async fn submit_stop_market_order(
        &self,
        pair: &str,
        side: OrderSide,
        stop_price: Price,
        quantity: Quantity,
    ) -> Result<Value, ExchangeError> {
        let symbol = Symbol::parse(pair)?;
        self.place_order(OrderIntent::stop_market(&symbol, side, stop_price, quantity))
            .await
    }

    pub async fn submit_stop_limit_order(
        &self,
        pair: &str,
        side: OrderSide,
        stop_price: Price,
        limit_price: Price,
        quantity: Quantity,
    ) -> Result<Value, ExchangeError> {
        let symbol = Symbol::parse(pair)?;
        self.place_order(OrderIntent::stop_limit(
            &symbol,
            side,
            stop_price,
            limit_price,
            quantity,
        ))
        .await
    }
}

#[async_trait]
impl<R: RestClient> OrderPlacer for Trading<R> {
    async fn place_order(&self, order: OrderIntent) -> Result<Value, ExchangeError> {
        self.rest.place_order(&order).await
    }

    async fn cancel_order(&self, order_id: &str) -> Result<Value, ExchangeError> {
        self.rest.cancel_order(order_id).await
    }
}
