use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::{AccountInfo, ExchangeConnector, MarketDataSource, OrderPlacer};
use crate::core::types::{OrderIntent, OrderSide, Price, Quantity};
use async_trait::async_trait;
use serde_json::Value;

pub mod account;
pub mod market_data;
pub mod trading;

pub use account::Account;
pub use market_data::MarketData;
pub use trading::Trading;

/// BtcTurk connector that composes all sub-trait implementations
///
/// Holds no mutable state. Every call builds its own URL, body and (for
/// private endpoints) authentication headers, so one instance can be shared
/// across tasks.
pub struct BtcturkConnector<R: RestClient> {
    pub market: MarketData<R>,
    pub trading: Trading<R>,
    pub account: Account<R>,
}

impl<R: RestClient + Clone> BtcturkConnector<R> {
    pub fn new(rest: R) -> Self {
        Self {
            market: MarketData::new(&rest),
            trading: Trading::new(&rest),
            account: Account::new(&rest),
        }
    }
}

impl<R: RestClient> BtcturkConnector<R> {
    pub async fn submit_market_order(
        &self,
        pair: &str,
        side: OrderSide,
        quantity: Quantity,
    ) -> Result<Value, ExchangeError> {
        self.trading.submit_market_order(pair, side, quantity).await
    }

    pub async fn submit_limit_order(
        &self,
        pair: &str,
        side: OrderSide,
        price: Price,
        quantity: Quantity,
    ) -> Result<Value, ExchangeError> {
        self.trading
            .submit_limit_order(pair, side, price, quantity)
            .await
    }

    pub async fn submit_stop_market_order(
        &self,
        pair: &str,
        side: OrderSide,
        stop_price: Price,
        quantity: Quantity,
    ) -> Result<Value, ExchangeError> {
        self.trading
            .submit_stop_market_order(pair, side, stop_price, quantity)
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
        self.trading
            .submit_stop_limit_order(pair, side, stop_price, limit_price, quantity)
            .await
    }
}

#[async_trait]
impl<R: RestClient> MarketDataSource for BtcturkConnector<R> {
    async fn get_pair(&self, pair: Option<&str>) -> Result<Value, ExchangeError> {
        self.market.get_pair(pair).await
    }

    async fn get_order_book(
        &self,
        pair: &str,
        limit: Option<u32>,
    ) -> Result<Value, ExchangeError> {
        self.market.get_order_book(pair, limit).await
    }

    async fn get_trades(&self, pair: &str) -> Result<Value, ExchangeError> {
        self.market.get_trades(pair).await
    }

    async fn get_ohlc(&self, pair: &str, last: Option<u32>) -> Result<Value, ExchangeError> {
        self.market.get_ohlc(pair, last).await
    }
}

#[async_trait]
impl<R: RestClient> AccountInfo for BtcturkConnector<R> {
    async fn get_account_balance(&self) -> Result<Value, ExchangeError> {
        self.account.get_account_balance().await
    }

    async fn get_transactions(&self) -> Result<Value, ExchangeError> {
        self.account.get_transactions().await
    }

    async fn get_open_orders(&self, pair: &str) -> Result<Value, ExchangeError> {
        self.account.get_open_orders(pair).await
    }

    async fn get_all_orders(&self, pair: &str) -> Result<Value, ExchangeError> {
        self.account.get_all_orders(pair).await
    }
}

#[async_trait]
impl<R: RestClient> OrderPlacer for BtcturkConnector<R> {
    async fn place_order(&self, order: OrderIntent) -> Result<Value, ExchangeError> {
        self.trading.place_order(order).await
    }

    async fn cancel_order(&self, order_id: &str) -> Result<Value, ExchangeError> {
        self.trading.cancel_order(order_id).await
    }
}

impl<R: RestClient> ExchangeConnector for BtcturkConnector<R> {}
