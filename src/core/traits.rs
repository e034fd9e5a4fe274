use crate::core::{errors::ExchangeError, types::OrderIntent};
use async_trait::async_trait;
use serde_json::Value;

/// Public market data. Pairs are given in canonical `BASE-QUOTE` form.
#[async_trait]
pub trait MarketDataSource {
    /// Ticker for one pair, or for every pair when `pair` is `None`
    async fn get_pair(&self, pair: Option<&str>) -> Result<Value, ExchangeError>;

    async fn get_order_book(&self, pair: &str, limit: Option<u32>)
        -> Result<Value, ExchangeError>;

    async fn get_trades(&self, pair: &str) -> Result<Value, ExchangeError>;

    /// OHLC candles; `last` is the number of candles requested
    async fn get_ohlc(&self, pair: &str, last: Option<u32>) -> Result<Value, ExchangeError>;
}

#[async_trait]
pub trait AccountInfo {
    async fn get_account_balance(&self) -> Result<Value, ExchangeError>;
    async fn get_transactions(&self) -> Result<Value, ExchangeError>;
    async fn get_open_orders(&self, pair: &str) -> Result<Value, ExchangeError>;
    async fn get_all_orders(&self, pair: &str) -> Result<Value, ExchangeError>;
}

#[async_trait]
pub trait OrderPlacer {
    /// Submit a prepared order body
    async fn place_order(&self, order: OrderIntent) -> Result<Value, ExchangeError>;

    /// Cancel by exchange order id. Returns the full response envelope.
    async fn cancel_order(&self, order_id: &str) -> Result<Value, ExchangeError>;
}

#[async_trait]
pub trait ExchangeConnector: MarketDataSource + OrderPlacer + AccountInfo {}
