use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::types::{OrderIntent, Symbol};
use serde_json::Value;
use tracing::instrument;

pub const TICKER_ENDPOINT: &str = "/api/v2/ticker";
pub const ORDER_BOOK_ENDPOINT: &str = "/api/v2/orderbook";
pub const TRADES_ENDPOINT: &str = "/api/v2/trades";
pub const OHLC_ENDPOINT: &str = "/api/v2/ohlc";

pub const ACCOUNT_BALANCE_ENDPOINT: &str = "/api/v1/users/balances";
pub const USER_TRANSACTIONS_ENDPOINT: &str = "/api/v1/users/transactions/trade";
pub const OPEN_ORDERS_ENDPOINT: &str = "/api/v1/openOrders";
pub const ALL_ORDERS_ENDPOINT: &str = "/api/v1/allOrders";
pub const ORDER_ENDPOINT: &str = "/api/v1/order";

pub const DEFAULT_ORDER_BOOK_LIMIT: u32 = 10;
pub const DEFAULT_OHLC_LAST: u32 = 10;

/// Thin wrapper mapping BtcTurk endpoints onto a `RestClient`
#[derive(Debug, Clone)]
pub struct BtcturkRest<R: RestClient> {
    client: R,
}

impl<R: RestClient> BtcturkRest<R> {
    pub fn new(client: R) -> Self {
        Self { client }
    }

    #[instrument(skip(self), fields(exchange = "btcturk"))]
    pub async fn get_ticker(&self, symbol: Option<&Symbol>) -> Result<Value, ExchangeError> {
        match symbol {
            Some(symbol) => {
                let pair = symbol.delimited();
                self.client
                    .get(TICKER_ENDPOINT, &[("pairSymbol", pair.as_str())], false)
                    .await
            }
            None => self.client.get(TICKER_ENDPOINT, &[], false).await,
        }
    }

    #[instrument(skip(self), fields(exchange = "btcturk", symbol = %symbol))]
    pub async fn get_order_book(&self, symbol: &Symbol, limit: u32) -> Result<Value, ExchangeError> {
        let pair = symbol.delimited();
        let limit = limit.to_string();
        self.client
            .get(
                ORDER_BOOK_ENDPOINT,
                &[("pairSymbol", pair.as_str()), ("limit", limit.as_str())],
                false,
            )
            .await
    }

    #[instrument(skip(self), fields(exchange = "btcturk", symbol = %symbol))]
    pub async fn get_trades(&self, symbol: &Symbol) -> Result<Value, ExchangeError> {
        let pair = symbol.delimited();
        self.client
            .get(TRADES_ENDPOINT, &[("pairSymbol", pair.as_str())], false)
            .await
    }

    #[instrument(skip(self), fields(exchange = "btcturk", symbol = %symbol))]
    pub async fn get_ohlc(&self, symbol: &Symbol, last: u32) -> Result<Value, ExchangeError> {
        let pair = symbol.delimited();
        let last = last.to_string();
        self.client
            .get(
                OHLC_ENDPOINT,
                &[("pairSymbol", pair.as_str()), ("last", last.as_str())],
                false,
            )
            .await
    }

    #[instrument(skip(self), fields(exchange = "btcturk"))]
    pub async fn get_account_balance(&self) -> Result<Value, ExchangeError> {
        self.client.get(ACCOUNT_BALANCE_ENDPOINT, &[], true).await
    }

    #[instrument(skip(self), fields(exchange = "btcturk"))]
    pub async fn get_transactions(&self) -> Result<Value, ExchangeError> {
        self.client.get(USER_TRANSACTIONS_ENDPOINT, &[], true).await
    }

    #[instrument(skip(self), fields(exchange = "btcturk", symbol = %symbol))]
    pub async fn get_open_orders(&self, symbol: &Symbol) -> Result<Value, ExchangeError> {
        let pair = symbol.delimited();
        self.client
            .get(OPEN_ORDERS_ENDPOINT, &[("pairSymbol", pair.as_str())], true)
            .await
    }

    #[instrument(skip(self), fields(exchange = "btcturk", symbol = %symbol))]
    pub async fn get_all_orders(&self, symbol: &Symbol) -> Result<Value, ExchangeError> {
        let pair = symbol.delimited();
        self.client
            .get(ALL_ORDERS_ENDPOINT, &[("pairSymbol", pair.as_str())], true)
            .await
    }

    #[instrument(
        skip(self, order),
        fields(exchange = "btcturk", pair = %order.pair_symbol(), method = %order.order_method())
    )]
    pub async fn place_order(&self, order: &OrderIntent) -> Result<Value, ExchangeError> {
        let body = serde_json::to_value(order).map_err(|e| {
            ExchangeError::SerializationError(format!("Failed to serialize order: {}", e))
        })?;
        self.client.post(ORDER_ENDPOINT, &body).await
    }

    /// Returns the full response envelope, not just `data`
    #[instrument(skip(self), fields(exchange = "btcturk"))]
    pub async fn cancel_order(&self, order_id: &str) -> Result<Value, ExchangeError> {
        self.client.delete(ORDER_ENDPOINT, &[("id", order_id)]).await
    }
}
