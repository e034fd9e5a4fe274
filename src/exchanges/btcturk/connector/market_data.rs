use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::MarketDataSource;
use crate::core::types::Symbol;
use crate::exchanges::btcturk::rest::{BtcturkRest, DEFAULT_OHLC_LAST, DEFAULT_ORDER_BOOK_LIMIT};
use async_trait::async_trait;
use serde_json::Value;

/// Public market data endpoints
pub struct MarketData<R: RestClient> {
    rest: BtcturkRest<R>,
}

impl<R: RestClient + Clone> MarketData<R> {
    pub fn new(rest: &R) -> Self {
        Self {
            rest: BtcturkRest::new(rest.clone()),
        }
    }
}

#[async_trait]
impl<R: RestClient> MarketDataSource for MarketData<R> {
    async fn get_pair(&self, pair: Option<&str>) -> Result<Value, ExchangeError> {
        let symbol = pair.map(Symbol::parse).transpose()?;
        self.rest.get_ticker(symbol.as_ref()).await
    }

    async fn get_order_book(
        &self,
        pair: &str,
        limit: Option<u32>,
    ) -> Result<Value, ExchangeError> {
        let symbol = Symbol::parse(pair)?;
        self.rest
            .get_order_book(&symbol, limit.unwrap_or(DEFAULT_ORDER_BOOK_LIMIT))
            .await
    }

    async fn get_trades(&self, pair: &str) -> Result<Value, ExchangeError> {
        let symbol = Symbol::parse(pair)?;
        self.rest.get_trades(&symbol).await
    }

    async fn get_ohlc(&self, pair: &str, last: Option<u32>) -> Result<Value, ExchangeError> {
        let symbol = Symbol::parse(pair)?;
        self.rest
            .get_ohlc(&symbol, last.unwrap_or(DEFAULT_OHLC_LAST))
            .await
    }
}
