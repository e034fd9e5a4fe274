use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::AccountInfo;
use crate::core::types::Symbol;
use crate::exchanges::btcturk::rest::BtcturkRest;
use async_trait::async_trait;
use serde_json::Value;

/// Private account endpoints
pub struct Account<R: RestClient> {
    rest: BtcturkRest<R>,
}

impl<R: RestClient + Clone> Account<R> {
    pub fn new(rest: &R) -> Self {
        Self {
            rest: BtcturkRest::new(rest.clone()),
        }
    }
}

#[async_trait]
impl<R: RestClient> AccountInfo for Account<R> {
    async fn get_account_balance(&self) -> Result<Value, ExchangeError> {
        self.rest.get_account_balance().await
    }

    async fn get_transactions(&self) -> Result<Value, ExchangeError> {
        self.rest.get_transactions().await
    }

    async fn get_open_orders(&self, pair: &str) -> Result<Value, ExchangeError> {
        let symbol = Symbol::parse(pair)?;
        self.rest.get_open_orders(&symbol).await
    }

    async fn get_all_orders(&self, pair: &str) -> Result<Value, ExchangeError> {
        let symbol = Symbol::parse(pair)?;
        self.rest.get_all_orders(&symbol).await
    }
}
