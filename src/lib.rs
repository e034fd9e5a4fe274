pub mod core;
pub mod exchanges;

pub use crate::core::{
    config::{Credentials, ExchangeConfig},
    errors::ExchangeError,
    traits::{AccountInfo, ExchangeConnector, MarketDataSource, OrderPlacer},
    types::*,
};
pub use exchanges::btcturk::{build_connector, BtcturkBuilder, BtcturkConnector};
