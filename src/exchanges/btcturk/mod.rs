pub mod builder;
pub mod connector;
pub mod rest;
pub mod signer;

pub use builder::{build_connector, BtcturkBuilder, MAINNET_URL, TESTNET_URL};
pub use connector::{Account, BtcturkConnector, MarketData, Trading};
pub use rest::BtcturkRest;
pub use signer::{sign, BtcturkSigner};
