use crate::core::config::{Credentials, ExchangeConfig};
use crate::core::errors::ExchangeError;
use crate::core::kernel::{HttpTransport, RestClientBuilder, RestClientConfig, RestDispatcher};
use crate::exchanges::btcturk::connector::BtcturkConnector;
use crate::exchanges::btcturk::signer::BtcturkSigner;
use std::sync::Arc;
use tracing::debug;

pub const MAINNET_URL: &str = "https://api.btcturk.com";
pub const TESTNET_URL: &str = "https://api-dev.btcturk.com";
pub const EXCHANGE_NAME: &str = "btcturk";

/// Base URL for a configuration: an explicit `base_url` wins, then testnet
pub fn resolve_base_url(config: &ExchangeConfig) -> String {
    config.base_url.clone().unwrap_or_else(|| {
        if config.testnet {
            TESTNET_URL.to_string()
        } else {
            MAINNET_URL.to_string()
        }
    })
}

/// Create a BtcTurk connector backed by the default reqwest transport
pub fn build_connector(
    config: ExchangeConfig,
) -> Result<BtcturkConnector<RestDispatcher>, ExchangeError> {
    BtcturkBuilder::from_config(config).build()
}

/// Fluent construction of a [`BtcturkConnector`]
pub struct BtcturkBuilder {
    config: ExchangeConfig,
    timeout_seconds: Option<u64>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl Default for BtcturkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BtcturkBuilder {
    /// Public endpoints only, mainnet
    pub fn new() -> Self {
        Self::from_config(ExchangeConfig::read_only())
    }

    pub fn from_config(config: ExchangeConfig) -> Self {
        Self {
            config,
            timeout_seconds: None,
            user_agent: None,
            transport: None,
        }
    }

    pub fn with_credentials(
        mut self,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        self.config.credentials = Some(Credentials::new(api_key, api_secret));
        self
    }

    pub fn with_testnet(mut self, testnet: bool) -> Self {
        self.config.testnet = testnet;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    pub fn with_rest_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = Some(timeout_seconds);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom HTTP transport instead of reqwest
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build_rest(self) -> Result<RestDispatcher, ExchangeError> {
        let base_url = resolve_base_url(&self.config);
        debug!(%base_url, authenticated = self.config.has_credentials(), "Building BtcTurk REST client");

        let mut rest_config = RestClientConfig::new(base_url, EXCHANGE_NAME);
        if let Some(timeout) = self.timeout_seconds {
            rest_config = rest_config.with_timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            rest_config = rest_config.with_user_agent(user_agent);
        }

        let mut rest_builder = RestClientBuilder::new(rest_config);

        // Only sign when both halves of the credentials are present
        if self.config.has_credentials() {
            if let Some(credentials) = self.config.credentials {
                rest_builder =
                    rest_builder.with_signer(Arc::new(BtcturkSigner::from_credentials(credentials)));
            }
        }

        if let Some(transport) = self.transport {
            rest_builder = rest_builder.with_transport(transport);
        }

        rest_builder.build()
    }

    pub fn build(self) -> Result<BtcturkConnector<RestDispatcher>, ExchangeError> {
        Ok(BtcturkConnector::new(self.build_rest()?))
    }
}
