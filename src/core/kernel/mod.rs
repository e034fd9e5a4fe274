/// Kernel - exchange-agnostic transport and authentication layer
///
/// # Architecture
///
/// ## Transport Layer
/// - `HttpTransport`: pluggable GET/POST/DELETE transport (timeouts live here)
/// - `ReqwestTransport`: default transport backed by reqwest
///
/// ## Dispatch
/// - `RestClient`: uniform request/response contract used by connectors
/// - `RestDispatcher`: attaches fresh auth headers and unwraps responses
///
/// ## Authentication
/// - `Signer`: turns a request instant into authentication headers
/// - `decode_secret` / `hmac_sha256` / `encode_signature`: the three pure
///   stages of base64-keyed HMAC signing
///
/// # Example
/// ```rust,no_run
/// use btcturk::core::kernel::*;
/// use btcturk::exchanges::btcturk::signer::BtcturkSigner;
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), btcturk::ExchangeError> {
/// let rest_config = RestClientConfig::new("https://api.btcturk.com", "btcturk");
/// let signer = Arc::new(BtcturkSigner::new("api_key", "c2VjcmV0"));
/// let rest = RestClientBuilder::new(rest_config)
///     .with_signer(signer)
///     .build()?;
///
/// let balances = rest.get("/api/v1/users/balances", &[], true).await?;
/// # Ok(())
/// # }
/// ```
pub mod rest;
pub mod signer;
pub mod transport;

pub use rest::{ResponseShape, RestClient, RestClientBuilder, RestClientConfig, RestDispatcher};
pub use signer::{
    decode_secret, encode_signature, hmac_sha256, timestamp_millis, SignatureResult, Signer,
};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
