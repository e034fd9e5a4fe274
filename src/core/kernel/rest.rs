use crate::core::errors::ExchangeError;
use crate::core::kernel::signer::{timestamp_millis, Signer};
use crate::core::kernel::transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// REST client trait for making HTTP requests
///
/// Every operation returns the normalized payload. Successful GET and POST
/// responses are unwrapped to the envelope's `data` field; DELETE returns the
/// whole response body. Non-2xx responses become
/// [`ExchangeError::RemoteError`].
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Make a GET request
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path
    /// * `query_params` - Query parameters as key-value pairs
    /// * `authenticated` - Whether to attach authentication headers
    async fn get(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
        authenticated: bool,
    ) -> Result<Value, ExchangeError>;

    /// Make an authenticated POST request with a JSON body
    async fn post(&self, endpoint: &str, body: &Value) -> Result<Value, ExchangeError>;

    /// Make an authenticated DELETE request
    ///
    /// Unlike the other verbs this returns the full response body, not the
    /// inner `data` field.
    async fn delete(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
    ) -> Result<Value, ExchangeError>;
}

/// Which part of a successful response is handed back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// The envelope's `data` field
    Payload,
    /// The whole body
    FullBody,
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Exchange name for logging and tracing
    pub exchange_name: String,
    /// Request timeout in seconds, enforced by the transport
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl RestClientConfig {
    pub fn new(base_url: impl Into<String>, exchange_name: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            exchange_name: exchange_name.into(),
            timeout_seconds: 30,
            user_agent: concat!("btcturk-rs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl RestClientBuilder {
    pub fn new(config: RestClientConfig) -> Self {
        Self {
            config,
            signer: None,
            transport: None,
        }
    }

    /// Set the signer for authenticated requests
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Replace the default reqwest transport
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<RestDispatcher, ExchangeError> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&self.config)?),
        };

        Ok(RestDispatcher {
            transport,
            config: self.config,
            signer: self.signer,
        })
    }
}

/// `RestClient` implementation that signs, dispatches and unwraps requests
#[derive(Clone)]
pub struct RestDispatcher {
    transport: Arc<dyn HttpTransport>,
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
}

impl std::fmt::Debug for RestDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestDispatcher")
            .field("config", &self.config)
            .field("has_signer", &self.signer.is_some())
            .finish_non_exhaustive()
    }
}

impl RestDispatcher {
    pub fn config(&self) -> &RestClientConfig {
        &self.config
    }

    pub fn can_authenticate(&self) -> bool {
        self.signer.is_some()
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint)
    }

    /// Headers for one authenticated request, minted from a fresh timestamp
    fn auth_headers(&self) -> Result<HashMap<String, String>, ExchangeError> {
        let signer = self
            .signer
            .as_ref()
            .ok_or(ExchangeError::CredentialsMissing)?;
        signer.sign_request(timestamp_millis()?)
    }

    /// Normalize a raw response into a payload or a `RemoteError`
    pub fn unwrap_response(
        response: HttpResponse,
        shape: ResponseShape,
    ) -> Result<Value, ExchangeError> {
        if !response.is_success() {
            warn!(
                status = response.status,
                status_text = %response.status_text,
                "Request rejected by exchange"
            );
            return Err(ExchangeError::RemoteError {
                status_code: response.status,
                status_text: response.status_text,
            });
        }

        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }

        let body: Value = serde_json::from_str(&response.body).map_err(|e| {
            ExchangeError::DeserializationError(format!("Failed to parse JSON response: {}", e))
        })?;

        Ok(match shape {
            ResponseShape::FullBody => body,
            ResponseShape::Payload => match body {
                Value::Object(mut envelope) => envelope.remove("data").unwrap_or(Value::Null),
                _ => Value::Null,
            },
        })
    }

    #[instrument(
        skip(self, query_params, body),
        fields(exchange = %self.config.exchange_name, method = %method, endpoint = %endpoint)
    )]
    async fn make_request(
        &self,
        method: Method,
        endpoint: &str,
        query_params: &[(&str, &str)],
        body: Option<Vec<u8>>,
        authenticated: bool,
        shape: ResponseShape,
    ) -> Result<Value, ExchangeError> {
        let mut headers = if authenticated {
            self.auth_headers()?
        } else {
            HashMap::new()
        };

        if body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }

        let request = HttpRequest {
            method,
            url: self.build_url(endpoint),
            query: query_params
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            headers,
            body,
        };

        debug!(authenticated, params = request.query.len(), "Dispatching request");

        let response = self.transport.send(request).await?;
        Self::unwrap_response(response, shape)
    }
}

#[async_trait]
impl RestClient for RestDispatcher {
    async fn get(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
        authenticated: bool,
    ) -> Result<Value, ExchangeError> {
        self.make_request(
            Method::GET,
            endpoint,
            query_params,
            None,
            authenticated,
            ResponseShape::Payload,
        )
        .await
    }

    async fn post(&self, endpoint: &str, body: &Value) -> Result<Value, ExchangeError> {
        let body_bytes = serde_json::to_vec(body).map_err(|e| {
            ExchangeError::SerializationError(format!("Failed to serialize request body: {}", e))
        })?;

        self.make_request(
            Method::POST,
            endpoint,
            &[],
            Some(body_bytes),
            true,
            ResponseShape::Payload,
        )
        .await
    }

    async fn delete(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
    ) -> Result<Value, ExchangeError> {
        self.make_request(
            Method::DELETE,
            endpoint,
            query_params,
            None,
            true,
            ResponseShape::FullBody,
        )
        .await
    }
}
