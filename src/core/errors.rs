use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    /// A private endpoint was called on a client built without credentials.
    #[error("Credentials missing: this endpoint requires an API key and secret")]
    CredentialsMissing,

    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// No response was received (DNS, connect, timeout or body read failure).
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The exchange answered with a non-2xx status.
    #[error("Remote error: {status_code} {status_text}")]
    RemoteError { status_code: u16, status_text: String },

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),
}

impl ExchangeError {
    /// Status code and text of a remote failure, if this is one
    pub fn remote_status(&self) -> Option<(u16, &str)> {
        match self {
            Self::RemoteError {
                status_code,
                status_text,
            } => Some((*status_code, status_text.as_str())),
            _ => None,
        }
    }

    /// True when the failure happened before any response was received
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::TransportError(_))
    }
}

impl From<reqwest::Error> for ExchangeError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            "timeout"
        } else if err.is_connect() {
            "connect"
        } else if err.is_body() || err.is_decode() {
            "body"
        } else {
            "request"
        };
        Self::TransportError(format!("{} failure: {}", kind, err))
    }
}
