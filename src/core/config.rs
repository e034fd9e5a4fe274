use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;

/// API key and base64 encoded secret issued by the exchange
#[derive(Debug, Clone)]
pub struct Credentials {
    api_key: Secret<String>,
    api_secret: Secret<String>,
}

impl Credentials {
    #[must_use]
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            api_secret: Secret::new(api_secret.into()),
        }
    }

    /// Get API key (use carefully - exposes secret)
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Get the base64 API secret (use carefully - exposes secret)
    pub fn api_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExchangeConfig {
    pub credentials: Option<Credentials>,
    pub testnet: bool,
    pub base_url: Option<String>,
}

// Never expose secrets in serialization
impl Serialize for ExchangeConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let redacted = self.credentials.as_ref().map(|_| "[REDACTED]");
        let mut state = serializer.serialize_struct("ExchangeConfig", 4)?;
        state.serialize_field("api_key", &redacted)?;
        state.serialize_field("api_secret", &redacted)?;
        state.serialize_field("testnet", &self.testnet)?;
        state.serialize_field("base_url", &self.base_url)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ExchangeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ExchangeConfigHelper {
            api_key: Option<String>,
            api_secret: Option<String>,
            #[serde(default)]
            testnet: bool,
            base_url: Option<String>,
        }

        let helper = ExchangeConfigHelper::deserialize(deserializer)?;
        let credentials = match (helper.api_key, helper.api_secret) {
            (Some(key), Some(secret)) => Some(Credentials::new(key, secret)),
            (None, None) => None,
            _ => {
                return Err(serde::de::Error::custom(
                    "api_key and api_secret must be provided together",
                ))
            }
        };

        Ok(Self {
            credentials,
            testnet: helper.testnet,
            base_url: helper.base_url,
        })
    }
}

impl ExchangeConfig {
    /// Create a new configuration with API credentials
    #[must_use]
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            credentials: Some(Credentials::new(api_key, api_secret)),
            testnet: false,
            base_url: None,
        }
    }

    /// Configuration for public market data only
    #[must_use]
    pub fn read_only() -> Self {
        Self::default()
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `{PREFIX}_API_KEY` and `{PREFIX}_API_SECRET` (optional, but only as a pair)
    /// - `{PREFIX}_TESTNET` (optional, defaults to false)
    /// - `{PREFIX}_BASE_URL` (optional)
    pub fn from_env(exchange_prefix: &str) -> Result<Self, ConfigError> {
        let prefix = exchange_prefix.to_uppercase();
        let api_key_var = format!("{}_API_KEY", prefix);
        let api_secret_var = format!("{}_API_SECRET", prefix);

        let credentials = match (env::var(&api_key_var).ok(), env::var(&api_secret_var).ok()) {
            (Some(key), Some(secret)) => Some(Credentials::new(key, secret)),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::MissingEnvironmentVariable(api_secret_var)),
            (None, Some(_)) => return Err(ConfigError::MissingEnvironmentVariable(api_key_var)),
        };

        let testnet = env::var(format!("{}_TESTNET", prefix))
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        let base_url = env::var(format!("{}_BASE_URL", prefix)).ok();

        Ok(Self {
            credentials,
            testnet,
            base_url,
        })
    }

    /// Load a .env file (if present) and then read the environment
    ///
    /// **Security Warning**: Never commit .env files to version control!
    #[cfg(feature = "env-file")]
    pub fn from_env_file(exchange_prefix: &str) -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(exchange_prefix, ".env")
    }

    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(
        exchange_prefix: &str,
        env_file_path: &str,
    ) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                // No file, fall back to the process environment
            }
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env(exchange_prefix)
    }

    /// Check if this configuration can call private endpoints
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.credentials
            .as_ref()
            .is_some_and(|c| !c.api_key().is_empty() && !c.api_secret().is_empty())
    }

    #[must_use]
    pub const fn testnet(mut self, testnet: bool) -> Self {
        self.testnet = testnet;
        self
    }

    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_only_has_no_credentials() {
        let config = ExchangeConfig::read_only();
        assert!(!config.has_credentials());
        assert!(!config.testnet);
    }

    #[test]
    fn test_empty_credentials_are_not_usable() {
        let config = ExchangeConfig::new("", "");
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_serialization_redacts_secrets() {
        let config = ExchangeConfig::new("my-key", "bXktc2VjcmV0").testnet(true);
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("my-key"));
        assert!(!json.contains("bXktc2VjcmV0"));
        assert!(json.contains("[REDACTED]"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = ExchangeConfig::new("my-key", "bXktc2VjcmV0");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("my-key"));
        assert!(!debug.contains("bXktc2VjcmV0"));
    }

    #[test]
    fn test_deserialize_requires_credentials_pair() {
        let ok: ExchangeConfig =
            serde_json::from_str(r#"{"api_key":"k","api_secret":"c2VjcmV0"}"#).unwrap();
        assert!(ok.has_credentials());

        let public: ExchangeConfig = serde_json::from_str(r#"{"testnet":true}"#).unwrap();
        assert!(!public.has_credentials());
        assert!(public.testnet);

        let half = serde_json::from_str::<ExchangeConfig>(r#"{"api_key":"k"}"#);
        assert!(half.is_err());
    }

    #[test]
    fn test_from_env_rejects_half_credentials() {
        env::set_var("BTCTURK_HALF_TEST_API_KEY", "key");
        env::remove_var("BTCTURK_HALF_TEST_API_SECRET");

        let result = ExchangeConfig::from_env("btcturk_half_test");
        assert!(matches!(
            result,
            Err(ConfigError::MissingEnvironmentVariable(var)) if var == "BTCTURK_HALF_TEST_API_SECRET"
        ));

        env::remove_var("BTCTURK_HALF_TEST_API_KEY");
    }

    #[test]
    fn test_from_env_without_credentials_is_read_only() {
        env::remove_var("BTCTURK_EMPTY_TEST_API_KEY");
        env::remove_var("BTCTURK_EMPTY_TEST_API_SECRET");
        env::set_var("BTCTURK_EMPTY_TEST_TESTNET", "true");

        let config = ExchangeConfig::from_env("BTCTURK_EMPTY_TEST").unwrap();
        assert!(!config.has_credentials());
        assert!(config.testnet);

        env::remove_var("BTCTURK_EMPTY_TEST_TESTNET");
    }
}
