use crate::core::errors::ExchangeError;
use base64::engine::general_purpose;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

type HmacSha256 = Hmac<Sha256>;

/// Result type for signing operations: the authentication headers
pub type SignatureResult = Result<HashMap<String, String>, ExchangeError>;

/// Signer trait for request authentication
///
/// Implementations turn a request instant into the headers the exchange
/// checks. The dispatcher captures the instant immediately before each
/// authenticated request, so the headers are minted once per call and must
/// never be cached.
pub trait Signer: Send + Sync {
    /// Build authentication headers for a request made at `timestamp`
    ///
    /// # Arguments
    /// * `timestamp` - Request timestamp in milliseconds since the Unix epoch
    fn sign_request(&self, timestamp: u64) -> SignatureResult;
}

/// Decode a standard (padded) base64 secret into raw key bytes
pub fn decode_secret(secret_b64: &str) -> Result<Vec<u8>, ExchangeError> {
    general_purpose::STANDARD
        .decode(secret_b64)
        .map_err(|e| ExchangeError::AuthError(format!("API secret is not valid base64: {}", e)))
}

/// HMAC-SHA256 of `message` keyed with `key`
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> Result<[u8; 32], ExchangeError> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| ExchangeError::AuthError(format!("Failed to create HMAC: {}", e)))?;
    mac.update(message);
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&mac.finalize().into_bytes());
    Ok(digest)
}

/// Base64 text of a raw digest
pub fn encode_signature(digest: &[u8]) -> String {
    general_purpose::STANDARD.encode(digest)
}

/// Current time in milliseconds since the Unix epoch
#[allow(clippy::cast_possible_truncation)]
pub fn timestamp_millis() -> Result<u64, ExchangeError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .map_err(|e| ExchangeError::AuthError(format!("System time error: {}", e)))
}
