use crate::core::config::Credentials;
use crate::core::errors::ExchangeError;
use crate::core::kernel::signer::{
    decode_secret, encode_signature, hmac_sha256, timestamp_millis, SignatureResult, Signer,
};
use std::collections::HashMap;

pub const HEADER_API_KEY: &str = "X-PCK";
pub const HEADER_STAMP: &str = "X-Stamp";
pub const HEADER_SIGNATURE: &str = "X-Signature";

/// BtcTurk request signature
///
/// `base64(HMAC-SHA256(key = base64_decode(api_secret), msg = api_key ++ timestamp))`
/// where `timestamp` is the decimal millisecond count with no separator.
pub fn sign(api_key: &str, api_secret_b64: &str, timestamp: u64) -> Result<String, ExchangeError> {
    let key = decode_secret(api_secret_b64)?;
    let message = format!("{}{}", api_key, timestamp);
    let digest = hmac_sha256(&key, message.as_bytes())?;
    Ok(encode_signature(&digest))
}

/// Builds `X-PCK`, `X-Stamp` and `X-Signature` for private endpoints
#[derive(Debug, Clone)]
pub struct BtcturkSigner {
    credentials: Credentials,
}

impl BtcturkSigner {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self::from_credentials(Credentials::new(api_key, api_secret))
    }

    pub fn from_credentials(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Headers for a request made at `timestamp`. The same value is used
    /// for `X-Stamp` and for the signed message.
    pub fn headers(&self, timestamp: u64) -> SignatureResult {
        let signature = sign(
            self.credentials.api_key(),
            self.credentials.api_secret(),
            timestamp,
        )?;

        let mut headers = HashMap::with_capacity(3);
        headers.insert(
            HEADER_API_KEY.to_string(),
            self.credentials.api_key().to_string(),
        );
        headers.insert(HEADER_STAMP.to_string(), timestamp.to_string());
        headers.insert(HEADER_SIGNATURE.to_string(), signature);
        Ok(headers)
    }

    /// Headers for a request made now
    pub fn headers_now(&self) -> SignatureResult {
        self.headers(timestamp_millis()?)
    }
}

impl Signer for BtcturkSigner {
    fn sign_request(&self, timestamp: u64) -> SignatureResult {
        self.headers(timestamp)
    }
}
