#![allow(dead_code)]

use async_trait::async_trait;
use btcturk::core::kernel::{HttpRequest, HttpResponse, HttpTransport};
use btcturk::{BtcturkBuilder, BtcturkConnector, ExchangeError};
use btcturk::core::kernel::RestDispatcher;
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "https://api.btcturk.test";
pub const API_KEY: &str = "test-public-key";
// base64("secret-key-bytes")
pub const API_SECRET: &str = "c2VjcmV0LWtleS1ieXRlcw==";

/// What the fake exchange answers with
#[derive(Clone)]
pub enum Reply {
    Status(u16, &'static str, String),
    Unreachable,
}

impl Reply {
    pub fn ok(body: serde_json::Value) -> Self {
        Self::Status(200, "OK", body.to_string())
    }

    pub fn data(data: serde_json::Value) -> Self {
        Self::ok(serde_json::json!({
            "success": true,
            "message": null,
            "code": 0,
            "data": data,
        }))
    }
}

/// In-memory transport that records every request it is handed
pub struct RecordingTransport {
    reply: Reply,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn only_request(&self) -> HttpRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ExchangeError> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Reply::Status(status, text, body) => Ok(HttpResponse {
                status: *status,
                status_text: (*text).to_string(),
                body: body.clone(),
            }),
            Reply::Unreachable => Err(ExchangeError::TransportError(
                "connect failure: connection refused".to_string(),
            )),
        }
    }
}

pub fn public_connector(transport: Arc<RecordingTransport>) -> BtcturkConnector<RestDispatcher> {
    BtcturkBuilder::new()
        .with_base_url(BASE_URL)
        .with_transport(transport)
        .build()
        .unwrap()
}

pub fn private_connector(transport: Arc<RecordingTransport>) -> BtcturkConnector<RestDispatcher> {
    BtcturkBuilder::new()
        .with_base_url(BASE_URL)
        .with_credentials(API_KEY, API_SECRET)
        .with_transport(transport)
        .build()
        .unwrap()
}

/// Assert that the request carries a valid signature for its own stamp
pub fn assert_signed(request: &HttpRequest) {
    assert_eq!(request.header("X-PCK"), Some(API_KEY));
    let stamp: u64 = request
        .header("X-Stamp")
        .expect("X-Stamp header")
        .parse()
        .expect("numeric X-Stamp");
    let expected = btcturk::exchanges::btcturk::sign(API_KEY, API_SECRET, stamp).unwrap();
    assert_eq!(request.header("X-Signature"), Some(expected.as_str()));
}
