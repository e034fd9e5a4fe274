mod common;

use btcturk::core::kernel::{HttpRequest, RestClient};
use btcturk::{
    AccountInfo, ExchangeError, MarketDataSource, OrderIntent, OrderPlacer, OrderSide, Symbol,
};
use common::{
    assert_signed, private_connector, public_connector, RecordingTransport, Reply, BASE_URL,
};
use reqwest::Method;
use serde_json::{json, Value};

fn body_of(request: &HttpRequest) -> Value {
    serde_json::from_slice(request.body.as_ref().expect("request body")).unwrap()
}

#[cfg(test)]
mod market_data_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_pair_scenario() {
        let ticker = json!([{"pair": "BTCTRY", "last": 1_000_000}]);
        let transport = RecordingTransport::new(Reply::data(ticker.clone()));
        let btcturk = public_connector(transport.clone());

        let result = btcturk.get_pair(Some("BTC-TRY")).await.unwrap();
        assert_eq!(result, ticker);

        let request = transport.only_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url, format!("{}/api/v2/ticker", BASE_URL));
        assert_eq!(request.query, vec![("pairSymbol".to_string(), "BTC_TRY".to_string())]);
        assert!(request.headers.is_empty(), "public calls carry no headers");
    }

    #[tokio::test]
    async fn test_get_pair_without_pair_lists_all() {
        let transport = RecordingTransport::new(Reply::data(json!([])));
        let btcturk = public_connector(transport.clone());

        btcturk.get_pair(None).await.unwrap();
        assert!(transport.only_request().query.is_empty());
    }

    #[tokio::test]
    async fn test_order_book_limit_defaults_to_ten() {
        let transport = RecordingTransport::new(Reply::data(json!({"bids": [], "asks": []})));
        let btcturk = public_connector(transport.clone());

        btcturk.get_order_book("ETH-TRY", None).await.unwrap();
        btcturk.get_order_book("ETH-TRY", Some(50)).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].url, format!("{}/api/v2/orderbook", BASE_URL));
        assert_eq!(requests[0].query_param("pairSymbol"), Some("ETH_TRY"));
        assert_eq!(requests[0].query_param("limit"), Some("10"));
        assert_eq!(requests[1].query_param("limit"), Some("50"));
    }

    #[tokio::test]
    async fn test_trades_and_ohlc() {
        let transport = RecordingTransport::new(Reply::data(json!([])));
        let btcturk = public_connector(transport.clone());

        btcturk.get_trades("USDT-TRY").await.unwrap();
        btcturk.get_ohlc("USDT-TRY", None).await.unwrap();
        btcturk.get_ohlc("USDT-TRY", Some(3)).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].url, format!("{}/api/v2/trades", BASE_URL));
        assert_eq!(requests[0].query_param("pairSymbol"), Some("USDT_TRY"));
        assert_eq!(requests[1].url, format!("{}/api/v2/ohlc", BASE_URL));
        assert_eq!(requests[1].query_param("last"), Some("10"));
        assert_eq!(requests[2].query_param("last"), Some("3"));
        assert!(requests.iter().all(|r| r.headers.is_empty()));
    }

    #[tokio::test]
    async fn test_invalid_symbol_never_reaches_transport() {
        let transport = RecordingTransport::new(Reply::data(json!([])));
        let btcturk = public_connector(transport.clone());

        for pair in ["BTCTRY", "BTC-TRY-USD", "-TRY", "BTC-"] {
            let err = btcturk.get_trades(pair).await.unwrap_err();
            assert!(
                matches!(err, ExchangeError::InvalidSymbol(_)),
                "{} gave {:?}",
                pair,
                err
            );
        }
        assert!(transport.requests().is_empty());
    }
}

#[cfg(test)]
mod private_endpoint_tests {
    use super::*;

    #[tokio::test]
    async fn test_limit_order_scenario() {
        let transport = RecordingTransport::new(Reply::data(json!({"id": 9_876_543})));
        let btcturk = private_connector(transport.clone());

        let result = btcturk
            .submit_limit_order(
                "BTC-TRY",
                "buy".parse().unwrap(),
                "100000".parse().unwrap(),
                "0.01".parse().unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(result, json!({"id": 9_876_543}));

        let request = transport.only_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, format!("{}/api/v1/order", BASE_URL));
        assert_eq!(
            body_of(&request),
            json!({
                "quantity": "0.01",
                "price": "100000",
                "orderMethod": "limit",
                "orderType": "buy",
                "pairSymbol": "BTCTRY"
            })
        );
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_signed(&request);
    }

    #[tokio::test]
    async fn test_market_and_stop_order_bodies() {
        let transport = RecordingTransport::new(Reply::data(json!({})));
        let btcturk = private_connector(transport.clone());

        btcturk
            .submit_market_order("ETH-USDT", OrderSide::Sell, "1.5".parse().unwrap())
            .await
            .unwrap();
        btcturk
            .submit_stop_market_order(
                "ETH-USDT",
                OrderSide::Sell,
                "1800".parse().unwrap(),
                "1.5".parse().unwrap(),
            )
            .await
            .unwrap();
        btcturk
            .submit_stop_limit_order(
                "ETH-USDT",
                OrderSide::Buy,
                "2100".parse().unwrap(),
                "2105.5".parse().unwrap(),
                "1.5".parse().unwrap(),
            )
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(
            body_of(&requests[0]),
            json!({
                "quantity": "1.5",
                "orderMethod": "market",
                "orderType": "sell",
                "pairSymbol": "ETHUSDT"
            })
        );
        assert_eq!(
            body_of(&requests[1]),
            json!({
                "quantity": "1.5",
                "stopPrice": "1800",
                "orderMethod": "stopMarket",
                "orderType": "sell",
                "pairSymbol": "ETHUSDT"
            })
        );
        assert_eq!(
            body_of(&requests[2]),
            json!({
                "quantity": "1.5",
                "price": "2105.5",
                "stopPrice": "2100",
                "orderMethod": "stopLimit",
                "orderType": "buy",
                "pairSymbol": "ETHUSDT"
            })
        );
        requests.iter().for_each(assert_signed);
    }

    #[tokio::test]
    async fn test_order_with_invalid_pair_never_reaches_transport() {
        let transport = RecordingTransport::new(Reply::data(json!({"id": 1})));
        let btcturk = private_connector(transport.clone());

        for pair in ["BTCTRY", "BTC_TRY", "btc-try", "BTC-TRY-USD", "-TRY"] {
            let results = vec![
                btcturk
                    .submit_market_order(pair, OrderSide::Buy, "1".parse().unwrap())
                    .await,
                btcturk
                    .submit_limit_order(
                        pair,
                        OrderSide::Buy,
                        "100000".parse().unwrap(),
                        "0.01".parse().unwrap(),
                    )
                    .await,
                btcturk
                    .submit_stop_market_order(
                        pair,
                        OrderSide::Sell,
                        "90000".parse().unwrap(),
                        "0.01".parse().unwrap(),
                    )
                    .await,
                btcturk
                    .submit_stop_limit_order(
                        pair,
                        OrderSide::Sell,
                        "90000".parse().unwrap(),
                        "89500".parse().unwrap(),
                        "0.01".parse().unwrap(),
                    )
                    .await,
            ];
            for result in results {
                assert!(
                    matches!(result, Err(ExchangeError::InvalidSymbol(_))),
                    "{} gave {:?}",
                    pair,
                    result
                );
            }
        }
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_place_order_sends_compact_pair() {
        let transport = RecordingTransport::new(Reply::data(json!({"id": 2})));
        let btcturk = private_connector(transport.clone());

        let symbol: Symbol = "AVAX-TRY".parse().unwrap();
        let intent = OrderIntent::market(&symbol, OrderSide::Buy, "3".parse().unwrap());
        btcturk.place_order(intent).await.unwrap();

        let request = transport.only_request();
        assert_eq!(body_of(&request)["pairSymbol"], "AVAXTRY");
        assert_signed(&request);
    }

    #[tokio::test]
    async fn test_account_reads_are_signed_gets() {
        let transport = RecordingTransport::new(Reply::data(json!([{"asset": "TRY"}])));
        let btcturk = private_connector(transport.clone());

        let balances = btcturk.get_account_balance().await.unwrap();
        assert_eq!(balances, json!([{"asset": "TRY"}]));
        btcturk.get_transactions().await.unwrap();
        btcturk.get_open_orders("BTC-TRY").await.unwrap();
        btcturk.get_all_orders("BTC-TRY").await.unwrap();

        let requests = transport.requests();
        let urls: Vec<_> = requests.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(
            urls,
            [
                "https://api.btcturk.test/api/v1/users/balances",
                "https://api.btcturk.test/api/v1/users/transactions/trade",
                "https://api.btcturk.test/api/v1/openOrders",
                "https://api.btcturk.test/api/v1/allOrders",
            ]
        );
        assert_eq!(requests[2].query_param("pairSymbol"), Some("BTC_TRY"));
        assert_eq!(requests[3].query_param("pairSymbol"), Some("BTC_TRY"));
        for request in &requests {
            assert_eq!(request.method, Method::GET);
            assert_signed(request);
        }
    }

    #[tokio::test]
    async fn test_cancel_order_returns_full_envelope() {
        let envelope = json!({"success": true, "message": "SUCCESS", "code": 0});
        let transport = RecordingTransport::new(Reply::ok(envelope.clone()));
        let btcturk = private_connector(transport.clone());

        let result = btcturk.cancel_order("123456").await.unwrap();
        assert_eq!(result, envelope, "DELETE keeps the whole body");

        let request = transport.only_request();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.url, format!("{}/api/v1/order", BASE_URL));
        assert_eq!(request.query, vec![("id".to_string(), "123456".to_string())]);
        assert!(request.body.is_none());
        assert_signed(&request);
    }

    #[tokio::test]
    async fn test_private_calls_without_credentials_fail_before_network() {
        let transport = RecordingTransport::new(Reply::data(json!([])));
        let btcturk = public_connector(transport.clone());

        let results = vec![
            btcturk.get_account_balance().await,
            btcturk.get_transactions().await,
            btcturk.get_open_orders("BTC-TRY").await,
            btcturk.get_all_orders("BTC-TRY").await,
            btcturk
                .submit_market_order("BTC-TRY", OrderSide::Buy, "1".parse().unwrap())
                .await,
            btcturk
                .submit_limit_order(
                    "BTC-TRY",
                    OrderSide::Buy,
                    "100000".parse().unwrap(),
                    "0.01".parse().unwrap(),
                )
                .await,
            btcturk.cancel_order("1").await,
        ];

        for result in results {
            assert!(matches!(result, Err(ExchangeError::CredentialsMissing)));
        }
        assert!(transport.requests().is_empty());
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[tokio::test]
    async fn test_remote_error_keeps_status_only() {
        let transport = RecordingTransport::new(Reply::Status(
            401,
            "Unauthorized",
            r#"{"success":false,"message":"Unauthorized","code":1}"#.to_string(),
        ));
        let btcturk = private_connector(transport.clone());

        let err = btcturk.get_account_balance().await.unwrap_err();
        assert_eq!(err.remote_status(), Some((401, "Unauthorized")));
    }

    #[tokio::test]
    async fn test_remote_error_on_delete() {
        let transport = RecordingTransport::new(Reply::Status(
            404,
            "Not Found",
            String::new(),
        ));
        let btcturk = private_connector(transport.clone());

        let err = btcturk.cancel_order("404").await.unwrap_err();
        assert!(matches!(
            err,
            ExchangeError::RemoteError { status_code: 404, ref status_text } if status_text == "Not Found"
        ));
    }

    #[tokio::test]
    async fn test_transport_failure_is_not_remote_error() {
        let transport = RecordingTransport::new(Reply::Unreachable);
        let btcturk = public_connector(transport.clone());

        let err = btcturk.get_pair(Some("BTC-TRY")).await.unwrap_err();
        assert!(err.is_transport());
        assert!(err.remote_status().is_none());
    }

    #[tokio::test]
    async fn test_reqwest_transport_connection_refused() {
        let rest = btcturk::BtcturkBuilder::new()
            .with_base_url("http://127.0.0.1:1")
            .with_rest_timeout(5)
            .build_rest()
            .unwrap();

        let err = rest.get("/api/v2/ticker", &[], false).await.unwrap_err();
        assert!(err.is_transport(), "got {:?}", err);
    }
}

#[cfg(test)]
mod concurrency_tests {
    use super::*;
    use futures::future::join_all;

    #[tokio::test]
    async fn test_concurrent_calls_each_sign_their_own_request() {
        let transport = RecordingTransport::new(Reply::data(json!([])));
        let btcturk = private_connector(transport.clone());

        let calls = (0..8).map(|_| btcturk.get_account_balance());
        let results = join_all(calls).await;
        assert!(results.iter().all(Result::is_ok));

        let requests = transport.requests();
        assert_eq!(requests.len(), 8);
        requests.iter().for_each(assert_signed);
    }
}
