//! Integration test: the ordo pipeline against an in-memory exchange
//!
//! Drives `run` end to end from parsed flags, recording every exchange
//! call so the ordering guarantees can be checked.

use std::future::{Ready, ready};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use clap::Parser;
use ordo_core::{LotSize, OrderKind, OrderRequest, OrderResult, OrderStatus, ValidationError};
use ordo_gateway::{Credentials, GatewayConfig, LIVE_REST_URL, TESTNET_REST_URL};
use ordo_ports::{ApiError, ApiResult, FuturesApi};
use ordo_runner::{Cli, RunError, run};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ============================================================================
// In-memory exchange
// ============================================================================

#[derive(Clone, Default)]
struct MockApi {
    calls: Arc<Mutex<Vec<&'static str>>>,
    submitted: Arc<Mutex<Vec<OrderRequest>>>,
    connected_with: Arc<Mutex<Option<GatewayConfig>>>,
    balance: Decimal,
    lot_size: Option<LotSize>,
    reject: Option<ApiError>,
}

impl MockApi {
    fn with_balance(balance: Decimal) -> Self {
        Self {
            balance,
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn submitted(&self) -> Vec<OrderRequest> {
        self.submitted.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    /// Connector handing out this exchange, as `BinanceFutures::authenticate` would
    fn connector(&self) -> impl FnOnce(GatewayConfig, Credentials) -> Ready<ApiResult<MockApi>> {
        let api = self.clone();
        move |config, _credentials| {
            api.record("connect");
            *api.connected_with.lock().unwrap() = Some(config);
            ready(Ok(api))
        }
    }
}

#[async_trait]
impl FuturesApi for MockApi {
    async fn verify_connection(&self) -> ApiResult<()> {
        self.record("verify_connection");
        Ok(())
    }

    async fn balance(&self, _asset: &str) -> ApiResult<Decimal> {
        self.record("balance");
        Ok(self.balance)
    }

    async fn lot_size(&self, _symbol: &str) -> ApiResult<Option<LotSize>> {
        self.record("lot_size");
        Ok(self.lot_size)
    }

    async fn submit_order(&self, order: &OrderRequest) -> ApiResult<OrderResult> {
        self.record("submit_order");
        self.submitted.lock().unwrap().push(order.clone());
        if let Some(err) = &self.reject {
            return Err(err.clone());
        }

        Ok(OrderResult {
            order_id: 42,
            client_order_id: Some("cid".to_string()),
            symbol: order.symbol.clone(),
            order_type: order.order_type().wire_name().to_string(),
            side: order.side,
            orig_qty: order.quantity,
            status: OrderStatus::New,
            price: order.price(),
            stop_price: order.stop_price(),
        })
    }
}

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["ordo", "--api_key", "key", "--api_secret", "secret"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("valid flags")
}

async fn invoke(api: &MockApi, args: &[&str]) -> (Result<OrderResult, RunError>, String) {
    let mut out = Vec::new();
    let result = run(&cli(args), api.connector(), &mut out).await;
    (result, String::from_utf8(out).unwrap())
}

const MARKET_BTC: [&str; 8] = [
    "--symbol", "BTCUSDT", "--side", "BUY", "--type", "MARKET", "--quantity", "0.01",
];

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_market_order_has_no_price_fields() {
    let api = MockApi::with_balance(dec!(1000));

    let (result, out) = invoke(&api, &MARKET_BTC).await;
    let result = result.unwrap();

    assert_eq!(api.calls(), ["connect", "balance", "submit_order"]);
    let sent = &api.submitted()[0];
    assert_eq!(sent.kind, OrderKind::Market);
    assert_eq!(sent.price(), None);
    assert_eq!(sent.stop_price(), None);
    assert_eq!(sent.time_in_force(), None);

    assert_eq!(result.order_id, 42);
    assert!(out.contains("Available USDT balance: 1000.00\n"));
    assert!(
        out.contains("Order Result:\nOrder ID: 42\nSymbol: BTCUSDT\nType: MARKET\nSide: BUY\n")
    );
    assert!(out.contains("Quantity: 0.01\nStatus: NEW\n"));
    assert!(!out.contains("Price:"));
}

#[tokio::test]
async fn test_limit_without_price_fails_before_network() {
    let api = MockApi::with_balance(dec!(1000));

    let (result, out) = invoke(
        &api,
        &["--symbol", "BTCUSDT", "--side", "BUY", "--type", "LIMIT", "--quantity", "0.01"],
    )
    .await;

    assert!(matches!(
        result,
        Err(RunError::Validation(ValidationError::MissingPrice))
    ));
    assert!(api.calls().is_empty());
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_lowercase_symbol_rejected() {
    let api = MockApi::default();

    let (result, _) = invoke(
        &api,
        &["--symbol", "btcusdt", "--side", "SELL", "--type", "MARKET", "--quantity", "1"],
    )
    .await;

    match result {
        Err(RunError::Validation(ValidationError::InvalidSymbol(s))) => assert_eq!(s, "btcusdt"),
        other => panic!("expected InvalidSymbol, got {other:?}"),
    }
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_exchange_rejection_surfaces_message() {
    let api = MockApi {
        reject: Some(ApiError::api(400, Some(-2019), "insufficient margin")),
        ..MockApi::with_balance(dec!(12.5))
    };

    let (result, out) = invoke(&api, &MARKET_BTC).await;
    let err = result.unwrap_err();

    assert!(matches!(err, RunError::Api(ApiError::Api { status: 400, .. })));
    assert!(format!("Error: {}", err).ends_with("insufficient margin"));
    assert_eq!(err.exit_code(), 1);

    assert!(out.contains("Available USDT balance: 12.50"));
    assert!(!out.contains("Order Result"));
}

#[tokio::test]
async fn test_connection_failure_stops_pipeline() {
    let api = MockApi::default();
    let mut out = Vec::new();

    let connect = |_: GatewayConfig, _: Credentials| {
        ready(Err::<MockApi, _>(ApiError::api(
            401,
            Some(-2015),
            "Invalid API-key, IP, or permissions for action.",
        )))
    };
    let result = run(&cli(&MARKET_BTC), connect, &mut out).await;

    assert!(matches!(result, Err(RunError::Api(ApiError::Api { status: 401, .. }))));
    assert!(api.calls().is_empty());
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_round_quantity_uses_lot_size() {
    let api = MockApi {
        lot_size: Some(LotSize::new(dec!(0.001), dec!(1000), dec!(0.001))),
        ..MockApi::with_balance(dec!(500))
    };

    let (result, _) = invoke(
        &api,
        &[
            "--symbol", "BTCUSDT", "--side", "BUY", "--type", "MARKET", "--quantity", "0.0126",
            "--round_quantity",
        ],
    )
    .await;

    assert_eq!(result.unwrap().orig_qty, dec!(0.013));
    assert_eq!(api.calls(), ["connect", "balance", "lot_size", "submit_order"]);
    assert_eq!(api.submitted()[0].quantity, dec!(0.013));
}

#[tokio::test]
async fn test_round_quantity_out_of_range() {
    let api = MockApi {
        lot_size: Some(LotSize::new(dec!(0.001), dec!(1000), dec!(0.001))),
        ..MockApi::with_balance(dec!(500))
    };

    let (result, _) = invoke(
        &api,
        &[
            "--symbol", "BTCUSDT", "--side", "BUY", "--type", "MARKET", "--quantity", "2000",
            "--round_quantity",
        ],
    )
    .await;

    assert!(matches!(
        result,
        Err(RunError::Validation(ValidationError::QuantityOutOfRange { .. }))
    ));
    assert!(api.submitted().is_empty());
}

#[tokio::test]
async fn test_round_quantity_without_rules_keeps_quantity() {
    let api = MockApi::with_balance(dec!(500));

    let (result, _) = invoke(
        &api,
        &[
            "--symbol", "NEWUSDT", "--side", "SELL", "--type", "MARKET", "--quantity", "3.14159",
            "--round_quantity",
        ],
    )
    .await;

    assert_eq!(result.unwrap().orig_qty, dec!(3.14159));
}

#[tokio::test]
async fn test_no_rounding_unless_asked() {
    let api = MockApi {
        lot_size: Some(LotSize::new(dec!(0.001), dec!(1000), dec!(0.001))),
        ..MockApi::with_balance(dec!(500))
    };

    let (result, _) = invoke(
        &api,
        &["--symbol", "BTCUSDT", "--side", "BUY", "--type", "MARKET", "--quantity", "0.0126"],
    )
    .await;

    assert_eq!(result.unwrap().orig_qty, dec!(0.0126));
    assert!(!api.calls().contains(&"lot_size"));
}

#[tokio::test]
async fn test_trailing_stop_uses_stop_price_as_activation() {
    let api = MockApi::with_balance(dec!(500));

    let (result, out) = invoke(
        &api,
        &[
            "--symbol", "ETHUSDT", "--side", "SELL", "--type", "TRAILING_STOP", "--quantity", "1",
            "--stop_price", "3100", "--trailing_delta", "2",
        ],
    )
    .await;
    result.unwrap();

    let sent = &api.submitted()[0];
    assert_eq!(
        sent.kind,
        OrderKind::TrailingStop {
            callback_rate: 2,
            activation_price: Some(dec!(3100)),
        }
    );
    assert_eq!(sent.stop_price(), None);
    assert!(out.contains("Type: TRAILING_STOP_MARKET"));
}

#[tokio::test]
async fn test_limit_order_prints_price() {
    let api = MockApi::with_balance(dec!(500));

    let (result, out) = invoke(
        &api,
        &[
            "--symbol", "BTCUSDT", "--side", "BUY", "--type", "LIMIT", "--quantity", "0.01",
            "--price", "50000",
        ],
    )
    .await;

    assert_eq!(result.unwrap().price, Some(dec!(50000)));
    assert!(out.ends_with("Price: 50000\n"));
}

#[tokio::test]
async fn test_asset_and_environment_flags() {
    let api = MockApi::with_balance(dec!(0.123456));

    let mut args = MARKET_BTC.to_vec();
    args.extend(["--asset", "BNB", "--live", "--recv_window", "7000"]);
    let (result, out) = invoke(&api, &args).await;
    result.unwrap();

    assert!(out.contains("Available BNB balance: 0.12\n"));
    let config = api.connected_with.lock().unwrap().clone().unwrap();
    assert_eq!(config.base_url, LIVE_REST_URL);
    assert_eq!(config.recv_window_ms, 7000);
}

#[tokio::test]
async fn test_testnet_is_default() {
    let api = MockApi::with_balance(dec!(1));

    let (result, _) = invoke(&api, &MARKET_BTC).await;
    result.unwrap();

    let config = api.connected_with.lock().unwrap().clone().unwrap();
    assert_eq!(config.base_url, TESTNET_REST_URL);
}
