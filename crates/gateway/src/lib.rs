//! Ordo Gateway
//!
//! Gateway layer for the ordo order tool. Provides:
//! - Connection settings for testnet and live endpoints
//! - HMAC-SHA256 request signing
//! - Wire message types and the order-parameter mapping
//! - The Binance USD-M futures adapter implementing [`ordo_ports::FuturesApi`]
//!
//! ## Architecture
//!
//! ```text
//!   order pipeline (ordo-runner)
//!         │ FuturesApi
//!    ┌────▼──────────┐
//!    │ BinanceFutures │  order_params / response decoding
//!    └────┬──────────┘
//!         │ signed GET / POST
//!    ┌────▼────┐
//!    │RestClient│  HmacSigner, X-MBX-APIKEY
//!    └────┬────┘
//!         ▼
//!  /fapi/v2/account  /fapi/v2/balance  /fapi/v1/exchangeInfo  /fapi/v1/order
//! ```

pub mod adapters;
pub mod config;
pub mod error;
pub mod messages;
pub mod rest_client;
pub mod signer;

// Re-export commonly used types
pub use adapters::binance::{BinanceFutures, endpoints};
pub use config::{Credentials, Environment, GatewayConfig, LIVE_REST_URL, TESTNET_REST_URL};
pub use error::RestError;
pub use messages::order::order_params;
pub use rest_client::RestClient;
pub use signer::HmacSigner;
