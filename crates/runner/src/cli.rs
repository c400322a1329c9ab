//! Command-line interface

use std::path::PathBuf;

use clap::Parser;
use ordo_core::{OrderParams, OrderType, Price, Quantity, Side};
use ordo_gateway::GatewayConfig;

use crate::config::{DEFAULT_ASSET, DEFAULT_LOG_FILE};

/// Place a single futures order
#[derive(Parser, Debug, Clone)]
#[command(name = "ordo")]
#[command(about = "Place a single order on the futures exchange")]
#[command(version)]
pub struct Cli {
    /// Trading pair (e.g., BTCUSDT)
    #[arg(long)]
    pub symbol: String,

    /// Order side (BUY, SELL)
    #[arg(long)]
    pub side: Side,

    /// Order type (MARKET, LIMIT, STOP, TRAILING_STOP)
    #[arg(long = "type", value_name = "TYPE")]
    pub order_type: OrderType,

    /// Order quantity
    #[arg(long, allow_negative_numbers = true)]
    pub quantity: Quantity,

    /// Price for LIMIT orders
    #[arg(long, allow_negative_numbers = true)]
    pub price: Option<Price>,

    /// Stop price for STOP orders, activation price for TRAILING_STOP
    #[arg(long = "stop_price", allow_negative_numbers = true)]
    pub stop_price: Option<Price>,

    /// Callback rate (1-100) for TRAILING_STOP orders
    #[arg(long = "trailing_delta")]
    pub trailing_delta: Option<u32>,

    /// API key (falls back to BINANCE_API_KEY)
    #[arg(long = "api_key", env = "BINANCE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// API secret (falls back to BINANCE_API_SECRET)
    #[arg(long = "api_secret", env = "BINANCE_API_SECRET", hide_env_values = true)]
    pub api_secret: Option<String>,

    /// Use testnet (default)
    #[arg(long, conflicts_with = "live")]
    pub testnet: bool,

    /// Use the live exchange
    #[arg(long)]
    pub live: bool,

    /// Round the quantity to the symbol's LOT_SIZE step before submitting
    #[arg(long = "round_quantity")]
    pub round_quantity: bool,

    /// Asset whose available balance is shown
    #[arg(long, default_value = DEFAULT_ASSET)]
    pub asset: String,

    /// Append-only log file
    #[arg(long = "log_file", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Signed request validity window in milliseconds
    #[arg(long = "recv_window", default_value_t = GatewayConfig::DEFAULT_RECV_WINDOW_MS)]
    pub recv_window: u64,
}

impl Cli {
    /// The order fields exactly as typed, not yet validated
    pub fn order_params(&self) -> OrderParams {
        OrderParams {
            symbol: self.symbol.clone(),
            side: self.side,
            order_type: self.order_type,
            quantity: self.quantity,
            price: self.price,
            stop_price: self.stop_price,
            trailing_delta: self.trailing_delta,
        }
    }
}
