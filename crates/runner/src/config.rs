//! Run settings resolved from the command line and environment

use ordo_gateway::{Credentials, Environment, GatewayConfig};

use crate::cli::Cli;
use crate::error::RunError;

/// Asset whose balance is shown before trading
pub const DEFAULT_ASSET: &str = "USDT";
pub const DEFAULT_LOG_FILE: &str = "trading_bot.log";

/// Options for the submit pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub asset: String,
    pub round_quantity: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            asset: DEFAULT_ASSET.to_string(),
            round_quantity: false,
        }
    }
}

/// Pick the API credentials, treating blank values as absent
///
/// Flag values arrive already merged with `BINANCE_API_KEY` /
/// `BINANCE_API_SECRET`, command line first.
pub fn credentials(
    api_key: Option<&str>,
    api_secret: Option<&str>,
) -> Result<Credentials, RunError> {
    fn present(v: Option<&str>) -> Option<&str> {
        v.map(str::trim).filter(|v| !v.is_empty())
    }

    match (present(api_key), present(api_secret)) {
        (Some(key), Some(secret)) => Ok(Credentials::new(key, secret)),
        _ => Err(RunError::MissingCredentials),
    }
}

impl Cli {
    pub fn environment(&self) -> Environment {
        if self.live {
            Environment::Live
        } else {
            Environment::Testnet
        }
    }

    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig::for_environment(self.environment()).with_recv_window(self.recv_window)
    }

    pub fn credentials(&self) -> Result<Credentials, RunError> {
        credentials(self.api_key.as_deref(), self.api_secret.as_deref())
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            asset: self.asset.clone(),
            round_quantity: self.round_quantity,
        }
    }
}
