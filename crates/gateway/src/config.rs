//! Connection settings for the futures REST API

use std::fmt;
use std::time::Duration;

/// Binance USD-M futures testnet
pub const TESTNET_REST_URL: &str = "https://testnet.binancefuture.com";
/// Binance USD-M futures production
pub const LIVE_REST_URL: &str = "https://fapi.binance.com";

/// Which exchange environment orders go to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Sandboxed exchange with test funds
    #[default]
    Testnet,
    /// Real exchange, real money
    Live,
}

impl Environment {
    pub fn rest_url(&self) -> &'static str {
        match self {
            Environment::Testnet => TESTNET_REST_URL,
            Environment::Live => LIVE_REST_URL,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Environment::Testnet => "TESTNET",
            Environment::Live => "LIVE",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Configuration for the REST connection
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    /// How long a signed request stays valid after its timestamp
    pub recv_window_ms: u64,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl GatewayConfig {
    pub const DEFAULT_RECV_WINDOW_MS: u64 = 5000;
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(base_url: impl Into<String>) -> Self {
        GatewayConfig {
            base_url: base_url.into(),
            recv_window_ms: Self::DEFAULT_RECV_WINDOW_MS,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    pub fn for_environment(environment: Environment) -> Self {
        Self::new(environment.rest_url())
    }

    pub fn with_recv_window(mut self, recv_window_ms: u64) -> Self {
        self.recv_window_ms = recv_window_ms;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// API key pair used to authenticate signed requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Credentials {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

// Keep the secret out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"***")
            .finish()
    }
}
