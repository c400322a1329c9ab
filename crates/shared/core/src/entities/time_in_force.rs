use serde::{Deserialize, Serialize};

/// Time-in-force instruction attached to priced orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Good Till Cancelled: order remains active until explicitly cancelled
    #[serde(rename = "GTC")]
    GoodTillCancelled,
}

impl TimeInForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::GoodTillCancelled => "GTC",
        }
    }
}

/// Price the exchange watches to trigger conditional orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkingType {
    #[serde(rename = "MARK_PRICE")]
    MarkPrice,
}

impl WorkingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkingType::MarkPrice => "MARK_PRICE",
        }
    }
}
