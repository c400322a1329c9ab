//! Validation errors
//!
//! Everything here is raised before any network call is made.

use thiserror::Error;

use crate::values::Quantity;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Symbol must be uppercase (e.g., BTCUSDT), got '{0}'")]
    InvalidSymbol(String),

    #[error("Limit orders require a positive --price")]
    MissingPrice,

    #[error("Stop orders require --stop_price")]
    MissingStopPrice,

    #[error("Trailing stop orders require --trailing_delta")]
    MissingTrailingDelta,

    #[error("Trailing delta must be between 1 and 100, got {0}")]
    InvalidTrailingDelta(u32),

    #[error("Quantity must be positive, got {0}")]
    InvalidQuantity(Quantity),

    #[error("Quantity must be between {min} and {max}, got {quantity}")]
    QuantityOutOfRange {
        quantity: Quantity,
        min: Quantity,
        max: Quantity,
    },
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Unknown name for one of the string-backed enums
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
    expected: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &[&str]) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}
