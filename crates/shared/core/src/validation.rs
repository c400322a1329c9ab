//! Order request construction
//!
//! Turns raw user input into an [`OrderRequest`]. Pure and synchronous:
//! nothing here touches the network, so every rule is testable on its own.

use log::warn;
use rust_decimal::Decimal;

use crate::entities::{OrderKind, OrderRequest, OrderType, Side};
use crate::error::{ValidationError, ValidationResult};
use crate::values::{Price, Quantity};

/// Highest callback rate accepted for trailing stops
pub const MAX_TRAILING_DELTA: u32 = 100;

/// Order parameters exactly as the user supplied them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderParams {
    pub symbol: String,
    pub side: Side,
    pub order_type: OrderType,
    pub quantity: Quantity,
    pub price: Option<Price>,
    pub stop_price: Option<Price>,
    pub trailing_delta: Option<u32>,
}

impl OrderParams {
    pub fn new(
        symbol: impl Into<String>,
        side: Side,
        order_type: OrderType,
        quantity: Quantity,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type,
            quantity,
            price: None,
            stop_price: None,
            trailing_delta: None,
        }
    }

    pub fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_stop_price(mut self, stop_price: Price) -> Self {
        self.stop_price = Some(stop_price);
        self
    }

    pub fn with_trailing_delta(mut self, trailing_delta: u32) -> Self {
        self.trailing_delta = Some(trailing_delta);
        self
    }
}

/// Validates [`OrderParams`] and builds the matching [`OrderRequest`]
///
/// Rules are checked in a fixed order and the first failure wins:
/// symbol case, limit price, stop price, trailing delta, quantity.
#[derive(Debug, Clone)]
pub struct OrderRequestBuilder {
    params: OrderParams,
}

impl OrderRequestBuilder {
    pub fn new(params: OrderParams) -> Self {
        Self { params }
    }

    pub fn build(self) -> ValidationResult<OrderRequest> {
        let p = self.params;

        check_symbol(&p.symbol)?;

        let kind = match p.order_type {
            OrderType::Market => OrderKind::Market,
            OrderType::Limit => OrderKind::Limit {
                price: positive(p.price).ok_or(ValidationError::MissingPrice)?,
            },
            OrderType::Stop => OrderKind::Stop {
                stop_price: positive(p.stop_price).ok_or(ValidationError::MissingStopPrice)?,
            },
            OrderType::TrailingStop => {
                let callback_rate = match p.trailing_delta {
                    None | Some(0) => return Err(ValidationError::MissingTrailingDelta),
                    Some(d) if d > MAX_TRAILING_DELTA => {
                        return Err(ValidationError::InvalidTrailingDelta(d));
                    }
                    Some(d) => d,
                };
                OrderKind::TrailingStop {
                    callback_rate,
                    // the stop price doubles as the activation price
                    activation_price: positive(p.stop_price),
                }
            }
        };

        if p.quantity <= Decimal::ZERO {
            return Err(ValidationError::InvalidQuantity(p.quantity));
        }

        warn_unused(&p);

        Ok(OrderRequest {
            symbol: p.symbol,
            side: p.side,
            quantity: p.quantity,
            kind,
        })
    }
}

/// A symbol is valid when it is non-empty and already upper case
pub fn check_symbol(symbol: &str) -> ValidationResult<()> {
    if symbol.is_empty() || symbol != symbol.to_uppercase() {
        return Err(ValidationError::InvalidSymbol(symbol.to_string()));
    }
    Ok(())
}

fn positive(value: Option<Price>) -> Option<Price> {
    value.filter(|v| *v > Decimal::ZERO)
}

fn warn_unused(p: &OrderParams) {
    let t = p.order_type;
    let ignored = [
        ("price", p.price.is_some() && t != OrderType::Limit),
        (
            "stop_price",
            p.stop_price.is_some() && !matches!(t, OrderType::Stop | OrderType::TrailingStop),
        ),
        (
            "trailing_delta",
            p.trailing_delta.is_some() && t != OrderType::TrailingStop,
        ),
    ];
    for (name, _) in ignored.iter().filter(|(_, unused)| *unused) {
        warn!("Ignoring --{} for {} order", name, p.order_type);
    }
}
