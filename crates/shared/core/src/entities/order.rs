use serde::{Deserialize, Serialize};

use super::{OrderStatus, OrderType, Side, TimeInForce, WorkingType};
use crate::values::{Price, Quantity, Symbol};

/// Type-specific order fields
///
/// Each variant carries exactly the fields its order type needs, so a
/// request can never hold a price for a market order or miss the stop
/// price of a stop order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderKind {
    Market,
    Limit {
        price: Price,
    },
    Stop {
        stop_price: Price,
    },
    TrailingStop {
        /// Callback rate in whole units, 1..=100
        callback_rate: u32,
        /// Price at which trailing starts; exchange uses the current price when absent
        activation_price: Option<Price>,
    },
}

/// A validated order, ready to be mapped onto the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub symbol: Symbol,
    pub side: Side,
    pub quantity: Quantity,
    pub kind: OrderKind,
}

impl OrderRequest {
    pub fn order_type(&self) -> OrderType {
        match self.kind {
            OrderKind::Market => OrderType::Market,
            OrderKind::Limit { .. } => OrderType::Limit,
            OrderKind::Stop { .. } => OrderType::Stop,
            OrderKind::TrailingStop { .. } => OrderType::TrailingStop,
        }
    }

    pub fn price(&self) -> Option<Price> {
        match self.kind {
            OrderKind::Limit { price } => Some(price),
            _ => None,
        }
    }

    pub fn stop_price(&self) -> Option<Price> {
        match self.kind {
            OrderKind::Stop { stop_price } => Some(stop_price),
            _ => None,
        }
    }

    pub fn callback_rate(&self) -> Option<u32> {
        match self.kind {
            OrderKind::TrailingStop { callback_rate, .. } => Some(callback_rate),
            _ => None,
        }
    }

    pub fn activation_price(&self) -> Option<Price> {
        match self.kind {
            OrderKind::TrailingStop {
                activation_price, ..
            } => activation_price,
            _ => None,
        }
    }

    /// Priced orders rest on the book until cancelled
    pub fn time_in_force(&self) -> Option<TimeInForce> {
        self.price().map(|_| TimeInForce::GoodTillCancelled)
    }

    /// Trailing stops follow the mark price
    pub fn working_type(&self) -> Option<WorkingType> {
        self.callback_rate().map(|_| WorkingType::MarkPrice)
    }

    /// Replace the quantity, e.g. after lot-size rounding
    pub fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = quantity;
        self
    }
}

/// Exchange acknowledgement of a submitted order
///
/// Read-only: it is displayed and logged, never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResult {
    pub order_id: i64,
    pub client_order_id: Option<String>,
    pub symbol: Symbol,
    /// Wire order type, e.g. `STOP_MARKET`
    pub order_type: String,
    pub side: Side,
    pub orig_qty: Quantity,
    pub status: OrderStatus,
    pub price: Option<Price>,
    pub stop_price: Option<Price>,
}
