//! Order wire mapping

use ordo_core::{OrderRequest, OrderResult, OrderStatus, Price, Quantity, Side};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Map a validated order onto the exchange's order parameters
///
/// Only the fields the order type needs are emitted; signing fields are
/// added later by the REST client.
pub fn order_params(order: &OrderRequest, client_order_id: &str) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("symbol", order.symbol.clone()),
        ("side", order.side.as_str().to_string()),
        ("type", order.order_type().wire_name().to_string()),
        ("quantity", order.quantity.to_string()),
        ("newClientOrderId", client_order_id.to_string()),
    ];

    if let Some(price) = order.price() {
        params.push(("price", price.to_string()));
    }
    if let Some(tif) = order.time_in_force() {
        params.push(("timeInForce", tif.as_str().to_string()));
    }
    if let Some(stop_price) = order.stop_price() {
        params.push(("stopPrice", stop_price.to_string()));
    }
    if let Some(callback_rate) = order.callback_rate() {
        params.push(("callbackRate", callback_rate.to_string()));
    }
    if let Some(activation_price) = order.activation_price() {
        params.push(("activationPrice", activation_price.to_string()));
    }
    if let Some(working_type) = order.working_type() {
        params.push(("workingType", working_type.as_str().to_string()));
    }

    params
}

/// Response from order placement
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesOrderResponse {
    pub order_id: i64,
    pub client_order_id: Option<String>,
    pub symbol: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub side: Side,
    pub orig_qty: Quantity,
    pub status: OrderStatus,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub stop_price: Option<Price>,
}

impl From<FuturesOrderResponse> for OrderResult {
    fn from(resp: FuturesOrderResponse) -> Self {
        // "0" means the field does not apply to this order type
        let set = |p: Option<Price>| p.filter(|v| *v != Decimal::ZERO);

        OrderResult {
            order_id: resp.order_id,
            client_order_id: resp.client_order_id,
            symbol: resp.symbol,
            order_type: resp.order_type,
            side: resp.side,
            orig_qty: resp.orig_qty,
            status: resp.status,
            price: set(resp.price),
            stop_price: set(resp.stop_price),
        }
    }
}
