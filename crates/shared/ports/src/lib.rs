//! Ordo Ports
//!
//! Port definitions (traits) for the ordo order tool.
//! These define the boundary between the order pipeline and the exchange
//! adapter that actually talks to the network.

mod error;
mod futures_api;

pub use error::{ApiError, ApiResult};
pub use futures_api::FuturesApi;
