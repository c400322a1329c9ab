//! Exchange adapters
//!
//! Each adapter implements [`ordo_ports::FuturesApi`] for one venue.

pub mod binance;
