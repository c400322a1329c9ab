//! Wire message types for the futures REST API

pub mod account;
pub mod order;
