//! Ordo Runner
//!
//! The `ordo` command: parse flags, validate the order, resolve
//! credentials, connect, show the balance, submit and print the result.
//!
//! ```text
//!   Cli ──► OrderRequestBuilder ──► credentials
//!                                       │
//!                               connect (FuturesApi)
//!                                       │
//!                  balance ─► [lot_size + round] ─► submit_order
//!                                       │
//!                                  Order Result
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use app::{place_order, render_result, run};
pub use cli::Cli;
pub use config::{RunOptions, credentials};
pub use error::RunError;
