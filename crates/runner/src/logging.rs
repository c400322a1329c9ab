//! Log setup for the binary
//!
//! Two sinks: the append-only log file (no colours) and stderr. Library
//! crates log through the `log` facade; those records are bridged in too.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::RunError;

/// Used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

pub fn init(log_file: &Path) -> Result<(), RunError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| {
            RunError::Unexpected(format!("cannot open log file {}: {}", log_file.display(), e))
        })?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| RunError::Unexpected(format!("logging already initialised: {}", e)))
}
