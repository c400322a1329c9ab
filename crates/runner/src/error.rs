//! Errors that end a run

use std::io;

use ordo_core::ValidationError;
use ordo_ports::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    /// Bad user input, raised before any network call
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("API keys must be provided via --api_key/--api_secret or BINANCE_API_KEY/BINANCE_API_SECRET")]
    MissingCredentials,

    /// The exchange refused a call or could not be reached
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<io::Error> for RunError {
    fn from(err: io::Error) -> Self {
        RunError::Unexpected(err.to_string())
    }
}

impl RunError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Validation(_)
            | RunError::MissingCredentials
            | RunError::Api(_)
            | RunError::Unexpected(_) => 1,
        }
    }
}
