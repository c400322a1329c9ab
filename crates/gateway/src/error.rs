//! Error types for the gateway crate

use ordo_ports::ApiError;
use thiserror::Error;

/// REST-level errors
#[derive(Error, Debug)]
pub enum RestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error body in the exchange's `{code, msg}` shape
    #[error("API error {status}: {msg}")]
    Api { status: u16, code: i64, msg: String },

    /// Error status without a decodable body
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Client setup failed: {0}")]
    Setup(String),
}

/// Convert infrastructure RestError to the port's ApiError
impl From<RestError> for ApiError {
    fn from(err: RestError) -> Self {
        match err {
            RestError::Http(e) => ApiError::Network(e.to_string()),
            RestError::Api { status, code, msg } => ApiError::api(status, Some(code), msg),
            RestError::Status { status, body } => ApiError::api(status, None, body),
            RestError::Parse(msg) => ApiError::Parse(msg),
            RestError::Setup(msg) => ApiError::Network(msg),
        }
    }
}
