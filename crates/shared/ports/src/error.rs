use thiserror::Error;

/// Failure reported by (or while talking to) the exchange
///
/// Adapters convert their transport-specific errors into this type so the
/// pipeline never sees HTTP client details.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The exchange answered with an error status and message
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Exchange-specific error code, when the body carried one
        code: Option<i64>,
        message: String,
    },

    /// Network or communication failure
    #[error("Network error: {0}")]
    Network(String),

    /// The response could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn api(status: u16, code: Option<i64>, message: impl Into<String>) -> Self {
        ApiError::Api {
            status,
            code,
            message: message.into(),
        }
    }

    /// HTTP status, for errors the exchange itself returned
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
