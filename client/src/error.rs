//! Error types for the JSONPlaceholder transport adapter

use thiserror::Error;

/// Errors that can occur when talking to the remote service
///
/// Decoding failures are deliberately folded into the same taxonomy as
/// transport failures: the store only ever sees the rendered message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the connection failed
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The request exceeded the fixed per-request timeout
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-2xx status
    #[error("unexpected status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// The response body did not match the declared shape
    #[error("response decoding failed: {0}")]
    Decode(String),

    /// The client could not be constructed
    #[error("client configuration failed: {0}")]
    Config(String),
}

impl ApiError {
    /// Map a reqwest error onto the adapter taxonomy
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
