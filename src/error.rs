use thiserror::Error;

/// Error type for every store operation
///
/// Construction errors are raised before any request leaves the process.
/// A `NonOk` error means the remote answered but flagged the call as failed;
/// its display text is fixed and the remote's own detail is not carried.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Token is not exactly 64 characters long
    #[error("The token must be 64 characters long.")]
    TokenLength { actual: usize },

    /// Token has the right length but fails the accepted character pattern
    #[error("Invalid token specified.")]
    TokenFormat,

    /// Synchronous construction was attempted without a token
    #[error("A token is required; use JsonStore::connect to request one")]
    MissingToken,

    /// Requesting a fresh token from the remote failed
    #[error("Failed to acquire token: {0}")]
    TokenAcquisition(#[source] Box<StoreError>),

    /// Response envelope carried `ok: false`
    #[error("Non-ok response returned.")]
    NonOk,

    /// Network or HTTP client failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON, or a value failed to (de)serialize
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Path contains a `.` or `..` segment, which would be resolved away
    #[error("Invalid path segment in '{0}'")]
    InvalidPath(String),

    /// Host or call path did not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl StoreError {
    /// True for errors raised while building a client
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            StoreError::TokenLength { .. }
                | StoreError::TokenFormat
                | StoreError::MissingToken
                | StoreError::TokenAcquisition(_)
        )
    }

    /// True when the remote answered with `ok: false`
    pub fn is_non_ok(&self) -> bool {
        matches!(self, StoreError::NonOk)
    }

    /// True for network and body-decoding failures
    pub fn is_transport(&self) -> bool {
        matches!(self, StoreError::Http(_) | StoreError::Json(_))
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, StoreError>;
