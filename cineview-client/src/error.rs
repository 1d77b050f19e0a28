use thiserror::Error;

/// Result type for gateway operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the API gateway client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The session cookie is missing, expired, or rejected (HTTP 401).
    /// The application decides whether this redirects to login.
    #[error("session rejected by server")]
    Unauthorized,

    /// Any other non-success status. The server-provided message is kept
    /// so the page can show it inline.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// A successful response whose envelope reported failure.
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}
