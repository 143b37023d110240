use thiserror::Error;

/// Failures surfaced by [`crate::ApiClient`]. `Display` is the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-success status. `message` is the backend's `detail` when it sent one.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// Body was not JSON, or not a JSON object where one was required.
    #[error("Invalid response format from server")]
    InvalidResponse,
    /// The request never produced a response (connection refused, DNS, aborted body).
    #[error("{0}")]
    Network(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
