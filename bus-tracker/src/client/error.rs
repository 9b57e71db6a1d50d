//! Bus API error types.

/// Errors that can occur when fetching from the bus read endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
