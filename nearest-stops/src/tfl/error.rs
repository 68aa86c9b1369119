//! TfL client error types.

/// Errors that can occur when searching for stop points.
#[derive(Debug, thiserror::Error)]
pub enum TflError {
    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// Request failed or returned something other than JSON
    #[error("no response from TfL stop point search")]
    NoResponse,

    /// Response had no stop point list (usually an API error body)
    #[error("TfL response had no stop points: {}", .message.as_deref().unwrap_or("no message"))]
    MissingStopPoints { message: Option<String> },
}
