//! Geocoding error types.

/// Errors that can occur when resolving a postcode.
#[derive(Debug, thiserror::Error)]
pub enum PostcodeError {
    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// Request failed or returned something other than JSON
    #[error("no response from postcode service for {postcode}")]
    NoResponse { postcode: String },

    /// Service does not know the postcode
    #[error("postcode {postcode} not found: {message}")]
    NotFound { postcode: String, message: String },

    /// Postcode exists but has no coordinates
    #[error("postcode {postcode} has no coordinates")]
    MissingCoordinates { postcode: String },
}
