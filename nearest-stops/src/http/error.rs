//! Request helper error types.

/// Why a GET request produced no body.
///
/// These never leave [`JsonClient::get_json`](super::JsonClient::get_json);
/// they exist so the failure can be logged with its cause.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Base URL or endpoint could not be parsed
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message} (body: {body})")]
    Json { message: String, body: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RequestError::Json {
            message: "expected value at line 1 column 1".into(),
            body: "<html>".into(),
        };
        assert_eq!(
            err.to_string(),
            "JSON parse error: expected value at line 1 column 1 (body: <html>)"
        );

        let err = RequestError::from(url::ParseError::RelativeUrlWithoutBase);
        assert!(err.to_string().starts_with("invalid URL"));
    }
}
