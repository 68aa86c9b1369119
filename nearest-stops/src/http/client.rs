//! JSON GET client.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use super::builder::{QueryParam, build_url};
use super::error::RequestError;

/// Maximum number of body characters kept in a parse error.
const BODY_EXCERPT_CHARS: usize = 500;

/// Thin wrapper over `reqwest::Client` for unauthenticated JSON GETs.
#[derive(Debug, Clone)]
pub struct JsonClient {
    http: reqwest::Client,
}

impl JsonClient {
    /// Create a client whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// GET `endpoint` relative to `base_url` and parse the body as `T`.
    ///
    /// The body is parsed whatever the status code, since both upstream
    /// services describe their errors in JSON. Any failure to build the URL,
    /// reach the server or parse the body is logged and yields `None`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        base_url: &str,
        endpoint: &str,
        params: &[QueryParam],
    ) -> Option<T> {
        match self.try_get_json(base_url, endpoint, params).await {
            Ok(body) => Some(body),
            Err(e) => {
                error!(error = %e, %base_url, %endpoint, "GET request failed");
                None
            }
        }
    }

    async fn try_get_json<T: DeserializeOwned>(
        &self,
        base_url: &str,
        endpoint: &str,
        params: &[QueryParam],
    ) -> Result<T, RequestError> {
        let url = build_url(base_url, endpoint, params)?;

        // The query string carries credentials, so only the path is logged
        debug!(host = ?url.host_str(), path = url.path(), "Sending GET request");

        // reqwest errors embed the full URL, query string included
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = response.status();

        if !status.is_success() {
            warn!(status = status.as_u16(), %endpoint, "Non-success status, parsing body anyway");
        }

        let body = response.text().await.map_err(reqwest::Error::without_url)?;

        serde_json::from_str(&body).map_err(|e| RequestError::Json {
            message: e.to_string(),
            body: body.chars().take(BODY_EXCERPT_CHARS).collect(),
        })
    }
}
