//! postcodes.io HTTP client.

use std::time::Duration;

use tracing::{debug, instrument};

use crate::domain::Coordinate;
use crate::http::JsonClient;

use super::error::PostcodeError;
use super::types::PostcodeResponse;

/// Default base URL for postcodes.io.
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.postcodes.io";

/// Configuration for the postcode client.
#[derive(Debug, Clone)]
pub struct PostcodeConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for PostcodeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl PostcodeConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the postcodes.io lookup endpoint.
#[derive(Debug, Clone)]
pub struct PostcodeClient {
    json: JsonClient,
    base_url: String,
}

impl PostcodeClient {
    /// Create a new postcode client.
    pub fn new(config: PostcodeConfig) -> Result<Self, PostcodeError> {
        let json = JsonClient::new(Duration::from_secs(config.timeout_secs))?;

        Ok(Self {
            json,
            base_url: config.base_url,
        })
    }

    /// Resolve a postcode to coordinates.
    ///
    /// The postcode is sent as typed; postcodes.io itself tolerates
    /// lowercase and missing spaces.
    #[instrument(skip(self))]
    pub async fn locate(&self, postcode: &str) -> Result<Coordinate, PostcodeError> {
        let endpoint = format!("postcodes/{postcode}");

        let response: PostcodeResponse = self
            .json
            .get_json(&self.base_url, &endpoint, &[])
            .await
            .ok_or_else(|| PostcodeError::NoResponse {
                postcode: postcode.to_string(),
            })?;

        let coordinate = response.into_coordinate(postcode)?;
        debug!(%coordinate, "Resolved postcode");

        Ok(coordinate)
    }
}
