//! TfL StopPoint HTTP client.

use std::time::Duration;

use tracing::{debug, instrument, warn};

use crate::domain::{Coordinate, StopPoint};
use crate::http::{JsonClient, QueryParam};

use super::error::TflError;
use super::types::{StopPointDto, StopPointsResponse};

/// Default base URL for the TfL Unified API.
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Search radius around the coordinate, in metres.
pub const DEFAULT_RADIUS_METRES: u32 = 1000;

/// Bus, coach and tram stops.
pub const DEFAULT_STOP_TYPES: &str = "NaptanPublicBusCoachTram";

/// Configuration for the TfL client.
#[derive(Debug, Clone)]
pub struct TflConfig {
    /// Application id sent as `app_id`
    pub app_id: String,
    /// Application key sent as `app_key`
    pub app_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Search radius in metres
    pub radius_metres: u32,
    /// Comma-separated NaPTAN stop types to include
    pub stop_types: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TflConfig {
    /// Create a new config with the given credentials.
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            radius_metres: DEFAULT_RADIUS_METRES,
            stop_types: DEFAULT_STOP_TYPES.to_string(),
            timeout_secs: 30,
        }
    }

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

    /// Whether both `app_id` and `app_key` are set.
    pub fn has_credentials(&self) -> bool {
        !self.app_id.is_empty() && !self.app_key.is_empty()
    }
}

impl Default for TflConfig {
    fn default() -> Self {
        Self::new("", "")
    }
}

/// Client for the TfL StopPoint radius search.
#[derive(Debug, Clone)]
pub struct TflClient {
    json: JsonClient,
    config: TflConfig,
}

impl TflClient {
    /// Create a new TfL client.
    pub fn new(config: TflConfig) -> Result<Self, TflError> {
        let json = JsonClient::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self { json, config })
    }

    /// Find the `count` nearest stop points to `at`.
    ///
    /// Returns fewer than `count` stops when fewer lie within the radius.
    #[instrument(skip(self))]
    pub async fn nearest_stop_points(
        &self,
        at: Coordinate,
        count: usize,
    ) -> Result<Vec<StopPoint>, TflError> {
        let params = self.search_params(at);

        let response: StopPointsResponse = self
            .json
            .get_json(&self.config.base_url, "StopPoint", &params)
            .await
            .ok_or(TflError::NoResponse)?;

        let Some(stop_points) = response.stop_points else {
            warn!(message = ?response.message, "StopPoint response without stop points");
            return Err(TflError::MissingStopPoints {
                message: response.message,
            });
        };

        debug!(found = stop_points.len(), count, "Received stop points");

        Ok(nearest(stop_points, count))
    }

    fn search_params(&self, at: Coordinate) -> Vec<QueryParam> {
        vec![
            QueryParam::new("stopTypes", &self.config.stop_types),
            QueryParam::new("lat", at.latitude),
            QueryParam::new("lon", at.longitude),
            QueryParam::new("radius", self.config.radius_metres),
            QueryParam::new("app_id", &self.config.app_id),
            QueryParam::new("app_key", &self.config.app_key),
        ]
    }
}

/// Keep the first `count` records, in the order received.
///
/// The provider's order is trusted; no re-sorting by distance is done.
pub fn nearest(stop_points: Vec<StopPointDto>, count: usize) -> Vec<StopPoint> {
    stop_points
        .into_iter()
        .take(count)
        .map(StopPoint::from)
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;

    use proptest::prelude::*;

    fn arb_dto() -> impl Strategy<Value = StopPointDto> {
        ("[0-9]{9}", "[A-Za-z ]{1,20}").prop_map(|(naptan_id, common_name)| StopPointDto {
            naptan_id,
            common_name,
        })
    }

    proptest! {
        /// The result is always the prefix of length min(count, len).
        #[test]
        fn nearest_is_prefix(
            dtos in proptest::collection::vec(arb_dto(), 0..20),
            count in 0usize..25,
        ) {
            let expected: Vec<StopPoint> = dtos
                .iter()
                .take(count)
                .cloned()
                .map(StopPoint::from)
                .collect();

            let stops = nearest(dtos.clone(), count);

            prop_assert_eq!(stops.len(), count.min(dtos.len()));
            prop_assert_eq!(stops, expected);
        }
    }
}
