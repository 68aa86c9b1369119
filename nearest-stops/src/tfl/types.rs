//! TfL StopPoint response DTOs.

use serde::Deserialize;

use crate::domain::StopPoint;

/// Response from the `StopPoint` radius search.
///
/// On failure (bad credentials, rate limiting) TfL returns an error object
/// with a `message` and no `stopPoints`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointsResponse {
    /// Stops within the search radius, nearest first.
    pub stop_points: Option<Vec<StopPointDto>>,

    /// Error description from an error body.
    pub message: Option<String>,
}

/// Minimal DTO for a stop point - the record has many more fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointDto {
    pub naptan_id: String,
    pub common_name: String,
}

impl From<StopPointDto> for StopPoint {
    fn from(dto: StopPointDto) -> Self {
        StopPoint::new(dto.naptan_id, dto.common_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stop_points() {
        let json = r#"{
            "$type": "Tfl.Api.Presentation.Entities.StopPointsResponse, Tfl.Api.Presentation.Entities",
            "centrePoint": [51.501, -0.142],
            "stopPoints": [
                {
                    "$type": "Tfl.Api.Presentation.Entities.StopPoint, Tfl.Api.Presentation.Entities",
                    "naptanId": "490000252X",
                    "indicator": "Stop X",
                    "stopLetter": "X",
                    "modes": ["bus"],
                    "stopType": "NaptanPublicBusCoachTram",
                    "commonName": "Victoria Station",
                    "distance": 215.3,
                    "lat": 51.496,
                    "lon": -0.143
                }
            ],
            "pageSize": 0,
            "total": 1,
            "page": 0
        }"#;

        let response: StopPointsResponse = serde_json::from_str(json).unwrap();
        let stops = response.stop_points.unwrap();
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].naptan_id, "490000252X");
        assert_eq!(stops[0].common_name, "Victoria Station");
    }

    #[test]
    fn parses_error_body() {
        let json = r#"{
            "$type": "Tfl.Api.Presentation.Entities.ApiError, Tfl.Api.Presentation.Entities",
            "httpStatusCode": 401,
            "httpStatus": "Unauthorized",
            "message": "Invalid app_key provided."
        }"#;

        let response: StopPointsResponse = serde_json::from_str(json).unwrap();
        assert!(response.stop_points.is_none());
        assert_eq!(response.message.as_deref(), Some("Invalid app_key provided."));
    }

    #[test]
    fn projects_to_domain_stop() {
        let dto = StopPointDto {
            naptan_id: "490G00008660".into(),
            common_name: "Victoria Bus Station".into(),
        };
        assert_eq!(
            StopPoint::from(dto),
            StopPoint::new("490G00008660", "Victoria Bus Station")
        );
    }
}
