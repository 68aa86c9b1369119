//! postcodes.io response DTOs.

use serde::Deserialize;

use crate::domain::Coordinate;

use super::error::PostcodeError;

/// Envelope returned by `GET /postcodes/{postcode}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PostcodeResponse {
    /// Lookup result; absent when the postcode was not found.
    pub result: Option<PostcodeResult>,

    /// Error description, e.g. "Invalid postcode".
    pub error: Option<String>,
}

/// The coordinates of a postcode record - the record has many more fields.
///
/// Coordinates are null for postcodes without a grid reference
/// (some terminated or Channel Islands postcodes).
#[derive(Debug, Clone, Deserialize)]
pub struct PostcodeResult {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PostcodeResponse {
    /// Extract the coordinate for `postcode` from this response.
    pub fn into_coordinate(self, postcode: &str) -> Result<Coordinate, PostcodeError> {
        let Some(result) = self.result else {
            return Err(PostcodeError::NotFound {
                postcode: postcode.to_string(),
                message: self.error.unwrap_or_else(|| "no result".to_string()),
            });
        };

        match (result.latitude, result.longitude) {
            (Some(latitude), Some(longitude)) => Ok(Coordinate::new(latitude, longitude)),
            _ => Err(PostcodeError::MissingCoordinates {
                postcode: postcode.to_string(),
            }),
        }
    }
}
