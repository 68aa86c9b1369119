//! The postcode → coordinates → nearest stops pipeline.

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::config::AppConfig;
use crate::console::{display_stop_points, prompt_for_postcode};
use crate::domain::StopPoint;
use crate::postcodes::{PostcodeClient, PostcodeError};
use crate::tfl::{TflClient, TflError};

/// Errors that end a run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("geocoding failed: {0}")]
    Postcode(#[from] PostcodeError),

    #[error("stop search failed: {0}")]
    Tfl(#[from] TflError),

    #[error("console I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Looks up the stops nearest to a postcode.
#[derive(Debug, Clone)]
pub struct StopFinder {
    postcodes: PostcodeClient,
    tfl: TflClient,
}

impl StopFinder {
    /// Build both API clients from configuration.
    pub fn new(config: &AppConfig) -> Result<Self, RunError> {
        let postcodes = PostcodeClient::new(config.postcodes.clone())?;
        let tfl = TflClient::new(config.tfl.clone())?;
        Ok(Self::from_clients(postcodes, tfl))
    }

    pub fn from_clients(postcodes: PostcodeClient, tfl: TflClient) -> Self {
        Self { postcodes, tfl }
    }

    /// Geocode `postcode`, then fetch the `count` nearest stops to it.
    pub async fn find_nearest(
        &self,
        postcode: &str,
        count: usize,
    ) -> Result<Vec<StopPoint>, RunError> {
        let location = self.postcodes.locate(postcode).await?;
        info!(%postcode, %location, "Searching for nearby stops");

        let stop_points = self.tfl.nearest_stop_points(location, count).await?;
        info!(found = stop_points.len(), "Stop search complete");

        Ok(stop_points)
    }
}

/// Prompt for a postcode on `input`, then print the nearest stops to `output`.
pub async fn run<R: BufRead, W: Write>(
    finder: &StopFinder,
    input: R,
    mut output: W,
    count: usize,
) -> Result<Vec<StopPoint>, RunError> {
    let postcode = prompt_for_postcode(input, &mut output)?;
    let stop_points = finder.find_nearest(&postcode, count).await?;
    display_stop_points(&mut output, &stop_points)?;
    Ok(stop_points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finder_from_default_config() {
        assert!(StopFinder::new(&AppConfig::default()).is_ok());
    }

    #[test]
    fn error_display() {
        let err = RunError::from(TflError::NoResponse);
        assert_eq!(
            err.to_string(),
            "stop search failed: no response from TfL stop point search"
        );

        let err = RunError::from(PostcodeError::MissingCoordinates {
            postcode: "GY1 1AA".into(),
        });
        assert_eq!(
            err.to_string(),
            "geocoding failed: postcode GY1 1AA has no coordinates"
        );
    }
}
