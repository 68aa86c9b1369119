//! Stop point projection.

use std::fmt;

/// A public-transport stop, reduced to the two fields we display.
///
/// # Examples
///
/// ```
/// use nearest_stops::domain::StopPoint;
///
/// let stop = StopPoint::new("490008660N", "Victoria Station");
/// assert_eq!(stop.to_string(), "Victoria Station");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopPoint {
    /// NaPTAN identifier of the stop.
    pub naptan_id: String,
    /// Human-readable stop name.
    pub common_name: String,
}

impl StopPoint {
    pub fn new(naptan_id: impl Into<String>, common_name: impl Into<String>) -> Self {
        Self {
            naptan_id: naptan_id.into(),
            common_name: common_name.into(),
        }
    }
}

impl fmt::Display for StopPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.common_name)
    }
}
