//! Geographic coordinates.

use std::fmt;

/// A WGS84 latitude/longitude pair, as returned by the geocoding service.
///
/// No range validation is applied: the value is whatever the geocoder
/// reported, and it is only ever passed straight on to the stop search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_lat_comma_lon() {
        let c = Coordinate::new(51.5, -0.1);
        assert_eq!(c.to_string(), "51.5,-0.1");
    }

    #[test]
    fn display_keeps_full_precision() {
        let c = Coordinate::new(51.501009, -0.141588);
        assert_eq!(c.to_string(), "51.501009,-0.141588");
    }
}
