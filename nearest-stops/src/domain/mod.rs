//! Domain types for the stop lookup.
//!
//! Both types are plain values: nothing outlives a single run.

mod coordinate;
mod stop_point;

pub use coordinate::Coordinate;
pub use stop_point::StopPoint;
