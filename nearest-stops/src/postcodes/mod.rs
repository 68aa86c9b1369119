//! postcodes.io geocoding client.
//!
//! Resolves a UK postcode to the latitude/longitude of its centroid. The
//! service answers `GET /postcodes/{postcode}` with a JSON envelope whose
//! `result` is absent (and `error` set) when the postcode is unknown.

mod client;
mod error;
mod types;

pub use client::{PostcodeClient, PostcodeConfig};
pub use error::PostcodeError;
pub use types::{PostcodeResponse, PostcodeResult};
