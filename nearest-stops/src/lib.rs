//! Nearest public-transport stops to a UK postcode.
//!
//! Resolves a postcode to coordinates with postcodes.io, then asks the TfL
//! Unified API for the bus, coach and tram stops around it.

pub mod config;
pub mod console;
pub mod domain;
pub mod http;
pub mod postcodes;
pub mod runner;
pub mod tfl;
