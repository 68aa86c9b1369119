//! TfL Unified API stop point client.
//!
//! Finds public-transport stops around a coordinate using
//! `GET /StopPoint?stopTypes=..&lat=..&lon=..&radius=..`. Requests are
//! authenticated with an `app_id`/`app_key` pair in the query string.
//!
//! The API returns stops ordered by distance from the search point, so the
//! nearest `n` are simply the first `n` records.

mod client;
mod error;
mod types;

pub use client::{
    DEFAULT_RADIUS_METRES, DEFAULT_STOP_TYPES, TflClient, TflConfig, nearest,
};
pub use error::TflError;
pub use types::{StopPointDto, StopPointsResponse};
