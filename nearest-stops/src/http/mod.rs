//! Shared JSON-over-HTTP GET helper.
//!
//! Both upstream APIs are plain `GET` + JSON. This module builds request
//! URLs and turns a response into a typed body, logging and swallowing any
//! failure so callers only ever see `Some(body)` or `None`.

mod builder;
mod client;
mod error;

pub use builder::{QueryParam, build_url};
pub use client::JsonClient;
pub use error::RequestError;
