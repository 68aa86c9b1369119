//! Request URL construction.

use url::Url;

/// A single `name=value` query-string pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    pub name: String,
    pub value: String,
}

impl QueryParam {
    /// Create a parameter, rendering `value` with its `Display` impl.
    pub fn new(name: impl Into<String>, value: impl ToString) -> Self {
        Self {
            name: name.into(),
            value: value.to_string(),
        }
    }
}

/// Resolve `endpoint` against `base_url` and append `params` in order.
///
/// Resolution follows URL reference rules, so a relative `endpoint` replaces
/// the last path segment of a base without a trailing slash. Parameters are
/// form-urlencoded; with no parameters the URL carries no `?`.
///
/// # Examples
///
/// ```
/// use nearest_stops::http::{QueryParam, build_url};
///
/// let url = build_url("https://api.tfl.gov.uk", "StopPoint", &[QueryParam::new("lat", 51.5)])
///     .unwrap();
/// assert_eq!(url.as_str(), "https://api.tfl.gov.uk/StopPoint?lat=51.5");
/// ```
pub fn build_url(
    base_url: &str,
    endpoint: &str,
    params: &[QueryParam],
) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base_url)?.join(endpoint)?;

    if !params.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|p| (p.name.as_str(), p.value.as_str())));
    }

    Ok(url)
}
