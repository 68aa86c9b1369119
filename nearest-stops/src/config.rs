//! Runtime configuration from environment variables.

use std::str::FromStr;

use tracing::warn;

use crate::postcodes::PostcodeConfig;
use crate::tfl::TflConfig;

/// Number of stops printed when `NEAREST_STOPS_COUNT` is unset.
pub const DEFAULT_STOP_COUNT: usize = 5;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything needed to run a lookup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub postcodes: PostcodeConfig,
    pub tfl: TflConfig,
    /// How many stops to print
    pub stop_count: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            postcodes: PostcodeConfig::default(),
            tfl: TflConfig::default(),
            stop_count: DEFAULT_STOP_COUNT,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// Recognised variables: `TFL_APP_ID`, `TFL_APP_KEY`,
    /// `POSTCODES_BASE_URL`, `TFL_BASE_URL`, `NEAREST_STOPS_COUNT` and
    /// `NEAREST_STOPS_TIMEOUT_SECS`. Unset or empty TfL credentials are
    /// warned about but not fatal.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let app_id = lookup("TFL_APP_ID").unwrap_or_default();
        let app_key = lookup("TFL_APP_KEY").unwrap_or_default();

        let timeout_secs = match parse_or(
            &lookup,
            "NEAREST_STOPS_TIMEOUT_SECS",
            DEFAULT_TIMEOUT_SECS,
        ) {
            0 => {
                warn!("NEAREST_STOPS_TIMEOUT_SECS must be greater than 0, using default");
                DEFAULT_TIMEOUT_SECS
            }
            secs => secs,
        };
        let stop_count = parse_or(&lookup, "NEAREST_STOPS_COUNT", DEFAULT_STOP_COUNT);

        let mut postcodes = PostcodeConfig::default().with_timeout(timeout_secs);
        if let Some(url) = lookup("POSTCODES_BASE_URL") {
            postcodes = postcodes.with_base_url(url);
        }

        let mut tfl = TflConfig::new(app_id, app_key).with_timeout(timeout_secs);
        if let Some(url) = lookup("TFL_BASE_URL") {
            tfl = tfl.with_base_url(url);
        }
        warn_if_missing_credentials(&tfl);

        Self {
            postcodes,
            tfl,
            stop_count,
        }
    }
}

/// Warn when either TfL credential is unset or empty. Returns whether both
/// are present.
fn warn_if_missing_credentials(tfl: &TflConfig) -> bool {
    if tfl.has_credentials() {
        return true;
    }
    warn!(
        app_id_set = !tfl.app_id.is_empty(),
        app_key_set = !tfl.app_key.is_empty(),
        "TFL_APP_ID or TFL_APP_KEY not set. TfL requests may be rejected."
    );
    false
}

/// Parse `key` with `FromStr`, falling back to `default` when unset or invalid.
fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(%key, value = %raw, %default, "Invalid value, using default");
            default
        }),
    }
}
