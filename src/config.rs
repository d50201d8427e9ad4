use std::time::Duration;

use url::Url;

use crate::error::{PicaronesError, Result};
use crate::request::DEFAULT_LIMIT;

/// Backend address used when nothing else is configured. Matches the
/// development server's default port.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

pub const ENV_BASE_URL: &str = "PICARONES_BASE_URL";
pub const ENV_LIMIT: &str = "PICARONES_LIMIT";
pub const ENV_TIMEOUT_SECS: &str = "PICARONES_TIMEOUT_SECS";

/// Client settings. `timeout: None` means a single unbounded attempt;
/// there are no retries at any setting.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub default_limit: usize,
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_limit: DEFAULT_LIMIT,
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Read settings from `PICARONES_*` variables, falling back to the
    /// defaults. A malformed base URL is refused; malformed limit or
    /// timeout values are logged and ignored.
    pub fn from_env() -> Result<Self> {
        let mut config = ClientConfig::default();

        if let Ok(raw) = std::env::var(ENV_BASE_URL) {
            config.base_url = normalize_base_url(&raw)?;
        }

        if let Ok(raw) = std::env::var(ENV_LIMIT) {
            match raw.parse::<usize>() {
                Ok(limit) if limit > 0 => config.default_limit = limit,
                _ => tracing::warn!("Ignoring invalid {}={:?}", ENV_LIMIT, raw),
            }
        }

        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Some(Duration::from_secs(secs)),
                _ => tracing::warn!("Ignoring invalid {}={:?}", ENV_TIMEOUT_SECS, raw),
            }
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(self)
    }
}

/// Validate and canonicalize a base URL. Only http and https are accepted;
/// trailing slashes are stripped so endpoint paths concatenate cleanly.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed)
        .map_err(|e| PicaronesError::Config(format!("invalid base URL {:?}: {}", trimmed, e)))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(PicaronesError::Config(format!(
                "unsupported base URL scheme {:?} (expected http or https)",
                other
            )));
        }
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
