//! Client configuration.
//!
//! Every field has a default, so a YAML file only needs the keys it changes:
//!
//! ```yaml
//! base_url: http://api.bosonnlp.com
//! compress_threshold: 10240
//! poll:
//!   interval_secs: 1.0
//!   timeout_secs: 1800
//!   backoff: true
//!   max_interval_secs: 64
//! ```
//!
//! The API token is never read from this file.

use crate::task::PollPolicy;
use crate::transport::DEFAULT_COMPRESS_THRESHOLD;
use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://api.bosonnlp.com";
pub const DEFAULT_USER_AGENT: &str = concat!("bosonnlp-rust/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    /// Request bodies larger than this many bytes are gzip-compressed.
    pub compress_threshold: usize,
    pub poll: PollConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            compress_threshold: DEFAULT_COMPRESS_THRESHOLD,
            poll: PollConfig::default(),
            proxy_url: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }
}

/// Polling settings in seconds, as written in config files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    pub interval_secs: f64,
    /// `None` waits without a deadline.
    pub timeout_secs: Option<f64>,
    pub backoff: bool,
    pub max_interval_secs: f64,
}

impl Default for PollConfig {
    fn default() -> Self {
        let policy = PollPolicy::default();
        Self {
            interval_secs: policy.interval.as_secs_f64(),
            timeout_secs: policy.timeout.map(|t| t.as_secs_f64()),
            backoff: policy.backoff,
            max_interval_secs: policy.max_interval.as_secs_f64(),
        }
    }
}

impl PollConfig {
    pub fn to_policy(&self) -> Result<PollPolicy> {
        let interval = secs("poll.interval_secs", self.interval_secs)?;
        if interval.is_zero() {
            return Err(Error::configuration_with_context(
                "poll interval must be positive",
                ErrorContext::new().with_field_path("poll.interval_secs"),
            ));
        }
        let timeout = self
            .timeout_secs
            .map(|t| secs("poll.timeout_secs", t))
            .transpose()?;
        let max_interval = secs("poll.max_interval_secs", self.max_interval_secs)?;

        Ok(PollPolicy {
            interval,
            timeout,
            backoff: self.backoff,
            max_interval: max_interval.max(interval),
        })
    }
}

fn secs(field: &str, value: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(value).map_err(|e| {
        Error::configuration_with_context(
            "invalid duration",
            ErrorContext::new()
                .with_field_path(field)
                .with_details(format!("{}: {}", value, e)),
        )
    })
}
