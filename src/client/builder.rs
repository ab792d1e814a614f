use crate::client::core::BosonNlp;
use crate::config::ClientConfig;
use crate::task::{Clock, PollPolicy, SystemClock};
use crate::transport::HttpTransport;
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use url::Url;

/// Builder for creating clients with custom configuration.
///
/// Only the API token is required; everything else defaults to
/// [`ClientConfig::default`].
pub struct BosonNlpBuilder {
    api_token: Option<String>,
    config: ClientConfig,
    poll_policy: Option<PollPolicy>,
    clock: Arc<dyn Clock>,
}

impl BosonNlpBuilder {
    pub fn new() -> Self {
        Self {
            api_token: None,
            config: ClientConfig::default(),
            poll_policy: None,
            clock: Arc::new(SystemClock),
        }
    }

    /// Start from a loaded configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Override the service base URL (primarily for testing with mock servers).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Bodies larger than `bytes` are sent gzip-compressed.
    pub fn compress_threshold(mut self, bytes: usize) -> Self {
        self.config.compress_threshold = bytes;
        self
    }

    pub fn proxy_url(mut self, proxy_url: impl Into<String>) -> Self {
        self.config.proxy_url = Some(proxy_url.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Default poll policy for tasks; takes precedence over `config.poll`.
    pub fn poll_policy(mut self, policy: PollPolicy) -> Self {
        self.poll_policy = Some(policy);
        self
    }

    /// Inject the clock used while polling.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn build(self) -> Result<BosonNlp> {
        let token = self
            .api_token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "API token required",
                    ErrorContext::new()
                        .with_field_path("api_token")
                        .with_source("client_builder"),
                )
            })?;

        let url = Url::parse(&self.config.base_url).map_err(|e| {
            Error::configuration_with_context(
                "invalid base URL",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(format!("{}: {}", self.config.base_url, e))
                    .with_source("client_builder"),
            )
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                "base URL must use http or https",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(url.scheme().to_string())
                    .with_source("client_builder"),
            ));
        }

        let poll_policy = match self.poll_policy {
            Some(policy) => policy,
            None => self.config.poll.to_policy()?,
        };

        let transport = HttpTransport::new(
            &self.config.base_url,
            token,
            self.config.compress_threshold,
            self.config.proxy_url.as_deref(),
            &self.config.user_agent,
        )?;

        Ok(BosonNlp {
            transport,
            poll_policy,
            clock: self.clock,
        })
    }
}

impl Default for BosonNlpBuilder {
    fn default() -> Self {
        Self::new()
    }
}
