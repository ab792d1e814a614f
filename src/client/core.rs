use crate::task::{Clock, PollPolicy};
use crate::transport::{ApiResponse, HttpTransport};
use crate::Result;
use reqwest::Method;
use std::sync::Arc;

use super::builder::BosonNlpBuilder;

/// BosonNLP API client.
///
/// Holds the signed transport and the default poll policy; it keeps no
/// per-call state, so one instance can back any number of tasks.
pub struct BosonNlp {
    pub(crate) transport: HttpTransport,
    pub(crate) poll_policy: PollPolicy,
    pub(crate) clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for BosonNlp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BosonNlp")
            .field("transport", &self.transport)
            .field("poll_policy", &self.poll_policy)
            .finish_non_exhaustive()
    }
}

impl BosonNlp {
    /// Client for the public service with default settings.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        BosonNlpBuilder::new().api_token(token).build()
    }

    pub fn builder() -> BosonNlpBuilder {
        BosonNlpBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Default policy for tasks created from this client.
    pub fn poll_policy(&self) -> PollPolicy {
        self.poll_policy
    }

    pub(crate) fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Send a raw request to `path` (e.g. `/sentiment/analysis`).
    ///
    /// This is the primitive every endpoint method goes through: the token is
    /// attached, large bodies are gzip-compressed, and non-2xx responses come
    /// back as [`crate::Error::Http`].
    pub fn api_request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<ApiResponse> {
        self.transport.request(method, path, query, body)
    }

    pub(crate) fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &serde_json::Value,
    ) -> Result<T> {
        self.api_request(Method::POST, path, query, Some(body))?
            .json()
    }
}
