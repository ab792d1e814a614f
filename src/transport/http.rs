use super::codec::{encode_body, DEFAULT_COMPRESS_THRESHOLD};
use super::TransportError;
use crate::{Error, Result};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_ENCODING, CONTENT_TYPE};
use reqwest::{Method, Proxy};
use serde::de::DeserializeOwned;
use std::env;
use std::time::{Duration, Instant};
use tracing::debug;

/// Header carrying the API token on every request.
pub const TOKEN_HEADER: &str = "X-Token";

/// A successful (2xx) response from the service.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
    /// `Content-Encoding` that was applied to the request body, if any.
    pub request_encoding: Option<&'static str>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Blocking HTTP transport: signs, encodes and sends requests, and maps
/// non-2xx responses to [`Error::Http`].
pub struct HttpTransport {
    client: Client,
    base_url: String,
    token: String,
    compress_threshold: usize,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("compress_threshold", &self.compress_threshold)
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    pub fn new(
        base_url: &str,
        token: impl Into<String>,
        compress_threshold: usize,
        proxy_url: Option<&str>,
        user_agent: &str,
    ) -> Result<Self> {
        // No request-level timeout: waiting is bounded by the task polling policy.
        let mut builder = Client::builder()
            .timeout(None::<Duration>)
            .user_agent(user_agent.to_string());

        let proxy_url = proxy_url
            .map(str::to_string)
            .or_else(|| env::var("BOSON_PROXY_URL").ok());
        if let Some(proxy_url) = proxy_url {
            let proxy = Proxy::all(&proxy_url).map_err(|e| {
                Error::Transport(TransportError::Other(format!(
                    "invalid proxy url {}: {}",
                    proxy_url, e
                )))
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            compress_threshold,
        })
    }

    pub fn with_defaults(base_url: &str, token: impl Into<String>) -> Result<Self> {
        Self::new(
            base_url,
            token,
            DEFAULT_COMPRESS_THRESHOLD,
            None,
            crate::config::DEFAULT_USER_AGENT,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn compress_threshold(&self) -> usize {
        self.compress_threshold
    }

    /// Send one request and return the response if the status is 2xx.
    ///
    /// `body` is serialized as JSON and gzip-compressed above the configured
    /// threshold. Non-2xx statuses become [`Error::Http`] with the raw body.
    pub fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);
        let start = Instant::now();

        let mut req = self
            .client
            .request(method.clone(), &url)
            .header(TOKEN_HEADER, &self.token)
            .header(ACCEPT, "application/json");

        if !query.is_empty() {
            req = req.query(query);
        }

        let mut request_encoding = None;
        if let Some(body) = body {
            let encoded = encode_body(body, self.compress_threshold)?;
            request_encoding = encoded.content_encoding();
            req = req.header(CONTENT_TYPE, "application/json");
            if let Some(encoding) = request_encoding {
                req = req.header(CONTENT_ENCODING, encoding);
            }
            req = req.body(encoded.bytes);
        }

        let response = req.send().map_err(TransportError::Http)?;
        let status = response.status().as_u16();
        let text = response.text().map_err(TransportError::Http)?;

        debug!(
            method = method.as_str(),
            path,
            status,
            compressed = request_encoding.is_some(),
            duration_ms = start.elapsed().as_millis() as u64,
            "bosonnlp request finished"
        );

        if !(200..300).contains(&status) {
            return Err(Error::http(status, text));
        }

        Ok(ApiResponse {
            status,
            body: text,
            request_encoding,
        })
    }
}
