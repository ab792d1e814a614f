//! Blocking HTTP transport for the BosonNLP service.
//!
//! Every call carries the `X-Token` header; JSON bodies over 10 KB are sent
//! gzip-compressed with `Content-Encoding: gzip`. Non-2xx responses are turned
//! into [`crate::Error::Http`] and never retried.

pub mod codec;
pub mod http;

pub use codec::{encode_body, EncodedBody, DEFAULT_COMPRESS_THRESHOLD};
pub use http::{ApiResponse, HttpTransport, TOKEN_HEADER};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
