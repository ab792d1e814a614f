//! # bosonnlp
//!
//! 玻森中文语义开放平台（BosonNLP）的 Rust 客户端。
//!
//! Blocking Rust client for the BosonNLP Chinese NLP service.
//!
//! ## Overview
//!
//! The service exposes two kinds of functionality:
//!
//! - **Synchronous endpoints**: sentiment, classification, related-term
//!   suggestion, keywords, dependency parsing, NER, tagging, summarization and
//!   time normalization. Each is one HTTP round trip on [`BosonNlp`].
//! - **Tasks**: clustering and comments analysis run as remote jobs that are
//!   submitted, polled, fetched and cleared through [`task::Task`].
//!
//! Every request carries the API token; bodies over 10 KB are gzip-compressed;
//! non-2xx responses surface as [`Error::Http`] with the status code and raw
//! body. Nothing is retried automatically.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bosonnlp::BosonNlp;
//!
//! fn main() -> bosonnlp::Result<()> {
//!     let nlp = BosonNlp::new("YOUR_API_TOKEN")?;
//!
//!     let scores = nlp.sentiment(["再也不来了", "美好的世界"])?;
//!     assert!(scores[1].is_positive());
//!
//!     let clusters = nlp.cluster(["今天天气好", "今天天气好", "今天天气不错", "点点楼头细雨"])?;
//!     println!("largest cluster has {} members", clusters[0].num);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | The client, its builder and per-endpoint options |
//! | [`task`] | Cluster and comments task lifecycle and polling |
//! | [`types`] | Content inputs and decoded response records |
//! | [`transport`] | Signed blocking HTTP with gzip body encoding |
//! | [`config`] | YAML-loadable client configuration |
//! | [`error_code`] | HTTP status classification |

pub mod client;
pub mod config;
pub mod error_code;
pub mod task;
pub mod transport;
pub mod types;

pub use client::{BosonNlp, BosonNlpBuilder};
pub use config::ClientConfig;
pub use task::{ClusterTask, CommentsTask, PollPolicy, TaskStatus};
pub use types::{ContentInput, ContentItem, TextInput};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
