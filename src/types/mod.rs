//! 类型模块：请求输入与各分析接口的响应记录。
//!
//! # Types Module
//!
//! Strongly-typed inputs and decoded outputs for every BosonNLP endpoint.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TextInput`] | One text or a batch of texts for the synchronous endpoints |
//! | [`ContentInput`] | Caller form of task content: text, `(id, text)`, or item |
//! | [`ContentItem`] | Canonical `{_id, text}` task content |
//! | [`Sentiment`] | Negative/positive score pair |
//! | [`NamedEntities`] | Tokens, tags and entity spans |
//! | [`DependencyParse`] | Tokens, tags, roles and head indices |
//! | [`ClusterRecord`] / [`CommentsRecord`] | Task results |
//!
//! ## Example
//!
//! ```rust
//! use bosonnlp::types::{normalize_contents, ContentInput, ContentItem};
//!
//! let items = normalize_contents(
//!     vec![
//!         ContentInput::from("今天天气好"),
//!         ContentInput::from((2u64, "今天天气不错")),
//!         ContentInput::from(ContentItem::new(3, "点点楼头细雨")),
//!     ],
//!     0,
//! )
//! .unwrap();
//! assert_eq!(items[0], ContentItem::new(1, "今天天气好"));
//! ```

pub mod content;
pub mod records;
pub mod text;

pub use content::{normalize_contents, ContentInput, ContentItem};
pub use records::{
    ClusterRecord, CommentsRecord, DependencyParse, Entity, Keyword, NamedEntities,
    OpinionMention, Sentiment, Suggestion, TaggedText, TimeConversion,
};
pub use text::TextInput;
