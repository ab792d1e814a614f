//! Synchronous analysis endpoints.
//!
//! Each method is one HTTP round trip. Batch-capable methods take a
//! [`TextInput`] and return one record per text in input order; the service
//! caps a batch at 100 texts and answers larger ones with 413, which comes
//! back as [`Error::Http`] unchanged.

use super::core::BosonNlp;
use super::options::{BaseTime, SentimentModel, SummaryOptions, TagOptions};
use crate::types::{
    DependencyParse, Keyword, NamedEntities, Sentiment, Suggestion, TaggedText, TextInput,
    TimeConversion,
};
use crate::{Error, ErrorContext, Result};
use reqwest::Method;
use serde_json::json;

/// Largest batch the service accepts in one call.
pub const MAX_BATCH_SIZE: usize = 100;

impl BosonNlp {
    /// Negative/positive scores per text, using the general model.
    pub fn sentiment(&self, texts: impl Into<TextInput>) -> Result<Vec<Sentiment>> {
        self.sentiment_with_model(texts, SentimentModel::General)
    }

    pub fn sentiment_with_model(
        &self,
        texts: impl Into<TextInput>,
        model: SentimentModel,
    ) -> Result<Vec<Sentiment>> {
        let texts = texts.into();
        let path = format!("/sentiment/analysis?{}", model.as_str());
        self.post_json(&path, &[], &texts.to_json())
    }

    /// News category id per text.
    pub fn classify(&self, texts: impl Into<TextInput>) -> Result<Vec<i64>> {
        let texts = texts.into();
        self.post_json("/classify/analysis", &[], &texts.to_json())
    }

    /// The `top_k` terms most related to `term`, by descending score.
    pub fn suggest(&self, term: &str, top_k: usize) -> Result<Vec<Suggestion>> {
        self.post_json(
            "/suggest/analysis",
            &[("top_k", top_k.to_string())],
            &json!(term),
        )
    }

    /// The `top_k` highest-weighted keywords of `text`.
    pub fn extract_keywords(&self, text: &str, top_k: usize) -> Result<Vec<Keyword>> {
        self.post_json(
            "/keywords/analysis",
            &[("top_k", top_k.to_string())],
            &json!(text),
        )
    }

    pub fn depparser(&self, texts: impl Into<TextInput>) -> Result<Vec<DependencyParse>> {
        let texts = texts.into();
        self.post_json("/depparser/analysis", &[], &texts.to_json())
    }

    /// Named entity recognition. Higher `sensitivity` (1–4) favors recall
    /// over precision.
    pub fn ner(&self, texts: impl Into<TextInput>, sensitivity: u8) -> Result<Vec<NamedEntities>> {
        if !(1..=4).contains(&sensitivity) {
            return Err(Error::validation_with_context(
                "sensitivity out of range",
                ErrorContext::new()
                    .with_field_path("ner.sensitivity")
                    .with_details(format!("expected 1..=4, got {}", sensitivity)),
            ));
        }
        let texts = texts.into();
        self.post_json(
            "/ner/analysis",
            &[("sensitivity", sensitivity.to_string())],
            &texts.to_json(),
        )
    }

    /// Word segmentation and part-of-speech tagging with default options.
    pub fn tag(&self, texts: impl Into<TextInput>) -> Result<Vec<TaggedText>> {
        self.tag_with(texts, &TagOptions::default())
    }

    pub fn tag_with(
        &self,
        texts: impl Into<TextInput>,
        options: &TagOptions,
    ) -> Result<Vec<TaggedText>> {
        let texts = texts.into();
        self.post_json("/tag/analysis", &options.query(), &texts.to_json())
    }

    /// Extractive summary with the default 30% length ratio.
    ///
    /// `word_limit` below 1 is a ratio of the content length, 1 or more an
    /// absolute length; the service judges the value.
    pub fn summary(&self, title: &str, content: &str) -> Result<String> {
        self.summary_with(title, content, &SummaryOptions::default())
    }

    pub fn summary_with(
        &self,
        title: &str,
        content: &str,
        options: &SummaryOptions,
    ) -> Result<String> {
        let body = json!({
            "not_exceed": u8::from(options.not_exceed),
            "percentage": options.word_limit,
            "title": title,
            "content": content,
        });
        self.post_json("/summary/analysis", &[], &body)
    }

    /// Normalize a Chinese time expression relative to now.
    pub fn convert_time(&self, expression: &str) -> Result<TimeConversion> {
        self.request_time(expression, None)
    }

    /// Normalize a Chinese time expression relative to `basetime`.
    pub fn convert_time_with_base(
        &self,
        expression: &str,
        basetime: impl Into<BaseTime>,
    ) -> Result<TimeConversion> {
        self.request_time(expression, Some(basetime.into()))
    }

    fn request_time(&self, expression: &str, basetime: Option<BaseTime>) -> Result<TimeConversion> {
        let mut query = vec![("pattern", expression.to_string())];
        if let Some(base) = basetime {
            query.push(("basetime", base.epoch_seconds().to_string()));
        }
        self.api_request(Method::POST, "/time/analysis", &query, None)?
            .json()
    }
}
