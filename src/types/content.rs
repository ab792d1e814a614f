//! Content items submitted to cluster and comments tasks.

use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};

/// One unit of task input: an integer id plus its text.
///
/// Serialized in the wire form the service expects: `{"_id": 1, "text": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "_id")]
    pub id: u64,
    pub text: String,
}

impl ContentItem {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// The forms a caller may hand content in.
///
/// Deserializes from a bare string, an `[id, text]` pair, or an
/// `{"_id": id, "text": text}` object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ContentInput {
    /// Text only; the id is assigned from the buffer position.
    Text(String),
    Pair(u64, String),
    Item(ContentItem),
}

impl From<&str> for ContentInput {
    fn from(text: &str) -> Self {
        ContentInput::Text(text.to_string())
    }
}

impl From<String> for ContentInput {
    fn from(text: String) -> Self {
        ContentInput::Text(text)
    }
}

impl From<&String> for ContentInput {
    fn from(text: &String) -> Self {
        ContentInput::Text(text.clone())
    }
}

impl From<(u64, &str)> for ContentInput {
    fn from((id, text): (u64, &str)) -> Self {
        ContentInput::Pair(id, text.to_string())
    }
}

impl From<(u64, String)> for ContentInput {
    fn from((id, text): (u64, String)) -> Self {
        ContentInput::Pair(id, text)
    }
}

impl From<ContentItem> for ContentInput {
    fn from(item: ContentItem) -> Self {
        ContentInput::Item(item)
    }
}

impl From<&ContentItem> for ContentInput {
    fn from(item: &ContentItem) -> Self {
        ContentInput::Item(item.clone())
    }
}

/// Resolve caller input into canonical items.
///
/// Bare strings are numbered `existing + 1`, `existing + 2`, ... by their
/// position in `inputs`, so a fresh buffer always starts at 1. Explicit ids
/// are kept as given, duplicates included.
pub fn normalize_contents<I, T>(inputs: I, existing: usize) -> Result<Vec<ContentItem>>
where
    I: IntoIterator<Item = T>,
    T: Into<ContentInput>,
{
    inputs
        .into_iter()
        .enumerate()
        .map(|(offset, input)| {
            let item = match input.into() {
                ContentInput::Text(text) => ContentItem::new((existing + offset + 1) as u64, text),
                ContentInput::Pair(id, text) => ContentItem::new(id, text),
                ContentInput::Item(item) => item,
            };
            validate_item(&item, existing + offset)?;
            Ok(item)
        })
        .collect()
}

fn validate_item(item: &ContentItem, position: usize) -> Result<()> {
    if item.id == 0 {
        return Err(Error::validation_with_context(
            "content id must be a positive integer",
            ErrorContext::new()
                .with_field_path(format!("contents[{}]._id", position))
                .with_source("normalize_contents"),
        ));
    }
    if item.text.is_empty() {
        return Err(Error::validation_with_context(
            "content text must not be empty",
            ErrorContext::new()
                .with_field_path(format!("contents[{}].text", position))
                .with_source("normalize_contents"),
        ));
    }
    Ok(())
}
