//! Text arguments for the batch-capable endpoints.

/// One text or an ordered batch of texts.
///
/// Endpoints always answer with one record per text, in input order, so a
/// single text yields a one-element result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput(Vec<String>);

impl TextInput {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    pub(crate) fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(self.0.clone())
    }
}

impl From<&str> for TextInput {
    fn from(text: &str) -> Self {
        TextInput(vec![text.to_string()])
    }
}

impl From<String> for TextInput {
    fn from(text: String) -> Self {
        TextInput(vec![text])
    }
}

impl From<Vec<String>> for TextInput {
    fn from(texts: Vec<String>) -> Self {
        TextInput(texts)
    }
}

impl From<Vec<&str>> for TextInput {
    fn from(texts: Vec<&str>) -> Self {
        TextInput(texts.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for TextInput {
    fn from(texts: &[&str]) -> Self {
        TextInput(texts.iter().map(|t| t.to_string()).collect())
    }
}

impl From<&[String]> for TextInput {
    fn from(texts: &[String]) -> Self {
        TextInput(texts.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for TextInput {
    fn from(texts: [&str; N]) -> Self {
        TextInput(texts.iter().map(|t| t.to_string()).collect())
    }
}
