//! Decoded response records for each analysis endpoint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sentiment scores for one text; the two scores sum to roughly 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "SentimentPair", into = "SentimentPair")]
pub struct Sentiment {
    pub negative: f64,
    pub positive: f64,
}

impl Sentiment {
    pub fn is_positive(&self) -> bool {
        self.positive > self.negative
    }
}

/// A sentiment pair as the service sends it: `[positive, negative]`.
#[derive(Serialize, Deserialize)]
struct SentimentPair(f64, f64);

impl From<SentimentPair> for Sentiment {
    fn from(SentimentPair(positive, negative): SentimentPair) -> Self {
        Self { negative, positive }
    }
}

impl From<Sentiment> for SentimentPair {
    fn from(s: Sentiment) -> Self {
        SentimentPair(s.positive, s.negative)
    }
}

/// A related term returned by `suggest`, e.g. `(0.46, "上海/ns")`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, String)", into = "(f64, String)")]
pub struct Suggestion {
    pub score: f64,
    /// Word and part-of-speech tag joined by `/`.
    pub term: String,
}

impl Suggestion {
    pub fn word(&self) -> &str {
        self.term
            .rsplit_once('/')
            .map(|(word, _)| word)
            .unwrap_or(&self.term)
    }

    pub fn tag(&self) -> Option<&str> {
        self.term.rsplit_once('/').map(|(_, tag)| tag)
    }
}

impl From<(f64, String)> for Suggestion {
    fn from((score, term): (f64, String)) -> Self {
        Self { score, term }
    }
}

impl From<Suggestion> for (f64, String) {
    fn from(s: Suggestion) -> Self {
        (s.score, s.term)
    }
}

/// A weighted keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, String)", into = "(f64, String)")]
pub struct Keyword {
    pub weight: f64,
    pub word: String,
}

impl From<(f64, String)> for Keyword {
    fn from((weight, word): (f64, String)) -> Self {
        Self { weight, word }
    }
}

impl From<Keyword> for (f64, String) {
    fn from(k: Keyword) -> Self {
        (k.weight, k.word)
    }
}

/// Segmentation with part-of-speech tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedText {
    pub word: Vec<String>,
    pub tag: Vec<String>,
}

/// Dependency parse of one sentence.
///
/// `head[i]` is the index of the token governing `word[i]`, or `-1` for the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyParse {
    pub word: Vec<String>,
    pub tag: Vec<String>,
    pub role: Vec<String>,
    pub head: Vec<i64>,
}

impl DependencyParse {
    /// Index of the root token.
    pub fn root(&self) -> Option<usize> {
        self.head.iter().position(|&h| h == -1)
    }
}

/// Token span `[start, end)` labelled with an entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(usize, usize, String)", into = "(usize, usize, String)")]
pub struct Entity {
    pub start: usize,
    pub end: usize,
    pub kind: String,
}

impl From<(usize, usize, String)> for Entity {
    fn from((start, end, kind): (usize, usize, String)) -> Self {
        Self { start, end, kind }
    }
}

impl From<Entity> for (usize, usize, String) {
    fn from(e: Entity) -> Self {
        (e.start, e.end, e.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntities {
    pub word: Vec<String>,
    pub tag: Vec<String>,
    pub entity: Vec<Entity>,
}

impl NamedEntities {
    /// Surface text of an entity, joining its tokens.
    pub fn entity_text(&self, entity: &Entity) -> Option<String> {
        self.word
            .get(entity.start..entity.end)
            .map(|words| words.concat())
    }
}

/// Result of `convert_time`.
///
/// Absolute expressions fill `timestamp` (`YYYY-MM-DD HH:MM:SS`); ranges and
/// durations come back under keys such as `timespan_0` or `timedelta`, kept in
/// `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeConversion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl TimeConversion {
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }
}

/// One group of near-duplicate texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterRecord {
    #[serde(rename = "_id")]
    pub id: u64,
    /// Number of member texts.
    pub num: usize,
    /// Content ids of the members.
    pub list: Vec<u64>,
}

/// A phrase attached to the content it was extracted from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, u64)", into = "(String, u64)")]
pub struct OpinionMention {
    pub phrase: String,
    pub content_id: u64,
}

impl From<(String, u64)> for OpinionMention {
    fn from((phrase, content_id): (String, u64)) -> Self {
        Self { phrase, content_id }
    }
}

impl From<OpinionMention> for (String, u64) {
    fn from(m: OpinionMention) -> Self {
        (m.phrase, m.content_id)
    }
}

/// One opinion group from comments analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentsRecord {
    #[serde(rename = "_id")]
    pub id: u64,
    pub opinion: String,
    pub num: usize,
    pub list: Vec<OpinionMention>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_sentiment_wire_order() {
        let parsed: Vec<Sentiment> =
            serde_json::from_value(json!([[0.12, 0.88], [0.97, 0.03]])).unwrap();
        assert_eq!(parsed[0].negative, 0.88);
        assert!(!parsed[0].is_positive());
        assert!(parsed[1].is_positive());
        assert_eq!(serde_json::to_value(parsed[1]).unwrap(), json!([0.97, 0.03]));
    }

    #[test]
    fn test_decode_ner() {
        let body = json!([{
            "entity": [[0, 2, "product_name"], [2, 3, "job_title"], [3, 4, "person_name"]],
            "tag": ["ns", "n", "n", "nr"],
            "word": ["成都", "商报", "记者", "姚永忠"]
        }]);
        let parsed: Vec<NamedEntities> = serde_json::from_value(body).unwrap();
        assert_eq!(parsed[0].entity.len(), 3);
        assert_eq!(parsed[0].entity[2].kind, "person_name");
        assert_eq!(
            parsed[0].entity_text(&parsed[0].entity[0]).as_deref(),
            Some("成都商报")
        );
    }

    #[test]
    fn test_decode_depparser_root() {
        let parse: DependencyParse = serde_json::from_value(json!({
            "tag": ["NT", "NN", "VA"],
            "role": ["TMP", "SBJ", "ROOT"],
            "head": [2, 2, -1],
            "word": ["今天", "天气", "好"]
        }))
        .unwrap();
        assert_eq!(parse.root(), Some(2));
    }

    #[test]
    fn test_suggestion_split() {
        let s: Suggestion = serde_json::from_value(json!([0.46, "上海/ns"])).unwrap();
        assert_eq!(s.word(), "上海");
        assert_eq!(s.tag(), Some("ns"));
    }

    #[test]
    fn test_decode_time_conversion_keeps_extra_keys() {
        let t: TimeConversion = serde_json::from_value(json!({
            "timestamp": "2013-02-28 16:30:29",
            "type": "timestamp"
        }))
        .unwrap();
        assert_eq!(t.timestamp.as_deref(), Some("2013-02-28 16:30:29"));
        assert_eq!(t.kind.as_deref(), Some("timestamp"));

        let span: TimeConversion = serde_json::from_value(json!({
            "timespan_0": ["2014-08-01 00:00:00", "2014-08-31 23:59:59"],
            "type": "timespan_0"
        }))
        .unwrap();
        assert!(span.timestamp.is_none());
        assert!(span.get("timespan_0").is_some());
    }

    #[test]
    fn test_decode_comments_record() {
        let rec: CommentsRecord = serde_json::from_value(json!({
            "_id": 0,
            "opinion": "天气 好",
            "num": 2,
            "list": [["天气好", 1], ["天气好", 2]]
        }))
        .unwrap();
        assert_eq!(rec.num, 2);
        assert_eq!(rec.list[1].content_id, 2);
    }
}
