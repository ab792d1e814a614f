//! Per-endpoint options.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use std::time::{SystemTime, UNIX_EPOCH};

/// Domain model used by sentiment analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentimentModel {
    #[default]
    General,
    Auto,
    Kitchen,
    Food,
    News,
    Weibo,
    Reduction,
}

impl SentimentModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auto => "auto",
            Self::Kitchen => "kitchen",
            Self::Food => "food",
            Self::News => "news",
            Self::Weibo => "weibo",
            Self::Reduction => "reduction",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let model = match s {
            "general" => Self::General,
            "auto" => Self::Auto,
            "kitchen" => Self::Kitchen,
            "food" => Self::Food,
            "news" => Self::News,
            "weibo" => Self::Weibo,
            "reduction" => Self::Reduction,
            _ => return None,
        };
        Some(model)
    }
}

/// Tokenizer settings for `tag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagOptions {
    /// Whitespace handling, 0–3.
    pub space_mode: u8,
    /// Out-of-vocabulary recognition level, 0–4.
    pub oov_level: u8,
    /// Convert traditional characters to simplified.
    pub t2s: bool,
    /// Normalize special characters.
    pub special_char_conv: bool,
}

impl Default for TagOptions {
    fn default() -> Self {
        Self {
            space_mode: 0,
            oov_level: 3,
            t2s: false,
            special_char_conv: false,
        }
    }
}

impl TagOptions {
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("space_mode", self.space_mode.to_string()),
            ("oov_level", self.oov_level.to_string()),
            ("t2s", u8::from(self.t2s).to_string()),
            ("special_char_conv", u8::from(self.special_char_conv).to_string()),
        ]
    }
}

/// Length control for `summary`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryOptions {
    /// Below 1: fraction of the content length. 1 or more: absolute length.
    pub word_limit: f64,
    /// Never exceed `word_limit`, even by part of a sentence.
    pub not_exceed: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            word_limit: 0.3,
            not_exceed: false,
        }
    }
}

impl SummaryOptions {
    pub fn new(word_limit: f64, not_exceed: bool) -> Self {
        Self {
            word_limit,
            not_exceed,
        }
    }
}

/// Reference time for `convert_time`, sent as epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseTime(pub i64);

impl BaseTime {
    pub fn epoch_seconds(&self) -> i64 {
        self.0
    }
}

impl From<i64> for BaseTime {
    fn from(secs: i64) -> Self {
        BaseTime(secs)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for BaseTime {
    fn from(dt: DateTime<Tz>) -> Self {
        BaseTime(dt.timestamp())
    }
}

/// Naive values are read as local time.
impl From<NaiveDateTime> for BaseTime {
    fn from(naive: NaiveDateTime) -> Self {
        let secs = Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.timestamp())
            .unwrap_or_else(|| naive.and_utc().timestamp());
        BaseTime(secs)
    }
}

impl From<SystemTime> for BaseTime {
    fn from(t: SystemTime) -> Self {
        let secs = match t.duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs() as i64,
            Err(e) => -(e.duration().as_secs() as i64),
        };
        BaseTime(secs)
    }
}
