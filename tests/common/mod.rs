//! Mock BosonNLP server and a clock that never really sleeps.

#![allow(dead_code)]

use bosonnlp::task::Clock;
use bosonnlp::BosonNlp;
use mockito::{Server, ServerGuard};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub const TOKEN: &str = "test-token";

pub const WEATHER: [&str; 7] = [
    "今天天气好",
    "今天天气好",
    "今天天气不错",
    "点点楼头细雨",
    "重重江外平湖",
    "当年戏马会东徐",
    "今日凄凉南浦",
];

/// Advances only when `sleep` is called, recording each delay.
pub struct ManualClock {
    base: Instant,
    offset: Mutex<Duration>,
    sleeps: Mutex<Vec<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
            sleeps: Mutex::new(Vec::new()),
        }
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }

    pub fn elapsed(&self) -> Duration {
        *self.offset.lock().unwrap()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + *self.offset.lock().unwrap()
    }

    fn sleep(&self, duration: Duration) {
        *self.offset.lock().unwrap() += duration;
        self.sleeps.lock().unwrap().push(duration);
    }
}

/// Test fixture that owns a mock server and a manual clock.
pub struct MockService {
    pub server: ServerGuard,
    pub clock: Arc<ManualClock>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            server: Server::new(),
            clock: Arc::new(ManualClock::new()),
        }
    }

    /// A client pointed at the mock server, polling on the manual clock.
    pub fn client(&self) -> BosonNlp {
        BosonNlp::builder()
            .api_token(TOKEN)
            .base_url(self.server.url())
            .clock(self.clock.clone())
            .build()
            .expect("Failed to build client")
    }
}

/// `[{"_id": 1, "text": ...}, ...]` for `texts`, numbered from 1.
pub fn items_json(texts: &[&str]) -> serde_json::Value {
    serde_json::Value::Array(
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| serde_json::json!({"_id": i + 1, "text": t}))
            .collect(),
    )
}
