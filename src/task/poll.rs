//! Polling policy, job status and the clock used while waiting.

use crate::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

/// Time source for the polling loop.
///
/// [`SystemClock`] really sleeps; tests substitute a clock that only advances
/// a counter.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
    fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// How `wait_until_complete` polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Delay before each status query.
    pub interval: Duration,
    /// Client-side deadline; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Double the interval after every third poll.
    pub backoff: bool,
    /// Upper bound for the interval when `backoff` is on.
    pub max_interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            timeout: Some(Duration::from_secs(30 * 60)),
            backoff: true,
            max_interval: Duration::from_secs(64),
        }
    }
}

impl PollPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self.max_interval = self.max_interval.max(interval);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    pub fn with_backoff(mut self, backoff: bool) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_max_interval(mut self, max_interval: Duration) -> Self {
        self.max_interval = max_interval;
        self
    }

    /// Interval to use after `polls` status queries, starting from `current`.
    pub(crate) fn next_interval(&self, current: Duration, polls: u32) -> Duration {
        if self.backoff && polls > 0 && polls % 3 == 0 && current < self.max_interval {
            current.saturating_mul(2).min(self.max_interval)
        } else {
            current
        }
    }
}

/// Job status reported by `GET /{kind}/status/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    Received,
    Running,
    Done,
    Error,
    NotFound,
    Other(String),
}

impl TaskStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "RECEIVED" => Self::Received,
            "RUNNING" => Self::Running,
            "DONE" => Self::Done,
            "ERROR" => Self::Error,
            "NOT FOUND" | "NOT_FOUND" => Self::NotFound,
            _ => Self::Other(raw.to_string()),
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Received => write!(f, "RECEIVED"),
            Self::Running => write!(f, "RUNNING"),
            Self::Done => write!(f, "DONE"),
            Self::Error => write!(f, "ERROR"),
            Self::NotFound => write!(f, "NOT FOUND"),
            Self::Other(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct StatusBody {
    status: String,
}

impl StatusBody {
    pub(crate) fn into_status(self) -> TaskStatus {
        TaskStatus::parse(&self.status)
    }
}

/// Block until `check` reports [`TaskStatus::Done`] or the deadline passes.
///
/// Each round sleeps for the current interval (never past the deadline) and
/// then calls `check` once. `ERROR` and `NOT FOUND` end the wait immediately.
pub(crate) fn poll_until_done<F>(
    policy: &PollPolicy,
    clock: &dyn Clock,
    task_id: &str,
    mut check: F,
) -> Result<u32>
where
    F: FnMut() -> Result<TaskStatus>,
{
    let start = clock.now();
    let mut interval = policy.interval;
    let mut polls = 0u32;

    loop {
        let elapsed = clock.now().saturating_duration_since(start);
        let delay = match policy.timeout {
            Some(timeout) => interval.min(timeout.saturating_sub(elapsed)),
            None => interval,
        };
        clock.sleep(delay);

        let status = check()?;
        polls += 1;
        debug!(task_id, polls, status = %status, "bosonnlp task status");
        match status {
            TaskStatus::Done => return Ok(polls),
            TaskStatus::Error => {
                return Err(Error::TaskFailed {
                    task_id: task_id.to_string(),
                })
            }
            TaskStatus::NotFound => {
                return Err(Error::TaskNotFound {
                    task_id: task_id.to_string(),
                })
            }
            TaskStatus::Received | TaskStatus::Running | TaskStatus::Other(_) => {}
        }

        let elapsed = clock.now().saturating_duration_since(start);
        if let Some(timeout) = policy.timeout {
            if elapsed >= timeout {
                return Err(Error::Timeout { elapsed });
            }
        }
        interval = policy.next_interval(interval, polls);
    }
}
