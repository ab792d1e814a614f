//! 异步任务模块：聚类与评论观点分析任务的提交、轮询、取结果与清理。
//!
//! # Task Module
//!
//! Clustering and comments analysis run as remote jobs. A [`Task`] buffers
//! content locally, submits it in one upload, polls the job status until it
//! is done (or a client-side deadline passes), fetches the records and
//! finally clears the job.
//!
//! ```text
//! EMPTY --push--> BUFFERED --analysis--> SUBMITTED --wait--> COMPLETE
//!   ^                                                           |
//!   +--------------------------- clear -------------------------+
//! ```
//!
//! The two variants, [`ClusterTask`] and [`CommentsTask`], differ only in the
//! endpoint family and the record type they decode.

mod core;
mod kind;
mod poll;

pub use self::core::{ClusterTask, CommentsTask, Task, TaskState};
pub use kind::{AnalysisOptions, Cluster, Comments, TaskKind};
pub use poll::{Clock, PollPolicy, SystemClock, TaskStatus};
