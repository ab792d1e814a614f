//! BosonNLP client.
//!
//! [`BosonNlp`] is the entry point: the synchronous analysis endpoints live in
//! `analysis`, the task factories in `tasks`. Construction goes through
//! [`BosonNlpBuilder`].

mod analysis;
pub mod builder;
pub mod core;
pub mod options;
mod tasks;

pub use analysis::MAX_BATCH_SIZE;
pub use builder::BosonNlpBuilder;
pub use self::core::BosonNlp;
pub use options::{BaseTime, SentimentModel, SummaryOptions, TagOptions};
