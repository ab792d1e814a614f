//! Task constructors and one-shot task helpers.

use super::core::BosonNlp;
use crate::task::{ClusterTask, CommentsTask, Task, TaskKind};
use crate::types::{ClusterRecord, CommentsRecord, ContentInput};
use crate::Result;

impl BosonNlp {
    /// An empty clustering task bound to this client.
    pub fn cluster_task(&self) -> ClusterTask<'_> {
        Task::new(self)
    }

    /// A clustering task pre-seeded with `contents`.
    pub fn create_cluster_task<I, T>(&self, contents: I) -> Result<ClusterTask<'_>>
    where
        I: IntoIterator<Item = T>,
        T: Into<ContentInput>,
    {
        Task::with_contents(self, contents)
    }

    /// An empty comments analysis task bound to this client.
    pub fn comments_task(&self) -> CommentsTask<'_> {
        Task::new(self)
    }

    /// A comments analysis task pre-seeded with `contents`.
    pub fn create_comments_task<I, T>(&self, contents: I) -> Result<CommentsTask<'_>>
    where
        I: IntoIterator<Item = T>,
        T: Into<ContentInput>,
    {
        Task::with_contents(self, contents)
    }

    /// Cluster `contents` in one call: submit, wait, fetch, clear.
    pub fn cluster<I, T>(&self, contents: I) -> Result<Vec<ClusterRecord>>
    where
        I: IntoIterator<Item = T>,
        T: Into<ContentInput>,
    {
        run_to_completion(self.create_cluster_task(contents)?)
    }

    /// Comments analysis of `contents` in one call: submit, wait, fetch, clear.
    pub fn comments<I, T>(&self, contents: I) -> Result<Vec<CommentsRecord>>
    where
        I: IntoIterator<Item = T>,
        T: Into<ContentInput>,
    {
        run_to_completion(self.create_comments_task(contents)?)
    }
}

fn run_to_completion<K: TaskKind>(mut task: Task<'_, K>) -> Result<Vec<K::Record>> {
    task.analysis()?;
    task.wait_until_complete()?;
    let records = task.result()?;
    task.clear()?;
    Ok(records)
}
