use super::kind::{AnalysisOptions, Cluster, Comments, TaskKind};
use super::poll::{poll_until_done, PollPolicy, StatusBody, TaskStatus};
use crate::client::BosonNlp;
use crate::types::{normalize_contents, ContentInput, ContentItem};
use crate::{Error, ErrorContext, Result};
use reqwest::Method;
use std::fmt;
use std::marker::PhantomData;
use tracing::info;
use uuid::Uuid;

/// Where a task is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// No content buffered.
    Empty,
    /// Content buffered, not yet submitted.
    Buffered,
    /// Submitted and analysis triggered; completion not yet observed.
    Submitted,
    /// The service reported the job as done.
    Complete,
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaskState::Empty => "empty",
            TaskState::Buffered => "buffered",
            TaskState::Submitted => "submitted",
            TaskState::Complete => "complete",
        };
        f.write_str(name)
    }
}

/// A remote analysis job: buffer content, submit, wait, fetch, clear.
///
/// ```rust,no_run
/// use bosonnlp::BosonNlp;
///
/// # fn main() -> bosonnlp::Result<()> {
/// let nlp = BosonNlp::new("YOUR_API_TOKEN")?;
/// let mut task = nlp.create_cluster_task(["今天天气好", "今天天气好", "今天天气不错"])?;
/// task.analysis()?;
/// task.wait_until_complete()?;
/// let clusters = task.result()?;
/// task.clear()?;
/// println!("{} clusters", clusters.len());
/// # Ok(())
/// # }
/// ```
pub struct Task<'a, K: TaskKind> {
    client: &'a BosonNlp,
    contents: Vec<ContentItem>,
    task_id: Option<String>,
    state: TaskState,
    options: AnalysisOptions,
    policy: PollPolicy,
    _kind: PhantomData<K>,
}

pub type ClusterTask<'a> = Task<'a, Cluster>;
pub type CommentsTask<'a> = Task<'a, Comments>;

impl<'a, K: TaskKind> fmt::Debug for Task<'a, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("kind", &K::ENDPOINT)
            .field("task_id", &self.task_id)
            .field("state", &self.state)
            .field("contents", &self.contents.len())
            .finish()
    }
}

impl<'a, K: TaskKind> Task<'a, K> {
    /// An empty task bound to `client`, polling with the client's policy.
    pub fn new(client: &'a BosonNlp) -> Self {
        Self {
            client,
            contents: Vec::new(),
            task_id: None,
            state: TaskState::Empty,
            options: AnalysisOptions::default(),
            policy: client.poll_policy(),
            _kind: PhantomData,
        }
    }

    /// A task pre-seeded with `contents`.
    pub fn with_contents<I, T>(client: &'a BosonNlp, contents: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<ContentInput>,
    {
        let mut task = Self::new(client);
        task.push(contents)?;
        Ok(task)
    }

    pub fn with_options(mut self, options: AnalysisOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_poll_policy(mut self, policy: PollPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn contents(&self) -> &[ContentItem] {
        &self.contents
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Remote job id, assigned by [`Task::analysis`].
    pub fn task_id(&self) -> Option<&str> {
        self.task_id.as_deref()
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    pub fn poll_policy(&self) -> &PollPolicy {
        &self.policy
    }

    /// Append content to the local buffer.
    ///
    /// Bare texts are numbered after the items already buffered. Pushing is
    /// only allowed before submission; call [`Task::clear`] to start over.
    pub fn push<I, T>(&mut self, contents: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<ContentInput>,
    {
        if matches!(self.state, TaskState::Submitted | TaskState::Complete) {
            return Err(Error::InvalidState {
                operation: "push",
                state: self.state,
            });
        }
        let items = normalize_contents(contents, self.contents.len())?;
        self.contents.extend(items);
        if !self.contents.is_empty() {
            self.state = TaskState::Buffered;
        }
        Ok(())
    }

    /// Upload the whole buffer under a fresh job id and trigger analysis.
    ///
    /// Calling it again clears the previous job and resubmits the buffer as a
    /// new one.
    pub fn analysis(&mut self) -> Result<()> {
        if self.contents.is_empty() {
            return Err(Error::validation_with_context(
                "no content to analyze",
                ErrorContext::new().with_source(format!("{}.analysis", K::ENDPOINT)),
            ));
        }
        if let Some(previous) = self.task_id.clone() {
            self.clear_remote(&previous)?;
            self.task_id = None;
            self.state = TaskState::Buffered;
        }

        let task_id = Uuid::new_v4().simple().to_string();
        let payload = serde_json::to_value(&self.contents)?;
        self.client.api_request(
            Method::POST,
            &self.path("push", &task_id),
            &[],
            Some(&payload),
        )?;
        // Uploaded content lives remotely from here on; clear() must reach it
        // even if the trigger below fails.
        self.task_id = Some(task_id.clone());
        self.state = TaskState::Buffered;

        self.client.api_request(
            Method::GET,
            &self.path("analysis", &task_id),
            &self.options.query(),
            None,
        )?;

        info!(
            kind = K::ENDPOINT,
            task_id = task_id.as_str(),
            contents = self.contents.len(),
            "bosonnlp task submitted"
        );
        self.state = TaskState::Submitted;
        Ok(())
    }

    /// Query the job status once.
    pub fn status(&self) -> Result<TaskStatus> {
        let task_id = self.require_task_id("status")?;
        let body: StatusBody = self
            .client
            .api_request(Method::GET, &self.path("status", task_id), &[], None)?
            .json()?;
        Ok(body.into_status())
    }

    /// Block until the job is done, using the task's poll policy.
    pub fn wait_until_complete(&mut self) -> Result<()> {
        let policy = self.policy;
        self.wait_until_complete_with(&policy)
    }

    /// Block until the job is done or `policy.timeout` elapses.
    ///
    /// A timeout only stops local waiting; the job keeps running remotely.
    pub fn wait_until_complete_with(&mut self, policy: &PollPolicy) -> Result<()> {
        match self.state {
            TaskState::Complete => return Ok(()),
            TaskState::Submitted => {}
            state => {
                return Err(Error::InvalidState {
                    operation: "wait for",
                    state,
                })
            }
        }
        let task_id = self.require_task_id("wait for")?.to_string();

        let client = self.client;
        let clock = client.clock();
        let start = clock.now();
        let polls = poll_until_done(policy, clock, &task_id, || self.status())?;

        info!(
            kind = K::ENDPOINT,
            task_id = task_id.as_str(),
            polls,
            elapsed_ms = clock.now().saturating_duration_since(start).as_millis() as u64,
            "bosonnlp task complete"
        );
        self.state = TaskState::Complete;
        Ok(())
    }

    /// Fetch the computed records. Only valid once the job is complete.
    pub fn result(&self) -> Result<Vec<K::Record>> {
        if self.state != TaskState::Complete {
            return Err(Error::NotReady);
        }
        let task_id = self.require_task_id("fetch results of")?;
        self.client
            .api_request(Method::GET, &self.path("result", task_id), &[], None)?
            .json()
    }

    /// Drop remote job state and the local buffer.
    ///
    /// A job the service no longer knows about is not an error.
    pub fn clear(&mut self) -> Result<()> {
        if let Some(task_id) = self.task_id.as_deref() {
            self.clear_remote(task_id)?;
        }
        self.contents.clear();
        self.task_id = None;
        self.state = TaskState::Empty;
        Ok(())
    }

    fn clear_remote(&self, task_id: &str) -> Result<()> {
        match self
            .client
            .api_request(Method::GET, &self.path("clear", task_id), &[], None)
        {
            Ok(_) => {}
            Err(e) if e.status() == Some(404) => {}
            Err(e) => return Err(e),
        }
        info!(kind = K::ENDPOINT, task_id, "bosonnlp task cleared");
        Ok(())
    }

    fn path(&self, action: &str, task_id: &str) -> String {
        format!("/{}/{}/{}", K::ENDPOINT, action, task_id)
    }

    fn require_task_id(&self, operation: &'static str) -> Result<&str> {
        self.task_id.as_deref().ok_or(Error::InvalidState {
            operation,
            state: self.state,
        })
    }
}
