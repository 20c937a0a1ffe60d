//! Task list state and the client operations that keep it in sync.
//!
//! The local list is never edited optimistically. Each operation sends its
//! request and then replaces the list with a fresh snapshot from the server.
//! Failures are logged and leave the list as it was.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Task, TaskId};
use crate::remote::TaskApi;
use crate::sync::{self, Mutation, SyncOutcome};
use crate::view::{derive_view, FilterMode, TaskView};

/// When the draft input is cleared after submitting an add
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftPolicy {
    /// Clear only once the create request has succeeded
    #[default]
    ClearOnSuccess,
    /// Clear as soon as the add is submitted. A failed add loses the typed
    /// text; kept for parity with older clients.
    ClearOnSubmit,
}

/// Client-side task list state
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    /// Pending input for the next add
    pub draft_title: String,
    pub filter_mode: FilterMode,
    /// Case-insensitive title filter
    pub search_term: String,
    pub draft_policy: DraftPolicy,
}

impl TaskList {
    pub fn new(draft_policy: DraftPolicy, filter_mode: FilterMode) -> Self {
        Self {
            draft_policy,
            filter_mode,
            ..Self::default()
        }
    }

    /// Last snapshot received from the server, in server order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks().iter().find(|t| &t.id == id)
    }

    /// Find by the id's display form (as typed on the command line)
    pub fn find_by_display(&self, raw: &str) -> Option<&Task> {
        let raw = raw.trim();
        self.tasks().iter().find(|t| t.id.to_string() == raw)
    }

    pub fn view(&self) -> TaskView<'_> {
        derive_view(&self.tasks, self.filter_mode, &self.search_term)
    }

    /// Build the add mutation for `title`, or `None` if it is blank.
    ///
    /// Under [`DraftPolicy::ClearOnSubmit`] the draft is cleared here, before
    /// the request is sent.
    pub fn prepare_add(&mut self, title: &str) -> Option<Mutation> {
        let mutation = Mutation::add(title)?;
        if self.draft_policy == DraftPolicy::ClearOnSubmit && self.draft_title == title {
            self.draft_title.clear();
        }
        Some(mutation)
    }

    /// Add mutation for the current draft
    pub fn submit_draft(&mut self) -> Option<Mutation> {
        let title = self.draft_title.clone();
        self.prepare_add(&title)
    }

    /// Apply a finished round trip.
    ///
    /// A successful snapshot replaces the list wholesale. Any failure is
    /// logged, leaves the list untouched and is handed back to the caller.
    pub fn apply(&mut self, mutation: &Mutation, outcome: SyncOutcome) -> Result<()> {
        match outcome {
            SyncOutcome::Rejected(err) => {
                tracing::error!(action = mutation.name(), error = %err, "task request failed");
                Err(err)
            }
            SyncOutcome::Completed { snapshot } => {
                // create 已成功：即使随后的 refresh 失败也清空草稿
                if let Mutation::Add { title } = mutation {
                    if self.draft_policy == DraftPolicy::ClearOnSuccess
                        && self.draft_title == *title
                    {
                        self.draft_title.clear();
                    }
                }

                match snapshot {
                    Ok(tasks) => {
                        tracing::debug!(action = mutation.name(), count = tasks.len(), "task list refreshed");
                        self.tasks = tasks;
                        Ok(())
                    }
                    Err(err) => {
                        tracing::error!(action = mutation.name(), error = %err, "task refresh failed");
                        Err(err)
                    }
                }
            }
        }
    }
}

/// Task list bound to a remote store
pub struct TaskListClient<A: TaskApi + ?Sized> {
    api: Arc<A>,
    state: TaskList,
}

impl<A: TaskApi + ?Sized> TaskListClient<A> {
    pub fn new(api: Arc<A>, state: TaskList) -> Self {
        Self { api, state }
    }

    pub fn api(&self) -> Arc<A> {
        Arc::clone(&self.api)
    }

    pub fn state(&self) -> &TaskList {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut TaskList {
        &mut self.state
    }

    async fn run(&mut self, mutation: Mutation) -> Result<()> {
        let outcome = sync::execute(self.api.as_ref(), &mutation).await;
        self.state.apply(&mutation, outcome)
    }

    /// Replace the local list with the server's collection
    pub async fn refresh(&mut self) -> Result<()> {
        self.run(Mutation::Refresh).await
    }

    /// Create a task titled `title`. Blank titles are ignored without any request.
    pub async fn add_task(&mut self, title: &str) -> Result<()> {
        let Some(mutation) = self.state.prepare_add(title) else {
            return Ok(());
        };
        self.run(mutation).await
    }

    /// Flip `completed` on the server, keeping every other field
    pub async fn toggle_task(&mut self, task: &Task) -> Result<()> {
        self.run(Mutation::toggle(task)).await
    }

    pub async fn delete_task(&mut self, id: &TaskId) -> Result<()> {
        self.run(Mutation::delete(id)).await
    }
}
