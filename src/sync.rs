//! Remote half of the task list operations.
//!
//! Every operation is "send the mutating request, then re-fetch the whole
//! collection". [`execute`] runs that round trip and reports a
//! [`SyncOutcome`]; applying the outcome to local state is
//! [`TaskList::apply`](crate::client::TaskList::apply).
//!
//! Requests are never queued or cancelled. When several round trips overlap
//! their outcomes are applied in arrival order, so the last snapshot to
//! arrive wins even if it was fetched earlier.

use std::sync::mpsc;
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::error::{Result, TaskError};
use crate::model::{NewTask, Task, TaskId};
use crate::remote::TaskApi;

/// An operation that talks to the remote store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Refresh,
    Add { title: String },
    Toggle { task: Task },
    Delete { id: TaskId },
}

impl Mutation {
    /// `None` for blank titles: nothing is sent
    pub fn add(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return None;
        }
        Some(Mutation::Add { title })
    }

    pub fn toggle(task: &Task) -> Self {
        Mutation::Toggle { task: task.clone() }
    }

    pub fn delete(id: &TaskId) -> Self {
        Mutation::Delete { id: id.clone() }
    }

    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::Refresh => "refresh",
            Mutation::Add { .. } => "add",
            Mutation::Toggle { .. } => "toggle",
            Mutation::Delete { .. } => "delete",
        }
    }
}

/// Result of one round trip
#[derive(Debug)]
pub enum SyncOutcome {
    /// The mutating request failed; no refresh was issued
    Rejected(TaskError),
    /// The mutating request succeeded (or there was none); `snapshot` is the
    /// result of the trailing refresh
    Completed { snapshot: Result<Vec<Task>> },
}

impl SyncOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, SyncOutcome::Rejected(_))
    }
}

/// Run the remote part of `mutation`: request, then full fetch
pub async fn execute<A: TaskApi + ?Sized>(api: &A, mutation: &Mutation) -> SyncOutcome {
    let sent = match mutation {
        Mutation::Refresh => Ok(()),
        Mutation::Add { title } => api.create_task(&NewTask::new(title.as_str())).await,
        Mutation::Toggle { task } => api.update_task(&task.toggled()).await,
        Mutation::Delete { id } => api.delete_task(id).await,
    };

    if let Err(err) = sent {
        return SyncOutcome::Rejected(err);
    }

    SyncOutcome::Completed {
        snapshot: api.list_tasks().await,
    }
}

/// A finished round trip, delivered back to the event loop
#[derive(Debug)]
pub struct SyncMessage {
    pub mutation: Mutation,
    pub outcome: SyncOutcome,
}

/// Run `mutation` on the tokio runtime and send the outcome to `tx`.
///
/// The receiver may be gone by the time the request finishes (app quit);
/// the outcome is then dropped.
pub fn spawn<A: TaskApi + ?Sized + 'static>(
    api: Arc<A>,
    mutation: Mutation,
    tx: mpsc::Sender<SyncMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = execute(api.as_ref(), &mutation).await;
        let _ = tx.send(SyncMessage { mutation, outcome });
    })
}
