//! Remote task API client
//!
//! [`TaskApi`] is the seam between the task list and the remote store.
//! [`HttpTaskApi`] talks to the REST endpoints over HTTP:
//!
//! - `GET    {base}/tasks`
//! - `POST   {base}/tasks`
//! - `PUT    {base}/tasks/{id}`
//! - `DELETE {base}/tasks/{id}`
//!
//! Every failure (transport error, non-2xx status, undecodable body) is
//! collapsed into [`TaskError::Request`]. Mutation response bodies are not
//! read: the caller always re-fetches the collection afterwards.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};

use crate::error::{Result, TaskError};
use crate::model::{NewTask, Task, TaskId};

/// Remote task collection
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Fetch the full collection, in server order
    async fn list_tasks(&self) -> Result<Vec<Task>>;
    /// Create a task; the server assigns the id
    async fn create_task(&self, task: &NewTask) -> Result<()>;
    /// Replace the record stored under `task.id`
    async fn update_task(&self, task: &Task) -> Result<()>;
    async fn delete_task(&self, id: &TaskId) -> Result<()>;
}

/// HTTP implementation of [`TaskApi`]
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: Client,
    base: Url,
}

impl HttpTaskApi {
    /// Build a client for `base_url` (e.g. `http://localhost:5000/api`).
    ///
    /// `timeout` is unset by default: requests wait as long as the server does.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base = Url::parse(base_url.trim())
            .map_err(|e| TaskError::config(format!("invalid API URL {:?}: {}", base_url, e)))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(TaskError::config(format!(
                "invalid API URL {:?}: expected an http(s) base",
                base_url
            )));
        }

        let mut builder =
            Client::builder().user_agent(concat!("taskmaster/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TaskError::config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `{base}/tasks` or `{base}/tasks/{id}`; a trailing `/` on the base is tolerated
    fn tasks_url(&self, id: Option<&TaskId>) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("tasks");
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        url
    }

    async fn send(op: &'static str, request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| TaskError::request(op, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TaskError::request(op, format!("HTTP {}", status)));
        }
        Ok(response)
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let url = self.tasks_url(None);
        tracing::debug!(%url, "GET tasks");
        let response = Self::send("list", self.client.get(url)).await?;
        response
            .json::<Vec<Task>>()
            .await
            .map_err(|e| TaskError::request("list", format!("invalid response body: {}", e)))
    }

    async fn create_task(&self, task: &NewTask) -> Result<()> {
        let url = self.tasks_url(None);
        tracing::debug!(%url, title = %task.title, "POST task");
        Self::send("create", self.client.post(url).json(task)).await?;
        Ok(())
    }

    async fn update_task(&self, task: &Task) -> Result<()> {
        let url = self.tasks_url(Some(&task.id));
        tracing::debug!(%url, completed = task.completed, "PUT task");
        Self::send("update", self.client.put(url).json(task)).await?;
        Ok(())
    }

    async fn delete_task(&self, id: &TaskId) -> Result<()> {
        let url = self.tasks_url(Some(id));
        tracing::debug!(%url, "DELETE task");
        Self::send("delete", self.client.delete(url)).await?;
        Ok(())
    }
}

/// Test double over the reference store, with switchable failures
#[cfg(test)]
pub(crate) mod fake {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use super::*;
    use crate::api::MemoryStore;

    #[derive(Debug, Default)]
    pub struct FakeApi {
        pub store: MemoryStore,
        pub fail_list: AtomicBool,
        pub fail_mutations: AtomicBool,
        pub calls: AtomicUsize,
    }

    impl FakeApi {
        pub fn with_titles(titles: &[(&str, bool)]) -> Self {
            let api = Self::default();
            for (title, completed) in titles {
                api.store.create(NewTask {
                    title: title.to_string(),
                    completed: *completed,
                });
            }
            api
        }

        pub fn set_fail_list(&self, fail: bool) {
            self.fail_list.store(fail, Ordering::SeqCst);
        }

        pub fn set_fail_mutations(&self, fail: bool) {
            self.fail_mutations.store(fail, Ordering::SeqCst);
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn enter(&self, op: &'static str, fail: &AtomicBool) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if fail.load(Ordering::SeqCst) {
                return Err(TaskError::request(op, "simulated network error"));
            }
            Ok(())
        }

        fn int_id(id: &TaskId) -> i64 {
            match id {
                TaskId::Int(n) => *n,
                TaskId::Str(s) => s.parse().unwrap_or(-1),
            }
        }
    }

    #[async_trait]
    impl TaskApi for FakeApi {
        async fn list_tasks(&self) -> Result<Vec<Task>> {
            self.enter("list", &self.fail_list)?;
            Ok(self.store.list())
        }

        async fn create_task(&self, task: &NewTask) -> Result<()> {
            self.enter("create", &self.fail_mutations)?;
            self.store.create(task.clone());
            Ok(())
        }

        async fn update_task(&self, task: &Task) -> Result<()> {
            self.enter("update", &self.fail_mutations)?;
            self.store.update(
                Self::int_id(&task.id),
                NewTask {
                    title: task.title.clone(),
                    completed: task.completed,
                },
            );
            Ok(())
        }

        async fn delete_task(&self, id: &TaskId) -> Result<()> {
            self.enter("delete", &self.fail_mutations)?;
            self.store.delete(Self::int_id(id));
            Ok(())
        }
    }
}
