//! One-shot task commands: list / add / toggle / delete
//!
//! Each command performs its operation through the task list client and
//! returns the rendered list for printing.

use std::sync::Arc;

use crate::client::{TaskList, TaskListClient};
use crate::error::{Result, TaskError};
use crate::model::TaskId;
use crate::remote::{HttpTaskApi, TaskApi};
use crate::storage::config::Config;
use crate::view::{FilterMode, TaskView};

/// Build an HTTP-backed client from config and the `--api-url` flag
pub fn build_client(config: &Config, api_url: Option<&str>) -> Result<TaskListClient<HttpTaskApi>> {
    let base_url = config.resolve_base_url(api_url);
    let api = HttpTaskApi::new(&base_url, config.api.timeout())?;
    let state = TaskList::new(config.ui.draft_policy, config.ui.default_filter);
    Ok(TaskListClient::new(Arc::new(api), state))
}

/// Render a view as plain text
pub fn format_view(view: &TaskView<'_>) -> String {
    let mut out = String::new();

    if view.is_empty() {
        out.push_str("No tasks\n");
    } else {
        let id_width = view
            .visible
            .iter()
            .map(|t| t.id.to_string().len())
            .max()
            .unwrap_or(1);
        for task in &view.visible {
            let mark = if task.completed { "x" } else { " " };
            out.push_str(&format!(
                "[{}] {:>width$}  {}\n",
                mark,
                task.id.to_string(),
                task.title,
                width = id_width
            ));
        }
    }

    out.push_str(&format!(
        "{} tasks · {} active · {} completed\n",
        view.total, view.active_count, view.completed_count
    ));
    out
}

pub async fn list<A: TaskApi + ?Sized>(
    client: &mut TaskListClient<A>,
    filter: Option<FilterMode>,
    search: &str,
) -> Result<String> {
    if let Some(filter) = filter {
        client.state_mut().filter_mode = filter;
    }
    client.state_mut().search_term = search.to_string();
    client.refresh().await?;
    Ok(format_view(&client.state().view()))
}

/// Blank titles send nothing and print the local view unchanged
pub async fn add<A: TaskApi + ?Sized>(client: &mut TaskListClient<A>, title: &str) -> Result<String> {
    client.add_task(title).await?;
    Ok(format_view(&client.state().view()))
}

pub async fn toggle<A: TaskApi + ?Sized>(client: &mut TaskListClient<A>, id: &str) -> Result<String> {
    client.refresh().await?;
    let state = client.state();
    let task = state
        .find(&TaskId::parse(id))
        .or_else(|| state.find_by_display(id))
        .cloned()
        .ok_or_else(|| TaskError::not_found(format!("task {}", id)))?;
    client.toggle_task(&task).await?;
    Ok(format_view(&client.state().view()))
}

pub async fn delete<A: TaskApi + ?Sized>(client: &mut TaskListClient<A>, id: &str) -> Result<String> {
    client.delete_task(&TaskId::parse(id)).await?;
    Ok(format_view(&client.state().view()))
}
