//! Reference task API
//!
//! An in-memory implementation of the remote task API the client consumes.
//! Backs `taskmaster serve` for local development and the HTTP tests.

pub mod handlers;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

pub use state::MemoryStore;

/// Default port for `taskmaster serve`
pub const DEFAULT_PORT: u16 = 5000;

/// Default route prefix, matching the client's default base URL
pub const DEFAULT_PREFIX: &str = "/api";

/// Create the task routes (without prefix)
pub fn create_api_router(store: Arc<MemoryStore>) -> Router {
    Router::new()
        .route(
            "/tasks",
            get(handlers::tasks::list_tasks).post(handlers::tasks::create_task),
        )
        .route(
            "/tasks/{id}",
            put(handlers::tasks::update_task).delete(handlers::tasks::delete_task),
        )
        .with_state(store)
}

/// Create the full router: task routes nested under `prefix`, permissive CORS
pub fn create_router(store: Arc<MemoryStore>, prefix: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_router = create_api_router(store);
    let prefix = prefix.trim_matches('/');

    let router = if prefix.is_empty() {
        // axum 不支持在根路径 nest
        api_router
    } else {
        Router::new().nest(&format!("/{}", prefix), api_router)
    };

    router.layer(cors)
}

/// Start the reference API server and serve until the process exits
pub async fn start_server(host: &str, port: u16, prefix: &str) -> std::io::Result<()> {
    let app = create_router(Arc::new(MemoryStore::new()), prefix);
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local = listener.local_addr()?;
    let tasks_path = match prefix.trim_matches('/') {
        "" => "/tasks".to_string(),
        p => format!("/{}/tasks", p),
    };
    tracing::info!(%local, path = %tasks_path, "task API listening");
    println!("Task API: http://{}{}", local, tasks_path);

    axum::serve(listener, app)
        .await
        .map_err(std::io::Error::other)
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_crud_status_codes() {
        let store = Arc::new(MemoryStore::new());
        let base = test_support::spawn(store.clone(), "/api").await;
        let http = reqwest::Client::new();

        let resp = http
            .post(format!("{}/tasks", base))
            .json(&json!({"title": "Buy milk", "completed": false}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
        let created: Value = resp.json().await.unwrap();
        assert_eq!(created, json!({"id": 1, "title": "Buy milk", "completed": false}));

        let resp = http
            .put(format!("{}/tasks/1", base))
            .json(&json!({"id": 1, "title": "Buy milk", "completed": true}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        assert!(store.list()[0].completed);

        let listed: Value = http
            .get(format!("{}/tasks", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(listed, json!([{"id": 1, "title": "Buy milk", "completed": true}]));

        let resp = http
            .delete(format!("{}/tasks/1", base))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NO_CONTENT);
        assert!(store.is_empty());

        // unknown ids still succeed
        let resp = http
            .delete(format!("{}/tasks/1", base))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_non_integer_id_is_not_found() {
        let base = test_support::spawn(Arc::new(MemoryStore::new()), "/api").await;
        let http = reqwest::Client::new();

        let resp = http
            .delete(format!("{}/tasks/abc", base))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

        let resp = http
            .put(format!("{}/tasks/abc", base))
            .json(&json!({"title": "x", "completed": false}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_root_prefix() {
        let store = Arc::new(MemoryStore::new());
        store.create(crate::model::NewTask::new("a"));
        let base = test_support::spawn(store, "/").await;

        let listed: Value = reqwest::get(format!("{}tasks", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(listed.as_array().map(|a| a.len()), Some(1));
    }
}
