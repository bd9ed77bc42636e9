//! Collection Service Bindings
//!
//! One async function per REST endpoint of the external collection service.
//! All bodies and responses are JSON; errors map into [`SyncError`].

use gloo_net::http::Request;

use crate::error::SyncError;
use crate::models::{NewTodo, TodoItem};

/// Base URL of the collection service. Overridable at compile time with
/// `TODO_API_BASE`.
pub const BASE_URL: &str = match option_env!("TODO_API_BASE") {
    Some(url) => url,
    None => "http://localhost:5000",
};

fn todos_url() -> String {
    format!("{}/todos", BASE_URL)
}

fn todo_url(id: u32) -> String {
    format!("{}/todos/{}", BASE_URL, id)
}

/// Checks the HTTP status before the body is interpreted.
fn ensure_ok(response: &gloo_net::http::Response) -> Result<(), SyncError> {
    if response.ok() {
        Ok(())
    } else {
        Err(SyncError::Network(format!(
            "{} {}",
            response.status(),
            response.status_text()
        )))
    }
}

/// GET /todos — the full collection.
pub async fn fetch_todos() -> Result<Vec<TodoItem>, SyncError> {
    let response = Request::get(&todos_url()).send().await?;
    ensure_ok(&response)?;
    Ok(response.json().await?)
}

/// POST /todos — returns the created item with its server-assigned id.
pub async fn create_todo(new_todo: &NewTodo) -> Result<TodoItem, SyncError> {
    let response = Request::post(&todos_url()).json(new_todo)?.send().await?;
    ensure_ok(&response)?;
    Ok(response.json().await?)
}

/// PUT /todos/:id — full replacement of one item.
pub async fn update_todo(item: &TodoItem) -> Result<TodoItem, SyncError> {
    let response = Request::put(&todo_url(item.id)).json(item)?.send().await?;
    ensure_ok(&response)?;
    Ok(response.json().await?)
}

/// DELETE /todos/:id — no response body required.
pub async fn delete_todo(id: u32) -> Result<(), SyncError> {
    let response = Request::delete(&todo_url(id)).send().await?;
    ensure_ok(&response)
}
