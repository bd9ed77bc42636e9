//! Collection Synchronizer
//!
//! Keeps the local store consistent with the collection service. Mutations
//! are apply-then-confirm: the store changes optimistically, and a failed
//! request rolls the change back before the error is surfaced. No retries,
//! no offline queue.

use leptos::prelude::*;

use crate::api;
use crate::error::SyncError;
use crate::models::{NewTodo, TodoItem, Weekday};
use crate::store::{
    store_add_todo, store_insert_todo_at, store_remove_todo, store_replace_todo, store_set_todos,
    toggled, AppStateStoreFields, AppStore,
};

/// Reject empty or whitespace-only task text before anything is sent.
pub fn validate_text(text: &str) -> Result<(), SyncError> {
    if text.trim().is_empty() {
        Err(SyncError::empty_text())
    } else {
        Ok(())
    }
}

/// Fetch the full collection and replace the local list. On failure the
/// last known-good list is kept.
pub async fn load_all(store: AppStore) -> Result<(), SyncError> {
    let todos = api::fetch_todos().await?;
    web_sys::console::log_1(&format!("[SYNC] loaded {} todos", todos.len()).into());
    store_set_todos(&store, todos);
    Ok(())
}

/// Create a task on the server and append the confirmed item (with its
/// assigned id) to the local list. Validation failures never mutate the
/// collection.
pub async fn create(store: AppStore, text: String, day: Weekday) -> Result<(), SyncError> {
    validate_text(&text)?;
    let created = api::create_todo(&NewTodo {
        text,
        completed: false,
        day,
    })
    .await?;
    web_sys::console::log_1(&format!("[SYNC] created todo #{}", created.id).into());
    store_add_todo(&store, created);
    Ok(())
}

/// Invert an item's completion flag locally, then confirm with a PUT of the
/// full item. A failed request reverts the flip.
pub async fn toggle_completed(store: AppStore, id: u32) -> Result<(), SyncError> {
    let payload: Option<TodoItem> = store.todos().read().iter().find(|t| t.id == id).map(toggled);
    let Some(payload) = payload else {
        // Unknown id: the item was already removed, nothing to toggle.
        return Ok(());
    };

    store_replace_todo(&store, payload.clone());
    match api::update_todo(&payload).await {
        Ok(confirmed) => {
            store_replace_todo(&store, confirmed);
            Ok(())
        }
        Err(err) => {
            web_sys::console::log_1(&format!("[SYNC] toggle #{} failed, reverting", id).into());
            store_replace_todo(&store, toggled(&payload));
            Err(err)
        }
    }
}

/// Remove an item locally, then confirm with a DELETE. A failed request
/// reinserts the item at its prior position.
pub async fn remove(store: AppStore, id: u32) -> Result<(), SyncError> {
    let Some((index, removed)) = store_remove_todo(&store, id) else {
        return Ok(());
    };

    match api::delete_todo(id).await {
        Ok(()) => {
            web_sys::console::log_1(&format!("[SYNC] removed todo #{}", id).into());
            Ok(())
        }
        Err(err) => {
            web_sys::console::log_1(&format!("[SYNC] delete #{} failed, restoring", id).into());
            store_insert_todo_at(&store, index, removed);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_rejected() {
        assert!(matches!(validate_text(""), Err(SyncError::Validation(_))));
    }

    #[test]
    fn test_whitespace_only_text_is_rejected() {
        assert!(matches!(
            validate_text("   \t  "),
            Err(SyncError::Validation(_))
        ));
    }

    #[test]
    fn test_nonempty_text_passes() {
        assert!(validate_text("Buy milk").is_ok());
        assert!(validate_text("  padded  ").is_ok());
    }
}
