//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. List transitions
//! are plain functions over `Vec<TodoItem>` so they stay testable without a
//! reactive runtime; the `store_*` wrappers apply them through the store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{TodoItem, Weekday};
use crate::theme::Theme;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Local cache of the server collection, in arrival order
    pub todos: Vec<TodoItem>,
    /// Active visual theme
    pub theme: Theme,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Pure List Transitions
// ========================

/// Append a server-confirmed item.
pub fn apply_add(todos: &mut Vec<TodoItem>, item: TodoItem) {
    todos.push(item);
}

/// Replace the item with the same id, if present.
pub fn apply_replace(todos: &mut [TodoItem], updated: TodoItem) {
    if let Some(slot) = todos.iter_mut().find(|t| t.id == updated.id) {
        *slot = updated;
    }
}

/// Remove an item by id, returning it with its prior position so a failed
/// delete can be rolled back.
pub fn apply_remove(todos: &mut Vec<TodoItem>, id: u32) -> Option<(usize, TodoItem)> {
    let index = todos.iter().position(|t| t.id == id)?;
    Some((index, todos.remove(index)))
}

/// Reinsert an item at its prior position (clamped to the current length).
pub fn apply_insert_at(todos: &mut Vec<TodoItem>, index: usize, item: TodoItem) {
    todos.insert(index.min(todos.len()), item);
}

/// Copy of `item` with the completion flag inverted — the PUT payload for a
/// toggle.
pub fn toggled(item: &TodoItem) -> TodoItem {
    TodoItem {
        completed: !item.completed,
        ..item.clone()
    }
}

/// Partition the flat list into the seven day buckets, in enumeration order,
/// preserving arrival order within each bucket. Pure and idempotent.
pub fn group_by_day(todos: &[TodoItem]) -> Vec<(Weekday, Vec<TodoItem>)> {
    Weekday::ALL
        .into_iter()
        .map(|day| {
            let bucket = todos.iter().filter(|t| t.day == day).cloned().collect();
            (day, bucket)
        })
        .collect()
}

// ========================
// Store Helper Functions
// ========================

/// Add a todo to the store
pub fn store_add_todo(store: &AppStore, item: TodoItem) {
    apply_add(&mut store.todos().write(), item);
}

/// Replace a todo in the store by id
pub fn store_replace_todo(store: &AppStore, updated: TodoItem) {
    apply_replace(&mut store.todos().write(), updated);
}

/// Remove a todo from the store by id, keeping rollback information
pub fn store_remove_todo(store: &AppStore, id: u32) -> Option<(usize, TodoItem)> {
    apply_remove(&mut store.todos().write(), id)
}

/// Reinsert a todo at its prior position
pub fn store_insert_todo_at(store: &AppStore, index: usize, item: TodoItem) {
    apply_insert_at(&mut store.todos().write(), index, item);
}

/// Replace the whole list with the server collection
pub fn store_set_todos(store: &AppStore, todos: Vec<TodoItem>) {
    *store.todos().write() = todos;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, text: &str, day: Weekday, completed: bool) -> TodoItem {
        TodoItem {
            id,
            text: text.to_string(),
            completed,
            day,
        }
    }

    fn sample_week() -> Vec<TodoItem> {
        vec![
            item(1, "Courses", Weekday::Lundi, false),
            item(2, "Sport", Weekday::Mercredi, true),
            item(3, "Lessive", Weekday::Lundi, false),
            item(4, "Appeler maman", Weekday::Dimanche, false),
        ]
    }

    #[test]
    fn test_group_covers_all_seven_days() {
        let groups = group_by_day(&sample_week());
        assert_eq!(groups.len(), 7);
        for (expected, (day, _)) in Weekday::ALL.into_iter().zip(&groups) {
            assert_eq!(expected, *day);
        }
    }

    #[test]
    fn test_group_partitions_exactly() {
        let todos = sample_week();
        let groups = group_by_day(&todos);
        let total: usize = groups.iter().map(|(_, bucket)| bucket.len()).sum();
        assert_eq!(total, todos.len());
        for (day, bucket) in &groups {
            assert!(bucket.iter().all(|t| t.day == *day));
        }
    }

    #[test]
    fn test_group_preserves_arrival_order() {
        let groups = group_by_day(&sample_week());
        let lundi = &groups[0].1;
        assert_eq!(lundi.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_group_of_empty_list_is_seven_empty_buckets() {
        let groups = group_by_day(&[]);
        assert_eq!(groups.len(), 7);
        assert!(groups.iter().all(|(_, bucket)| bucket.is_empty()));
    }

    #[test]
    fn test_group_is_idempotent() {
        let todos = sample_week();
        let first = group_by_day(&todos);
        let second = group_by_day(&todos);
        assert_eq!(first, second);
    }

    #[test]
    fn test_toggled_twice_restores_original() {
        let original = item(7, "Vélo", Weekday::Samedi, false);
        let twice = toggled(&toggled(&original));
        assert_eq!(twice, original);
    }

    #[test]
    fn test_apply_replace_swaps_matching_id_only() {
        let mut todos = sample_week();
        apply_replace(&mut todos, item(2, "Sport", Weekday::Mercredi, false));
        assert!(!todos[1].completed);
        assert_eq!(todos.len(), 4);
        assert_eq!(todos[0].id, 1);
    }

    #[test]
    fn test_apply_replace_ignores_unknown_id() {
        let mut todos = sample_week();
        let before = todos.clone();
        apply_replace(&mut todos, item(99, "Fantôme", Weekday::Jeudi, true));
        assert_eq!(todos, before);
    }

    #[test]
    fn test_apply_remove_returns_prior_position() {
        let mut todos = sample_week();
        let (index, removed) = apply_remove(&mut todos, 3).expect("id 3 exists");
        assert_eq!(index, 2);
        assert_eq!(removed.text, "Lessive");
        assert_eq!(todos.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2, 4]);
    }

    #[test]
    fn test_apply_remove_unknown_id_is_noop() {
        let mut todos = sample_week();
        assert!(apply_remove(&mut todos, 99).is_none());
        assert_eq!(todos.len(), 4);
    }

    #[test]
    fn test_remove_then_insert_at_restores_list() {
        let mut todos = sample_week();
        let before = todos.clone();
        let (index, removed) = apply_remove(&mut todos, 2).expect("id 2 exists");
        apply_insert_at(&mut todos, index, removed);
        assert_eq!(todos, before);
    }

    #[test]
    fn test_insert_at_clamps_past_end() {
        let mut todos = vec![item(1, "Seul", Weekday::Mardi, false)];
        apply_insert_at(&mut todos, 10, item(2, "Fin", Weekday::Mardi, false));
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[1].id, 2);
    }
}
