//! Todo Card Component
//!
//! One task row with its day circle, check button and delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::models::TodoItem;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::sync;

/// A single task card inside a day bucket
#[component]
pub fn TodoCard(item: TodoItem) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = item.id;
    let completed = item.completed;
    let color = item.day.color();
    let text = item.text.clone();

    let toggle = move |_| {
        spawn_local(async move {
            match sync::toggle_completed(store, id).await {
                Ok(()) => ctx.clear_error(),
                Err(err) => ctx.report(&err),
            }
        });
    };

    let delete = move |_| {
        spawn_local(async move {
            match sync::remove(store, id).await {
                Ok(()) => ctx.clear_error(),
                Err(err) => ctx.report(&err),
            }
        });
    };

    let theme = move || store.theme().get();

    view! {
        <div class=move || theme().todo_class(completed)>
            <li class="todo-item">
                <span
                    class="todo-day-circle"
                    style=format!("background-color: {};", color)
                ></span>
                {text}
            </li>
            <button class=move || format!("check-btn {}", theme().button_class()) on:click=toggle>
                "✓"
            </button>
            <button class=move || format!("delete-btn {}", theme().button_class()) on:click=delete>
                "🗑"
            </button>
        </div>
    }
}
