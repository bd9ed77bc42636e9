//! Day Row Component
//!
//! Colored heading for one weekday plus the tasks filed under it.

use leptos::prelude::*;

use crate::components::TodoCard;
use crate::models::{TodoItem, Weekday};

/// One weekday bucket: heading in the day's color, tasks in arrival order
#[component]
pub fn DayRow(day: Weekday, bucket: Memo<Vec<TodoItem>>) -> impl IntoView {
    view! {
        <div class="day-row">
            <h2 style=format!("color: {};", day.color())>{day.name()}</h2>
            <ul class="todo-list">
                <For
                    each=move || bucket.get()
                    key=|item| (item.id, item.completed, item.text.clone())
                    children=move |item| view! { <TodoCard item=item /> }
                />
            </ul>
        </div>
    }
}
