//! New Todo Form Component
//!
//! Text input plus day select for filing a task under a weekday.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::models::Weekday;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::sync;

/// Form for creating new tasks
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_text, set_new_text) = signal(String::new());
    let (day, set_day) = signal(Weekday::ALL[0]);

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        let selected_day = day.get();

        spawn_local(async move {
            match sync::create(store, text, selected_day).await {
                Ok(()) => {
                    set_new_text.set(String::new());
                    ctx.clear_error();
                }
                Err(err) => ctx.report(&err),
            }
        });
    };

    let theme = move || store.theme().get();

    view! {
        <div id="form">
            <form on:submit=create_todo>
                <input
                    class=move || format!("{} todo-input", theme().input_class())
                    type="text"
                    placeholder="Ajouter une tâche à faire cette semaine"
                    prop:value=move || new_text.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_text.set(input.value());
                    }
                />
                <select
                    class=move || format!("{} todo-select", theme().input_class())
                    prop:value=move || day.get().name().to_string()
                    on:change=move |ev| {
                        let target = ev.target().unwrap();
                        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                        if let Some(picked) = Weekday::from_name(&select.value()) {
                            set_day.set(picked);
                        }
                    }
                >
                    {Weekday::ALL.into_iter().map(|d| view! {
                        <option value=d.name()>{d.name()}</option>
                    }).collect_view()}
                </select>
                <button class=move || format!("todo-btn {}", theme().button_class()) type="submit">
                    "Ajouter!"
                </button>
            </form>
        </div>
    }
}
