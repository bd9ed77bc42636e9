//! Weekly To-Do App
//!
//! Root component: owns the store, restores the theme, loads the collection
//! on mount and lays out the page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{NewTodoForm, ThemeSelector, WeekView};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};
use crate::sync;
use crate::theme::{apply_theme, load_theme};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (error, set_error) = signal::<Option<String>>(None);
    let ctx = AppContext::new((error, set_error));
    provide_context(ctx);

    // Restore the saved theme and fetch the collection on mount. The theme
    // side effects replay before anything renders under the wrong style.
    Effect::new(move |_| {
        let saved = load_theme();
        store.theme().set(saved);
        apply_theme(saved);

        spawn_local(async move {
            if let Err(err) = sync::load_all(store).await {
                ctx.report(&err);
            }
        });
    });

    let now = String::from(js_sys::Date::new_0().to_locale_string(
        "default",
        &wasm_bindgen::JsValue::UNDEFINED,
    ));

    view! {
        <div>
            <header id="header">
                <ThemeSelector />
                <h1 id="title">
                    "Albert WT"
                    <div id="border"></div>
                </h1>
            </header>

            <Show when=move || error.get().is_some()>
                <div class="error-banner">
                    <span>{move || error.get().unwrap_or_default()}</span>
                    <button class="dismiss-btn" on:click=move |_| ctx.clear_error()>
                        "×"
                    </button>
                </div>
            </Show>

            <NewTodoForm />

            <div class="version">
                <p>
                    <span id="datetime">{now}</span>
                </p>
            </div>

            <WeekView />
        </div>
    }
}
