//! Theme Selector Component
//!
//! Header swatches, one per named theme variant.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::theme::{change_theme, THEME_CHOICES};

/// Clickable swatches switching the active theme
#[component]
pub fn ThemeSelector() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="flexrow-container">
            {THEME_CHOICES.into_iter().map(|theme| {
                let swatch_class = format!("{}-theme theme-selector", theme.name());
                view! {
                    <div
                        class=swatch_class
                        title=theme.name()
                        on:click=move |_| {
                            change_theme(theme);
                            store.theme().set(theme);
                        }
                    ></div>
                }
            }).collect_view()}
        </div>
    }
}
