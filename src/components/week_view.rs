//! Week View Component
//!
//! Renders the seven day buckets produced by the pure grouping function.

use leptos::prelude::*;

use crate::components::DayRow;
use crate::models::Weekday;
use crate::store::{group_by_day, use_app_store, AppStateStoreFields};

/// Grouped-by-day view over the whole collection
#[component]
pub fn WeekView() -> impl IntoView {
    let store = use_app_store();
    let groups = Memo::new(move |_| group_by_day(&store.todos().read()));

    view! {
        <div id="myUnOrdList" class="days-container">
            {Weekday::ALL.into_iter().enumerate().map(|(index, day)| {
                let bucket = Memo::new(move |_| groups.get()[index].1.clone());
                view! { <DayRow day=day bucket=bucket /> }
            }).collect_view()}
        </div>
    }
}
