//! Filter Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::FilterMode;

/// List heading plus All / Pending / Completed buttons
#[component]
pub fn FilterBar() -> impl IntoView {
    let filter = use_app_context().filter;

    view! {
        <div class="list-header">
            <h2 class="list-title">{move || filter.get().heading()}</h2>
            <div class="filter-group">
                {FilterMode::ALL.iter().map(|&mode| {
                    view! {
                        <button
                            class=move || if filter.get() == mode { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| filter.set(mode)
                        >
                            {mode.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
