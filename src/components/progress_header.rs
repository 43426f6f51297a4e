//! Progress Header Component
//!
//! Completion counter, bar and encouragement line.

use leptos::prelude::*;

use crate::progress::Progress;

#[component]
pub fn ProgressHeader(#[prop(into)] progress: Signal<Progress>) -> impl IntoView {
    view! {
        <section class="card progress-card">
            <div class="progress-header">
                <h2>"Your Progress"</h2>
                <span class="progress-count">
                    {move || {
                        let p = progress.get();
                        format!("{}/{} tasks finished", p.completed, p.total)
                    }}
                </span>
            </div>
            <div class="progress-track">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%;", progress.get().percentage)
                ></div>
            </div>
            <p class="progress-message">{move || progress.get().encouragement().message()}</p>
        </section>
    }
}
