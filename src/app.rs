//! FocusFlow App
//!
//! Root layout: header, progress, creation form, filtered task list, footer.

use leptos::prelude::*;

use crate::components::{FilterBar, ProgressHeader, StudyForm, TaskItem, ThemeToggle};
use crate::context::AppContext;
use crate::dates::{utc_date, utc_year};
use crate::models::NewTask;
use crate::platform::Services;
use crate::storage::Persistence;
use crate::task_store::TaskStore;

#[component]
pub fn App() -> impl IntoView {
    // Reads persisted tasks and applies a stored dark theme before first render
    let store = TaskStore::load(Persistence::browser(), Services::browser());
    let ctx = AppContext::new(store);
    provide_context(ctx);

    let now = ctx.now_millis();
    let visible = Memo::new(move |_| ctx.visible_tasks());

    view! {
        <div class="page">
            <div class="container">
                <header class="app-header">
                    <div class="brand">
                        <div class="brand-mark">"✚"</div>
                        <div>
                            <h1>"FocusFlow"</h1>
                            <p class="tagline">"GDG Campus Study Planner"</p>
                        </div>
                    </div>
                    <ThemeToggle
                        theme=Signal::derive(move || ctx.theme())
                        on_toggle=move |_: ()| ctx.toggle_theme()
                    />
                </header>

                <ProgressHeader progress=Signal::derive(move || ctx.progress()) />

                <StudyForm today=utc_date(now) on_add=move |task: NewTask| ctx.add_task(task) />

                <FilterBar />

                <div class="task-list">
                    <Show
                        when=move || !visible.get().is_empty()
                        fallback=|| view! {
                            <div class="empty-state">
                                <p>"No tasks found in this category."</p>
                            </div>
                        }
                    >
                        <For
                            each=move || visible.get()
                            key=|task| (task.id.clone(), task.completed)
                            children=move |task| view! {
                                <TaskItem
                                    task=task
                                    on_toggle=move |id: String| ctx.toggle_task(&id)
                                    on_delete=move |id: String| ctx.delete_task(&id)
                                />
                            }
                        />
                    </Show>
                </div>

                <footer class="app-footer">
                    <p>{format!("© {} FocusFlow • GDG Campus Event Hackathon Demo", utc_year(now))}</p>
                </footer>
            </div>
        </div>
    }
}
