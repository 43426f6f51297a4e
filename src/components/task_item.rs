//! Task Item Component
//!
//! One row of the task list.

use leptos::prelude::*;

use crate::dates::short_date;
use crate::models::Task;

/// A single task row. Rows are keyed on (id, completed) by the list, so the
/// task is rendered as a fixed value.
#[component]
pub fn TaskItem(
    task: Task,
    #[prop(into)] on_toggle: Callback<String>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let toggle_id = task.id.clone();
    let delete_id = task.id.clone();
    let completed = task.completed;
    let when = short_date(&task.date);
    let hours = format!("{} - {}", task.start_time, task.end_time);

    view! {
        <div class=if completed { "task-row completed" } else { "task-row" }>
            <button
                class="check-btn"
                aria-label=if completed { "Mark as pending" } else { "Mark as done" }
                on:click=move |_| on_toggle.run(toggle_id.clone())
            >
                {if completed { "●" } else { "○" }}
            </button>

            <div class="task-body">
                <div class="task-meta">
                    <span class=task.priority.badge_class()>{task.priority.as_str()}</span>
                    <span class="task-subject">{task.subject}</span>
                </div>
                <h3 class="task-title">{task.title}</h3>
                <div class="task-schedule">
                    <span class="task-date">{when}</span>
                    <span class="task-time">{hours}</span>
                </div>
            </div>

            <button
                class="delete-btn"
                aria-label="Delete task"
                on:click=move |_| on_delete.run(delete_id.clone())
            >
                "×"
            </button>
        </div>
    }
}
